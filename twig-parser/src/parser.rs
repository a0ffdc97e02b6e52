use crate::ast::{DeclarationKind, Node};
use crate::lexer::Token;
use logos::{Lexer, Logos};
use std::mem;
use twig_source::{Source, SyntaxError};

mod expr;
mod stmt;

pub struct Parser<'a> {
    /// Cached token for peeking.
    current_token: Token,
    /// The token consumed before `current_token`. Used for error recovery.
    previous_token: Token,
    /// Number of tokens consumed so far. Used for error recovery.
    consumed: usize,
    lexer: Lexer<'a, Token>,
    /// Source code
    source: &'a Source<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a Source<'a>) -> Self {
        let mut lexer = Token::lexer(source.content);
        Self {
            current_token: lexer.next().unwrap_or(Token::Eof),
            previous_token: Token::Eof,
            consumed: 0,
            lexer,
            source,
        }
    }
}

impl<'a> Parser<'a> {
    /// Parses a whole program until `Eof`.
    /// Errors are reported to the [`Source`]; the returned tree then contains [`Node::Error`] placeholders.
    pub fn parse_program(&mut self) -> Node {
        let mut body = Vec::new();

        while self.current_token != Token::Eof {
            if self.eat(Token::Semi) {
                continue; // empty statement
            }

            let errors_before = self.source.errors.len();
            let consumed_before = self.consumed;
            body.push(self.parse_declaration());
            if self.source.errors.len() > errors_before {
                self.synchronize(consumed_before);
            }
        }

        Node::program(body)
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    fn next(&mut self) -> Token {
        let token = self.lexer.next().unwrap_or(Token::Eof);
        self.previous_token = mem::replace(&mut self.current_token, token.clone());
        self.consumed += 1;
        token
    }

    /// Predicate that tests whether the next token has the same discriminant and eats the next token if yes as a side effect.
    fn eat(&mut self, tok: Token) -> bool {
        if mem::discriminant(&self.current_token) == mem::discriminant(&tok) {
            self.next(); // eat token
            true
        } else {
            false
        }
    }

    fn expect(&mut self, tok: Token, what: &str) {
        if !self.eat(tok) {
            self.error(format!("Expected {}", what));
        }
    }

    /// Raises an unexpected token error.
    fn unexpected(&mut self) {
        self.error("Unexpected token");
    }

    fn error(&mut self, message: impl ToString) {
        let span = if self.current_token == Token::Eof {
            let end = self.source.content.len();
            end..end
        } else {
            self.lexer.span()
        };
        self.source.errors.add_error(SyntaxError::new(message, span))
    }

    /// Skips tokens until just after the next `;`.
    /// Does nothing if the failed statement (which started after `consumed_before` tokens) already ended on a `;`.
    fn synchronize(&mut self, consumed_before: usize) {
        if self.consumed > consumed_before && self.previous_token == Token::Semi {
            return;
        }
        while self.current_token != Token::Eof {
            if self.eat(Token::Semi) {
                return;
            }
            self.next();
        }
    }
}
