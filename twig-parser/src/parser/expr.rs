use super::*;
use crate::stack::ensure_sufficient_stack;

impl<'a> Parser<'a> {
    /* Expressions */
    /// Parses any expression.
    /// This is equivalent to calling [`Self::parse_expr_bp`] with `min_bp = 0`.
    pub fn parse_expr(&mut self) -> Node {
        self.parse_expr_bp(0) // 0 to accept any expression
    }

    /// Parses a primary (atom) expression.
    fn parse_primary_expr(&mut self) -> Node {
        match self.current_token {
            Token::NumberLit(_) | Token::StringLit(_) => self.parse_literal_expr(),
            Token::Identifier(_) => self.parse_identifier_or_call_expr(),
            Token::OpenParen => {
                self.next();
                let expr = self.parse_expr();
                self.expect(Token::CloseParen, "`)`");
                expr
            }
            _ => {
                self.unexpected();
                // Leave delimiters in place so the enclosing rule can still match them.
                match self.current_token {
                    Token::Semi | Token::CloseParen | Token::Comma | Token::Eof => {}
                    _ => {
                        self.next();
                    }
                }
                Node::Error
            }
        }
    }

    /// Parses an expression with the specified `min_bp`.
    /// To parse any expression use, [`Self::parse_expr`].
    fn parse_expr_bp(&mut self, min_bp: u8) -> Node {
        ensure_sufficient_stack(|| self.parse_expr_bp_inner(min_bp))
    }

    fn parse_expr_bp_inner(&mut self, min_bp: u8) -> Node {
        let mut lhs = self.parse_primary_expr();

        loop {
            let (l_bp, r_bp) = match self.current_token.binop_bp() {
                Some(bp) => bp,
                None => break, // not a valid binop, stop parsing
            };
            if l_bp < min_bp {
                break; // less than the min_bp, stop parsing
            }

            // self.current_token is a valid binop
            let operator = match self.current_token.binop_str() {
                Some(operator) => operator,
                None => break,
            };
            self.next();

            let rhs = self.parse_expr_bp(r_bp);

            lhs = Node::binary(lhs, operator, rhs);
        }

        lhs
    }

    /* Expressions.Literals */
    /// Parses a literal expression.
    /// A literal can be either a number literal or a string literal. Both keep their raw text.
    fn parse_literal_expr(&mut self) -> Node {
        let val = match self.current_token {
            Token::NumberLit(ref raw) | Token::StringLit(ref raw) => Node::literal(raw.clone()),
            _ => {
                self.unexpected();
                Node::Error
            }
        };
        if val != Node::Error {
            self.next(); // eat parsed token if not error
        }
        val
    }

    /* Expressions.Identifier */
    /// Parses an identifier or a call expression.
    /// Only bare identifiers can be called.
    fn parse_identifier_or_call_expr(&mut self) -> Node {
        let ident = match self.current_token.clone() {
            Token::Identifier(ident) => {
                self.next();
                ident
            }
            _ => {
                self.unexpected();
                return Node::Error;
            }
        };

        if self.eat(Token::OpenParen) {
            // parse call expression
            let mut args = Vec::new();

            if !self.eat(Token::CloseParen) {
                loop {
                    args.push(self.parse_expr());

                    if self.eat(Token::CloseParen) {
                        break;
                    } else if !self.eat(Token::Comma) {
                        self.unexpected();
                        break;
                    }
                }
            }

            Node::call(Node::identifier(ident), args)
        } else {
            // parse identifier expression
            Node::identifier(ident)
        }
    }
}
