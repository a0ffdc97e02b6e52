use logos::Logos;

#[derive(Debug, Logos, Clone, PartialEq)]
pub enum Token {
    // literals
    // Literals keep their raw text. Conversion to a value happens when the tree is walked.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    NumberLit(String),
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| lex.slice().to_string())]
    #[regex(r#"'([^'\\\n]|\\.)*'"#, |lex| lex.slice().to_string())]
    StringLit(String),

    // identifiers
    #[regex("[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // binary operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    // - assignment (only valid inside a declarator)
    #[token("=")]
    Equals,

    // punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,

    // keywords
    #[token("let")]
    Let,
    #[token("const")]
    Const,
    #[token("var")]
    Var,

    // misc
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    #[regex(r"//[^\n]*", logos::skip)] // single line comments
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", logos::skip)] // block comments
    #[error]
    Error,

    /// Only generated in parse phase when `lexer.next()` returns `None`.
    Eof,
}

impl Token {
    /// Returns the binary binding power or `None` if invalid binop token.
    /// Binding power `0` and `1` is reserved for accepting any expression.
    pub fn binop_bp(&self) -> Option<(u8, u8)> {
        match self {
            /* Additive */
            Token::Plus | Token::Minus => Some((8, 9)),
            /* Multiplicative */
            Token::Asterisk | Token::Slash | Token::Percent => Some((10, 11)),
            _ => None,
        }
    }

    /// Returns the source text of a binary operator token.
    pub fn binop_str(&self) -> Option<&'static str> {
        match self {
            Token::Plus => Some("+"),
            Token::Minus => Some("-"),
            Token::Asterisk => Some("*"),
            Token::Slash => Some("/"),
            Token::Percent => Some("%"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(source: &str) -> Vec<Token> {
        Token::lexer(source).collect()
    }

    #[test]
    fn test_declaration() {
        assert_eq!(
            tokens("let a = 90;"),
            vec![
                Token::Let,
                Token::Identifier("a".to_string()),
                Token::Equals,
                Token::NumberLit("90".to_string()),
                Token::Semi,
            ]
        );
    }

    #[test]
    fn test_literals_keep_raw_text() {
        assert_eq!(
            tokens(r#"2.5 "nnamdi" 'single' "esc\"aped""#),
            vec![
                Token::NumberLit("2.5".to_string()),
                Token::StringLit(r#""nnamdi""#.to_string()),
                Token::StringLit("'single'".to_string()),
                Token::StringLit(r#""esc\"aped""#.to_string()),
            ]
        );
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            tokens("const var letter $x _y"),
            vec![
                Token::Const,
                Token::Var,
                Token::Identifier("letter".to_string()),
                Token::Identifier("$x".to_string()),
                Token::Identifier("_y".to_string()),
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            tokens("a // line comment\n/* block\n * comment */ b"),
            vec![
                Token::Identifier("a".to_string()),
                Token::Identifier("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            tokens("+-*/%(),"),
            vec![
                Token::Plus,
                Token::Minus,
                Token::Asterisk,
                Token::Slash,
                Token::Percent,
                Token::OpenParen,
                Token::CloseParen,
                Token::Comma,
            ]
        );
        assert_eq!(Token::Asterisk.binop_str(), Some("*"));
        assert_eq!(Token::Semi.binop_bp(), None);
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(
            tokens("a # b"),
            vec![
                Token::Identifier("a".to_string()),
                Token::Error,
                Token::Identifier("b".to_string()),
            ]
        );
    }
}
