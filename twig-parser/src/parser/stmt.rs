use super::*;

impl<'a> Parser<'a> {
    /// Parses a declaration (or statement).
    pub fn parse_declaration(&mut self) -> Node {
        match self.current_token {
            Token::Let => self.parse_variable_declaration(DeclarationKind::Let),
            Token::Const => self.parse_variable_declaration(DeclarationKind::Const),
            Token::Var => self.parse_variable_declaration(DeclarationKind::Var),
            _ => self.parse_stmt(),
        }
    }

    /// Parses a statement.
    pub fn parse_stmt(&mut self) -> Node {
        // expression statement
        let expr = self.parse_expr();
        let stmt = Node::expr_stmt(expr);
        self.expect(Token::Semi, "`;`");
        stmt
    }

    /// Parses `let a = 1, b;`. The current token is the declaration keyword.
    fn parse_variable_declaration(&mut self, kind: DeclarationKind) -> Node {
        self.next(); // eat keyword

        let mut declarations = vec![self.parse_declarator()];
        while self.eat(Token::Comma) {
            declarations.push(self.parse_declarator());
        }
        self.expect(Token::Semi, "`;`");

        Node::declaration(kind, declarations)
    }

    fn parse_declarator(&mut self) -> Node {
        let ident = if let Token::Identifier(ref ident) = self.current_token {
            let ident = ident.clone();
            self.next();
            ident
        } else {
            self.unexpected();
            return Node::Error;
        };

        let init = if self.eat(Token::Equals) {
            Some(self.parse_expr())
        } else {
            None
        };

        Node::declarator(ident, init)
    }
}
