use std::fmt::Display;
use std::rc::Rc;

use crate::{
    lexer::prelude::{LexResult, Token},
    parser::prelude::{parse_error, InfixParse, Parse, ParseError, ParseErrorType, Parser, Precedence},
    utils::prelude::SrcSpan
};

/// The outcome of a parse attempt: always a program, plus whatever
/// diagnostics accumulated along the way.
#[derive(Debug)]
pub struct Parsed {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

// program -> { <statement> }
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Program {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let start = parser.current_token.0;
        let mut statements = vec![];

        while parser.current_token.1 != Token::Eof {
            match Statement::parse(parser, None) {
                Ok(statement) => statements.push(statement),
                Err(err) => {
                    // skip one token and retry at the next position
                    parser.errors.push(err);
                    parser.step();
                }
            }
        }

        let end = parser.current_token.2;

        Ok(Self {
            statements,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }

        Ok(())
    }
}

// statement -> <let> | <return> | <while> | <expression_statement>
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    While(WhileStatement),
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Statement {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let statement = match parser.current_token.1 {
            Token::Let => Self::Let(LetStatement::parse(parser, None)?),
            Token::Return => Self::Return(ReturnStatement::parse(parser, None)?),
            Token::While => Self::While(WhileStatement::parse(parser, None)?),
            _ => Self::Expression(ExpressionStatement::parse(parser, None)?),
        };

        Ok(statement)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let(statement) => write!(f, "{statement}"),
            Self::Return(statement) => write!(f, "{statement}"),
            Self::Expression(statement) => write!(f, "{statement}"),
            Self::While(statement) => write!(f, "{statement}"),
        }
    }
}

impl Statement {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Let(statement) => statement.location,
            Self::Return(statement) => statement.location,
            Self::Expression(statement) => statement.location,
            Self::While(statement) => statement.location,
        }
    }
}

// let -> let <identifier> = <expression> ;
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub name: Identifier,
    pub value: Expression,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for LetStatement {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Let)?;
        let name = Identifier::from(parser.expect_ident()?);
        parser.expect_one(Token::Assign)?;

        let value = Expression::parse(parser, None)?;

        // the terminating semicolon is required; everything up to it is
        // skipped
        loop {
            match parser.current_token.1 {
                Token::Semicolon => {
                    let (_, end) = parser.expect_one(Token::Semicolon)?;

                    return Ok(Self {
                        name,
                        value,
                        location: SrcSpan { start, end }
                    });
                },
                Token::Eof => return parse_error(
                    ParseErrorType::UnexpectedEof {
                        expected: Token::Semicolon.kind_name().to_string()
                    },
                    parser.current_span()
                ),
                _ => parser.step()
            }
        }
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

// return -> return <expression> [;]
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Expression,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for ReturnStatement {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Return)?;

        let value = Expression::parse(parser, None)?;
        let mut end = value.location().end;

        if parser.current_token.1 == Token::Semicolon {
            end = parser.current_token.2;
            parser.step();
        }

        Ok(Self {
            value,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "return {};", self.value)
    }
}

// expression_statement -> <expression> [;]
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for ExpressionStatement {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let expression = Expression::parse(parser, None)?;
        let mut location = expression.location();

        if parser.current_token.1 == Token::Semicolon {
            location.end = parser.current_token.2;
            parser.step();
        }

        Ok(Self { expression, location })
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

// while -> while ( <expression> ) <block>
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Block,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for WhileStatement {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::While)?;
        parser.expect_one(Token::LParen)?;

        let condition = Expression::parse(parser, None)?;

        parser.expect_one(Token::RParen)?;

        let body = Block::parse(parser, None)?;
        let end = body.location.end;

        Ok(Self {
            condition,
            body,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for WhileStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "while({}){{{}}}", self.condition, self.body)
    }
}

// block -> { { <statement> } }
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Block {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, mut end) = parser.expect_one(Token::LBrace)?;
        let mut statements = vec![];

        loop {
            match parser.current_token.1 {
                Token::RBrace => {
                    end = parser.current_token.2;
                    parser.step();
                    break;
                },
                Token::Eof => {
                    end = parser.current_token.2;
                    break;
                },
                _ => match Statement::parse(parser, None) {
                    Ok(statement) => statements.push(statement),
                    Err(err) => {
                        parser.errors.push(err);
                        parser.step();
                    }
                }
            }
        }

        Ok(Self {
            statements,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }

        Ok(())
    }
}

// expression -> <prefix_expression> { <infix_operator> <expression> }
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    String(StringLiteral),
    Prefix(Prefix),
    Infix(Infix),
    If(If),
    Function(FunctionLiteral),
    Call(Call),
    Array(ArrayLiteral),
    Hash(HashLiteral),
    Index(Index),
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Expression {
    fn parse(
        parser: &mut Parser<T>,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let precedence = precedence.unwrap_or(Precedence::Lowest);

        let mut left = match &parser.current_token.1 {
            Token::Ident(_) => Self::Identifier(Identifier::from(parser.expect_ident()?)),
            Token::Int(_) => Self::Integer(IntegerLiteral::parse(parser, None)?),
            Token::True
            | Token::False => Self::Boolean(BooleanLiteral::parse(parser, None)?),
            Token::String(_) => Self::String(StringLiteral::parse(parser, None)?),
            Token::Bang
            | Token::Minus => Self::Prefix(Prefix::parse(parser, None)?),
            Token::LParen => {
                // grouped expression; parentheses reappear through the
                // canonical printer
                parser.expect_one(Token::LParen)?;
                let expression = Expression::parse(parser, None)?;
                parser.expect_one(Token::RParen)?;

                expression
            },
            Token::If => Self::If(If::parse(parser, None)?),
            Token::Function => Self::Function(FunctionLiteral::parse(parser, None)?),
            Token::LBracket => Self::Array(ArrayLiteral::parse(parser, None)?),
            Token::LBrace => Self::Hash(HashLiteral::parse(parser, None)?),
            _ => {
                let (start, token, end) = parser.current_token.clone();

                return parse_error(
                    ParseErrorType::NoPrefixFunction { token },
                    SrcSpan { start, end }
                );
            }
        };

        while parser.current_token.1 != Token::Semicolon
            && precedence < parser.current_precedence()
        {
            left = match &parser.current_token.1 {
                Token::Plus | Token::Minus | Token::Asterisk | Token::Slash
                | Token::Equal | Token::NotEqual
                | Token::LessThan | Token::GreaterThan => {
                    Self::Infix(Infix::parse(parser, left, None)?)
                },
                Token::LParen => Self::Call(Call::parse(parser, left, None)?),
                Token::LBracket => Self::Index(Index::parse(parser, left, None)?),
                _ => break
            };
        }

        Ok(left)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::Integer(literal) => write!(f, "{literal}"),
            Self::Boolean(literal) => write!(f, "{literal}"),
            Self::String(literal) => write!(f, "{literal}"),
            Self::Prefix(prefix) => write!(f, "{prefix}"),
            Self::Infix(infix) => write!(f, "{infix}"),
            Self::If(if_expression) => write!(f, "{if_expression}"),
            Self::Function(literal) => write!(f, "{literal}"),
            Self::Call(call) => write!(f, "{call}"),
            Self::Array(literal) => write!(f, "{literal}"),
            Self::Hash(literal) => write!(f, "{literal}"),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Identifier(identifier) => identifier.location,
            Self::Integer(literal) => literal.location,
            Self::Boolean(literal) => literal.location,
            Self::String(literal) => literal.location,
            Self::Prefix(prefix) => prefix.location,
            Self::Infix(infix) => infix.location,
            Self::If(if_expression) => if_expression.location,
            Self::Function(literal) => literal.location,
            Self::Call(call) => call.location,
            Self::Array(literal) => literal.location,
            Self::Hash(literal) => literal.location,
            Self::Index(index) => index.location,
        }
    }
}

// identifier -> <letter> { <letter> }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            value: value.1,
            location: SrcSpan { start: value.0, end: value.2 }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub value: i64,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for IntegerLiteral {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        match parser.next_token() {
            (start, Token::Int(literal), end) => match literal.parse::<i64>() {
                Ok(value) => Ok(Self {
                    value,
                    location: SrcSpan { start, end }
                }),
                Err(_) => parse_error(
                    ParseErrorType::InvalidInteger { literal },
                    SrcSpan { start, end }
                )
            },
            _ => unreachable!("integer literal dispatched on a non-INT token"),
        }
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub value: bool,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for BooleanLiteral {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        match parser.next_token() {
            (start, Token::True, end) => Ok(Self {
                value: true,
                location: SrcSpan { start, end }
            }),
            (start, Token::False, end) => Ok(Self {
                value: false,
                location: SrcSpan { start, end }
            }),
            _ => unreachable!("boolean literal dispatched on a non-boolean token"),
        }
    }
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for StringLiteral {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        match parser.next_token() {
            (start, Token::String(value), end) => Ok(Self {
                value,
                location: SrcSpan { start, end }
            }),
            _ => unreachable!("string literal dispatched on a non-STRING token"),
        }
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

// prefix -> (! | -) <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Prefix {
    pub operator: Token,
    pub right: Box<Expression>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Prefix {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, operator, _) = parser.next_token();

        let right = Expression::parse(parser, Some(Precedence::Prefix))?;
        let end = right.location().end;

        Ok(Self {
            operator,
            right: Box::new(right),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator.as_literal(), self.right)
    }
}

// infix -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Infix {
    pub left: Box<Expression>,
    pub operator: Token,
    pub right: Box<Expression>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> InfixParse<T> for Infix {
    fn parse(
        parser: &mut Parser<T>,
        left: Expression,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        // recursing with the operator's own precedence keeps equal
        // precedences binding leftward
        let precedence = parser.current_precedence();
        let start = left.location().start;

        let (_, operator, _) = parser.next_token();

        let right = Expression::parse(parser, Some(precedence))?;
        let end = right.location().end;

        Ok(Self {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.as_literal(), self.right)
    }
}

// if -> if ( <expression> ) <block> [ else <block> ]
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: Box<Expression>,
    pub consequence: Block,
    pub alternative: Option<Block>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for If {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::If)?;
        parser.expect_one(Token::LParen)?;

        let condition = Expression::parse(parser, None)?;

        parser.expect_one(Token::RParen)?;

        let consequence = Block::parse(parser, None)?;
        let mut end = consequence.location.end;

        let alternative = match parser.current_token.1 {
            Token::Else => {
                parser.step();

                let alternative = Block::parse(parser, None)?;
                end = alternative.location.end;

                Some(alternative)
            },
            _ => None
        };

        Ok(Self {
            condition: Box::new(condition),
            consequence,
            alternative,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for If {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if {} {{{}}}", self.condition, self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, " else {{{alternative}}}")?;
        }

        Ok(())
    }
}

// fn -> fn ( [ <identifier> {, <identifier> } ] ) <block>
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    // shared with every runtime function value created from this literal
    pub parameters: Rc<Vec<Identifier>>,
    pub body: Rc<Block>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for FunctionLiteral {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Function)?;
        parser.expect_one(Token::LParen)?;

        let mut parameters = vec![];

        match parser.current_token.1 {
            Token::RParen => parser.step(),
            _ => {
                parameters.push(Identifier::from(parser.expect_ident()?));

                while parser.current_token.1 == Token::Comma {
                    parser.step();
                    parameters.push(Identifier::from(parser.expect_ident()?));
                }

                parser.expect_one(Token::RParen)?;
            }
        }

        let body = Block::parse(parser, None)?;
        let end = body.location.end;

        Ok(Self {
            parameters: Rc::new(parameters),
            body: Rc::new(body),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self.parameters.iter()
            .map(|parameter| parameter.value.clone())
            .collect::<Vec<String>>();

        write!(f, "fn({}){{{}}}", parameters.join(", "), self.body)
    }
}

// call -> <expression> ( [ <expression> {, <expression> } ] )
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> InfixParse<T> for Call {
    fn parse(
        parser: &mut Parser<T>,
        left: Expression,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let start = left.location().start;
        parser.expect_one(Token::LParen)?;

        let mut arguments = vec![];

        let end = match parser.current_token.1 {
            Token::RParen => {
                let end = parser.current_token.2;
                parser.step();

                end
            },
            _ => {
                arguments.push(Expression::parse(parser, None)?);

                while parser.current_token.1 == Token::Comma {
                    parser.step();
                    arguments.push(Expression::parse(parser, None)?);
                }

                parser.expect_one(Token::RParen)?.1
            }
        };

        Ok(Self {
            function: Box::new(left),
            arguments,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self.arguments.iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.function, arguments.join(", "))
    }
}

// array -> [ [ <expression> {, <expression> } ] ]
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for ArrayLiteral {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::LBracket)?;

        let mut elements = vec![];

        let end = match parser.current_token.1 {
            Token::RBracket => {
                let end = parser.current_token.2;
                parser.step();

                end
            },
            Token::Eof => return parse_error(
                ParseErrorType::UnexpectedEof {
                    expected: "expression".to_string()
                },
                parser.current_span()
            ),
            _ => {
                elements.push(Expression::parse(parser, None)?);

                while parser.current_token.1 == Token::Comma {
                    parser.step();
                    elements.push(Expression::parse(parser, None)?);
                }

                parser.expect_one(Token::RBracket)?.1
            }
        };

        Ok(Self {
            elements,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for ArrayLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let elements = self.elements.iter()
            .map(|element| element.to_string())
            .collect::<Vec<String>>();

        write!(f, "[{}]", elements.join(", "))
    }
}

// hash -> { [ <expression> : <expression> {, <expression> : <expression> } ] }
#[derive(Debug, Clone, PartialEq)]
pub struct HashLiteral {
    // pairs keep their source order
    pub pairs: Vec<(Expression, Expression)>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> Parse<T> for HashLiteral {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::LBrace)?;

        let mut pairs = vec![];

        loop {
            match parser.current_token.1 {
                Token::RBrace => break,
                Token::Eof => return parse_error(
                    ParseErrorType::UnexpectedEof {
                        expected: format!("expression or {}", Token::RBrace.kind_name())
                    },
                    parser.current_span()
                ),
                _ => {
                    let key = Expression::parse(parser, None)?;
                    parser.expect_one(Token::Colon)?;
                    let value = Expression::parse(parser, None)?;

                    pairs.push((key, value));

                    if parser.current_token.1 != Token::RBrace {
                        parser.expect_one(Token::Comma)?;
                    }
                }
            }
        }

        let (_, end) = parser.expect_one(Token::RBrace)?;

        Ok(Self {
            pairs,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for HashLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pairs = self.pairs.iter()
            .map(|(key, value)| format!("{key}:{value}"))
            .collect::<Vec<String>>();

        write!(f, "{{{}}}", pairs.join(", "))
    }
}

// index -> <expression> [ <expression> ]
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub left: Box<Expression>,
    pub index: Box<Expression>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = LexResult>> InfixParse<T> for Index {
    fn parse(
        parser: &mut Parser<T>,
        left: Expression,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let start = left.location().start;
        parser.expect_one(Token::LBracket)?;

        let index = Expression::parse(parser, None)?;

        let (_, end) = parser.expect_one(Token::RBracket)?;

        Ok(Self {
            left: Box::new(left),
            index: Box::new(index),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}
