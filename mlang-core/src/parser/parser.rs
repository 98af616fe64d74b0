use crate::lexer::prelude::{LexResult, Lexer, Spanned, Token};
use crate::utils::prelude::SrcSpan;
use super::ast::{Expression, Parsed, Program};
use super::error::{parse_error, ParseError, ParseErrorType};

pub trait Parse<T: Iterator<Item = LexResult>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError>;
}

pub trait InfixParse<T: Iterator<Item = LexResult>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>,
        left: Expression,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError>;
}

/// Pratt parser over a fallible token stream. Statement-level failures
/// are recorded and skipped so that parsing always produces a program;
/// callers must inspect the diagnostic list before trusting it.
pub struct Parser<T: Iterator<Item = LexResult>> {
    pub current_token: Spanned,
    pub next_token: Spanned,
    pub errors: Vec<ParseError>,

    tokens: T,
}

impl<T: Iterator<Item = LexResult>> Parser<T> {
    pub fn new(input: T) -> Self {
        let mut parser = Self {
            current_token: (0, Token::Eof, 0),
            next_token: (0, Token::Eof, 0),
            errors: vec![],

            tokens: input,
        };

        parser.step();
        parser.step();

        parser
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    pub fn next_token(&mut self) -> Spanned {
        let next = loop {
            match self.tokens.next() {
                Some(Ok(token)) => break token,
                Some(Err(err)) => {
                    self.errors.push(ParseError {
                        error: ParseErrorType::LexError { error: err },
                        span: err.location,
                    });
                },
                None => {
                    let end = self.next_token.2;
                    break (end, Token::Eof, end);
                }
            }
        };

        std::mem::replace(
            &mut self.current_token,
            std::mem::replace(&mut self.next_token, next)
        )
    }

    pub fn current_span(&self) -> SrcSpan {
        SrcSpan { start: self.current_token.0, end: self.current_token.2 }
    }

    pub fn current_precedence(&self) -> Precedence {
        Precedence::from(&self.current_token.1)
    }

    pub fn parse(&mut self) -> Parsed {
        let program = match Program::parse(self, None) {
            Ok(program) => program,
            // Program::parse recovers internally; record anything that
            // still escapes and hand back an empty program
            Err(err) => {
                self.errors.push(err);
                Program { statements: vec![], location: SrcSpan { start: 0, end: 0 } }
            }
        };

        Parsed {
            program,
            errors: std::mem::take(&mut self.errors),
        }
    }

    pub fn expect_one(&mut self, token: Token) -> Result<(u32, u32), ParseError> {
        match self.current_token.clone() {
            (start, tok, end) if tok == token => {
                self.step();
                Ok((start, end))
            },
            (start, tok, end) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token: tok,
                    expected: token.kind_name(),
                },
                SrcSpan { start, end }
            )
        }
    }

    pub fn expect_ident(&mut self) -> Result<(u32, String, u32), ParseError> {
        match self.current_token.clone() {
            (start, Token::Ident(value), end) => {
                self.step();
                Ok((start, value, end))
            },
            (start, token, end) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: "IDENT",
                },
                SrcSpan { start, end }
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

impl From<&Token> for Precedence {
    fn from(value: &Token) -> Self {
        match value {
            Token::Equal | Token::NotEqual => Self::Equals,
            Token::LessThan | Token::GreaterThan => Self::LessGreater,
            Token::Plus | Token::Minus => Self::Sum,
            Token::Slash | Token::Asterisk => Self::Product,
            Token::LParen => Self::Call,
            Token::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

pub fn parse_source(src: &str) -> Parsed {
    let lexer = Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)));
    let mut parser = Parser::new(lexer);

    parser.parse()
}

pub fn parse_from_stream(stream: impl Iterator<Item = char>) -> Parsed {
    let lexer = Lexer::new(stream
        .scan(0u32, |pos, c| {
            let start = *pos;
            *pos += c.len_utf8() as u32;
            Some((start, c))
        })
    );
    let mut parser = Parser::new(lexer);

    parser.parse()
}
