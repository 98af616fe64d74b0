use std::fmt::Display;

use crate::{lexer::prelude::{LexicalError, Token}, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    UnexpectedToken {
        token: Token,
        // kind name of the token that should have been there
        expected: &'static str,
    },
    NoPrefixFunction {
        token: Token,
    },
    InvalidInteger {
        literal: String,
    },
    UnexpectedEof {
        expected: String,
    },
    LexError {
        error: LexicalError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan,
}

impl ParseError {
    /// Canonical single-line form, as printed by the repl.
    pub fn message(&self) -> String {
        match &self.error {
            ParseErrorType::UnexpectedToken { token, expected } => {
                format!("expected next token to be {expected}, got {token} instead")
            },
            ParseErrorType::NoPrefixFunction { token } => {
                format!("No prefix parse function found for {token}")
            },
            ParseErrorType::InvalidInteger { literal } => {
                format!("failed to parse integer {literal}")
            },
            ParseErrorType::UnexpectedEof { expected } => {
                format!("expected {expected}, got EOFILE")
            },
            ParseErrorType::LexError { error } => error.message(),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
