use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    UnterminatedString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan,
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnterminatedString => {
                ("Unterminated string literal", vec![
                    "The closing `\"` is missing.".to_string()
                ])
            }
        }
    }

    /// Canonical single-line form, for flat diagnostic lists.
    pub fn message(&self) -> String {
        match self.error {
            LexicalErrorType::UnterminatedString => {
                "unterminated string literal".to_string()
            }
        }
    }
}
