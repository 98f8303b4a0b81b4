// Error types for SSR code validation
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessibilityError {
    // Wrong shape or type handed to the validator
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    // Well-formed code that is not in the SSR table
    #[error("Invalid SSR code '{code}'. Valid codes: {}", .valid_codes.join(", "))]
    UnknownCode {
        code: String,
        valid_codes: Vec<String>,
    },
}

impl AccessibilityError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn unknown_code<S: Into<String>>(code: S) -> Self {
        Self::UnknownCode {
            code: code.into(),
            valid_codes: crate::ssr::valid_ssr_codes()
                .map(str::to_string)
                .collect(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AccessibilityError>;
