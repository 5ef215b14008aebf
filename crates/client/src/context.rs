//! Diagnostic context carried by every device error

use alloc::string::String;
use core::fmt;

use crate::status::StatusWord;

/// Diagnostics attached to a device error
///
/// All fields are optional. The message defaults to the empty string and is
/// returned exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ErrorContext {
    status: Option<StatusWord>,
    ins: Option<u8>,
    message: String,
}

impl ErrorContext {
    /// Create an empty context
    pub const fn new() -> Self {
        Self {
            status: None,
            ins: None,
            message: String::new(),
        }
    }

    /// Create a context holding only a message
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            ..Self::new()
        }
    }

    /// Record the status word the device answered with
    pub const fn with_status(mut self, status: StatusWord) -> Self {
        self.status = Some(status);
        self
    }

    /// Record the instruction byte of the failed command
    pub const fn with_ins(mut self, ins: u8) -> Self {
        self.ins = Some(ins);
        self
    }

    /// The status word, if the error came from a device response
    pub const fn status(&self) -> Option<StatusWord> {
        self.status
    }

    /// The instruction byte of the failed command, if known
    pub const fn ins(&self) -> Option<u8> {
        self.ins
    }

    /// The caller supplied message, empty when none was given
    pub fn message(&self) -> &str {
        &self.message
    }
}

// Renders as a suffix: ` (status 6A 86, INS 0x03): message`
impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.ins) {
            (Some(status), Some(ins)) => write!(f, " (status {}, INS {:#04X})", status, ins)?,
            (Some(status), None) => write!(f, " (status {})", status)?,
            (None, Some(ins)) => write!(f, " (INS {:#04X})", ins)?,
            (None, None) => {}
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}
