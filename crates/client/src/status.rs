//! Status word definitions for device responses

use core::fmt;

use tracing::Level;

/// Status Word (SW1-SW2) closing every device response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusWord {
    /// First status byte (SW1)
    pub sw1: u8,
    /// Second status byte (SW2)
    pub sw2: u8,
}

impl StatusWord {
    /// Create a new status word
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    /// Create from a u16 value (SW1 | SW2)
    pub const fn from_u16(status: u16) -> Self {
        Self {
            sw1: (status >> 8) as u8,
            sw2: status as u8,
        }
    }

    /// Convert to a u16 value (SW1 | SW2)
    pub const fn to_u16(&self) -> u16 {
        ((self.sw1 as u16) << 8) | (self.sw2 as u16)
    }

    /// Check if this status word indicates success (90 00)
    pub const fn is_success(&self) -> bool {
        self.sw1 == 0x90 && self.sw2 == 0x00
    }

    /// Check if this status word is an ISO 7816-4 warning (62 XX / 63 XX)
    pub const fn is_warning(&self) -> bool {
        self.sw1 == 0x62 || self.sw1 == 0x63
    }

    /// Check if the status word is defined by the boilerplate application
    /// rather than ISO 7816-4 (B0 XX)
    pub const fn is_application_specific(&self) -> bool {
        self.sw1 == 0xB0
    }

    /// Get the appropriate tracing level for this status word
    pub const fn tracing_level(&self) -> Level {
        if self.is_success() {
            Level::DEBUG
        } else if self.is_warning() {
            Level::INFO
        } else {
            Level::WARN
        }
    }

    /// Get a description of this status word
    pub const fn description(&self) -> &'static str {
        match (self.sw1, self.sw2) {
            (0x90, 0x00) => "Success",
            (0x61, _) => "More data available",
            (0x62, _) => "Warning, non-volatile memory unchanged",
            (0x63, _) => "Warning, non-volatile memory changed",
            (0x67, 0x00) => "Wrong length",
            (0x69, 0x82) => "Security status not satisfied",
            (0x69, 0x85) => "Conditions of use not satisfied",
            (0x69, 0x86) => "Command not allowed",
            (0x6A, 0x80) => "Incorrect parameters in the data field",
            (0x6A, 0x86) => "Incorrect parameters P1-P2",
            (0x6A, 0x87) => "Lc inconsistent with P1-P2",
            (0x6B, 0x00) => "Wrong parameters P1-P2",
            (0x6D, 0x00) => "Instruction code not supported or invalid",
            (0x6E, 0x00) => "Class not supported",
            (0x6F, 0x00) => "No precise diagnosis",
            (0xB0, 0x00) => "Wrong response length",
            _ if self.is_application_specific() => "Application specific error",
            _ => "Unknown status word",
        }
    }
}

impl From<(u8, u8)> for StatusWord {
    fn from(tuple: (u8, u8)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl From<u16> for StatusWord {
    fn from(status: u16) -> Self {
        Self::from_u16(status)
    }
}

impl From<StatusWord> for u16 {
    fn from(status: StatusWord) -> Self {
        status.to_u16()
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X} {:02X}", self.sw1, self.sw2)
    }
}

/// Status words answered by the boilerplate application
pub mod common {
    use super::StatusWord;

    /// Success (90 00)
    pub const SUCCESS: StatusWord = StatusWord::new(0x90, 0x00);

    /// User denied the operation on the device (69 85)
    pub const DENY: StatusWord = StatusWord::new(0x69, 0x85);

    /// Incorrect parameters P1-P2 (6A 86)
    pub const WRONG_P1P2: StatusWord = StatusWord::new(0x6A, 0x86);

    /// Command data length does not match (6A 87)
    pub const WRONG_DATA_LENGTH: StatusWord = StatusWord::new(0x6A, 0x87);

    /// Instruction not supported (6D 00)
    pub const INS_NOT_SUPPORTED: StatusWord = StatusWord::new(0x6D, 0x00);

    /// Class not supported (6E 00)
    pub const CLA_NOT_SUPPORTED: StatusWord = StatusWord::new(0x6E, 0x00);

    /// Response would not fit the I/O buffer (B0 00)
    pub const WRONG_RESPONSE_LENGTH: StatusWord = StatusWord::new(0xB0, 0x00);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_word_from_to_u16() {
        let sw = StatusWord::from_u16(0x6A86);
        assert_eq!(sw.sw1, 0x6A);
        assert_eq!(sw.sw2, 0x86);
        assert_eq!(sw.to_u16(), 0x6A86);
        assert_eq!(u16::from(StatusWord::from((0xB0, 0x00))), 0xB000);
    }

    #[test]
    fn test_status_word_is_methods() {
        assert!(common::SUCCESS.is_success());
        assert!(!common::DENY.is_success());
        assert!(StatusWord::new(0x63, 0xC2).is_warning());
        assert!(common::WRONG_RESPONSE_LENGTH.is_application_specific());
        assert!(!common::WRONG_P1P2.is_application_specific());
    }

    #[test]
    fn test_status_word_tracing_level() {
        assert_eq!(common::SUCCESS.tracing_level(), Level::DEBUG);
        assert_eq!(StatusWord::new(0x62, 0x83).tracing_level(), Level::INFO);
        assert_eq!(common::CLA_NOT_SUPPORTED.tracing_level(), Level::WARN);
    }

    #[test]
    fn test_status_word_description() {
        assert_eq!(common::SUCCESS.description(), "Success");
        assert_eq!(
            common::WRONG_P1P2.description(),
            "Incorrect parameters P1-P2"
        );
        assert_eq!(
            common::WRONG_RESPONSE_LENGTH.description(),
            "Wrong response length"
        );
        assert_eq!(
            StatusWord::new(0xB0, 0x07).description(),
            "Application specific error"
        );
        assert_eq!(
            StatusWord::new(0x6A, 0x82).description(),
            "Unknown status word"
        );
    }

    #[test]
    fn test_status_word_display() {
        use alloc::string::ToString;

        assert_eq!(common::WRONG_DATA_LENGTH.to_string(), "6A 87");
    }
}
