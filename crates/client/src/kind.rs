//! Tag naming each device error kind

use derive_more::Display;

use crate::status::{StatusWord, common};

/// The kind of a [`DeviceException`](crate::exception::DeviceException)
///
/// Displays as the name of the error type carrying that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// See [`UnknownDeviceError`](crate::exception::UnknownDeviceError)
    #[display("UnknownDeviceError")]
    UnknownDevice,
    /// See [`DenyError`](crate::exception::DenyError)
    #[display("DenyError")]
    Deny,
    /// See [`WrongP1P2Error`](crate::exception::WrongP1P2Error)
    #[display("WrongP1P2Error")]
    WrongP1P2,
    /// See [`WrongDataLengthError`](crate::exception::WrongDataLengthError)
    #[display("WrongDataLengthError")]
    WrongDataLength,
    /// See [`InsNotSupportedError`](crate::exception::InsNotSupportedError)
    #[display("InsNotSupportedError")]
    InsNotSupported,
    /// See [`ClaNotSupportedError`](crate::exception::ClaNotSupportedError)
    #[display("ClaNotSupportedError")]
    ClaNotSupported,
    /// See [`WrongResponseLengthError`](crate::exception::WrongResponseLengthError)
    #[display("WrongResponseLengthError")]
    WrongResponseLength,
}

impl ErrorKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 7] = [
        Self::UnknownDevice,
        Self::Deny,
        Self::WrongP1P2,
        Self::WrongDataLength,
        Self::InsNotSupported,
        Self::ClaNotSupported,
        Self::WrongResponseLength,
    ];

    /// Map a status word to the kind the device signals with it.
    ///
    /// Status words outside the boilerplate table, `90 00` included, map to
    /// [`ErrorKind::UnknownDevice`].
    pub const fn from_status(status: StatusWord) -> Self {
        match (status.sw1, status.sw2) {
            (0x69, 0x85) => Self::Deny,
            (0x6A, 0x86) => Self::WrongP1P2,
            (0x6A, 0x87) => Self::WrongDataLength,
            (0x6D, 0x00) => Self::InsNotSupported,
            (0x6E, 0x00) => Self::ClaNotSupported,
            (0xB0, 0x00) => Self::WrongResponseLength,
            _ => Self::UnknownDevice,
        }
    }

    /// The status word the device answers with for this kind
    pub const fn status(self) -> Option<StatusWord> {
        match self {
            Self::UnknownDevice => None,
            Self::Deny => Some(common::DENY),
            Self::WrongP1P2 => Some(common::WRONG_P1P2),
            Self::WrongDataLength => Some(common::WRONG_DATA_LENGTH),
            Self::InsNotSupported => Some(common::INS_NOT_SUPPORTED),
            Self::ClaNotSupported => Some(common::CLA_NOT_SUPPORTED),
            Self::WrongResponseLength => Some(common::WRONG_RESPONSE_LENGTH),
        }
    }

    /// Human readable description of the violation
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnknownDevice => "Unknown device error",
            Self::Deny => "Operation denied by the device",
            Self::WrongP1P2 => "Incorrect parameters P1-P2",
            Self::WrongDataLength => "Wrong command data length",
            Self::InsNotSupported => "Instruction not supported",
            Self::ClaNotSupported => "Class not supported",
            Self::WrongResponseLength => "Wrong response length",
        }
    }
}
