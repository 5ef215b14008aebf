//! Umbrella error over every device error kind

use alloc::string::String;

use tracing::{Level, debug, info, trace, warn};

use super::{
    ClaNotSupportedError, DenyError, DeviceError, InsNotSupportedError, UnknownDeviceError,
    WrongDataLengthError, WrongP1P2Error, WrongResponseLengthError,
};
use crate::context::ErrorContext;
use crate::kind::ErrorKind;
use crate::status::StatusWord;

/// Any failure signalled by the device
///
/// Each variant wraps the error type of one [`ErrorKind`]. Match on the
/// variants, or use [`DeviceException::is`] / [`DeviceException::downcast_ref`],
/// to handle a single kind and let the others propagate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DeviceException {
    /// Unrecognized device or status word
    #[error(transparent)]
    UnknownDevice(#[from] UnknownDeviceError),

    /// Operation denied
    #[error(transparent)]
    Deny(#[from] DenyError),

    /// Wrong P1/P2
    #[error(transparent)]
    WrongP1P2(#[from] WrongP1P2Error),

    /// Wrong command data length
    #[error(transparent)]
    WrongDataLength(#[from] WrongDataLengthError),

    /// Instruction not supported
    #[error(transparent)]
    InsNotSupported(#[from] InsNotSupportedError),

    /// Class not supported
    #[error(transparent)]
    ClaNotSupported(#[from] ClaNotSupportedError),

    /// Wrong response length
    #[error(transparent)]
    WrongResponseLength(#[from] WrongResponseLengthError),
}

impl DeviceException {
    /// Build the exception the device signals with `status`.
    ///
    /// Status words without a dedicated kind become [`UnknownDeviceError`].
    /// The status word, instruction and message are kept in the error context.
    pub fn from_status<S: Into<String>>(
        status: impl Into<StatusWord>,
        ins: Option<u8>,
        message: S,
    ) -> Self {
        let status = status.into();
        let kind = ErrorKind::from_status(status);

        match kind {
            ErrorKind::UnknownDevice if status.is_success() => {
                debug!(%status, ?ins, "Success status word reported as an unknown device error");
            }
            ErrorKind::UnknownDevice if status.tracing_level() == Level::INFO => {
                info!(%status, ?ins, "Device answered with a warning status word");
            }
            ErrorKind::UnknownDevice => {
                warn!(
                    %status,
                    ?ins,
                    application_specific = status.is_application_specific(),
                    description = status.description(),
                    "Unrecognized device status word"
                );
            }
            _ => debug!(%status, ?ins, %kind, "Device reported an error status"),
        }

        let mut context = ErrorContext::with_message(message).with_status(status);
        if let Some(ins) = ins {
            context = context.with_ins(ins);
        }
        Self::from_kind(kind, context)
    }

    /// Check a status word, failing with the matching exception unless it is `90 00`
    pub fn check_status(status: impl Into<StatusWord>, ins: Option<u8>) -> Result<(), Self> {
        let status = status.into();
        if status.is_success() {
            trace!(%status, ?ins, "Device status ok");
            Ok(())
        } else {
            Err(Self::from_status(status, ins, String::new()))
        }
    }

    /// Build an exception of the given kind around `context`
    pub fn from_kind(kind: ErrorKind, context: ErrorContext) -> Self {
        match kind {
            ErrorKind::UnknownDevice => UnknownDeviceError::from_context(context).into(),
            ErrorKind::Deny => DenyError::from_context(context).into(),
            ErrorKind::WrongP1P2 => WrongP1P2Error::from_context(context).into(),
            ErrorKind::WrongDataLength => WrongDataLengthError::from_context(context).into(),
            ErrorKind::InsNotSupported => InsNotSupportedError::from_context(context).into(),
            ErrorKind::ClaNotSupported => ClaNotSupportedError::from_context(context).into(),
            ErrorKind::WrongResponseLength => {
                WrongResponseLengthError::from_context(context).into()
            }
        }
    }

    /// The kind of the wrapped error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownDevice(_) => ErrorKind::UnknownDevice,
            Self::Deny(_) => ErrorKind::Deny,
            Self::WrongP1P2(_) => ErrorKind::WrongP1P2,
            Self::WrongDataLength(_) => ErrorKind::WrongDataLength,
            Self::InsNotSupported(_) => ErrorKind::InsNotSupported,
            Self::ClaNotSupported(_) => ErrorKind::ClaNotSupported,
            Self::WrongResponseLength(_) => ErrorKind::WrongResponseLength,
        }
    }

    /// Diagnostics of the wrapped error
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::UnknownDevice(e) => e.context(),
            Self::Deny(e) => e.context(),
            Self::WrongP1P2(e) => e.context(),
            Self::WrongDataLength(e) => e.context(),
            Self::InsNotSupported(e) => e.context(),
            Self::ClaNotSupported(e) => e.context(),
            Self::WrongResponseLength(e) => e.context(),
        }
    }

    /// The caller supplied message, empty when none was given
    pub fn message(&self) -> &str {
        self.context().message()
    }

    /// The status word the device answered with, if known
    pub fn status(&self) -> Option<StatusWord> {
        self.context().status()
    }

    /// The instruction byte of the failed command, if known
    pub fn ins(&self) -> Option<u8> {
        self.context().ins()
    }

    /// Check whether this exception holds an error of type `E`
    pub fn is<E: DeviceError>(&self) -> bool {
        self.kind() == E::KIND
    }

    /// Borrow the wrapped error as `E`, if the kinds match
    pub fn downcast_ref<E: DeviceError>(&self) -> Option<&E> {
        E::from_exception(self)
    }

    /// Take the wrapped error as `E`, handing the exception back unchanged otherwise
    pub fn downcast<E: DeviceError>(self) -> Result<E, Self> {
        E::try_from(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::status::common;

    #[test]
    fn test_from_status_maps_every_kind() {
        for kind in ErrorKind::ALL {
            let Some(status) = kind.status() else {
                continue;
            };
            let exception = DeviceException::from_status(status, Some(0x03), "");
            assert_eq!(exception.kind(), kind);
            assert_eq!(exception.status(), Some(status));
            assert_eq!(exception.ins(), Some(0x03));
        }
    }

    #[test]
    fn test_from_status_unknown() {
        let exception = DeviceException::from_status(0xB007u16, None, "bad state");
        assert!(exception.is::<UnknownDeviceError>());
        assert_eq!(exception.message(), "bad state");
        assert_eq!(
            exception.to_string(),
            "Unknown device error (status B0 07): bad state"
        );
    }

    #[test]
    fn test_check_status() {
        assert!(DeviceException::check_status(common::SUCCESS, Some(0x03)).is_ok());

        let err = DeviceException::check_status((0x6E, 0x00), None).unwrap_err();
        assert_eq!(
            err,
            DeviceException::from(
                ClaNotSupportedError::new().with_status(common::CLA_NOT_SUPPORTED)
            )
        );
        assert_eq!(err.message(), "");
    }

    #[test]
    fn test_downcast() {
        let exception: DeviceException = DenyError::with_message("rejected").into();

        assert!(exception.downcast_ref::<WrongP1P2Error>().is_none());
        let deny = exception.downcast_ref::<DenyError>().unwrap();
        assert_eq!(deny.message(), "rejected");

        let exception = exception.downcast::<WrongP1P2Error>().unwrap_err();
        assert_eq!(exception.kind(), ErrorKind::Deny);
        assert!(exception.downcast::<DenyError>().is_ok());
    }

    #[test]
    fn test_from_kind() {
        let context = ErrorContext::with_message("Lc mismatch").with_ins(0x05);
        let exception = DeviceException::from_kind(ErrorKind::WrongDataLength, context.clone());
        assert_eq!(exception.kind(), ErrorKind::WrongDataLength);
        assert_eq!(exception.context(), &context);
    }
}
