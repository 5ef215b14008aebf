//! One error type per failure the device can signal

use alloc::string::String;
use core::fmt;

use super::DeviceException;
use crate::context::ErrorContext;
use crate::kind::ErrorKind;
use crate::status::StatusWord;

mod sealed {
    #[allow(unreachable_pub)]
    pub trait Sealed {}
}

/// Capability shared by every device error kind
///
/// Implemented only by the seven kinds declared in this module. A value of any
/// kind converts into a [`DeviceException`], and a [`DeviceException`] converts
/// back into a kind only when the kinds match.
pub trait DeviceError:
    core::error::Error
    + Clone
    + Into<DeviceException>
    + TryFrom<DeviceException, Error = DeviceException>
    + sealed::Sealed
{
    /// Kind tag of this error type
    const KIND: ErrorKind;

    /// Diagnostics attached at construction
    fn context(&self) -> &ErrorContext;

    /// Borrow this kind out of an exception, if the exception holds it
    fn from_exception(exception: &DeviceException) -> Option<&Self>;

    /// The caller supplied message, empty when none was given
    fn message(&self) -> &str {
        self.context().message()
    }

    /// The status word the device answered with, if known
    fn status(&self) -> Option<StatusWord> {
        self.context().status()
    }

    /// The instruction byte of the failed command, if known
    fn ins(&self) -> Option<u8> {
        self.context().ins()
    }
}

macro_rules! device_errors {
    ($($(#[$meta:meta])* $name:ident => $kind:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, thiserror::Error)]
            pub struct $name {
                context: ErrorContext,
            }

            impl $name {
                /// Create the error with an empty message
                pub const fn new() -> Self {
                    Self {
                        context: ErrorContext::new(),
                    }
                }

                /// Create the error with a message
                pub fn with_message<S: Into<String>>(message: S) -> Self {
                    Self {
                        context: ErrorContext::with_message(message),
                    }
                }

                /// Create the error from a prepared context
                pub const fn from_context(context: ErrorContext) -> Self {
                    Self { context }
                }

                /// Record the status word the device answered with
                pub const fn with_status(self, status: StatusWord) -> Self {
                    Self {
                        context: self.into_context().with_status(status),
                    }
                }

                /// Record the instruction byte of the failed command
                pub const fn with_ins(self, ins: u8) -> Self {
                    Self {
                        context: self.into_context().with_ins(ins),
                    }
                }

                /// Take the attached diagnostics
                pub const fn into_context(self) -> ErrorContext {
                    // Swap in an empty context so no destructor runs in const
                    let mut this = self;
                    let context = core::mem::replace(&mut this.context, ErrorContext::new());
                    core::mem::forget(this);
                    context
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}{}", ErrorKind::$kind.description(), self.context)
                }
            }

            impl sealed::Sealed for $name {}

            impl DeviceError for $name {
                const KIND: ErrorKind = ErrorKind::$kind;

                fn context(&self) -> &ErrorContext {
                    &self.context
                }

                fn from_exception(exception: &DeviceException) -> Option<&Self> {
                    match exception {
                        DeviceException::$kind(e) => Some(e),
                        _ => None,
                    }
                }
            }

            impl TryFrom<DeviceException> for $name {
                type Error = DeviceException;

                fn try_from(exception: DeviceException) -> Result<Self, DeviceException> {
                    match exception {
                        DeviceException::$kind(e) => Ok(e),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

device_errors! {
    /// The device answered with a status word no other kind accounts for,
    /// i.e. it does not behave like a recognized boilerplate device
    UnknownDeviceError => UnknownDevice;

    /// The device refused the operation, typically after the user rejected
    /// it on screen (69 85)
    DenyError => Deny;

    /// P1/P2 are not valid for the requested instruction (6A 86)
    WrongP1P2Error => WrongP1P2;

    /// The command payload length is not what the device expected (6A 87)
    WrongDataLengthError => WrongDataLength;

    /// The instruction byte is not supported (6D 00)
    InsNotSupportedError => InsNotSupported;

    /// The class byte is not supported (6E 00)
    ClaNotSupportedError => ClaNotSupported;

    /// The response had an unexpected length (B0 00)
    WrongResponseLengthError => WrongResponseLength;
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::status::common;

    #[test]
    fn test_new_has_empty_message() {
        let err = WrongP1P2Error::new();
        assert_eq!(err.message(), "");
        assert!(err.status().is_none());
        assert_eq!(err, WrongP1P2Error::default());
        assert_eq!(err.to_string(), "Incorrect parameters P1-P2");
    }

    #[test]
    fn test_message_round_trip() {
        let err = InsNotSupportedError::with_message("INS 0xAE not supported");
        assert_eq!(err.message(), "INS 0xAE not supported");
        assert_eq!(
            err.to_string(),
            "Instruction not supported: INS 0xAE not supported"
        );
        assert_eq!(
            err.into_context().message(),
            "INS 0xAE not supported"
        );
    }

    #[test]
    fn test_builder_attaches_diagnostics() {
        let err = DenyError::with_message("rejected on device")
            .with_status(StatusWord::new(0x69, 0x85))
            .with_ins(0x04);
        assert_eq!(err.status(), Some(StatusWord::new(0x69, 0x85)));
        assert_eq!(err.ins(), Some(0x04));
        assert_eq!(
            err.to_string(),
            "Operation denied by the device (status 69 85, INS 0x04): rejected on device"
        );
    }

    #[test]
    fn test_builders_in_const_context() {
        const DENIED: DenyError = DenyError::new()
            .with_status(common::DENY)
            .with_ins(0x04);
        const CONTEXT: ErrorContext = DENIED.into_context();

        assert_eq!(DENIED.status(), Some(common::DENY));
        assert_eq!(CONTEXT.ins(), Some(0x04));
        assert_eq!(CONTEXT.message(), "");
    }

    #[test]
    fn test_kind_constants_are_distinct() {
        let kinds = [
            UnknownDeviceError::KIND,
            DenyError::KIND,
            WrongP1P2Error::KIND,
            WrongDataLengthError::KIND,
            InsNotSupportedError::KIND,
            ClaNotSupportedError::KIND,
            WrongResponseLengthError::KIND,
        ];
        assert_eq!(kinds, ErrorKind::ALL);
    }

    #[test]
    fn test_try_from_keeps_other_kinds() {
        let exception: DeviceException = WrongDataLengthError::new().into();
        let result = ClaNotSupportedError::try_from(exception.clone());
        assert_eq!(result, Err(exception.clone()));

        let err = WrongDataLengthError::try_from(exception).unwrap();
        assert_eq!(err, WrongDataLengthError::new());
    }
}
