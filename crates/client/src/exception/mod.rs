//! Errors a device signals back to the test client
//!
//! Every failure is reported as exactly one of seven kinds, each with its own
//! type. All of them convert into [`DeviceException`] so callers can handle
//! device failures broadly with `?`, or pick out a single kind:
//!
//! ```
//! use boilerplate_client::exception::{
//!     ClaNotSupportedError, DeviceException, WrongDataLengthError,
//! };
//!
//! fn only_cla(err: DeviceException) -> Result<ClaNotSupportedError, DeviceException> {
//!     ClaNotSupportedError::try_from(err)
//! }
//!
//! let err = DeviceException::from(WrongDataLengthError::with_message("Lc = 3"));
//! let err = only_cla(err).unwrap_err();
//! assert!(err.is::<WrongDataLengthError>());
//! assert_eq!(err.message(), "Lc = 3");
//! ```
//!
//! The module exports the seven kinds, [`DeviceException`] and the
//! [`DeviceError`] capability they share, and nothing else:
//!
//! ```
//! use boilerplate_client::exception::{
//!     ClaNotSupportedError, DenyError, DeviceError, DeviceException, InsNotSupportedError,
//!     UnknownDeviceError, WrongDataLengthError, WrongP1P2Error, WrongResponseLengthError,
//! };
//! ```
//!
//! Supporting types live at the crate root:
//!
//! ```compile_fail,E0432
//! use boilerplate_client::exception::ErrorKind;
//! ```
//!
//! ```compile_fail,E0432
//! use boilerplate_client::exception::ErrorContext;
//! ```
//!
//! ```compile_fail,E0432
//! use boilerplate_client::exception::Result;
//! ```
//!
//! ```compile_fail
//! use boilerplate_client::exception::sealed::Sealed;
//! ```

mod device_exception;
mod types;

pub use device_exception::DeviceException;
pub use types::{
    ClaNotSupportedError, DenyError, DeviceError, InsNotSupportedError, UnknownDeviceError,
    WrongDataLengthError, WrongP1P2Error, WrongResponseLengthError,
};
