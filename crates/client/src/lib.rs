//! Device error taxonomy for the boilerplate APDU test client
//!
//! A test client talks to the boilerplate application on a device by
//! exchanging APDU commands and responses. Every response ends with a two byte
//! status word (SW1 SW2); anything other than `90 00` is a failure, and this
//! crate names those failures.
//!
//! ## Overview
//!
//! - [`exception`] declares one error type per failure kind plus the
//!   [`DeviceException`] umbrella that every kind converts into.
//! - [`kind`] tags each failure with an [`ErrorKind`] and maps status words to kinds.
//! - [`context`] holds the diagnostics every error carries.
//! - [`status`] names the status words the device answers with.
//!
//! ```
//! use boilerplate_client::prelude::*;
//!
//! let err = DeviceException::check_status(StatusWord::new(0x6A, 0x86), Some(0x03)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::WrongP1P2);
//! assert!(err.is::<WrongP1P2Error>());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

extern crate alloc;

pub mod context;
pub mod exception;
pub mod kind;
pub mod status;

pub use context::ErrorContext;
pub use exception::{
    ClaNotSupportedError, DenyError, DeviceError, DeviceException, InsNotSupportedError,
    UnknownDeviceError, WrongDataLengthError, WrongP1P2Error, WrongResponseLengthError,
};
pub use kind::ErrorKind;
pub use status::StatusWord;

/// Result type for device exchanges
pub type Result<T, E = DeviceException> = core::result::Result<T, E>;

/// Prelude module containing commonly used traits and types
pub mod prelude {
    pub use crate::{
        Result,
        context::ErrorContext,
        exception::{
            ClaNotSupportedError, DenyError, DeviceError, DeviceException, InsNotSupportedError,
            UnknownDeviceError, WrongDataLengthError, WrongP1P2Error, WrongResponseLengthError,
        },
        kind::ErrorKind,
        status::StatusWord,
    };
}
