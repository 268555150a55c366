//! Error types for the ENBSeries binding.
//!
//! The main request surface reports failure as `None` / `false`, matching the
//! host SDK. These errors back the diagnostic `try_*` entry points.

use std::ffi::NulError;
use thiserror::Error;

/// Result type alias using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Why a host module could not be located or negotiated with.
#[derive(Error, Debug)]
pub enum Error {
    /// No scanned module exports the marker symbol.
    #[error("no ENBSeries module found (scanned {scanned} modules)")]
    HostUnavailable {
        /// Number of modules that were checked.
        scanned: usize,
    },

    /// The host reports an SDK version in a different major band.
    #[error("incompatible ENBSeries SDK: requested {requested}, host reports {reported}")]
    IncompatibleVersion {
        /// Version the caller asked for.
        requested: i32,
        /// Version the host module reported.
        reported: i32,
    },

    /// A located host module stopped exporting a required function.
    #[error("host module does not export {0}")]
    MissingExport(&'static str),

    /// A parameter file, category or key name contains an interior NUL byte.
    #[error("invalid parameter name: {0}")]
    InvalidName(#[from] NulError),

    /// Module enumeration failed at the OS level.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
