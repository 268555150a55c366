//! # enb-api
//!
//! Client binding for the ENBSeries modder SDK.
//!
//! A plugin running inside a game process uses this crate to find the
//! ENBSeries module that is already loaded there, check that it speaks a
//! compatible SDK revision, and call its exported functions: version queries,
//! callback registration, shader and configuration parameters, render objects
//! and editor state.
//!
//! ## Features
//!
//! - **Export-based discovery**: the host is recognized by the
//!   `ENBGetSDKVersion` export, not by file name
//! - **Band negotiation**: any host in the requested SDK's thousands band is
//!   accepted, 1001 works with 1000 through 1999
//! - **Late binding**: every call resolves its export again, so a host that is
//!   reloaded in place keeps working
//! - **Capability levels**: `EnbApi` <- `EnbSdk1000` <- `EnbSdk1001`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use enb_api::prelude::*;
//!
//! let Some(enb) = request_enb_api(SdkVersion::V1001) else {
//!     return;
//! };
//! let path = ParameterPath::config("enbseries.ini", "EFFECT", "EnableBloom").unwrap();
//! if let Some(bloom) = enb.get(&path).and_then(|p| p.as_bool()) {
//!     println!("bloom enabled: {bloom}");
//! }
//! ```
//!
//! Failures are reported the way the host reports them: `None` when the host
//! is missing or incompatible, `false` when a parameter operation is refused.
//! [`try_request`] reports why negotiation failed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod api;
pub mod config;
pub mod error;
pub mod module;
pub mod sdk;
pub mod version;

#[cfg(test)]
mod testing;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::api::{
        EnbApi, EnbSdk1000, EnbSdk1001, Sdk1000, Sdk1001, request_enb_api, try_request,
    };
    pub use crate::error::{Error, Result};
    pub use crate::sdk::{CallbackType, GameId, Parameter, ParameterPath, StateType};
    pub use crate::version::SdkVersion;
}

pub use api::{request, request_enb_api, try_request};
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use module::{ModuleHandle, ModuleLocator};
pub use version::SdkVersion;
