//! Versioned access to a located ENBSeries module.
//!
//! [`request_enb_api`] is the usual entry point. It finds the host, checks that
//! its SDK band matches the requested [`SdkVersion`](crate::SdkVersion) and
//! returns an accessor, or `None`.
//!
//! ```rust,no_run
//! use enb_api::prelude::*;
//!
//! extern "system" fn on_enb(kind: CallbackType) {
//!     if kind != CallbackType::BEGIN_FRAME {
//!         return;
//!     }
//!     if let Some(enb) = request_enb_api(SdkVersion::V1001) {
//!         // Writes are only accepted inside a callback.
//!         enb.set_parameter(None, c"enbbloom.fx", c"Intensity", &Parameter::float(1.2));
//!     }
//! }
//!
//! if let Some(enb) = request_enb_api(SdkVersion::V1001) {
//!     println!("ENBSeries SDK {:?}", enb.sdk_version());
//!     enb.set_callback_function(on_enb);
//! }
//! ```

mod binding;
mod levels;
mod negotiate;

pub use binding::Binding;
pub use levels::{Api, Capability, EnbApi, EnbSdk1000, EnbSdk1001, Sdk1000, Sdk1001};
pub use negotiate::{Negotiator, request, request_enb_api, try_request};
