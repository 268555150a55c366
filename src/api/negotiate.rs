//! Requesting an accessor: locate the host, then check its SDK band.

use super::binding::Binding;
use super::levels::{Api, Capability, EnbApi, Sdk1001};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::module::{CurrentProcess, ModuleLocator, Process};
use crate::version::{SdkVersion, band};
use tracing::{debug, debug_span};

/// Hands out accessors for a compatible host module.
///
/// Each request locates the host again; nothing is remembered between
/// requests.
#[derive(Debug, Clone)]
pub struct Negotiator<P = CurrentProcess> {
    locator: ModuleLocator<P>,
}

impl Negotiator {
    /// Negotiate against the current process with default settings.
    pub fn new() -> Self {
        Self::with_process(CurrentProcess)
    }
}

impl Default for Negotiator {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Process + Clone> Negotiator<P> {
    /// Negotiate against `process` with default settings.
    pub fn with_process(process: P) -> Self {
        Self::with_config(process, ApiConfig::default())
    }

    /// Negotiate against `process` with explicit settings.
    pub fn with_config(process: P, config: ApiConfig) -> Self {
        Self {
            locator: ModuleLocator::with_config(process, config),
        }
    }

    /// The locator used for each request.
    pub fn locator(&self) -> &ModuleLocator<P> {
        &self.locator
    }

    /// Request an accessor of level `L` for SDK `version`.
    ///
    /// Returns `None` if no host is loaded or its SDK band differs from the
    /// requested one.
    pub fn request<L: Capability<P>>(&self, version: SdkVersion) -> Option<L> {
        self.try_request(version).ok()
    }

    /// Like [`request`](Self::request), but says why it failed.
    pub fn try_request<L: Capability<P>>(&self, version: SdkVersion) -> Result<L> {
        let span = debug_span!("enb_negotiate", requested = version.as_raw());
        let _guard = span.enter();

        let module = self.locator.try_locate()?;
        let process = self.locator.process();

        // SAFETY: The locator found `module` through `process`. The base level
        // only calls `ENBGetSDKVersion`, which is checked below.
        let base = unsafe { Api::from_binding(Binding::new(module, process.clone())) };
        let reported = base
            .sdk_version()
            .ok_or(Error::MissingExport("ENBGetSDKVersion"))?;

        if !version.is_compatible_with(reported) {
            debug!(
                reported,
                reported_band = band(reported),
                requested_band = version.band(),
                "host SDK band mismatch"
            );
            return Err(Error::IncompatibleVersion {
                requested: version.as_raw(),
                reported,
            });
        }

        debug!(reported, "negotiated ENBSeries SDK");
        // SAFETY: `module` was located through `process` and just answered
        // `ENBGetSDKVersion`.
        Ok(unsafe { L::from_binding(Binding::new(module, process.clone())) })
    }
}

/// Request the most complete accessor for SDK `version` from the current
/// process.
///
/// Call this once the host DLL has been loaded, for example after the script
/// extender's post-load message; earlier requests find nothing.
pub fn request_enb_api(version: SdkVersion) -> Option<Sdk1001> {
    Negotiator::new().request(version)
}

/// Request an accessor of a specific level from the current process.
pub fn request<L: Capability<CurrentProcess>>(version: SdkVersion) -> Option<L> {
    Negotiator::new().request(version)
}

/// Like [`request`], but says why it failed.
pub fn try_request<L: Capability<CurrentProcess>>(version: SdkVersion) -> Result<L> {
    Negotiator::new().try_request(version)
}
