//! Scanning loaded modules for the one exporting the marker symbol.

use super::{CurrentProcess, ModuleHandle, Process};
use crate::config::{ApiConfig, MAX_SCAN_CAPACITY};
use crate::error::{Error, Result};
use tracing::{debug, trace, warn};

/// Finds the ENBSeries module among the modules of a process.
///
/// The host is recognized by its exports rather than its file name, since
/// wrappers and proxies with the same name are common. Locating never loads,
/// unloads or pins a module.
#[derive(Debug, Clone)]
pub struct ModuleLocator<P = CurrentProcess> {
    process: P,
    config: ApiConfig,
}

impl ModuleLocator {
    /// Create a locator for the current process with default settings.
    pub fn new() -> Self {
        Self::with_process(CurrentProcess)
    }
}

impl Default for ModuleLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Process> ModuleLocator<P> {
    /// Create a locator over `process` with default settings.
    pub fn with_process(process: P) -> Self {
        Self::with_config(process, ApiConfig::default())
    }

    /// Create a locator over `process` with explicit settings.
    pub fn with_config(process: P, config: ApiConfig) -> Self {
        Self { process, config }
    }

    /// The process being scanned.
    pub fn process(&self) -> &P {
        &self.process
    }

    /// The active settings.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Return the first module exporting the marker symbol, or `None` if
    /// enumeration failed or no module matches.
    pub fn locate(&self) -> Option<ModuleHandle> {
        self.try_locate().ok()
    }

    /// Like [`locate`](Self::locate), but says why nothing was found.
    pub fn try_locate(&self) -> Result<ModuleHandle> {
        let capacity = self.config.scan_capacity.min(MAX_SCAN_CAPACITY);
        let mut slots = vec![None; capacity];
        let loaded = self.process.enumerate_modules(&mut slots)?;

        if loaded > capacity {
            warn!(
                loaded,
                capacity, "more modules loaded than scan capacity, the rest are skipped"
            );
        }

        let mut scanned = 0;
        for module in slots[..loaded.min(capacity)].iter().map_while(|slot| *slot) {
            scanned += 1;
            if self
                .process
                .resolve_export(module, self.config.marker_symbol)
                .is_some()
            {
                debug!(?module, index = scanned - 1, "found ENBSeries module");
                return Ok(module);
            }
            trace!(?module, "module does not export marker");
        }

        debug!(scanned, "no ENBSeries module loaded");
        Err(Error::HostUnavailable { scanned })
    }
}
