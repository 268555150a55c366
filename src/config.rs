//! Locator and negotiation settings.

use crate::sdk::exports;
use std::ffi::CStr;

/// Number of module slots scanned in one enumeration pass.
pub const DEFAULT_SCAN_CAPACITY: usize = 1000;

/// Upper bound on the scan capacity. Larger values are clamped to it.
pub const MAX_SCAN_CAPACITY: usize = 1 << 16;

/// Configuration for locating the host module.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Maximum number of loaded modules considered. Modules enumerated past
    /// this many are never checked, even if one of them is the host. Values
    /// above [`MAX_SCAN_CAPACITY`] are treated as that limit.
    pub scan_capacity: usize,
    /// Export whose presence identifies the host module. Several modules may
    /// share the host's file name, so the export is checked instead.
    pub marker_symbol: &'static CStr,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            scan_capacity: DEFAULT_SCAN_CAPACITY,
            marker_symbol: exports::GET_SDK_VERSION,
        }
    }
}

impl ApiConfig {
    /// Override the scan capacity, clamped to [`MAX_SCAN_CAPACITY`].
    pub fn with_scan_capacity(mut self, capacity: usize) -> Self {
        self.scan_capacity = capacity.min(MAX_SCAN_CAPACITY);
        self
    }

    /// Override the marker export.
    pub fn with_marker_symbol(mut self, symbol: &'static CStr) -> Self {
        self.marker_symbol = symbol;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.scan_capacity, 1000);
        assert_eq!(config.marker_symbol, c"ENBGetSDKVersion");
    }

    #[test]
    fn test_builder() {
        let config = ApiConfig::default()
            .with_scan_capacity(8)
            .with_marker_symbol(c"ENBGetVersion");
        assert_eq!(config.scan_capacity, 8);
        assert_eq!(config.marker_symbol, c"ENBGetVersion");
    }

    #[test]
    fn test_builder_clamps_capacity() {
        let config = ApiConfig::default().with_scan_capacity(usize::MAX);
        assert_eq!(config.scan_capacity, MAX_SCAN_CAPACITY);
        let config = ApiConfig::default().with_scan_capacity(MAX_SCAN_CAPACITY);
        assert_eq!(config.scan_capacity, MAX_SCAN_CAPACITY);
    }
}
