//! SDK version identifiers and the band compatibility rule.
//!
//! ENBSeries encodes SDK versions as integers: 1000 means 1.0, 1001 means 1.01.
//! Every version sharing the thousands digit is compatible, so a binding built
//! against 1001 works with any host reporting 1000 through 1999, while 2000 is
//! rejected even though it is newer.

use std::fmt;

/// SDK versions this binding knows how to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum SdkVersion {
    /// SDK 1.0: version, game id, callbacks, parameter get/set.
    V1000 = 1000,
    /// SDK 1.01: adds render info and state queries.
    #[default]
    V1001 = 1001,
}

impl SdkVersion {
    /// The most recent version this binding implements.
    pub const LATEST: SdkVersion = SdkVersion::V1001;

    /// Raw integer value as exchanged with the host.
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Major compatibility band of this version.
    pub const fn band(self) -> i32 {
        band(self.as_raw())
    }

    /// Whether a host reporting `reported` can serve this request.
    pub const fn is_compatible_with(self, reported: i32) -> bool {
        band(reported) == self.band()
    }
}

impl fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&SdkRelease(self.as_raw()), f)
    }
}

/// Major band of a raw version: the thousands digit.
pub const fn band(version: i32) -> i32 {
    (version / 1000) % 10
}

/// Displays a raw SDK version the way ENBSeries documents it (1001 -> "1.01").
///
/// Negative values are not releases and are printed as the raw number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdkRelease(pub i32);

impl fmt::Display for SdkRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            return write!(f, "{}", self.0);
        }
        let (major, minor) = (self.0 / 1000, self.0 % 1000);
        if minor == 0 {
            write!(f, "{major}.0")
        } else {
            write!(f, "{major}.{minor:02}")
        }
    }
}

/// Displays a raw ENBSeries product version (279 -> "0.279"). Negative values
/// are printed as the raw number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRelease(pub i32);

impl fmt::Display for ProductRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            return write!(f, "{}", self.0);
        }
        write!(f, "{}.{:03}", self.0 / 1000, self.0 % 1000)
    }
}
