//! Host SDK types shared with the ENBSeries module.
//!
//! Everything here is `#[repr(C)]` or `#[repr(transparent)]` and must match the
//! layout the host expects. Enumerations the host writes back (callback kinds,
//! parameter types) are newtypes over the raw integer rather than Rust enums,
//! since the host may send values this binding does not know about.

pub mod exports;
mod parameter;

pub use parameter::{Parameter, ParameterPath, ParameterType};

use std::ffi::c_void;
use std::fmt;

/// Moment at which the host invokes a registered callback.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CallbackType(pub u32);

impl CallbackType {
    /// After the frame has been rendered.
    pub const END_FRAME: Self = Self(1);
    /// Before the frame starts rendering.
    pub const BEGIN_FRAME: Self = Self(2);
    /// Before the user saves configuration from the editor.
    pub const PRE_SAVE: Self = Self(3);
    /// After configuration has been (re)loaded.
    pub const POST_LOAD: Self = Self(4);
    /// Host finished initializing.
    pub const ON_INIT: Self = Self(5);
    /// Host is shutting down.
    pub const ON_EXIT: Self = Self(6);
    /// Before the graphics device is reset.
    pub const PRE_RESET: Self = Self(7);
    /// After the graphics device was reset.
    pub const POST_RESET: Self = Self(8);

    /// Symbolic name, if this is a known callback type.
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::END_FRAME => "EndFrame",
            Self::BEGIN_FRAME => "BeginFrame",
            Self::PRE_SAVE => "PreSave",
            Self::POST_LOAD => "PostLoad",
            Self::ON_INIT => "OnInit",
            Self::ON_EXIT => "OnExit",
            Self::PRE_RESET => "PreReset",
            Self::POST_RESET => "PostReset",
            _ => return None,
        })
    }
}

impl fmt::Debug for CallbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "CallbackType({})", self.0),
        }
    }
}

/// Function the host calls at the moments described by [`CallbackType`].
///
/// Parameter writes are only accepted by the host while one of these is running.
pub type CallbackFunction = extern "system" fn(CallbackType);

/// Selector for [`EnbSdk1001::state`](crate::api::EnbSdk1001::state).
///
/// The meaning of the returned value depends on the selector: flags return
/// 0 or 1, cursor positions return pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct StateType(pub u32);

impl StateType {
    /// Whether the in-game editor window is open.
    pub const IS_EDITOR_ACTIVE: Self = Self(1);
    /// Whether the shader effects window is open.
    pub const IS_EFFECTS_WND_ACTIVE: Self = Self(2);
    /// Cursor X position.
    pub const CURSOR_POS_X: Self = Self(3);
    /// Cursor Y position.
    pub const CURSOR_POS_Y: Self = Self(4);
    /// Left mouse button state.
    pub const MOUSE_LEFT: Self = Self(5);
    /// Right mouse button state.
    pub const MOUSE_RIGHT: Self = Self(6);
    /// Middle mouse button state.
    pub const MOUSE_MIDDLE: Self = Self(7);
}

/// Identifier of the game the host module is attached to.
///
/// Hosts may report values newer than the constants below; those are kept
/// as-is and have no [`name`](Self::name).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct GameId(pub i32);

impl GameId {
    /// Game not recognized by the host.
    pub const UNKNOWN: Self = Self(0);
    /// Grand Theft Auto IV.
    pub const GTA_IV: Self = Self(0x1000_0001);
    /// Grand Theft Auto: Episodes from Liberty City.
    pub const GTA_EFLC: Self = Self(0x1000_0002);
    /// Fallout 3.
    pub const FALLOUT_3: Self = Self(0x1000_0003);
    /// Fallout: New Vegas.
    pub const FALLOUT_NV: Self = Self(0x1000_0004);
    /// The Elder Scrolls IV: Oblivion.
    pub const OBLIVION: Self = Self(0x1000_0005);
    /// The Elder Scrolls V: Skyrim.
    pub const SKYRIM: Self = Self(0x1000_0006);
    /// The Elder Scrolls V: Skyrim Special Edition.
    pub const SKYRIM_SE: Self = Self(0x1000_0007);
    /// Fallout 4.
    pub const FALLOUT_4: Self = Self(0x1000_0008);

    /// Short name of a known game.
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::UNKNOWN => "Unknown",
            Self::GTA_IV => "GTAIV",
            Self::GTA_EFLC => "GTAEFLC",
            Self::FALLOUT_3 => "Fallout3",
            Self::FALLOUT_NV => "FalloutNV",
            Self::OBLIVION => "Oblivion",
            Self::SKYRIM => "Skyrim",
            Self::SKYRIM_SE => "SkyrimSE",
            Self::FALLOUT_4 => "Fallout4",
            _ => return None,
        })
    }
}

impl fmt::Debug for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "GameId({:#x})", self.0),
        }
    }
}

/// Advanced runtime objects owned by the host.
///
/// The interface pointers are borrowed COM objects; the host keeps them alive
/// and the caller must not release them.
#[repr(C)]
#[derive(Debug)]
pub struct RenderInfo {
    /// `ID3D11Device*`.
    pub d3d11_device: *mut c_void,
    /// `ID3D11DeviceContext*`.
    pub d3d11_device_context: *mut c_void,
    /// `IDXGISwapChain*`.
    pub dxgi_swap_chain: *mut c_void,
    /// Back buffer width in pixels.
    pub screen_x: u32,
    /// Back buffer height in pixels.
    pub screen_y: u32,
}
