//! Capability levels of the host API.
//!
//! Each SDK revision only adds functions, so the levels are a chain of traits:
//! [`EnbSdk1001`] requires [`EnbSdk1000`], which requires [`EnbApi`]. All
//! methods are provided; an implementor only supplies export resolution.
//! Every call resolves its export again by name.
//!
//! When an export is missing at call time the host function is not called:
//! value queries return `None` and boolean operations return `false`.

use super::binding::{Binding, cast_export};
use crate::module::{CurrentProcess, ModuleHandle, Process, RawExport};
use crate::sdk::exports::{
    self, GetLongFn, GetParameterFn, GetRenderInfoFn, GetStateFn, SetCallbackFunctionFn,
    SetParameterFn,
};
use crate::sdk::{CallbackFunction, GameId, Parameter, ParameterPath, RenderInfo, StateType};
use crate::version::SdkVersion;
use std::ffi::{CStr, c_char};
use std::ptr::{self, NonNull};

fn file_ptr(file: Option<&CStr>) -> *const c_char {
    file.map_or(ptr::null(), CStr::as_ptr)
}

/// Base level: identifies the SDK the host implements.
///
/// # Safety
///
/// The provided methods call whatever [`resolve`](Self::resolve) returns.
/// Implementors must only return exports of the host module whose signatures
/// match [`sdk::exports`](crate::sdk::exports).
pub unsafe trait EnbApi {
    /// Resolve a host export by name.
    fn resolve(&self, name: &CStr) -> Option<RawExport>;

    /// The host module this accessor is bound to.
    fn module(&self) -> ModuleHandle;

    /// SDK version implemented by the host, 1000 meaning 1.0 and 1001 meaning
    /// 1.01. See [`SdkVersion`](crate::SdkVersion) for the compatibility rule.
    fn sdk_version(&self) -> Option<i32> {
        let export = self.resolve(exports::GET_SDK_VERSION)?;
        // SAFETY: `long WINAPI ENBGetSDKVersion()`.
        let get = unsafe { cast_export::<GetLongFn>(export) };
        Some(unsafe { get() })
    }

    /// Whether the host implements every function of `version`.
    ///
    /// Negotiation only checks the band, so an accessor for SDK 1001 may be
    /// bound to a host reporting 1000. Such a host lacks the 1001 exports.
    fn supports(&self, version: SdkVersion) -> bool {
        self.sdk_version().is_some_and(|reported| {
            version.is_compatible_with(reported) && reported >= version.as_raw()
        })
    }
}

/// SDK 1000: versions, callbacks and parameters.
pub trait EnbSdk1000: EnbApi {
    /// ENBSeries product version, 279 meaning 0.279.
    fn version(&self) -> Option<i32> {
        let export = self.resolve(exports::GET_VERSION)?;
        // SAFETY: `long WINAPI ENBGetVersion()`.
        let get = unsafe { cast_export::<GetLongFn>(export) };
        Some(unsafe { get() })
    }

    /// Identifier of the game the host runs in.
    fn game_identifier(&self) -> Option<GameId> {
        let export = self.resolve(exports::GET_GAME_IDENTIFIER)?;
        // SAFETY: `long WINAPI ENBGetGameIdentifier()`.
        let get = unsafe { cast_export::<GetLongFn>(export) };
        Some(GameId(unsafe { get() }))
    }

    /// Register a function the host calls at certain moments of its frame and
    /// lifecycle. Returns `false` if the host does not export registration.
    ///
    /// The host decides when, how often and on which thread `callback` runs.
    fn set_callback_function(&self, callback: CallbackFunction) -> bool {
        let Some(export) = self.resolve(exports::SET_CALLBACK_FUNCTION) else {
            return false;
        };
        // SAFETY: `void WINAPI ENBSetCallbackFunction(ENBCallbackFunction)`.
        let set = unsafe { cast_export::<SetCallbackFunctionFn>(export) };
        unsafe { set(callback) };
        true
    }

    /// Read a parameter into `out`.
    ///
    /// `file` of `None` addresses live shader variables instead of a
    /// configuration file. Parameters appear and disappear while the user
    /// edits shaders, so reads are most reliable inside a callback.
    ///
    /// Returns `false` if the arguments are invalid or the parameter does not
    /// exist or is hidden; the host does not say which.
    fn get_parameter(
        &self,
        file: Option<&CStr>,
        category: &CStr,
        key: &CStr,
        out: &mut Parameter,
    ) -> bool {
        let Some(export) = self.resolve(exports::GET_PARAMETER) else {
            return false;
        };
        // SAFETY: `BOOL WINAPI ENBGetParameter(char*, char*, char*, ENBParameter*)`.
        // The host only reads the strings and writes one `ENBParameter`.
        let get = unsafe { cast_export::<GetParameterFn>(export) };
        unsafe { get(file_ptr(file), category.as_ptr(), key.as_ptr(), out) != 0 }
    }

    /// Write a parameter.
    ///
    /// Returns `false` if the arguments are invalid, the parameter does not
    /// exist, is hidden or read only, or if called outside a host callback.
    /// Values forced this way can end up in presets when the user saves from
    /// the editor.
    fn set_parameter(
        &self,
        file: Option<&CStr>,
        category: &CStr,
        key: &CStr,
        value: &Parameter,
    ) -> bool {
        let Some(export) = self.resolve(exports::SET_PARAMETER) else {
            return false;
        };
        // SAFETY: `BOOL WINAPI ENBSetParameter(char*, char*, char*, ENBParameter*)`.
        // The host only reads through every pointer.
        let set = unsafe { cast_export::<SetParameterFn>(export) };
        unsafe { set(file_ptr(file), category.as_ptr(), key.as_ptr(), value) != 0 }
    }

    /// Read the parameter at `path`, `None` on any failure.
    fn get(&self, path: &ParameterPath) -> Option<Parameter> {
        let mut out = Parameter::default();
        self.get_parameter(path.file(), path.category(), path.key(), &mut out)
            .then_some(out)
    }

    /// Write `value` to the parameter at `path`.
    fn set(&self, path: &ParameterPath, value: &Parameter) -> bool {
        self.set_parameter(path.file(), path.category(), path.key(), value)
    }
}

/// SDK 1001: runtime objects and editor state.
pub trait EnbSdk1001: EnbSdk1000 {
    /// Host-owned rendering objects. `None` until the host has finished
    /// initializing; try again later.
    ///
    /// A host reporting SDK 1000 never exports this function and always
    /// yields `None`. Check [`supports`](EnbApi::supports) with
    /// [`SdkVersion::V1001`] before retrying.
    fn render_info(&self) -> Option<NonNull<RenderInfo>> {
        let export = self.resolve(exports::GET_RENDER_INFO)?;
        // SAFETY: `ENBRenderInfo* WINAPI ENBGetRenderInfo()`.
        let get = unsafe { cast_export::<GetRenderInfoFn>(export) };
        NonNull::new(unsafe { get() })
    }

    /// Query a host state. The result is a flag or a value depending on
    /// `state`. `None` if the host does not export the query (SDK 1000).
    fn state(&self, state: StateType) -> Option<i32> {
        let export = self.resolve(exports::GET_STATE)?;
        // SAFETY: `long WINAPI ENBGetState(ENBStateType)`.
        let get = unsafe { cast_export::<GetStateFn>(export) };
        Some(unsafe { get(state) })
    }
}

/// An accessor type that can be produced by negotiation.
///
/// Accessors are only built by [`Negotiator`](crate::api::Negotiator), which
/// checks the host before wrapping it.
///
/// ```rust,compile_fail,E0133
/// use enb_api::api::{Binding, Capability, Sdk1001};
///
/// fn forge(binding: Binding) -> Sdk1001 {
///     Sdk1001::from_binding(binding)
/// }
/// ```
pub trait Capability<P>: EnbApi + Sized {
    /// Wrap a binding.
    ///
    /// # Safety
    ///
    /// The bound module must have been located through the binding's process
    /// and found to export `ENBGetSDKVersion`.
    unsafe fn from_binding(binding: Binding<P>) -> Self;
}

macro_rules! capability_level {
    ($(#[$meta:meta])* $name:ident $(: $($level:ident),+)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<P = CurrentProcess> {
            binding: Binding<P>,
        }

        impl<P: Process> $name<P> {
            /// The underlying binding.
            pub fn binding(&self) -> &Binding<P> {
                &self.binding
            }
        }

        // SAFETY: Exports come from a `Process`, whose contract requires the
        // documented signatures.
        unsafe impl<P: Process> EnbApi for $name<P> {
            fn resolve(&self, name: &CStr) -> Option<RawExport> {
                self.binding.resolve(name)
            }

            fn module(&self) -> ModuleHandle {
                self.binding.module()
            }
        }

        $($(impl<P: Process> $level for $name<P> {})+)?

        impl<P: Process> Capability<P> for $name<P> {
            unsafe fn from_binding(binding: Binding<P>) -> Self {
                Self { binding }
            }
        }
    };
}

capability_level!(
    /// Base-level accessor: SDK version only. Negotiation reads the host's
    /// SDK version through it before handing out a richer level.
    Api
);

capability_level!(
    /// Accessor for SDK 1000 hosts.
    Sdk1000: EnbSdk1000
);

capability_level!(
    /// Accessor for SDK 1001 hosts, the most complete level.
    Sdk1001: EnbSdk1000, EnbSdk1001
);
