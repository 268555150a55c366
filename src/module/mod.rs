//! Finding the host module among the modules loaded in this process.
//!
//! The OS is reached through the [`Process`] trait: [`CurrentProcess`] talks to
//! the Windows loader, and tests substitute a fake with a scripted module list
//! and export table.

mod locator;
mod process;

pub use locator::ModuleLocator;
pub use process::CurrentProcess;

use std::ffi::{CStr, c_void};
use std::io;
use std::ptr::NonNull;

/// Address of a resolved export.
pub type RawExport = NonNull<c_void>;

/// Borrowed handle to a module loaded in this process (`HMODULE`).
///
/// The OS loader and whoever loaded the module own it; this binding never
/// loads or frees modules, so dropping a handle does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ModuleHandle(NonNull<c_void>);

// SAFETY: A module handle is the module's base address. It carries no
// thread affinity and is only ever passed back to loader functions.
unsafe impl Send for ModuleHandle {}
unsafe impl Sync for ModuleHandle {}

impl ModuleHandle {
    /// Wrap a raw `HMODULE`, rejecting null.
    ///
    /// # Safety
    ///
    /// `raw` must be null or the handle of a module currently loaded in this
    /// process. Exports are looked up relative to it.
    ///
    /// ```rust,compile_fail,E0133
    /// // Handles cannot be made up in safe code.
    /// let handle = enb_api::ModuleHandle::from_raw(0x1000 as *mut _);
    /// ```
    pub unsafe fn from_raw(raw: *mut c_void) -> Option<Self> {
        NonNull::new(raw).map(Self)
    }

    /// The raw `HMODULE`.
    pub fn as_raw(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

/// Read-only view of the current process's loaded modules.
///
/// # Safety
///
/// Accessors call whatever address `resolve_export` returns through the
/// signatures in [`sdk::exports`](crate::sdk::exports). An implementation must
/// only return `Some` for a name whose export has exactly that signature, and
/// `enumerate_modules` must only report handles of loaded modules.
///
/// ```rust,compile_fail,E0200
/// use enb_api::module::{ModuleHandle, Process, RawExport};
/// use std::ffi::CStr;
///
/// struct Scripted;
///
/// // Implementing the trait requires `unsafe impl`.
/// impl Process for Scripted {
///     fn enumerate_modules(&self, _: &mut [Option<ModuleHandle>]) -> std::io::Result<usize> {
///         Ok(0)
///     }
///     fn resolve_export(&self, _: ModuleHandle, _: &CStr) -> Option<RawExport> {
///         Some(RawExport::dangling())
///     }
/// }
/// ```
pub unsafe trait Process {
    /// Fill `slots` with loaded modules in loader order and return the total
    /// number of modules loaded, which may exceed `slots.len()`.
    fn enumerate_modules(&self, slots: &mut [Option<ModuleHandle>]) -> io::Result<usize>;

    /// Look up an export of `module` by exact name.
    fn resolve_export(&self, module: ModuleHandle, name: &CStr) -> Option<RawExport>;
}

// SAFETY: Forwards to `P`, which upholds the contract.
unsafe impl<P: Process + ?Sized> Process for &P {
    fn enumerate_modules(&self, slots: &mut [Option<ModuleHandle>]) -> io::Result<usize> {
        (**self).enumerate_modules(slots)
    }

    fn resolve_export(&self, module: ModuleHandle, name: &CStr) -> Option<RawExport> {
        (**self).resolve_export(module, name)
    }
}
