//! The real process, backed by the Windows module loader.

use super::{ModuleHandle, Process, RawExport};
use std::ffi::CStr;
use std::io;

/// The process this code runs in.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentProcess;

// SAFETY: Handles come from the loader itself. Exports are whatever the host
// module exports under the documented names; a module exporting them with
// other signatures breaks the SDK contract, not this binding.
#[cfg(windows)]
unsafe impl Process for CurrentProcess {
    fn enumerate_modules(&self, slots: &mut [Option<ModuleHandle>]) -> io::Result<usize> {
        use windows_sys::Win32::System::ProcessStatus::K32EnumProcessModules;
        use windows_sys::Win32::System::Threading::GetCurrentProcess;

        let slot_size = std::mem::size_of::<Option<ModuleHandle>>();
        let cb = u32::try_from(std::mem::size_of_val(slots)).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "module slot buffer too large")
        })?;
        let mut needed = 0u32;

        // SAFETY: `Option<ModuleHandle>` has the layout of `HMODULE` with null as
        // `None`, and `cb` is the exact byte length of `slots`.
        let ok = unsafe {
            K32EnumProcessModules(GetCurrentProcess(), slots.as_mut_ptr().cast(), cb, &mut needed)
        };
        if ok == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(needed as usize / slot_size)
    }

    fn resolve_export(&self, module: ModuleHandle, name: &CStr) -> Option<RawExport> {
        use windows_sys::Win32::System::LibraryLoader::GetProcAddress;

        // SAFETY: `name` is NUL-terminated, and `module` came from module
        // enumeration (`ModuleHandle` cannot be built in safe code otherwise).
        // The host module is expected to stay loaded for the session.
        let proc = unsafe { GetProcAddress(module.as_raw(), name.as_ptr().cast()) }?;
        RawExport::new(proc as *mut std::ffi::c_void)
    }
}

// SAFETY: Reports no modules and resolves nothing.
#[cfg(not(windows))]
unsafe impl Process for CurrentProcess {
    fn enumerate_modules(&self, _slots: &mut [Option<ModuleHandle>]) -> io::Result<usize> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "module enumeration is only available on Windows",
        ))
    }

    fn resolve_export(&self, _module: ModuleHandle, _name: &CStr) -> Option<RawExport> {
        None
    }
}
