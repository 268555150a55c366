//! The per-session link between an accessor and the host module.

use crate::module::{CurrentProcess, ModuleHandle, Process, RawExport};
use std::ffi::CStr;
use tracing::trace;

/// A located host module plus the process used to resolve its exports.
///
/// Nothing is cached: every [`resolve`](Self::resolve) goes back to the
/// module's export table, so a host that is reloaded in place is picked up
/// by the next call.
#[derive(Debug, Clone)]
pub struct Binding<P = CurrentProcess> {
    module: ModuleHandle,
    process: P,
}

impl<P: Process> Binding<P> {
    /// Bind to `module`, which the caller has located through `process`.
    pub(crate) fn new(module: ModuleHandle, process: P) -> Self {
        Self { module, process }
    }

    /// The bound module.
    pub fn module(&self) -> ModuleHandle {
        self.module
    }

    /// Look up an export of the bound module by name.
    pub fn resolve(&self, name: &CStr) -> Option<RawExport> {
        let export = self.process.resolve_export(self.module, name);
        trace!(?name, found = export.is_some(), "resolved host export");
        export
    }
}

/// Reinterpret an export address as a function pointer.
///
/// # Safety
///
/// `F` must be a function pointer type whose signature and calling convention
/// match the export exactly.
pub(crate) unsafe fn cast_export<F: Copy>(export: RawExport) -> F {
    const {
        assert!(std::mem::size_of::<F>() == std::mem::size_of::<RawExport>());
    }
    // SAFETY: Sizes match, and the caller guarantees `F` is the right signature.
    unsafe { std::mem::transmute_copy::<RawExport, F>(&export) }
}
