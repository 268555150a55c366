//! In-process fakes of the module loader and of an ENBSeries host.

use crate::module::{ModuleHandle, Process, RawExport};
use crate::sdk::exports;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ffi::{CStr, CString, c_void};
use std::io;

struct FakeModule {
    handle: ModuleHandle,
    exports: HashMap<CString, RawExport>,
}

/// A process whose module list and export tables are scripted by the test.
pub(crate) struct FakeProcess {
    modules: RefCell<Vec<FakeModule>>,
    fail_enumeration: Cell<bool>,
    lookups: Cell<usize>,
}

impl FakeProcess {
    pub(crate) fn new() -> Self {
        Self {
            modules: RefCell::new(Vec::new()),
            fail_enumeration: Cell::new(false),
            lookups: Cell::new(0),
        }
    }

    /// Append a module with no exports.
    pub(crate) fn add_module(&self) -> ModuleHandle {
        let mut modules = self.modules.borrow_mut();
        let address = (modules.len() + 1) * 0x1_0000;
        // SAFETY: Fake handles are only compared, never passed to the loader.
        let handle = unsafe { ModuleHandle::from_raw(std::ptr::without_provenance_mut(address)) }
            .expect("fake module address is non-null");
        modules.push(FakeModule {
            handle,
            exports: HashMap::new(),
        });
        handle
    }

    pub(crate) fn add_modules(&self, count: usize) {
        for _ in 0..count {
            self.add_module();
        }
    }

    /// Append a module exporting the full fake host API and reset the host
    /// state of the calling thread.
    pub(crate) fn install_host(&self) -> ModuleHandle {
        host::reset();
        let module = self.add_module();
        for (name, export) in host::exports() {
            self.export(module, name, export);
        }
        module
    }

    pub(crate) fn export(&self, module: ModuleHandle, name: &CStr, export: RawExport) {
        if let Some(m) = self.modules.borrow_mut().iter_mut().find(|m| m.handle == module) {
            m.exports.insert(name.to_owned(), export);
        }
    }

    pub(crate) fn remove_export(&self, module: ModuleHandle, name: &CStr) {
        if let Some(m) = self.modules.borrow_mut().iter_mut().find(|m| m.handle == module) {
            m.exports.remove(name);
        }
    }

    pub(crate) fn fail_enumeration(&self) {
        self.fail_enumeration.set(true);
    }

    /// Number of export lookups performed so far.
    pub(crate) fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

// SAFETY: Exports are only registered through `host::exports` and the tests'
// own `extern "system"` functions, each with the matching signature.
unsafe impl Process for FakeProcess {
    fn enumerate_modules(&self, slots: &mut [Option<ModuleHandle>]) -> io::Result<usize> {
        if self.fail_enumeration.get() {
            return Err(io::Error::other("enumeration failed"));
        }
        let modules = self.modules.borrow();
        for (slot, module) in slots.iter_mut().zip(modules.iter()) {
            *slot = Some(module.handle);
        }
        Ok(modules.len())
    }

    fn resolve_export(&self, module: ModuleHandle, name: &CStr) -> Option<RawExport> {
        self.lookups.set(self.lookups.get() + 1);
        self.modules
            .borrow()
            .iter()
            .find(|m| m.handle == module)
            .and_then(|m| m.exports.get(name).copied())
    }
}

/// A fake ENBSeries host. State is per thread, so tests stay independent.
pub(crate) mod host {
    use super::*;
    use crate::sdk::{CallbackFunction, CallbackType, GameId, Parameter, RenderInfo, StateType};
    use std::ffi::c_char;

    pub(crate) const DEFAULT_SDK_VERSION: i32 = 1001;
    pub(crate) const PRODUCT_VERSION: i32 = 279;
    pub(crate) const HOTFIX_VERSION: i32 = 280;
    pub(crate) const GAME_ID: i32 = GameId::SKYRIM.0;
    pub(crate) const CURSOR_X: i32 = 640;
    pub(crate) const CURSOR_Y: i32 = 360;

    type Key = (Option<CString>, CString, CString);

    thread_local! {
        static SDK_VERSION: Cell<i32> = const { Cell::new(DEFAULT_SDK_VERSION) };
        static INITIALIZED: Cell<bool> = const { Cell::new(true) };
        static IN_CALLBACK: Cell<bool> = const { Cell::new(false) };
        static CALLBACK: Cell<Option<CallbackFunction>> = const { Cell::new(None) };
        static RENDER_INFO: Cell<*mut RenderInfo> = const { Cell::new(std::ptr::null_mut()) };
        static PARAMS: RefCell<HashMap<Key, Parameter>> = RefCell::new(HashMap::new());
    }

    pub(crate) fn raw(f: *const ()) -> RawExport {
        RawExport::new(f as *mut c_void).expect("function address is non-null")
    }

    pub(crate) fn exports() -> [(&'static CStr, RawExport); 8] {
        [
            (exports::GET_SDK_VERSION, raw(get_sdk_version as *const ())),
            (exports::GET_VERSION, raw(get_version as *const ())),
            (exports::GET_GAME_IDENTIFIER, raw(get_game_identifier as *const ())),
            (exports::SET_CALLBACK_FUNCTION, raw(set_callback_function as *const ())),
            (exports::GET_PARAMETER, raw(get_parameter as *const ())),
            (exports::SET_PARAMETER, raw(set_parameter as *const ())),
            (exports::GET_RENDER_INFO, raw(get_render_info as *const ())),
            (exports::GET_STATE, raw(get_state as *const ())),
        ]
    }

    pub(crate) fn reset() {
        SDK_VERSION.set(DEFAULT_SDK_VERSION);
        INITIALIZED.set(true);
        IN_CALLBACK.set(false);
        CALLBACK.set(None);
        PARAMS.with_borrow_mut(|p| p.clear());
    }

    pub(crate) fn set_sdk_version(version: i32) {
        SDK_VERSION.set(version);
    }

    pub(crate) fn set_initialized(initialized: bool) {
        INITIALIZED.set(initialized);
    }

    pub(crate) fn insert_parameter(file: Option<&CStr>, category: &CStr, key: &CStr, value: Parameter) {
        let key = (file.map(CStr::to_owned), category.to_owned(), key.to_owned());
        PARAMS.with_borrow_mut(|p| p.insert(key, value));
    }

    pub(crate) fn parameter(file: Option<&CStr>, category: &CStr, key: &CStr) -> Option<Parameter> {
        let key = (file.map(CStr::to_owned), category.to_owned(), key.to_owned());
        PARAMS.with_borrow(|p| p.get(&key).copied())
    }

    /// Invoke the registered callback the way the host does once per event.
    pub(crate) fn fire(kind: CallbackType) {
        let Some(callback) = CALLBACK.get() else {
            return;
        };
        IN_CALLBACK.set(true);
        callback(kind);
        IN_CALLBACK.set(false);
    }

    /// # Safety
    ///
    /// Non-null pointers must be NUL-terminated strings.
    unsafe fn key_of(file: *const c_char, category: *const c_char, key: *const c_char) -> Option<Key> {
        if category.is_null() || key.is_null() {
            return None;
        }
        // SAFETY: Caller guarantees the pointers are valid C strings.
        unsafe {
            let file = (!file.is_null()).then(|| CStr::from_ptr(file).to_owned());
            Some((file, CStr::from_ptr(category).to_owned(), CStr::from_ptr(key).to_owned()))
        }
    }

    extern "system" fn get_sdk_version() -> i32 {
        SDK_VERSION.get()
    }

    extern "system" fn get_version() -> i32 {
        PRODUCT_VERSION
    }

    pub(crate) extern "system" fn get_version_hotfix() -> i32 {
        HOTFIX_VERSION
    }

    extern "system" fn get_game_identifier() -> i32 {
        GAME_ID
    }

    extern "system" fn set_callback_function(callback: CallbackFunction) {
        CALLBACK.set(Some(callback));
    }

    unsafe extern "system" fn get_parameter(
        file: *const c_char,
        category: *const c_char,
        key: *const c_char,
        out: *mut Parameter,
    ) -> i32 {
        if out.is_null() {
            return 0;
        }
        // SAFETY: The binding passes C strings from `CStr`s.
        let Some(key) = (unsafe { key_of(file, category, key) }) else {
            return 0;
        };
        match PARAMS.with_borrow(|p| p.get(&key).copied()) {
            Some(value) => {
                // SAFETY: `out` is non-null and points at a caller-owned `Parameter`.
                unsafe { out.write(value) };
                1
            }
            None => 0,
        }
    }

    unsafe extern "system" fn set_parameter(
        file: *const c_char,
        category: *const c_char,
        key: *const c_char,
        value: *const Parameter,
    ) -> i32 {
        if !IN_CALLBACK.get() || value.is_null() {
            return 0;
        }
        // SAFETY: The binding passes C strings from `CStr`s.
        let Some(key) = (unsafe { key_of(file, category, key) }) else {
            return 0;
        };
        // SAFETY: `value` is non-null and points at a caller-owned `Parameter`.
        let value = unsafe { value.read() };
        PARAMS.with_borrow_mut(|p| match p.get_mut(&key) {
            Some(slot) => {
                *slot = value;
                1
            }
            None => 0,
        })
    }

    extern "system" fn get_render_info() -> *mut RenderInfo {
        if !INITIALIZED.get() {
            return std::ptr::null_mut();
        }
        if RENDER_INFO.get().is_null() {
            RENDER_INFO.set(Box::into_raw(Box::new(RenderInfo {
                d3d11_device: std::ptr::null_mut(),
                d3d11_device_context: std::ptr::null_mut(),
                dxgi_swap_chain: std::ptr::null_mut(),
                screen_x: 1920,
                screen_y: 1080,
            })));
        }
        RENDER_INFO.get()
    }

    extern "system" fn get_state(state: StateType) -> i32 {
        match state {
            StateType::IS_EDITOR_ACTIVE => 1,
            StateType::CURSOR_POS_X => CURSOR_X,
            StateType::CURSOR_POS_Y => CURSOR_Y,
            _ => 0,
        }
    }
}
