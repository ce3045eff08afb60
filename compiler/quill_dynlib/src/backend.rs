//! Library backends.
//!
//! The loader's retry policy is independent of how libraries are actually
//! opened. [`NativeBackend`] goes through the platform loader; tests supply
//! their own backend.

use std::ffi::c_void;
use std::fmt;
use std::path::Path;

/// Address of a symbol inside an open library.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Address(usize);

impl Address {
    pub const fn new(raw: usize) -> Self {
        Address(raw)
    }

    pub const fn raw(self) -> usize {
        self.0
    }

    pub fn as_ptr(self) -> *const c_void {
        self.0 as *const c_void
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Raw library operations. Failures are reported as text; the loader wraps
/// them in its own error types.
pub trait LibraryBackend {
    type Library;

    /// Open exactly `path`, without any retry.
    fn open_raw(&mut self, path: &Path) -> Result<Self::Library, String>;

    fn symbol(&self, library: &Self::Library, name: &str) -> Result<Address, String>;

    fn close_raw(&mut self, library: Self::Library) -> Result<(), String>;
}

/// Backend over the platform's dynamic loader.
#[derive(Copy, Clone, Debug, Default)]
pub struct NativeBackend;

#[allow(
    unsafe_code,
    reason = "opening a library runs its initializers and symbol types are unchecked"
)]
impl LibraryBackend for NativeBackend {
    type Library = libloading::Library;

    fn open_raw(&mut self, path: &Path) -> Result<Self::Library, String> {
        // SAFETY: the caller chose the library; its initializers run as with
        // any native dependency.
        unsafe { libloading::Library::new(path) }.map_err(|e| e.to_string())
    }

    fn symbol(&self, library: &Self::Library, name: &str) -> Result<Address, String> {
        // SAFETY: the symbol is read as an untyped pointer and never called
        // here.
        let symbol = unsafe { library.get::<*mut c_void>(name.as_bytes()) }
            .map_err(|e| e.to_string())?;
        let pointer: *mut c_void = *symbol;
        Ok(Address(pointer as usize))
    }

    fn close_raw(&mut self, library: Self::Library) -> Result<(), String> {
        library.close().map_err(|e| e.to_string())
    }
}
