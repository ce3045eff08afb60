//! Quill Dynlib - dynamic library loading
//!
//! Used by the toolchain to open native libraries and look up symbols. The
//! resolution passes never load libraries.
//!
//! [`open`] tries the path as given first, then once more with the
//! platform's [`LIBRARY_SUFFIX`] appended (`.dll`, `.dylib` or `.so`).

mod backend;
mod error;
mod loader;

use std::path::Path;

pub use backend::{Address, LibraryBackend, NativeBackend};
pub use error::{LoadError, SymbolError};
pub use loader::{Handle, Loader, LIBRARY_SUFFIX};

/// A library opened through the platform loader.
pub type NativeHandle = Handle<libloading::Library>;

/// Open a native library, falling back to the suffixed path.
pub fn open(path: impl AsRef<Path>) -> Result<NativeHandle, LoadError> {
    Loader::native().open(path)
}

pub fn lookup_symbol(handle: &NativeHandle, name: &str) -> Result<Address, SymbolError> {
    Loader::native().lookup_symbol(handle, name)
}

/// Close a native library. Returns whether the platform reported success.
pub fn close(handle: NativeHandle) -> bool {
    Loader::native().close(handle)
}
