//! Library loader with platform-suffix fallback.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::backend::{Address, LibraryBackend, NativeBackend};
use crate::error::{LoadError, SymbolError};

/// File suffix of shared libraries on the target platform.
#[cfg(windows)]
pub const LIBRARY_SUFFIX: &str = ".dll";
#[cfg(target_vendor = "apple")]
pub const LIBRARY_SUFFIX: &str = ".dylib";
#[cfg(not(any(windows, target_vendor = "apple")))]
pub const LIBRARY_SUFFIX: &str = ".so";

/// An open library and the path it was actually opened from.
#[derive(Debug)]
pub struct Handle<L> {
    library: L,
    path: PathBuf,
}

impl<L> Handle<L> {
    /// The opened path; carries the suffix when the fallback was used.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn library(&self) -> &L {
        &self.library
    }
}

/// Opens libraries through a backend, retrying once with the platform
/// suffix.
#[derive(Debug, Default)]
pub struct Loader<B> {
    backend: B,
}

impl Loader<NativeBackend> {
    pub fn native() -> Self {
        Loader {
            backend: NativeBackend,
        }
    }
}

impl<B: LibraryBackend> Loader<B> {
    pub fn with_backend(backend: B) -> Self {
        Loader { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Open `path`, or `path` + [`LIBRARY_SUFFIX`] when the bare path does
    /// not open. The error names the path as requested and the reason the
    /// bare path failed.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<Handle<B::Library>, LoadError> {
        let path = path.as_ref();
        let reason = match self.backend.open_raw(path) {
            Ok(library) => {
                tracing::debug!(path = %path.display(), "library opened");
                return Ok(Handle {
                    library,
                    path: path.to_path_buf(),
                });
            }
            Err(reason) => reason,
        };

        let suffixed = with_suffix(path);
        tracing::debug!(
            path = %path.display(),
            %reason,
            retry = %suffixed.display(),
            "bare path failed, retrying with platform suffix"
        );
        match self.backend.open_raw(&suffixed) {
            Ok(library) => Ok(Handle {
                library,
                path: suffixed,
            }),
            Err(suffixed_reason) => {
                tracing::debug!(
                    path = %suffixed.display(),
                    reason = %suffixed_reason,
                    "library not found"
                );
                Err(LoadError {
                    path: path.to_path_buf(),
                    reason,
                })
            }
        }
    }

    pub fn lookup_symbol(
        &self,
        handle: &Handle<B::Library>,
        name: &str,
    ) -> Result<Address, SymbolError> {
        self.backend
            .symbol(&handle.library, name)
            .map_err(|reason| SymbolError {
                name: name.to_string(),
                reason,
            })
    }

    /// Close `handle`. Returns whether the platform reported success.
    pub fn close(&mut self, handle: Handle<B::Library>) -> bool {
        match self.backend.close_raw(handle.library) {
            Ok(()) => true,
            Err(reason) => {
                tracing::debug!(path = %handle.path.display(), %reason, "close failed");
                false
            }
        }
    }
}

fn with_suffix(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(LIBRARY_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests;
