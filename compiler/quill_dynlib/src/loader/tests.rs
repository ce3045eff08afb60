use std::collections::HashMap;

use pretty_assertions::assert_eq;

use super::*;

/// In-memory libraries, keyed by path, each with its symbol table.
#[derive(Default)]
struct FakeBackend {
    libraries: HashMap<PathBuf, HashMap<String, usize>>,
    attempts: Vec<PathBuf>,
    closed: Vec<PathBuf>,
    fail_close: bool,
}

impl FakeBackend {
    fn with_library(mut self, path: &str, symbols: &[(&str, usize)]) -> Self {
        let symbols = symbols
            .iter()
            .map(|&(name, address)| (name.to_string(), address))
            .collect();
        self.libraries.insert(PathBuf::from(path), symbols);
        self
    }
}

impl LibraryBackend for FakeBackend {
    type Library = PathBuf;

    fn open_raw(&mut self, path: &Path) -> Result<PathBuf, String> {
        self.attempts.push(path.to_path_buf());
        if self.libraries.contains_key(path) {
            Ok(path.to_path_buf())
        } else {
            Err(format!("{}: cannot open shared object file", path.display()))
        }
    }

    fn symbol(&self, library: &PathBuf, name: &str) -> Result<Address, String> {
        self.libraries
            .get(library)
            .and_then(|symbols| symbols.get(name))
            .map(|&raw| Address::new(raw))
            .ok_or_else(|| format!("undefined symbol: {name}"))
    }

    fn close_raw(&mut self, library: PathBuf) -> Result<(), String> {
        if self.fail_close {
            return Err("library is busy".to_string());
        }
        self.closed.push(library);
        Ok(())
    }
}

fn attempts(loader: &Loader<FakeBackend>) -> Vec<PathBuf> {
    loader.backend().attempts.clone()
}

#[test]
fn bare_path_opens_without_retry() {
    let mut loader = Loader::with_backend(FakeBackend::default().with_library("plugin", &[]));

    let handle = loader.open("plugin").unwrap();

    assert_eq!(handle.path(), Path::new("plugin"));
    assert_eq!(attempts(&loader), vec![PathBuf::from("plugin")]);
}

#[test]
fn falls_back_to_platform_suffix() {
    let suffixed = format!("libfoo{LIBRARY_SUFFIX}");
    let mut loader = Loader::with_backend(FakeBackend::default().with_library(&suffixed, &[]));

    let handle = loader.open("libfoo").unwrap();

    assert_eq!(handle.path(), Path::new(&suffixed));
    assert_eq!(
        attempts(&loader),
        vec![PathBuf::from("libfoo"), PathBuf::from(&suffixed)]
    );
}

#[test]
fn missing_library_names_the_requested_path() {
    let mut loader = Loader::with_backend(FakeBackend::default());

    let err = loader.open("libmissing").unwrap_err();

    assert_eq!(err.path, PathBuf::from("libmissing"));
    assert_eq!(err.reason, "libmissing: cannot open shared object file");
    // One fallback, no further retries.
    assert_eq!(attempts(&loader).len(), 2);
}

#[test]
fn symbols_resolve_to_addresses() {
    let mut loader = Loader::with_backend(
        FakeBackend::default().with_library("math", &[("quill_sqrt", 0x1000)]),
    );
    let handle = loader.open("math").unwrap();

    let address = loader.lookup_symbol(&handle, "quill_sqrt").unwrap();
    assert_eq!(address.raw(), 0x1000);
    assert_eq!(address.to_string(), "0x1000");

    let err = loader.lookup_symbol(&handle, "quill_cbrt").unwrap_err();
    assert_eq!(
        err,
        SymbolError {
            name: "quill_cbrt".to_string(),
            reason: "undefined symbol: quill_cbrt".to_string(),
        }
    );
}

#[test]
fn close_reports_success() {
    let mut loader = Loader::with_backend(FakeBackend::default().with_library("a", &[]));
    let handle = loader.open("a").unwrap();

    assert!(loader.close(handle));
    assert_eq!(loader.backend().closed, vec![PathBuf::from("a")]);
}

#[test]
fn close_reports_failure() {
    let backend = FakeBackend {
        fail_close: true,
        ..FakeBackend::default().with_library("a", &[])
    };
    let mut loader = Loader::with_backend(backend);
    let handle = loader.open("a").unwrap();

    assert!(!loader.close(handle));
}

#[test]
fn suffix_matches_platform() {
    let expected = if cfg!(windows) {
        ".dll"
    } else if cfg!(target_vendor = "apple") {
        ".dylib"
    } else {
        ".so"
    };
    assert_eq!(LIBRARY_SUFFIX, expected);
}

#[test]
fn native_loader_reports_missing_library() {
    let err = crate::open("/nonexistent/quill/libnothing").unwrap_err();
    assert_eq!(err.path, PathBuf::from("/nonexistent/quill/libnothing"));
    assert!(!err.reason.is_empty());
}
