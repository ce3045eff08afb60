//! Run-wide diagnostic sink.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of identical reports (same code, span and message)
//! - Unfiltered appends for reports owed once per subject
//! - `ErrorGuaranteed` proof that errors were emitted
//!
//! The queue is append-only while a run is in progress. Diagnostics are kept
//! in the order they were reported, which is the resolver's deterministic
//! traversal order.

use rustc_hash::FxHashSet;

use quill_ir::Span;

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic identical to one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 100,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// No limit and no deduplication.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<(ErrorCode, Option<Span>, String)>,
    error_count: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if the diagnostic was queued, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let is_error = diag.is_error();

        if is_error && self.limit_reached() {
            return false;
        }

        if self.config.deduplicate {
            let key = (diag.code, diag.primary_span(), diag.message.clone());
            if !self.seen.insert(key) {
                return false;
            }
        }

        self.push(diag);
        true
    }

    /// Emit an error and get proof that it was emitted.
    ///
    /// The proof is returned even when the error was filtered as a duplicate
    /// or past the limit: an equivalent error is already on record.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        self.add(diag);
        ErrorGuaranteed::new()
    }

    /// Emit an error past the limit and deduplication filters.
    ///
    /// For reports owed once per subject, such as one unresolved reference
    /// per pending node: two subjects may share a span and message, and the
    /// batch may arrive after the limit was reached.
    pub fn force_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        if self.config.deduplicate {
            self.seen
                .insert((diag.code, diag.primary_span(), diag.message.clone()));
        }
        self.push(diag);
        ErrorGuaranteed::new()
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Proof that at least one error was emitted, if any was.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Queued diagnostics, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn push(&mut self, diag: Diagnostic) {
        if diag.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
    }
}
