//! Fixpoint driver for the resolution passes.
//!
//! Each pass walks every module in the order given, declarations in source
//! order. A node that cannot finish yet returns [`Response::Pending`]; the
//! driver repeats the walk until a pass ends with nothing pending or the pass
//! budget runs out. Nodes still pending after the last pass are reported as
//! unresolved references, one diagnostic per node.

use rustc_hash::FxHashMap;

use quill_diagnostic::{
    internal_error, unresolved_reference, Diagnostic, DiagnosticConfig, DiagnosticQueue,
    ErrorGuaranteed,
};
use quill_ir::{Name, NodeArena, NodeId, Span, StringInterner};

use crate::{register, ResolverConfig, Response, Trail};

/// A node that deferred in the most recent pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingNode {
    pub node: NodeId,
    pub span: Span,
    /// Why the node could not finish, e.g. "`Foo` is not declared yet".
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// A pass completed with nothing pending and no hard error was reported.
    Resolved,
    /// The pass budget ran out; these nodes were still pending.
    Unresolved { nodes: Vec<NodeId> },
    /// At least one hard error was reported.
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionOutcome {
    /// Passes actually run.
    pub passes: usize,
    pub status: ResolutionStatus,
}

impl ResolutionOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self.status, ResolutionStatus::Resolved)
    }
}

/// Drives resolution for one compilation run.
///
/// The resolver borrows the node tree for the run and owns the run's
/// diagnostic queue; nothing is shared between runs.
pub struct Resolver<'a> {
    pub(crate) arena: &'a mut NodeArena,
    pub(crate) interner: &'a StringInterner,
    modules: Vec<NodeId>,
    /// Module name to id, for imports.
    pub(crate) module_index: FxHashMap<Name, NodeId>,
    config: ResolverConfig,
    diagnostics: DiagnosticQueue,
    pending: Vec<PendingNode>,
    pending_index: FxHashMap<NodeId, usize>,
    failed: Option<ErrorGuaranteed>,
    passes: usize,
    trail: Trail,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over `modules`, which are walked in the given order.
    pub fn new(
        arena: &'a mut NodeArena,
        interner: &'a StringInterner,
        modules: impl IntoIterator<Item = NodeId>,
    ) -> Self {
        let modules: Vec<NodeId> = modules.into_iter().collect();
        let module_index = modules
            .iter()
            .filter_map(|&id| Some((arena.as_module(id)?.name, id)))
            .collect();
        Resolver {
            arena,
            interner,
            modules,
            module_index,
            config: ResolverConfig::default(),
            diagnostics: DiagnosticQueue::with_config(DiagnosticConfig::unlimited()),
            pending: Vec::new(),
            pending_index: FxHashMap::default(),
            failed: None,
            passes: 0,
            trail: Trail::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Continue reporting into `queue`, typically the queue that collected
    /// registration errors while the tree was built. Errors already in it
    /// mark the run as failed. Unresolved references are reported past the
    /// queue's limit and deduplication, one per pending node.
    #[must_use]
    pub fn with_diagnostics(mut self, queue: DiagnosticQueue) -> Self {
        self.failed = queue.has_errors();
        self.diagnostics = queue;
        self
    }

    pub fn arena(&self) -> &NodeArena {
        self.arena
    }

    pub fn interner(&self) -> &StringInterner {
        self.interner
    }

    pub fn config(&self) -> ResolverConfig {
        self.config
    }

    pub fn diagnostics(&self) -> &DiagnosticQueue {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> DiagnosticQueue {
        self.diagnostics
    }

    /// Passes run so far.
    pub fn pass_count(&self) -> usize {
        self.passes
    }

    /// Nodes that deferred in the most recent pass, in traversal order.
    pub fn pending(&self) -> &[PendingNode] {
        &self.pending
    }

    pub fn has_failed(&self) -> bool {
        self.failed.is_some()
    }

    /// Run passes until a fixpoint or until the pass budget is spent.
    #[tracing::instrument(level = "debug", skip_all, fields(
        modules = self.modules.len(),
        max_passes = self.config.max_passes,
    ))]
    pub fn run(&mut self) -> ResolutionOutcome {
        let mut response = Response::Pending;
        for _ in 0..self.config.max_passes.max(1) {
            response = self.pass();
            if response.is_ok() {
                break;
            }
        }

        if response.is_pending() {
            self.report_unresolved();
        }

        let status = if self.failed.is_some() {
            ResolutionStatus::Failed
        } else if response.is_pending() {
            ResolutionStatus::Unresolved {
                nodes: self.pending.iter().map(|p| p.node).collect(),
            }
        } else {
            ResolutionStatus::Resolved
        };
        tracing::debug!(passes = self.passes, ?status, "resolution finished");
        ResolutionOutcome {
            passes: self.passes,
            status,
        }
    }

    /// Run one pass over every module.
    pub fn pass(&mut self) -> Response {
        self.passes += 1;
        self.pending.clear();
        self.pending_index.clear();

        let mut response = Response::Ok;
        for index in 0..self.modules.len() {
            let module = self.modules[index];
            // Each top-level walk starts from an empty trail.
            let mut trail = std::mem::take(&mut self.trail);
            trail.clear();
            response = response.and(self.resolve(&mut trail, module));
            self.trail = trail;
        }

        tracing::debug!(
            pass = self.passes,
            pending = self.pending.len(),
            "pass complete"
        );
        response
    }

    /// Record that `node` cannot finish this pass and return `Pending`.
    ///
    /// Only the node that hit the missing dependency calls this; ancestors
    /// just propagate the `Pending` they receive.
    pub fn defer(&mut self, node: NodeId, reason: impl Into<String>) -> Response {
        let reason = reason.into();
        tracing::trace!(%node, %reason, "deferred");
        if let Some(&index) = self.pending_index.get(&node) {
            self.pending[index].reason = reason;
        } else {
            self.pending_index.insert(node, self.pending.len());
            self.pending.push(PendingNode {
                node,
                span: self.arena.span(node),
                reason,
            });
        }
        Response::Pending
    }

    /// Report a hard error. The run will end as failed, but the pass goes on.
    pub fn report_fatal(&mut self, diagnostic: Diagnostic) -> ErrorGuaranteed {
        tracing::debug!(code = %diagnostic.code, message = %diagnostic.message, "hard error");
        let guarantee = self.diagnostics.emit_error(diagnostic);
        self.failed = Some(guarantee);
        guarantee
    }

    /// Register `element` with `enum_id`, reporting failures to this run's
    /// queue.
    pub fn add_element(
        &mut self,
        enum_id: NodeId,
        element_id: NodeId,
    ) -> Result<(), ErrorGuaranteed> {
        let result = register::add_element(
            self.arena,
            self.interner,
            &mut self.diagnostics,
            enum_id,
            element_id,
        );
        if let Err(guarantee) = result {
            self.failed = Some(guarantee);
        }
        result
    }

    pub(crate) fn name_str(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    fn report_unresolved(&mut self) {
        if self.pending.is_empty() {
            // A Pending response must come from a recorded deferral.
            let diagnostic = internal_error(
                Span::DUMMY,
                "resolution stalled without a pending node",
            );
            self.report_fatal(diagnostic);
            return;
        }
        for pending in &self.pending {
            self.diagnostics
                .force_error(unresolved_reference(pending.span, &pending.reason));
        }
    }
}

#[cfg(test)]
mod tests;
