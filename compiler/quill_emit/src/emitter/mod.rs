//! Output Emitter
//!
//! Abstraction for output production during emission.
//! The generated output is indented with tabs, one per nesting level.

/// Trait for emitting generated output.
///
/// Emission helpers write to an emitter; implementations decide where the
/// text goes.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation for the given nesting depth.
    fn emit_indent(&mut self, depth: usize);

    /// Emit a single space.
    fn emit_space(&mut self);
}

/// Tab-aware string emitter.
///
/// Tracks a nesting depth; the first fragment written on a line is
/// preceded by one tab per level.
pub struct TabWriter {
    buffer: String,
    depth: usize,
    at_line_start: bool,
}

impl TabWriter {
    pub fn new() -> Self {
        TabWriter {
            buffer: String::new(),
            depth: 0,
            at_line_start: true,
        }
    }

    /// Enter one nesting level. Applies from the next line.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Leave one nesting level. Extra calls stay at depth zero.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// End the current line.
    pub fn newline(&mut self) {
        self.emit_newline();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Ensure the output ends with a single newline.
    pub fn ensure_trailing_newline(&mut self) {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.emit_newline();
        }
    }

    pub fn output(self) -> String {
        self.buffer
    }

    fn start_line(&mut self) {
        if self.at_line_start {
            self.at_line_start = false;
            self.emit_indent(self.depth);
        }
    }
}

impl Default for TabWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for TabWriter {
    fn emit(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.start_line();
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
        self.at_line_start = true;
    }

    fn emit_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.buffer.push('\t');
        }
    }

    fn emit_space(&mut self) {
        self.start_line();
        self.buffer.push(' ');
    }
}
