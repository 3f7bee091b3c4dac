//! Token accumulation for translated output.
//!
//! Every token written with [`Output::emit`] is preceded by a single space, which keeps
//! tokens apart without any layout logic. Contiguous text (string template pieces,
//! mangled suffixes) goes through [`Output::emit_no_space`], and
//! [`Output::suppress_space`] drops the separator before the next emitted token.

#[derive(Debug, Default)]
pub struct Output {
    result: String,
    suppress_next_space: bool,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Output {
            result: String::with_capacity(capacity),
            suppress_next_space: false,
        }
    }

    /// Write a token, separated from the previous one by a space.
    pub fn emit(&mut self, text: &str) {
        if self.suppress_next_space {
            self.suppress_next_space = false;
        } else {
            self.result.push(' ');
        }
        self.result.push_str(text);
    }

    /// Write text directly after the previous token.
    pub fn emit_no_space(&mut self, text: &str) {
        self.suppress_next_space = false;
        self.result.push_str(text);
    }

    /// Make the next [`Output::emit`] attach to the previous token.
    pub fn suppress_space(&mut self) {
        self.suppress_next_space = true;
    }

    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.result
    }

    pub fn finish(self) -> String {
        self.result
    }
}
