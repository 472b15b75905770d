//! Configuration for an exploration session.

/// Configuration for an exploration session.
#[derive(Debug, Clone)]
pub struct ExploreConfig {
    /// Highlight room names and the end-of-path tag with ANSI colors.
    pub color: bool,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl ExploreConfig {
    /// Enable or disable colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
