use serde::{Deserialize, Serialize};

/// Configuration for a diff invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Prefix prepended to every generated path.
    pub root: String,
    /// Whether field names are escaped (`~` → `~0`, `/` → `~1`) before they
    /// are used as path segments.
    pub escape_segments: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            root: String::from("/"),
            escape_segments: true,
        }
    }
}

impl DiffOptions {
    /// Report paths relative to `root`, e.g. when diffing a sub-tree of a
    /// larger document.
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Use field names verbatim as path segments.
    pub fn without_escaping(mut self) -> Self {
        self.escape_segments = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = DiffOptions::default();
        assert_eq!(options.root, "/");
        assert!(options.escape_segments);
    }

    #[test]
    fn builder_helpers() {
        let options = DiffOptions::default().with_root("/doc/").without_escaping();
        assert_eq!(options.root, "/doc/");
        assert!(!options.escape_segments);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let options: DiffOptions = serde_json::from_str(r#"{"root": "/items/"}"#).unwrap();
        assert_eq!(options.root, "/items/");
        assert!(options.escape_segments);

        let options: DiffOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, DiffOptions::default());
    }
}
