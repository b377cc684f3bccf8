//! Slash-delimited addresses into a value tree.

use std::borrow::Cow;
use std::fmt;

/// A location in a value tree.
///
/// Internally the pointer is kept as a prefix that always ends with exactly
/// one `/`, so appending a segment never produces doubled or missing
/// separators. The address of the location itself is the prefix without its
/// trailing slash, except for the bare root, whose address is `/`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pointer {
    prefix: String,
}

impl Pointer {
    /// Build a root pointer from a caller-supplied prefix.
    ///
    /// The prefix is kept verbatim apart from its trailing slashes, which are
    /// collapsed to one. An empty prefix is the document root.
    pub fn root(prefix: &str) -> Self {
        let mut prefix = prefix.trim_end_matches('/').to_owned();
        prefix.push('/');
        Self { prefix }
    }

    /// The pointer of a named child, escaping the segment.
    pub fn field(&self, name: &str) -> Self {
        self.push(&escape(name))
    }

    /// The pointer of a named child, using the segment verbatim.
    pub fn field_raw(&self, name: &str) -> Self {
        self.push(name)
    }

    /// The pointer of a sequence element.
    pub fn index(&self, index: usize) -> Self {
        self.push(&index.to_string())
    }

    /// The address of this location.
    ///
    /// The address drops the trailing slash of the prefix, so a root built
    /// from `/doc/` addresses itself as `/doc`. The bare root addresses
    /// itself as `/`.
    pub fn address(&self) -> String {
        match self.prefix.strip_suffix('/') {
            Some(address) if !address.is_empty() => address.to_owned(),
            _ => String::from("/"),
        }
    }

    /// The prefix children are appended to, ending with `/`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn push(&self, segment: &str) -> Self {
        let mut prefix = String::with_capacity(self.prefix.len() + segment.len() + 1);
        prefix.push_str(&self.prefix);
        prefix.push_str(segment);
        prefix.push('/');
        Self { prefix }
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::root("/")
    }
}

impl fmt::Debug for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pointer({})", self.address())
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}

/// Escape a segment as in RFC 6901: `~` becomes `~0` and `/` becomes `~1`.
pub fn escape(segment: &str) -> Cow<'_, str> {
    if segment.contains(['~', '/']) {
        Cow::Owned(segment.replace('~', "~0").replace('/', "~1"))
    } else {
        Cow::Borrowed(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_address() {
        assert_eq!(Pointer::root("/").address(), "/");
        assert_eq!(Pointer::root("").address(), "/");
        assert_eq!(Pointer::default().address(), "/");
    }

    #[test]
    fn root_prefix_is_normalized() {
        assert_eq!(Pointer::root("/doc").prefix(), "/doc/");
        assert_eq!(Pointer::root("/doc/").prefix(), "/doc/");
        assert_eq!(Pointer::root("/doc//").prefix(), "/doc/");
        assert_eq!(Pointer::root("/doc/").address(), "/doc");
    }

    #[test]
    fn field_under_root() {
        assert_eq!(Pointer::root("/").field("x").address(), "/x");
        assert_eq!(Pointer::root("/doc/").field("title").address(), "/doc/title");
        assert_eq!(Pointer::root("/doc").field("title").address(), "/doc/title");
    }

    #[test]
    fn nested_and_indexed() {
        let p = Pointer::root("/doc/").field("items").index(3).field("name");
        assert_eq!(p.address(), "/doc/items/3/name");
        assert_eq!(p.prefix(), "/doc/items/3/name/");
    }

    #[test]
    fn segments_are_escaped() {
        assert_eq!(escape("a/b"), "a~1b");
        assert_eq!(escape("m~n"), "m~0n");
        assert_eq!(escape("~/"), "~0~1");
        assert!(matches!(escape("plain"), Cow::Borrowed("plain")));
        assert_eq!(Pointer::root("/").field("a/b").address(), "/a~1b");
        assert_eq!(Pointer::root("/").field_raw("a/b").address(), "/a/b");
    }

    #[test]
    fn display_matches_address() {
        let p = Pointer::root("/").field("k").index(0);
        assert_eq!(p.to_string(), "/k/0");
        assert_eq!(format!("{:?}", p), "Pointer(/k/0)");
    }
}
