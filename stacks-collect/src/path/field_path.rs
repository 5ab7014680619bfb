use crate::config::CollectConfig;
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};

/// A parsed path expression such as `"user.address.city"` or `"tags.*.name"`.
///
/// Segments borrow from the source string. An empty path has no segments
/// and addresses the item itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath<'a> {
    raw: &'a str,
    segments: SmallVec<[&'a str; 8]>,
    wildcard: char,
    has_wildcard: bool,
}

impl<'a> FieldPath<'a> {
    /// Splits `path` on the configured separator.
    pub fn parse(path: &'a str, config: &CollectConfig) -> Self {
        let segments: SmallVec<[&'a str; 8]> = if path.is_empty() {
            SmallVec::new()
        } else {
            path.split(config.separator()).collect()
        };
        let wildcard = config.wildcard();
        let has_wildcard = segments.iter().any(|s| is_wildcard(s, wildcard));
        FieldPath {
            raw: path,
            segments,
            wildcard,
            has_wildcard,
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether any segment is the wildcard.
    pub fn has_wildcard(&self) -> bool {
        self.has_wildcard
    }

    /// Whether `segment` is the wildcard this path was parsed with.
    pub fn is_wildcard_segment(&self, segment: &str) -> bool {
        is_wildcard(segment, self.wildcard)
    }
}

impl Display for FieldPath<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn is_wildcard(segment: &str, wildcard: char) -> bool {
    let mut chars = segment.chars();
    chars.next() == Some(wildcard) && chars.next().is_none()
}
