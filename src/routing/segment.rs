//! Path segmentation.
//!
//! Patterns and request paths are split on `/` with empty pieces dropped, so
//! `/a//b/`, `a/b` and `/a/b` all yield `["a", "b"]`. A path with no pieces
//! (`""`, `/`, `//`) yields the single synthetic segment [`ROOT_SEGMENT`].

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Synthetic segment standing in for the root path.
pub const ROOT_SEGMENT: &str = "/";

/// Leading character that turns a pattern segment into a named capture.
pub const CAPTURE_MARKER: char = ':';

/// One segment of a registered pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSegment<'a> {
    /// Matches exactly this text.
    Literal(&'a str),
    /// Matches any single segment and binds it to the given name.
    Capture(&'a str),
}

impl<'a> PatternSegment<'a> {
    /// Classify a raw segment. The name of a capture may be empty (`:`).
    pub fn parse(segment: &'a str) -> Self {
        match segment.strip_prefix(CAPTURE_MARKER) {
            Some(name) => PatternSegment::Capture(name),
            None => PatternSegment::Literal(segment),
        }
    }
}

/// Split a path into its non-empty segments.
pub fn split_path(path: &str) -> Vec<&str> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        vec![ROOT_SEGMENT]
    } else {
        segments
    }
}

/// Split a route pattern into classified segments.
pub fn split_pattern(pattern: &str) -> Vec<PatternSegment<'_>> {
    split_path(pattern)
        .into_iter()
        .map(PatternSegment::parse)
        .collect()
}

/// Percent-decode a raw request path.
///
/// Invalid UTF-8 sequences are replaced rather than rejected. Encoded slashes
/// become real separators once decoded.
pub fn decode_path(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}
