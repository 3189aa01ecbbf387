//! Compiled path templates.
//!
//! A template is normalized and split into segments once, at registration.
//! Matching then walks the precomputed segments instead of re-scanning the
//! template string on every request.

use std::fmt;

use crate::routing::normalize::normalize;

/// One `/`-separated piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment byte for byte.
    Literal(String),
    /// Binds the request segment under this name.
    Param(String),
}

impl Segment {
    /// Classify a raw template segment.
    ///
    /// Only `{` + one or more ASCII word characters + `}` is a parameter.
    /// Anything else, including `{}` or `{a-b}`, stays a literal.
    pub fn parse(raw: &str) -> Self {
        match raw
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        {
            Some(name) if !name.is_empty() && name.bytes().all(is_word_byte) => {
                Segment::Param(name.to_string())
            }
            _ => Segment::Literal(raw.to_string()),
        }
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Split a normalized path into its segments.
///
/// Only the leading `/` is dropped, so the root `/` is a single empty
/// segment and `/{id}` can bind it.
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.strip_prefix('/').unwrap_or(path).split('/')
}

/// A normalized, pre-split route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Compile a template. Never fails: any string is accepted.
    pub fn compile(raw: &str) -> Self {
        let source = normalize(raw);
        let segments = split_segments(&source).map(Segment::parse).collect();
        Self { source, segments }
    }

    /// The normalized template string, used as the routing key.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.source == "/"
    }

    /// Parameter names in left-to-right order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
