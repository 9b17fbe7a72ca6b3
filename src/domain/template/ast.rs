// Compiled representation of resource-name path templates

use crate::error::TemplateError;

use super::parser;

/// One `/`-delimited piece of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must appear verbatim in a concrete resource name.
    Literal(String),
    /// Captures (or is substituted by) the value bound to this name.
    Placeholder(String),
}

/// A compiled path template: an ordered, immutable list of segments.
///
/// Compiled once and reused for every render/match call. Holds no mutable
/// state, so it is freely shareable across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Compile a pattern such as `projects/{project}/feeds/{feed}`.
    ///
    /// Each `/`-separated segment is either a literal token or a `{name}`
    /// placeholder. Placeholder names must be unique within one pattern.
    pub fn compile(pattern: &str) -> Result<Self, TemplateError> {
        let segments = parser::parse(pattern)?;
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Placeholder names in template order.
    pub fn placeholders(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }
}
