// Rendering and matching of concrete resource names

use std::collections::HashMap;

use crate::error::TemplateError;

use super::ast::{PathTemplate, Segment};

impl PathTemplate {
    /// Substitute bindings into the template to produce a resource name.
    ///
    /// Every declared placeholder must have a non-empty binding; extra keys
    /// are ignored. Values are inserted verbatim, so the caller must not
    /// supply values containing `/`.
    pub fn render(&self, bindings: &HashMap<String, String>) -> Result<String, TemplateError> {
        let mut parts = Vec::with_capacity(self.segment_count());

        for segment in self.segments() {
            match segment {
                Segment::Literal(literal) => parts.push(literal.as_str()),
                Segment::Placeholder(name) => {
                    let value = bindings
                        .get(name)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| TemplateError::MissingBinding(name.clone()))?;
                    parts.push(value.as_str());
                }
            }
        }

        Ok(parts.join("/"))
    }

    /// Parse a resource name back into the bindings that produced it.
    ///
    /// The candidate must have exactly as many `/`-delimited parts as the
    /// template has segments, and every literal position must compare equal.
    /// For any valid bindings, `matches(render(b))` returns `b` unchanged.
    pub fn matches(&self, name: &str) -> Result<HashMap<String, String>, TemplateError> {
        let parts: Vec<&str> = name.split('/').collect();

        if parts.len() != self.segment_count() {
            return Err(TemplateError::NoMatch(format!(
                "expected {} segments, found {} in '{}'",
                self.segment_count(),
                parts.len(),
                name
            )));
        }

        let mut bindings = HashMap::new();
        for (segment, part) in self.segments().iter().zip(parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return Err(TemplateError::NoMatch(format!(
                            "expected literal segment '{}', found '{}'",
                            literal, part
                        )));
                    }
                }
                Segment::Placeholder(name) => {
                    bindings.insert(name.clone(), part.to_string());
                }
            }
        }

        Ok(bindings)
    }
}
