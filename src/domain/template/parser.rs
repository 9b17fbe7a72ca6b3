// Path-template pattern parsing

use std::collections::HashSet;

use crate::error::TemplateError;

use super::ast::Segment;

/// Split a pattern into tagged segments, rejecting malformed input.
///
/// The grammar is deliberately flat: no nested, optional or wildcard
/// segments. A segment is a placeholder iff it is exactly `{name}`;
/// braces anywhere else are an error.
pub(crate) fn parse(pattern: &str) -> Result<Vec<Segment>, TemplateError> {
    if pattern.is_empty() {
        return Err(TemplateError::Empty);
    }

    let mut segments = Vec::new();
    let mut seen = HashSet::new();

    for (idx, raw) in pattern.split('/').enumerate() {
        if let Some(inner) = raw.strip_prefix('{') {
            let name = inner
                .strip_suffix('}')
                .ok_or(TemplateError::UnterminatedPlaceholder(idx))?;

            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholder(idx));
            }
            if name.contains('{') || name.contains('}') {
                return Err(TemplateError::UnexpectedBrace(idx));
            }
            if !seen.insert(name.to_string()) {
                return Err(TemplateError::DuplicatePlaceholder(name.to_string()));
            }

            segments.push(Segment::Placeholder(name.to_string()));
        } else {
            if raw.contains('{') || raw.contains('}') {
                return Err(TemplateError::UnexpectedBrace(idx));
            }
            segments.push(Segment::Literal(raw.to_string()));
        }
    }

    Ok(segments)
}
