// Path-template engine for structured resource names
//
// Resource names in this API are forward-slash-separated identifiers such as
// `projects/{project}/feeds/{feed}`. This module compiles such a pattern once
// into an immutable matcher/renderer pair: render builds a concrete name from
// named bindings, matches parses a concrete name back into those bindings.

mod ast;
mod parser;
mod resolver;

pub use ast::{PathTemplate, Segment};
