//! Named-placeholder templates.
//!
//! The page and its script payload are fixed text with `{{ name }}` slots.
//! A [`Template`] is parsed once into literal and placeholder segments and
//! then filled from a [`Fields`] map.
//!
//! ## Syntax
//!
//! - `{{name}}` or `{{ name }}` (spaces optional)
//! - Names are ASCII letters, digits and `_`
//! - There is no escape sequence and no nesting: the templates this crate
//!   ships never contain a literal `{{`
//!
//! ## Filling
//!
//! [`Template::fill`] checks every placeholder before writing anything, so a
//! missing value is reported as [`TemplateError::MissingField`] instead of
//! producing a half-filled document. Values are inserted verbatim and never
//! rescanned: a stylesheet full of `{ }` or a value that happens to contain
//! `{{ x }}` is inert.

use std::borrow::Cow;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TemplateError {
    #[error("no value supplied for placeholder `{0}`")]
    MissingField(String),
    #[error("unclosed placeholder at byte {offset}")]
    Unclosed { offset: usize },
    #[error("invalid placeholder name `{name}` at byte {offset}")]
    InvalidName { name: String, offset: usize },
}

#[derive(Debug, Clone, PartialEq)]
enum Segment<'t> {
    Literal(&'t str),
    Placeholder(&'t str),
}

/// A parsed template borrowing its source text.
#[derive(Debug, Clone)]
pub struct Template<'t> {
    segments: Vec<Segment<'t>>,
    /// Literal bytes, used to size the output buffer.
    literal_len: usize,
}

/// Values for a [`Template::fill`] call, keyed by placeholder name.
///
/// Values may be borrowed (the embedded stylesheet) or owned (rendered
/// fragments). Keys not used by the template are ignored.
#[derive(Debug, Default, Clone)]
pub struct Fields<'a> {
    values: BTreeMap<&'a str, Cow<'a, str>>,
}

impl<'a> Fields<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: &'a str, value: impl Into<Cow<'a, str>>) -> &mut Self {
        self.values.insert(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|v| v.as_ref())
    }

    #[cfg(test)]
    pub(crate) fn remove(&mut self, name: &str) -> Option<Cow<'a, str>> {
        self.values.remove(name)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'t> Template<'t> {
    /// Split `source` into literal text and placeholders.
    pub fn parse(source: &'t str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal_len = 0;
        let mut rest = source;
        let mut offset = 0;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Literal(&rest[..open]));
                literal_len += open;
            }
            let after_open = &rest[open + 2..];
            let close = after_open.find("}}").ok_or(TemplateError::Unclosed {
                offset: offset + open,
            })?;
            let name = after_open[..close].trim();
            if name.is_empty() || !name.chars().all(is_name_char) {
                return Err(TemplateError::InvalidName {
                    name: name.to_string(),
                    offset: offset + open,
                });
            }
            segments.push(Segment::Placeholder(name));

            let consumed = open + 2 + close + 2;
            rest = &rest[consumed..];
            offset += consumed;
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest));
            literal_len += rest.len();
        }

        Ok(Self {
            segments,
            literal_len,
        })
    }

    /// Distinct placeholder names, in order of first appearance.
    pub fn placeholders(&self) -> Vec<&'t str> {
        let mut names: Vec<&'t str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(name) {
                    names.push(*name);
                }
            }
        }
        names
    }

    /// Substitute every placeholder with its value from `fields`.
    ///
    /// Fails with [`TemplateError::MissingField`] naming the first placeholder
    /// (in document order) that has no value. Nothing is rendered in that case.
    pub fn fill(&self, fields: &Fields<'_>) -> Result<String, TemplateError> {
        let mut values_len = 0;
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                let value = fields
                    .get(name)
                    .ok_or_else(|| TemplateError::MissingField(name.to_string()))?;
                values_len += value.len();
            }
        }

        let mut out = String::with_capacity(self.literal_len + values_len);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                // Presence checked above
                Segment::Placeholder(name) => out.push_str(fields.get(name).unwrap_or_default()),
            }
        }
        Ok(out)
    }
}
