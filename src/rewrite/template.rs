//! Replacement templates
//!
//! A template is literal text with `${name}` placeholders. `$$` stands for a
//! literal `$`; any other `$` is copied as is.
//!
//! ```
//! use rewrex::rewrite::Template;
//!
//! let template = Template::parse("${type} ${identifier};").unwrap();
//! assert_eq!(template.placeholders().collect::<Vec<_>>(), ["type", "identifier"]);
//! ```

use super::Pattern;
use super::rules::GroupValues;
use crate::grammar::{GrammarError, is_valid_group_name};

/// One piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    /// Text copied verbatim
    Literal(String),
    /// Group value substituted at render time
    Group(String),
}

/// A parsed replacement template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    parts: Vec<Part>,
}

impl Template {
    /// Parse a template string
    pub fn parse(source: &str) -> Result<Self, GrammarError> {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(pos) = rest.find('$') {
            literal.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            if let Some(tail) = after.strip_prefix('$') {
                literal.push('$');
                rest = tail;
            } else if let Some(body) = after.strip_prefix('{') {
                let end = body
                    .find('}')
                    .ok_or_else(|| GrammarError::UnterminatedPlaceholder(source.to_string()))?;
                let name = &body[..end];
                if !is_valid_group_name(name) {
                    return Err(GrammarError::InvalidCaptureName(name.to_string()));
                }
                if !literal.is_empty() {
                    parts.push(Part::Literal(std::mem::take(&mut literal)));
                }
                parts.push(Part::Group(name.to_string()));
                rest = &body[end + 1..];
            } else {
                literal.push('$');
                rest = after;
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            parts.push(Part::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            parts,
        })
    }

    /// Parse a template and check its placeholders against `pattern`
    pub fn for_pattern(source: &str, pattern: &Pattern) -> Result<Self, GrammarError> {
        let template = Self::parse(source)?;
        template.validate(pattern)?;
        Ok(template)
    }

    /// Check that every placeholder names a group of `pattern`
    pub fn validate(&self, pattern: &Pattern) -> Result<(), GrammarError> {
        match self.placeholders().find(|name| !pattern.has_group(name)) {
            Some(name) => Err(GrammarError::UnresolvedPlaceholder {
                name: name.to_string(),
                pattern: pattern.name().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// The template source text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Placeholder names, in order of appearance
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            Part::Group(name) => Some(name.as_str()),
            Part::Literal(_) => None,
        })
    }

    /// Substitute group values into the template
    ///
    /// Groups without a value render as the empty string.
    #[must_use]
    pub fn render(&self, values: &GroupValues) -> String {
        let mut out = String::with_capacity(self.source.len());
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Group(name) => out.push_str(values.get(name).unwrap_or("")),
            }
        }
        out
    }
}
