//! Source-to-target type name mapping

use std::collections::BTreeMap;

use crate::rewrite::SubSelection;

/// Type used when a declaration carries no type relation
pub const FALLBACK_TYPE: &str = "object";

/// Built-in ActionScript to C# type names
const BUILTIN: &[(&str, &str)] = &[
    ("*", "object"),
    ("Array", "object[]"),
    ("Boolean", "bool"),
    ("Number", "double"),
    ("Object", "object"),
    ("String", "string"),
    ("int", "int"),
    ("uint", "uint"),
    ("void", "void"),
];

/// Maps source type names to target type names
///
/// Unknown names pass through unchanged. `Vector.<T>` becomes `List<T>` with
/// `T` mapped recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    mappings: BTreeMap<String, String>,
}

impl Default for TypeMap {
    fn default() -> Self {
        Self {
            mappings: BUILTIN
                .iter()
                .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
                .collect(),
        }
    }
}

impl TypeMap {
    /// A map with no entries at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            mappings: BTreeMap::new(),
        }
    }

    /// Add or replace a mapping
    #[must_use]
    pub fn with_mapping(mut self, from: &str, to: &str) -> Self {
        self.mappings.insert(from.to_string(), to.to_string());
        self
    }

    /// Map a source type name
    #[must_use]
    pub fn map(&self, name: &str) -> String {
        let name = name.trim();
        if let Some(target) = self.mappings.get(name) {
            return target.clone();
        }
        let vector = name.strip_prefix("Vector.<").and_then(|rest| rest.strip_suffix('>'));
        if let Some(element) = vector {
            return format!("List<{}>", self.map(element));
        }
        name.to_string()
    }

    /// Map the type captured by `selection`, or the fallback if it is absent
    #[must_use]
    pub fn map_selection(&self, selection: &SubSelection<'_>) -> String {
        selection.text().map_or_else(|| FALLBACK_TYPE.to_string(), |text| self.map(text))
    }

    /// Number of mappings
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Check if there are no mappings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl Extend<(String, String)> for TypeMap {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.mappings.extend(iter);
    }
}
