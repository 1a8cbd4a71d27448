//! Per-group replacement rules

use std::collections::BTreeMap;
use std::fmt;

use super::Pattern;
use super::selection::SubSelection;
use crate::grammar::GrammarError;

/// A transformation applied to one group of a match
pub type Rule = Box<dyn Fn(&SubSelection<'_>) -> String + Send + Sync>;

/// Rules keyed by the group they rewrite
#[derive(Default)]
pub struct RuleSet {
    rules: BTreeMap<String, Rule>,
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet").field("groups", &self.rules.keys().collect::<Vec<_>>()).finish()
    }
}

impl RuleSet {
    /// Create an empty rule set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for `group`, replacing any earlier one
    #[must_use]
    pub fn with<F>(mut self, group: &str, rule: F) -> Self
    where
        F: Fn(&SubSelection<'_>) -> String + Send + Sync + 'static,
    {
        self.insert(group, rule);
        self
    }

    /// Add a rule for `group`, replacing any earlier one
    pub fn insert<F>(&mut self, group: &str, rule: F)
    where
        F: Fn(&SubSelection<'_>) -> String + Send + Sync + 'static,
    {
        self.rules.insert(group.to_string(), Box::new(rule));
    }

    /// The rule for `group`, if any
    #[must_use]
    pub fn get(&self, group: &str) -> Option<&Rule> {
        self.rules.get(group)
    }

    /// Groups that have a rule
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check that every rule targets a group of `pattern`
    pub fn validate(&self, pattern: &Pattern) -> Result<(), GrammarError> {
        match self.groups().find(|group| !pattern.has_group(group)) {
            Some(group) => Err(GrammarError::UnknownGroup {
                name: group.to_string(),
                pattern: pattern.name().to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Value of one group after rules were applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupValue {
    /// Group name
    pub name: String,
    /// Captured text, `None` if the group did not participate
    pub original: Option<String>,
    /// Text to substitute: the rule output, else the captured text
    pub value: Option<String>,
}

/// Group values of one match, in pattern order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupValues {
    values: Vec<GroupValue>,
}

impl GroupValues {
    /// Substitution value of `name`
    ///
    /// `None` if the group is unknown, or did not participate and had no rule.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.find(name)?.value.as_deref()
    }

    /// Captured text of `name`, before any rule ran
    #[must_use]
    pub fn original(&self, name: &str) -> Option<&str> {
        self.find(name)?.original.as_deref()
    }

    /// Whether group `name` took part in the match
    #[must_use]
    pub fn participated(&self, name: &str) -> bool {
        self.original(name).is_some()
    }

    /// Iterate over all group values in pattern order
    pub fn iter(&self) -> impl Iterator<Item = &GroupValue> {
        self.values.iter()
    }

    fn find(&self, name: &str) -> Option<&GroupValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

impl FromIterator<GroupValue> for GroupValues {
    fn from_iter<I: IntoIterator<Item = GroupValue>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
