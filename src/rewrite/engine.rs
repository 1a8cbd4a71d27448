//! Match/rewrite engine
//!
//! A rewrite pass walks a buffer one match at a time:
//!
//! ```text
//! Scanning -> MatchFound -> RulesApplied -> TemplateRendered -> Committed -> Scanning ... -> Done
//! ```
//!
//! Each replacement is committed before the next match is looked up, and
//! scanning resumes right after the inserted text. Rewritten text is never
//! scanned again within the same pass.

use log::{debug, trace};

use super::rules::{GroupValue, GroupValues, RuleSet};
use super::selection::{Groups, Match};
use super::span::Span;
use super::template::Template;
use super::{Limits, Pattern, RewriteError};
use crate::grammar::GrammarError;

/// Lazy, left-to-right, non-overlapping matches of a pattern
#[derive(Debug)]
pub struct Matches<'p, 'b> {
    pattern: &'p Pattern,
    inner: regex::CaptureMatches<'p, 'b>,
}

impl<'p, 'b> Iterator for Matches<'p, 'b> {
    type Item = Match<'p, 'b>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|captures| Match::new(self.pattern, captures))
    }
}

/// Enumerate the matches of `pattern` in `buffer`
#[must_use]
pub fn find_all<'p, 'b>(buffer: &'b str, pattern: &'p Pattern) -> Matches<'p, 'b> {
    Matches {
        pattern,
        inner: pattern.captures_iter(buffer),
    }
}

/// Every declared group of `found`, including ones that did not participate
#[must_use]
pub fn groups_of<'a>(found: &'a Match<'_, '_>) -> Groups<'a> {
    found.groups()
}

/// Run `rules` over the groups of `found`
///
/// Groups without a rule keep their captured text. A rule also runs for a
/// group that did not participate, so it can supply a value of its own.
#[must_use]
pub fn apply_rules(found: &Match<'_, '_>, rules: &RuleSet) -> GroupValues {
    found
        .groups()
        .iter()
        .map(|selection| {
            let original = selection.text().map(str::to_string);
            let value = match rules.get(selection.name()) {
                Some(rule) => Some(rule(selection)),
                None => original.clone(),
            };
            GroupValue {
                name: selection.name().to_string(),
                original,
                value,
            }
        })
        .collect()
}

/// Substitute rewritten group values into `template`
#[must_use]
pub fn render_template(template: &Template, values: &GroupValues) -> String {
    template.render(values)
}

/// Replace `span` of `buffer` with `rendered`
///
/// Returns the span of the inserted text.
///
/// # Panics
///
/// Panics if `span` does not lie on character boundaries inside `buffer`,
/// which means it was taken from a match against a different buffer state.
pub fn commit(buffer: &mut String, span: Span, rendered: &str) -> Span {
    assert!(
        span.start <= span.end
            && span.end <= buffer.len()
            && buffer.is_char_boundary(span.start)
            && buffer.is_char_boundary(span.end),
        "stale span {span:?} for buffer of {} bytes",
        buffer.len()
    );
    buffer.replace_range(span.range(), rendered);
    Span::new(span.start, span.start + rendered.len())
}

/// Rewrite every match of `pattern` in `buffer` with `render`
///
/// Returns the number of replacements committed. The pass works on a copy:
/// on error `buffer` is left exactly as it was.
pub fn rewrite_all<F>(
    buffer: &mut String,
    pattern: &Pattern,
    limits: &Limits,
    mut render: F,
) -> Result<usize, RewriteError>
where
    F: FnMut(&Match<'_, '_>) -> Result<String, RewriteError>,
{
    let mut working = buffer.clone();
    let mut cursor = 0;
    let mut count = 0;

    loop {
        trace!("{}: scanning from byte {cursor}", pattern.name());
        let (span, rendered) = {
            let Some(found) = pattern.find_at(&working, cursor) else {
                break;
            };
            trace!("{}: match at {:?}", pattern.name(), found.span());
            (found.span(), render(&found)?)
        };

        if let Some(limit) = limits.max_matches
            && count >= limit
        {
            return Err(RewriteError::MatchLimit {
                pattern: pattern.name().to_string(),
                limit,
            });
        }

        let inserted = commit(&mut working, span, &rendered);
        trace!("{}: committed {span:?} -> {inserted:?}", pattern.name());
        count += 1;
        cursor = inserted.end;

        // An empty match would be found again at the same offset.
        if span.is_empty() {
            match working[cursor..].chars().next() {
                Some(c) => cursor += c.len_utf8(),
                None => break,
            }
        }
    }

    trace!("{}: done after {count} replacement(s)", pattern.name());
    *buffer = working;
    Ok(count)
}

type Selector = Box<dyn Fn(&GroupValues) -> usize + Send + Sync>;

/// A pattern with its rules and templates: one rewrite production
///
/// When several templates are registered, the selector picks one per match
/// from the rewritten group values. With a single template no selector is
/// needed.
pub struct Rewrite {
    pattern: Pattern,
    rules: RuleSet,
    templates: Vec<Template>,
    select: Selector,
}

impl std::fmt::Debug for Rewrite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rewrite")
            .field("pattern", &self.pattern.name())
            .field("rules", &self.rules)
            .field("templates", &self.templates.iter().map(Template::as_str).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Rewrite {
    /// Start building a rewrite for `pattern`
    #[must_use]
    pub fn builder(pattern: Pattern) -> RewriteBuilder {
        RewriteBuilder {
            pattern,
            rules: RuleSet::new(),
            templates: Vec::new(),
            select: None,
        }
    }

    /// The pattern being rewritten
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Registered templates, in registration order
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Compute the replacement text for one match
    ///
    /// Fails if the selector picks an index with no template.
    pub fn render(&self, found: &Match<'_, '_>) -> Result<String, RewriteError> {
        let values = apply_rules(found, &self.rules);
        trace!("{}: rules applied: {values:?}", self.pattern.name());

        let index = (self.select)(&values);
        let template = self.templates.get(index).ok_or_else(|| RewriteError::NoTemplate {
            pattern: self.pattern.name().to_string(),
            index,
            templates: self.templates.len(),
        })?;
        Ok(render_template(template, &values))
    }

    /// Rewrite every match in `buffer`
    pub fn apply(&self, buffer: &mut String) -> Result<usize, RewriteError> {
        self.apply_with_limits(buffer, &Limits::default())
    }

    /// Rewrite every match in `buffer`, honouring `limits`
    pub fn apply_with_limits(
        &self,
        buffer: &mut String,
        limits: &Limits,
    ) -> Result<usize, RewriteError> {
        let count = rewrite_all(buffer, &self.pattern, limits, |found| self.render(found))?;
        debug!("{}: {count} rewrite(s)", self.pattern.name());
        Ok(count)
    }
}

/// Builder for [`Rewrite`]; validates rules and templates on [`build`](Self::build)
pub struct RewriteBuilder {
    pattern: Pattern,
    rules: RuleSet,
    templates: Vec<String>,
    select: Option<Selector>,
}

impl std::fmt::Debug for RewriteBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteBuilder")
            .field("pattern", &self.pattern.name())
            .field("rules", &self.rules)
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}

impl RewriteBuilder {
    /// Add a rule for `group`
    #[must_use]
    pub fn rule<F>(mut self, group: &str, rule: F) -> Self
    where
        F: Fn(&super::SubSelection<'_>) -> String + Send + Sync + 'static,
    {
        self.rules.insert(group, rule);
        self
    }

    /// Add a template; templates are indexed in registration order
    #[must_use]
    pub fn template(mut self, source: &str) -> Self {
        self.templates.push(source.to_string());
        self
    }

    /// Choose a template index per match
    #[must_use]
    pub fn select<F>(mut self, select: F) -> Self
    where
        F: Fn(&GroupValues) -> usize + Send + Sync + 'static,
    {
        self.select = Some(Box::new(select));
        self
    }

    /// Validate rules and templates against the pattern
    pub fn build(self) -> Result<Rewrite, GrammarError> {
        if self.templates.is_empty() {
            return Err(GrammarError::EmptyInput { builder: "rewrite" });
        }
        self.rules.validate(&self.pattern)?;

        let templates = self
            .templates
            .iter()
            .map(|source| Template::for_pattern(source, &self.pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Rewrite {
            pattern: self.pattern,
            rules: self.rules,
            templates,
            select: self.select.unwrap_or_else(|| Box::new(|_: &GroupValues| 0)),
        })
    }
}
