//! ActionScript to C# declaration translator
//!
//! Rewrites two kinds of declarations:
//!
//! ```text
//! public static const NAME:String = "v";          ->  public static const string NAME = "v";
//! public var count:int;                           ->  public int count;
//! public function add(a:int, b:int = 1):int {..}  ->  public int add(int a, int b = 1) {..}
//! ```
//!
//! Methods run first, then variables. Locals inside method bodies are left
//! alone since they carry no modifiers.

use std::sync::Arc;

use log::{debug, warn};

use super::{PassReport, Production, TranslationReport, Translator, TypeMap};
use crate::grammar::{Fragment, GrammarError, productions};
use crate::rewrite::{Limits, Pattern, Rewrite, RewriteError, SubSelection};

/// Translator for ActionScript-like class members
#[derive(Debug)]
pub struct ActionScriptTranslator {
    methods: Rewrite,
    variables: Rewrite,
    productions: Vec<Production>,
    limits: Limits,
}

impl ActionScriptTranslator {
    /// Build the translator with the built-in type map and no limits
    pub fn new() -> Result<Self, GrammarError> {
        Self::with_options(TypeMap::default(), Limits::default())
    }

    /// Build the translator with a custom type map and limits
    pub fn with_options(types: TypeMap, limits: Limits) -> Result<Self, GrammarError> {
        let types = Arc::new(types);
        Ok(Self {
            methods: method_rewrite(&types, limits)?,
            variables: variable_rewrite(&types, limits)?,
            productions: Production::ALL.to_vec(),
            limits,
        })
    }

    /// Restrict which productions run
    ///
    /// Productions always run in the order of [`Production::ALL`].
    #[must_use]
    pub fn with_productions(mut self, productions: Vec<Production>) -> Self {
        self.productions = productions;
        self
    }

    /// Productions enabled on this translator
    #[must_use]
    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    const fn rewrite_for(&self, production: Production) -> &Rewrite {
        match production {
            Production::Methods => &self.methods,
            Production::Variables => &self.variables,
        }
    }
}

impl Translator for ActionScriptTranslator {
    fn name(&self) -> &str {
        "actionscript"
    }

    fn translate(&self, source: &mut String) -> Result<TranslationReport, RewriteError> {
        let mut working = source.clone();
        let mut report = TranslationReport::default();
        for production in Production::ALL {
            if !self.productions.contains(&production) {
                continue;
            }
            let rewrites =
                self.rewrite_for(production).apply_with_limits(&mut working, &self.limits)?;
            debug!("{production}: {rewrites} declaration(s) rewritten");
            report.passes.push(PassReport {
                production,
                rewrites,
            });
        }
        *source = working;
        Ok(report)
    }
}

fn compile(
    name: &str,
    built: Result<Fragment, GrammarError>,
    limits: Limits,
) -> Result<Pattern, GrammarError> {
    Pattern::compile_with_limit(name, &built?, limits.regex_size_limit)
}

/// Collapse runs of whitespace to a single space
fn normalize_whitespace(selection: &SubSelection<'_>) -> String {
    selection.value().split_whitespace().collect::<Vec<_>>().join(" ")
}

fn trimmed(selection: &SubSelection<'_>) -> String {
    selection.value().trim().to_string()
}

/// `[...][const] name[:Type] [= default]` -> `Type name [= default]`
fn parameter_rewrite(types: &Arc<TypeMap>, limits: Limits) -> Result<Rewrite, GrammarError> {
    let pattern = compile("parameter", productions::parameter(), limits)?;
    let types = Arc::clone(types);

    Rewrite::builder(pattern)
        .rule("type", move |s| types.map_selection(s))
        .rule("default", trimmed)
        .template("${type} ${identifier}")
        .template("${type} ${identifier} = ${default}")
        .template("params object[] ${identifier}")
        .select(|values| {
            if values.participated("rest") {
                2
            } else {
                usize::from(values.participated("default"))
            }
        })
        .build()
}

/// Rewrite the parameters captured by a method match in a nested pass
fn rewrite_parameters(
    parameters: &Rewrite,
    selection: &SubSelection<'_>,
    limits: &Limits,
) -> String {
    let mut buffer = selection.value().trim().to_string();
    match parameters.apply_with_limits(&mut buffer, limits) {
        Ok(_) => buffer,
        Err(err) => {
            warn!("leaving parameter list `{}` unchanged: {err}", selection.value());
            selection.value().to_string()
        },
    }
}

fn method_rewrite(types: &Arc<TypeMap>, limits: Limits) -> Result<Rewrite, GrammarError> {
    let pattern = compile("method_declaration", productions::method_declaration(), limits)?;
    let parameters = parameter_rewrite(types, limits)?;
    let types = Arc::clone(types);

    Rewrite::builder(pattern)
        .rule("modifiers", normalize_whitespace)
        .rule("accessor", |s| s.text().map(|accessor| format!("{accessor}_")).unwrap_or_default())
        .rule("parameters", move |s| rewrite_parameters(&parameters, s, &limits))
        .rule("type", move |s| types.map(s.value()))
        .rule("body", |s| {
            let body = s.value();
            if body.starts_with('{') { format!(" {body}") } else { body.to_string() }
        })
        .template("${modifiers} ${accessor}${identifier}(${parameters})${body}")
        .template("${modifiers} ${type} ${accessor}${identifier}(${parameters})${body}")
        .select(|values| usize::from(values.participated("type")))
        .build()
}

fn variable_rewrite(types: &Arc<TypeMap>, limits: Limits) -> Result<Rewrite, GrammarError> {
    let pattern = compile("variable_declaration", productions::variable_declaration(), limits)?;
    let types = Arc::clone(types);

    Rewrite::builder(pattern)
        .rule("modifiers", normalize_whitespace)
        .rule("type", move |s| types.map_selection(s))
        .rule("equals", |s| if s.participated() { " = ".to_string() } else { String::new() })
        .rule("expr", trimmed)
        .template("${modifiers} ${type} ${identifier}${equals}${expr}${semicolon}")
        .template("${modifiers} ${constorvar} ${type} ${identifier}${equals}${expr}${semicolon}")
        .select(|values| usize::from(values.original("constorvar") == Some("const")))
        .build()
}
