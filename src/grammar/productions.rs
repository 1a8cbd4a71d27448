//! Declaration productions
//!
//! Each production is composed purely from the fragment builders, in
//! dependency order: tokens, type relation, parameter, parameter list,
//! then the declarations that use them.
//!
//! Capture names are part of the contract with the translators:
//!
//! | production             | captures                                                        |
//! |------------------------|-----------------------------------------------------------------|
//! | `type_relation`        | `type`                                                          |
//! | `variable_declaration` | `modifiers`, `constorvar`, `identifier`, `type`, `equals`, `expr`, `semicolon` |
//! | `parameter`            | `rest`, `constness`, `identifier`, `type`, `default`            |
//! | `parameter_list`       | none                                                            |
//! | `method_declaration`   | `modifiers`, `accessor`, `identifier`, `parameters`, `type`, `body` |
//!
//! Nested constructs are approximated: default values stop at the first `,`
//! or `)` outside a literal, and method bodies stop at the first `}` outside
//! a literal.

use super::tokens::{
    CONST, CONST_OR_VAR, FUNCTION, GET, IDENTIFIER, MODIFIERS, QUALIFIED_IDENTIFIER, SET, VOID,
};
use super::{
    Fragment, GrammarError, alternate, capture, escape_literal, optional, repeat, sequence, up_to,
    up_to_any,
};

/// Names of all productions, in dependency order
pub const NAMES: &[&str] = &[
    "type_relation",
    "variable_declaration",
    "parameter",
    "parameter_list",
    "method_declaration",
];

/// Build a production by name
#[must_use]
pub fn by_name(name: &str) -> Option<Result<Fragment, GrammarError>> {
    let built = match name {
        "type_relation" => type_relation(),
        "variable_declaration" => variable_declaration(),
        "parameter" => parameter(),
        "parameter_list" => parameter_list(),
        "method_declaration" => method_declaration(),
        _ => return None,
    };
    Some(built)
}

/// `*`, `void` or a (qualified) type name
fn type_name() -> Result<Fragment, GrammarError> {
    alternate(&[escape_literal("*"), VOID.clone(), QUALIFIED_IDENTIFIER.clone()])
}

/// `:Type` without capturing the type
fn type_annotation() -> Result<Fragment, GrammarError> {
    sequence(&[escape_literal(":"), type_name()?])
}

/// `:Type`, capturing `type`
pub fn type_relation() -> Result<Fragment, GrammarError> {
    sequence(&[escape_literal(":"), capture("type", &type_name()?)?])
}

/// `[public|static|...]+ const|var name[:Type] [= expr];`
pub fn variable_declaration() -> Result<Fragment, GrammarError> {
    sequence(&[
        capture("modifiers", &repeat(&MODIFIERS, true))?,
        capture("constorvar", &CONST_OR_VAR)?,
        capture("identifier", &IDENTIFIER)?,
        optional(&type_relation()?),
        optional(&sequence(&[
            capture("equals", &escape_literal("="))?,
            capture("expr", &up_to(';'))?,
        ])?),
        capture("semicolon", &escape_literal(";"))?,
    ])
}

/// Default value of a parameter, stopping at `,` or `)`
fn default_value() -> Result<Fragment, GrammarError> {
    up_to_any(&[',', ')'])
}

/// A single parameter without captures, for use inside a parameter list
fn parameter_shape() -> Result<Fragment, GrammarError> {
    sequence(&[
        optional(&CONST),
        IDENTIFIER.clone(),
        optional(&type_annotation()?),
        optional(&sequence(&[escape_literal("="), default_value()?])?),
    ])
}

/// `...name[:Type]`
fn rest_shape() -> Result<Fragment, GrammarError> {
    sequence(&[escape_literal("..."), IDENTIFIER.clone(), optional(&type_annotation()?)])
}

/// `[...][const] name[:Type] [= default]`
pub fn parameter() -> Result<Fragment, GrammarError> {
    sequence(&[
        optional(&capture("rest", &escape_literal("..."))?),
        optional(&capture("constness", &CONST)?),
        capture("identifier", &IDENTIFIER)?,
        optional(&type_relation()?),
        optional(&sequence(&[escape_literal("="), capture("default", &default_value()?)?])?),
    ])
}

/// Comma separated parameters, optionally ending in a rest parameter
///
/// Matches the empty list too.
pub fn parameter_list() -> Result<Fragment, GrammarError> {
    let param = parameter_shape()?;
    let rest = rest_shape()?;
    let more = repeat(&sequence(&[escape_literal(","), param.clone()])?, false);
    let trailing_rest = optional(&sequence(&[escape_literal(","), rest.clone()])?);

    Ok(optional(&alternate(&[sequence(&[param, more, trailing_rest])?, rest])?))
}

/// `[modifiers]+ function [get|set] name(params)[:Type] { body }` or `...;`
pub fn method_declaration() -> Result<Fragment, GrammarError> {
    let block = sequence(&[escape_literal("{"), up_to('}'), escape_literal("}")])?;

    sequence(&[
        capture("modifiers", &repeat(&MODIFIERS, true))?,
        FUNCTION.clone(),
        optional(&capture("accessor", &alternate(&[GET.clone(), SET.clone()])?)?),
        capture("identifier", &IDENTIFIER)?,
        escape_literal("("),
        capture("parameters", &parameter_list()?)?,
        escape_literal(")"),
        optional(&type_relation()?),
        capture("body", &alternate(&[block, escape_literal(";")])?)?,
    ])
}
