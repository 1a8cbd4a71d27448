//! Primitive token fragments
//!
//! Built once on first use and shared read-only by every production.

use once_cell::sync::Lazy;

use super::Fragment;

/// Optional whitespace placed between sequenced fragments
pub const WS: &str = r"\s*";

/// Double- or single-quoted string literal, escapes included
pub const STRING_LITERAL: &str = r#""(?:\\[\s\S]|[^"\\])*"|'(?:\\[\s\S]|[^'\\])*'"#;

/// Line comment, up to the end of the line
pub const LINE_COMMENT: &str = r"//[^\n]*";

/// Regexp literal on a single line, e.g. `/a+b/gi`
///
/// The body may not start with whitespace or `/`, and a `;` inside it must be
/// followed by more body. This keeps `a / b`, `x/2; y/3` and `//` comments
/// from being read as regexps.
pub const REGEXP_LITERAL: &str =
    r"/(?:\\.|[^/\\\s;])(?:\\.|;[^/\\\s;]|[^/\\\n;])*/[gimsx]*";

/// Integer literal, decimal or hex
pub static INT_LITERAL: Lazy<Fragment> =
    Lazy::new(|| Fragment::raw(r"\b(?:0[xX][0-9A-Fa-f]+|[0-9]+)\b"));

/// Float literal with optional exponent, e.g. `1.5`, `.5`, `2e-3`
pub static FLOAT_LITERAL: Lazy<Fragment> = Lazy::new(|| {
    Fragment::raw(r"(?:[0-9]+\.[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+")
});

/// Binary operators, longest first
pub static INFIX_OPERATOR: Lazy<Fragment> = Lazy::new(|| {
    Fragment::raw(
        r">>>=|===|!==|>>>|<<=|>>=|==|!=|<=|>=|&&|\|\||<<|>>|\+=|-=|\*=|/=|%=|&=|\|=|\^=|[-+*/%<>&|^=]",
    )
});

/// Unary prefix operators
pub static PREFIX_OPERATOR: Lazy<Fragment> = Lazy::new(|| Fragment::raw(r"\+\+|--|[-+!~]"));

/// Unary postfix operators
pub static POSTFIX_OPERATOR: Lazy<Fragment> = Lazy::new(|| Fragment::raw(r"\+\+|--"));

/// Plain identifier
pub static IDENTIFIER: Lazy<Fragment> = Lazy::new(|| Fragment::raw(r"[$A-Za-z_][$0-9A-Za-z_]*"));

/// Dotted or generic type name, e.g. `flash.display.Sprite` or `Vector.<int>`
pub static QUALIFIED_IDENTIFIER: Lazy<Fragment> =
    Lazy::new(|| Fragment::raw(r"(?:[$A-Za-z_][$0-9A-Za-z_]*|[<>.])+"));

/// Access and storage modifiers
pub static MODIFIERS: Lazy<Fragment> = Lazy::new(|| {
    Fragment::raw(r"\b(?:public|protected|private|static|abstract|final|override|internal)\b")
});

/// Declaration keyword of a variable
pub static CONST_OR_VAR: Lazy<Fragment> = Lazy::new(|| Fragment::raw(r"\b(?:const|var)\b"));

/// `const` keyword on its own
pub static CONST: Lazy<Fragment> = Lazy::new(|| Fragment::raw(r"\bconst\b"));

/// `function` keyword
pub static FUNCTION: Lazy<Fragment> = Lazy::new(|| Fragment::raw(r"\bfunction\b"));

/// Accessor keywords
pub static GET: Lazy<Fragment> = Lazy::new(|| Fragment::raw(r"\bget\b"));

/// Accessor keywords
pub static SET: Lazy<Fragment> = Lazy::new(|| Fragment::raw(r"\bset\b"));

/// `void` return type
pub static VOID: Lazy<Fragment> = Lazy::new(|| Fragment::raw(r"\bvoid\b"));
