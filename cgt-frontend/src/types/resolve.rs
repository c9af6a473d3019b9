//! C type descriptor to Go type resolution
//!
//! A descriptor is first classified into a [`Shape`], then resolved by the
//! handler for that shape. The order of the checks in [`classify`] is the
//! priority of the rules: exact matches and registered types come before any
//! heuristic, and struct/enum tags come before the generic pointer rule
//! (otherwise `struct Foo *` would lose its tag).

use super::descriptor::strip_qualifiers;
use super::profile::OPAQUE_TYPE;
use crate::registry::Registry;
use cgt_common::TranspileError;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

// `float *`, `int **`
static SIMPLE_POINTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w ]+\*+$").expect("valid pointer pattern"));

// `char *[3]`
static POINTER_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w ]+\*\[\d+\]$").expect("valid pointer array pattern"));

// `int (*)(int, char *)`
static FUNCTION_POINTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w ]+\(\*.*?\)\(.*\)").expect("valid function pointer pattern"));

// `int (int, char *)`
static FUNCTION_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w ]+ \(.*\)").expect("valid function type pattern"));

// `int [3]`, `int [2][3]`
static FIXED_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s*\[(\d+)\]((?:\[\d+\])*)$").expect("valid fixed array pattern"));

/// Which rule a qualifier-stripped descriptor falls under
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<'a> {
    Void,
    /// Special case checked before the table
    Override(&'static str),
    /// Exact table hit, or an output spelling of the table
    Exact(&'static str),
    /// Type recorded as user-defined in the registry
    Declared,
    /// Already a Go pointer (`*T`); holds `T`
    GoPointer(&'a str),
    /// Already a Go slice (`[]T`); holds `T`
    GoSlice(&'a str),
    /// `struct Foo *` or `enum Color *`; holds the descriptor without the last `*`
    TaggedPointer(&'a str),
    /// `struct Foo`; holds `Foo`
    Struct(&'a str),
    /// `enum Color`; holds `Color`
    Enum(&'a str),
    AnonymousUnion,
    /// `T *`; holds `T` (one star removed)
    Pointer(&'a str),
    /// `T *[N]`
    PointerArray,
    FunctionPointer,
    /// `T [N]...`; holds the element descriptor
    Array(String),
    Unknown,
}

/// Classify a qualifier-stripped descriptor. The first matching rule wins.
pub fn classify<'a>(registry: &Registry, s: &'a str) -> Shape<'a> {
    let profile = registry.profile();

    if s.is_empty() {
        return Shape::Void;
    }

    if let Some(go) = profile.override_for(s) {
        return Shape::Override(go);
    }

    if let Some(go) = profile.lookup(s).or_else(|| profile.find_qualified(s)) {
        return Shape::Exact(go);
    }

    if registry.is_declared_type(s) {
        return Shape::Declared;
    }

    if let Some(rest) = s.strip_prefix('*') {
        return Shape::GoPointer(rest);
    }

    if let Some(rest) = s.strip_prefix("[]") {
        return Shape::GoSlice(rest);
    }

    if let Some(name) = s.strip_prefix("struct ").filter(|name| is_tag(name)) {
        return match s.strip_suffix('*') {
            Some(base) => Shape::TaggedPointer(base.trim_end()),
            None => Shape::Struct(name.trim()),
        };
    }

    if let Some(name) = s.strip_prefix("enum ").filter(|name| is_tag(name)) {
        return match s.strip_suffix('*') {
            Some(base) => Shape::TaggedPointer(base.trim_end()),
            None => Shape::Enum(name.trim()),
        };
    }

    if s.contains("anonymous union") {
        return Shape::AnonymousUnion;
    }

    if SIMPLE_POINTER.is_match(s) {
        // There may or may not be a space before the star
        return Shape::Pointer(s[..s.len() - 1].trim_end());
    }

    if POINTER_ARRAY.is_match(s) {
        return Shape::PointerArray;
    }

    if FUNCTION_POINTER.is_match(s) || FUNCTION_TYPE.is_match(s) {
        return Shape::FunctionPointer;
    }

    if let Some(caps) = FIXED_ARRAY.captures(s) {
        let element = format!("{}{}", caps[1].trim(), &caps[3]);
        return Shape::Array(element);
    }

    Shape::Unknown
}

// A tag name, optionally followed by pointer stars. Arrays of tagged types
// fall through to the array rule.
fn is_tag(rest: &str) -> bool {
    let name = rest.trim_end_matches(['*', ' ']);
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Resolve a C type descriptor to its Go spelling.
///
/// Imports needed by the result are registered on the registry. A descriptor
/// that no rule accepts is a fatal error carrying the descriptor.
pub fn resolve_type(registry: &mut Registry, descriptor: &str) -> Result<String, TranspileError> {
    let s = strip_qualifiers(descriptor);
    let shape = classify(registry, &s);

    let resolved = match shape {
        Shape::Void => String::new(),

        Shape::Override(go) => go.to_string(),

        Shape::Exact(go) => registry.qualify(go),

        Shape::Declared => registry.qualify(&s),

        Shape::GoPointer(rest) => format!("*{}", resolve_type(registry, rest)?),

        Shape::GoSlice(rest) => format!("[]{}", resolve_type(registry, rest)?),

        Shape::TaggedPointer(base) => format!("*{}", resolve_type(registry, base)?),

        Shape::Struct(name) => {
            // A tag that collides with a table output resolves through the table
            if registry.profile().is_output(name) {
                let target = registry.profile().lookup(name).unwrap_or(name);
                registry.qualify(target)
            } else {
                name.to_string()
            }
        }

        Shape::Enum(name) => name.to_string(),

        Shape::AnonymousUnion => {
            warn!("no structure recoverable for '{}', using {}", s, OPAQUE_TYPE);
            OPAQUE_TYPE.to_string()
        }

        Shape::Pointer(base) => format!("*{}", resolve_type(registry, base)?),

        Shape::PointerArray => "[]string".to_string(),

        Shape::FunctionPointer => {
            warn!("function pointer '{}' is mapped to {}", s, OPAQUE_TYPE);
            OPAQUE_TYPE.to_string()
        }

        Shape::Array(element) => format!("[]{}", resolve_type(registry, &element)?),

        Shape::Unknown => return Err(TranspileError::unresolved_type(&s)),
    };

    debug!("resolved C type '{}' to Go type '{}'", descriptor, resolved);
    Ok(resolved)
}
