//! Helpers that operate on raw C type descriptors
//!
//! Descriptors are the type strings clang prints (`const char *`,
//! `int [3][4]`, `struct Foo *`). These helpers never consult the registry.

use once_cell::sync::Lazy;
use regex::Regex;

static QUALIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:const|volatile)\s+").expect("valid qualifier pattern"));

static RESTRICT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\s*(?:__restrict|restrict)\b").expect("valid restrict pattern"));

// `int [2][3][4]`
static MULTI_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s*\[\d*\]((?:\[\d+\])+)$").expect("valid multi-dimensional array pattern")
});

// `char [8]`, `char *[]`
static ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s*\[\d*\]$").expect("valid array pattern"));

// `char **`
static POINTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s*\*$").expect("valid pointer pattern"));

// Outermost bound of a fixed-size array, inner dimensions kept
static SIZED_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s*\[(\d+)\]((?:\[\d+\])*)$").expect("valid sized array pattern")
});

/// Remove `const`, `volatile` and restrict-pointer decorations and
/// surrounding whitespace. Applying it twice gives the same result as once.
pub fn strip_qualifiers(descriptor: &str) -> String {
    let s = QUALIFIER.replace_all(descriptor, "");
    let s = RESTRICT.replace_all(&s, "*");
    s.trim().to_string()
}

/// Type of the value obtained by indexing or dereferencing a value of the
/// given type, or `None` when the type has no element type.
///
/// `int [2][3]` gives `int [3]`, `char [8]` gives `char`, `char **` gives
/// `char *`.
pub fn dereference(descriptor: &str) -> Option<String> {
    let s = strip_qualifiers(descriptor);

    if let Some(caps) = MULTI_ARRAY.captures(&s) {
        return Some(format!("{} {}", caps[1].trim(), &caps[2]));
    }

    if let Some(caps) = ARRAY.captures(&s) {
        return Some(caps[1].trim().to_string());
    }

    if let Some(caps) = POINTER.captures(&s) {
        return Some(caps[1].trim().to_string());
    }

    None
}

/// Split a fixed-size array type into its element type and its outermost
/// bound. `int [10]` gives (`int`, 10); `int [2][3]` gives (`int [3]`, 2).
pub fn array_type_and_size(descriptor: &str) -> Option<(String, usize)> {
    let s = strip_qualifiers(descriptor);
    let caps = SIZED_ARRAY.captures(&s)?;
    let size = caps[2].parse().ok()?;

    let element = if caps[3].is_empty() {
        caps[1].trim().to_string()
    } else {
        format!("{} {}", caps[1].trim(), &caps[3])
    };

    Some((element, size))
}

/// Descriptor of a pointer to a value of the given type
pub fn pointer_to(descriptor: &str) -> String {
    let s = strip_qualifiers(descriptor);
    if s.ends_with('*') {
        format!("{s}*")
    } else {
        format!("{s} *")
    }
}
