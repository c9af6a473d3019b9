//! Platform profile: the hard-coded width and platform-type assumptions
//!
//! Everything that depends on the host the C code was dumped on (the size
//! of `long`, Darwin's opaque runtime types, Linux pthread unions, the vector
//! layouts that only exist on Darwin) lives in one table so that supporting
//! another platform touches only this file.

use std::collections::{HashMap, HashSet};

/// Go's dynamic/opaque type
pub const OPAQUE_TYPE: &str = "interface{}";

/// Resolved spelling of C `void`
pub const VOID_TYPE: &str = "";

/// Sentinel type carried by the `NULL` macro
pub const NULL_TYPE: &str = "null";

/// Import path of the runtime support library
pub const RUNTIME_PACKAGE: &str = "github.com/elliotchance/c2go/noarch";

// Some of these rely on assumptions (like the size of an int) that do not
// hold on every architecture.
//
// Please keep each group sorted by name.
const DARWIN_AMD64_TYPES: &[(&str, &str)] = &[
    // C primitives
    ("_Bool", "bool"),
    ("bool", "bool"),
    ("char *", "string"),
    ("char", "byte"),
    ("char*", "string"),
    ("const char *", "string"),
    ("double", "float64"),
    ("float", "float32"),
    ("int", "int"),
    ("long double", "float64"),
    ("long int", "int32"),
    ("long long", "int64"),
    ("long unsigned int", "uint32"),
    ("long", "int32"),
    ("short", "int16"),
    ("signed char", "int8"),
    ("unsigned char", "uint8"),
    ("unsigned int", "uint32"),
    ("unsigned long long", "uint64"),
    ("unsigned long", "uint32"),
    ("unsigned short int", "uint16"),
    ("unsigned short", "uint16"),
    ("void *", OPAQUE_TYPE),
    ("void", VOID_TYPE),
    // NULL macro
    ("null", NULL_TYPE),
    // Fixed-width aliases some compilers provide
    ("__uint16_t", "uint16"),
    ("__uint32_t", "uint32"),
    ("__uint64_t", "uint64"),
    ("uint32", "uint32"),
    ("uint64", "uint64"),
    // Darwin specific
    ("Double2", "github.com/elliotchance/c2go/darwin.Double2"),
    ("Float2", "github.com/elliotchance/c2go/darwin.Float2"),
    ("__darwin_ct_rune_t", "github.com/elliotchance/c2go/darwin.Darwin_ct_rune_t"),
    ("fpos_t", "int"),
    ("struct __double2", "github.com/elliotchance/c2go/darwin.Double2"),
    ("struct __float2", "github.com/elliotchance/c2go/darwin.Float2"),
    ("union __mbstate_t", "__mbstate_t"),
    // Placeholders: there is no suitable Go type, or the platform detail is
    // not needed yet
    ("FILE", "github.com/elliotchance/c2go/noarch.File"),
    ("__builtin_va_list", "int64"),
    ("__darwin_pthread_handler_rec", "int64"),
    ("__int128", "int64"),
    ("__mbstate_t", "int64"),
    ("__sFILEX", OPAQUE_TYPE),
    ("__sbuf", "int64"),
    ("__va_list_tag", OPAQUE_TYPE),
    ("union __sigaction_u", "int"),
    ("union sigval", "int"),
    ("unsigned __int128", "uint64"),
    // Linux specific
    ("union __WAIT_STATUS", OPAQUE_TYPE),
    ("union pthread_attr_t", OPAQUE_TYPE),
    ("union pthread_barrier_t", OPAQUE_TYPE),
    ("union pthread_barrierattr_t", OPAQUE_TYPE),
    ("union pthread_cond_t", OPAQUE_TYPE),
    ("union pthread_condattr_t", OPAQUE_TYPE),
    ("union pthread_mutex_t", OPAQUE_TYPE),
    ("union pthread_mutexattr_t", OPAQUE_TYPE),
    ("union pthread_rwlock_t", OPAQUE_TYPE),
    ("union pthread_rwlockattr_t", OPAQUE_TYPE),
    // Go spellings, so resolved output can be resolved again
    ("byte", "byte"),
    ("float32", "float32"),
    ("float64", "float64"),
    ("int16", "int16"),
    ("int32", "int32"),
    ("int64", "int64"),
    ("int8", "int8"),
    ("interface{}", OPAQUE_TYPE),
    ("string", "string"),
    ("uint16", "uint16"),
    ("uint8", "uint8"),
];

// Checked before the table. `fpos_t` is deliberately present in both.
const DARWIN_AMD64_OVERRIDES: &[(&str, &str)] = &[("char *[]", OPAQUE_TYPE), ("fpos_t", "int")];

// Struct layouts that cannot be represented; member access on them goes
// through exported fields of the runtime type.
const DARWIN_VECTOR_TYPES: &[&str] = &["darwin.Float2", "darwin.Double2"];

/// Split a namespaced output spelling into its import path and its
/// package-qualified short spelling.
///
/// `github.com/elliotchance/c2go/noarch.File` becomes
/// (`github.com/elliotchance/c2go/noarch`, `noarch.File`).
pub fn split_qualified(spelling: &str) -> Option<(&str, String)> {
    let (path, name) = spelling.rsplit_once('.')?;
    let package = path.rsplit('/').next().unwrap_or(path);
    Some((path, format!("{package}.{name}")))
}

/// Width and platform-type assumptions for one target
#[derive(Debug, Clone)]
pub struct PlatformProfile {
    name: &'static str,
    overrides: HashMap<&'static str, &'static str>,
    table: HashMap<&'static str, &'static str>,
    outputs: HashSet<&'static str>,
    qualified_outputs: HashMap<String, &'static str>,
    vector_types: HashSet<&'static str>,
}

impl PlatformProfile {
    /// Build a profile from its tables
    pub fn new(
        name: &'static str,
        table: &[(&'static str, &'static str)],
        overrides: &[(&'static str, &'static str)],
        vector_types: &[&'static str],
    ) -> Self {
        let qualified_outputs = table
            .iter()
            .filter_map(|(_, go)| split_qualified(go).map(|(_, short)| (short, *go)))
            .collect();

        Self {
            name,
            overrides: overrides.iter().copied().collect(),
            table: table.iter().copied().collect(),
            outputs: table.iter().map(|(_, go)| *go).collect(),
            qualified_outputs,
            vector_types: vector_types.iter().copied().collect(),
        }
    }

    /// 64-bit Darwin host, with the Linux pthread unions mapped as well
    pub fn darwin_amd64() -> Self {
        Self::new(
            "darwin/amd64",
            DARWIN_AMD64_TYPES,
            DARWIN_AMD64_OVERRIDES,
            DARWIN_VECTOR_TYPES,
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Spelling that wins before any other rule is consulted
    pub fn override_for(&self, descriptor: &str) -> Option<&'static str> {
        self.overrides.get(descriptor).copied()
    }

    /// Exact-match lookup of a C spelling
    pub fn lookup(&self, descriptor: &str) -> Option<&'static str> {
        self.table.get(descriptor).copied()
    }

    /// Full output spelling whose package-qualified form is `spelling`
    /// (e.g. `noarch.File` finds `github.com/elliotchance/c2go/noarch.File`)
    pub fn find_qualified(&self, spelling: &str) -> Option<&'static str> {
        self.qualified_outputs.get(spelling).copied()
    }

    /// Whether `name` appears on the output side of the table
    pub fn is_output(&self, name: &str) -> bool {
        self.outputs.contains(name)
    }

    /// Whether a resolved type is one of the unrepresentable vector layouts
    pub fn is_vector_type(&self, resolved: &str) -> bool {
        self.vector_types.contains(resolved)
    }

    /// All (C spelling, Go spelling) pairs of the table
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.table.iter().map(|(c, go)| (*c, *go))
    }
}

impl Default for PlatformProfile {
    fn default() -> Self {
        Self::darwin_amd64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_qualified() {
        let (path, short) = split_qualified("github.com/elliotchance/c2go/darwin.Float2").unwrap();
        assert_eq!(path, "github.com/elliotchance/c2go/darwin");
        assert_eq!(short, "darwin.Float2");

        assert!(split_qualified("interface{}").is_none());
        assert_eq!(split_qualified("os.Args").unwrap(), ("os", "os.Args".to_string()));
    }

    #[test]
    fn test_default_profile_tables() {
        let profile = PlatformProfile::default();
        assert_eq!(profile.name(), "darwin/amd64");
        assert_eq!(profile.lookup("unsigned long long"), Some("uint64"));
        assert_eq!(profile.lookup("struct Foo"), None);
        assert_eq!(profile.override_for("char *[]"), Some(OPAQUE_TYPE));
        assert_eq!(profile.override_for("fpos_t"), profile.lookup("fpos_t"));
    }

    #[test]
    fn test_outputs_and_qualified_outputs() {
        let profile = PlatformProfile::default();
        assert!(profile.is_output("__mbstate_t"));
        assert!(!profile.is_output("Foo"));
        assert_eq!(
            profile.find_qualified("noarch.File"),
            Some("github.com/elliotchance/c2go/noarch.File")
        );
        assert!(profile.is_vector_type("darwin.Double2"));
        assert!(!profile.is_vector_type("darwin.Darwin_ct_rune_t"));
    }

    #[test]
    fn test_custom_profile() {
        let profile = PlatformProfile::new("tiny", &[("int", "int16")], &[], &[]);
        assert_eq!(profile.lookup("int"), Some("int16"));
        assert_eq!(profile.entries().count(), 1);
    }
}
