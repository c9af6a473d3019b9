//! Per-run registry of declared types and required imports
//!
//! One registry is created at the start of a run and handed by reference to
//! every resolver and transpiler call. It is the only state the core
//! mutates, and it is not meant to be shared between threads or runs.

use crate::types::profile::{split_qualified, PlatformProfile};
use log::debug;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Default)]
pub struct Registry {
    profile: PlatformProfile,
    imports: BTreeSet<String>,
    declared_types: HashSet<String>,
}

impl Registry {
    /// Create a registry for the default platform profile
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: PlatformProfile) -> Self {
        Self {
            profile,
            imports: BTreeSet::new(),
            declared_types: HashSet::new(),
        }
    }

    pub fn profile(&self) -> &PlatformProfile {
        &self.profile
    }

    /// Check if a type name was recorded as user-defined
    pub fn is_declared_type(&self, name: &str) -> bool {
        self.declared_types.contains(name)
    }

    /// Record a user-defined type name (typedef, struct, enum emitted upstream)
    pub fn declare_type(&mut self, name: impl Into<String>) {
        self.declared_types.insert(name.into());
    }

    /// Require an import. Registering the same path twice has no effect.
    pub fn register_import(&mut self, path: &str) {
        if self.imports.insert(path.to_string()) {
            debug!("registered import \"{}\"", path);
        }
    }

    /// Turn a candidate output spelling into the spelling used in code.
    ///
    /// Namespaced spellings register their import path and are shortened to
    /// `package.Name`; anything without a namespace is returned as is.
    pub fn qualify(&mut self, spelling: &str) -> String {
        match split_qualified(spelling) {
            Some((path, short)) => {
                self.register_import(path);
                short
            }
            None => spelling.to_string(),
        }
    }

    /// Required imports, sorted and without duplicates
    pub fn imports(&self) -> Vec<String> {
        self.imports.iter().cloned().collect()
    }
}
