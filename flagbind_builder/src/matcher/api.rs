use std::collections::{HashMap, HashSet};

use crate::constant::{SHORT_PREFIX, VALUE_SEPARATOR};
use crate::error::FlagError;

// The scanner strips leading dashes and splits on the separator, so such a name could never be matched.
fn is_valid(name: &str) -> bool {
    !name.is_empty() && !name.starts_with(SHORT_PREFIX) && !name.contains(VALUE_SEPARATOR)
}

/// The combined namespace of canonical flag names and their aliases.
///
/// Canonical names and aliases share one namespace: no name may appear twice, whether as a canonical name or an alias.
/// Every alias resolves to a canonical name present in the namespace.
#[derive(Debug, Default)]
pub(crate) struct Namespace {
    canonical: HashSet<String>,
    aliases: HashMap<String, String>,
}

impl Namespace {
    /// Insert a canonical name and its aliases.
    /// All checks happen before any mutation, so a failed insert leaves the namespace untouched.
    pub(crate) fn insert(&mut self, name: &str, aliases: &[String]) -> Result<(), FlagError> {
        if let Some(invalid) = std::iter::once(name)
            .chain(aliases.iter().map(String::as_str))
            .find(|candidate| !is_valid(candidate))
        {
            return Err(FlagError::invalid_name(invalid));
        }

        if self.is_taken(name) {
            return Err(FlagError::duplicate(name));
        }

        let mut pending = HashSet::from([name]);

        for alias in aliases {
            if self.is_taken(alias) || !pending.insert(alias.as_str()) {
                return Err(FlagError::duplicate(alias.as_str()));
            }
        }

        self.canonical.insert(name.to_string());

        for alias in aliases {
            self.aliases.insert(alias.clone(), name.to_string());
        }

        Ok(())
    }

    /// Resolve a canonical name or alias to its canonical name.
    pub(crate) fn resolve(&self, candidate: &str) -> Option<&str> {
        match self.aliases.get(candidate) {
            Some(name) => Some(name.as_str()),
            None => self.canonical.get(candidate).map(String::as_str),
        }
    }

    fn is_taken(&self, name: &str) -> bool {
        self.canonical.contains(name) || self.aliases.contains_key(name)
    }
}
