//! The hash name registry.
//!
//! The registry indexes every spelling in a name table by its folded alias
//! (lowercase, hyphens removed) and answers normalization queries against
//! that index. Canonical keys are indexed before any context spelling, and
//! within the spellings the first algorithm to claim an alias keeps it:
//! table rows in order, contexts in [`HashContext::ALL`] order.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::convert::Infallible;
use std::fmt;

use once_cell::sync::Lazy;

use crate::algorithm::HashAlgorithm;
use crate::config::RegistryConfig;
use crate::context::HashContext;
use crate::descriptor::AlgorithmRef;
use crate::error::{HashNameError, RegistryError};
use crate::table::{HASH_NAMES, HashNameEntry};

static STANDARD: Lazy<HashNameRegistry> = Lazy::new(|| {
    let registry = HashNameRegistry::new(HASH_NAMES);
    tracing::info!(
        algorithms = HASH_NAMES.len(),
        aliases = registry.alias_count(),
        "Hash name registry built"
    );
    registry
});

/// A table conflict found while indexing.
#[derive(Debug)]
enum Conflict {
    Duplicate(HashAlgorithm),
    Alias {
        alias: String,
        existing: HashAlgorithm,
        rejected: HashAlgorithm,
        context: HashContext,
    },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate(algorithm) => write!(f, "duplicate row for '{algorithm}'"),
            Self::Alias {
                alias,
                existing,
                rejected,
                context,
            } => write!(
                f,
                "{context} spelling of '{rejected}' folds to '{alias}', already registered for '{existing}'"
            ),
        }
    }
}

impl From<Conflict> for RegistryError {
    fn from(conflict: Conflict) -> Self {
        match conflict {
            Conflict::Duplicate(algorithm) => Self::DuplicateAlgorithm(algorithm.canonical_name()),
            Conflict::Alias {
                alias,
                existing,
                rejected,
                ..
            } => Self::AliasCollision {
                alias,
                existing: existing.canonical_name(),
                rejected: rejected.canonical_name(),
            },
        }
    }
}

/// Folds a spelling into its index key.
fn fold_alias(name: &str) -> String {
    name.to_lowercase().replace('-', "")
}

/// Immutable alias index over a hash name table.
#[derive(Debug, Clone)]
pub struct HashNameRegistry {
    table: &'static [HashNameEntry],
    index: HashMap<String, usize>,
}

impl HashNameRegistry {
    /// Builds a registry, keeping the first claimant of any contested alias.
    ///
    /// Repeated table rows are skipped. Every conflict is logged at warn level.
    #[must_use]
    pub fn new(table: &'static [HashNameEntry]) -> Self {
        let Ok(registry) = Self::build(table, |conflict| {
            tracing::warn!(%conflict, "Hash name table conflict; keeping first entry");
            Ok::<(), Infallible>(())
        });
        registry
    }

    /// Builds a registry that rejects any table conflict.
    ///
    /// ## Errors
    ///
    /// Returns an error if an algorithm appears twice or two algorithms share
    /// a folded alias.
    pub fn try_new(table: &'static [HashNameEntry]) -> Result<Self, RegistryError> {
        Self::with_config(table, &RegistryConfig::default())
    }

    /// Builds a registry according to `config`.
    ///
    /// ## Errors
    ///
    /// Returns an error if an algorithm appears twice, or if
    /// `reject_alias_collisions` is set and two algorithms share a folded
    /// alias.
    pub fn with_config(
        table: &'static [HashNameEntry],
        config: &RegistryConfig,
    ) -> Result<Self, RegistryError> {
        Self::build(table, |conflict| match conflict {
            Conflict::Alias { .. } if !config.reject_alias_collisions => {
                tracing::warn!(%conflict, "Hash alias collision; keeping first entry");
                Ok(())
            }
            conflict => Err(conflict.into()),
        })
    }

    /// Returns the process-wide registry over the standard table.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    fn build<E>(
        table: &'static [HashNameEntry],
        mut on_conflict: impl FnMut(Conflict) -> Result<(), E>,
    ) -> Result<Self, E> {
        let mut index = HashMap::with_capacity(table.len() * HashContext::ALL.len());
        let mut indexed = vec![false; table.len()];

        for (row, entry) in table.iter().enumerate() {
            match index.entry(fold_alias(entry.algorithm.canonical_name())) {
                Entry::Vacant(slot) => {
                    slot.insert(row);
                    indexed[row] = true;
                }
                Entry::Occupied(_) => on_conflict(Conflict::Duplicate(entry.algorithm))?,
            }
        }

        for (row, entry) in table.iter().enumerate() {
            if !indexed[row] {
                continue;
            }
            for (context, spelling) in entry.spellings.iter() {
                match index.entry(fold_alias(spelling)) {
                    Entry::Vacant(slot) => {
                        slot.insert(row);
                    }
                    Entry::Occupied(slot) => {
                        let existing = table[*slot.get()].algorithm;
                        if existing != entry.algorithm {
                            on_conflict(Conflict::Alias {
                                alias: slot.key().clone(),
                                existing,
                                rejected: entry.algorithm,
                                context,
                            })?;
                        }
                    }
                }
            }
        }

        Ok(Self { table, index })
    }

    /// Returns the table this registry indexes.
    #[must_use]
    pub const fn entries(&self) -> &'static [HashNameEntry] {
        self.table
    }

    /// Returns the number of distinct folded aliases.
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.index.len()
    }

    /// Returns whether `alias` resolves to an algorithm.
    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.index.contains_key(&fold_alias(alias))
    }

    /// Resolves any known spelling to its canonical algorithm.
    ///
    /// ## Errors
    ///
    /// Returns [`HashNameError::InvalidAlgorithm`] if the input is absent or
    /// unknown.
    pub fn resolve<'a>(
        &self,
        algorithm: impl Into<AlgorithmRef<'a>>,
    ) -> Result<HashAlgorithm, HashNameError> {
        self.lookup(algorithm.into()).map(|entry| entry.algorithm)
    }

    /// Returns the spelling of `algorithm` in `context`.
    ///
    /// The result is the table spelling verbatim, e.g. `SHA-256` or `RS256`.
    ///
    /// ## Errors
    ///
    /// Returns [`HashNameError::InvalidAlgorithm`] if the input is absent or
    /// unknown, and [`HashNameError::UnsupportedInContext`] if the algorithm
    /// has no spelling in `context`.
    pub fn normalize<'a>(
        &self,
        algorithm: impl Into<AlgorithmRef<'a>>,
        context: HashContext,
    ) -> Result<&'static str, HashNameError> {
        let algorithm = algorithm.into();
        let entry = self.lookup(algorithm)?;

        entry.spellings.get(context).ok_or_else(|| {
            tracing::debug!(input = %algorithm, %context, "Hash algorithm unsupported in context");
            HashNameError::UnsupportedInContext {
                algorithm: entry.algorithm.canonical_name(),
                context,
            }
        })
    }

    /// Normalizes into the legacy platform crypto vocabulary.
    ///
    /// ## Errors
    ///
    /// See [`HashNameRegistry::normalize`].
    pub fn normalize_default<'a>(
        &self,
        algorithm: impl Into<AlgorithmRef<'a>>,
    ) -> Result<&'static str, HashNameError> {
        self.normalize(algorithm, HashContext::default())
    }

    /// Normalizes into the configured default context.
    ///
    /// ## Errors
    ///
    /// See [`HashNameRegistry::normalize`].
    pub fn normalize_configured<'a>(
        &self,
        algorithm: impl Into<AlgorithmRef<'a>>,
        config: &RegistryConfig,
    ) -> Result<&'static str, HashNameError> {
        self.normalize(algorithm, config.default_context)
    }

    fn lookup(&self, algorithm: AlgorithmRef<'_>) -> Result<&'static HashNameEntry, HashNameError> {
        let table = self.table;
        algorithm
            .display_name()
            .and_then(|name| self.index.get(&fold_alias(&name)))
            .map(|&row| &table[row])
            .ok_or_else(|| {
                tracing::debug!(input = %algorithm, "Unrecognized hash algorithm");
                HashNameError::InvalidAlgorithm(algorithm.to_string())
            })
    }
}

/// Returns the process-wide registry over the standard table.
#[must_use]
pub fn registry() -> &'static HashNameRegistry {
    HashNameRegistry::standard()
}

/// Normalizes `algorithm` into `context` using the standard registry.
///
/// ## Errors
///
/// See [`HashNameRegistry::normalize`].
pub fn normalize_hash_name<'a>(
    algorithm: impl Into<AlgorithmRef<'a>>,
    context: HashContext,
) -> Result<&'static str, HashNameError> {
    registry().normalize(algorithm, context)
}

/// Resolves `algorithm` to its canonical algorithm using the standard registry.
///
/// ## Errors
///
/// See [`HashNameRegistry::resolve`].
pub fn resolve_hash_name<'a>(
    algorithm: impl Into<AlgorithmRef<'a>>,
) -> Result<HashAlgorithm, HashNameError> {
    registry().resolve(algorithm)
}
