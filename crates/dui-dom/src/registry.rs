//! Process-wide custom element registry.
//!
//! A custom element name is defined once per process and looked up by name
//! afterwards. Defining the same name again for the same owning component
//! is a no-op that returns the stored definition, so components can call
//! [`define`] from their initialisation path without coordinating.
//!
//! # Thread Safety
//!
//! The table sits behind a global `Mutex`. Definitions are two static strs,
//! so the lock is held only for a map lookup or insert.

use std::sync::{Mutex, OnceLock, PoisonError};

use ahash::AHashMap;

use crate::error::DomError;

/// A custom element definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementDefinition {
    /// Tag name, lower-case with at least one hyphen.
    pub name: &'static str,
    /// Component that renders this element. Two owners cannot share a name.
    pub owner: &'static str,
}

impl ElementDefinition {
    #[must_use]
    pub const fn new(name: &'static str, owner: &'static str) -> Self {
        Self { name, owner }
    }
}

static REGISTRY: OnceLock<Mutex<AHashMap<&'static str, ElementDefinition>>> = OnceLock::new();

fn table() -> &'static Mutex<AHashMap<&'static str, ElementDefinition>> {
    REGISTRY.get_or_init(|| Mutex::new(AHashMap::new()))
}

/// Check a custom element name: ASCII lower-case letter first, contains a
/// hyphen, and only lower-case letters, digits, `-`, `_` or `.`.
pub fn validate_name(name: &str) -> Result<(), DomError> {
    let mut chars = name.chars();
    let starts_ok = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    let rest_ok = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.'));
    if starts_ok && rest_ok && name.contains('-') {
        Ok(())
    } else {
        Err(DomError::InvalidName(name.to_owned()))
    }
}

/// Define a custom element. Idempotent for the same owner; a second owner
/// gets [`DomError::AlreadyDefined`] naming the first.
pub fn define(definition: ElementDefinition) -> Result<ElementDefinition, DomError> {
    validate_name(definition.name)?;
    let mut table = table().lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = table.get(definition.name) {
        if existing.owner == definition.owner {
            return Ok(*existing);
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            name = definition.name,
            owner = existing.owner,
            rejected = definition.owner,
            "custom element name taken"
        );

        return Err(DomError::AlreadyDefined {
            name: definition.name.to_owned(),
            owner: existing.owner,
        });
    }
    table.insert(definition.name, definition);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        name = definition.name,
        owner = definition.owner,
        "custom element defined"
    );

    Ok(definition)
}

/// Look up a definition by name.
#[must_use]
pub fn lookup(name: &str) -> Option<ElementDefinition> {
    table()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .copied()
}

/// Component that owns `name`, if defined.
#[must_use]
pub fn owner_of(name: &str) -> Option<&'static str> {
    lookup(name).map(|def| def.owner)
}

#[must_use]
pub fn is_defined(name: &str) -> bool {
    lookup(name).is_some()
}
