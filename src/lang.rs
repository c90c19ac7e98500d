pub mod data;

use crate::{
    error::{PolytextError, Result},
    script::Script,
};
use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

pub use data::BUILTIN_LANGUAGES;

/// Language used whenever detection has no signal to go on.
pub const DEFAULT_LANG: LanguageEntry = data::ENG;

/// Reference metadata for one language.
///
/// Built-in entries borrow `'static` strings; entries inserted at runtime own theirs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// BCP-47 code, unique within a registry.
    pub code: Cow<'static, str>,
    pub name: Cow<'static, str>,
    /// Primary writing script.
    pub script: Script,
    pub family: Cow<'static, str>,
}

impl LanguageEntry {
    pub const fn builtin(
        code: &'static str,
        name: &'static str,
        script: Script,
        family: &'static str,
    ) -> Self {
        Self {
            code: Cow::Borrowed(code),
            name: Cow::Borrowed(name),
            script,
            family: Cow::Borrowed(family),
        }
    }

    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        script: Script,
        family: impl Into<String>,
    ) -> Self {
        Self {
            code: Cow::Owned(code.into()),
            name: Cow::Owned(name.into()),
            script,
            family: Cow::Owned(family.into()),
        }
    }

    #[inline(always)]
    pub fn code(&self) -> &str {
        &self.code
    }
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline(always)]
    pub fn family(&self) -> &str {
        &self.family
    }
}

#[derive(Debug, Clone, Default)]
struct Snapshot {
    entries: Vec<LanguageEntry>,
    index: HashMap<String, usize>,
}

impl Snapshot {
    fn upsert(&mut self, entry: LanguageEntry) -> Option<LanguageEntry> {
        match self.index.get(entry.code()) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], entry)),
            None => {
                self.index.insert(entry.code().to_string(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }
}

/// Code → [`LanguageEntry`] mapping shared by every component.
///
/// Readers clone an immutable snapshot under a short read lock; writers copy the snapshot,
/// modify it and swap it in. Entries keep their insertion position when replaced, so
/// insertion order is stable for tie-breaking.
#[derive(Debug)]
pub struct LanguageRegistry {
    snapshot: RwLock<Arc<Snapshot>>,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageRegistry {
    /// A registry pre-populated with [`BUILTIN_LANGUAGES`].
    pub fn new() -> Self {
        let registry = Self::empty();
        registry.extend(BUILTIN_LANGUAGES.iter().cloned());
        registry
    }

    pub fn empty() -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    #[inline]
    fn current(&self) -> Arc<Snapshot> {
        let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    pub fn get(&self, code: &str) -> Option<LanguageEntry> {
        let snap = self.current();
        snap.index.get(code).map(|&pos| snap.entries[pos].clone())
    }

    /// Like [`get`](Self::get), but a missing code is an error.
    pub fn lookup(&self, code: &str) -> Result<LanguageEntry> {
        self.get(code)
            .ok_or_else(|| PolytextError::UnknownLanguage(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.current().index.contains_key(code)
    }

    /// Insertion position of `code`, used to break confidence ties.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.current().index.get(code).copied()
    }

    /// Insert or replace by code. Returns the replaced entry, if any.
    pub fn insert(&self, entry: LanguageEntry) -> Option<LanguageEntry> {
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        Arc::make_mut(&mut *guard).upsert(entry)
    }

    /// Insert or replace many entries under a single write lock.
    pub fn extend(&self, entries: impl IntoIterator<Item = LanguageEntry>) {
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        let snap = Arc::make_mut(&mut *guard);
        for entry in entries {
            snap.upsert(entry);
        }
    }

    /// Insert or replace entries from a JSON array of `{code, name, script, family}`.
    ///
    /// The document is validated completely before anything is inserted. Returns the number
    /// of entries read.
    pub fn extend_from_json(&self, json: &str) -> Result<usize> {
        let entries: Vec<LanguageEntry> =
            serde_json::from_str(json).map_err(|e| PolytextError::Registry(e.to_string()))?;
        if let Some(bad) = entries.iter().find(|e| e.code().trim().is_empty()) {
            return Err(PolytextError::Registry(format!(
                "entry `{}` has an empty code",
                bad.name()
            )));
        }
        let n = entries.len();
        tracing::debug!(count = n, "extending language registry");
        self.extend(entries);
        Ok(n)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> Vec<LanguageEntry> {
        self.current().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.current().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
