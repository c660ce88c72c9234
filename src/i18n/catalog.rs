//! Message catalog: per-locale translation trees and key-path lookup.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::locales::Locale;
use crate::error::{Error, Result};

/// Nested mapping of keys to display strings, scoped to one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationTree {
    /// A display string.
    Leaf(String),
    /// A named group of further entries (e.g. `result`, `categories`).
    Group(BTreeMap<String, TranslationTree>),
}

impl TranslationTree {
    /// Resolve a dotted key path to a leaf string.
    ///
    /// Paths that end on a group, or walk through a leaf, resolve to `None`.
    pub fn get(&self, key_path: &str) -> Option<&str> {
        let mut node = self;
        for segment in key_path.split('.') {
            match node {
                Self::Group(children) => node = children.get(segment)?,
                Self::Leaf(_) => return None,
            }
        }
        match node {
            Self::Leaf(text) => Some(text),
            Self::Group(_) => None,
        }
    }

    /// All leaf key paths, in sorted order.
    pub fn key_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths("", &mut paths);
        paths
    }

    /// All `(key path, string)` pairs, in key order.
    pub fn entries(&self) -> Vec<(String, &str)> {
        self.key_paths()
            .into_iter()
            .filter_map(|path| {
                let text = self.get(&path)?;
                Some((path, text))
            })
            .collect()
    }

    fn collect_paths(&self, prefix: &str, out: &mut Vec<String>) {
        match self {
            Self::Leaf(_) => out.push(prefix.to_string()),
            Self::Group(children) => {
                for (key, child) in children {
                    child.collect_paths(&join(prefix, key), out);
                }
            }
        }
    }

    /// Check that `other` has exactly the same keys and nesting as `self`.
    ///
    /// Returns a description of the first difference found.
    fn structure_diff(&self, other: &Self, prefix: &str) -> Option<String> {
        match (self, other) {
            (Self::Leaf(_), Self::Leaf(_)) => None,
            (Self::Group(a), Self::Group(b)) => {
                for key in a.keys() {
                    if !b.contains_key(key) {
                        return Some(format!("missing key '{}'", join(prefix, key)));
                    }
                }
                for key in b.keys() {
                    if !a.contains_key(key) {
                        return Some(format!("unexpected key '{}'", join(prefix, key)));
                    }
                }
                a.iter().find_map(|(key, child)| child.structure_diff(&b[key], &join(prefix, key)))
            }
            (Self::Leaf(_), Self::Group(_)) => {
                Some(format!("'{}' is a group but should be a string", display_path(prefix)))
            }
            (Self::Group(_), Self::Leaf(_)) => {
                Some(format!("'{}' is a string but should be a group", display_path(prefix)))
            }
        }
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

/// Translation trees for every supported locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    trees: BTreeMap<Locale, TranslationTree>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The catalog compiled into the binary.
    ///
    /// Parsed on first use and shared for the lifetime of the process.
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| match Self::from_embedded() {
            Ok(catalog) => catalog,
            Err(e) => {
                // The embedded resources are covered by tests; an empty
                // catalog still degrades to key-path output.
                tracing::error!(error = %e, "Failed to load embedded catalog");
                Self {
                    trees: BTreeMap::new(),
                }
            }
        })
    }

    /// Parse the embedded JSON resources.
    pub fn from_embedded() -> Result<Self> {
        let mut trees = BTreeMap::new();
        for locale in Locale::ALL {
            let tree: TranslationTree = serde_json::from_str(locale.resource())
                .map_err(|e| Error::catalog(format!("{locale}: {e}")))?;
            trees.insert(locale, tree);
        }
        Ok(Self { trees })
    }

    /// Build a catalog from explicit trees.
    pub fn from_trees(trees: impl IntoIterator<Item = (Locale, TranslationTree)>) -> Self {
        Self {
            trees: trees.into_iter().collect(),
        }
    }

    /// The tree for a locale, if present.
    pub fn tree(&self, locale: Locale) -> Option<&TranslationTree> {
        self.trees.get(&locale)
    }

    /// Look up a key path.
    ///
    /// `None` as the locale selects the fallback locale. A key missing from
    /// the requested locale is looked up in the fallback locale.
    pub fn lookup(&self, locale: Option<Locale>, key_path: &str) -> Option<&str> {
        let locale = locale.unwrap_or(Locale::FALLBACK);
        self.tree(locale).and_then(|tree| tree.get(key_path)).or_else(|| {
            if locale == Locale::FALLBACK {
                return None;
            }
            let text = self.tree(Locale::FALLBACK)?.get(key_path)?;
            tracing::debug!(key = key_path, %locale, "Using fallback translation");
            Some(text)
        })
    }

    /// Translate a key path.
    ///
    /// If the key is not found in either the requested or the fallback
    /// locale, returns the key path itself.
    pub fn translate(&self, locale: Option<Locale>, key_path: &str) -> String {
        if let Some(text) = self.lookup(locale, key_path) {
            text.to_string()
        } else {
            tracing::warn!(key = key_path, "Missing translation key");
            key_path.to_string()
        }
    }

    /// Sorted leaf key paths defined for a locale.
    pub fn key_paths(&self, locale: Locale) -> Vec<String> {
        self.tree(locale).map(TranslationTree::key_paths).unwrap_or_default()
    }

    /// Verify that every locale is present, shares the fallback locale's key
    /// structure, and defines only non-empty strings.
    pub fn validate(&self) -> Result<()> {
        let reference = self
            .tree(Locale::FALLBACK)
            .ok_or_else(|| Error::catalog(format!("missing locale '{}'", Locale::FALLBACK)))?;

        for locale in Locale::ALL {
            let tree = self
                .tree(locale)
                .ok_or_else(|| Error::catalog(format!("missing locale '{locale}'")))?;

            if let Some(diff) = reference.structure_diff(tree, "") {
                return Err(Error::catalog(format!("{locale}: {diff}")));
            }

            let entries = tree.entries();
            if let Some((path, _)) = entries.iter().find(|(_, text)| text.trim().is_empty()) {
                return Err(Error::catalog(format!("{locale}: '{path}' is empty")));
            }
        }

        Ok(())
    }
}
