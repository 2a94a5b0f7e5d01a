//! Font descriptors and the host font catalog.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Family used when a requested family is unknown to the catalog.
pub const FALLBACK_FAMILY: &str = "Dialog";

/// Logical families that are always available.
const LOGICAL_FAMILIES: &[&str] = &["Dialog", "DialogInput", "Serif", "SansSerif", "Monospaced"];

/// Common families assumed present on a typical host.
const COMMON_FAMILIES: &[&str] = &[
    "Arial",
    "Courier",
    "Courier New",
    "Georgia",
    "Helvetica",
    "Tahoma",
    "Times New Roman",
    "Verdana",
];

/// Font style used when rendering captcha text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular upright text.
    #[default]
    Plain,
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Bold italic text.
    BoldItalic,
}

/// A font family at a given weight and point size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Family name as known to the font catalog.
    pub family: String,
    /// Font weight.
    pub weight: FontWeight,
    /// Point size.
    pub size: u32,
}

impl FontDescriptor {
    /// Bold descriptor for `family` at `size`.
    pub fn bold(family: impl Into<String>, size: u32) -> Self {
        Self {
            family: family.into(),
            weight: FontWeight::Bold,
            size,
        }
    }
}

/// Set of font families available on the host.
///
/// Lookups are case-insensitive and return the catalog's own spelling.
#[derive(Debug, Clone)]
pub struct FontCatalog {
    /// Families keyed by lowercase name.
    families: HashMap<String, String>,
}

impl FontCatalog {
    /// Catalog holding the logical families plus common system families.
    pub fn builtin() -> Self {
        Self::empty().with_families(LOGICAL_FAMILIES.iter().chain(COMMON_FAMILIES))
    }

    /// Catalog holding only the logical families.
    pub fn empty() -> Self {
        Self {
            families: HashMap::new(),
        }
        .with_families(LOGICAL_FAMILIES)
    }

    /// Add host families to the catalog.
    pub fn with_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for family in families {
            let family = family.as_ref();
            self.families
                .insert(family.to_lowercase(), family.to_string());
        }
        self
    }

    /// Canonical spelling of `family`, if the catalog knows it.
    pub fn lookup(&self, family: &str) -> Option<&str> {
        self.families
            .get(&family.to_lowercase())
            .map(String::as_str)
    }

    /// Canonical spelling of `family`, or the fallback family when unknown.
    pub fn resolve_family(&self, family: &str) -> String {
        self.lookup(family).unwrap_or(FALLBACK_FAMILY).to_string()
    }
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
