//! Site catalog: the ordered registry of searchable job-listing sites.
//!
//! Ordinal position in the catalog determines a site's menu number, and the
//! synthetic "all of the above" option always takes the number right after
//! the last entry.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::ids::SourceId;

/// A selectable job-listing site.
///
/// `fixed_location` marks sites whose listings are inherently regional:
/// the flow never asks the user for a location and sends this placeholder
/// to the backend instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEntry {
    pub display_name: String,
    pub source_id: SourceId,
    pub fixed_location: Option<String>,
}

impl SiteEntry {
    /// Creates a site entry that requires a location answer.
    pub fn new(display_name: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            source_id: SourceId::new(source_id),
            fixed_location: None,
        }
    }

    /// Marks the site as regional, with the location sent to the backend.
    pub fn with_fixed_location(mut self, location: impl Into<String>) -> Self {
        self.fixed_location = Some(location.into());
        self
    }

    /// True when the flow should not ask the user for a location.
    pub fn skips_location(&self) -> bool {
        self.fixed_location.is_some()
    }
}

/// Ordered, immutable list of selectable sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteCatalog {
    entries: Vec<SiteEntry>,
}

static DEFAULT_CATALOG: Lazy<SiteCatalog> = Lazy::new(|| {
    SiteCatalog::new(vec![
        SiteEntry::new("LinkedIn", "linkedin.com/jobs"),
        SiteEntry::new("Gupy", "gupy.io"),
        SiteEntry::new("Glassdoor", "glassdoor.com.br"),
        SiteEntry::new("VAGAS", "vagas.com.br"),
        SiteEntry::new("Indeed", "https://br.indeed.com"),
        SiteEntry::new("Infojobs", "https://www.infojobs.com.br"),
        SiteEntry::new("RioVagas", "https://riovagas.com.br")
            .with_fixed_location("Rio de Janeiro"),
        SiteEntry::new("Catho", "https://www.catho.com.br"),
    ])
});

impl SiteCatalog {
    /// Builds a catalog from an ordered list of entries.
    pub fn new(entries: Vec<SiteEntry>) -> Self {
        Self { entries }
    }

    /// The built-in site list.
    pub fn builtin() -> &'static SiteCatalog {
        &DEFAULT_CATALOG
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Menu number of the synthetic "all of the above" option.
    pub fn all_option_number(&self) -> usize {
        self.entries.len() + 1
    }

    /// Entry by 1-based menu number, if in range.
    pub fn by_menu_number(&self, number: usize) -> Option<&SiteEntry> {
        if number == 0 {
            return None;
        }
        self.entries.get(number - 1)
    }

    pub fn entries(&self) -> &[SiteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &SiteEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_preserves_menu_order() {
        let catalog = SiteCatalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.entries()[0].display_name, "LinkedIn");
        assert_eq!(catalog.entries()[7].display_name, "Catho");
        assert_eq!(catalog.all_option_number(), 9);
    }

    #[test]
    fn by_menu_number_is_one_based() {
        let catalog = SiteCatalog::builtin();
        assert_eq!(catalog.by_menu_number(1).unwrap().display_name, "LinkedIn");
        assert_eq!(catalog.by_menu_number(8).unwrap().display_name, "Catho");
        assert!(catalog.by_menu_number(0).is_none());
        assert!(catalog.by_menu_number(9).is_none());
    }

    #[test]
    fn regional_site_carries_its_placeholder_location() {
        let catalog = SiteCatalog::builtin();
        let rio = catalog
            .iter()
            .find(|e| e.display_name == "RioVagas")
            .unwrap();
        assert!(rio.skips_location());
        assert_eq!(rio.fixed_location.as_deref(), Some("Rio de Janeiro"));

        let linkedin = catalog.by_menu_number(1).unwrap();
        assert!(!linkedin.skips_location());
    }

    #[test]
    fn custom_catalog_reports_its_own_all_number() {
        let catalog = SiteCatalog::new(vec![
            SiteEntry::new("A", "a.example"),
            SiteEntry::new("B", "b.example"),
        ]);
        assert_eq!(catalog.all_option_number(), 3);
    }
}
