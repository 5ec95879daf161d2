//! Collections of catalog entries and queries over them.
//!
//! An [`AttributeCatalog`] holds the attribute sets of all components, APIs
//! and devices known to a tool. Every query is read-only, so large catalogs
//! are scanned in parallel.
//!
//! # Example
//!
//! ```ignore
//! use packmatch::model::{AttributeCatalog, AttributeSet};
//!
//! let catalog: AttributeCatalog = entries.into_iter().collect();
//! let filter = AttributeSet::new().attr("Cclass", "Device").attr("Cgroup", "Startup");
//!
//! // Highest version of the startup component within 1.x
//! let startup = catalog.resolve_component(&filter, "1.0.0:1.99.99", false);
//! ```

use super::attributes::AttributeSet;
use super::keys;
use crate::matching::{version, VendorRegistry};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Catalogs smaller than this are scanned sequentially.
const PARALLEL_THRESHOLD: usize = 256;

/// An ordered collection of catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeCatalog {
    entries: Vec<AttributeSet>,
}

impl AttributeCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: AttributeSet) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[AttributeSet] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttributeSet> {
        self.entries.iter()
    }

    /// Entries accepted by `predicate`, in catalog order.
    fn select<F>(&self, predicate: F) -> Vec<&AttributeSet>
    where
        F: Fn(&AttributeSet) -> bool + Sync,
    {
        if self.entries.len() < PARALLEL_THRESHOLD {
            return self.entries.iter().filter(|e| predicate(e)).collect();
        }
        self.entries
            .par_iter()
            .filter(|e| predicate(e))
            .collect()
    }

    /// Entries carrying every attribute of `required` (see
    /// [`AttributeSet::compare_attributes`]).
    #[must_use]
    pub fn find_matching(&self, required: &AttributeSet) -> Vec<&AttributeSet> {
        self.select(|entry| entry.compare_attributes(required))
    }

    /// Components (non-API entries with a `Cclass`) satisfying `filter`.
    #[must_use]
    pub fn find_components(&self, filter: &AttributeSet) -> Vec<&AttributeSet> {
        self.select(|entry| {
            !entry.is_api()
                && entry.contains(keys::CCLASS)
                && entry.has_component_attributes(filter)
        })
    }

    /// Devices whose attributes satisfy the device attributes of `request`.
    #[must_use]
    pub fn find_devices(&self, request: &AttributeSet) -> Vec<&AttributeSet> {
        self.select(|entry| entry.contains(keys::DNAME) && request.match_device_attributes(entry))
    }

    /// APIs requested by `request`.
    #[must_use]
    pub fn find_apis(&self, request: &AttributeSet) -> Vec<&AttributeSet> {
        self.select(|entry| entry.is_api() && entry.match_api_attributes(request))
    }

    /// The best component for `filter` whose version satisfies `version_filter`.
    ///
    /// `version_filter` is a range or an `@` selector as accepted by
    /// [`version::get_matching_version`]; an empty filter picks the highest
    /// version. Version attributes of `filter` itself are ignored. Among
    /// entries with the selected version the first one in catalog order wins.
    #[must_use]
    pub fn resolve_component(
        &self,
        filter: &AttributeSet,
        version_filter: &str,
        compatible: bool,
    ) -> Option<&AttributeSet> {
        let mut unversioned = filter.clone();
        unversioned.remove(keys::CVERSION);

        let candidates = self.find_components(&unversioned);
        let selected = version::get_matching_version(
            version_filter,
            candidates.iter().map(|c| c.version_string()),
            compatible,
        );
        debug!(
            "Resolved {} against {} candidates with '{}': {:?}",
            filter,
            candidates.len(),
            version_filter,
            selected
        );
        let selected = selected?;
        candidates
            .into_iter()
            .find(|c| c.version_string() == selected)
    }

    /// Map component ids to the entries that carry them, in catalog order.
    ///
    /// Several versions of one component share the id when `with_version` is
    /// off; the map then lists all of them under one key.
    #[must_use]
    pub fn index_by_component_id(&self, with_version: bool) -> IndexMap<String, Vec<&AttributeSet>> {
        self.index_by_component_id_in(with_version, VendorRegistry::shared())
    }

    /// [`index_by_component_id`](Self::index_by_component_id) with vendors
    /// canonicalized through `vendors`.
    #[must_use]
    pub fn index_by_component_id_in(
        &self,
        with_version: bool,
        vendors: &VendorRegistry,
    ) -> IndexMap<String, Vec<&AttributeSet>> {
        let ids: Vec<String> = self
            .entries
            .par_iter()
            .map(|entry| entry.component_id_in(with_version, vendors))
            .collect();

        let mut index: IndexMap<String, Vec<&AttributeSet>> = IndexMap::new();
        for (id, entry) in ids.into_iter().zip(&self.entries) {
            index.entry(id).or_default().push(entry);
        }
        index
    }
}

impl FromIterator<AttributeSet> for AttributeCatalog {
    fn from_iter<I: IntoIterator<Item = AttributeSet>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<AttributeSet>> for AttributeCatalog {
    fn from(entries: Vec<AttributeSet>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a AttributeCatalog {
    type Item = &'a AttributeSet;
    type IntoIter = std::slice::Iter<'a, AttributeSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
