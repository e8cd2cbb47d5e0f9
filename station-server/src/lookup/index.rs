//! Alias index: every name variant of every station, normalized once.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::normalize::{CanonicalForm, normalize, normalize_segments};
use crate::catalog::Catalog;

/// One normalized name variant.
#[derive(Debug, Clone)]
pub struct IndexedVariant {
    /// Position of the station in the catalog.
    pub station: usize,
    /// The variant as written in the catalog.
    pub source: String,
    pub form: CanonicalForm,
}

/// Lookup structure over all station name variants.
///
/// Built once from a [`Catalog`]; read-only afterwards. Exact and
/// token-set hits are answered from hash maps; partial matching scans
/// [`AliasIndex::variants`].
#[derive(Debug, Default)]
pub struct AliasIndex {
    variants: Vec<IndexedVariant>,

    /// Rendered form → variant positions.
    by_form: HashMap<String, Vec<usize>>,

    /// Token-set key → variant positions.
    by_set: HashMap<String, Vec<usize>>,
}

impl AliasIndex {
    /// Normalize every name and alias in `catalog`.
    ///
    /// A variant containing slashes is registered as a whole and once per
    /// segment, so `Brussel-Noord/Bruxelles-Nord` is also an exact hit for
    /// `Brussel-Noord`.
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = Self::default();

        for (position, record) in catalog.records().iter().enumerate() {
            let mut seen: HashSet<CanonicalForm> = HashSet::new();

            for variant in record.variants() {
                let whole = normalize(variant);
                let segments = normalize_segments(variant);
                let forms = std::iter::once(whole).chain(if segments.len() > 1 {
                    segments
                } else {
                    Vec::new()
                });

                for form in forms {
                    if form.is_empty() || !seen.insert(form.clone()) {
                        continue;
                    }
                    index.insert(IndexedVariant {
                        station: position,
                        source: variant.to_string(),
                        form,
                    });
                }
            }
        }

        debug!(
            stations = catalog.len(),
            variants = index.variants.len(),
            "alias index built"
        );

        index
    }

    fn insert(&mut self, variant: IndexedVariant) {
        let slot = self.variants.len();
        self.by_form
            .entry(variant.form.as_str().to_string())
            .or_default()
            .push(slot);
        self.by_set
            .entry(variant.form.set_key())
            .or_default()
            .push(slot);
        self.variants.push(variant);
    }

    /// All indexed variants, grouped by station in catalog order.
    pub fn variants(&self) -> &[IndexedVariant] {
        &self.variants
    }

    /// Variants whose token sequence equals `form`'s.
    pub fn exact<'a>(
        &'a self,
        form: &CanonicalForm,
    ) -> impl Iterator<Item = &'a IndexedVariant> + use<'a> {
        self.lookup(&self.by_form, form.as_str())
    }

    /// Variants whose token set equals `form`'s.
    pub fn same_tokens<'a>(
        &'a self,
        form: &CanonicalForm,
    ) -> impl Iterator<Item = &'a IndexedVariant> + use<'a> {
        self.lookup(&self.by_set, &form.set_key())
    }

    fn lookup<'a>(
        &'a self,
        map: &'a HashMap<String, Vec<usize>>,
        key: &str,
    ) -> impl Iterator<Item = &'a IndexedVariant> + use<'a> {
        map.get(key)
            .into_iter()
            .flatten()
            .map(|slot| &self.variants[*slot])
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
