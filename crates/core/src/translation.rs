//! Translation capability: per-locale content fragments.

use std::collections::BTreeMap;

use crate::locale::Locale;

/// Locale-scoped content fragment of a translatable entity.
///
/// Each translatable entity pairs with its own fragment type (a vendor
/// localizes a description, another entity localizes whatever it needs).
/// [`TranslationSet`] mints missing fragments through [`for_locale`]
/// (Translation::for_locale), which is what makes lazy lookup possible
/// without the set knowing the concrete type.
pub trait Translation {
    /// Create the empty fragment for `locale`.
    fn for_locale(locale: Locale) -> Self;

    /// The locale this fragment belongs to.
    fn locale(&self) -> &Locale;
}

/// Per-locale storage for one entity's translations.
///
/// Holds at most one fragment per locale. The map key always equals the
/// stored fragment's own locale; [`insert`](TranslationSet::insert) keys by
/// the fragment itself so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSet<T> {
    by_locale: BTreeMap<Locale, T>,
}

impl<T: Translation> TranslationSet<T> {
    pub fn new() -> Self {
        Self {
            by_locale: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_locale.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_locale.is_empty()
    }

    pub fn contains(&self, locale: &Locale) -> bool {
        self.by_locale.contains_key(locale)
    }

    pub fn get(&self, locale: &Locale) -> Option<&T> {
        self.by_locale.get(locale)
    }

    pub fn get_mut(&mut self, locale: &Locale) -> Option<&mut T> {
        self.by_locale.get_mut(locale)
    }

    /// Fetch the fragment for `locale`, minting an empty one on first use.
    pub fn get_or_create(&mut self, locale: &Locale) -> &mut T {
        self.by_locale
            .entry(locale.clone())
            .or_insert_with(|| T::for_locale(locale.clone()))
    }

    /// Insert `fragment` under its own locale, returning the one it replaced.
    pub fn insert(&mut self, fragment: T) -> Option<T> {
        self.by_locale.insert(fragment.locale().clone(), fragment)
    }

    pub fn remove(&mut self, locale: &Locale) -> Option<T> {
        self.by_locale.remove(locale)
    }

    /// Locales with a stored fragment, in order.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.by_locale.keys()
    }

    /// Stored fragments, ordered by locale.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.by_locale.values()
    }
}

impl<T: Translation> Default for TranslationSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
