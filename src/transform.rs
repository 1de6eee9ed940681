//! Palette sequence to name-keyed mapping.
//!
//! [`PaletteMap`] keeps insertion order so iteration and JSON output follow
//! the source table. Re-inserting an existing name replaces its colors in
//! place (last write wins, first position kept).

use std::marker::PhantomData;
use std::ops::{Deref, Index};

use serde::{Serialize, Serializer};

use crate::types::{Palette, PaletteGroupName, PaletteKey};

type Colors = &'static [&'static str];

/// Ordered mapping from palette name to its color sequence.
///
/// Lookups by string go through [`PaletteMap::get`], which returns `None`
/// for an absent name. Indexing with `map["name"]` panics on an absent name,
/// the same contract as `std::collections::HashMap`. For indexing by a
/// closed key set see [`GroupMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteMap {
    entries: Vec<(&'static str, Colors)>,
}

impl PaletteMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert or replace. Returns the colors previously stored under `name`.
    pub fn insert(&mut self, name: &'static str, colors: Colors) -> Option<Colors> {
        if let Some(slot) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            log::debug!("palette {name:?} defined twice, keeping the later colors");
            return Some(std::mem::replace(&mut slot.1, colors));
        }
        self.entries.push((name, colors));
        None
    }

    /// Colors for `name`, compared exactly (case-sensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Colors> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, colors)| *colors)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn values(&self) -> impl Iterator<Item = Colors> + '_ {
        self.entries.iter().map(|(_, colors)| *colors)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Colors)> + '_ {
        self.entries.iter().copied()
    }
}

impl Index<&str> for PaletteMap {
    type Output = [&'static str];

    #[allow(clippy::panic)]
    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Some(colors) => colors,
            None => panic!("no palette named {name:?}"),
        }
    }
}

impl FromIterator<Palette> for PaletteMap {
    fn from_iter<I: IntoIterator<Item = Palette>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        for palette in iter {
            map.insert(palette.name, palette.colors);
        }
        map
    }
}

impl Serialize for PaletteMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(key, colors)| (*key, *colors)))
    }
}

/// A group's [`PaletteMap`] that only accepts that group's key type.
///
/// Indexing with a key from another group does not compile:
///
/// ```compile_fail
/// use color_palettes::{paul_tol, JapanCudoPaletteName};
///
/// let _ = &paul_tol()[JapanCudoPaletteName::Accent];
/// ```
///
/// String access (`get`, `map["name"]`, iteration) is the same as on
/// [`PaletteMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMap<K: PaletteKey> {
    map: PaletteMap,
    key: PhantomData<fn() -> K>,
}

impl<K: PaletteKey> GroupMap<K> {
    /// Apply the transform to the table of `K::GROUP`.
    #[must_use]
    pub fn build() -> Self {
        Self {
            map: group_to_map(K::GROUP),
            key: PhantomData,
        }
    }

    /// Colors for `key`. `None` only if the table lost a name its key set still lists.
    #[must_use]
    pub fn get_key(&self, key: K) -> Option<Colors> {
        self.map.get(key.as_str())
    }

    #[must_use]
    pub fn as_map(&self) -> &PaletteMap {
        &self.map
    }
}

impl<K: PaletteKey> Deref for GroupMap<K> {
    type Target = PaletteMap;

    fn deref(&self) -> &PaletteMap {
        &self.map
    }
}

impl<K: PaletteKey> Index<K> for GroupMap<K> {
    type Output = [&'static str];

    fn index(&self, key: K) -> &Self::Output {
        Index::index(&self.map, key.as_str())
    }
}

impl<K: PaletteKey> Index<&str> for GroupMap<K> {
    type Output = [&'static str];

    fn index(&self, name: &str) -> &Self::Output {
        Index::index(&self.map, name)
    }
}

impl<K: PaletteKey> Serialize for GroupMap<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}

/// Build a name-keyed mapping from a palette sequence.
///
/// Pure: the input is only read. An empty input gives an empty map.
#[must_use]
pub fn palettes_to_map(palettes: &[Palette]) -> PaletteMap {
    palettes.iter().copied().collect()
}

/// [`palettes_to_map`] over one group's literal table.
#[must_use]
pub fn group_to_map(group: PaletteGroupName) -> PaletteMap {
    palettes_to_map(group.palettes())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::types::{JapanCudoPaletteName, PaulTolPaletteName};
    use strum::IntoEnumIterator;
    use pretty_assertions::assert_eq;

    const FIRST: Palette = Palette::new("dup", &["#111111"]);
    const MIDDLE: Palette = Palette::new("other", &["#222222", "#333333"]);
    const SECOND: Palette = Palette::new("dup", &["#444444", "#555555"]);

    #[test]
    fn test_empty_input_gives_empty_map() {
        let map = palettes_to_map(&[]);
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.get("anything"), None);
    }

    #[test]
    fn test_one_entry_per_palette_in_order() {
        let map = group_to_map(PaletteGroupName::PaulTol);
        let keys: Vec<&str> = map.keys().collect();
        let names: Vec<&str> = PaletteGroupName::PaulTol
            .palettes()
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(keys, names);
    }

    #[test]
    fn test_last_write_wins_keeps_first_position() {
        let map = palettes_to_map(&[FIRST, MIDDLE, SECOND]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("dup"), Some(SECOND.colors));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["dup", "other"]);
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut map = PaletteMap::new();
        assert_eq!(map.insert(FIRST.name, FIRST.colors), None);
        assert_eq!(map.insert(SECOND.name, SECOND.colors), Some(FIRST.colors));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = [FIRST, MIDDLE, SECOND];
        let before = input;
        let _ = palettes_to_map(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_transform_is_repeatable() {
        let group = PaletteGroupName::JapanCudo;
        assert_eq!(group_to_map(group), group_to_map(group));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let map = group_to_map(PaletteGroupName::PaulTol);
        assert!(map.contains_key("bright"));
        assert!(!map.contains_key("Bright"));
        assert!(!map.contains_key("burd"));
    }

    #[test]
    fn test_index_by_key_and_str() {
        let map = GroupMap::<PaulTolPaletteName>::build();
        assert_eq!(&map[PaulTolPaletteName::HighContrast], &map["highcontrast"]);
        assert_eq!(map[PaulTolPaletteName::HighContrast].len(), 3);
    }

    #[test]
    fn test_group_map_matches_untyped_map() {
        let typed = GroupMap::<JapanCudoPaletteName>::build();
        assert_eq!(typed.as_map(), &group_to_map(PaletteGroupName::JapanCudo));
        for key in JapanCudoPaletteName::iter() {
            assert_eq!(typed.get_key(key), typed.get(key.as_str()));
            assert!(typed.get_key(key).is_some());
        }
    }

    #[test]
    fn test_group_map_serializes_like_inner_map() {
        let typed = GroupMap::<PaulTolPaletteName>::build();
        assert_eq!(
            serde_json::to_string(&typed).unwrap(),
            serde_json::to_string(typed.as_map()).unwrap()
        );
    }

    #[test]
    #[should_panic(expected = "no palette named \"doesNotExist\"")]
    fn test_index_absent_name_panics() {
        let map = group_to_map(PaletteGroupName::PaulTol);
        let _ = &map["doesNotExist"];
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let map = palettes_to_map(&[MIDDLE, FIRST]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r##"{"other":["#222222","#333333"],"dup":["#111111"]}"##);
    }
}
