//! Precomputed per-group mappings and the name lookup built on them.
//!
//! Each group's [`PaletteMap`] is derived from its literal table once, on first
//! access, and is never mutated afterwards. Concurrent readers need no locking.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Serialize, Serializer};

use crate::color::validate_hex_color;
use crate::error::{PaletteError, Result};
use crate::transform::{GroupMap, PaletteMap};
use crate::types::{
    JapanCudoPaletteName, Palette, PaletteGroupName, PaletteKey, PaulTolPaletteName,
};

static PAUL_TOL_MAP: OnceLock<GroupMap<PaulTolPaletteName>> = OnceLock::new();
static JAPAN_CUDO_MAP: OnceLock<GroupMap<JapanCudoPaletteName>> = OnceLock::new();

fn build<K: PaletteKey>() -> GroupMap<K> {
    let map = GroupMap::<K>::build();
    log::debug!("built {} palette map with {} entries", K::GROUP, map.len());
    map
}

/// Paul Tol palettes keyed by name.
///
/// ```
/// use color_palettes::{paul_tol, PaulTolPaletteName};
///
/// assert_eq!(paul_tol()[PaulTolPaletteName::Light][0], "#77AADD");
/// assert_eq!(paul_tol().get("light"), Some(&paul_tol()["light"]));
/// assert_eq!(paul_tol().get("invalidPalette"), None);
/// ```
#[must_use]
pub fn paul_tol() -> &'static GroupMap<PaulTolPaletteName> {
    PAUL_TOL_MAP.get_or_init(build)
}

/// Japan CUDO palettes keyed by name.
///
/// ```compile_fail
/// use color_palettes::{japan_cudo, PaulTolPaletteName};
///
/// let _ = &japan_cudo()[PaulTolPaletteName::Bright];
/// ```
#[must_use]
pub fn japan_cudo() -> &'static GroupMap<JapanCudoPaletteName> {
    JAPAN_CUDO_MAP.get_or_init(build)
}

/// The precomputed mapping for `group`, keyed by string.
#[must_use]
pub fn group_map(group: PaletteGroupName) -> &'static PaletteMap {
    match group {
        PaletteGroupName::PaulTol => paul_tol().as_map(),
        PaletteGroupName::JapanCudo => japan_cudo().as_map(),
    }
}

/// Colors of the palette `palette_name` in `group`, or `None` when the group
/// has no palette by that exact (case-sensitive) name.
///
/// The returned slice borrows the compiled-in table; it is read-only and
/// never copied.
///
/// ```
/// use color_palettes::{get_colors_by_palette_name, PaletteGroupName};
///
/// let bright = get_colors_by_palette_name(PaletteGroupName::PaulTol, "bright");
/// assert_eq!(bright.map(<[_]>::len), Some(7));
/// assert!(get_colors_by_palette_name(PaletteGroupName::PaulTol, "doesNotExist").is_none());
/// ```
#[must_use]
pub fn get_colors_by_palette_name(
    group: PaletteGroupName,
    palette_name: &str,
) -> Option<&'static [&'static str]> {
    let colors = group_map(group).get(palette_name);
    if colors.is_none() {
        log::trace!("no palette {palette_name:?} in {group}");
    }
    colors
}

/// Like [`get_colors_by_palette_name`], for callers holding the group as a
/// string tag. An unknown tag is `None`, not an error.
#[must_use]
pub fn get_colors_by_group_tag(
    group_tag: &str,
    palette_name: &str,
) -> Option<&'static [&'static str]> {
    let Ok(group) = group_tag.parse::<PaletteGroupName>() else {
        log::trace!("unknown palette group {group_tag:?}");
        return None;
    };
    get_colors_by_palette_name(group, palette_name)
}

/// The whole registry, serializing as `{"PaulTol": {...}, "JapanCUDO": {...}}`
/// with each group in palette order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry;

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            PaletteGroupName::ALL
                .into_iter()
                .map(|group| (group.as_str(), group_map(group))),
        )
    }
}

/// Serialize the whole registry to JSON.
///
/// # Errors
/// Returns [`PaletteError::Json`] if serialization fails.
pub fn registry_json(pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(&Registry)?
    } else {
        serde_json::to_string(&Registry)?
    };
    Ok(json)
}

/// Check every group's literal table: unique names, non-empty palettes and
/// `#RRGGBB` colors.
///
/// # Errors
/// Returns the first violation found, in registry order.
pub fn validate_registry() -> Result<()> {
    PaletteGroupName::ALL.into_iter().try_for_each(validate_group)
}

/// [`validate_registry`] for a single group.
///
/// # Errors
/// See [`validate_registry`].
pub fn validate_group(group: PaletteGroupName) -> Result<()> {
    validate_palettes(group.as_str(), group.palettes())
}

/// Invariant check over an arbitrary palette sequence labelled `group`.
///
/// # Errors
/// See [`validate_registry`].
pub fn validate_palettes(group: &str, palettes: &[Palette]) -> Result<()> {
    let mut seen = HashSet::new();
    for palette in palettes {
        if !seen.insert(palette.name) {
            return Err(PaletteError::DuplicateName {
                group: group.to_string(),
                name: palette.name.to_string(),
            });
        }
        if palette.is_empty() {
            return Err(PaletteError::EmptyPalette(palette.name.to_string()));
        }
        palette.colors.iter().copied().try_for_each(validate_hex_color)?;
    }
    Ok(())
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

    #[test]
    fn test_maps_are_built_once() {
        assert!(std::ptr::eq(paul_tol(), paul_tol()));
        assert!(std::ptr::eq(japan_cudo().as_map(), group_map(PaletteGroupName::JapanCudo)));
    }

    #[test]
    fn test_lookup_matches_table() {
        let colors = get_colors_by_palette_name(PaletteGroupName::PaulTol, "bright").unwrap();
        assert_eq!(colors, PaletteGroupName::PaulTol.palettes()[0].colors);
    }

    #[test]
    fn test_lookup_both_groups() {
        assert!(get_colors_by_palette_name(PaletteGroupName::PaulTol, "sunset").is_some());
        assert!(get_colors_by_palette_name(PaletteGroupName::JapanCudo, "base").is_some());
        assert!(get_colors_by_palette_name(PaletteGroupName::JapanCudo, "bright").is_none());
    }

    #[test]
    fn test_group_tag_lookup() {
        assert!(get_colors_by_group_tag("PaulTol", "bright").is_some());
        assert!(get_colors_by_group_tag("Nonexistent", "bright").is_none());
        assert!(get_colors_by_group_tag("paultol", "bright").is_none());
        assert!(get_colors_by_group_tag("", "").is_none());
    }

    #[test]
    fn test_registry_is_valid() {
        validate_registry().unwrap();
    }

    #[test]
    fn test_validate_reports_duplicate() {
        let palettes = [
            Palette::new("a", &["#000000"]),
            Palette::new("a", &["#FFFFFF"]),
        ];
        let err = validate_palettes("Test", &palettes).unwrap_err();
        assert!(matches!(
            err,
            PaletteError::DuplicateName { ref group, ref name } if group == "Test" && name == "a"
        ));
    }

    #[test]
    fn test_validate_reports_empty_palette() {
        let err = validate_palettes("Test", &[Palette::new("none", &[])]).unwrap_err();
        assert!(matches!(err, PaletteError::EmptyPalette(ref name) if name == "none"));
    }

    #[test]
    fn test_validate_reports_bad_color() {
        let err = validate_palettes("Test", &[Palette::new("x", &["#123456", "red"])]).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor(ref color) if color == "red"));
    }

    #[test]
    fn test_registry_json_groups_in_order() {
        let json = registry_json(false).unwrap();
        let paul = json.find("\"PaulTol\"").unwrap();
        let cudo = json.find("\"JapanCUDO\"").unwrap();
        assert!(paul < cudo);
        assert!(json.starts_with(r##"{"PaulTol":{"bright":["#4477AA","##));
    }
}
