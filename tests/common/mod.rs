//! Common test utilities shared by the integration tests.
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use color_palettes::{Palette, PaletteGroupName};

/// Every (group, palette) pair in registry order.
pub fn all_palettes() -> impl Iterator<Item = (PaletteGroupName, Palette)> {
    PaletteGroupName::ALL
        .into_iter()
        .flat_map(|group| group.palettes().iter().map(move |p| (group, *p)))
}

/// Independent `^#[0-9A-Fa-f]{6}$` check, so the tests do not lean on the
/// crate's own validator.
pub fn looks_like_hex(color: &str) -> bool {
    let bytes = color.as_bytes();
    bytes.len() == 7
        && bytes[0] == b'#'
        && bytes[1..]
            .iter()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F'))
}

/// Owned copy of a color slice, for comparing against literals.
pub fn owned(colors: &[&str]) -> Vec<String> {
    colors.iter().map(ToString::to_string).collect()
}
