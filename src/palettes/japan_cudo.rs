//! Color Universal Design Organization (CUDO) recommended colors.
//!
//! Source: <https://cudo.jp/?page_id=1565>

use crate::types::Palette;

pub const ACCENT: Palette = Palette::new(
    "accent",
    &[
        "#ff4b00", "#fff100", "#03af7a", "#005aff", "#4dc4ff", "#ff8082", "#f6aa00", "#990099",
        "#804000",
    ],
);

pub const BASE: Palette = Palette::new(
    "base",
    &["#ffcabf", "#ffff80", "#d8f255", "#bfe4ff", "#ffca80", "#77d9a8", "#c9ace6"],
);

pub const JAPAN_CUDO: &[Palette] = &[ACCENT, BASE];
