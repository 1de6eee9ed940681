//! Closed key sets, one enum per group.
//!
//! The string form of every variant is the exact palette name used in the
//! data tables, so `PaulTolPaletteName::BuRd.as_str() == "BuRd"`.

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::types::PaletteGroupName;

/// A palette name known at compile time for one group.
pub trait PaletteKey: Copy + IntoEnumIterator + Into<&'static str> + FromStr + 'static {
    /// Group whose table holds these names.
    const GROUP: PaletteGroupName;

    #[must_use]
    fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum PaulTolPaletteName {
    #[strum(serialize = "bright")]
    Bright,
    #[strum(serialize = "highcontrast")]
    HighContrast,
    #[strum(serialize = "vibrant")]
    Vibrant,
    #[strum(serialize = "muted")]
    Muted,
    #[strum(serialize = "mediumcontrast")]
    MediumContrast,
    #[strum(serialize = "pale")]
    Pale,
    #[strum(serialize = "dark")]
    Dark,
    #[strum(serialize = "light")]
    Light,
    #[strum(serialize = "discreterainbow")]
    DiscreteRainbow,
    #[strum(serialize = "sunset")]
    Sunset,
    #[strum(serialize = "nightfall")]
    Nightfall,
    #[strum(serialize = "BuRd")]
    BuRd,
    #[strum(serialize = "PRGn")]
    PrGn,
    #[strum(serialize = "YlOrBr")]
    YlOrBr,
    #[strum(serialize = "iridescent")]
    Iridescent,
    #[strum(serialize = "incandescent")]
    Incandescent,
    #[strum(serialize = "smoothrainbow")]
    SmoothRainbow,
}

impl PaletteKey for PaulTolPaletteName {
    const GROUP: PaletteGroupName = PaletteGroupName::PaulTol;
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum JapanCudoPaletteName {
    #[strum(serialize = "accent")]
    Accent,
    #[strum(serialize = "base")]
    Base,
}

impl PaletteKey for JapanCudoPaletteName {
    const GROUP: PaletteGroupName = PaletteGroupName::JapanCudo;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_key_counts() {
        assert_eq!(PaulTolPaletteName::COUNT, 17);
        assert_eq!(JapanCudoPaletteName::COUNT, 2);
    }

    #[test]
    fn test_mixed_case_names() {
        assert_eq!(PaulTolPaletteName::BuRd.as_str(), "BuRd");
        assert_eq!(PaulTolPaletteName::PrGn.as_str(), "PRGn");
        assert_eq!(PaulTolPaletteName::YlOrBr.to_string(), "YlOrBr");
        assert_eq!(
            "smoothrainbow".parse::<PaulTolPaletteName>().unwrap(),
            PaulTolPaletteName::SmoothRainbow
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Bright".parse::<PaulTolPaletteName>().is_err());
        assert!("burd".parse::<PaulTolPaletteName>().is_err());
        assert!("Accent".parse::<JapanCudoPaletteName>().is_err());
    }

    #[test]
    fn test_keys_match_table_order() {
        let table: Vec<&str> = PaulTolPaletteName::GROUP
            .palettes()
            .iter()
            .map(|p| p.name)
            .collect();
        let keys: Vec<&str> = PaulTolPaletteName::iter().map(PaletteKey::as_str).collect();
        assert_eq!(keys, table);

        let table: Vec<&str> = JapanCudoPaletteName::GROUP
            .palettes()
            .iter()
            .map(|p| p.name)
            .collect();
        let keys: Vec<&str> = JapanCudoPaletteName::iter().map(PaletteKey::as_str).collect();
        assert_eq!(keys, table);
    }
}
