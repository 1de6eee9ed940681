use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaletteError;
use crate::palettes::{JAPAN_CUDO, PAUL_TOL};
use crate::types::Palette;

/// The fixed set of palette providers.
///
/// Tags are case-sensitive: `"PaulTol"` parses, `"paultol"` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaletteGroupName {
    /// Paul Tol's qualitative, diverging and sequential schemes
    /// (<https://personal.sron.nl/~pault/>)
    PaulTol,
    /// Color Universal Design Organization recommended set
    /// (<https://cudo.jp/?page_id=1565>)
    #[serde(rename = "JapanCUDO")]
    JapanCudo,
}

impl PaletteGroupName {
    /// Every group, in registry order.
    pub const ALL: [Self; 2] = [Self::PaulTol, Self::JapanCudo];

    /// The tag as it appears in the public API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PaulTol => "PaulTol",
            Self::JapanCudo => "JapanCUDO",
        }
    }

    /// The literal palette table backing this group.
    #[must_use]
    pub const fn palettes(self) -> &'static [Palette] {
        match self {
            Self::PaulTol => PAUL_TOL,
            Self::JapanCudo => JAPAN_CUDO,
        }
    }
}

impl fmt::Display for PaletteGroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteGroupName {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| PaletteError::UnknownGroup(s.to_string()))
    }
}
