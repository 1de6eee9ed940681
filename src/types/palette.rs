use serde::Serialize;

/// A named, ordered sequence of `#RRGGBB` color strings.
///
/// Color order is part of the design (for example light to dark) and is
/// never rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

impl Palette {
    #[must_use]
    pub const fn new(name: &'static str, colors: &'static [&'static str]) -> Self {
        Self { name, colors }
    }

    /// Number of colors in the palette
    #[must_use]
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
