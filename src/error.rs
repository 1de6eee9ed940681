//! Structured error types for color-palettes.
//!
//! Lookups never fail: a missing palette is `None`. These errors only come
//! from parsing group tags, checking the registry invariants, and serializing.

/// All errors that can occur outside of plain palette lookup.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// Group tag outside the fixed set.
    #[error("Unknown palette group: {0}")]
    UnknownGroup(String),

    /// Palette name not present in its group.
    #[error("Unknown palette name: {0}")]
    UnknownName(String),

    /// Color string not shaped like `#RRGGBB`.
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),

    /// Two palettes in one group share a name.
    #[error("Duplicate palette name in {group}: {name}")]
    DuplicateName { group: String, name: String },

    /// Palette without any colors.
    #[error("Palette has no colors: {0}")]
    EmptyPalette(String),

    /// JSON serialization error.
    #[error("JSON serialization: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PaletteError>;

impl From<PaletteError> for wasm_bindgen::JsValue {
    fn from(e: PaletteError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
