//! color-palettes - curated color palettes as constant data
//!
//! Ships Paul Tol's schemes and the Japan CUDO recommended set as
//! compile-time tables, with two ways in:
//! - Precomputed name-keyed maps: [`paul_tol()`] and [`japan_cudo()`]
//! - A lookup by group and name: [`get_colors_by_palette_name`]
//!
//! Both surfaces read the same data and always agree. Nothing is loaded or
//! mutated at runtime.
//!
//! # Usage (Rust)
//!
//! ```
//! use color_palettes::{japan_cudo, JapanCudoPaletteName};
//!
//! let accent = &japan_cudo()[JapanCudoPaletteName::Accent];
//! assert_eq!(accent.first(), Some(&"#ff4b00"));
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { paulTol, getColorsByPaletteName } from 'color-palettes';
//! await init();
//! const light = paulTol().light;
//! const bright = getColorsByPaletteName('PaulTol', 'bright');
//! ```

pub mod color;
pub mod error;
pub mod palettes;
pub mod registry;
pub mod transform;
pub mod types;

use std::cell::OnceCell;
use std::thread::LocalKey;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use error::PaletteError;
pub use registry::{
    get_colors_by_group_tag, get_colors_by_palette_name, group_map, japan_cudo, paul_tol,
    registry_json, validate_registry, Registry,
};
pub use transform::{group_to_map, palettes_to_map, GroupMap, PaletteMap};
pub use types::*;

/// Install the panic hook when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Colors for a palette as a JS string array, or `null` when the group tag or
/// palette name is unknown.
#[must_use]
#[wasm_bindgen(js_name = getColorsByPaletteName)]
pub fn get_colors_by_palette_name_js(group: &str, palette_name: &str) -> Option<Vec<String>> {
    get_colors_by_group_tag(group, palette_name)
        .map(|colors| colors.iter().map(ToString::to_string).collect())
}

thread_local! {
    static PAUL_TOL_JS: OnceCell<JsValue> = const { OnceCell::new() };
    static JAPAN_CUDO_JS: OnceCell<JsValue> = const { OnceCell::new() };
}

/// Paul Tol palettes as a frozen plain object (`paulTol().bright`).
///
/// Built on the first call; later calls return the same object.
///
/// # Errors
/// Returns an error if serialization to a JS value fails.
#[wasm_bindgen(js_name = paulTol)]
pub fn paul_tol_js() -> std::result::Result<JsValue, JsValue> {
    cached_object(&PAUL_TOL_JS, paul_tol())
}

/// Japan CUDO palettes as a frozen plain object (`japanCUDO().accent`).
///
/// Built on the first call; later calls return the same object.
///
/// # Errors
/// Returns an error if serialization to a JS value fails.
#[wasm_bindgen(js_name = japanCUDO)]
pub fn japan_cudo_js() -> std::result::Result<JsValue, JsValue> {
    cached_object(&JAPAN_CUDO_JS, japan_cudo())
}

/// The whole registry as a JSON string.
///
/// # Errors
/// Returns an error if JSON serialization fails.
#[wasm_bindgen]
pub fn palettes_json() -> std::result::Result<String, JsValue> {
    Ok(registry_json(false)?)
}

fn cached_object<T: Serialize + ?Sized>(
    cache: &'static LocalKey<OnceCell<JsValue>>,
    value: &T,
) -> std::result::Result<JsValue, JsValue> {
    cache.with(|cell| {
        if let Some(js) = cell.get() {
            return Ok(js.clone());
        }
        let js = to_frozen_object(value)?;
        Ok(cell.get_or_init(|| js).clone())
    })
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Serialize maps as plain objects and freeze the object and its arrays.
fn to_frozen_object<T: Serialize + ?Sized>(value: &T) -> std::result::Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let js = value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))?;

    if let Some(object) = js.dyn_ref::<js_sys::Object>() {
        for colors in js_sys::Object::values(object).iter() {
            if let Some(colors) = colors.dyn_ref::<js_sys::Object>() {
                js_sys::Object::freeze(colors);
            }
        }
        js_sys::Object::freeze(object);
    }
    Ok(js)
}
