use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use wasm_bindgen::prelude::*;

use crate::{Sheet, SheetBuilder, SheetParams, build_sheet};

fn sheet_to_js(sheet: &Sheet) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(sheet).map_err(|e| JsError::new(&e.to_string()))
}

/// Generate the sheet of participant `owner` on a `size` x `size` grid.
/// Returns `{ owner_number, size, cells }` directly usable in JavaScript.
#[wasm_bindgen(js_name = generateSheet)]
pub fn generate_sheet(owner: u32, size: u8, seed: u64) -> Result<JsValue, JsError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let sheet = build_sheet(owner, size as usize, &mut rng, &SheetParams::default())
        .map_err(|e| JsError::new(&e.to_string()))?;
    sheet_to_js(&sheet)
}

/// A seeded generator for every sheet of one game session.
#[wasm_bindgen]
pub struct WasmSheetBuilder {
    builder: SheetBuilder<ChaCha20Rng>,
}

#[wasm_bindgen]
impl WasmSheetBuilder {
    /// Create a builder for `size` x `size` sheets.
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8, seed: u64) -> Result<WasmSheetBuilder, JsError> {
        if size == 0 {
            return Err(JsError::new("size must be at least 1"));
        }
        let rng = ChaCha20Rng::seed_from_u64(seed);
        let builder = SheetBuilder::new(size as usize, rng, SheetParams::default());
        Ok(WasmSheetBuilder { builder })
    }

    /// Generate the sheet of participant `owner`.
    #[wasm_bindgen(js_name = sheetFor)]
    pub fn sheet_for(&mut self, owner: u32) -> Result<JsValue, JsError> {
        let sheet = self
            .builder
            .sheet_for(owner)
            .map_err(|e| JsError::new(&e.to_string()))?;
        sheet_to_js(&sheet)
    }
}
