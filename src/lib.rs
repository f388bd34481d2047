//! WebAssembly lottery-number sampler.
//!
//! Exports high-level functions callable from JavaScript via wasm-bindgen.
//! The core is [`sampler::sample_unique`]: rejection sampling of `k` distinct
//! integers from an inclusive range, returned sorted ascending. The `draw`
//! module layers the game rules (6-of-45 by default) on top.

pub mod draw;
pub mod error;
pub mod rng;
pub mod sampler;

pub use draw::{Draw, GameRules};
pub use error::SampleError;
pub use rng::{DrawRng, RandomSource};
pub use sampler::{sample, sample_unique, validate_range};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;

    use crate::draw::{draw, GameRules};
    use crate::rng::DrawRng;
    use crate::sampler::sample_unique;

    /// Draw `k` unique integers in [min, max], sorted ascending.
    /// Returns JS object: `{ success: bool, numbers: Int32Array, error: string }`
    #[wasm_bindgen(js_name = "sample")]
    pub fn wasm_sample(min: i32, max: i32, k: u32) -> JsValue {
        let obj = js_sys::Object::new();
        let mut rng = DrawRng::new();

        match sample_unique(min as i64, max as i64, k as usize, &mut rng) {
            Ok(numbers) => {
                let flat: Vec<i32> = numbers.iter().map(|&n| n as i32).collect();
                let arr = js_sys::Int32Array::new_with_length(flat.len() as u32);
                arr.copy_from(&flat);
                js_sys::Reflect::set(&obj, &"success".into(), &true.into()).unwrap();
                js_sys::Reflect::set(&obj, &"numbers".into(), &arr.into()).unwrap();
                js_sys::Reflect::set(&obj, &"error".into(), &"".into()).unwrap();
            }
            Err(e) => {
                let arr = js_sys::Int32Array::new_with_length(0);
                js_sys::Reflect::set(&obj, &"success".into(), &false.into()).unwrap();
                js_sys::Reflect::set(&obj, &"numbers".into(), &arr.into()).unwrap();
                js_sys::Reflect::set(&obj, &"error".into(), &e.to_string().into()).unwrap();
            }
        }

        obj.into()
    }

    /// Run the classic 6-of-45 draw.
    /// Returns JS object `{ numbers: number[] }` or `null` on failure
    /// (the standard rules always validate, so null means RNG breakage).
    #[wasm_bindgen(js_name = "standardDraw")]
    pub fn wasm_standard_draw() -> JsValue {
        let mut rng = DrawRng::new();
        match draw(&GameRules::standard(), &mut rng) {
            Ok(d) => serde_wasm_bindgen::to_value(&d).unwrap_or(JsValue::NULL),
            Err(_) => JsValue::NULL,
        }
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM sampler ready".to_string()
    }
}
