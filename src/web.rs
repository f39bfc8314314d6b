use js_sys::Function;
use log::warn;
use wasm_bindgen::prelude::*;

use crate::game::{GameEngine, GameState, StateObserver};

/// Browser-facing game session. Every method returns the state as a plain
/// JS object (see [`crate::types::StateView`]).
#[wasm_bindgen]
pub struct ConnectFour {
    engine: GameEngine,
}

#[wasm_bindgen]
impl ConnectFour {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ConnectFour {
        ConnectFour {
            engine: GameEngine::new(),
        }
    }

    /// Throws when `column` is outside 0..=6. Full columns and finished
    /// games return the unchanged state.
    #[wasm_bindgen(js_name = dropDisc)]
    pub fn drop_disc(&mut self, column: u32) -> Result<JsValue, JsError> {
        let state = self.engine.drop_disc(column as usize)?;
        to_js(&state)
    }

    pub fn reset(&mut self) -> Result<JsValue, JsError> {
        let state = self.engine.reset();
        to_js(&state)
    }

    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsError> {
        to_js(self.engine.state())
    }

    /// Registers `callback(state)` to run after every state change.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        self.engine.subscribe(Box::new(JsCallback(callback)));
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

struct JsCallback(Function);

impl StateObserver for JsCallback {
    fn state_changed(&self, state: &GameState) {
        let value = match serde_wasm_bindgen::to_value(&state.to_view()) {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to serialize state for onChange callback: {err}");
                return;
            }
        };
        if let Err(err) = self.0.call1(&JsValue::NULL, &value) {
            warn!("onChange callback threw: {err:?}");
        }
    }
}

fn to_js(state: &GameState) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&state.to_view()).map_err(|err| JsError::new(&err.to_string()))
}
