//! WASM bindings for TxRep transcoding

use crate::txrep;
use wasm_bindgen::prelude::*;

/// Namespace for TxRep operations
#[wasm_bindgen]
pub struct TxRepNamespace;

#[wasm_bindgen]
impl TxRepNamespace {
    /// Render a base64 transaction envelope as TxRep text
    #[wasm_bindgen(js_name = toTxRep)]
    pub fn to_txrep(envelope: &str) -> Result<String, JsValue> {
        Ok(txrep::to_txrep(envelope)?)
    }

    /// Parse TxRep text into a base64 transaction envelope
    #[wasm_bindgen(js_name = fromTxRep)]
    pub fn from_txrep(txrep: &str) -> Result<String, JsValue> {
        Ok(txrep::from_txrep(txrep)?)
    }
}
