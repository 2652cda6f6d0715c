//! WASM bindings for transaction building
//!
//! BuilderNamespace provides the entry point for building transactions:
//! buildTransaction(intent, context)

use crate::builder::{
    build_transaction,
    types::{BuildContext, TransactionIntent},
};
use crate::wasm::transaction::WasmTransaction;
use wasm_bindgen::prelude::*;

/// Namespace for building operations
#[wasm_bindgen]
pub struct BuilderNamespace;

#[wasm_bindgen]
impl BuilderNamespace {
    /// Build an unsigned transaction from an intent and context
    ///
    /// # Example Intent (Payment)
    /// ```json
    /// { "type": "payment", "destination": "GBAF6NXN...", "asset": "native", "amount": "12.5" }
    /// ```
    ///
    /// # Example Context
    /// ```json
    /// {
    ///   "source": "GAVRMS4QIOCC4QMOSKILOOOHCSO4FEKOXZPNLKFFN6W7SD2KUB7NBPLN",
    ///   "sequenceNumber": "46489056724385793",
    ///   "baseFee": 100,
    ///   "memo": { "type": "text", "value": "invoice 12" },
    ///   "timeBounds": { "minTime": 0, "maxTime": 1700000000 }
    /// }
    /// ```
    ///
    /// # Intent Types
    /// - `payment`: destination, asset, amount
    /// - `createAccount`: destination, startingBalance
    /// - `changeTrust`: asset, limit (optional)
    /// - `manageData`: name, value (hex, optional)
    /// - `accountMerge`: destination
    /// - `bumpSequence`: bumpTo
    /// - `invokeContract`: contract, function, args (base64 SCVal XDR)
    /// - `batch`: operations
    #[wasm_bindgen(js_name = buildTransaction)]
    pub fn build_transaction_wasm(
        intent: JsValue,
        context: JsValue,
    ) -> Result<WasmTransaction, JsValue> {
        let intent: TransactionIntent = serde_wasm_bindgen::from_value(intent)
            .map_err(|e| JsValue::from_str(&format!("Invalid intent: {}", e)))?;

        let context: BuildContext = serde_wasm_bindgen::from_value(context)
            .map_err(|e| JsValue::from_str(&format!("Invalid context: {}", e)))?;

        let tx = build_transaction(intent, context)?;

        Ok(WasmTransaction::from_inner(tx))
    }
}
