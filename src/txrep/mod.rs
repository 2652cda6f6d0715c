//! TxRep: line-oriented text form of transaction envelopes
//!
//! Every field is written as `path: value` in wire order, with the path naming the
//! field's full position (`tx.operations[0].body.paymentOp.amount`). Unions write
//! a `.type` line before their payload, optionals a `._present` line, arrays a
//! `.len` line. Values may carry a trailing `(...)` comment which parsing ignores.
//!
//! Converting an envelope to text and back yields the original bytes exactly.

mod envelope;
mod operation;
mod reader;
mod soroban;
mod types;
mod writer;

#[cfg(test)]
mod tests;

use crate::error::WasmStellarError;
use crate::xdr::codec::XdrCodec;
use crate::xdr::transaction::TransactionEnvelope;
use tracing::debug;

use reader::TxRepReader;
use writer::{index, TxRepWriter};

/// A value that renders to and parses from TxRep lines rooted at `path`
pub(crate) trait TxRepCodec: Sized {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str);

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError>;
}

/// `<path>.len` followed by each element at `<path>[i]`
pub(crate) fn write_array<T: TxRepCodec>(w: &mut TxRepWriter, path: &str, items: &[T]) {
    w.len(path, items.len());
    for (i, item) in items.iter().enumerate() {
        item.write_txrep(w, &index(path, i));
    }
}

pub(crate) fn read_array<T: TxRepCodec>(
    r: &mut TxRepReader,
    path: &str,
    max: u32,
) -> Result<Vec<T>, WasmStellarError> {
    let len = r.len(path, max)?;
    (0..len).map(|i| T::read_txrep(r, &index(path, i))).collect()
}

/// `<path>._present` followed by the value itself at `<path>`
pub(crate) fn write_optional<T: TxRepCodec>(w: &mut TxRepWriter, path: &str, value: &Option<T>) {
    w.present(path, value.is_some());
    if let Some(value) = value {
        value.write_txrep(w, path);
    }
}

pub(crate) fn read_optional<T: TxRepCodec>(
    r: &mut TxRepReader,
    path: &str,
) -> Result<Option<T>, WasmStellarError> {
    if r.present(path)? {
        Ok(Some(T::read_txrep(r, path)?))
    } else {
        Ok(None)
    }
}

/// Optional array: `<path>._present`, then `.len` and elements when present
pub(crate) fn write_optional_array<T: TxRepCodec>(
    w: &mut TxRepWriter,
    path: &str,
    items: &Option<Vec<T>>,
) {
    w.present(path, items.is_some());
    if let Some(items) = items {
        write_array(w, path, items);
    }
}

pub(crate) fn read_optional_array<T: TxRepCodec>(
    r: &mut TxRepReader,
    path: &str,
    max: u32,
) -> Result<Option<Vec<T>>, WasmStellarError> {
    if r.present(path)? {
        Ok(Some(read_array(r, path, max)?))
    } else {
        Ok(None)
    }
}

/// Render a base64 transaction envelope as TxRep text
pub fn to_txrep(envelope_xdr_base64: &str) -> Result<String, WasmStellarError> {
    let envelope = TransactionEnvelope::from_xdr_base64(envelope_xdr_base64)?;
    envelope_to_txrep(&envelope)
}

/// Render an envelope as TxRep text.
///
/// Fails when a value has no text form that parses back to the same bytes,
/// such as an alphanum12 asset with a short code.
pub fn envelope_to_txrep(envelope: &TransactionEnvelope) -> Result<String, WasmStellarError> {
    let mut w = TxRepWriter::new();
    envelope.write_txrep(&mut w, "");
    debug!(
        envelope_type = envelope.envelope_type().name(),
        lines = w.line_count(),
        "rendered txrep"
    );
    w.finish()
}

/// Parse TxRep text into a base64 transaction envelope
pub fn from_txrep(txrep: &str) -> Result<String, WasmStellarError> {
    Ok(txrep_to_envelope(txrep)?.to_xdr_base64())
}

/// Parse TxRep text into an envelope.
///
/// Every line must be consumed in order, and the result must satisfy the
/// same length bounds as an envelope decoded from the wire.
pub fn txrep_to_envelope(txrep: &str) -> Result<TransactionEnvelope, WasmStellarError> {
    let mut reader = TxRepReader::parse(txrep)?;
    let envelope = TransactionEnvelope::read_txrep(&mut reader, "")?;
    reader.finish()?;
    debug!(lines = reader.line_count(), "parsed txrep");
    TransactionEnvelope::from_xdr(&envelope.to_xdr())
}
