//! XDR primitive framing (RFC 4506)
//!
//! All integers are big-endian. Variable-length opaque data and strings carry a
//! 4-byte length prefix and are zero-padded to a 4-byte boundary. Optionals carry
//! a 4-byte presence flag, arrays a 4-byte element count.

use crate::error::{DecodeError, WasmStellarError};
use base64::prelude::*;

/// Unbounded variable-length field
pub const UNBOUNDED: u32 = u32::MAX;

/// Cursor over an XDR byte stream
#[derive(Debug, Clone)]
pub struct XdrReader<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> XdrReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        XdrReader { bytes, cursor: 0 }
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }

    /// The unread tail of the stream
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.cursor..]
    }

    /// Fails unless the whole stream has been consumed
    pub fn finish(self) -> Result<(), DecodeError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(DecodeError::TrailingBytes(n)),
        }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::TooShort {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.bytes[self.cursor..self.cursor + n];
        self.cursor += n;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_be_bytes(self.take_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_be_bytes(self.take_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_be_bytes(self.take_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        Ok(i64::from_be_bytes(self.take_array()?))
    }

    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        match self.read_u32()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecodeError::InvalidBoolean(other)),
        }
    }

    /// Fixed-size opaque: exactly `N` bytes, no prefix, no padding
    pub fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        self.take_array()
    }

    /// Variable-length opaque with a declared maximum
    pub fn read_var_opaque(&mut self, max: u32) -> Result<Vec<u8>, DecodeError> {
        let len = self.read_u32()?;
        if len > max {
            return Err(DecodeError::LengthExceeded {
                type_name: "opaque",
                max: max as usize,
                actual: len as usize,
            });
        }
        let data = self.take(len as usize)?.to_vec();
        self.skip_padding(len as usize)?;
        Ok(data)
    }

    pub fn read_string(&mut self, max: u32) -> Result<String, DecodeError> {
        let bytes = self.read_var_opaque(max)?;
        String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8(e.to_string()))
    }

    /// Counted array; stops after exactly `count` elements
    pub fn read_array<T: XdrCodec>(&mut self, max: u32) -> Result<Vec<T>, DecodeError> {
        let count = self.read_u32()?;
        if count > max {
            return Err(DecodeError::LengthExceeded {
                type_name: "array",
                max: max as usize,
                actual: count as usize,
            });
        }
        let mut items = Vec::with_capacity((count as usize).min(self.remaining() / 4));
        for _ in 0..count {
            items.push(T::decode(self)?);
        }
        Ok(items)
    }

    pub fn read_optional<T: XdrCodec>(&mut self) -> Result<Option<T>, DecodeError> {
        if self.read_presence()? {
            Ok(Some(T::decode(self)?))
        } else {
            Ok(None)
        }
    }

    /// Presence flag of an optional value
    pub fn read_presence(&mut self) -> Result<bool, DecodeError> {
        match self.read_u32()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecodeError::InvalidOptional(other)),
        }
    }

    fn skip_padding(&mut self, len: usize) -> Result<(), DecodeError> {
        let pad = (4 - len % 4) % 4;
        if self.take(pad)?.iter().any(|b| *b != 0) {
            return Err(DecodeError::NonZeroPadding);
        }
        Ok(())
    }
}

/// Append-only XDR output buffer
#[derive(Debug, Default, Clone)]
pub struct XdrWriter {
    buf: Vec<u8>,
}

impl XdrWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_u32(value as u32);
    }

    pub fn write_fixed(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_var_opaque(&mut self, bytes: &[u8]) {
        self.write_u32(bytes.len() as u32);
        self.buf.extend_from_slice(bytes);
        let pad = (4 - bytes.len() % 4) % 4;
        self.buf.extend(std::iter::repeat(0u8).take(pad));
    }

    pub fn write_string(&mut self, value: &str) {
        self.write_var_opaque(value.as_bytes());
    }

    pub fn write_array<T: XdrCodec>(&mut self, items: &[T]) {
        self.write_u32(items.len() as u32);
        for item in items {
            item.encode(self);
        }
    }

    pub fn write_optional<T: XdrCodec>(&mut self, value: &Option<T>) {
        match value {
            Some(v) => {
                self.write_u32(1);
                v.encode(self);
            }
            None => self.write_u32(0),
        }
    }
}

/// Encode/decode contract shared by every wire type
pub trait XdrCodec: Sized {
    fn encode(&self, w: &mut XdrWriter);

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError>;

    fn to_xdr(&self) -> Vec<u8> {
        let mut w = XdrWriter::new();
        self.encode(&mut w);
        w.into_bytes()
    }

    /// Decode a complete value; trailing bytes are an error
    fn from_xdr(bytes: &[u8]) -> Result<Self, WasmStellarError> {
        let mut r = XdrReader::new(bytes);
        let value = Self::decode(&mut r)?;
        r.finish()?;
        Ok(value)
    }

    /// Decode one value from the front of `bytes`, returning the unread tail
    fn from_xdr_prefix(bytes: &[u8]) -> Result<(Self, &[u8]), WasmStellarError> {
        let mut r = XdrReader::new(bytes);
        let value = Self::decode(&mut r)?;
        Ok((value, r.rest()))
    }

    fn to_xdr_base64(&self) -> String {
        BASE64_STANDARD.encode(self.to_xdr())
    }

    fn from_xdr_base64(encoded: &str) -> Result<Self, WasmStellarError> {
        let bytes = BASE64_STANDARD.decode(encoded.trim())?;
        Self::from_xdr(&bytes)
    }
}

impl XdrCodec for u32 {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_u32(*self);
    }
    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        r.read_u32()
    }
}

impl XdrCodec for i32 {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_i32(*self);
    }
    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        r.read_i32()
    }
}

impl XdrCodec for u64 {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_u64(*self);
    }
    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        r.read_u64()
    }
}

impl XdrCodec for i64 {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_i64(*self);
    }
    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        r.read_i64()
    }
}

impl XdrCodec for bool {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_bool(*self);
    }
    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        r.read_bool()
    }
}

impl<const N: usize> XdrCodec for [u8; N] {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_fixed(self);
    }
    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        r.read_fixed()
    }
}

impl<T: XdrCodec> XdrCodec for Box<T> {
    fn encode(&self, w: &mut XdrWriter) {
        self.as_ref().encode(w);
    }
    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(Box::new(T::decode(r)?))
    }
}

/// Declares a discriminant enum together with its wire values and TxRep names.
///
/// The generated `XdrCodec` impl treats unmapped discriminants as a decode error;
/// forward-compatible fields decode the raw `i32` themselves.
macro_rules! xdr_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn discriminant(self) -> i32 {
                self as i32
            }

            pub fn from_discriminant(value: i32) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Canonical TxRep constant
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl $crate::xdr::codec::XdrCodec for $name {
            fn encode(&self, w: &mut $crate::xdr::codec::XdrWriter) {
                w.write_i32(self.discriminant());
            }

            fn decode(
                r: &mut $crate::xdr::codec::XdrReader<'_>,
            ) -> Result<Self, $crate::error::DecodeError> {
                let value = r.read_i32()?;
                $name::from_discriminant(value).ok_or(
                    $crate::error::DecodeError::UnknownDiscriminant {
                        type_name: stringify!($name),
                        value,
                    },
                )
            }
        }
    };
}

pub(crate) use xdr_enum;
