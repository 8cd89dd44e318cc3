//! BER decoding.
//!
//! Zero-copy decoding using `Bytes`. The decoder is a cursor over one
//! element's content; constructed elements hand out sub-decoders bounded
//! by their declared (and validated) length, so no read can cross an
//! element boundary and no length claim is trusted before it is checked
//! against the bytes actually present.

use super::length::decode_length;
use super::tag;
use crate::error::{DecodeErrorKind, Error, Result};
use crate::oid::Oid;
use bytes::Bytes;

/// Maximum nesting depth for constructed elements.
///
/// Well-formed SNMP messages nest five levels deep; 64 leaves generous
/// headroom while bounding work on adversarial input.
pub const MAX_DEPTH: usize = 64;

/// BER decoder that reads from a byte buffer.
pub struct Decoder {
    data: Bytes,
    offset: usize,
    base: usize,
    depth: usize,
}

impl Decoder {
    /// Create a new decoder from bytes.
    pub fn new(data: Bytes) -> Self {
        Self {
            data,
            offset: 0,
            base: 0,
            depth: 0,
        }
    }

    /// Create a decoder from a byte slice (copies the data).
    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(data))
    }

    /// Absolute offset into the original datagram, for error reporting.
    pub fn offset(&self) -> usize {
        self.base + self.offset
    }

    /// Get remaining bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Check if we've reached the end of this element.
    pub fn is_empty(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Peek at the next tag without consuming it.
    pub fn peek_tag(&self) -> Option<u8> {
        self.data.get(self.offset).copied()
    }

    fn fail(&self, kind: DecodeErrorKind) -> Error {
        tracing::debug!(
            target: "snmp_wire::ber",
            offset = self.offset(),
            kind = %kind,
            "decode error"
        );
        Error::decode(self.offset(), kind)
    }

    /// Read a single byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        if self.offset >= self.data.len() {
            return Err(self.fail(DecodeErrorKind::TruncatedData));
        }
        let byte = self.data[self.offset];
        self.offset += 1;
        Ok(byte)
    }

    /// Read a tag byte.
    pub fn read_tag(&mut self) -> Result<u8> {
        self.read_byte()
    }

    /// Read a BER length field.
    pub fn read_length(&mut self) -> Result<usize> {
        let (len, consumed) = decode_length(&self.data[self.offset..], self.offset())?;
        self.offset += consumed;
        // A length is only valid if the element it belongs to can supply it
        if len > self.remaining() {
            return Err(self.fail(DecodeErrorKind::InsufficientData {
                needed: len,
                available: self.remaining(),
            }));
        }
        Ok(len)
    }

    /// Read raw bytes without copying.
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes> {
        // saturating_add so a huge len cannot wrap past the bounds check
        if self.offset.saturating_add(len) > self.data.len() {
            return Err(self.fail(DecodeErrorKind::InsufficientData {
                needed: len,
                available: self.remaining(),
            }));
        }
        let bytes = self.data.slice(self.offset..self.offset + len);
        self.offset += len;
        Ok(bytes)
    }

    /// Read and expect a specific tag, returning the content length.
    pub fn expect_tag(&mut self, expected: u8) -> Result<usize> {
        let tag = self.read_tag()?;
        if tag != expected {
            self.offset -= 1;
            return Err(self.fail(DecodeErrorKind::UnexpectedTag {
                expected,
                actual: tag,
            }));
        }
        self.read_length()
    }

    /// Require that this element's content is fully consumed.
    ///
    /// An enclosing length that over-declared its content shows up here as
    /// unread trailing bytes.
    pub fn expect_end(&self) -> Result<()> {
        if !self.is_empty() {
            return Err(self.fail(DecodeErrorKind::TrailingData {
                remaining: self.remaining(),
            }));
        }
        Ok(())
    }

    /// Read a BER INTEGER (signed 32-bit).
    pub fn read_integer(&mut self) -> Result<i32> {
        let len = self.expect_tag(tag::universal::INTEGER)?;
        self.read_integer_value(len)
    }

    /// Read integer content given the length.
    ///
    /// Non-minimal encodings (superfluous leading sign bytes) are accepted;
    /// content that cannot fit an i32 is rejected rather than truncated.
    pub fn read_integer_value(&mut self, len: usize) -> Result<i32> {
        if len == 0 {
            return Err(self.fail(DecodeErrorKind::ZeroLengthInteger));
        }
        let bytes = self.read_bytes(len)?;

        // Tolerate non-minimal forms by skipping redundant sign bytes
        let mut significant = &bytes[..];
        while significant.len() > 1
            && ((significant[0] == 0x00 && significant[1] & 0x80 == 0)
                || (significant[0] == 0xFF && significant[1] & 0x80 != 0))
        {
            significant = &significant[1..];
        }
        if significant.len() > 4 {
            return Err(self.fail(DecodeErrorKind::IntegerTooLong { length: len }));
        }

        let mut value: i32 = if significant[0] & 0x80 != 0 { -1 } else { 0 };
        for &byte in significant {
            value = (value << 8) | (byte as i32);
        }
        Ok(value)
    }

    /// Read an unsigned 32-bit integer with a specific application tag.
    pub fn read_unsigned32(&mut self, expected_tag: u8) -> Result<u32> {
        let len = self.expect_tag(expected_tag)?;
        self.read_unsigned32_value(len)
    }

    /// Read unsigned 32-bit content given the length.
    pub fn read_unsigned32_value(&mut self, len: usize) -> Result<u32> {
        if len == 0 {
            return Err(self.fail(DecodeErrorKind::ZeroLengthInteger));
        }
        let bytes = self.read_bytes(len)?;

        let mut significant = &bytes[..];
        while significant.len() > 1 && significant[0] == 0 {
            significant = &significant[1..];
        }
        // 4 content bytes at most once leading zeros are stripped
        if significant.len() > 4 {
            return Err(self.fail(DecodeErrorKind::IntegerTooLong { length: len }));
        }

        let mut value: u32 = 0;
        for &byte in significant {
            value = (value << 8) | (byte as u32);
        }
        Ok(value)
    }

    /// Read unsigned 64-bit content (Counter64) given the length.
    pub fn read_unsigned64_value(&mut self, len: usize) -> Result<u64> {
        if len == 0 {
            return Err(self.fail(DecodeErrorKind::ZeroLengthInteger));
        }
        let bytes = self.read_bytes(len)?;

        let mut significant = &bytes[..];
        while significant.len() > 1 && significant[0] == 0 {
            significant = &significant[1..];
        }
        if significant.len() > 8 {
            return Err(self.fail(DecodeErrorKind::IntegerTooLong { length: len }));
        }

        let mut value: u64 = 0;
        for &byte in significant {
            value = (value << 8) | (byte as u64);
        }
        Ok(value)
    }

    /// Read an OCTET STRING.
    pub fn read_octet_string(&mut self) -> Result<Bytes> {
        let len = self.expect_tag(tag::universal::OCTET_STRING)?;
        self.read_bytes(len)
    }

    /// Read a NULL.
    pub fn read_null(&mut self) -> Result<()> {
        let len = self.expect_tag(tag::universal::NULL)?;
        if len != 0 {
            return Err(self.fail(DecodeErrorKind::InvalidNull));
        }
        Ok(())
    }

    /// Read an OBJECT IDENTIFIER.
    pub fn read_oid(&mut self) -> Result<Oid> {
        let len = self.expect_tag(tag::universal::OBJECT_IDENTIFIER)?;
        self.read_oid_value(len)
    }

    /// Read OID content given a pre-read length.
    pub fn read_oid_value(&mut self, len: usize) -> Result<Oid> {
        let start = self.offset();
        let bytes = self.read_bytes(len)?;
        Oid::from_ber_at(&bytes, start)
    }

    /// Read an IP address.
    pub fn read_ip_address(&mut self) -> Result<[u8; 4]> {
        let len = self.expect_tag(tag::application::IP_ADDRESS)?;
        if len != 4 {
            return Err(self.fail(DecodeErrorKind::InvalidIpAddressLength { length: len }));
        }
        let bytes = self.read_bytes(4)?;
        Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Read a SEQUENCE, returning a decoder for its contents.
    pub fn read_sequence(&mut self) -> Result<Decoder> {
        self.read_constructed(tag::universal::SEQUENCE)
    }

    /// Read a constructed element with a specific tag, returning a decoder
    /// for its contents.
    pub fn read_constructed(&mut self, expected_tag: u8) -> Result<Decoder> {
        let len = self.expect_tag(expected_tag)?;
        self.sub_decoder(len)
    }

    /// Create a sub-decoder over the next `len` bytes.
    pub fn sub_decoder(&mut self, len: usize) -> Result<Decoder> {
        if self.depth >= MAX_DEPTH {
            return Err(self.fail(DecodeErrorKind::NestingTooDeep { max: MAX_DEPTH }));
        }
        let base = self.offset();
        let content = self.read_bytes(len)?;
        Ok(Decoder {
            data: content,
            offset: 0,
            base,
            depth: self.depth + 1,
        })
    }
}
