//! BER encoding.
//!
//! Uses a reverse buffer: content is written back-to-front, so every
//! length prefix is computed from already-emitted content and is exact
//! before it is written. No second pass patches lengths up afterwards.

use super::length::encode_length;
use super::tag;
use bytes::Bytes;

/// Buffer for BER encoding that writes backwards.
///
/// Elements are pushed innermost-first: content, then length, then tag.
/// [`finish`](Self::finish) reverses the buffer into wire order.
pub struct EncodeBuf {
    buf: Vec<u8>,
}

impl EncodeBuf {
    /// Create a new encode buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    /// Create a new encode buffer with specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Push multiple bytes (prepends to front).
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend(bytes.iter().rev());
    }

    /// Push a BER length encoding.
    pub fn push_length(&mut self, len: usize) {
        let (bytes, count) = encode_length(len);
        // encode_length returns bytes already reversed for prepending
        for byte in bytes.iter().take(count) {
            self.buf.push(*byte);
        }
    }

    /// Push a BER tag.
    pub fn push_tag(&mut self, tag: u8) {
        self.buf.push(tag);
    }

    /// Get the current length of encoded data.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Encode a constructed type (SEQUENCE, PDU).
    ///
    /// Calls the closure to encode contents, then wraps with length and tag.
    /// Contents must be pushed in reverse field order.
    pub fn push_constructed<F>(&mut self, tag: u8, f: F)
    where
        F: FnOnce(&mut Self),
    {
        let start_len = self.len();
        f(self);
        let content_len = self.len() - start_len;
        self.push_length(content_len);
        self.push_tag(tag);
    }

    /// Encode a SEQUENCE.
    pub fn push_sequence<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.push_constructed(tag::universal::SEQUENCE, f);
    }

    /// Encode an INTEGER.
    pub fn push_integer(&mut self, value: i32) {
        let (arr, len) = encode_integer_stack(value);
        // Valid bytes are at the end of the array
        self.push_bytes(&arr[4 - len..]);
        self.push_length(len);
        self.push_tag(tag::universal::INTEGER);
    }

    /// Encode a 64-bit unsigned integer (Counter64).
    pub fn push_unsigned64(&mut self, value: u64) {
        let (arr, len) = encode_unsigned64_stack(value);
        self.push_bytes(&arr[9 - len..]);
        self.push_length(len);
        self.push_tag(tag::application::COUNTER64);
    }

    /// Encode an unsigned 32-bit integer with a specific application tag.
    pub fn push_unsigned32(&mut self, tag: u8, value: u32) {
        let (arr, len) = encode_unsigned32_stack(value);
        self.push_bytes(&arr[5 - len..]);
        self.push_length(len);
        self.push_tag(tag);
    }

    /// Encode an OCTET STRING.
    pub fn push_octet_string(&mut self, data: &[u8]) {
        self.push_bytes(data);
        self.push_length(data.len());
        self.push_tag(tag::universal::OCTET_STRING);
    }

    /// Encode a NULL.
    pub fn push_null(&mut self) {
        self.push_length(0);
        self.push_tag(tag::universal::NULL);
    }

    /// Encode an OBJECT IDENTIFIER.
    pub fn push_oid(&mut self, oid: &crate::oid::Oid) {
        let ber = oid.to_ber_smallvec();
        self.push_bytes(&ber);
        self.push_length(ber.len());
        self.push_tag(tag::universal::OBJECT_IDENTIFIER);
    }

    /// Encode an IP address.
    pub fn push_ip_address(&mut self, addr: [u8; 4]) {
        self.push_bytes(&addr);
        self.push_length(4);
        self.push_tag(tag::application::IP_ADDRESS);
    }

    /// Finalize and return the encoded bytes.
    pub fn finish(mut self) -> Bytes {
        self.buf.reverse();
        Bytes::from(self.buf)
    }

    /// Finalize and return as `Vec<u8>`.
    pub fn finish_vec(mut self) -> Vec<u8> {
        self.buf.reverse();
        self.buf
    }
}

impl Default for EncodeBuf {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a signed 32-bit integer in minimal two's-complement form.
///
/// Returns a stack-allocated array and the number of valid bytes; the
/// valid bytes are at the END of the array (reverse-buffer layout).
#[inline]
fn encode_integer_stack(value: i32) -> ([u8; 4], usize) {
    let bytes = value.to_be_bytes();

    // Find first significant byte
    let mut start = 0;
    if value >= 0 {
        // Skip leading 0x00 bytes, keeping one where needed for the sign bit
        while start < 3 && bytes[start] == 0 && bytes[start + 1] & 0x80 == 0 {
            start += 1;
        }
    } else {
        // Skip leading 0xFF bytes, keeping one where needed for the sign bit
        while start < 3 && bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0 {
            start += 1;
        }
    }

    (bytes, 4 - start)
}

/// Encode an unsigned 32-bit integer in minimal form.
///
/// A leading 0x00 is added when the top bit is set, so the value is not
/// read back as negative.
#[inline]
fn encode_unsigned32_stack(value: u32) -> ([u8; 5], usize) {
    if value == 0 {
        return ([0, 0, 0, 0, 0], 1);
    }

    let bytes = value.to_be_bytes();
    let mut start = 0;

    while start < 3 && bytes[start] == 0 {
        start += 1;
    }

    let mut result = [0u8; 5];
    result[1..].copy_from_slice(&bytes);
    if bytes[start] & 0x80 != 0 {
        (result, 5 - start)
    } else {
        (result, 4 - start)
    }
}

/// Encode an unsigned 64-bit integer in minimal form.
#[inline]
fn encode_unsigned64_stack(value: u64) -> ([u8; 9], usize) {
    if value == 0 {
        return ([0; 9], 1);
    }

    let bytes = value.to_be_bytes();
    let mut start = 0;

    while start < 7 && bytes[start] == 0 {
        start += 1;
    }

    let mut result = [0u8; 9];
    result[1..].copy_from_slice(&bytes);
    if bytes[start] & 0x80 != 0 {
        (result, 9 - start)
    } else {
        (result, 8 - start)
    }
}
