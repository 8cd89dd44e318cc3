//! SNMP value types.
//!
//! [`Value`] is the closed union of everything a varbind can carry,
//! including the v2c exception markers. Every encode/decode path matches
//! exhaustively; there is no catch-all variant, so an unrecognized value
//! tag is a decode error rather than a silently preserved blob.

use crate::ber::{Decoder, EncodeBuf, tag};
use crate::error::{DecodeErrorKind, Error, Result};
use crate::oid::Oid;
use bytes::Bytes;

/// SNMP value.
#[derive(Debug, Clone)]
pub enum Value {
    /// INTEGER (ASN.1 primitive, signed 32-bit)
    Integer(i32),

    /// OCTET STRING (arbitrary bytes)
    OctetString(Bytes),

    /// NULL - the request placeholder value
    Null,

    /// OBJECT IDENTIFIER
    ObjectIdentifier(Oid),

    /// IpAddress (4 bytes, big-endian)
    IpAddress([u8; 4]),

    /// Counter32 (unsigned 32-bit, wrapping)
    Counter32(u32),

    /// Unsigned32 (RFC 2578; shares tag 0x42 with Gauge32).
    ///
    /// The wire cannot distinguish Unsigned32 from Gauge32, so decoding
    /// always yields [`Value::Gauge32`]; equality treats the two as the
    /// same value.
    Unsigned32(u32),

    /// Gauge32 (unsigned 32-bit, non-wrapping)
    Gauge32(u32),

    /// TimeTicks (hundredths of a second)
    TimeTicks(u32),

    /// Opaque (legacy, arbitrary bytes)
    Opaque(Bytes),

    /// Counter64 (unsigned 64-bit, wrapping). SNMPv2c only.
    Counter64(u64),

    /// noSuchObject exception - the OID names no object the agent knows.
    /// Only meaningful inside a v2c Response.
    NoSuchObject,

    /// noSuchInstance exception - the object exists but the instance does
    /// not. Only meaningful inside a v2c Response.
    NoSuchInstance,

    /// endOfMibView exception - a walk ran off the end of the MIB.
    /// Only meaningful inside a v2c Response.
    EndOfMibView,
}

/// The encodable value kinds.
///
/// This is the type vocabulary for callers constructing values from
/// untyped input; the exception markers are not listed because they are
/// response-only markers, not a kind a request can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Unsigned32,
    Counter32,
    Gauge32,
    TimeTicks,
    Counter64,
    OctetString,
    Null,
    ObjectIdentifier,
    IpAddress,
    Opaque,
}

impl ValueKind {
    /// The BER tag this kind encodes with.
    pub const fn tag(self) -> u8 {
        match self {
            Self::Integer => tag::universal::INTEGER,
            Self::Unsigned32 | Self::Gauge32 => tag::application::GAUGE32,
            Self::Counter32 => tag::application::COUNTER32,
            Self::TimeTicks => tag::application::TIMETICKS,
            Self::Counter64 => tag::application::COUNTER64,
            Self::OctetString => tag::universal::OCTET_STRING,
            Self::Null => tag::universal::NULL,
            Self::ObjectIdentifier => tag::universal::OBJECT_IDENTIFIER,
            Self::IpAddress => tag::application::IP_ADDRESS,
            Self::Opaque => tag::application::OPAQUE,
        }
    }

    /// The kind a BER tag selects, or `None` for an unknown tag.
    ///
    /// Tag 0x42 maps to [`ValueKind::Gauge32`]; Unsigned32 is
    /// indistinguishable on the wire.
    pub const fn from_tag(tag_byte: u8) -> Option<Self> {
        match tag_byte {
            tag::universal::INTEGER => Some(Self::Integer),
            tag::universal::OCTET_STRING => Some(Self::OctetString),
            tag::universal::NULL => Some(Self::Null),
            tag::universal::OBJECT_IDENTIFIER => Some(Self::ObjectIdentifier),
            tag::application::IP_ADDRESS => Some(Self::IpAddress),
            tag::application::COUNTER32 => Some(Self::Counter32),
            tag::application::GAUGE32 => Some(Self::Gauge32),
            tag::application::TIMETICKS => Some(Self::TimeTicks),
            tag::application::OPAQUE => Some(Self::Opaque),
            tag::application::COUNTER64 => Some(Self::Counter64),
            _ => None,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "Integer",
            Self::Unsigned32 => "Unsigned32",
            Self::Counter32 => "Counter32",
            Self::Gauge32 => "Gauge32",
            Self::TimeTicks => "TimeTicks",
            Self::Counter64 => "Counter64",
            Self::OctetString => "OctetString",
            Self::Null => "Null",
            Self::ObjectIdentifier => "ObjectIdentifier",
            Self::IpAddress => "IpAddress",
            Self::Opaque => "Opaque",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Build an `Integer`, checking the `[-2^31, 2^31-1]` range.
    pub fn integer(v: i64) -> Result<Self> {
        if v < i64::from(i32::MIN) || v > i64::from(i32::MAX) {
            return Err(range_error(ValueKind::Integer, v, i64::from(i32::MIN), i32::MAX as u64));
        }
        Ok(Value::Integer(v as i32))
    }

    /// Build an `Unsigned32`, checking the `[0, 2^32-1]` range.
    pub fn unsigned32(v: i64) -> Result<Self> {
        Ok(Value::Unsigned32(check_u32(ValueKind::Unsigned32, v)?))
    }

    /// Build a `Counter32`, checking the `[0, 2^32-1]` range.
    pub fn counter32(v: i64) -> Result<Self> {
        Ok(Value::Counter32(check_u32(ValueKind::Counter32, v)?))
    }

    /// Build a `Gauge32`, checking the `[0, 2^32-1]` range.
    pub fn gauge32(v: i64) -> Result<Self> {
        Ok(Value::Gauge32(check_u32(ValueKind::Gauge32, v)?))
    }

    /// Build a `TimeTicks`, checking the `[0, 2^32-1]` range.
    pub fn timeticks(v: i64) -> Result<Self> {
        Ok(Value::TimeTicks(check_u32(ValueKind::TimeTicks, v)?))
    }

    /// Build a `Counter64`. Negative input is out of range; use
    /// `From<u64>` for the infallible path.
    pub fn counter64(v: i64) -> Result<Self> {
        if v < 0 {
            return Err(range_error(ValueKind::Counter64, v, 0, u64::MAX));
        }
        Ok(Value::Counter64(v as u64))
    }

    /// Build an `IpAddress` from dotted-quad text.
    ///
    /// Malformed text fails with [`Error::InvalidAddress`]; the input is
    /// not echoed back.
    pub fn ip_from_str(s: &str) -> Result<Self> {
        s.parse::<std::net::Ipv4Addr>()
            .map(|addr| Value::IpAddress(addr.octets()))
            .map_err(|_| Error::InvalidAddress)
    }

    /// The kind of this value, or `None` for the exception markers
    /// (which are response markers, not encodable kinds).
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::Integer(_) => Some(ValueKind::Integer),
            Value::OctetString(_) => Some(ValueKind::OctetString),
            Value::Null => Some(ValueKind::Null),
            Value::ObjectIdentifier(_) => Some(ValueKind::ObjectIdentifier),
            Value::IpAddress(_) => Some(ValueKind::IpAddress),
            Value::Counter32(_) => Some(ValueKind::Counter32),
            Value::Unsigned32(_) => Some(ValueKind::Unsigned32),
            Value::Gauge32(_) => Some(ValueKind::Gauge32),
            Value::TimeTicks(_) => Some(ValueKind::TimeTicks),
            Value::Opaque(_) => Some(ValueKind::Opaque),
            Value::Counter64(_) => Some(ValueKind::Counter64),
            Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView => None,
        }
    }

    /// Try to get as i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u32 (any of the unsigned 32-bit kinds, or a
    /// non-negative Integer).
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Counter32(v) | Value::Unsigned32(v) | Value::Gauge32(v) | Value::TimeTicks(v) => {
                Some(*v)
            }
            Value::Integer(v) if *v >= 0 => Some(*v as u32),
            _ => None,
        }
    }

    /// Try to get as u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Counter64(v) => Some(*v),
            _ => self.as_u32().map(u64::from),
        }
    }

    /// Try to get as bytes (OctetString or Opaque).
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::OctetString(v) | Value::Opaque(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as UTF-8 string.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Try to get as OID.
    pub fn as_oid(&self) -> Option<&Oid> {
        match self {
            Value::ObjectIdentifier(oid) => Some(oid),
            _ => None,
        }
    }

    /// Try to get as IP address.
    pub fn as_ip(&self) -> Option<std::net::Ipv4Addr> {
        match self {
            Value::IpAddress(bytes) => Some(std::net::Ipv4Addr::from(*bytes)),
            _ => None,
        }
    }

    /// Check if this is a v2c exception marker.
    pub fn is_exception(&self) -> bool {
        matches!(
            self,
            Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView
        )
    }

    /// Encode to BER.
    pub fn encode(&self, buf: &mut EncodeBuf) {
        match self {
            Value::Integer(v) => buf.push_integer(*v),
            Value::OctetString(data) => buf.push_octet_string(data),
            Value::Null => buf.push_null(),
            Value::ObjectIdentifier(oid) => buf.push_oid(oid),
            Value::IpAddress(addr) => buf.push_ip_address(*addr),
            Value::Counter32(v) => buf.push_unsigned32(tag::application::COUNTER32, *v),
            Value::Unsigned32(v) | Value::Gauge32(v) => {
                buf.push_unsigned32(tag::application::GAUGE32, *v)
            }
            Value::TimeTicks(v) => buf.push_unsigned32(tag::application::TIMETICKS, *v),
            Value::Opaque(data) => {
                buf.push_bytes(data);
                buf.push_length(data.len());
                buf.push_tag(tag::application::OPAQUE);
            }
            Value::Counter64(v) => buf.push_unsigned64(*v),
            Value::NoSuchObject => {
                buf.push_length(0);
                buf.push_tag(tag::context::NO_SUCH_OBJECT);
            }
            Value::NoSuchInstance => {
                buf.push_length(0);
                buf.push_tag(tag::context::NO_SUCH_INSTANCE);
            }
            Value::EndOfMibView => {
                buf.push_length(0);
                buf.push_tag(tag::context::END_OF_MIB_VIEW);
            }
        }
    }

    /// Decode from BER.
    pub fn decode(decoder: &mut Decoder) -> Result<Self> {
        let tag_offset = decoder.offset();
        let tag = decoder.read_tag()?;
        let len = decoder.read_length()?;

        match tag {
            tag::universal::INTEGER => Ok(Value::Integer(decoder.read_integer_value(len)?)),
            tag::universal::OCTET_STRING => Ok(Value::OctetString(decoder.read_bytes(len)?)),
            tag::universal::NULL => {
                if len != 0 {
                    return Err(Error::decode(decoder.offset(), DecodeErrorKind::InvalidNull));
                }
                Ok(Value::Null)
            }
            tag::universal::OBJECT_IDENTIFIER => {
                Ok(Value::ObjectIdentifier(decoder.read_oid_value(len)?))
            }
            tag::application::IP_ADDRESS => {
                if len != 4 {
                    return Err(Error::decode(
                        decoder.offset(),
                        DecodeErrorKind::InvalidIpAddressLength { length: len },
                    ));
                }
                let data = decoder.read_bytes(4)?;
                Ok(Value::IpAddress([data[0], data[1], data[2], data[3]]))
            }
            tag::application::COUNTER32 => {
                Ok(Value::Counter32(decoder.read_unsigned32_value(len)?))
            }
            tag::application::GAUGE32 => Ok(Value::Gauge32(decoder.read_unsigned32_value(len)?)),
            tag::application::TIMETICKS => {
                Ok(Value::TimeTicks(decoder.read_unsigned32_value(len)?))
            }
            tag::application::OPAQUE => Ok(Value::Opaque(decoder.read_bytes(len)?)),
            tag::application::COUNTER64 => {
                Ok(Value::Counter64(decoder.read_unsigned64_value(len)?))
            }
            tag::context::NO_SUCH_OBJECT => {
                let _ = decoder.read_bytes(len)?;
                Ok(Value::NoSuchObject)
            }
            tag::context::NO_SUCH_INSTANCE => {
                let _ = decoder.read_bytes(len)?;
                Ok(Value::NoSuchInstance)
            }
            tag::context::END_OF_MIB_VIEW => {
                let _ = decoder.read_bytes(len)?;
                Ok(Value::EndOfMibView)
            }
            // Constructed OCTET STRING is documented but unparsed in
            // net-snmp; reject rather than guess.
            tag::universal::OCTET_STRING_CONSTRUCTED => Err(Error::decode(
                tag_offset,
                DecodeErrorKind::ConstructedOctetString,
            )),
            _ => Err(Error::decode(
                tag_offset,
                DecodeErrorKind::UnknownValueType(tag),
            )),
        }
    }
}

fn check_u32(kind: ValueKind, v: i64) -> Result<u32> {
    if v < 0 || v > i64::from(u32::MAX) {
        return Err(range_error(kind, v, 0, u64::from(u32::MAX)));
    }
    Ok(v as u32)
}

fn range_error(kind: ValueKind, value: i64, min: i64, max: u64) -> Error {
    Error::Range {
        kind,
        value,
        min,
        max,
    }
}

/// Equality, with Unsigned32 and Gauge32 comparing as the same kind.
///
/// RFC 2578 defines both as application tag 0x42; an encoded Unsigned32
/// always decodes as Gauge32, and treating them as equal keeps
/// `decode(encode(m)) == m` true for every message.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::OctetString(a), Value::OctetString(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::ObjectIdentifier(a), Value::ObjectIdentifier(b)) => a == b,
            (Value::IpAddress(a), Value::IpAddress(b)) => a == b,
            (Value::Counter32(a), Value::Counter32(b)) => a == b,
            (
                Value::Unsigned32(a) | Value::Gauge32(a),
                Value::Unsigned32(b) | Value::Gauge32(b),
            ) => a == b,
            (Value::TimeTicks(a), Value::TimeTicks(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            (Value::Counter64(a), Value::Counter64(b)) => a == b,
            (Value::NoSuchObject, Value::NoSuchObject) => true,
            (Value::NoSuchInstance, Value::NoSuchInstance) => true,
            (Value::EndOfMibView, Value::EndOfMibView) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::OctetString(data) => {
                if let Ok(s) = std::str::from_utf8(data) {
                    write!(f, "{}", s)
                } else {
                    write!(f, "0x")?;
                    for b in data.iter() {
                        write!(f, "{:02x}", b)?;
                    }
                    Ok(())
                }
            }
            Value::Null => write!(f, "NULL"),
            Value::ObjectIdentifier(oid) => write!(f, "{}", oid),
            Value::IpAddress(addr) => {
                write!(f, "{}.{}.{}.{}", addr[0], addr[1], addr[2], addr[3])
            }
            Value::Counter32(v) | Value::Unsigned32(v) | Value::Gauge32(v) => write!(f, "{}", v),
            Value::TimeTicks(v) => {
                let secs = v / 100;
                let days = secs / 86400;
                let hours = (secs % 86400) / 3600;
                let mins = (secs % 3600) / 60;
                let s = secs % 60;
                write!(f, "{}d {}h {}m {}s", days, hours, mins, s)
            }
            Value::Opaque(data) => {
                write!(f, "Opaque(0x")?;
                for b in data.iter() {
                    write!(f, "{:02x}", b)?;
                }
                write!(f, ")")
            }
            Value::Counter64(v) => write!(f, "{}", v),
            Value::NoSuchObject => write!(f, "noSuchObject"),
            Value::NoSuchInstance => write!(f, "noSuchInstance"),
            Value::EndOfMibView => write!(f, "endOfMibView"),
        }
    }
}

// Inference ladder for callers that do not name a kind: strings and byte
// sequences become OctetString, signed 32-bit integers stay Integer,
// unsigned input widens to Unsigned32 or Counter64, addresses and OIDs
// keep their structure.

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Unsigned32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Counter64(v)
    }
}

/// Width-based inference: negative stays `Integer`, values up to
/// `2^32 - 1` become `Unsigned32`, anything wider becomes `Counter64`.
impl From<i64> for Value {
    fn from(v: i64) -> Self {
        if v < 0 {
            // Saturate below i32::MIN; the checked constructor reports
            // range errors instead
            Value::Integer(v.max(i64::from(i32::MIN)) as i32)
        } else if v <= i64::from(u32::MAX) {
            Value::Unsigned32(v as u32)
        } else {
            Value::Counter64(v as u64)
        }
    }
}

/// RFC 2579 TruthValue: true(1), false(2).
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(if v { 1 } else { 2 })
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::OctetString(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::OctetString(Bytes::from(s))
    }
}

impl From<&[u8]> for Value {
    fn from(data: &[u8]) -> Self {
        Value::OctetString(Bytes::copy_from_slice(data))
    }
}

impl From<Bytes> for Value {
    fn from(data: Bytes) -> Self {
        Value::OctetString(data)
    }
}

impl From<Oid> for Value {
    fn from(oid: Oid) -> Self {
        Value::ObjectIdentifier(oid)
    }
}

impl From<&[u32]> for Value {
    fn from(arcs: &[u32]) -> Self {
        Value::ObjectIdentifier(Oid::from_slice(arcs))
    }
}

impl From<std::net::Ipv4Addr> for Value {
    fn from(addr: std::net::Ipv4Addr) -> Self {
        Value::IpAddress(addr.octets())
    }
}

impl From<[u8; 4]> for Value {
    fn from(addr: [u8; 4]) -> Self {
        Value::IpAddress(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(value: Value) -> Value {
        let mut buf = EncodeBuf::new();
        value.encode(&mut buf);
        let data = buf.finish();
        let mut decoder = Decoder::new(data);
        Value::decode(&mut decoder).unwrap()
    }

    #[test]
    fn test_integer_roundtrip() {
        for v in [0, 1, -1, 42, -42, 127, 128, -128, -129, i32::MIN, i32::MAX] {
            let value = Value::Integer(v);
            assert_eq!(roundtrip(value.clone()), value);
        }
    }

    #[test]
    fn test_octet_string_roundtrip() {
        for data in [
            Bytes::new(),
            Bytes::from_static(b"hello world"),
            Bytes::from_static(&[0x00, 0xFF, 0x80, 0x7F]),
        ] {
            let value = Value::OctetString(data);
            assert_eq!(roundtrip(value.clone()), value);
        }
    }

    #[test]
    fn test_null_roundtrip() {
        assert_eq!(roundtrip(Value::Null), Value::Null);
    }

    #[test]
    fn test_oid_roundtrip() {
        let value = Value::ObjectIdentifier(crate::oid!(1, 3, 6, 1, 2, 1, 1, 1, 0));
        assert_eq!(roundtrip(value.clone()), value);
    }

    #[test]
    fn test_ip_address_roundtrip() {
        for addr in [[0, 0, 0, 0], [192, 168, 1, 1], [255, 255, 255, 255]] {
            let value = Value::IpAddress(addr);
            assert_eq!(roundtrip(value.clone()), value);
        }
    }

    #[test]
    fn test_unsigned_kinds_roundtrip() {
        for v in [0, 1, 127, 128, 999999, u32::MAX] {
            assert_eq!(roundtrip(Value::Counter32(v)), Value::Counter32(v));
            assert_eq!(roundtrip(Value::Gauge32(v)), Value::Gauge32(v));
            assert_eq!(roundtrip(Value::TimeTicks(v)), Value::TimeTicks(v));
        }
    }

    #[test]
    fn test_unsigned32_decodes_as_gauge32_but_compares_equal() {
        let encoded = {
            let mut buf = EncodeBuf::new();
            Value::Unsigned32(4294967295).encode(&mut buf);
            buf.finish()
        };
        let decoded = Value::decode(&mut Decoder::new(encoded)).unwrap();
        assert!(matches!(decoded, Value::Gauge32(4294967295)));
        assert_eq!(decoded, Value::Unsigned32(4294967295));
    }

    #[test]
    fn test_counter64_roundtrip() {
        for v in [0, 1, 255, 123456789012345, u64::MAX] {
            let value = Value::Counter64(v);
            assert_eq!(roundtrip(value.clone()), value);
        }
    }

    #[test]
    fn test_opaque_roundtrip() {
        let value = Value::Opaque(Bytes::from_static(&[0xDE, 0xAD, 0xBE, 0xEF]));
        assert_eq!(roundtrip(value.clone()), value);
    }

    #[test]
    fn test_exception_roundtrip() {
        for value in [Value::NoSuchObject, Value::NoSuchInstance, Value::EndOfMibView] {
            assert_eq!(roundtrip(value.clone()), value);
            assert!(value.is_exception());
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        // 0x45 is application class but not an SNMP type
        let data = Bytes::from_static(&[0x45, 0x03, 0x01, 0x02, 0x03]);
        let err = Value::decode(&mut Decoder::new(data)).unwrap_err();
        assert_eq!(
            err,
            Error::decode(0, DecodeErrorKind::UnknownValueType(0x45))
        );
    }

    #[test]
    fn test_reject_constructed_octet_string() {
        let data = Bytes::from_static(&[0x24, 0x03, 0x04, 0x01, 0x41]);
        let err = Value::decode(&mut Decoder::new(data)).unwrap_err();
        assert_eq!(
            err,
            Error::decode(0, DecodeErrorKind::ConstructedOctetString)
        );
    }

    #[test]
    fn test_range_checked_constructors() {
        assert_eq!(Value::unsigned32(0).unwrap(), Value::Unsigned32(0));
        assert_eq!(
            Value::unsigned32(4294967295).unwrap(),
            Value::Unsigned32(u32::MAX)
        );
        assert_eq!(
            Value::unsigned32(4294967296).unwrap_err(),
            Error::Range {
                kind: ValueKind::Unsigned32,
                value: 4294967296,
                min: 0,
                max: u64::from(u32::MAX),
            }
        );
        assert_eq!(
            Value::unsigned32(-1).unwrap_err(),
            Error::Range {
                kind: ValueKind::Unsigned32,
                value: -1,
                min: 0,
                max: u64::from(u32::MAX),
            }
        );

        assert!(Value::integer(i64::from(i32::MAX)).is_ok());
        assert!(Value::integer(i64::from(i32::MIN)).is_ok());
        assert!(Value::integer(i64::from(i32::MAX) + 1).is_err());
        assert!(Value::integer(i64::from(i32::MIN) - 1).is_err());

        assert!(Value::counter32(u32::MAX as i64).is_ok());
        assert!(Value::counter32(u32::MAX as i64 + 1).is_err());
        assert!(Value::gauge32(-5).is_err());
        assert!(Value::timeticks(0).is_ok());

        assert_eq!(Value::counter64(0).unwrap(), Value::Counter64(0));
        assert!(Value::counter64(-1).is_err());
    }

    #[test]
    fn test_range_error_names_kind_and_bounds() {
        let err = Value::counter32(-1).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Counter32"), "got: {}", msg);
        assert!(msg.contains("0..=4294967295"), "got: {}", msg);
    }

    #[test]
    fn test_ip_from_str() {
        assert_eq!(
            Value::ip_from_str("192.168.1.1").unwrap(),
            Value::IpAddress([192, 168, 1, 1])
        );
        for bad in ["", "1.2.3", "1.2.3.4.5", "1.2.3.256", "a.b.c.d", "1.2.3.-4"] {
            assert_eq!(Value::ip_from_str(bad).unwrap_err(), Error::InvalidAddress);
        }
    }

    #[test]
    fn test_kind_tag_mapping() {
        for kind in [
            ValueKind::Integer,
            ValueKind::Counter32,
            ValueKind::Gauge32,
            ValueKind::TimeTicks,
            ValueKind::Counter64,
            ValueKind::OctetString,
            ValueKind::Null,
            ValueKind::ObjectIdentifier,
            ValueKind::IpAddress,
            ValueKind::Opaque,
        ] {
            assert_eq!(ValueKind::from_tag(kind.tag()), Some(kind));
        }
        // Unsigned32 shares Gauge32's tag
        assert_eq!(ValueKind::Unsigned32.tag(), 0x42);
        assert_eq!(ValueKind::from_tag(0x42), Some(ValueKind::Gauge32));
        assert_eq!(ValueKind::from_tag(0x45), None);
        assert_eq!(ValueKind::from_tag(0xA0), None);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::from(42i32).kind(), Some(ValueKind::Integer));
        assert_eq!(Value::from("x").kind(), Some(ValueKind::OctetString));
        assert_eq!(Value::Null.kind(), Some(ValueKind::Null));
        assert_eq!(Value::NoSuchObject.kind(), None);
        assert_eq!(Value::EndOfMibView.kind(), None);
    }

    #[test]
    fn test_inference_ladder() {
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(-7i64), Value::Integer(-7));
        assert_eq!(Value::from(42u32), Value::Unsigned32(42));
        assert_eq!(Value::from(42i64), Value::Unsigned32(42));
        assert_eq!(
            Value::from(i64::from(u32::MAX)),
            Value::Unsigned32(u32::MAX)
        );
        assert_eq!(
            Value::from(i64::from(u32::MAX) + 1),
            Value::Counter64(u64::from(u32::MAX) + 1)
        );
        assert_eq!(Value::from(10u64), Value::Counter64(10));
        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(Value::from(true), Value::Integer(1));
        assert_eq!(Value::from(false), Value::Integer(2));
        assert_eq!(
            Value::from(std::net::Ipv4Addr::new(10, 0, 0, 1)),
            Value::IpAddress([10, 0, 0, 1])
        );
        assert_eq!(
            Value::from(&[1u32, 3, 6, 1][..]),
            Value::ObjectIdentifier(crate::oid!(1, 3, 6, 1))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Integer(-42).to_string(), "-42");
        assert_eq!(
            Value::OctetString(Bytes::from_static(b"hello")).to_string(),
            "hello"
        );
        assert_eq!(
            Value::OctetString(Bytes::from_static(&[0xFF, 0xFE])).to_string(),
            "0xfffe"
        );
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::IpAddress([192, 168, 1, 1]).to_string(), "192.168.1.1");
        assert_eq!(Value::TimeTicks(123456).to_string(), "0d 0h 20m 34s");
        assert_eq!(
            Value::Opaque(Bytes::from_static(&[0xBE, 0xEF])).to_string(),
            "Opaque(0xbeef)"
        );
        assert_eq!(Value::NoSuchObject.to_string(), "noSuchObject");
        assert_eq!(Value::EndOfMibView.to_string(), "endOfMibView");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Integer(42).as_i32(), Some(42));
        assert_eq!(Value::Counter32(100).as_i32(), None);
        assert_eq!(Value::Unsigned32(7).as_u32(), Some(7));
        assert_eq!(Value::Integer(-1).as_u32(), None);
        assert_eq!(Value::Counter64(100).as_u64(), Some(100));
        assert_eq!(Value::Gauge32(200).as_u64(), Some(200));
        assert_eq!(
            Value::IpAddress([10, 0, 0, 1]).as_ip(),
            Some(std::net::Ipv4Addr::new(10, 0, 0, 1))
        );
        let oid = crate::oid!(1, 3, 6);
        assert_eq!(Value::ObjectIdentifier(oid.clone()).as_oid(), Some(&oid));
    }
}
