//! SNMP message framing (v1/v2c).
//!
//! V1 and v2c messages share the same structure:
//! `SEQUENCE { version INTEGER, community OCTET STRING, pdu }`.
//! The only difference is the version number (0 for v1, 1 for v2c).

use crate::ber::{Decoder, EncodeBuf};
use crate::error::{
    DecodeErrorKind, Error, Result, StrictErrorKind, UnsupportedKind,
};
use crate::pdu::Pdu;
use crate::value::Value;
use crate::version::Version;
use bytes::Bytes;

/// Maximum SNMP message size: the practical UDP payload ceiling
/// (65,535 minus IP and UDP headers).
///
/// Both directions enforce it - decode rejects larger input before
/// parsing, encode refuses to produce a datagram the transport cannot
/// send whole.
pub const MAX_MESSAGE_SIZE: usize = 65_507;

/// How much of RFC-level version policy decoding enforces.
///
/// The default everywhere is [`Permissive`](Strictness::Permissive),
/// matching how net-snmp and most deployed agents behave: structural
/// BER violations are always errors, but version-inappropriate error
/// codes and value types are preserved for the caller to judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Preserve whatever the agent declared (default).
    #[default]
    Permissive,
    /// Additionally reject v2c-only error-status codes, exception
    /// markers, and Counter64 under v1, and any error-status outside
    /// the defined 0..=18 set.
    Strict,
}

/// SNMP message: version, community, and one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// SNMP version (V1 or V2c).
    pub version: Version,
    /// Community string. A coarse authentication token; the codec
    /// carries it without interpreting it.
    pub community: Bytes,
    /// The operation.
    pub pdu: Pdu,
}

impl Message {
    /// Create a new message.
    pub fn new(version: Version, community: impl Into<Bytes>, pdu: Pdu) -> Self {
        Self {
            version,
            community: community.into(),
            pdu,
        }
    }

    /// Create a v1 message.
    pub fn v1(community: impl Into<Bytes>, pdu: Pdu) -> Self {
        Self::new(Version::V1, community, pdu)
    }

    /// Create a v2c message.
    pub fn v2c(community: impl Into<Bytes>, pdu: Pdu) -> Self {
        Self::new(Version::V2c, community, pdu)
    }

    /// Encode to canonical BER.
    ///
    /// Fails with [`Error::UnsupportedOperation`] for a GETBULK under v1
    /// (a v1 agent cannot parse the PDU, so no bytes are produced), and
    /// with [`Error::MessageTooLarge`] if the result would not fit one
    /// UDP datagram.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_wire::{Message, Pdu, oid};
    ///
    /// let msg = Message::v2c(
    ///     b"public".as_slice(),
    ///     Pdu::get_request(1, &[oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)]),
    /// );
    /// let wire = msg.encode().unwrap();
    /// assert_eq!(Message::decode(wire).unwrap(), msg);
    /// ```
    pub fn encode(&self) -> Result<Bytes> {
        if self.version == Version::V1
            && matches!(self.pdu, Pdu::GetBulkRequest { .. })
        {
            return Err(Error::UnsupportedOperation {
                kind: UnsupportedKind::GetBulkRequiresV2c,
            });
        }

        let mut buf = EncodeBuf::new();
        buf.push_sequence(|buf| {
            self.pdu.encode(buf);
            buf.push_octet_string(&self.community);
            buf.push_integer(self.version.as_i32());
        });

        if buf.len() > MAX_MESSAGE_SIZE {
            return Err(Error::MessageTooLarge {
                size: buf.len(),
                max: MAX_MESSAGE_SIZE,
            });
        }
        Ok(buf.finish())
    }

    /// Decode from BER, permissively (see [`Strictness`]).
    ///
    /// Either the whole datagram decodes or a structured error is
    /// returned; no partially-decoded message escapes.
    pub fn decode(data: Bytes) -> Result<Self> {
        Self::decode_with(data, Strictness::Permissive)
    }

    /// Decode from BER under an explicit strictness policy.
    pub fn decode_with(data: Bytes, strictness: Strictness) -> Result<Self> {
        if data.len() > MAX_MESSAGE_SIZE {
            return Err(Error::MessageTooLarge {
                size: data.len(),
                max: MAX_MESSAGE_SIZE,
            });
        }

        let mut decoder = Decoder::new(data);
        let mut seq = decoder.read_sequence()?;
        // The outer SEQUENCE must span the whole datagram
        decoder.expect_end()?;

        let version_offset = seq.offset();
        let version_num = seq.read_integer()?;
        let version = Version::from_i32(version_num).ok_or_else(|| {
            Error::decode(version_offset, DecodeErrorKind::UnknownVersion(version_num))
        })?;

        let community = seq.read_octet_string()?;
        let pdu = Pdu::decode(&mut seq)?;
        seq.expect_end()?;

        let msg = Message {
            version,
            community,
            pdu,
        };
        if strictness == Strictness::Strict {
            msg.check_strict()?;
        }
        Ok(msg)
    }

    /// The version-policy checks [`Strictness::Strict`] adds on top of
    /// structural decoding.
    fn check_strict(&self) -> Result<()> {
        if self.version == Version::V1
            && matches!(self.pdu, Pdu::GetBulkRequest { .. })
        {
            return Err(Error::UnsupportedOperation {
                kind: UnsupportedKind::GetBulkRequiresV2c,
            });
        }

        if let Pdu::Response { error_status, .. } = self.pdu {
            if !(0..=18).contains(&error_status) {
                return Err(Error::Strict {
                    kind: StrictErrorKind::ErrorStatusOutOfRange {
                        status: error_status,
                    },
                });
            }
            if self.version == Version::V1 && error_status > 5 {
                return Err(Error::Strict {
                    kind: StrictErrorKind::ErrorStatusRequiresV2c {
                        status: error_status,
                    },
                });
            }
        }

        if self.version == Version::V1 {
            for vb in self.pdu.varbinds() {
                match vb.value {
                    Value::Counter64(_) => {
                        return Err(Error::Strict {
                            kind: StrictErrorKind::Counter64RequiresV2c,
                        });
                    }
                    Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView => {
                        return Err(Error::Strict {
                            kind: StrictErrorKind::ExceptionRequiresV2c,
                        });
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}
