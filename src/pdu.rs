//! SNMP Protocol Data Units (PDUs).
//!
//! [`Pdu`] is an exhaustive tagged union over the five community-version
//! operations. GETBULK carries its own `non_repeaters`/`max_repetitions`
//! fields instead of reusing the response error slots, so nothing
//! masquerades as something else.

use crate::ber::{Decoder, EncodeBuf, tag};
use crate::error::{DecodeErrorKind, Error, ErrorStatus, Result};
use crate::oid::Oid;
use crate::varbind::{VarBind, decode_varbind_list, encode_varbind_list};

/// PDU type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PduType {
    GetRequest = 0xA0,
    GetNextRequest = 0xA1,
    Response = 0xA2,
    SetRequest = 0xA3,
    GetBulkRequest = 0xA5,
}

impl PduType {
    /// Create from tag byte. Unlisted tags (including the trap family
    /// 0xA4/0xA6/0xA7/0xA8) return `None` and are rejected upstream.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0xA0 => Some(Self::GetRequest),
            0xA1 => Some(Self::GetNextRequest),
            0xA2 => Some(Self::Response),
            0xA3 => Some(Self::SetRequest),
            0xA5 => Some(Self::GetBulkRequest),
            _ => None,
        }
    }

    /// Get the tag byte.
    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for PduType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GetRequest => write!(f, "GetRequest"),
            Self::GetNextRequest => write!(f, "GetNextRequest"),
            Self::Response => write!(f, "Response"),
            Self::SetRequest => write!(f, "SetRequest"),
            Self::GetBulkRequest => write!(f, "GetBulkRequest"),
        }
    }
}

/// SNMP operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pdu {
    /// GET request.
    GetRequest {
        request_id: i32,
        varbinds: Vec<VarBind>,
    },
    /// GETNEXT request.
    GetNextRequest {
        request_id: i32,
        varbinds: Vec<VarBind>,
    },
    /// Response to any request.
    Response {
        request_id: i32,
        /// Raw error-status as declared by the agent; see
        /// [`ErrorStatus`] for interpretation.
        error_status: i32,
        /// 1-based index of the offending varbind; 0 means none.
        error_index: i32,
        varbinds: Vec<VarBind>,
    },
    /// SET request.
    SetRequest {
        request_id: i32,
        varbinds: Vec<VarBind>,
    },
    /// GETBULK request (v2c only).
    GetBulkRequest {
        request_id: i32,
        non_repeaters: i32,
        max_repetitions: i32,
        varbinds: Vec<VarBind>,
    },
}

impl Pdu {
    /// Create a GET request with NULL placeholder values.
    pub fn get_request(request_id: i32, oids: &[Oid]) -> Self {
        Self::GetRequest {
            request_id,
            varbinds: oids.iter().map(|oid| VarBind::null(oid.clone())).collect(),
        }
    }

    /// Create a GETNEXT request with NULL placeholder values.
    pub fn get_next_request(request_id: i32, oids: &[Oid]) -> Self {
        Self::GetNextRequest {
            request_id,
            varbinds: oids.iter().map(|oid| VarBind::null(oid.clone())).collect(),
        }
    }

    /// Create a SET request.
    pub fn set_request(request_id: i32, varbinds: Vec<VarBind>) -> Self {
        Self::SetRequest {
            request_id,
            varbinds,
        }
    }

    /// Create a GETBULK request with NULL placeholder values.
    pub fn get_bulk_request(
        request_id: i32,
        non_repeaters: i32,
        max_repetitions: i32,
        oids: &[Oid],
    ) -> Self {
        Self::GetBulkRequest {
            request_id,
            non_repeaters,
            max_repetitions,
            varbinds: oids.iter().map(|oid| VarBind::null(oid.clone())).collect(),
        }
    }

    /// Create a response.
    pub fn response(
        request_id: i32,
        error_status: i32,
        error_index: i32,
        varbinds: Vec<VarBind>,
    ) -> Self {
        Self::Response {
            request_id,
            error_status,
            error_index,
            varbinds,
        }
    }

    /// The wire tag for this operation.
    pub fn pdu_type(&self) -> PduType {
        match self {
            Self::GetRequest { .. } => PduType::GetRequest,
            Self::GetNextRequest { .. } => PduType::GetNextRequest,
            Self::Response { .. } => PduType::Response,
            Self::SetRequest { .. } => PduType::SetRequest,
            Self::GetBulkRequest { .. } => PduType::GetBulkRequest,
        }
    }

    /// The request ID chosen by the requester and echoed by the responder.
    pub fn request_id(&self) -> i32 {
        match self {
            Self::GetRequest { request_id, .. }
            | Self::GetNextRequest { request_id, .. }
            | Self::Response { request_id, .. }
            | Self::SetRequest { request_id, .. }
            | Self::GetBulkRequest { request_id, .. } => *request_id,
        }
    }

    /// The variable bindings.
    pub fn varbinds(&self) -> &[VarBind] {
        match self {
            Self::GetRequest { varbinds, .. }
            | Self::GetNextRequest { varbinds, .. }
            | Self::Response { varbinds, .. }
            | Self::SetRequest { varbinds, .. }
            | Self::GetBulkRequest { varbinds, .. } => varbinds,
        }
    }

    /// Whether this is a response carrying a non-zero error status.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Response { error_status, .. } if *error_status != 0)
    }

    /// The response error status as an enum, if this is a response.
    pub fn error_status(&self) -> Option<ErrorStatus> {
        match self {
            Self::Response { error_status, .. } => Some(ErrorStatus::from_i32(*error_status)),
            _ => None,
        }
    }

    /// Encode to BER.
    pub fn encode(&self, buf: &mut EncodeBuf) {
        // Reverse buffer: fields are pushed last-first
        match self {
            Self::GetRequest {
                request_id,
                varbinds,
            }
            | Self::GetNextRequest {
                request_id,
                varbinds,
            }
            | Self::SetRequest {
                request_id,
                varbinds,
            } => {
                buf.push_constructed(self.pdu_type().tag(), |buf| {
                    encode_varbind_list(buf, varbinds);
                    buf.push_integer(0); // error-index
                    buf.push_integer(0); // error-status
                    buf.push_integer(*request_id);
                });
            }
            Self::Response {
                request_id,
                error_status,
                error_index,
                varbinds,
            } => {
                buf.push_constructed(tag::pdu::RESPONSE, |buf| {
                    encode_varbind_list(buf, varbinds);
                    buf.push_integer(*error_index);
                    buf.push_integer(*error_status);
                    buf.push_integer(*request_id);
                });
            }
            Self::GetBulkRequest {
                request_id,
                non_repeaters,
                max_repetitions,
                varbinds,
            } => {
                buf.push_constructed(tag::pdu::GET_BULK_REQUEST, |buf| {
                    encode_varbind_list(buf, varbinds);
                    buf.push_integer(*max_repetitions);
                    buf.push_integer(*non_repeaters);
                    buf.push_integer(*request_id);
                });
            }
        }
    }

    /// Decode from BER.
    pub fn decode(decoder: &mut Decoder) -> Result<Self> {
        let tag_offset = decoder.offset();
        let tag = decoder.read_tag()?;
        let pdu_type = PduType::from_tag(tag)
            .ok_or_else(|| Error::decode(tag_offset, DecodeErrorKind::UnknownPduType(tag)))?;

        let len = decoder.read_length()?;
        let mut pdu = decoder.sub_decoder(len)?;

        let request_id = pdu.read_integer()?;
        let decoded = match pdu_type {
            PduType::GetRequest | PduType::GetNextRequest | PduType::SetRequest => {
                // Requests carry error-status/error-index as zeros on the
                // wire; the integers are consumed but not surfaced
                let _error_status = pdu.read_integer()?;
                let _error_index = pdu.read_integer()?;
                let varbinds = decode_varbind_list(&mut pdu)?;
                match pdu_type {
                    PduType::GetRequest => Self::GetRequest {
                        request_id,
                        varbinds,
                    },
                    PduType::GetNextRequest => Self::GetNextRequest {
                        request_id,
                        varbinds,
                    },
                    _ => Self::SetRequest {
                        request_id,
                        varbinds,
                    },
                }
            }
            PduType::Response => {
                let error_status = pdu.read_integer()?;
                let error_index = pdu.read_integer()?;
                let varbinds = decode_varbind_list(&mut pdu)?;
                Self::Response {
                    request_id,
                    error_status,
                    error_index,
                    varbinds,
                }
            }
            PduType::GetBulkRequest => {
                let non_repeaters = pdu.read_integer()?;
                let max_repetitions = pdu.read_integer()?;
                let varbinds = decode_varbind_list(&mut pdu)?;
                Self::GetBulkRequest {
                    request_id,
                    non_repeaters,
                    max_repetitions,
                    varbinds,
                }
            }
        };

        pdu.expect_end()?;
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;
    use crate::value::Value;

    fn roundtrip(pdu: &Pdu) -> Pdu {
        let mut buf = EncodeBuf::new();
        pdu.encode(&mut buf);
        let bytes = buf.finish();

        let mut decoder = Decoder::new(bytes);
        Pdu::decode(&mut decoder).unwrap()
    }

    #[test]
    fn test_get_request_roundtrip() {
        let pdu = Pdu::get_request(12345, &[oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)]);
        let decoded = roundtrip(&pdu);

        assert_eq!(decoded, pdu);
        assert_eq!(decoded.pdu_type(), PduType::GetRequest);
        assert_eq!(decoded.request_id(), 12345);
        assert_eq!(decoded.varbinds().len(), 1);
    }

    #[test]
    fn test_get_next_request_roundtrip() {
        let pdu = Pdu::get_next_request(7, &[oid!(1, 3, 6, 1, 2, 1, 1)]);
        assert_eq!(roundtrip(&pdu), pdu);
    }

    #[test]
    fn test_set_request_roundtrip() {
        let pdu = Pdu::set_request(
            99,
            vec![VarBind::new(
                oid!(1, 3, 6, 1, 2, 1, 1, 5, 0),
                Value::from("router1"),
            )],
        );
        assert_eq!(roundtrip(&pdu), pdu);
    }

    #[test]
    fn test_response_roundtrip() {
        let pdu = Pdu::response(
            12345,
            2, // noSuchName
            1,
            vec![VarBind::null(oid!(1, 3, 6, 1, 2, 1, 1, 1, 0))],
        );
        let decoded = roundtrip(&pdu);
        assert_eq!(decoded, pdu);
        assert!(decoded.is_error());
        assert_eq!(decoded.error_status(), Some(ErrorStatus::NoSuchName));
    }

    #[test]
    fn test_response_preserves_out_of_range_status() {
        let pdu = Pdu::response(1, 42, 0, vec![]);
        let decoded = roundtrip(&pdu);
        assert_eq!(decoded, pdu);
        assert_eq!(decoded.error_status(), Some(ErrorStatus::Unknown(42)));
    }

    #[test]
    fn test_getbulk_roundtrip() {
        let pdu = Pdu::get_bulk_request(12345, 0, 10, &[oid!(1, 3, 6, 1, 2, 1, 1)]);
        let decoded = roundtrip(&pdu);

        assert_eq!(decoded, pdu);
        match decoded {
            Pdu::GetBulkRequest {
                non_repeaters,
                max_repetitions,
                ..
            } => {
                assert_eq!(non_repeaters, 0);
                assert_eq!(max_repetitions, 10);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_trap_tag_rejected() {
        // 0xA4 is the v1 Trap tag, outside this codec's PDU set
        let data = [0xA4, 0x02, 0x05, 0x00];
        let mut decoder = Decoder::from_slice(&data);
        let err = Pdu::decode(&mut decoder).unwrap_err();
        assert_eq!(
            err,
            Error::decode(0, DecodeErrorKind::UnknownPduType(0xA4))
        );
    }

    #[test]
    fn test_unknown_pdu_tags_rejected() {
        for tag in [0xA6, 0xA7, 0xA8, 0xAF] {
            let data = [tag, 0x00];
            let mut decoder = Decoder::from_slice(&data);
            let err = Pdu::decode(&mut decoder).unwrap_err();
            assert_eq!(
                err,
                Error::decode(0, DecodeErrorKind::UnknownPduType(tag)),
                "tag 0x{:02X}",
                tag
            );
        }
    }

    #[test]
    fn test_pdu_rejects_trailing_bytes() {
        // Valid GetRequest with one stray byte inside the declared length
        let pdu = Pdu::get_request(1, &[oid!(1, 3, 6)]);
        let mut buf = EncodeBuf::new();
        pdu.encode(&mut buf);
        let mut bytes = buf.finish_vec();
        // Extend the declared PDU length by one and append a stray byte
        bytes[1] += 1;
        bytes.push(0xAA);

        let mut decoder = Decoder::from_slice(&bytes);
        let err = Pdu::decode(&mut decoder).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                kind: DecodeErrorKind::TrailingData { remaining: 1 },
                ..
            }
        ));
    }
}
