//! Error types for snmp-wire.
//!
//! Every failure is a structured code plus minimal positional context.
//! Decode errors never carry payload bytes: a malformed datagram is
//! described by what went wrong and where, not by its content.

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// BER decode error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Expected different tag.
    UnexpectedTag { expected: u8, actual: u8 },
    /// Data truncated unexpectedly.
    TruncatedData,
    /// Indefinite length not supported.
    IndefiniteLength,
    /// Length-of-length field uses a reserved/unsupported form.
    LengthTooLong { octets: usize },
    /// Length exceeds the datagram ceiling.
    LengthExceedsMax { length: usize, max: usize },
    /// Declared length claims more bytes than the element has.
    InsufficientData { needed: usize, available: usize },
    /// Zero-length integer.
    ZeroLengthInteger,
    /// Integer content longer than its type permits.
    IntegerTooLong { length: usize },
    /// Integer value overflow.
    IntegerOverflow,
    /// NULL with non-zero length.
    InvalidNull,
    /// Invalid IP address length.
    InvalidIpAddressLength { length: usize },
    /// Constructed OCTET STRING not supported.
    ConstructedOctetString,
    /// Unknown SNMP version.
    UnknownVersion(i32),
    /// Unknown PDU type.
    UnknownPduType(u8),
    /// Unknown value tag.
    UnknownValueType(u8),
    /// OID has too many subidentifiers.
    OidTooLong { count: usize, max: usize },
    /// Constructed elements nested past the depth cap.
    NestingTooDeep { max: usize },
    /// Element declared a length shorter than its actual content.
    TrailingData { remaining: usize },
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedTag { expected, actual } => {
                write!(f, "expected tag 0x{:02X}, got 0x{:02X}", expected, actual)
            }
            Self::TruncatedData => write!(f, "unexpected end of data"),
            Self::IndefiniteLength => write!(f, "indefinite length encoding not supported"),
            Self::LengthTooLong { octets } => {
                write!(f, "length encoding too long ({} octets)", octets)
            }
            Self::LengthExceedsMax { length, max } => {
                write!(f, "length {} exceeds maximum {}", length, max)
            }
            Self::InsufficientData { needed, available } => {
                write!(f, "need {} bytes but only {} remaining", needed, available)
            }
            Self::ZeroLengthInteger => write!(f, "zero-length integer"),
            Self::IntegerTooLong { length } => {
                write!(f, "integer content too long: {} bytes", length)
            }
            Self::IntegerOverflow => write!(f, "integer overflow"),
            Self::InvalidNull => write!(f, "NULL with non-zero length"),
            Self::InvalidIpAddressLength { length } => {
                write!(f, "IP address must be 4 bytes, got {}", length)
            }
            Self::ConstructedOctetString => {
                write!(f, "constructed OCTET STRING (0x24) not supported")
            }
            Self::UnknownVersion(v) => write!(f, "unknown SNMP version: {}", v),
            Self::UnknownPduType(t) => write!(f, "unknown PDU type: 0x{:02X}", t),
            Self::UnknownValueType(t) => write!(f, "unknown value type: 0x{:02X}", t),
            Self::OidTooLong { count, max } => {
                write!(f, "OID has {} subidentifiers, exceeds maximum {}", count, max)
            }
            Self::NestingTooDeep { max } => {
                write!(f, "nesting exceeds maximum depth {}", max)
            }
            Self::TrailingData { remaining } => {
                write!(f, "{} trailing bytes after element", remaining)
            }
        }
    }
}

/// OID text-parse error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OidErrorKind {
    /// Empty OID string.
    Empty,
    /// Empty segment (leading, trailing, or doubled separator).
    EmptySegment,
    /// Segment contains a non-digit character.
    InvalidDigit,
    /// Segment value exceeds 2^32 - 1.
    ArcOverflow,
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty OID"),
            Self::EmptySegment => write!(f, "empty segment"),
            Self::InvalidDigit => write!(f, "non-digit character in segment"),
            Self::ArcOverflow => write!(f, "segment value exceeds 2^32 - 1"),
        }
    }
}

/// Operations some protocol version cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedKind {
    /// GETBULK is an SNMPv2c operation; v1 agents cannot parse it.
    GetBulkRequiresV2c,
}

impl std::fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GetBulkRequiresV2c => write!(f, "get_bulk requires v2c"),
        }
    }
}

/// Violations only reported under [`Strictness::Strict`](crate::message::Strictness).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrictErrorKind {
    /// error-status outside the defined 0..=18 set.
    ErrorStatusOutOfRange { status: i32 },
    /// v2c-only error-status (6..=18) inside a v1 message.
    ErrorStatusRequiresV2c { status: i32 },
    /// Counter64 value inside a v1 message.
    Counter64RequiresV2c,
    /// Exception marker (noSuchObject etc.) inside a v1 message.
    ExceptionRequiresV2c,
}

impl std::fmt::Display for StrictErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ErrorStatusOutOfRange { status } => {
                write!(f, "error-status {} outside defined range 0..=18", status)
            }
            Self::ErrorStatusRequiresV2c { status } => {
                write!(f, "error-status {} is not defined for SNMPv1", status)
            }
            Self::Counter64RequiresV2c => write!(f, "Counter64 is not defined for SNMPv1"),
            Self::ExceptionRequiresV2c => {
                write!(f, "exception values are not defined for SNMPv1")
            }
        }
    }
}

/// SNMP error status codes (RFC 3416).
///
/// Codes 0..=5 are defined for both v1 and v2c; 6..=18 are v2c-only.
/// Unknown codes are preserved, not rejected: the decoder reports whatever
/// the agent declared and leaves policy to the caller (or to
/// [`Strictness::Strict`](crate::message::Strictness)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    NoError,
    TooBig,
    NoSuchName,
    BadValue,
    ReadOnly,
    GenErr,
    NoAccess,
    WrongType,
    WrongLength,
    WrongEncoding,
    WrongValue,
    NoCreation,
    InconsistentValue,
    ResourceUnavailable,
    CommitFailed,
    UndoFailed,
    AuthorizationError,
    NotWritable,
    InconsistentName,
    /// Unknown/future error status code.
    Unknown(i32),
}

impl ErrorStatus {
    /// Create from raw status code.
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::NoError,
            1 => Self::TooBig,
            2 => Self::NoSuchName,
            3 => Self::BadValue,
            4 => Self::ReadOnly,
            5 => Self::GenErr,
            6 => Self::NoAccess,
            7 => Self::WrongType,
            8 => Self::WrongLength,
            9 => Self::WrongEncoding,
            10 => Self::WrongValue,
            11 => Self::NoCreation,
            12 => Self::InconsistentValue,
            13 => Self::ResourceUnavailable,
            14 => Self::CommitFailed,
            15 => Self::UndoFailed,
            16 => Self::AuthorizationError,
            17 => Self::NotWritable,
            18 => Self::InconsistentName,
            other => Self::Unknown(other),
        }
    }

    /// Convert to raw status code.
    pub fn as_i32(&self) -> i32 {
        match self {
            Self::NoError => 0,
            Self::TooBig => 1,
            Self::NoSuchName => 2,
            Self::BadValue => 3,
            Self::ReadOnly => 4,
            Self::GenErr => 5,
            Self::NoAccess => 6,
            Self::WrongType => 7,
            Self::WrongLength => 8,
            Self::WrongEncoding => 9,
            Self::WrongValue => 10,
            Self::NoCreation => 11,
            Self::InconsistentValue => 12,
            Self::ResourceUnavailable => 13,
            Self::CommitFailed => 14,
            Self::UndoFailed => 15,
            Self::AuthorizationError => 16,
            Self::NotWritable => 17,
            Self::InconsistentName => 18,
            Self::Unknown(code) => *code,
        }
    }

    /// Whether this code is defined for the given protocol version.
    ///
    /// v1 defines 0..=5 (RFC 1157); v2c defines 0..=18 (RFC 3416).
    pub fn valid_for(&self, version: crate::version::Version) -> bool {
        let code = self.as_i32();
        match version {
            crate::version::Version::V1 => (0..=5).contains(&code),
            crate::version::Version::V2c => (0..=18).contains(&code),
        }
    }
}

impl std::fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoError => write!(f, "noError"),
            Self::TooBig => write!(f, "tooBig"),
            Self::NoSuchName => write!(f, "noSuchName"),
            Self::BadValue => write!(f, "badValue"),
            Self::ReadOnly => write!(f, "readOnly"),
            Self::GenErr => write!(f, "genErr"),
            Self::NoAccess => write!(f, "noAccess"),
            Self::WrongType => write!(f, "wrongType"),
            Self::WrongLength => write!(f, "wrongLength"),
            Self::WrongEncoding => write!(f, "wrongEncoding"),
            Self::WrongValue => write!(f, "wrongValue"),
            Self::NoCreation => write!(f, "noCreation"),
            Self::InconsistentValue => write!(f, "inconsistentValue"),
            Self::ResourceUnavailable => write!(f, "resourceUnavailable"),
            Self::CommitFailed => write!(f, "commitFailed"),
            Self::UndoFailed => write!(f, "undoFailed"),
            Self::AuthorizationError => write!(f, "authorizationError"),
            Self::NotWritable => write!(f, "notWritable"),
            Self::InconsistentName => write!(f, "inconsistentName"),
            Self::Unknown(code) => write!(f, "unknown({})", code),
        }
    }
}

/// Library error type.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Invalid OID text.
    ///
    /// `segment` is the 0-based index of the failing segment. The text
    /// itself is never captured.
    #[error("invalid OID: {kind}{}", segment.map(|s| format!(" at segment {}", s)).unwrap_or_default())]
    InvalidOid {
        kind: OidErrorKind,
        segment: Option<usize>,
    },

    /// BER decoding error.
    #[error("decode error at offset {offset}: {kind}")]
    Decode {
        offset: usize,
        kind: DecodeErrorKind,
    },

    /// Value outside its type's numeric range.
    #[error("{kind} value {value} outside {min}..={max}")]
    Range {
        kind: crate::value::ValueKind,
        value: i64,
        min: i64,
        max: u64,
    },

    /// Malformed dotted-quad IPv4 text. The input is never captured.
    #[error("invalid IPv4 address literal")]
    InvalidAddress,

    /// Operation cannot be expressed under the message's version.
    #[error("unsupported operation: {kind}")]
    UnsupportedOperation { kind: UnsupportedKind },

    /// Message violates the strict decoding policy.
    #[error("strict mode violation: {kind}")]
    Strict { kind: StrictErrorKind },

    /// Message exceeds the UDP payload ceiling.
    #[error("message too large: {size} bytes exceeds maximum {max}")]
    MessageTooLarge { size: usize, max: usize },
}

impl Error {
    /// Create a decode error.
    pub fn decode(offset: usize, kind: DecodeErrorKind) -> Self {
        Self::Decode { offset, kind }
    }

    /// Create an invalid OID error for a failing segment.
    pub fn invalid_oid(kind: OidErrorKind, segment: usize) -> Self {
        Self::InvalidOid {
            kind,
            segment: Some(segment),
        }
    }
}
