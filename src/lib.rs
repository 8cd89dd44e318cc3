//! # snmp-wire
//!
//! SNMP v1/v2c message codec: wire-format bytes to structured messages
//! and back, byte-exact against the X.690 BER subset SNMP agents use.
//!
//! This crate does codec work only. Sockets, timeouts, retries, request
//! routing, and MIB name resolution belong to the layers around it; they
//! consume [`Message::encode`] and [`Message::decode`] and nothing else
//! here.
//!
//! ## Quick start
//!
//! ```
//! use snmp_wire::{Message, Pdu, oid};
//!
//! // Build and encode a GET request
//! let request = Message::v2c(
//!     b"public".as_slice(),
//!     Pdu::get_request(12345, &[oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)]),
//! );
//! let wire = request.encode()?;
//!
//! // Decode whatever comes back from the transport
//! let reply = Message::decode(wire)?;
//! assert_eq!(reply.pdu.request_id(), 12345);
//! # Ok::<(), snmp_wire::Error>(())
//! ```
//!
//! ## Safety on untrusted input
//!
//! Decoding is pure and allocation-bounded: no length claim is trusted
//! before it is checked against the bytes actually present, nesting is
//! capped at [`ber::MAX_DEPTH`], and input beyond the UDP payload
//! ceiling ([`message::MAX_MESSAGE_SIZE`]) is rejected up front.
//! Malformed input produces a structured [`Error`], never a panic, and
//! error values carry positions and codes - never payload bytes.
//!
//! All operations are synchronous, stateless, and safe to call from any
//! number of threads.

pub mod ber;
pub mod error;
pub mod message;
pub mod oid;
pub mod pdu;
pub mod value;
pub mod varbind;
pub mod version;

// Re-exports for convenience
pub use error::{
    DecodeErrorKind, Error, ErrorStatus, OidErrorKind, Result, StrictErrorKind, UnsupportedKind,
};
pub use message::{MAX_MESSAGE_SIZE, Message, Strictness};
pub use oid::Oid;
pub use pdu::{Pdu, PduType};
pub use value::{Value, ValueKind};
pub use varbind::VarBind;
pub use version::Version;
