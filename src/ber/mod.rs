//! BER (Basic Encoding Rules) codec for SNMP.
//!
//! Encoding and decoding of the X.690 BER subset SNMP messages use.
//! Encoding is canonical (minimal-length); parsing is permissive about
//! non-minimal integer and length forms but strict about structure.

mod decode;
mod encode;
mod length;
pub mod tag;

pub use decode::*;
pub use encode::*;
pub use length::*;
