#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;

use snmp_wire::message::{Message, Strictness};
use snmp_wire::pdu::Pdu;

fuzz_target!(|data: &[u8]| {
    let bytes = Bytes::copy_from_slice(data);

    // Fuzz the message decoder under both policies
    let _ = Message::decode(bytes.clone());
    let _ = Message::decode_with(bytes.clone(), Strictness::Strict);

    // Fuzz the PDU decoder directly
    let mut decoder = snmp_wire::ber::Decoder::new(bytes);
    let _ = Pdu::decode(&mut decoder);
});
