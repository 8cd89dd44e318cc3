#![no_main]

use libfuzzer_sys::fuzz_target;

use snmp_wire::oid::Oid;

fuzz_target!(|data: &[u8]| {
    // Fuzz OID from BER encoding; whatever decodes must format and
    // re-parse to the same value
    if let Ok(oid) = Oid::from_ber(data) {
        let text = oid.to_string();
        if !oid.is_empty() {
            assert_eq!(Oid::parse(&text).unwrap(), oid);
        }
    }

    // Fuzz OID from dotted string notation (if data is valid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = Oid::parse(s);
    }
});
