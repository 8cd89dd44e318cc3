//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[u32; 16]>` to avoid heap allocation for
//! common OIDs. Ordering is component-wise lexicographic with the shorter
//! prefix sorting first, which is the order GETNEXT/GETBULK walks rely on.

use crate::error::{DecodeErrorKind, Error, OidErrorKind, Result};
use smallvec::SmallVec;
use std::fmt;

/// Maximum number of arcs (subidentifiers) allowed in an OID.
///
/// Per RFC 2578 Section 3.5: "there are at most 128 sub-identifiers in a
/// value". Enforced during BER decoding.
pub const MAX_OID_LEN: usize = 128;

/// Object Identifier.
///
/// A sequence of arc values, each in `[0, 2^32 - 1]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an empty OID.
    ///
    /// The empty OID is a prefix of every OID and sorts before all of them.
    pub fn empty() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }

    /// Create an OID from arc values.
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from dotted string notation (e.g., "1.3.6.1.2.1.1.1.0").
    ///
    /// Rejects empty input, empty segments (leading/trailing/doubled dots),
    /// non-digit characters, and segment values above `2^32 - 1`. The error
    /// names the failing segment index; the input text is not captured.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_wire::oid::Oid;
    ///
    /// let oid = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1, 1, 1, 0]);
    ///
    /// assert!(Oid::parse("").is_err());
    /// assert!(Oid::parse("1..3").is_err());
    /// assert!(Oid::parse("1.3.x").is_err());
    /// assert!(Oid::parse("1.-3").is_err());
    /// assert!(Oid::parse("1.4294967296").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidOid {
                kind: OidErrorKind::Empty,
                segment: None,
            });
        }

        let mut arcs = SmallVec::new();

        for (index, part) in s.split('.').enumerate() {
            if part.is_empty() {
                return Err(Error::invalid_oid(OidErrorKind::EmptySegment, index));
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::invalid_oid(OidErrorKind::InvalidDigit, index));
            }
            let arc: u32 = part
                .parse()
                .map_err(|_| Error::invalid_oid(OidErrorKind::ArcOverflow, index))?;
            arcs.push(arc);
        }

        Ok(Self { arcs })
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with another OID.
    ///
    /// Returns `true` if `self` begins with the same arcs as `prefix`.
    /// An OID always starts with itself, and any OID starts with the
    /// empty OID.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_wire::oid::Oid;
    ///
    /// let sys_descr = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
    /// let system = Oid::parse("1.3.6.1.2.1.1").unwrap();
    ///
    /// assert!(sys_descr.starts_with(&system));
    /// assert!(!system.starts_with(&sys_descr));
    /// assert!(sys_descr.starts_with(&sys_descr));
    /// assert!(sys_descr.starts_with(&Oid::empty()));
    /// ```
    pub fn starts_with(&self, prefix: &Oid) -> bool {
        self.arcs.len() >= prefix.arcs.len() && self.arcs[..prefix.arcs.len()] == prefix.arcs[..]
    }

    /// Get the parent OID (all arcs except the last).
    pub fn parent(&self) -> Option<Oid> {
        if self.arcs.is_empty() {
            None
        } else {
            Some(Oid {
                arcs: SmallVec::from_slice(&self.arcs[..self.arcs.len() - 1]),
            })
        }
    }

    /// Create a child OID by appending an arc.
    pub fn child(&self, arc: u32) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.push(arc);
        Oid { arcs }
    }

    /// Validate arcs per X.690 Section 8.19.4.
    ///
    /// BER packs the first two arcs into one subidentifier, which requires
    /// arc1 in 0..=2 and arc2 <= 39 when arc1 < 2. OIDs violating this
    /// cannot round-trip through the wire format.
    pub fn validate(&self) -> bool {
        match self.arcs.as_slice() {
            [] => true,
            [first, rest @ ..] => {
                *first <= 2 && (*first == 2 || rest.first().is_none_or(|a| *a <= 39))
            }
        }
    }

    /// Encode to BER content bytes in a stack-allocated buffer.
    ///
    /// OID encoding (X.690 Section 8.19): the first two arcs combine into
    /// `arc1 * 40 + arc2`, then every subidentifier is base-128 with a
    /// continuation bit.
    pub fn to_ber_smallvec(&self) -> SmallVec<[u8; 64]> {
        let mut bytes = SmallVec::new();

        if self.arcs.is_empty() {
            return bytes;
        }

        // First two arcs combined; base-128 because arc2 can exceed 127
        // when arc1 is 2
        if self.arcs.len() >= 2 {
            encode_subidentifier(&mut bytes, self.arcs[0].wrapping_mul(40).wrapping_add(self.arcs[1]));
        } else {
            encode_subidentifier(&mut bytes, self.arcs[0].wrapping_mul(40));
        }

        for &arc in self.arcs.iter().skip(2) {
            encode_subidentifier(&mut bytes, arc);
        }

        bytes
    }

    /// Encode to BER content bytes.
    pub fn to_ber(&self) -> Vec<u8> {
        self.to_ber_smallvec().to_vec()
    }

    /// Decode from BER content bytes.
    ///
    /// Enforces [`MAX_OID_LEN`] per RFC 2578 Section 3.5.
    pub fn from_ber(data: &[u8]) -> Result<Self> {
        Self::from_ber_at(data, 0)
    }

    /// Decode from BER content bytes, reporting errors at absolute
    /// datagram offsets starting from `base`.
    pub fn from_ber_at(data: &[u8], base: usize) -> Result<Self> {
        if data.is_empty() {
            return Ok(Self::empty());
        }

        let mut arcs = SmallVec::new();

        // First subidentifier packs the first two arcs
        let (first_subid, consumed) = decode_subidentifier(data, base)?;
        if first_subid < 40 {
            arcs.push(0);
            arcs.push(first_subid);
        } else if first_subid < 80 {
            arcs.push(1);
            arcs.push(first_subid - 40);
        } else {
            arcs.push(2);
            arcs.push(first_subid - 80);
        }

        let mut i = consumed;
        while i < data.len() {
            let (arc, consumed) = decode_subidentifier(&data[i..], base + i)?;
            arcs.push(arc);
            i += consumed;

            if arcs.len() > MAX_OID_LEN {
                return Err(Error::decode(
                    base + i,
                    DecodeErrorKind::OidTooLong {
                        count: arcs.len(),
                        max: MAX_OID_LEN,
                    },
                ));
            }
        }

        Ok(Self { arcs })
    }
}

/// Encode a subidentifier in base-128 variable length.
#[inline]
fn encode_subidentifier(bytes: &mut SmallVec<[u8; 64]>, value: u32) {
    if value == 0 {
        bytes.push(0);
        return;
    }

    // Count the 7-bit groups needed
    let mut temp = value;
    let mut count = 0;
    while temp > 0 {
        count += 1;
        temp >>= 7;
    }

    for i in (0..count).rev() {
        let mut byte = ((value >> (i * 7)) & 0x7F) as u8;
        if i > 0 {
            byte |= 0x80; // Continuation bit
        }
        bytes.push(byte);
    }
}

/// Decode a subidentifier, returning (value, bytes_consumed).
fn decode_subidentifier(data: &[u8], base: usize) -> Result<(u32, usize)> {
    let mut value: u32 = 0;
    let mut i = 0;

    loop {
        if i >= data.len() {
            return Err(Error::decode(base + i, DecodeErrorKind::TruncatedData));
        }

        let byte = data[i];
        i += 1;

        // Check for overflow before shifting
        if value > (u32::MAX >> 7) {
            return Err(Error::decode(base + i, DecodeErrorKind::IntegerOverflow));
        }

        value = (value << 7) | ((byte & 0x7F) as u32);

        if byte & 0x80 == 0 {
            break;
        }
    }

    Ok((value, i))
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for Oid {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::from_slice(arcs)
    }
}

impl<const N: usize> From<[u32; N]> for Oid {
    fn from(arcs: [u32; N]) -> Self {
        Self::new(arcs)
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.arcs.cmp(&other.arcs)
    }
}

/// Macro to create an OID from literal arcs.
///
/// # Examples
///
/// ```
/// use snmp_wire::oid;
///
/// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
/// assert_eq!(sys_descr.to_string(), "1.3.6.1.2.1.1.1.0");
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_parse() {
        let oid = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1, 1, 1, 0]);
    }

    #[test]
    fn test_parse_format_inverse() {
        let text = "1.3.6.1.2.1.2.2.1.2.1";
        let oid = Oid::parse(text).unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1, 2, 2, 1, 2, 1]);
        assert_eq!(oid.to_string(), text);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            Oid::parse("").unwrap_err(),
            Error::InvalidOid {
                kind: OidErrorKind::Empty,
                segment: None
            }
        );
        assert_eq!(
            Oid::parse(".1.3").unwrap_err(),
            Error::invalid_oid(OidErrorKind::EmptySegment, 0)
        );
        assert_eq!(
            Oid::parse("1.3.").unwrap_err(),
            Error::invalid_oid(OidErrorKind::EmptySegment, 2)
        );
        assert_eq!(
            Oid::parse("1..3").unwrap_err(),
            Error::invalid_oid(OidErrorKind::EmptySegment, 1)
        );
        assert_eq!(
            Oid::parse("1.3.abc").unwrap_err(),
            Error::invalid_oid(OidErrorKind::InvalidDigit, 2)
        );
        assert_eq!(
            Oid::parse("1.-3.6").unwrap_err(),
            Error::invalid_oid(OidErrorKind::InvalidDigit, 1)
        );
        assert_eq!(
            Oid::parse("1.3 .6").unwrap_err(),
            Error::invalid_oid(OidErrorKind::InvalidDigit, 1)
        );
    }

    #[test]
    fn test_parse_arc_bounds() {
        // 2^32 - 1 is the largest arc
        let oid = Oid::parse("1.3.4294967295").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, u32::MAX]);

        assert_eq!(
            Oid::parse("1.3.4294967296").unwrap_err(),
            Error::invalid_oid(OidErrorKind::ArcOverflow, 2)
        );
    }

    #[test]
    fn test_ordering_lexicographic() {
        let a = Oid::parse("1.3.6.1").unwrap();
        let b = Oid::parse("1.3.6.2").unwrap();
        let c = Oid::parse("1.3.6.1.1").unwrap();

        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.cmp(&c), Ordering::Less); // prefix sorts first
        assert_eq!(c.cmp(&b), Ordering::Less);
        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert_eq!(Oid::empty().cmp(&a), Ordering::Less);
    }

    #[test]
    fn test_starts_with() {
        let oid = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
        let prefix = Oid::parse("1.3.6.1").unwrap();
        assert!(oid.starts_with(&prefix));
        assert!(!prefix.starts_with(&oid));
        assert!(oid.starts_with(&oid));
        assert!(oid.starts_with(&Oid::empty()));
        assert!(Oid::empty().starts_with(&Oid::empty()));
    }

    #[test]
    fn test_prefix_implies_less_or_equal() {
        let full = Oid::parse("1.3.6.1.2.1").unwrap();
        for n in 0..=full.len() {
            let prefix = Oid::from_slice(&full.arcs()[..n]);
            assert!(full.starts_with(&prefix));
            assert_ne!(prefix.cmp(&full), Ordering::Greater);
        }
    }

    #[test]
    fn test_parent_child() {
        let system = Oid::parse("1.3.6.1.2.1.1").unwrap();
        let sys_descr = system.child(1);
        assert_eq!(sys_descr.to_string(), "1.3.6.1.2.1.1.1");
        assert_eq!(sys_descr.parent().unwrap(), system);
        assert!(Oid::empty().parent().is_none());
    }

    #[test]
    fn test_ber_encoding() {
        // 1.3.6.1 encodes as (1*40+3)=43, 6, 1
        let oid = Oid::parse("1.3.6.1").unwrap();
        assert_eq!(oid.to_ber(), vec![0x2B, 0x06, 0x01]);
    }

    #[test]
    fn test_ber_roundtrip() {
        let oid = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
        let decoded = Oid::from_ber(&oid.to_ber()).unwrap();
        assert_eq!(oid, decoded);
    }

    #[test]
    fn test_ber_large_arc2() {
        // X.690 Section 8.19 example: 2.999.3 has first subidentifier 1079
        let oid = Oid::from_slice(&[2, 999, 3]);
        let ber = oid.to_ber();
        assert_eq!(ber, vec![0x88, 0x37, 0x03]);
        assert_eq!(Oid::from_ber(&ber).unwrap(), oid);
    }

    #[test]
    fn test_ber_large_arc_values() {
        let oid = Oid::from_slice(&[1, 3, 6, 1, 4, 1, u32::MAX]);
        let decoded = Oid::from_ber(&oid.to_ber()).unwrap();
        assert_eq!(oid, decoded);
    }

    #[test]
    fn test_from_ber_rejects_truncated_subidentifier() {
        // Continuation bit set on the final byte
        assert!(Oid::from_ber(&[0x2B, 0x86]).is_err());
    }

    #[test]
    fn test_from_ber_rejects_subidentifier_overflow() {
        // 6 continuation bytes exceed u32
        assert!(Oid::from_ber(&[0x2B, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F]).is_err());
    }

    #[test]
    fn test_from_ber_enforces_max_len() {
        let mut data = vec![0x2B];
        data.extend(std::iter::repeat_n(0x01, MAX_OID_LEN + 10));
        let err = Oid::from_ber(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                kind: DecodeErrorKind::OidTooLong { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_validate() {
        assert!(Oid::parse("1.3.6.1").unwrap().validate());
        assert!(Oid::from_slice(&[2, 999]).validate());
        assert!(Oid::empty().validate());
        assert!(!Oid::from_slice(&[3, 0]).validate());
        assert!(!Oid::from_slice(&[0, 40]).validate());
        assert!(!Oid::from_slice(&[1, 40]).validate());
    }

    #[test]
    fn test_macro() {
        let oid = oid!(1, 3, 6, 1);
        assert_eq!(oid.arcs(), &[1, 3, 6, 1]);
    }
}
