//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet long header section
//! containing some general information related to the message as well as
//! the number of entries in each of the four sections that follow the
//! header. Its content and format are defined in section 4.1.1 of
//! [RFC 1035].
//!
//! The header is split into two types mirroring its two halves: [`Header`]
//! for the ID, flags, opcode, and response code in the first four octets,
//! and [`HeaderCounts`] for the four section counts. [`HeaderSection`]
//! wraps both into a single type.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::iana::{Opcode, Rcode};
use core::mem;

//------------ Header --------------------------------------------------------

/// The first part of the header of a DNS message.
///
/// This type provides access to the information contained in the first
/// four octets of the header: the message ID, opcode, rcode, and the
/// various flags. It keeps those octets in wire representation, i.e., in
/// network byte order. The data is layed out like this:
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|Z |AD|CD|   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// Values are created from the octets of an actual message via
/// [`for_message_slice`][Self::for_message_slice].
///
/// The basic structure and most of the fields are defined in [RFC 1035],
/// except for the AD and CD flags, which are defined in [RFC 4035].
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
/// [RFC 4035]: https://tools.ietf.org/html/rfc4035
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Header {
    /// The actual header in its wire format representation.
    ///
    /// This means that the ID field is in big endian.
    inner: [u8; 4],
}

impl Header {
    /// Creates a header from the octets of a message.
    ///
    /// # Panics
    ///
    /// This function panics if the slice is shorter than the full header
    /// section.
    #[must_use]
    pub fn for_message_slice(s: &[u8]) -> Header {
        assert!(s.len() >= mem::size_of::<HeaderSection>());
        let mut inner = [0u8; 4];
        inner.copy_from_slice(&s[..4]);
        Header { inner }
    }

    /// Returns the value of the ID field.
    ///
    /// The ID field is an identifier chosen by whoever created a query
    /// and is copied into a response by a server. It allows matching
    /// incoming responses to their queries.
    #[must_use]
    pub fn id(self) -> u16 {
        u16::from_be_bytes([self.inner[0], self.inner[1]])
    }

    /// Returns whether the QR bit is set.
    ///
    /// The QR bit specifies whether a message is a query (`false`) or a
    /// response (`true`).
    #[must_use]
    pub fn qr(self) -> bool {
        self.get_bit(2, 7)
    }

    /// Returns the value of the Opcode field.
    ///
    /// This field specifies the kind of query a message contains.
    #[must_use]
    pub fn opcode(self) -> Opcode {
        Opcode::from_int((self.inner[2] >> 3) & 0x0F)
    }

    /// Returns whether the AA bit is set.
    ///
    /// Using this bit, a name server generating a response states whether
    /// it is authoritative for the requested domain name.
    #[must_use]
    pub fn aa(self) -> bool {
        self.get_bit(2, 2)
    }

    /// Returns whether the TC bit is set.
    ///
    /// The *truncation* bit is set if the full message doesn't fit into
    /// the transport used, indicating that the client may want to try a
    /// different transport.
    #[must_use]
    pub fn tc(self) -> bool {
        self.get_bit(2, 1)
    }

    /// Returns whether the RD bit is set.
    ///
    /// The *recursion desired* bit copied from a query into the response
    /// asks the server to resolve the query recursively.
    #[must_use]
    pub fn rd(self) -> bool {
        self.get_bit(2, 0)
    }

    /// Returns whether the RA bit is set.
    ///
    /// In a response, the *recursion available* bit denotes whether the
    /// responding server supports recursion.
    #[must_use]
    pub fn ra(self) -> bool {
        self.get_bit(3, 7)
    }

    /// Returns whether the reserved bit is set.
    ///
    /// This bit must be `false` in all queries and responses.
    #[must_use]
    pub fn z(self) -> bool {
        self.get_bit(3, 6)
    }

    /// Returns whether the AD bit is set.
    ///
    /// The *authentic data* bit is used by security-aware recursive name
    /// servers to state that data in the answer and authority sections
    /// was authenticated.
    #[must_use]
    pub fn ad(self) -> bool {
        self.get_bit(3, 5)
    }

    /// Returns whether the CD bit is set.
    ///
    /// The *checking disabled* bit asks the server not to perform DNSSEC
    /// validation.
    #[must_use]
    pub fn cd(self) -> bool {
        self.get_bit(3, 4)
    }

    /// Returns the value of the RCODE field.
    ///
    /// The *response code* is used in a response to indicate whether the
    /// query was answered successfully or an error occurred.
    #[must_use]
    pub fn rcode(self) -> Rcode {
        Rcode::from_int(self.inner[3] & 0x0F)
    }

    /// Returns the flags field with the RCODE bits masked off.
    ///
    /// This is the entire third and fourth header octet in host byte
    /// order, with the low four bits cleared. Use [`rcode`][Self::rcode]
    /// for those.
    #[must_use]
    pub fn flags(self) -> u16 {
        u16::from_be_bytes([self.inner[2], self.inner[3]]) & 0xFFF0
    }

    /// Returns the value of the bit at the given position.
    ///
    /// The argument `offset` gives the byte offset of the flags octet and
    /// `bit` gives the number of the bit with the most significant bit
    /// being 7.
    fn get_bit(self, offset: usize, bit: usize) -> bool {
        self.inner[offset] & (1 << bit) != 0
    }
}

//------------ HeaderCounts --------------------------------------------------

/// The section count part of the header of a DNS message.
///
/// This part consists of four 16 bit counters for the number of entries
/// in the four sections of a DNS message: questions, answers, authority
/// records, and additional records.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeaderCounts {
    /// The actual counts in their wire format representation.
    inner: [u8; 8],
}

impl HeaderCounts {
    /// Creates the header counts from the octets of a message.
    ///
    /// The slice must be the whole message, i.e., start with the bytes of
    /// the [`Header`].
    ///
    /// # Panics
    ///
    /// This function panics if the slice is shorter than the full header
    /// section.
    #[must_use]
    pub fn for_message_slice(s: &[u8]) -> HeaderCounts {
        assert!(s.len() >= mem::size_of::<HeaderSection>());
        let mut inner = [0u8; 8];
        inner.copy_from_slice(&s[4..12]);
        HeaderCounts { inner }
    }

    /// Returns the number of entries in the question section (QDCOUNT).
    #[must_use]
    pub fn qdcount(self) -> u16 {
        self.get_u16(0)
    }

    /// Returns the number of entries in the answer section (ANCOUNT).
    #[must_use]
    pub fn ancount(self) -> u16 {
        self.get_u16(2)
    }

    /// Returns the number of entries in the authority section (NSCOUNT).
    #[must_use]
    pub fn nscount(self) -> u16 {
        self.get_u16(4)
    }

    /// Returns the number of entries in the additional section (ARCOUNT).
    #[must_use]
    pub fn arcount(self) -> u16 {
        self.get_u16(6)
    }

    /// Returns the value of the counter at the given byte offset.
    fn get_u16(self, offset: usize) -> u16 {
        u16::from_be_bytes([self.inner[offset], self.inner[offset + 1]])
    }
}

//------------ HeaderSection -------------------------------------------------

/// The complete header section of a DNS message.
///
/// Consists of a [`Header`] and a [`HeaderCounts`]. Its size doubles as
/// the canonical length of the wire-format header.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeaderSection {
    inner: [u8; 12],
}

impl HeaderSection {
    /// Creates a header section from the octets of a message.
    ///
    /// # Panics
    ///
    /// This function panics if the slice is shorter than twelve octets.
    #[must_use]
    pub fn for_message_slice(s: &[u8]) -> HeaderSection {
        assert!(s.len() >= mem::size_of::<HeaderSection>());
        let mut inner = [0u8; 12];
        inner.copy_from_slice(&s[..12]);
        HeaderSection { inner }
    }

    /// Returns the header.
    #[must_use]
    pub fn header(&self) -> Header {
        Header::for_message_slice(&self.inner)
    }

    /// Returns the header counts.
    #[must_use]
    pub fn counts(&self) -> HeaderCounts {
        HeaderCounts::for_message_slice(&self.inner)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    // ID 0x1234, QR, AA, RD, RA set, opcode QUERY, rcode NXDOMAIN,
    // QDCOUNT 1, ANCOUNT 2, NSCOUNT 3, ARCOUNT 4.
    const MSG: &[u8] = b"\x12\x34\x85\x83\x00\x01\x00\x02\x00\x03\x00\x04";

    #[test]
    fn header_flags() {
        let header = Header::for_message_slice(MSG);
        assert_eq!(header.id(), 0x1234);
        assert!(header.qr());
        assert_eq!(header.opcode(), Opcode::QUERY);
        assert!(header.aa());
        assert!(!header.tc());
        assert!(header.rd());
        assert!(header.ra());
        assert!(!header.z());
        assert!(!header.ad());
        assert!(!header.cd());
        assert_eq!(header.rcode(), Rcode::NXDOMAIN);
        assert_eq!(header.flags(), 0x8580);
    }

    #[test]
    fn header_counts() {
        let counts = HeaderCounts::for_message_slice(MSG);
        assert_eq!(counts.qdcount(), 1);
        assert_eq!(counts.ancount(), 2);
        assert_eq!(counts.nscount(), 3);
        assert_eq!(counts.arcount(), 4);
    }

    #[test]
    fn header_section() {
        assert_eq!(mem::size_of::<HeaderSection>(), 12);
        let section = HeaderSection::for_message_slice(MSG);
        assert_eq!(section.header().id(), 0x1234);
        assert_eq!(section.counts().arcount(), 4);
    }

    #[test]
    #[should_panic]
    fn short_header() {
        Header::for_message_slice(b"\x12\x34\x85");
    }
}
