//! Domain names in DNS messages.
//!
//! Names in a message are encoded as a sequence of labels, each prefixed
//! by its length, terminated by the zero-length root label. To save
//! space, a name or a suffix of it may be replaced by a compression
//! pointer referring to an earlier occurrence in the message, as
//! described in section 4.1.4 of [RFC 1035].
//!
//! [`Name::parse`] decodes such a possibly compressed name into an owned
//! [`Name`], while [`Name::skip`] advances past a name without decoding
//! it. Both operate on a [`Parser`] positioned over the complete message,
//! since compression pointers are relative to the start of the message.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::wire::{FormError, ParseError, Parser};
use core::fmt;

/// The maximum length of a direct label.
///
/// Labels use the two top bits of their length octet as a type marker,
/// leaving six bits for the length of a direct label.
const MAX_LABEL_LEN: u8 = 0x3F;

//------------ Name ----------------------------------------------------------

/// A decoded domain name.
///
/// The name holds the labels of the decompressed name joined by `.`,
/// with the root label omitted. The root name itself is thus empty.
/// Label content is kept exactly as it appeared on the wire; it is not
/// required to be ASCII or even UTF-8, so the name is a sequence of
/// octets rather than a string.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Name {
    /// The dot-joined label octets.
    octets: Vec<u8>,
}

impl Name {
    /// Creates the root name.
    #[must_use]
    pub fn root() -> Self {
        Name::default()
    }

    /// Returns the octets of the name.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.octets
    }

    /// Returns the length of the name in octets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether this is the root name.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.octets.is_empty()
    }

    /// Returns whether the name is empty.
    ///
    /// Identical to [`is_root`][Self::is_root]: only the root name is
    /// empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Appends a label, adding the separator if necessary.
    fn push_label(&mut self, label: &[u8]) {
        if !self.octets.is_empty() {
            self.octets.push(b'.');
        }
        self.octets.extend_from_slice(label);
    }
}

/// # Parsing
///
impl Name {
    /// Takes a possibly compressed name from the beginning of `parser`.
    ///
    /// The parser must be over the complete message, since compression
    /// pointers refer to positions relative to its beginning. On success,
    /// the parser is advanced past the name's encoding in the linear
    /// stream: past the root label for an uncompressed name, or past the
    /// first compression pointer for a compressed one. On error the
    /// parser's position is undefined.
    ///
    /// Decoding fails on truncated labels and pointers, on the reserved
    /// label types, and on pointer chains whose traversal exceeds the
    /// message length, which bounds the traversal and rejects pointer
    /// loops.
    pub fn parse(parser: &mut Parser) -> Result<Name, ParseError> {
        let len = parser.len();
        let mut name = Name::root();
        let mut seen = 0;

        // Phase One: No compression pointers have been found yet.
        //
        // Collect labels from the caller's parser. If we encounter the
        // root label, the name was uncompressed and the parser sits right
        // behind it. Otherwise continue to phase two.
        let mut ptr = loop {
            match LabelType::parse(parser)? {
                LabelType::Normal(0) => return Ok(name),
                LabelType::Normal(label_len) => {
                    name.push_label(parser.parse_octets(label_len.into())?);
                    seen += 1 + usize::from(label_len);
                }
                LabelType::Compressed(ptr) => break ptr,
            }
        };

        // Phase Two: Compression has occurred.
        //
        // The caller's parser has already consumed the first pointer and
        // must not advance further, so we continue on a copy that jumps
        // around the message. Every pointer adds two octets and every
        // label its encoded length to `seen`; once that exceeds the
        // message length, more octets were traversed than the message
        // holds and the pointers must form a loop.
        let mut parser = *parser;
        loop {
            seen += 2;
            if seen > len {
                return Err(ParseError::Form(FormError::new(
                    "too many compression pointers",
                )));
            }
            parser.seek(ptr)?;

            loop {
                match LabelType::parse(&mut parser)? {
                    LabelType::Normal(0) => return Ok(name),
                    LabelType::Normal(label_len) => {
                        name.push_label(
                            parser.parse_octets(label_len.into())?,
                        );
                        seen += 1 + usize::from(label_len);
                    }
                    LabelType::Compressed(new_ptr) => {
                        ptr = new_ptr;
                        break;
                    }
                }
            }
        }
    }

    /// Skips over a name at the beginning of `parser`.
    ///
    /// This advances past the name's encoding in the linear stream
    /// without decoding labels: it stops right behind the root label or,
    /// for a compressed name, right behind the first compression pointer
    /// without checking that the pointer's target is a valid name. Use
    /// [`parse`][Self::parse] and drop the result if the target needs to
    /// be validated too.
    pub fn skip(parser: &mut Parser) -> Result<(), ParseError> {
        loop {
            match LabelType::parse(parser)? {
                LabelType::Normal(0) => return Ok(()),
                LabelType::Normal(label_len) => {
                    parser.advance(label_len.into())?;
                }
                LabelType::Compressed(_) => return Ok(()),
            }
        }
    }
}

//--- PartialEq with octets and strings

impl PartialEq<[u8]> for Name {
    fn eq(&self, other: &[u8]) -> bool {
        self.octets == other
    }
}

impl PartialEq<&[u8]> for Name {
    fn eq(&self, other: &&[u8]) -> bool {
        self.octets == *other
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.octets == other.as_bytes()
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.octets == other.as_bytes()
    }
}

//--- AsRef

impl AsRef<[u8]> for Name {
    fn as_ref(&self) -> &[u8] {
        &self.octets
    }
}

//--- Display

impl fmt::Display for Name {
    /// Formats the domain name.
    ///
    /// Label octets are not guaranteed to be valid UTF-8, so anything
    /// that isn't is replaced by the replacement character.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&String::from_utf8_lossy(&self.octets), f)
    }
}

//------------ LabelType -----------------------------------------------------

/// The type of a label.
///
/// The two top bits of the first octet of a label distinguish a direct
/// label from a compression pointer. The other two patterns are reserved
/// or used by deprecated extension mechanisms and are rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LabelType {
    /// A normal label with its length in octets.
    Normal(u8),

    /// A compressed label with the message offset of where to continue.
    Compressed(usize),
}

impl LabelType {
    /// Takes a label type from the beginning of `parser`.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let ltype = parser.parse_u8()?;
        match ltype {
            0..=MAX_LABEL_LEN => Ok(LabelType::Normal(ltype)),
            0xC0..=0xFF => {
                let res = usize::from(parser.parse_u8()?);
                let res = res | ((usize::from(ltype) & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
            _ => Err(ParseError::Form(FormError::new("invalid label type"))),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn parser_at(slice: &[u8], pos: usize) -> Parser<'_> {
        let mut parser = Parser::from_ref(slice);
        parser.seek(pos).unwrap();
        parser
    }

    #[test]
    fn direct_labels() {
        let mut parser =
            Parser::from_ref(b"\x03www\x07example\x03com\0tail");
        let name = Name::parse(&mut parser).unwrap();
        assert_eq!(name, "www.example.com");
        assert_eq!(parser.pos(), 17);
    }

    #[test]
    fn root_name() {
        let mut parser = Parser::from_ref(b"\0tail");
        let name = Name::parse(&mut parser).unwrap();
        assert!(name.is_root());
        assert_eq!(name, "");
        assert_eq!(parser.pos(), 1);
    }

    #[test]
    fn compressed_name() {
        // Name spelled out at offset 12, pointer-only name at offset 30.
        let mut buf = vec![0; 12];
        buf.extend_from_slice(b"\x03www\x07example\x03com\0"); // 12..29
        buf.push(0); // 29
        buf.extend_from_slice(b"\xc0\x0c"); // 30..32

        let mut parser = parser_at(&buf, 12);
        assert_eq!(Name::parse(&mut parser).unwrap(), "www.example.com");

        let mut parser = parser_at(&buf, 30);
        let name = Name::parse(&mut parser).unwrap();
        assert_eq!(name, "www.example.com");
        // Only the pointer itself is consumed in the linear stream.
        assert_eq!(parser.pos(), 32);
    }

    #[test]
    fn pointer_to_suffix() {
        let mut buf = vec![0; 12];
        buf.extend_from_slice(b"\x07example\x03com\0"); // 12..25
        buf.extend_from_slice(b"\x03www\xc0\x0c"); // 25..31

        let mut parser = parser_at(&buf, 25);
        assert_eq!(Name::parse(&mut parser).unwrap(), "www.example.com");
        assert_eq!(parser.pos(), 31);
    }

    #[test]
    fn forward_pointer() {
        // Pointers may point forward as long as the traversal stays
        // within the length budget.
        let buf = b"\xc0\x02\x03com\0";
        let mut parser = parser_at(buf, 0);
        let name = Name::parse(&mut parser).unwrap();
        assert_eq!(name, "com");
        assert_eq!(parser.pos(), 2);
    }

    #[test]
    fn pointer_loops() {
        // Pointer to itself.
        assert!(Name::parse(&mut parser_at(b"\xc0\x0012", 0)).is_err());
        // Two-step loop.
        assert!(
            Name::parse(&mut parser_at(b"\xc0\x02\xc0\x0012", 0)).is_err()
        );
        // Loop through a label.
        assert!(
            Name::parse(&mut parser_at(b"\x03www\xc0\x0012", 0)).is_err()
        );
    }

    #[test]
    fn truncated_names() {
        // Empty input.
        assert!(Name::parse(&mut Parser::from_ref(b"")).is_err());
        // Label running past the end.
        assert!(Name::parse(&mut Parser::from_ref(b"\x03ww")).is_err());
        // Missing root terminator.
        assert!(Name::parse(&mut Parser::from_ref(b"\x03www")).is_err());
        // Truncated pointer.
        assert!(Name::parse(&mut Parser::from_ref(b"\x03www\xc0")).is_err());
        // Pointer target outside the message.
        assert!(
            Name::parse(&mut parser_at(b"\xc0\x7f12", 0)).is_err()
        );
    }

    #[test]
    fn reserved_label_types() {
        assert_eq!(
            Name::parse(&mut Parser::from_ref(b"\x43www")),
            Err(ParseError::Form(FormError::new("invalid label type")))
        );
        assert!(Name::parse(&mut Parser::from_ref(b"\x83www")).is_err());
    }

    #[test]
    fn raw_label_octets() {
        // Label content is taken verbatim, including non-ASCII octets.
        let mut parser = Parser::from_ref(b"\x02\xff\x00\x03com\0");
        let name = Name::parse(&mut parser).unwrap();
        assert_eq!(name, b"\xff\x00.com".as_ref());
    }

    #[test]
    fn skip() {
        // Past the root label.
        let mut parser =
            Parser::from_ref(b"\x03www\x07example\x03com\0tail");
        assert_eq!(Name::skip(&mut parser), Ok(()));
        assert_eq!(parser.pos(), 17);

        // Past the first pointer, without validating its target.
        let mut parser = Parser::from_ref(b"\x03www\xc0\xee12");
        assert_eq!(Name::skip(&mut parser), Ok(()));
        assert_eq!(parser.remaining(), 2);

        // Truncation still fails.
        assert!(Name::skip(&mut Parser::from_ref(b"\x03ww")).is_err());
        assert!(Name::skip(&mut Parser::from_ref(b"\x03www\xc0")).is_err());
    }
}
