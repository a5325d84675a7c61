//! Accessing DNS response messages.
//!
//! This module provides [`Message`], a view of a DNS message in wire
//! format that validates the question section up front and hands out
//! cursors and iterators for the resource records that follow it.

use super::header::{Header, HeaderCounts, HeaderSection};
use super::iana::Rtype;
use super::record::{Record, RecordParser};
use super::wire::{ParseError, Parser};
use core::mem;

/// The conventional maximum size of a DNS message carried over UDP.
///
/// Callers without EDNS will usually size their receive buffers to this.
/// The parser itself only ever relies on the actual length of the octets
/// it is given.
pub const MAX_UDP_MSG_SIZE: usize = 512;

//------------ Message -------------------------------------------------------

/// A DNS message in wire format.
///
/// The message can be atop any octets sequence, most commonly the buffer
/// a response was received into, either owned or borrowed. It is created
/// via [`from_octets`][Self::from_octets], which checks that the octets
/// start with a complete header and contain as many well-formed
/// questions as the header claims. A value therefore always sits in
/// front of a syntactically intact question section; everything past it
/// is validated lazily as records are read.
///
/// The message never copies any of the octets: records parsed out of it
/// borrow from them.
#[derive(Clone, Debug)]
pub struct Message<Octs> {
    /// The octets of the message.
    octets: Octs,

    /// The offset of the first entry past the question section.
    answer_start: usize,
}

/// # Creation and Conversion
///
impl<Octs: AsRef<[u8]>> Message<Octs> {
    /// Creates a message from an octets sequence.
    ///
    /// The octets must contain the complete message; for a buffer only
    /// partially filled by a socket read, pass the filled prefix.
    ///
    /// This fails if the octets are too short to contain a complete
    /// header section or if skipping over the questions announced by the
    /// header runs into malformed data or past the end of the octets.
    pub fn from_octets(octets: Octs) -> Result<Self, ParseError> {
        let slice = octets.as_ref();
        if slice.len() < mem::size_of::<HeaderSection>() {
            return Err(ParseError::ShortInput);
        }
        let qdcount = HeaderCounts::for_message_slice(slice).qdcount();
        let mut parser = RecordParser::new(slice, mem::size_of::<HeaderSection>());
        for _ in 0..qdcount {
            parser.skip_question()?;
        }
        let answer_start = parser.pos();
        Ok(Message {
            octets,
            answer_start,
        })
    }

    /// Returns a reference to the underlying octets sequence.
    pub fn as_octets(&self) -> &Octs {
        &self.octets
    }

    /// Converts the message into the underlying octets sequence.
    pub fn into_octets(self) -> Octs {
        self.octets
    }

    /// Returns the message octets as a slice.
    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Returns a message atop a slice of this message's octets.
    pub fn for_slice(&self) -> Message<&[u8]> {
        Message {
            octets: self.octets.as_ref(),
            answer_start: self.answer_start,
        }
    }
}

/// # Header and Question Section
///
impl<Octs: AsRef<[u8]>> Message<Octs> {
    /// Returns the message header.
    pub fn header(&self) -> Header {
        Header::for_message_slice(self.as_slice())
    }

    /// Returns the header counts of the message.
    pub fn header_counts(&self) -> HeaderCounts {
        HeaderCounts::for_message_slice(self.as_slice())
    }

    /// Returns whether the rcode of the header is NoError.
    pub fn no_error(&self) -> bool {
        self.header().rcode() == super::iana::Rcode::NOERROR
    }

    /// Returns whether the rcode of the header is one of the error values.
    pub fn is_error(&self) -> bool {
        !self.no_error()
    }

    /// Returns the wire-format QNAME of the message's question.
    ///
    /// This is the name as it appears in the message, i.e., as a
    /// sequence of length-prefixed labels, not decompressed or decoded.
    /// Questions in a response are expected to spell their name out
    /// directly rather than compress it.
    ///
    /// The question's position can only be computed back from the end of
    /// the question section when there is exactly one question; for any
    /// other count an error is returned. Responses to ordinary queries
    /// always carry exactly one question.
    pub fn qname(&self) -> Result<&[u8], ParseError> {
        let start = self.single_question_start()?;
        Ok(&self.as_slice()[start..self.answer_start - 4])
    }

    /// Returns the QTYPE of the message's question.
    ///
    /// Like [`qname`][Self::qname], this requires the message to contain
    /// exactly one question.
    pub fn qtype(&self) -> Result<Rtype, ParseError> {
        let _ = self.single_question_start()?;
        let mut parser = Parser::from_ref(self.as_slice());
        parser.seek(self.answer_start - 4)?;
        Rtype::parse(&mut parser)
    }

    /// Returns the offset of the question if it is the only one.
    fn single_question_start(&self) -> Result<usize, ParseError> {
        if self.header_counts().qdcount() != 1 {
            return Err(ParseError::form_error(
                "not a single-question message",
            ));
        }
        Ok(mem::size_of::<HeaderSection>())
    }
}

/// # Access to Records
///
impl<Octs: AsRef<[u8]>> Message<Octs> {
    /// Returns a record parser positioned at the answer section.
    ///
    /// The parser is an independent copy; reading records through it
    /// does not affect the message or other parsers. The records of the
    /// answer, authority, and additional sections follow each other, so
    /// the parser can walk all of them. How many entries each section
    /// holds is given by [`header_counts`][Self::header_counts].
    pub fn answer(&self) -> RecordParser<'_> {
        RecordParser::new(self.as_slice(), self.answer_start)
    }

    /// Returns an iterator over the records of the answer section.
    pub fn answers(&self) -> RecordIter<'_> {
        RecordIter {
            parser: self.answer(),
            count: Ok(self.header_counts().ancount()),
        }
    }
}

//------------ RecordIter ----------------------------------------------------

/// An iterator over the records of a message section.
///
/// The iterator yields as many records as the message header announced
/// for the section. If reading a record fails, the error is yielded once
/// and the iterator is fused, since there is no way to find the start of
/// the next record after malformed data.
#[derive(Clone, Copy, Debug)]
pub struct RecordIter<'a> {
    /// The parser for generating the records.
    parser: RecordParser<'a>,

    /// The remaining number of records.
    ///
    /// The `Result` is here to monitor an error during iteration and
    /// fuse the iterator afterwards.
    count: Result<u16, ParseError>,
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = Result<Record<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.count {
            Ok(count) if count > 0 => match self.parser.read_record() {
                Ok(record) => {
                    self.count = Ok(count - 1);
                    Some(Ok(record))
                }
                Err(err) => {
                    self.count = Err(err);
                    Some(Err(err))
                }
            },
            _ => None,
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, Opcode, Rcode};

    // A response for `com A` with one answer whose owner is a pointer
    // back to the question's name.
    fn response() -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"\x12\x34\x81\x80"); // id, flags
        buf.extend_from_slice(b"\x00\x01\x00\x01\x00\x00\x00\x00");
        buf.extend_from_slice(b"\x03com\0\x00\x01\x00\x01"); // question
        buf.extend_from_slice(b"\xc0\x0c\x00\x01\x00\x01"); // owner, type, class
        buf.extend_from_slice(b"\x00\x00\x01\x2c\x00\x04"); // ttl, rdlength
        buf.extend_from_slice(b"\x7f\x00\x00\x01"); // rdata
        buf
    }

    #[test]
    fn short_message() {
        assert!(Message::from_octets(&[0u8; 11][..]).is_err());
        assert!(Message::from_octets(&[0u8; 12][..]).is_ok());
    }

    #[test]
    fn question_count_mismatch() {
        // The header claims two questions but the message ends after the
        // first one.
        let mut buf = response();
        buf.truncate(21);
        buf[5] = 2;
        assert!(Message::from_octets(buf.as_slice()).is_err());
    }

    #[test]
    fn no_questions() {
        let buf = b"\x12\x34\x81\x80\x00\x00\x00\x00\x00\x00\x00\x00";
        let msg = Message::from_octets(&buf[..]).unwrap();
        assert_eq!(msg.answer().pos(), 12);
        assert!(msg.qname().is_err());
        assert!(msg.qtype().is_err());
    }

    #[test]
    fn header_access() {
        let buf = response();
        let msg = Message::from_octets(buf.as_slice()).unwrap();
        assert_eq!(msg.header().id(), 0x1234);
        assert!(msg.header().qr());
        assert_eq!(msg.header().opcode(), Opcode::QUERY);
        assert_eq!(msg.header().rcode(), Rcode::NOERROR);
        assert_eq!(msg.header().flags(), 0x8180);
        assert!(msg.no_error());
        assert!(!msg.is_error());
        assert_eq!(msg.header_counts().qdcount(), 1);
        assert_eq!(msg.header_counts().ancount(), 1);
        assert_eq!(msg.header_counts().arcount(), 0);
    }

    #[test]
    fn question_access() {
        let buf = response();
        let msg = Message::from_octets(buf.as_slice()).unwrap();
        assert_eq!(msg.qname().unwrap(), b"\x03com\0");
        assert_eq!(msg.qtype().unwrap(), Rtype::A);
    }

    #[test]
    fn answer_records() {
        let buf = response();
        let msg = Message::from_octets(buf.as_slice()).unwrap();

        let mut parser = msg.answer();
        assert_eq!(parser.pos(), 21);
        let record = parser.read_record().unwrap();
        assert_eq!(*record.owner(), "com");
        assert_eq!(record.rtype(), Rtype::A);
        assert_eq!(record.class(), Class::IN);
        assert_eq!(record.ttl(), 300);
        assert_eq!(record.rdata(), &buf[buf.len() - 4..]);

        let mut iter = msg.answers();
        assert_eq!(*iter.next().unwrap().unwrap().owner(), "com");
        assert!(iter.next().is_none());
    }

    #[test]
    fn answers_fuse_after_error() {
        // ANCOUNT claims two records but only one is present.
        let mut buf = response();
        buf[7] = 2;
        let msg = Message::from_octets(buf.as_slice()).unwrap();
        let mut iter = msg.answers();
        assert!(iter.next().unwrap().is_ok());
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }

    #[test]
    fn multi_question_refused() {
        // Two well-formed questions parse fine, but the question
        // accessors refuse to guess which one to report.
        let mut buf = Vec::new();
        buf.extend_from_slice(b"\x12\x34\x81\x80");
        buf.extend_from_slice(b"\x00\x02\x00\x00\x00\x00\x00\x00");
        buf.extend_from_slice(b"\x03com\0\x00\x01\x00\x01");
        buf.extend_from_slice(b"\x03org\0\x00\x01\x00\x01");
        let msg = Message::from_octets(buf.as_slice()).unwrap();
        assert_eq!(msg.answer().pos(), 30);
        assert!(msg.qname().is_err());
        assert!(msg.qtype().is_err());
    }

    #[test]
    fn owned_octets() {
        let msg = Message::from_octets(response()).unwrap();
        assert_eq!(msg.for_slice().qname().unwrap(), b"\x03com\0");
        assert_eq!(msg.as_octets().len(), msg.as_slice().len());
        let octets = msg.into_octets();
        assert_eq!(octets, response());
    }
}
