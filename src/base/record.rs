//! Resource records.
//!
//! This module provides [`Record`], the parsed view of a single resource
//! record in a DNS message, and [`RecordParser`], the cursor that walks
//! the entries of a message section one record at a time.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{ParseError, Parser};

//------------ Record --------------------------------------------------------

/// A resource record parsed from a DNS message.
///
/// A record consists of the owner name it pertains to, its type and
/// class, the time-to-live, and the type-specific record data. The
/// record data is kept as the raw octets of the message, so a record is
/// only valid for as long as the message it was parsed from.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    /// The owner of the record.
    owner: Name,

    /// The record type.
    rtype: Rtype,

    /// The class of the record.
    class: Class,

    /// The time-to-live of the record in seconds.
    ttl: u32,

    /// The record data, exactly RDLENGTH octets of the message.
    rdata: &'a [u8],
}

impl<'a> Record<'a> {
    /// Returns a reference to the owner of the record.
    #[must_use]
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class of the record.
    #[must_use]
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the time-to-live of the record in seconds.
    #[must_use]
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns the record data as the raw octets of the message.
    #[must_use]
    pub fn rdata(&self) -> &'a [u8] {
        self.rdata
    }
}

//------------ RecordParser --------------------------------------------------

/// A cursor over the entries of a DNS message.
///
/// The parser is a lightweight value holding the message octets and a
/// position, and can be freely copied; copies share the message but
/// advance independently. Both operations either advance past one entry
/// or fail, leaving the position unchanged. Since entries borrow each
/// other's octets through compression, there is no way to resynchronize
/// after a failure; the whole message must be considered malformed.
#[derive(Clone, Copy, Debug)]
pub struct RecordParser<'a> {
    parser: Parser<'a>,
}

impl<'a> RecordParser<'a> {
    /// Creates a parser over a message, positioned at `pos`.
    ///
    /// There is deliberately no public way to obtain a record parser
    /// other than from a [`Message`], which guarantees that `pos` is the
    /// start of an entry.
    ///
    /// [`Message`]: super::message::Message
    pub(super) fn new(message: &'a [u8], pos: usize) -> Self {
        let mut parser = Parser::from_ref(message);
        parser.seek(pos).expect("position beyond end of message");
        RecordParser { parser }
    }

    /// Returns the current position from the beginning of the message.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.parser.pos()
    }

    /// Takes the resource record at the current position.
    ///
    /// On success, the cursor is advanced to right behind the record's
    /// data. On failure the cursor is left unchanged.
    pub fn read_record(&mut self) -> Result<Record<'a>, ParseError> {
        let mut parser = self.parser;
        let owner = Name::parse(&mut parser)?;
        let rtype = Rtype::parse(&mut parser)?;
        let class = Class::parse(&mut parser)?;
        let ttl = parser.parse_u32()?;
        let rdlen = parser.parse_u16()?;
        let rdata = parser.parse_octets(rdlen.into())?;
        self.parser = parser;
        Ok(Record {
            owner,
            rtype,
            class,
            ttl,
            rdata,
        })
    }

    /// Skips over the question at the current position.
    ///
    /// The question's name is not decoded and, if compressed, its pointer
    /// target is not validated. On success, the cursor is advanced to
    /// right behind the question's class field. On failure the cursor is
    /// left unchanged.
    pub fn skip_question(&mut self) -> Result<(), ParseError> {
        let mut parser = self.parser;
        Name::skip(&mut parser)?;
        // QTYPE and QCLASS.
        parser.advance(4)?;
        self.parser = parser;
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    // A message fragment: 12 octet header, question for `com`, then one
    // A record whose owner is a pointer to the question's name.
    fn message() -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"\x12\x34\x81\x80"); // 0: id, flags
        buf.extend_from_slice(b"\x00\x01\x00\x01\x00\x00\x00\x00"); // counts
        buf.extend_from_slice(b"\x03com\0"); // 12: QNAME
        buf.extend_from_slice(b"\x00\x01\x00\x01"); // 17: QTYPE, QCLASS
        buf.extend_from_slice(b"\xc0\x0c"); // 21: owner
        buf.extend_from_slice(b"\x00\x01\x00\x01"); // 23: TYPE, CLASS
        buf.extend_from_slice(b"\x00\x00\x01\x2c"); // 27: TTL 300
        buf.extend_from_slice(b"\x00\x04"); // 31: RDLENGTH
        buf.extend_from_slice(b"\x7f\x00\x00\x01"); // 33: RDATA
        buf
    }

    #[test]
    fn skip_question() {
        let buf = message();
        let mut parser = RecordParser::new(&buf, 12);
        assert_eq!(parser.skip_question(), Ok(()));
        assert_eq!(parser.pos(), 21);
    }

    #[test]
    fn skip_question_truncated() {
        let buf = &message()[..19];
        let mut parser = RecordParser::new(buf, 12);
        assert_eq!(parser.skip_question(), Err(ParseError::ShortInput));
        assert_eq!(parser.pos(), 12);
    }

    #[test]
    fn read_record() {
        let buf = message();
        let mut parser = RecordParser::new(&buf, 21);
        let record = parser.read_record().unwrap();
        assert_eq!(*record.owner(), "com");
        assert_eq!(record.rtype(), Rtype::A);
        assert_eq!(record.class(), Class::IN);
        assert_eq!(record.ttl(), 300);
        assert_eq!(record.rdata(), b"\x7f\x00\x00\x01");
        assert_eq!(parser.pos(), buf.len());

        // The record data is a view into the message, not a copy.
        assert!(std::ptr::eq(record.rdata().as_ptr(), buf[33..].as_ptr()));
    }

    #[test]
    fn read_record_failures() {
        let buf = message();

        // Truncated in every field after the owner name.
        for end in 22..buf.len() {
            let mut parser = RecordParser::new(&buf[..end], 21);
            assert!(parser.read_record().is_err());
            assert_eq!(parser.pos(), 21);
        }

        // RDLENGTH larger than the remaining octets.
        let mut buf = message();
        buf[32] = 0x05;
        let mut parser = RecordParser::new(&buf, 21);
        assert!(parser.read_record().is_err());
        assert_eq!(parser.pos(), 21);
    }

    #[test]
    fn copies_are_independent() {
        let buf = message();
        let mut parser = RecordParser::new(&buf, 21);
        let copy = parser;
        parser.read_record().unwrap();
        assert_eq!(parser.pos(), buf.len());
        assert_eq!(copy.pos(), 21);
    }
}
