//! Parsing DNS wire-format data.
//!
//! This module provides [`Parser`], a cursor over the octets of a DNS
//! message that reads big-endian integers and octet spans while checking
//! that it never runs past the end of the message, as well as the error
//! types shared by everything that parses wire data.

use core::fmt;

//------------ Parser --------------------------------------------------------

/// A cursor for parsing the content of an octets sequence.
///
/// The parser is a small value combining a reference to the underlying
/// octets with the current read position and the sequence's length. It
/// can be copied cheaply; copies share the octets but have independent
/// positions.
///
/// All read methods are all-or-nothing: if there aren't enough octets
/// left, they return an error and leave the position unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'a> {
    /// The underlying octets.
    octets: &'a [u8],

    /// The current position of the parser from the beginning of `octets`.
    pos: usize,

    /// The length of the octets sequence.
    len: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser atop an octets slice.
    #[must_use]
    pub fn from_ref(octets: &'a [u8]) -> Self {
        Parser {
            octets,
            pos: 0,
            len: octets.len(),
        }
    }

    /// Returns the underlying octets slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [u8] {
        self.octets
    }

    /// Returns the current parse position as an index into the slice.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the length of the underlying octets sequence.
    ///
    /// This is _not_ the number of octets left for parsing. Use
    /// [`remaining`][Self::remaining] for that.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the underlying octets sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of remaining octets to parse.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.len - self.pos
    }

    /// Returns a slice containing the next `len` octets without advancing.
    pub fn peek(&self, len: usize) -> Result<&'a [u8], ParseError> {
        self.check_len(len)?;
        Ok(&self.octets[self.pos..self.pos + len])
    }

    /// Returns a slice of the octets left to parse.
    #[must_use]
    pub fn peek_all(&self) -> &'a [u8] {
        &self.octets[self.pos..]
    }

    /// Repositions the parser to the given index.
    ///
    /// If `pos` is larger than the length of the parser, an error is
    /// returned.
    pub fn seek(&mut self, pos: usize) -> Result<(), ParseError> {
        if pos > self.len {
            Err(ParseError::ShortInput)
        } else {
            self.pos = pos;
            Ok(())
        }
    }

    /// Advances the parser's position by `len` octets.
    ///
    /// If this would take the parser beyond its end, an error is returned
    /// and the position is left unchanged.
    pub fn advance(&mut self, len: usize) -> Result<(), ParseError> {
        if len > self.remaining() {
            Err(ParseError::ShortInput)
        } else {
            self.pos += len;
            Ok(())
        }
    }

    /// Checks that there are `len` octets left to parse.
    pub fn check_len(&self, len: usize) -> Result<(), ParseError> {
        if self.remaining() < len {
            Err(ParseError::ShortInput)
        } else {
            Ok(())
        }
    }

    /// Takes and returns the next `len` octets.
    ///
    /// Advances the parser by `len` octets. The returned slice is a view
    /// into the underlying octets, nothing is copied.
    pub fn parse_octets(&mut self, len: usize) -> Result<&'a [u8], ParseError> {
        let res = self.peek(len)?;
        self.pos += len;
        Ok(res)
    }

    /// Takes a `u8` from the beginning of the parser.
    pub fn parse_u8(&mut self) -> Result<u8, ParseError> {
        let res = self.peek(1)?[0];
        self.pos += 1;
        Ok(res)
    }

    /// Takes a `u16` from the beginning of the parser.
    ///
    /// The value is converted from network byte order into the system's
    /// own byte order. The parser is advanced by two octets.
    pub fn parse_u16(&mut self) -> Result<u16, ParseError> {
        let res = self.peek(2)?;
        let res = u16::from_be_bytes([res[0], res[1]]);
        self.pos += 2;
        Ok(res)
    }

    /// Takes a `u32` from the beginning of the parser.
    ///
    /// The value is converted from network byte order into the system's
    /// own byte order. The parser is advanced by four octets.
    pub fn parse_u32(&mut self) -> Result<u32, ParseError> {
        let res = self.peek(4)?;
        let res = u32::from_be_bytes([res[0], res[1], res[2], res[3]]);
        self.pos += 4;
        Ok(res)
    }
}

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to go beyond the end of the parser.
    ShortInput,

    /// A formatting error occurred.
    Form(FormError),
}

impl ParseError {
    /// Creates a new parse error as a form error with the given message.
    #[must_use]
    pub fn form_error(msg: &'static str) -> Self {
        FormError::new(msg).into()
    }
}

//--- From

impl From<FormError> for ParseError {
    fn from(err: FormError) -> Self {
        ParseError::Form(err)
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::ShortInput => f.write_str("unexpected end of input"),
            ParseError::Form(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {}

//------------ FormError -----------------------------------------------------

/// A formatting error occurred.
///
/// This is a generic error for all kinds of error cases that result in
/// data not being accepted. For diagnostics, the error is being given a
/// static string describing the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    /// Creates a new form error value with the given diagnostics string.
    #[must_use]
    pub fn new(msg: &'static str) -> Self {
        FormError(msg)
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FormError {}

//============ Testing =======================================================
