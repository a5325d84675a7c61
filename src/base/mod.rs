//! Parsing wire-format DNS messages.
//!
//! This module provides the types for taking apart a DNS message as it
//! arrives from the network. Everything operates on a complete message
//! held in a contiguous, immutable octets buffer: because of name
//! compression, parts of a message routinely refer back to earlier
//! positions, so parsing always happens relative to the whole buffer.
//! Parsed values are either plain data or views borrowing from the
//! buffer; nothing is copied except decoded domain names.
//!
//! The types build on each other from the bottom up:
//!
//! * [wire] provides the [`Parser`][wire::Parser] cursor for
//!   bounds-checked, big-endian reads, along with the error types used
//!   throughout,
//! * [header] gives typed access to the twelve octet header section,
//! * [name] decodes possibly compressed domain names,
//! * [record] walks resource records and question entries, and
//! * [message] ties it all together in [`Message`][message::Message],
//!   the validated view of a complete response.
//!
//! The [iana] module contains the parameter types for the IANA
//! registries involved: record types, classes, response codes, and
//! opcodes.
//!
//! All parsing is strictly bounded by the buffer: malformed or
//! truncated input, including adversarial compression pointer loops,
//! results in an error, never in a read past the end or an unbounded
//! computation.

pub use self::header::{Header, HeaderCounts, HeaderSection};
pub use self::message::{Message, RecordIter, MAX_UDP_MSG_SIZE};
pub use self::name::Name;
pub use self::record::{Record, RecordParser};
pub use self::wire::{FormError, ParseError, Parser};

pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod record;
pub mod wire;
