//! Zero-copy parsing of wire-format DNS response messages.
//!
//! This crate provides the building blocks for inspecting DNS responses
//! received over UDP or TCP: a bounds-checked cursor over the raw
//! octets, decoding of compressed domain names as specified in section
//! 4.1.4 of [RFC 1035], and cursors and iterators over the resource
//! records of a message. It deliberately covers only the consuming side
//! of the wire format; building queries, transports, and resolver
//! policy are the business of the caller.
//!
//! The entry point is [`Message`][base::message::Message], created from
//! the octets of a received message:
//!
//! ```
//! use dns_view::base::iana::Rtype;
//! use dns_view::base::message::Message;
//!
//! let buf: &[u8] = b"\x12\x34\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00\
//!     \x03com\x00\x00\x01\x00\x01\
//!     \xc0\x0c\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04\x7f\x00\x00\x01";
//! let msg = Message::from_octets(buf).unwrap();
//! assert!(msg.no_error());
//! assert_eq!(msg.qtype().unwrap(), Rtype::A);
//! for record in msg.answers() {
//!     let record = record.unwrap();
//!     assert_eq!(*record.owner(), "com");
//!     assert_eq!(record.rdata(), b"\x7f\x00\x00\x01");
//! }
//! ```
//!
//! Since message buffers come from the network, all parsing treats its
//! input as untrusted: every operation is bounds-checked and returns an
//! error on malformed data rather than panicking, and compression
//! pointer loops are detected and rejected.
//!
//! # Feature Flags
//!
//! * `serde`: implements `Serialize` and `Deserialize` for the IANA
//!   parameter types and for [`Name`][base::name::Name].
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

pub mod base;
