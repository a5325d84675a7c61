//! IANA definitions for DNS.
//!
//! This module contains types for parameters defined in IANA registries
//! that are relevant when inspecting DNS responses.
//!
//! All types follow the same basic structure: a newtype around the raw
//! integer with the well-defined values as associated constants. Since we
//! cannot restrict the integer to only the defined values, the full set
//! of possible values is always representable, and a well-defined value
//! compares equal to the raw value it wraps.
//!
//! While each parameter type has a module of its own, they are all
//! re-exported here.

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod rcode;
pub mod rtype;
