//! Resource Record (RR) TYPEs.

use crate::base::wire::{ParseError, Parser};

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource record types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind
    /// of information is represented by the record. A normal query
    /// includes the type of record information requested. A few
    /// additional types, called query types, are defined as well and can
    /// only be used in questions. This type represents both.
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    /// Only the types relevant when inspecting responses are given
    /// constants here; all other values are still representable.
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// A IPv6 host address.
    (AAAA => 28, "AAAA")

    /// Server selection.
    (SRV => 33, "SRV")

    /// Pseudo-record type for EDNS.
    (OPT => 41, "OPT")

    /// HTTPS binding.
    (HTTPS => 65, "HTTPS")

    /// A request for all records the server/cache has available.
    (ANY => 255, "ANY")
}

impl Rtype {
    /// Takes a record type from the beginning of `parser`.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        parser.parse_u16().map(Self::from_int)
    }
}

//============ Testing =======================================================
