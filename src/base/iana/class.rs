//! DNS CLASSes.

use crate::base::wire::{ParseError, Parser};

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. That is, each class is its own separate
    /// domain name space with its own set of resource records. In
    /// practice, only the Internet class `IN` is in use.
    ///
    /// In addition, there are query classes that can only appear in the
    /// question section or in OPT and TSIG pseudo-records.
    =>
    Class, u16;

    /// The Internet class.
    (IN => 1, "IN")

    /// The CHAOS class.
    (CH => 3, "CH")

    /// The Hesiod class.
    (HS => 4, "HS")

    /// Query class None, defined in RFC 2136.
    (NONE => 254, "NONE")

    /// Query class Any.
    (ANY => 255, "ANY")
}

impl Class {
    /// Takes a class from the beginning of `parser`.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        parser.parse_u16().map(Self::from_int)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn conversion() {
        assert_eq!(Class::IN.to_int(), 1);
        assert_eq!(Class::from_int(255), Class::ANY);
        assert_eq!(u16::from(Class::CH), 3);
        assert_eq!(format!("{}", Class::IN), "IN");
        assert_eq!(format!("{}", Class::from_int(42)), "42");
    }
}
