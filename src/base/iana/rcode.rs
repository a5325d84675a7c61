//! DNS response codes.
//!
//! The original DNS specification in [RFC 1035] specified four bits of
//! the message header as the response code. The type [`Rcode`] defined
//! herein represents these codes. The extended response codes added by
//! EDNS and TSIG share the same definition space but live in other parts
//! of a message and are out of scope for response inspection.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS response codes.
    ///
    /// The response code of a response indicates what happened on the
    /// server when trying to answer the query. The code is a 4 bit value
    /// and part of the header of a DNS message.
    ///
    /// The currently assigned values are maintained in the
    /// [IANA DNS RCODEs registry].
    ///
    /// [IANA DNS RCODEs registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-6
    =>
    Rcode, u8;

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// The name server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// The name server was unable to process this query due to a problem
    /// with the name server.
    (SERVFAIL => 2, "SERVFAIL")

    /// The domain name referenced in the query does not exist.
    ///
    /// Only meaningful in responses from an authoritative name server.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// The name server does not support the requested kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// The name server refuses to perform the specified operation for
    /// policy reasons.
    (REFUSED => 5, "REFUSED")

    /// A name exists when it should not (RFC 2136).
    (YXDOMAIN => 6, "YXDOMAIN")

    /// A resource record set exists that should not (RFC 2136).
    (YXRRSET => 7, "YXRRSET")

    /// A resource record set that should exist does not (RFC 2136).
    (NXRRSET => 8, "NXRRSET")

    /// The server is not authoritative for the zone named in the query.
    (NOTAUTH => 9, "NOTAUTH")

    /// A name used in the prerequisite or update section is not within
    /// the zone given in the zone section (RFC 2136).
    (NOTZONE => 10, "NOTZONE")
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn conversion() {
        assert_eq!(Rcode::NOERROR.to_int(), 0);
        assert_eq!(Rcode::from_int(3), Rcode::NXDOMAIN);
        assert_eq!(format!("{}", Rcode::SERVFAIL), "SERVFAIL");
        assert_eq!(format!("{}", Rcode::from_int(13)), "13");
    }
}
