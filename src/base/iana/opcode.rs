//! DNS OpCodes.

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query to be performed. It is a
    /// four bit field in the header of a DNS message.
    =>
    Opcode, u8;

    /// A standard query.
    (QUERY => 0, "QUERY")

    /// An inverse query, obsoleted by RFC 3425.
    (IQUERY => 1, "IQUERY")

    /// A server status request.
    (STATUS => 2, "STATUS")

    /// A NOTIFY query per RFC 1996.
    (NOTIFY => 4, "NOTIFY")

    /// An UPDATE query per RFC 2136.
    (UPDATE => 5, "UPDATE")
}
