//! Transaction Source contract.
//!
//! The formatter is polymorphic over these two read-only capability sets:
//! it does not care which HTTP framework produced the transaction, only
//! that these accessors exist. Absent optional headers are `None`, never an
//! error, and no accessor may mutate the transaction.

use std::time::Duration;

/// An inbound request-in-flight, observed once its response status is known.
pub trait RequestTransaction {
    /// Client IP address, as text.
    fn remote_ip(&self) -> &str;

    /// HTTP method of the request.
    fn method(&self) -> &str;

    /// Request URI as received.
    fn uri(&self) -> &str;

    /// HTTP status of the response being sent.
    fn status(&self) -> u16;

    /// Wall-clock time spent processing the request so far.
    fn elapsed(&self) -> Duration;

    /// A header of the inbound request (e.g. `User-Agent`, `Referer`).
    /// Lookup is case-insensitive; absent headers yield `None`.
    fn request_header(&self, name: &str) -> Option<&str>;

    /// A header of the outgoing response (e.g. `Content-Length`).
    /// Lookup is case-insensitive; absent headers yield `None`.
    fn response_header(&self, name: &str) -> Option<&str>;
}

/// A completed response to a relayed (proxied) upstream request.
///
/// `method` and `url` describe the original request embedded in the
/// response, not the response itself.
pub trait ResponseTransaction {
    /// HTTP method of the original request.
    fn method(&self) -> &str;

    /// URL of the original request.
    fn url(&self) -> &str;

    /// HTTP status of the response.
    fn status(&self) -> u16;

    /// Wall-clock time the relayed request took.
    fn elapsed(&self) -> Duration;

    /// A response header (e.g. `Content-Length`). Lookup is
    /// case-insensitive; absent headers yield `None`.
    fn header(&self, name: &str) -> Option<&str>;
}
