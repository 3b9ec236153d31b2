//! Transaction adapters for `axum::http` types.
//!
//! # Responsibilities
//! - Bridge framework request/response parts to the Transaction Source
//!   contract without copying header maps
//! - Degrade absent or non-UTF-8 header values to `None`
//!
//! # Design Decisions
//! - Adapters borrow: the handler keeps ownership of its parts and the
//!   original request stays untouched
//! - The URI is rendered once at construction; the traits hand out `&str`

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{HeaderMap, Method, StatusCode, Uri};

use crate::transaction::{RequestTransaction, ResponseTransaction};

/// Audit view of an inbound request once its response status is known.
pub struct HttpRequestLog<'a> {
    remote_ip: String,
    method: &'a Method,
    uri: String,
    status: StatusCode,
    elapsed: Duration,
    request_headers: &'a HeaderMap,
    response_headers: &'a HeaderMap,
}

impl<'a> HttpRequestLog<'a> {
    pub fn new(
        remote_addr: SocketAddr,
        method: &'a Method,
        uri: &Uri,
        status: StatusCode,
        elapsed: Duration,
        request_headers: &'a HeaderMap,
        response_headers: &'a HeaderMap,
    ) -> Self {
        Self {
            remote_ip: remote_addr.ip().to_string(),
            method,
            uri: uri.to_string(),
            status,
            elapsed,
            request_headers,
            response_headers,
        }
    }
}

impl RequestTransaction for HttpRequestLog<'_> {
    fn remote_ip(&self) -> &str {
        &self.remote_ip
    }

    fn method(&self) -> &str {
        self.method.as_str()
    }

    fn uri(&self) -> &str {
        &self.uri
    }

    fn status(&self) -> u16 {
        self.status.as_u16()
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn request_header(&self, name: &str) -> Option<&str> {
        header_str(self.request_headers, name)
    }

    fn response_header(&self, name: &str) -> Option<&str> {
        header_str(self.response_headers, name)
    }
}

/// Audit view of a completed relayed response, paired with the method and
/// URL of the upstream request it answers.
pub struct HttpResponseLog<'a> {
    method: &'a Method,
    url: String,
    status: StatusCode,
    elapsed: Duration,
    headers: &'a HeaderMap,
}

impl<'a> HttpResponseLog<'a> {
    pub fn new(
        method: &'a Method,
        url: &Uri,
        status: StatusCode,
        elapsed: Duration,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            method,
            url: url.to_string(),
            status,
            elapsed,
            headers,
        }
    }
}

impl ResponseTransaction for HttpResponseLog<'_> {
    fn method(&self) -> &str {
        self.method.as_str()
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn status(&self) -> u16 {
        self.status.as_u16()
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn header(&self, name: &str) -> Option<&str> {
        header_str(self.headers, name)
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
