//! Shared fixtures for audit-log integration tests.

use std::collections::HashMap;
use std::time::Duration;

use srvlog::{RequestTransaction, ResponseTransaction};

/// A minimal request transaction with every accessor under test control.
pub struct TestRequest {
    pub ip: String,
    pub method: String,
    pub uri: String,
    pub status: u16,
    pub elapsed: Duration,
    pub request_headers: HashMap<String, String>,
    pub response_headers: HashMap<String, String>,
}

impl TestRequest {
    pub fn get_ows() -> Self {
        Self {
            ip: "10.0.0.1".to_string(),
            method: "GET".to_string(),
            uri: "/ows".to_string(),
            status: 200,
            elapsed: Duration::from_secs_f64(0.1234),
            request_headers: HashMap::from([("User-Agent".to_string(), "curl/8.0".to_string())]),
            response_headers: HashMap::from([("Content-Length".to_string(), "532".to_string())]),
        }
    }
}

impl RequestTransaction for TestRequest {
    fn remote_ip(&self) -> &str {
        &self.ip
    }
    fn method(&self) -> &str {
        &self.method
    }
    fn uri(&self) -> &str {
        &self.uri
    }
    fn status(&self) -> u16 {
        self.status
    }
    fn elapsed(&self) -> Duration {
        self.elapsed
    }
    fn request_header(&self, name: &str) -> Option<&str> {
        self.request_headers.get(name).map(String::as_str)
    }
    fn response_header(&self, name: &str) -> Option<&str> {
        self.response_headers.get(name).map(String::as_str)
    }
}

/// A minimal relayed-response transaction.
#[allow(dead_code)]
pub struct TestResponse {
    pub method: String,
    pub url: String,
    pub status: u16,
    pub elapsed: Duration,
    pub headers: HashMap<String, String>,
}

impl ResponseTransaction for TestResponse {
    fn method(&self) -> &str {
        &self.method
    }
    fn url(&self) -> &str {
        &self.url
    }
    fn status(&self) -> u16 {
        self.status
    }
    fn elapsed(&self) -> Duration {
        self.elapsed
    }
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
