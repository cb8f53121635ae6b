//! Request issuing layer for one-shot HTTP calls.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP transports ([`HttpTransport`])
//! - Production transport implementation ([`ReqwestTransport`])
//! - Issuing requests through an interceptor pipeline ([`RequestIssuer`])
//! - Single-shot outcome observation with cancellation ([`Delivery`])

mod error;
mod http;
mod issue;
mod transport;

#[cfg(test)]
mod issue_tests;

pub use error::TransportError;
pub use http::{HttpRequest, HttpResponse, HttpTransport};
pub use issue::{Delivery, RequestIssuer};
pub use transport::ReqwestTransport;
