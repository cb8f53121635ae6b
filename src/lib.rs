//! API-Probe: HTTP error-normalizing probe
//!
//! A library for issuing one-shot HTTP requests through an interceptor
//! pipeline that normalizes transport failures into readable diagnostics.

pub mod config;
pub mod issuer;
pub mod pipeline;
