//! Interceptor pipeline applied to every request outcome.
//!
//! This module provides:
//! - The outcome sum type for one request attempt ([`Outcome`], [`Failure`])
//! - Ordered stage composition ([`Stage`], [`Pipeline`])
//! - The error-normalizing stage ([`ErrorNormalizer`])
//!
//! # Design
//!
//! "Applies to every request" is modeled as explicit composition rather
//! than hidden global state: the issuer is constructed with an ordered
//! list of stages and folds each raw outcome through them in
//! registration order.

mod normalizer;
mod outcome;
mod stage;


pub use normalizer::ErrorNormalizer;
pub use outcome::{Failure, Outcome};
pub use stage::{Pipeline, Stage};
