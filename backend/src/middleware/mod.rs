//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such as
//! trace identifiers and per-request logging.

pub mod trace;

pub use trace::Trace;
