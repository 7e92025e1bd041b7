//! Core Components
//!
//! Infrastructure for sign-in operations: HTTP transport and request
//! normalization.

pub mod normalize;
pub mod transport;

pub use normalize::*;
pub use transport::*;
