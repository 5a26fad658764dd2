//! Infrastructure Services
//!
//! Concrete implementations of the domain ports plus the simulated
//! network transport.

pub mod clock;
pub mod transport;
