//! bizlens API Routes
//!
//! - /business-data - full insight for a (name, location) pair
//! - /regenerate-headline - fresh headline only

pub mod insight;
pub mod swagger;
