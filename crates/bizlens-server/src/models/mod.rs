//! API Models
//!
//! Request/response DTOs for the HTTP surface.

pub mod insight;

pub use insight::{BusinessDataRequest, BusinessDataResponse, RegenerateHeadlineParams};
