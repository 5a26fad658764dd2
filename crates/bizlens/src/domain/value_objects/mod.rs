//! Value Objects
//!
//! Immutable value types of the insight domain.

pub mod headline;

pub use headline::{HeadlineTemplate, TEMPLATES, TEMPLATE_COUNT};
