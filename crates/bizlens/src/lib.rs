//! bizlens Domain Library
//!
//! Core domain types and interfaces for the bizlens business-insight
//! dashboard.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (BusinessQuery, BusinessInsight, InsightSlot)
//!   - `value_objects/`: Immutable value types (HeadlineTemplate)
//!   - `services/`: Deterministic insight generation
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Clock and insight-provider interfaces
//!
//! The domain layer performs no I/O: insight generation is a pure
//! function of the query text, and the only external entropy (the
//! regeneration timestamp) arrives through the [`Clock`] port.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bizlens::{BusinessQuery, InsightGenerator};
//!
//! let query = BusinessQuery::new("Cake & Co", "Mumbai")?;
//! let insight = InsightGenerator::new().generate(&query);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    BusinessInsight, BusinessQuery, DomainError, HeadlineTemplate, InsightGenerator, InsightSlot,
    TEMPLATES, TEMPLATE_COUNT,
};
pub use ports::{Clock, InsightProvider};
