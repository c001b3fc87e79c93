//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! fund portfolio test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built funds, users and wired-up services
//! - `builders`: Builder for funds with custom NAV and minimums
//! - `assertions`: Invariant checks for portfolios
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
