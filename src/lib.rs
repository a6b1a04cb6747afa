//! # Twine BMI
//!
//! A body mass index (BMI) model and the form that drives it, built for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use twine_bmi::models::health::bmi::{Category, UnitSystem, compute};
//!
//! let result = compute(170.0, 70.0, UnitSystem::Metric).unwrap();
//! assert_eq!(result.value, 24.2);
//! assert_eq!(result.category, Category::Normal);
//!
//! // Incomplete input is not an error, there is simply no result yet.
//! assert!(compute(0.0, 70.0, UnitSystem::Metric).is_none());
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
