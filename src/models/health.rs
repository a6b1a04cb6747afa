//! Health screening models.
//!
//! This module contains models for coarse anthropometric health screening,
//! currently the body mass index.

pub mod bmi;
