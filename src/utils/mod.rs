//! Utility functions shared across the application.

pub mod short_code;
