//! Browser-facing services

pub mod title;
