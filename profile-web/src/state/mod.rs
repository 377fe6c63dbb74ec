//! Application state

pub mod app;
