//! Data models

pub mod equipment;
