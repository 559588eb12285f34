//! API handlers for the equipment log REST endpoints

pub mod equipment;
pub mod export;
pub mod health;
pub mod openapi;
pub mod stats;
