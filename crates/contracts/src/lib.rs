//! Types shared between the reservation widget and the SmartAir API.

pub mod domain;
pub mod shared;
pub mod system;
