//! Receipt model, scoring rules and the ports the application depends on.

pub mod points;
pub mod ports;
pub mod receipt;
