// Domain layer: value types and ports. No parsing or I/O lives here.

pub mod model;
pub mod ports;
