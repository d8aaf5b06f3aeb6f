// Domain layer: calendar tokens, records and the ports the core talks through.

pub mod model;
pub mod ports;
