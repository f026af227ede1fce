// Domain layer: the pet state machine and the ports it is persisted and configured through.

pub mod model;
pub mod ports;
