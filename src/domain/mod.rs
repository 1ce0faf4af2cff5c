// Domain layer: cart models and the ports the cart depends on.

pub mod model;
pub mod ports;
