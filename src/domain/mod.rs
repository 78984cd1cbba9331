// Domain layer: emotion model and the ports the client and the HTTP facade meet at.

pub mod model;
pub mod ports;
