// Domain layer: itinerary model and ports. Generation and export live under `core`.

pub mod model;
pub mod ports;
