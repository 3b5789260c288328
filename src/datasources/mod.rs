pub mod geocoding;
pub mod openmeteo;

pub use geocoding::{LocationInfo, ReverseGeocoder};
pub use openmeteo::OpenMeteoClient;
