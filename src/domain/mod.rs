pub mod distance;
pub mod errors;
pub mod municipality;

pub use distance::{distance_km, EARTH_RADIUS_KM};
pub use errors::DomainError;
pub use municipality::{GeoPoint, Municipality};
