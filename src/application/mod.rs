pub mod municipality;
pub mod proximity;

pub use municipality::MunicipalityService;
