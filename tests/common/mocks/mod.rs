#[allow(dead_code, unused_imports)]
pub mod municipality_repo;

#[allow(dead_code, unused_imports)]
pub use municipality_repo::{FailingMunicipalityRepo, MockMunicipalityRepo};
