mod municipality_repository;
mod traits;

pub use municipality_repository::MunicipalityRepositoryImpl;
pub use traits::MunicipalityRepository;
