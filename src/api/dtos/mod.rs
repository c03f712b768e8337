pub mod common;
pub mod municipality_dto;

pub use common::*;
pub use municipality_dto::*;
