pub mod ports;
pub mod services;
pub mod value_objects;

pub use value_objects::CuisineCount;
