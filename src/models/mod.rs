pub mod property;
pub mod seed;

pub use property::{Coordinates, Property, PropertyStatus, PropertyType};
pub use seed::seed_properties;
