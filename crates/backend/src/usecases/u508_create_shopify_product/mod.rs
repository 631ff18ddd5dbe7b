pub mod executor;
pub mod validation;

pub use executor::{CreateProductOutcome, ProductCreationExecutor};
