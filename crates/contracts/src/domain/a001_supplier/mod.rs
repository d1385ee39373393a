pub mod aggregate;
pub mod validation;

pub use aggregate::{Supplier, SupplierDto, SupplierField, SupplierId};
pub use validation::ValidationError;
