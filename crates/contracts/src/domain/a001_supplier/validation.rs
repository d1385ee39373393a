//! Проверка формы поставщика перед отправкой.
//!
//! Rules run in field order and stop at the first failure, so one save
//! attempt reports exactly one problem.

use thiserror::Error;

use super::aggregate::{Supplier, SupplierDto, SupplierField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required.")]
    NameRequired,

    #[error("State is required.")]
    StateRequired,

    #[error("Cost per kWh must be a valid number greater than zero.")]
    InvalidUnitCost,

    #[error("Minimum kWh must be a valid number greater than one.")]
    InvalidMinimumUnits,

    #[error("Number of customers must be a valid number greater than zero.")]
    InvalidCustomerCount,

    #[error("Rating must be between 0.1 and 5.")]
    InvalidRating,
}

impl ValidationError {
    pub fn field(self) -> SupplierField {
        match self {
            ValidationError::NameRequired => SupplierField::Name,
            ValidationError::StateRequired => SupplierField::State,
            ValidationError::InvalidUnitCost => SupplierField::UnitCost,
            ValidationError::InvalidMinimumUnits => SupplierField::MinimumUnits,
            ValidationError::InvalidCustomerCount => SupplierField::CustomerCount,
            ValidationError::InvalidRating => SupplierField::Rating,
        }
    }
}

impl SupplierDto {
    /// Coerce the draft into a typed [`Supplier`] or report the first broken rule.
    pub fn validate(&self) -> Result<Supplier, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.state.trim().is_empty() {
            return Err(ValidationError::StateRequired);
        }

        let unit_cost = parse_number(&self.unit_cost)
            .filter(|v| *v > 0.0)
            .ok_or(ValidationError::InvalidUnitCost)?;
        let minimum_units = parse_number(&self.minimum_units)
            .filter(|v| *v > 1.0)
            .ok_or(ValidationError::InvalidMinimumUnits)?;
        let customer_count = parse_number(&self.customer_count)
            .filter(|v| *v > 0.0)
            .ok_or(ValidationError::InvalidCustomerCount)?;
        let rating = parse_number(&self.rating)
            .filter(|v| *v > 0.0 && *v <= 5.0)
            .ok_or(ValidationError::InvalidRating)?;

        Ok(Supplier {
            name: self.name.clone(),
            state: self.state.clone(),
            unit_cost,
            minimum_units,
            customer_count,
            rating,
        })
    }
}

/// `inf` and `NaN` parse as f64 but are not numbers a user can mean.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
