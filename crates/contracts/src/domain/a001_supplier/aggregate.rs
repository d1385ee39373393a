use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор поставщика, выданный API.
///
/// Opaque on the client: never parsed, only carried in the route and echoed
/// back in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(String);

impl SupplierId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Supplier id must not be empty".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Fields
// ============================================================================

/// Editable fields of the supplier form, in display and validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplierField {
    Name,
    State,
    UnitCost,
    MinimumUnits,
    CustomerCount,
    Rating,
}

impl SupplierField {
    pub const ALL: [SupplierField; 6] = [
        SupplierField::Name,
        SupplierField::State,
        SupplierField::UnitCost,
        SupplierField::MinimumUnits,
        SupplierField::CustomerCount,
        SupplierField::Rating,
    ];

    /// JSON key used by the supplier API; also the `name` of the form input.
    pub fn wire_name(self) -> &'static str {
        match self {
            SupplierField::Name => "nome",
            SupplierField::State => "estado",
            SupplierField::UnitCost => "custo_kwh",
            SupplierField::MinimumUnits => "limite_min_kwh",
            SupplierField::CustomerCount => "num_clientes",
            SupplierField::Rating => "avaliacao",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SupplierField::Name => "Name",
            SupplierField::State => "State",
            SupplierField::UnitCost => "Cost per kWh",
            SupplierField::MinimumUnits => "Minimum kWh",
            SupplierField::CustomerCount => "Number of customers",
            SupplierField::Rating => "Rating",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            SupplierField::Name | SupplierField::State => "text",
            _ => "number",
        }
    }

    pub fn step(self) -> Option<&'static str> {
        match self {
            SupplierField::Rating => Some("0.1"),
            _ => None,
        }
    }
}

impl FromStr for SupplierField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupplierField::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| format!("Unknown supplier field: {}", s))
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Черновик поставщика: значения полей формы в том виде, в каком их ввёл
/// пользователь.
///
/// The API may answer with numbers or with strings (older clients stored
/// raw input), so every field accepts both and keeps the text form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SupplierDto {
    #[serde(rename = "nome", default, deserialize_with = "text_or_number")]
    pub name: String,

    #[serde(rename = "estado", default, deserialize_with = "text_or_number")]
    pub state: String,

    #[serde(rename = "custo_kwh", default, deserialize_with = "text_or_number")]
    pub unit_cost: String,

    #[serde(rename = "limite_min_kwh", default, deserialize_with = "text_or_number")]
    pub minimum_units: String,

    #[serde(rename = "num_clientes", default, deserialize_with = "text_or_number")]
    pub customer_count: String,

    #[serde(rename = "avaliacao", default, deserialize_with = "text_or_number")]
    pub rating: String,
}

impl SupplierDto {
    pub fn get(&self, field: SupplierField) -> &str {
        match field {
            SupplierField::Name => &self.name,
            SupplierField::State => &self.state,
            SupplierField::UnitCost => &self.unit_cost,
            SupplierField::MinimumUnits => &self.minimum_units,
            SupplierField::CustomerCount => &self.customer_count,
            SupplierField::Rating => &self.rating,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: SupplierField, value: String) {
        let slot = match field {
            SupplierField::Name => &mut self.name,
            SupplierField::State => &mut self.state,
            SupplierField::UnitCost => &mut self.unit_cost,
            SupplierField::MinimumUnits => &mut self.minimum_units,
            SupplierField::CustomerCount => &mut self.customer_count,
            SupplierField::Rating => &mut self.rating,
        };
        *slot = value;
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected text or number, got {}",
            other
        ))),
    }
}

// ============================================================================
// Validated record
// ============================================================================

/// Поставщик после проверки формы. Тело запросов создания и обновления.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "estado")]
    pub state: String,

    #[serde(rename = "custo_kwh")]
    pub unit_cost: f64,

    #[serde(rename = "limite_min_kwh")]
    pub minimum_units: f64,

    #[serde(rename = "num_clientes")]
    pub customer_count: f64,

    #[serde(rename = "avaliacao")]
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_numeric_json() {
        let json = r#"{"nome":"Acme","estado":"CA","custo_kwh":0.5,"limite_min_kwh":10,"num_clientes":100,"avaliacao":4.5}"#;
        let dto: SupplierDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto.name, "Acme");
        assert_eq!(dto.state, "CA");
        assert_eq!(dto.unit_cost, "0.5");
        assert_eq!(dto.minimum_units, "10");
        assert_eq!(dto.customer_count, "100");
        assert_eq!(dto.rating, "4.5");
    }

    #[test]
    fn test_draft_from_text_json_ignores_unknown_and_missing() {
        let json = r#"{"id":7,"nome":"Acme","custo_kwh":"0.75","avaliacao":null}"#;
        let dto: SupplierDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto.name, "Acme");
        assert_eq!(dto.unit_cost, "0.75");
        assert_eq!(dto.state, "");
        assert_eq!(dto.rating, "");
    }

    #[test]
    fn test_draft_rejects_structured_values() {
        let json = r#"{"nome":["Acme"]}"#;
        assert!(serde_json::from_str::<SupplierDto>(json).is_err());
    }

    #[test]
    fn test_set_touches_only_one_field() {
        let mut dto = SupplierDto {
            name: "Acme".into(),
            rating: "4".into(),
            ..Default::default()
        };
        dto.set(SupplierField::State, "SP".into());

        assert_eq!(dto.get(SupplierField::State), "SP");
        assert_eq!(dto.name, "Acme");
        assert_eq!(dto.rating, "4");
        assert_eq!(dto.unit_cost, "");
    }

    #[test]
    fn test_field_wire_names_parse_back() {
        for field in SupplierField::ALL {
            assert_eq!(field.wire_name().parse::<SupplierField>(), Ok(field));
        }
        assert!("fax".parse::<SupplierField>().is_err());
    }

    #[test]
    fn test_supplier_serializes_numbers() {
        let supplier = Supplier {
            name: "Acme".into(),
            state: "CA".into(),
            unit_cost: 0.5,
            minimum_units: 10.0,
            customer_count: 100.0,
            rating: 4.5,
        };
        let value = serde_json::to_value(&supplier).unwrap();

        assert_eq!(value["nome"], "Acme");
        assert_eq!(value["custo_kwh"], 0.5);
        assert_eq!(value["avaliacao"], 4.5);
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_supplier_id_from_string() {
        assert_eq!(SupplierId::from_string(" 42 ").unwrap().value(), "42");
        assert!(SupplierId::from_string("   ").is_err());
    }
}
