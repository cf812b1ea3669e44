use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Medicine category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Catalog entry as returned by `/medicines/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub generic_name: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub form: Option<String>,
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub prescription_required: bool,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub low_stock_threshold: Option<i64>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_emergency_available: bool,
    #[serde(default)]
    pub category: Option<Category>,
}

const fn default_true() -> bool {
    true
}

/// Stock below this many units is flagged in the catalog grid.
pub const LOW_STOCK_UNITS: i64 = 10;

impl Medicine {
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity < LOW_STOCK_UNITS
    }
}

/// Catalog search filters; unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicineQuery {
    pub q: Option<String>,
    pub category: Option<i64>,
    pub prescription_required: Option<bool>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub in_stock: Option<bool>,
}

impl MedicineQuery {
    /// Query-string pairs for the set filters, in a stable order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(term) = self.q.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            pairs.push(("q", term.to_string()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(required) = self.prescription_required {
            pairs.push(("prescription_required", required.to_string()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("max_price", max.to_string()));
        }
        if let Some(in_stock) = self.in_stock {
            pairs.push(("in_stock", in_stock.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_medicine_from_backend_float_price() {
        let medicine: Medicine = serde_json::from_value(json!({
            "id": 3,
            "name": "Paracetamol",
            "price": 4.5,
            "prescription_required": false,
            "category_id": 1,
            "stock_quantity": 8,
            "is_available": true
        }))
        .unwrap();

        assert_eq!(medicine.price, Decimal::new(45, 1));
        assert!(medicine.in_stock());
        assert!(medicine.is_low_stock());
        assert!(medicine.brand_name.is_none());
    }

    #[test]
    fn test_out_of_stock() {
        let medicine: Medicine = serde_json::from_value(json!({
            "id": 4,
            "name": "Insulin",
            "price": 30,
            "prescription_required": true,
            "stock_quantity": 0
        }))
        .unwrap();

        assert!(!medicine.in_stock());
        assert!(medicine.prescription_required);
    }

    #[test]
    fn test_query_pairs_only_include_set_filters() {
        let query = MedicineQuery {
            q: Some("  aspirin ".to_string()),
            prescription_required: Some(false),
            ..MedicineQuery::default()
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("q", "aspirin".to_string()),
                ("prescription_required", "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_blank_term_is_dropped() {
        let query = MedicineQuery {
            q: Some("   ".to_string()),
            category: Some(2),
            ..MedicineQuery::default()
        };
        assert_eq!(query.to_pairs(), vec![("category", "2".to_string())]);
        assert!(MedicineQuery::default().to_pairs().is_empty());
    }
}
