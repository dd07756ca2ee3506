use crate::domain::common::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Производственная партия (a002)
///
/// Каждая партия выпускает ровно один продукт.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Production {
    pub id: String,

    #[serde(alias = "productId")]
    pub product_id: String,

    /// Выпущено единиц
    #[serde(default)]
    pub quantity: i64,

    /// Дата производства (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_date: Option<String>,

    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Production {
    pub fn new_for_insert(product_id: String, quantity: i64, production_date: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_id,
            quantity,
            production_date,
            created_at: Some(Utc::now()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.product_id.trim().is_empty() {
            return Err("La producción debe referenciar un producto".into());
        }
        if self.quantity < 0 {
            return Err("La cantidad producida no puede ser negativa".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Production {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "production"
    }

    fn element_name() -> &'static str {
        "Producción"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_camel_case_product_id() {
        let production: Production =
            serde_json::from_str(r#"{"id": "p1", "productId": "x1"}"#).unwrap();
        assert_eq!(production.product_id, "x1");
        assert_eq!(production.quantity, 0);
    }

    #[test]
    fn test_validate() {
        let production = Production::new_for_insert("x1".into(), 100, None);
        assert!(production.validate().is_ok());

        let orphan = Production::new_for_insert(String::new(), 100, None);
        assert!(orphan.validate().is_err());
    }
}
