use crate::domain::common::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Продукт (a001)
///
/// Справочник каталога; учёт потерь только читает его.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub category_id: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub description: String,

    #[serde(default, alias = "imagen_url")]
    pub image_url: String,

    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Новый продукт с новым id для вставки
    pub fn new_for_insert(
        name: String,
        category_id: String,
        price: f64,
        description: String,
        image_url: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            category_id,
            price,
            description,
            image_url,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre del producto no puede estar vacío".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("El precio debe ser un número no negativo".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Producto"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_legacy_field_names() {
        let json = r#"{
            "id": "x1",
            "name": "Widget",
            "category_id": "c1",
            "price": 12.5,
            "description": "",
            "imagen_url": "http://img/1.png",
            "createdAt": "2024-03-15T14:02:26Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.image_url, "http://img/1.png");
        assert!(product.created_at.is_some());
        assert!(product.updated_at.is_none());
    }

    #[test]
    fn test_validate() {
        let mut product = Product::new_for_insert(
            "Widget".into(),
            "c1".into(),
            10.0,
            String::new(),
            String::new(),
        );
        assert!(product.validate().is_ok());

        product.price = -1.0;
        assert!(product.validate().is_err());

        product.price = 1.0;
        product.name = "  ".into();
        assert!(product.validate().is_err());
    }
}
