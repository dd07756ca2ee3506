//! Связь в два шага: потеря → партия → продукт
//!
//! Ссылочная целостность не гарантируется: партии или продукта может не быть
//! (удалены или список ещё загружается). Тогда возвращаются
//! фиксированные строки-заглушки.

use super::aggregate::{ProductionLoss, ProductionLossDto};
use crate::domain::a001_product::aggregate::Product;
use crate::domain::a002_production::aggregate::Production;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Имя, если потерю не удалось связать с продуктом
pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";

/// Имя для обогащённых записей и вариантов партий без продукта
pub const PRODUCT_NO_NAME: &str = "Sin nombre";

/// Подсказка в форме, если выбранной партии нет среди вариантов
pub const PRODUCT_UNKNOWN: &str = "Desconocido";

/// Индексы по спискам партий и продуктов, побеждает первое совпадение
///
/// Строится один раз на пересчёт.
pub struct ProductCatalog<'a> {
    productions: HashMap<&'a str, &'a Production>,
    products: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductCatalog<'a> {
    pub fn new(productions: &'a [Production], products: &'a [Product]) -> Self {
        let mut production_index = HashMap::with_capacity(productions.len());
        for production in productions {
            production_index
                .entry(production.id.as_str())
                .or_insert(production);
        }

        let mut product_index = HashMap::with_capacity(products.len());
        for product in products {
            product_index.entry(product.id.as_str()).or_insert(product);
        }

        Self {
            productions: production_index,
            products: product_index,
        }
    }

    pub fn production(&self, production_id: &str) -> Option<&'a Production> {
        self.productions.get(production_id).copied()
    }

    /// Продукт указанной партии
    pub fn product_for(&self, production_id: &str) -> Option<&'a Product> {
        let production = self.production(production_id)?;
        self.products.get(production.product_id.as_str()).copied()
    }

    pub fn product_name(&self, production_id: &str) -> Option<&'a str> {
        self.product_for(production_id).map(|p| p.name.as_str())
    }

    /// Имя продукта или [`PRODUCT_NOT_FOUND`]
    pub fn display_name(&self, production_id: &str) -> &'a str {
        self.product_name(production_id).unwrap_or(PRODUCT_NOT_FOUND)
    }

    pub fn enrich(&self, record: &ProductionLoss) -> EnrichedProductionLoss {
        EnrichedProductionLoss {
            record: record.clone(),
            product_name: self
                .product_name(&record.production_id)
                .unwrap_or(PRODUCT_NO_NAME)
                .to_string(),
        }
    }
}

/// Имя продукта по id партии.
///
/// Возвращает [`PRODUCT_NOT_FOUND`], если нет партии или продукта.
pub fn resolve_product_name(
    production_id: &str,
    productions: &[Production],
    products: &[Product],
) -> String {
    let Some(production) = productions.iter().find(|p| p.id == production_id) else {
        return PRODUCT_NOT_FOUND.to_string();
    };
    products
        .iter()
        .find(|p| p.id == production.product_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| PRODUCT_NOT_FOUND.to_string())
}

/// Запись потери с именем продукта (только для отображения)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedProductionLoss {
    #[serde(flatten)]
    pub record: ProductionLoss,
    pub product_name: String,
}

impl EnrichedProductionLoss {
    /// DTO для обновления; `product_name` не отправляется
    pub fn to_dto(&self) -> ProductionLossDto {
        self.record.to_dto()
    }
}

/// Добавить имя продукта к записи, [`PRODUCT_NO_NAME`] если не найдено
pub fn enrich(
    record: &ProductionLoss,
    productions: &[Production],
    products: &[Product],
) -> EnrichedProductionLoss {
    ProductCatalog::new(productions, products).enrich(record)
}

/// Вариант селектора партий в форме
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOption {
    pub id: String,
    pub product_name: String,
}

impl ProductionOption {
    /// Видимый текст варианта; id остаётся в атрибуте value
    pub fn label(&self) -> &str {
        &self.product_name
    }
}

/// Один вариант на партию, в порядке списка
pub fn production_options(productions: &[Production], products: &[Product]) -> Vec<ProductionOption> {
    let catalog = ProductCatalog::new(productions, products);
    productions
        .iter()
        .map(|p| ProductionOption {
            id: p.id.clone(),
            product_name: catalog
                .product_name(&p.id)
                .unwrap_or(PRODUCT_NO_NAME)
                .to_string(),
        })
        .collect()
}

/// Подсказка с продуктом выбранной партии, [`PRODUCT_UNKNOWN`] если её нет в списке
pub fn option_product_name<'a>(options: &'a [ProductionOption], production_id: &str) -> &'a str {
    options
        .iter()
        .find(|o| o.id == production_id)
        .map(|o| o.product_name.as_str())
        .unwrap_or(PRODUCT_UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_production_loss::aggregate::LOSS_TYPE_DAMAGE;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            category_id: "c1".into(),
            price: 1.0,
            description: String::new(),
            image_url: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn production(id: &str, product_id: &str) -> Production {
        Production {
            id: id.into(),
            product_id: product_id.into(),
            quantity: 10,
            production_date: None,
            created_at: None,
        }
    }

    fn loss(id: &str, production_id: &str) -> ProductionLoss {
        ProductionLoss {
            id: id.into(),
            production_id: production_id.into(),
            quantity: 2,
            lost_type: LOSS_TYPE_DAMAGE.into(),
            observations: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_resolve_product_name() {
        let productions = vec![production("p1", "x1")];
        let products = vec![product("x1", "Widget")];
        assert_eq!(resolve_product_name("p1", &productions, &products), "Widget");
    }

    #[test]
    fn test_resolve_unknown_production() {
        let productions = vec![production("p1", "x1")];
        let products = vec![product("x1", "Widget")];
        assert_eq!(
            resolve_product_name("p9", &productions, &products),
            PRODUCT_NOT_FOUND
        );
    }

    #[test]
    fn test_resolve_production_without_product() {
        let productions = vec![production("p1", "gone")];
        let products = vec![product("x1", "Widget")];
        assert_eq!(
            resolve_product_name("p1", &productions, &products),
            PRODUCT_NOT_FOUND
        );
    }

    #[test]
    fn test_resolve_with_empty_lists() {
        assert_eq!(resolve_product_name("p1", &[], &[]), PRODUCT_NOT_FOUND);
        assert_eq!(resolve_product_name("", &[], &[]), PRODUCT_NOT_FOUND);
    }

    #[test]
    fn test_catalog_uses_first_match() {
        let productions = vec![production("p1", "x1"), production("p1", "x2")];
        let products = vec![
            product("x1", "Primero"),
            product("x2", "Segundo"),
            product("x1", "Duplicado"),
        ];
        let catalog = ProductCatalog::new(&productions, &products);
        assert_eq!(catalog.display_name("p1"), "Primero");
        assert_eq!(
            catalog.display_name("p1"),
            resolve_product_name("p1", &productions, &products)
        );
    }

    #[test]
    fn test_enrich_attaches_name_or_sentinel() {
        let productions = vec![production("p1", "x1")];
        let products = vec![product("x1", "Widget")];

        let enriched = enrich(&loss("l1", "p1"), &productions, &products);
        assert_eq!(enriched.product_name, "Widget");
        assert_eq!(enriched.record.id, "l1");

        let orphan = enrich(&loss("l2", "p9"), &productions, &products);
        assert_eq!(orphan.product_name, PRODUCT_NO_NAME);
    }

    #[test]
    fn test_enriched_payload_excludes_product_name() {
        let productions = vec![production("p1", "x1")];
        let products = vec![product("x1", "Widget")];
        let enriched = enrich(&loss("l1", "p1"), &productions, &products);

        let payload = serde_json::to_value(enriched.to_dto()).unwrap();
        let keys: Vec<&str> = payload
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert!(!keys.contains(&"product_name"));
        assert!(!keys.contains(&"id"));
        assert!(!keys.contains(&"created_at"));
        assert_eq!(payload["production_id"], "p1");
    }

    #[test]
    fn test_enriched_serializes_flat() {
        let productions = vec![production("p1", "x1")];
        let products = vec![product("x1", "Widget")];
        let value = serde_json::to_value(enrich(&loss("l1", "p1"), &productions, &products)).unwrap();
        assert_eq!(value["id"], "l1");
        assert_eq!(value["product_name"], "Widget");
    }

    #[test]
    fn test_production_options() {
        let productions = vec![production("p1", "x1"), production("p2", "gone")];
        let products = vec![product("x1", "Widget")];
        let options = production_options(&productions, &products);

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].product_name, "Widget");
        assert_eq!(options[1].product_name, PRODUCT_NO_NAME);
        assert_eq!(options[0].label(), "Widget");
        assert!(!options[0].label().contains(&options[0].id));

        assert_eq!(option_product_name(&options, "p1"), "Widget");
        assert_eq!(option_product_name(&options, "p3"), PRODUCT_UNKNOWN);
    }
}
