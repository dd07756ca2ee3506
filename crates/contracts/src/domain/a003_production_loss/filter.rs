//! Поиск и фильтр по типу для списка потерь

use super::aggregate::ProductionLoss;
use super::resolver::ProductCatalog;
use crate::domain::a001_product::aggregate::Product;
use crate::domain::a002_production::aggregate::Production;

/// Значение селектора "все типы"
pub const TYPE_FILTER_ALL: &str = "all";

/// Фильтр по `lost_type`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    /// Точное совпадение с учётом регистра
    Only(String),
}

impl TypeFilter {
    /// Разбор значения селектора; [`TYPE_FILTER_ALL`] даёт [`TypeFilter::All`]
    pub fn from_value(value: &str) -> Self {
        if value == TYPE_FILTER_ALL {
            TypeFilter::All
        } else {
            TypeFilter::Only(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            TypeFilter::All => TYPE_FILTER_ALL,
            TypeFilter::Only(t) => t,
        }
    }

    pub fn matches(&self, lost_type: &str) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => t == lost_type,
        }
    }
}

/// Варианты фильтра: сначала "all", затем каждый различный `lost_type`
/// в порядке первого появления.
pub fn loss_types(records: &[ProductionLoss]) -> Vec<String> {
    let mut types = vec![TYPE_FILTER_ALL.to_string()];
    for record in records {
        if !types[1..].iter().any(|t| *t == record.lost_type) {
            types.push(record.lost_type.clone());
        }
    }
    types
}

/// Видимая часть `records` в исходном порядке.
///
/// Запись проходит, если совпадает тип и непустой запрос без учёта регистра
/// входит в имя продукта или в примечания.
pub fn filter_losses<'r>(
    records: &'r [ProductionLoss],
    productions: &[Production],
    products: &[Product],
    query: &str,
    type_filter: &TypeFilter,
) -> Vec<&'r ProductionLoss> {
    let catalog = ProductCatalog::new(productions, products);
    filter_with_catalog(records, &catalog, query, type_filter)
}

/// То же, что [`filter_losses`], но с готовым каталогом
pub fn filter_with_catalog<'r>(
    records: &'r [ProductionLoss],
    catalog: &ProductCatalog<'_>,
    query: &str,
    type_filter: &TypeFilter,
) -> Vec<&'r ProductionLoss> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| type_filter.matches(&r.lost_type))
        .filter(|r| needle.is_empty() || matches_query(r, catalog, &needle))
        .collect()
}

fn matches_query(record: &ProductionLoss, catalog: &ProductCatalog<'_>, needle: &str) -> bool {
    catalog
        .display_name(&record.production_id)
        .to_lowercase()
        .contains(needle)
        || record.observations_text().to_lowercase().contains(needle)
}
