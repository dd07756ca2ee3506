//! Потери производства (a003): агрегат, DTO и логика отображения,
//! связывающая потери с партиями и продуктами.

pub mod aggregate;
pub mod filter;
pub mod resolver;
pub mod summary;

pub use aggregate::{
    ProductionLoss, ProductionLossDto, LOSS_TYPES, LOSS_TYPE_DAMAGE, LOSS_TYPE_LOSS,
};
pub use filter::{filter_losses, filter_with_catalog, loss_types, TypeFilter, TYPE_FILTER_ALL};
pub use resolver::{
    enrich, option_product_name, production_options, resolve_product_name,
    EnrichedProductionLoss, ProductCatalog, ProductionOption, PRODUCT_NOT_FOUND, PRODUCT_NO_NAME,
    PRODUCT_UNKNOWN,
};
pub use summary::{summarize, LossSummary};
