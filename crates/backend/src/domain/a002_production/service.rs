use super::repository;
use crate::domain::a001_product;
use crate::shared::logger;
use chrono::{Duration, Utc};
use contracts::domain::a002_production::aggregate::Production;
use contracts::domain::common::AggregateRoot;

pub async fn list_all() -> anyhow::Result<Vec<Production>> {
    repository::list_all().await
}

/// Одна тестовая партия на продукт; при необходимости сначала вставляются продукты
pub async fn insert_test_data() -> anyhow::Result<usize> {
    if repository::count_active().await? > 0 {
        tracing::info!("Productions already present, skipping test data");
        return Ok(0);
    }

    a001_product::service::insert_test_data().await?;
    let products = a001_product::service::list_all().await?;

    let today = Utc::now().date_naive();
    let mut inserted = 0;
    for (offset, product) in products.iter().enumerate() {
        let date = today - Duration::days(offset as i64);
        let production = Production::new_for_insert(
            product.id.clone(),
            100 * (offset as i64 + 1),
            Some(date.format("%Y-%m-%d").to_string()),
        );
        production
            .validate()
            .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
        repository::insert(&production).await?;
        logger::log_aggregate::<Production>(production.id(), "creada con datos de prueba");
        inserted += 1;
    }

    tracing::info!("Inserted {} test productions", inserted);
    Ok(inserted)
}
