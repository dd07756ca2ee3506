use super::error::LossServiceError;
use super::repository;
use crate::shared::logger;
use contracts::domain::a003_production_loss::{ProductionLoss, ProductionLossDto};
use contracts::domain::common::AggregateRoot;

type Result<T> = std::result::Result<T, LossServiceError>;

pub async fn list_all() -> Result<Vec<ProductionLoss>> {
    Ok(repository::list_all().await?)
}

pub async fn get_by_id(id: &str) -> Result<ProductionLoss> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| LossServiceError::NotFound(id.to_string()))
}

/// Создание потери: валидация, id и метки времени, вставка; возвращает сохранённую запись
///
/// Существование связанной производственной партии не проверяется.
pub async fn create(dto: ProductionLossDto) -> Result<ProductionLoss> {
    dto.validate().map_err(LossServiceError::Validation)?;

    let mut aggregate = ProductionLoss::new_for_insert(&dto);
    aggregate.validate().map_err(LossServiceError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;

    tracing::info!(
        "Created production loss {} ({} x {})",
        aggregate.id,
        aggregate.quantity,
        aggregate.lost_type
    );
    logger::log_aggregate::<ProductionLoss>(
        aggregate.id(),
        &format!("registrada, {} uds. ({})", aggregate.quantity, aggregate.lost_type),
    );
    Ok(aggregate)
}

/// Полная замена редактируемых полей, побеждает последняя запись
pub async fn update(id: &str, dto: ProductionLossDto) -> Result<ProductionLoss> {
    dto.validate().map_err(LossServiceError::Validation)?;

    let mut aggregate = get_by_id(id).await?;
    aggregate.update(&dto);
    aggregate.validate().map_err(LossServiceError::Validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;

    tracing::info!("Updated production loss {}", aggregate.id);
    logger::log_aggregate::<ProductionLoss>(
        aggregate.id(),
        &format!("actualizada, {} uds. ({})", aggregate.quantity, aggregate.lost_type),
    );
    Ok(aggregate)
}

pub async fn delete(id: &str) -> Result<()> {
    if !repository::soft_delete(id).await? {
        return Err(LossServiceError::NotFound(id.to_string()));
    }

    tracing::info!("Deleted production loss {}", id);
    logger::log_aggregate::<ProductionLoss>(id, "eliminada");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::initialize_database;
    use contracts::domain::a003_production_loss::{LOSS_TYPE_DAMAGE, LOSS_TYPE_LOSS};

    // Тесты валидации не доходят до хранилища: Err(Validation) возвращается
    // раньше обращения к get_connection().

    fn dto(production_id: &str, quantity: i64, lost_type: &str) -> ProductionLossDto {
        ProductionLossDto {
            production_id: production_id.into(),
            quantity,
            lost_type: lost_type.into(),
            observations: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_zero_quantity() {
        let err = create(dto("p1", 0, LOSS_TYPE_DAMAGE)).await.unwrap_err();
        assert!(matches!(err, LossServiceError::Validation(_)));
        assert_eq!(err.to_string(), "La cantidad debe ser mayor que cero");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_production() {
        let err = create(dto("  ", 3, LOSS_TYPE_DAMAGE)).await.unwrap_err();
        assert!(matches!(err, LossServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_type() {
        let err = create(dto("p1", 3, "")).await.unwrap_err();
        assert!(matches!(err, LossServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let err = update("l1", dto("p1", -1, LOSS_TYPE_DAMAGE))
            .await
            .unwrap_err();
        assert!(matches!(err, LossServiceError::Validation(_)));
    }

    #[test]
    fn test_not_found_message() {
        let err = LossServiceError::NotFound("l9".into());
        assert_eq!(err.to_string(), "Pérdida no encontrada: l9");
    }

    /// Единственный тест с базой: соединение глобальное и задаётся один раз
    #[tokio::test]
    async fn test_storage_round_trip() {
        let db_file = std::env::temp_dir().join(format!(
            "production_loss_service_{}_{}.db",
            std::process::id(),
            chrono::Utc::now().timestamp_micros()
        ));
        initialize_database(&db_file).await.unwrap();

        let created = create(dto("p1", 5, LOSS_TYPE_DAMAGE)).await.unwrap();
        assert_eq!(list_all().await.unwrap(), vec![created.clone()]);

        let replacement = ProductionLossDto {
            observations: Some("  cajas rotas ".into()),
            ..dto("p2", 7, LOSS_TYPE_LOSS)
        };
        let updated = update(&created.id, replacement).await.unwrap();
        assert_eq!(updated.quantity, 7);

        let stored = get_by_id(&created.id).await.unwrap();
        assert_eq!(stored.production_id, "p2");
        assert_eq!(stored.quantity, 7);
        assert_eq!(stored.lost_type, LOSS_TYPE_LOSS);
        assert_eq!(stored.observations.as_deref(), Some("cajas rotas"));
        assert_eq!(stored.created_at, created.created_at);

        delete(&created.id).await.unwrap();
        assert!(list_all().await.unwrap().is_empty());
        assert!(matches!(
            get_by_id(&created.id).await,
            Err(LossServiceError::NotFound(_))
        ));
        assert!(matches!(
            delete(&created.id).await,
            Err(LossServiceError::NotFound(_))
        ));
        assert!(matches!(
            update(&created.id, dto("p1", 1, LOSS_TYPE_DAMAGE)).await,
            Err(LossServiceError::NotFound(_))
        ));

        let _ = std::fs::remove_file(&db_file);
    }
}
