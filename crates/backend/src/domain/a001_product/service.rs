use super::repository;
use crate::shared::logger;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::common::AggregateRoot;

pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    repository::list_all().await
}

/// Вставка тестовых продуктов; ничего не делает, если продукты уже есть
pub async fn insert_test_data() -> anyhow::Result<usize> {
    if repository::count_active().await? > 0 {
        tracing::info!("Products already present, skipping test data");
        return Ok(0);
    }

    let data = vec![
        ("Pan de molde", "panaderia", 2.5, "Pan blanco de 500 g"),
        ("Croissant", "panaderia", 1.2, "Croissant de mantequilla"),
        ("Galletas de avena", "galleteria", 3.0, "Paquete de 12 unidades"),
        ("Bizcocho de chocolate", "pasteleria", 6.75, "Bizcocho de 800 g"),
    ];

    let mut inserted = 0;
    for (name, category, price, description) in data {
        let product = Product::new_for_insert(
            name.to_string(),
            category.to_string(),
            price,
            description.to_string(),
            String::new(),
        );
        product
            .validate()
            .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
        repository::insert(&product).await?;
        logger::log_aggregate::<Product>(product.id(), "creado con datos de prueba");
        inserted += 1;
    }

    tracing::info!("Inserted {} test products", inserted);
    Ok(inserted)
}
