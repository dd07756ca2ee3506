use contracts::domain::a001_product::aggregate::Product;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub price: f64,
    pub description: String,
    pub image_url: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: m.id,
            name: m.name,
            category_id: m.category_id,
            price: m.price,
            description: m.description,
            image_url: m.image_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Неудалённые продукты по имени без учёта регистра
pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    let mut items: Vec<Product> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(items)
}

pub async fn count_active() -> anyhow::Result<u64> {
    let count = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(count)
}

pub async fn insert(aggregate: &Product) -> anyhow::Result<String> {
    let active = ActiveModel {
        id: Set(aggregate.id.clone()),
        name: Set(aggregate.name.clone()),
        category_id: Set(aggregate.category_id.clone()),
        price: Set(aggregate.price),
        description: Set(aggregate.description.clone()),
        image_url: Set(aggregate.image_url.clone()),
        is_deleted: Set(false),
        created_at: Set(aggregate.created_at),
        updated_at: Set(aggregate.updated_at),
    };
    active.insert(conn()).await?;
    Ok(aggregate.id.clone())
}
