use contracts::domain::a002_production::aggregate::Production;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_production")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub product_id: String,
    pub quantity: i64,
    pub production_date: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Production {
    fn from(m: Model) -> Self {
        Production {
            id: m.id,
            product_id: m.product_id,
            quantity: m.quantity,
            production_date: m.production_date,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Неудалённые производственные партии, новые первыми
pub async fn list_all() -> anyhow::Result<Vec<Production>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn count_active() -> anyhow::Result<u64> {
    let count = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(count)
}

pub async fn insert(aggregate: &Production) -> anyhow::Result<String> {
    let active = ActiveModel {
        id: Set(aggregate.id.clone()),
        product_id: Set(aggregate.product_id.clone()),
        quantity: Set(aggregate.quantity),
        production_date: Set(aggregate.production_date.clone()),
        is_deleted: Set(false),
        created_at: Set(aggregate.created_at),
        updated_at: Set(aggregate.created_at),
    };
    active.insert(conn()).await?;
    Ok(aggregate.id.clone())
}
