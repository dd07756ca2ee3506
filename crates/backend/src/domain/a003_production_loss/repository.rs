use contracts::domain::a003_production_loss::ProductionLoss;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_production_loss")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub production_id: String,
    pub quantity: i64,
    pub lost_type: String,
    pub observations: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProductionLoss {
    fn from(m: Model) -> Self {
        ProductionLoss {
            id: m.id,
            production_id: m.production_id,
            quantity: m.quantity,
            lost_type: m.lost_type,
            observations: m.observations,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Неудалённые записи потерь, новые первыми
pub async fn list_all() -> anyhow::Result<Vec<ProductionLoss>> {
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

/// Мягко удалённые записи считаются отсутствующими
pub async fn get_by_id(id: &str) -> anyhow::Result<Option<ProductionLoss>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &ProductionLoss) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.clone()),
        production_id: Set(aggregate.production_id.clone()),
        quantity: Set(aggregate.quantity),
        lost_type: Set(aggregate.lost_type.clone()),
        observations: Set(aggregate.observations.clone()),
        is_deleted: Set(false),
        created_at: Set(aggregate.created_at),
        updated_at: Set(aggregate.updated_at),
    };
    active.insert(conn()).await?;
    Ok(())
}

pub async fn update(aggregate: &ProductionLoss) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.clone()),
        production_id: Set(aggregate.production_id.clone()),
        quantity: Set(aggregate.quantity),
        lost_type: Set(aggregate.lost_type.clone()),
        observations: Set(aggregate.observations.clone()),
        updated_at: Set(aggregate.updated_at),
        is_deleted: sea_orm::ActiveValue::NotSet,
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

/// Возвращает false, если нет неудалённой записи с таким id
pub async fn soft_delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now()))
        .filter(Column::Id.eq(id))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
