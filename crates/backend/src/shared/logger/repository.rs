use chrono::Utc;
use contracts::shared::logger::LogEntry;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

/// Источник событий, записанных самим сервером
pub const SERVER_SOURCE: &str = "server";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "system_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub timestamp: String,
    pub source: String,
    pub category: String,
    pub message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogEntry {
    fn from(m: Model) -> Self {
        LogEntry {
            id: m.id,
            timestamp: m.timestamp,
            source: m.source,
            category: m.category,
            message: m.message,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Запись без ожидания результата
pub fn log_event_internal(source: &str, category: &str, message: &str) {
    let entry = new_entry(source, category, message);

    tokio::spawn(async move {
        if let Err(e) = entry.insert(conn()).await {
            eprintln!("Failed to log event: {}", e);
        }
    });
}

fn new_entry(source: &str, category: &str, message: &str) -> ActiveModel {
    ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        timestamp: Set(Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()),
        source: Set(source.to_string()),
        category: Set(category.to_string()),
        message: Set(message.to_string()),
    }
}

/// Записи журнала, новые первыми; `category` сужает выборку до одного агрегата
pub async fn get_logs(category: Option<&str>) -> anyhow::Result<Vec<LogEntry>> {
    let mut query = Entity::find().order_by_desc(Column::Id);
    if let Some(category) = category {
        query = query.filter(Column::Category.eq(category));
    }

    let logs = query
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(logs)
}

/// Возвращает число удалённых записей
pub async fn clear_all_logs() -> anyhow::Result<u64> {
    let result = Entity::delete_many().exec(conn()).await?;
    Ok(result.rows_affected)
}
