use serde::{Deserialize, Serialize};

/// Запись журнала событий сервера
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    /// Пока всегда "server"
    pub source: String,
    /// Полное имя агрегата или подсистема, например "a003_production_loss"
    pub category: String,
    pub message: String,
}
