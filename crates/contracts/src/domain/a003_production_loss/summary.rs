//! Счётчики по полному (нефильтрованному) списку потерь

use super::aggregate::{ProductionLoss, LOSS_TYPE_DAMAGE, LOSS_TYPE_LOSS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossSummary {
    /// Всего единиц по всем записям
    pub total: i64,
    /// Единиц по каждому встреченному `lost_type`
    pub by_type: BTreeMap<String, i64>,
}

impl LossSummary {
    /// Единиц для одного типа, ноль если тип не встречался
    pub fn for_type(&self, lost_type: &str) -> i64 {
        self.by_type.get(lost_type).copied().unwrap_or(0)
    }

    /// Счётчик "Por Daños"
    pub fn damage(&self) -> i64 {
        self.for_type(LOSS_TYPE_DAMAGE)
    }

    /// Счётчик "Por Pérdidas"
    ///
    /// Счётчики есть только у этих двух типов; остальные типы учитываются
    /// только в `total` и `by_type`.
    pub fn loss(&self) -> i64 {
        self.for_type(LOSS_TYPE_LOSS)
    }
}

/// Суммы ограничены `i64::MAX`
pub fn summarize(records: &[ProductionLoss]) -> LossSummary {
    let mut summary = LossSummary::default();
    for record in records {
        summary.total = summary.total.saturating_add(record.quantity);
        let per_type = summary.by_type.entry(record.lost_type.clone()).or_insert(0);
        *per_type = per_type.saturating_add(record.quantity);
    }
    summary
}
