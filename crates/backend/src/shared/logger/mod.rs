pub mod repository;

use contracts::domain::common::AggregateRoot;
use repository::{log_event_internal, SERVER_SOURCE};

/// Запись события сервера в таблицу `system_log`
///
/// Вставка выполняется в отдельной задаче, ошибки пишутся только в stderr.
///
/// # Examples
/// ```ignore
/// logger::log("startup", "Server started");
/// ```
pub fn log(category: &str, message: &str) {
    log_event_internal(SERVER_SOURCE, category, message);
}

/// Событие по записи агрегата `A`: категория из `A::full_name()`,
/// в тексте имя элемента и id записи
///
/// # Examples
/// ```ignore
/// logger::log_aggregate::<ProductionLoss>(loss.id(), "registrada");
/// ```
pub fn log_aggregate<A: AggregateRoot>(record_id: &str, message: &str) {
    log_event_internal(
        SERVER_SOURCE,
        &A::full_name(),
        &aggregate_message::<A>(record_id, message),
    );
}

fn aggregate_message<A: AggregateRoot>(record_id: &str, message: &str) -> String {
    format!("{} {}: {}", A::element_name(), record_id, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::Product;
    use contracts::domain::a003_production_loss::ProductionLoss;

    #[test]
    fn test_aggregate_message() {
        assert_eq!(
            aggregate_message::<ProductionLoss>("l1", "eliminada"),
            "Pérdida l1: eliminada"
        );
        assert_eq!(
            aggregate_message::<Product>("x1", "creado con datos de prueba"),
            "Producto x1: creado con datos de prueba"
        );
    }
}
