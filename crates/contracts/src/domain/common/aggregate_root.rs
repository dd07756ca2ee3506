/// Корень агрегата
///
/// Идентификатор записи и статические имена агрегата:
/// префиксы таблиц, категории журнала, заголовки UI.
pub trait AggregateRoot {
    // ============================================================================
    // Данные экземпляра
    // ============================================================================

    /// Идентификатор записи
    fn id(&self) -> &str;

    // ============================================================================
    // Метаданные класса агрегата
    // ============================================================================

    /// Индекс агрегата в системе (например "a003")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например "production_loss")
    fn collection_name() -> &'static str;

    /// Имя элемента в UI (например "Pérdida")
    fn element_name() -> &'static str;

    // ============================================================================
    // Методы по умолчанию
    // ============================================================================

    /// Полное системное имя агрегата (например "a003_production_loss")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
