//! Последовательность создания/обновления/удаления потерь
//!
//! [`MutationCoordinator`] проверяет форму, отправляет ровно один запрос на
//! принятую отправку, сообщает результат через [`Notifier`] и оставляет
//! обновление списка вызывающему коду. Загруженные списки он не трогает.

use async_trait::async_trait;
use contracts::domain::a003_production_loss::{
    ProductionLoss, ProductionLossDto, LOSS_TYPE_DAMAGE,
};
use std::cell::Cell;

use super::api;
use crate::shared::notifications::Notifier;

pub const MSG_INVALID_FORM: &str = "Completa todos los campos correctamente";
pub const MSG_CREATED: &str = "Pérdida registrada correctamente";
pub const MSG_UPDATED: &str = "Pérdida actualizada correctamente";
pub const MSG_DELETED: &str = "Pérdida eliminada correctamente";
pub const MSG_CONFIRM_DELETE: &str =
    "¿Estás seguro de eliminar esta pérdida? Esta acción no se puede deshacer.";

const MSG_CREATE_FAILED: &str = "Error al registrar la pérdida";
const MSG_UPDATE_FAILED: &str = "Error al actualizar la pérdida";
const MSG_DELETE_FAILED: &str = "Error al eliminar pérdida";

/// Удалённая коллекция потерь
#[async_trait(?Send)]
pub trait LossApi {
    async fn create(&self, dto: &ProductionLossDto) -> Result<ProductionLoss, String>;
    async fn update(&self, id: &str, dto: &ProductionLossDto) -> Result<ProductionLoss, String>;
    async fn delete(&self, id: &str) -> Result<(), String>;
}

/// Явный вопрос пользователю да/нет
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// [`LossApi`] через HTTP
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpLossApi;

#[async_trait(?Send)]
impl LossApi for HttpLossApi {
    async fn create(&self, dto: &ProductionLossDto) -> Result<ProductionLoss, String> {
        api::create_loss(dto).await
    }

    async fn update(&self, id: &str, dto: &ProductionLossDto) -> Result<ProductionLoss, String> {
        api::update_loss(id, dto).await
    }

    async fn delete(&self, id: &str) -> Result<(), String> {
        api::delete_loss(id).await
    }
}

/// `window.confirm`; без window подтверждения нет
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Редактируемое состояние формы
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LossForm {
    pub production_id: String,
    pub quantity: i64,
    pub lost_type: String,
    pub observations: String,
}

impl Default for LossForm {
    fn default() -> Self {
        Self {
            production_id: String::new(),
            quantity: 0,
            lost_type: LOSS_TYPE_DAMAGE.to_string(),
            observations: String::new(),
        }
    }
}

impl LossForm {
    /// Заполнение из существующей записи
    pub fn from_record(record: &ProductionLoss) -> Self {
        Self {
            production_id: record.production_id.clone(),
            quantity: record.quantity,
            lost_type: record.lost_type.clone(),
            observations: record.observations_text().to_string(),
        }
    }

    pub fn to_dto(&self) -> ProductionLossDto {
        let observations = self.observations.trim();
        ProductionLossDto {
            production_id: self.production_id.clone(),
            quantity: self.quantity,
            lost_type: self.lost_type.clone(),
            observations: (!observations.is_empty()).then(|| observations.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.to_dto().validate().is_ok()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MutationOutcome {
    /// Сохранённая запись в том виде, как её вернул сервер
    Saved(ProductionLoss),
    Deleted,
    /// Отклонено локально, запрос не отправлялся
    Invalid,
    /// Ошибка запроса; содержит сообщение сервера
    Failed(String),
    /// Предыдущий запрос ещё выполняется
    Busy,
    /// Пользователь отказался от удаления
    Cancelled,
}

impl MutationOutcome {
    /// Нужно ли закрыть форму и обновить список
    pub fn is_success(&self) -> bool {
        matches!(self, MutationOutcome::Saved(_) | MutationOutcome::Deleted)
    }
}

/// Снимает флаг ожидания при любом завершении запроса
struct PendingGuard<'a>(&'a Cell<bool>);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct MutationCoordinator<A, N> {
    api: A,
    notifier: N,
    pending: Cell<bool>,
}

impl<A: LossApi, N: Notifier> MutationCoordinator<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            pending: Cell::new(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    fn begin(&self) -> Option<PendingGuard<'_>> {
        if self.pending.replace(true) {
            return None;
        }
        Some(PendingGuard(&self.pending))
    }

    /// Создание записи; при успехе форма сбрасывается к значениям по умолчанию
    pub async fn submit_create(&self, form: &mut LossForm) -> MutationOutcome {
        if self.is_pending() {
            return MutationOutcome::Busy;
        }
        let dto = form.to_dto();
        if dto.validate().is_err() {
            self.notifier.error(MSG_INVALID_FORM);
            return MutationOutcome::Invalid;
        }
        let Some(_guard) = self.begin() else {
            return MutationOutcome::Busy;
        };

        match self.api.create(&dto).await {
            Ok(record) => {
                self.notifier.success(MSG_CREATED);
                *form = LossForm::default();
                MutationOutcome::Saved(record)
            }
            Err(msg) => {
                self.notifier
                    .error(&format!("{}: {}", MSG_CREATE_FAILED, msg));
                MutationOutcome::Failed(msg)
            }
        }
    }

    /// Полная замена записи `id`; связанная производственная партия может уже не существовать
    pub async fn submit_update(&self, id: &str, form: &LossForm) -> MutationOutcome {
        if self.is_pending() {
            return MutationOutcome::Busy;
        }
        let dto = form.to_dto();
        if dto.validate().is_err() {
            self.notifier.error(MSG_INVALID_FORM);
            return MutationOutcome::Invalid;
        }
        let Some(_guard) = self.begin() else {
            return MutationOutcome::Busy;
        };

        match self.api.update(id, &dto).await {
            Ok(record) => {
                self.notifier.success(MSG_UPDATED);
                MutationOutcome::Saved(record)
            }
            Err(msg) => {
                self.notifier
                    .error(&format!("{}: {}", MSG_UPDATE_FAILED, msg));
                MutationOutcome::Failed(msg)
            }
        }
    }

    /// Удаление после явного подтверждения
    pub async fn delete(&self, id: &str, confirm: &dyn Confirm) -> MutationOutcome {
        if self.is_pending() {
            return MutationOutcome::Busy;
        }
        if !confirm.confirm(MSG_CONFIRM_DELETE) {
            return MutationOutcome::Cancelled;
        }
        let Some(_guard) = self.begin() else {
            return MutationOutcome::Busy;
        };

        match self.api.delete(id).await {
            Ok(()) => {
                self.notifier.success(MSG_DELETED);
                MutationOutcome::Deleted
            }
            Err(msg) => {
                self.notifier
                    .error(&format!("{}: {}", MSG_DELETE_FAILED, msg));
                MutationOutcome::Failed(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_production_loss::LOSS_TYPE_LOSS;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(ProductionLossDto),
        Update(String, ProductionLossDto),
        Delete(String),
    }

    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<Call>>,
        fail_with: Option<String>,
    }

    impl FakeApi {
        fn failing(msg: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_with: Some(msg.to_string()),
            }
        }

        fn stored(id: &str, dto: &ProductionLossDto) -> ProductionLoss {
            ProductionLoss {
                id: id.to_string(),
                production_id: dto.production_id.clone(),
                quantity: dto.quantity,
                lost_type: dto.lost_type.clone(),
                observations: dto.observations.clone(),
                created_at: None,
                updated_at: None,
            }
        }

        fn result<T>(&self, ok: T) -> Result<T, String> {
            match &self.fail_with {
                Some(msg) => Err(msg.clone()),
                None => Ok(ok),
            }
        }
    }

    #[async_trait(?Send)]
    impl LossApi for FakeApi {
        async fn create(&self, dto: &ProductionLossDto) -> Result<ProductionLoss, String> {
            self.calls.borrow_mut().push(Call::Create(dto.clone()));
            self.result(Self::stored("new-id", dto))
        }

        async fn update(&self, id: &str, dto: &ProductionLossDto) -> Result<ProductionLoss, String> {
            self.calls
                .borrow_mut()
                .push(Call::Update(id.to_string(), dto.clone()));
            self.result(Self::stored(id, dto))
        }

        async fn delete(&self, id: &str) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::Delete(id.to_string()));
            self.result(())
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl Notifier for &FakeNotifier {
        fn success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    struct Answer(bool);

    impl Confirm for Answer {
        fn confirm(&self, message: &str) -> bool {
            assert_eq!(message, MSG_CONFIRM_DELETE);
            self.0
        }
    }

    fn filled_form() -> LossForm {
        LossForm {
            production_id: "p1".into(),
            quantity: 5,
            lost_type: LOSS_TYPE_DAMAGE.into(),
            observations: "  roto  ".into(),
        }
    }

    #[test]
    fn test_default_form() {
        let form = LossForm::default();
        assert_eq!(form.production_id, "");
        assert_eq!(form.quantity, 0);
        assert_eq!(form.lost_type, LOSS_TYPE_DAMAGE);
        assert!(!form.is_valid());
    }

    #[test]
    fn test_create_with_zero_quantity_sends_nothing() {
        let notifier = FakeNotifier::default();
        let coordinator = MutationCoordinator::new(FakeApi::default(), &notifier);
        let mut form = LossForm {
            quantity: 0,
            ..filled_form()
        };

        let outcome = block_on(coordinator.submit_create(&mut form));

        assert_eq!(outcome, MutationOutcome::Invalid);
        assert!(coordinator.api.calls.borrow().is_empty());
        assert_eq!(*notifier.errors.borrow(), vec![MSG_INVALID_FORM.to_string()]);
        assert_eq!(form.quantity, 0);
        assert_eq!(form.production_id, "p1");
    }

    #[test]
    fn test_create_without_production_sends_nothing() {
        let notifier = FakeNotifier::default();
        let coordinator = MutationCoordinator::new(FakeApi::default(), &notifier);
        let mut form = LossForm {
            production_id: String::new(),
            ..filled_form()
        };

        let outcome = block_on(coordinator.submit_create(&mut form));

        assert_eq!(outcome, MutationOutcome::Invalid);
        assert!(coordinator.api.calls.borrow().is_empty());
    }

    #[test]
    fn test_create_success_resets_form() {
        let notifier = FakeNotifier::default();
        let coordinator = MutationCoordinator::new(FakeApi::default(), &notifier);
        let mut form = filled_form();

        let outcome = block_on(coordinator.submit_create(&mut form));

        assert!(outcome.is_success());
        assert_eq!(form, LossForm::default());
        assert_eq!(*notifier.successes.borrow(), vec![MSG_CREATED.to_string()]);
        assert!(!coordinator.is_pending());

        let calls = coordinator.api.calls.borrow();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            Call::Create(dto) => {
                assert_eq!(dto.production_id, "p1");
                assert_eq!(dto.observations.as_deref(), Some("roto"));
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_create_failure_keeps_form_and_reports_server_message() {
        let notifier = FakeNotifier::default();
        let coordinator =
            MutationCoordinator::new(FakeApi::failing("La cantidad debe ser mayor que cero"), &notifier);
        let mut form = filled_form();

        let outcome = block_on(coordinator.submit_create(&mut form));

        assert_eq!(
            outcome,
            MutationOutcome::Failed("La cantidad debe ser mayor que cero".into())
        );
        assert_eq!(form, filled_form());
        assert_eq!(
            *notifier.errors.borrow(),
            vec!["Error al registrar la pérdida: La cantidad debe ser mayor que cero".to_string()]
        );
        assert!(notifier.successes.borrow().is_empty());
        assert!(!coordinator.is_pending());
    }

    #[test]
    fn test_update_for_vanished_production_is_still_submitted() {
        let notifier = FakeNotifier::default();
        let coordinator = MutationCoordinator::new(FakeApi::default(), &notifier);
        let record = ProductionLoss {
            id: "l1".into(),
            production_id: "deleted-production".into(),
            quantity: 3,
            lost_type: LOSS_TYPE_LOSS.into(),
            observations: None,
            created_at: None,
            updated_at: None,
        };
        let form = LossForm::from_record(&record);

        let outcome = block_on(coordinator.submit_update(&record.id, &form));

        assert!(outcome.is_success());
        assert_eq!(
            *coordinator.api.calls.borrow(),
            vec![Call::Update("l1".into(), record.to_dto())]
        );
        assert_eq!(*notifier.successes.borrow(), vec![MSG_UPDATED.to_string()]);
    }

    #[test]
    fn test_update_failure_message() {
        let notifier = FakeNotifier::default();
        let coordinator = MutationCoordinator::new(FakeApi::failing("HTTP 500"), &notifier);

        let outcome = block_on(coordinator.submit_update("l1", &filled_form()));

        assert_eq!(outcome, MutationOutcome::Failed("HTTP 500".into()));
        assert_eq!(
            *notifier.errors.borrow(),
            vec!["Error al actualizar la pérdida: HTTP 500".to_string()]
        );
    }

    #[test]
    fn test_pending_request_refuses_new_submits() {
        let notifier = FakeNotifier::default();
        let coordinator = MutationCoordinator::new(FakeApi::default(), &notifier);
        let _in_flight = coordinator.begin();
        let mut form = filled_form();

        assert_eq!(
            block_on(coordinator.submit_create(&mut form)),
            MutationOutcome::Busy
        );
        assert_eq!(
            block_on(coordinator.submit_update("l1", &form)),
            MutationOutcome::Busy
        );
        assert_eq!(
            block_on(coordinator.delete("l1", &Answer(true))),
            MutationOutcome::Busy
        );
        assert!(coordinator.api.calls.borrow().is_empty());
        assert!(notifier.errors.borrow().is_empty());
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let notifier = FakeNotifier::default();
        let coordinator = MutationCoordinator::new(FakeApi::default(), &notifier);

        let outcome = block_on(coordinator.delete("l1", &Answer(false)));

        assert_eq!(outcome, MutationOutcome::Cancelled);
        assert!(coordinator.api.calls.borrow().is_empty());
        assert!(notifier.successes.borrow().is_empty());
    }

    #[test]
    fn test_confirmed_delete() {
        let notifier = FakeNotifier::default();
        let coordinator = MutationCoordinator::new(FakeApi::default(), &notifier);

        let outcome = block_on(coordinator.delete("l1", &Answer(true)));

        assert_eq!(outcome, MutationOutcome::Deleted);
        assert_eq!(
            *coordinator.api.calls.borrow(),
            vec![Call::Delete("l1".into())]
        );
        assert_eq!(*notifier.successes.borrow(), vec![MSG_DELETED.to_string()]);
    }

    #[test]
    fn test_delete_failure_message() {
        let notifier = FakeNotifier::default();
        let coordinator = MutationCoordinator::new(FakeApi::failing("Pérdida no encontrada: l1"), &notifier);

        let outcome = block_on(coordinator.delete("l1", &Answer(true)));

        assert!(!outcome.is_success());
        assert_eq!(
            *notifier.errors.borrow(),
            vec!["Error al eliminar pérdida: Pérdida no encontrada: l1".to_string()]
        );
    }
}
