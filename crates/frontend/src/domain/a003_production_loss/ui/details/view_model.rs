use crate::domain::a003_production_loss::mutation::{
    HttpLossApi, LossForm, MutationCoordinator,
};
use crate::shared::notifications::Notifications;
use contracts::domain::a003_production_loss::{EnrichedProductionLoss, ProductionLoss};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::rc::Rc;

pub type LossCoordinator = MutationCoordinator<HttpLossApi, Notifications>;

/// Общий handle координатора; `Copy`, поэтому перемещается в замыкания view
pub type CoordinatorHandle = StoredValue<Rc<LossCoordinator>, LocalStorage>;

#[derive(Clone, Debug, PartialEq)]
pub enum FormMode {
    Create,
    Edit(EnrichedProductionLoss),
}

fn modal_title(is_edit: bool) -> String {
    let element = ProductionLoss::element_name();
    if is_edit {
        format!("Editar {}", element)
    } else {
        format!("Registrar Nueva {}", element)
    }
}

#[derive(Clone, Copy)]
pub struct LossDetailsViewModel {
    pub form: RwSignal<LossForm>,
    pub saving: RwSignal<bool>,
    mode: StoredValue<FormMode>,
    coordinator: CoordinatorHandle,
}

impl LossDetailsViewModel {
    pub fn new(mode: FormMode, coordinator: CoordinatorHandle) -> Self {
        let form = match &mode {
            FormMode::Create => LossForm::default(),
            FormMode::Edit(enriched) => LossForm::from_record(&enriched.record),
        };
        Self {
            form: RwSignal::new(form),
            saving: RwSignal::new(false),
            mode: StoredValue::new(mode),
            coordinator,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.mode.with_value(|m| matches!(m, FormMode::Edit(_)))
    }

    pub fn title(&self) -> String {
        modal_title(self.is_edit_mode())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit_mode() {
            "Guardar cambios"
        } else {
            "Guardar"
        }
    }

    /// Создание/обновление через координатор; `on_saved` вызывается только при успехе
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let form = self.form;
        let saving = self.saving;
        let mode = self.mode.get_value();
        let coordinator = self.coordinator.get_value();

        saving.set(true);
        leptos::task::spawn_local(async move {
            let mut current = form.get_untracked();
            let outcome = match &mode {
                FormMode::Create => coordinator.submit_create(&mut current).await,
                FormMode::Edit(enriched) => {
                    coordinator
                        .submit_update(&enriched.record.id, &current)
                        .await
                }
            };
            saving.set(false);

            if outcome.is_success() {
                form.set(current);
                on_saved.run(());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_title() {
        assert_eq!(modal_title(false), "Registrar Nueva Pérdida");
        assert_eq!(modal_title(true), "Editar Pérdida");
    }
}
