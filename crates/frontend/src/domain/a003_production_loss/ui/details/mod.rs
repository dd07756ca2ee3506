//! Модальное окно создания/редактирования потери
//!
//! - view_model.rs: состояние формы и команда сохранения
//! - view.rs: компонент Leptos

mod view;
mod view_model;

pub use view::LossDetails;
pub use view_model::{CoordinatorHandle, FormMode, LossCoordinator, LossDetailsViewModel};
