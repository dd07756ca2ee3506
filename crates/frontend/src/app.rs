use crate::domain::a003_production_loss::ui::list::ProductionLossList;
use crate::shared::notifications::{NotificationHost, Notifications};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Уведомления для всего приложения
    provide_context(Notifications::new());

    view! {
        <main class="app">
            <ProductionLossList />
        </main>
        <NotificationHost />
    }
}
