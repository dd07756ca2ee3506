//! Всплывающие уведомления
//!
//! Сообщения `success`/`error` без ожидания ответа, отображаются в [`NotificationHost`]
//! и скрываются автоматически.

use crate::shared::icons::icon;
use leptos::prelude::*;

const AUTO_DISMISS_MS: u32 = 4000;

/// Приёмник сообщений о результате операций
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Список уведомлений приложения, передаётся через контекст
#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, kind: NoticeKind, message: &str) {
        self.next_id.update_value(|n| *n += 1);
        let id = self.next_id.get_value();
        self.items.update(|items| {
            items.push(Notice {
                id,
                kind,
                message: message.to_string(),
            })
        });

        let this = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Signal<Vec<Notice>> {
        self.items.into()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Notifications {
    fn success(&self, message: &str) {
        log::info!("{}", message);
        self.push(NoticeKind::Success, message);
    }

    fn error(&self, message: &str) {
        log::warn!("{}", message);
        self.push(NoticeKind::Error, message);
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not provided in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-host">
            <For
                each=move || notifications.items().get()
                key=|n| n.id
                children=move |n: Notice| {
                    let (class, icon_name) = match n.kind {
                        NoticeKind::Success => ("toast toast--success", "check"),
                        NoticeKind::Error => ("toast toast--error", "alert"),
                    };
                    let id = n.id;
                    view! {
                        <div class=class on:click=move |_| notifications.dismiss(id)>
                            {icon(icon_name)}
                            <span class="toast__message">{n.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
