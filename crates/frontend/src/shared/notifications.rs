//! App-wide toast channel.
//!
//! Pages push notifications through [`Notifications`] (provided via context);
//! [`Toaster`] renders them and dismisses each one after a timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);
        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                message: message.into(),
            })
        });
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, message)
    }

    /// No-op when the notification is already gone.
    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    /// Tracked read, for views.
    pub fn list(&self) -> Vec<Notification> {
        self.items.get()
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.items.get_untracked()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> Notifications {
    expect_context::<Notifications>()
}

#[component]
pub fn Toaster(timeout_ms: u32) -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || notifications.list()
                key=|n| n.id
                children=move |n: Notification| {
                    view! { <ToastItem notification=n timeout_ms=timeout_ms /> }
                }
            />
        </div>
    }
}

#[component]
fn ToastItem(notification: Notification, timeout_ms: u32) -> impl IntoView {
    let notifications = use_notifications();
    let id = notification.id;

    // Закрыть автоматически; повторный dismiss безопасен
    spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        notifications.dismiss(id);
    });

    let class = match notification.kind {
        NotificationKind::Success => "toast toast--success",
        NotificationKind::Error => "toast toast--error",
    };

    view! {
        <div class=class role="status" on:click=move |_| notifications.dismiss(id)>
            {notification.message}
        </div>
    }
}
