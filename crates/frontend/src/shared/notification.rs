//! Transient toasts shown in the corner of the shell.

use contracts::shared::api_error::ApiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use super::config::NOTIFICATION_TIMEOUT_MS;
use super::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Warning => "toast toast--warning",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = Uuid::new_v4();
        self.toasts.update(|t| {
            t.push(Toast {
                id,
                kind,
                message: message.into(),
            })
        });
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message);
    }

    /// `context: reason` for a failed API call.
    pub fn api_error(&self, context: &str, error: &ApiError) {
        self.error(format!("{}: {}", context, error));
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided")
}

#[component]
pub fn Toasts() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-container">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="alert">
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
