//! Toast notifications
//!
//! Transient notices for form submissions: a bounded queue of
//! auto-dismissing toasts rendered in the top-right corner, managed
//! through a context-provided handle.

use std::collections::VecDeque;

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Maximum number of toasts to show at once
const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// One notification.
#[derive(Clone, Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(4_000),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(6_000),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(4_000),
        }
    }
}

/// Toast with a unique ID for tracking
#[derive(Clone, Debug)]
struct ToastItem {
    id: u64,
    toast: Toast,
}

/// Context handle for pushing toasts.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: RwSignal<VecDeque<ToastItem>>,
    next_id: RwSignal<u64>,
}

impl ToastManager {
    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|queue| {
            queue.push_back(ToastItem { id, toast });

            // Drop the oldest once over the cap.
            while queue.len() > MAX_TOASTS {
                queue.pop_front();
            }
        });
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Toast::success(title, message));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Toast::error(title, message));
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Toast::info(title, message));
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|queue| {
            queue.retain(|item| item.id != id);
        });
    }
}

/// Provide the toast context to the application.
pub fn provide_toasts() -> ToastManager {
    let manager = ToastManager {
        toasts: RwSignal::new(VecDeque::new()),
        next_id: RwSignal::new(0),
    };
    provide_context(manager);
    manager
}

/// Use the toast context from anywhere in the component tree.
pub fn use_toasts() -> ToastManager {
    expect_context::<ToastManager>()
}

/// Toast container. Place once at the application root.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let manager = use_toasts();

    view! {
        <div class="fixed top-4 right-4 z-[100] flex flex-col gap-2 max-w-sm">
            {move || {
                manager.toasts.get().into_iter().map(|item| {
                    view! {
                        <ToastCard toast=item.toast id=item.id manager=manager />
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Single toast card.
#[component]
fn ToastCard(toast: Toast, id: u64, manager: ToastManager) -> impl IntoView {
    // Auto-dismiss if specified
    if let Some(_ms) = toast.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                manager.dismiss(id);
            });
        }
    }

    let icon = match toast.kind {
        ToastKind::Success => icons::CHECK,
        ToastKind::Error => icons::X,
        ToastKind::Info => icons::SPARKLES,
    };

    let accent = match toast.kind {
        ToastKind::Success => "bg-black text-white",
        ToastKind::Error => "bg-red-600 text-white",
        ToastKind::Info => "bg-white text-black",
    };

    view! {
        <div class="flex items-start gap-3 border-2 border-black bg-white p-4 shadow-[6px_6px_0px_0px_rgba(0,0,0,1)]">
            <span class=format!("flex h-7 w-7 shrink-0 items-center justify-center {accent}")>
                <Icon name=icon class="w-4 h-4" />
            </span>
            <div class="flex-1 min-w-0">
                <p class="text-[13px] font-black uppercase tracking-wide text-black">{toast.title.clone()}</p>
                <p class="text-[13px] text-black/60 mt-0.5">{toast.message.clone()}</p>
            </div>
            <button
                class="text-black/40 hover:text-black transition-colors"
                on:click=move |_| manager.dismiss(id)
                aria-label="Dismiss notification"
            >
                <Icon name=icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}
