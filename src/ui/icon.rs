use leptos::prelude::*;

/// Inline SVG icon, stroked with `currentColor`.
#[component]
pub fn Icon(
    /// Icon name from [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let content = match name {
        icons::ARROW_RIGHT => view! {
            <path stroke-linecap="round" stroke-linejoin="round" d="M5 12h14M12 5l7 7-7 7" />
        },
        icons::ARROW_LEFT => view! {
            <path stroke-linecap="round" stroke-linejoin="round" d="M19 12H5M12 19l-7-7 7-7" />
        },
        icons::SPARKLES => view! {
            <path stroke-linecap="round" stroke-linejoin="round"
                  d="M12 3l1.9 5.8 5.8 1.9-5.8 1.9L12 18.4l-1.9-5.8L4.3 10.7l5.8-1.9L12 3zM19 15l.7 2.3L22 18l-2.3.7L19 21l-.7-2.3L16 18l2.3-.7L19 15z" />
        },
        icons::BOT => view! {
            <path stroke-linecap="round" stroke-linejoin="round"
                  d="M12 8V4M8 4h8M4 10a2 2 0 012-2h12a2 2 0 012 2v8a2 2 0 01-2 2H6a2 2 0 01-2-2v-8zM9 13v2M15 13v2" />
        },
        icons::SEND => view! {
            <path stroke-linecap="round" stroke-linejoin="round" d="M22 2L15 22l-4-9-9-4 20-7zM22 2L11 13" />
        },
        icons::CHECK => view! {
            <path stroke-linecap="round" stroke-linejoin="round" d="M20 6L9 17l-5-5" />
        },
        icons::X => view! {
            <path stroke-linecap="round" stroke-linejoin="round" d="M18 6L6 18M6 6l12 12" />
        },
        icons::MESSAGE_CIRCLE => view! {
            <path stroke-linecap="round" stroke-linejoin="round"
                  d="M21 11.5a8.38 8.38 0 01-.9 3.8 8.5 8.5 0 01-7.6 4.7 8.38 8.38 0 01-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 01-.9-3.8 8.5 8.5 0 014.7-7.6A8.38 8.38 0 0112.5 3h.5a8.48 8.48 0 018 8v.5z" />
        },
        icons::CALENDAR => view! {
            <path stroke-linecap="round" stroke-linejoin="round"
                  d="M8 2v4M16 2v4M3 8a2 2 0 012-2h14a2 2 0 012 2v12a2 2 0 01-2 2H5a2 2 0 01-2-2V8zM3 10h18" />
        },
        icons::CREDIT_CARD => view! {
            <path stroke-linecap="round" stroke-linejoin="round"
                  d="M2 7a2 2 0 012-2h16a2 2 0 012 2v10a2 2 0 01-2 2H4a2 2 0 01-2-2V7zM2 10h20" />
        },
        icons::ZAP => view! {
            <path stroke-linecap="round" stroke-linejoin="round" d="M13 2L3 14h9l-1 8 10-12h-9l1-8z" />
        },
        icons::SMARTPHONE => view! {
            <path stroke-linecap="round" stroke-linejoin="round"
                  d="M7 2h10a2 2 0 012 2v16a2 2 0 01-2 2H7a2 2 0 01-2-2V4a2 2 0 012-2zM12 18h.01" />
        },
        icons::MONITOR => view! {
            <path stroke-linecap="round" stroke-linejoin="round"
                  d="M2 5a2 2 0 012-2h16a2 2 0 012 2v10a2 2 0 01-2 2H4a2 2 0 01-2-2V5zM8 21h8M12 17v4" />
        },
        icons::EXTERNAL_LINK => view! {
            <path stroke-linecap="round" stroke-linejoin="round"
                  d="M18 13v6a2 2 0 01-2 2H5a2 2 0 01-2-2V8a2 2 0 012-2h6M15 3h6v6M10 14L21 3" />
        },
        icons::LOADER => view! {
            <path stroke-linecap="round" stroke-linejoin="round" d="M21 12a9 9 0 11-6.2-8.56" />
        },
        _ => view! {
            <path stroke-linecap="round" stroke-linejoin="round" d="M13 10V3L4 14h7v7l9-11h-7z" />
        },
    };

    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            aria-hidden="true"
        >
            {content}
        </svg>
    }
}

/// Icon names accepted by [`Icon`].
#[allow(dead_code)]
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const SPARKLES: &str = "sparkles";
    pub const BOT: &str = "bot";
    pub const SEND: &str = "send";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const MESSAGE_CIRCLE: &str = "message-circle";
    pub const CALENDAR: &str = "calendar";
    pub const CREDIT_CARD: &str = "credit-card";
    pub const ZAP: &str = "zap";
    pub const SMARTPHONE: &str = "smartphone";
    pub const MONITOR: &str = "monitor";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const LOADER: &str = "loader";
}
