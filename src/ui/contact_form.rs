//! Contact form
//!
//! Name / email / message with inline validation, posted to
//! `/api/contact`. The server appends the submission to the lead store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::wizard::is_valid_email;
use crate::ui::toast::use_toasts;

/// Contact form component.
#[component]
pub fn ContactForm() -> impl IntoView {
    let toasts = use_toasts();

    // Form state
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    // Form validation
    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let message_error = RwSignal::new(None::<String>);

    let validate_name = move || {
        if name.get().trim().is_empty() {
            name_error.set(Some("Name is required".to_string()));
            false
        } else {
            name_error.set(None);
            true
        }
    };

    let validate_email = move || {
        let value = email.get();
        if value.trim().is_empty() {
            email_error.set(Some("Email is required".to_string()));
            false
        } else if !is_valid_email(value.trim()) {
            email_error.set(Some("Invalid email address".to_string()));
            false
        } else {
            email_error.set(None);
            true
        }
    };

    let validate_message = move || {
        if message.get().trim().is_empty() {
            message_error.set(Some("Message is required".to_string()));
            false
        } else {
            message_error.set(None);
            true
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name_valid = validate_name();
        let email_valid = validate_email();
        let message_valid = validate_message();

        if !name_valid || !email_valid || !message_valid || sending.get() {
            return;
        }

        sending.set(true);

        spawn_local(async move {
            #[cfg(not(feature = "ssr"))]
            {
                use gloo_net::http::Request;
                use serde::Serialize;

                #[derive(Serialize)]
                struct ContactRequest {
                    name: String,
                    email: String,
                    message: String,
                }

                let request = ContactRequest {
                    name: name.get_untracked(),
                    email: email.get_untracked(),
                    message: message.get_untracked(),
                };

                let sent = match Request::post("/api/contact").json(&request) {
                    Ok(req) => matches!(req.send().await, Ok(response) if response.ok()),
                    Err(_) => false,
                };

                if sent {
                    toasts.success("Message sent", "We'll get back to you shortly.");
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                } else {
                    toasts.error("Error", "Something went wrong. Please try again.");
                }
            }
            #[cfg(feature = "ssr")]
            {
                let _ = toasts;
            }
            sending.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6 w-full max-w-md">
            <div class="space-y-2">
                <label for="contact-name" class="uppercase tracking-widest text-xs font-bold text-black/60">
                    "Name"
                </label>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="Your name"
                    class="h-12 w-full rounded-none border border-black bg-white px-4 text-[15px] font-medium placeholder:text-black/30 focus:outline-none"
                    class:border-red-500=move || name_error.get().is_some()
                    prop:value=move || name.get()
                    disabled=move || sending.get()
                    on:input=move |ev| {
                        name.set(event_target_value(&ev));
                        name_error.set(None);
                    }
                    on:blur=move |_| { validate_name(); }
                />
                {move || name_error.get().map(|error| view! {
                    <p class="text-red-500 text-xs font-bold uppercase">{error}</p>
                })}
            </div>

            <div class="space-y-2">
                <label for="contact-email" class="uppercase tracking-widest text-xs font-bold text-black/60">
                    "Email"
                </label>
                <input
                    id="contact-email"
                    type="email"
                    placeholder="name@company.com"
                    class="h-12 w-full rounded-none border border-black bg-white px-4 text-[15px] font-medium placeholder:text-black/30 focus:outline-none"
                    class:border-red-500=move || email_error.get().is_some()
                    prop:value=move || email.get()
                    disabled=move || sending.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        email_error.set(None);
                    }
                    on:blur=move |_| { validate_email(); }
                />
                {move || email_error.get().map(|error| view! {
                    <p class="text-red-500 text-xs font-bold uppercase">{error}</p>
                })}
            </div>

            <div class="space-y-2">
                <label for="contact-message" class="uppercase tracking-widest text-xs font-bold text-black/60">
                    "Message"
                </label>
                <textarea
                    id="contact-message"
                    placeholder="How can we help?"
                    class="min-h-[120px] w-full rounded-none border border-black bg-white px-4 py-4 text-[15px] font-medium placeholder:text-black/30 focus:outline-none resize-none"
                    class:border-red-500=move || message_error.get().is_some()
                    prop:value=move || message.get()
                    disabled=move || sending.get()
                    on:input=move |ev| {
                        message.set(event_target_value(&ev));
                        message_error.set(None);
                    }
                    on:blur=move |_| { validate_message(); }
                ></textarea>
                {move || message_error.get().map(|error| view! {
                    <p class="text-red-500 text-xs font-bold uppercase">{error}</p>
                })}
            </div>

            <button
                type="submit"
                class="h-14 w-full rounded-none bg-black text-[15px] font-black uppercase tracking-widest text-white hover:bg-black/90 disabled:opacity-50 disabled:cursor-not-allowed"
                disabled=move || sending.get()
            >
                {move || if sending.get() { "Sending..." } else { "Send Request" }}
            </button>
        </form>
    }
}
