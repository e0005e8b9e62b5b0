//! Two-step demo-preview wizard
//!
//! Step one collects the website URL; step two the business profile,
//! pre-filled with a name derived from the URL. Submission goes to the
//! external preview service and ends in a success panel linking to the
//! generated preview. All transition rules live in
//! [`crate::core::wizard`]; this component is the signal wrapper and
//! markup around them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::preview::{PreviewConfig, PreviewRequest};
use crate::core::wizard::{LeadWizard, OTHER, ProfileErrors, WizardState};
use crate::ui::icon::{Icon, icons};
use crate::ui::language::use_language_context;
use crate::ui::toast::use_toasts;

const INDUSTRIES: &[(&str, &str)] = &[
    ("retail", "Retail / E-commerce"),
    ("food", "Food & Beverage"),
    ("healthcare", "Healthcare / Medical"),
    ("beauty", "Beauty & Wellness"),
    ("services", "Professional Services"),
    ("realestate", "Real Estate"),
    ("education", "Education"),
    ("technology", "Technology"),
    (OTHER, "Other"),
];

const COMPANY_SIZES: &[(&str, &str)] = &[
    ("1-10", "1-10 employees"),
    ("11-50", "11-50 employees"),
    ("51-200", "51-200 employees"),
    ("201+", "201+ employees"),
];

const CHALLENGES: &[(&str, &str)] = &[
    ("missed-inquiries", "Missed inquiries after hours"),
    ("slow-response", "Slow response times"),
    ("booking-overhead", "Manual booking overhead"),
    ("low-conversion", "Low website conversion"),
    (OTHER, "Other"),
];

const TRAFFIC: &[(&str, &str)] = &[
    ("<1k", "Under 1,000 visits / month"),
    ("1k-10k", "1,000 - 10,000 visits / month"),
    ("10k-50k", "10,000 - 50,000 visits / month"),
    ("50k+", "50,000+ visits / month"),
];

/// The demo-preview wizard.
#[component]
pub fn PreviewWizard(
    /// Preview service endpoint, key and timing knobs
    #[prop(default = PreviewConfig::default())]
    config: PreviewConfig,
) -> impl IntoView {
    let language = use_language_context();
    let toasts = use_toasts();
    let config = StoredValue::new(config);

    let wizard = RwSignal::new(LeadWizard::new());
    let url_input = RwSignal::new(String::new());
    let url_error = RwSignal::new(None::<String>);
    let errors = RwSignal::new(ProfileErrors::default());

    let submitting = Memo::new(move |_| wizard.with(|w| w.is_submitting()));

    let on_submit_url = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = url_input.get();
        match wizard.try_update(|w| w.submit_url(&raw)) {
            Some(Ok(())) => url_error.set(None),
            Some(Err(message)) => url_error.set(Some(message)),
            None => {}
        }
    };

    let on_submit_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match wizard.try_update(|w| w.submit_profile()) {
            Some(Ok(())) => {
                errors.set(ProfileErrors::default());

                let request = wizard.with_untracked(|w| {
                    PreviewRequest::new(w.url(), w.profile(), language.lang.get_untracked())
                });
                let config = config.get_value();

                spawn_local(async move {
                    #[cfg(not(feature = "ssr"))]
                    {
                        let outcome =
                            crate::core::preview::create_preview(&config, &request).await;
                        match &outcome {
                            Ok(_) => {
                                toasts.success("Analysis complete", "Your custom preview is ready.");
                            }
                            Err(message) => {
                                toasts.error("Error", message.clone());
                            }
                        }
                        wizard.update(|w| w.resolve(outcome));
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = (config, request, toasts);
                    }
                });
            }
            Some(Err(field_errors)) => errors.set(field_errors),
            None => {}
        }
    };

    let on_reset = move |_| {
        wizard.update(|w| w.reset());
        url_input.set(String::new());
        url_error.set(None);
        errors.set(ProfileErrors::default());
    };

    view! {
        <div class="w-full max-w-2xl mx-auto">
            {move || match wizard.get().state().clone() {
                WizardState::Success { preview_url } => view! {
                    <SuccessPanel preview_url=preview_url on_reset=on_reset />
                }
                .into_any(),
                WizardState::CollectingUrl => view! {
                    <div class="mb-8 text-center">
                        <h2 class="text-[28px] font-black uppercase tracking-tighter mb-2">
                            "See AI on your website"
                        </h2>
                        <p class="text-[16px] text-black/60 font-medium">
                            "Enter your website and we'll create a personalized AI assistant preview for your business."
                        </p>
                    </div>

                    <form on:submit=on_submit_url class="space-y-6 border-2 border-black p-8 bg-white">
                        <div class="space-y-2">
                            <label for="preview-url" class="block text-[14px] font-bold uppercase tracking-wide">
                                "Website URL *"
                            </label>
                            <input
                                id="preview-url"
                                type="text"
                                inputmode="url"
                                placeholder="https://yourwebsite.com"
                                class="h-12 w-full border-2 border-black rounded-none px-4 text-[16px] focus:outline-none"
                                class:border-red-500=move || url_error.get().is_some()
                                prop:value=move || url_input.get()
                                on:input=move |ev| {
                                    url_input.set(event_target_value(&ev));
                                    url_error.set(None);
                                }
                            />
                            {move || {
                                url_error.get().map(|error| {
                                    view! {
                                        <p class="text-red-500 text-xs font-bold uppercase">{error}</p>
                                    }
                                })
                            }}
                        </div>

                        <button
                            type="submit"
                            class="h-16 w-full rounded-none bg-black text-[18px] font-black uppercase tracking-widest text-white hover:bg-black/90 transition-all"
                        >
                            <span class="inline-flex items-center gap-2">
                                "Continue"
                                <Icon name=icons::ARROW_RIGHT class="h-5 w-5" />
                            </span>
                        </button>
                    </form>
                }
                .into_any(),
                // Profile step, shown while collecting and while submitting.
                _ => view! {
                    <ProfileStep
                        wizard=wizard
                        errors=errors
                        submitting=submitting
                        on_submit=on_submit_profile
                    />
                }
                .into_any(),
            }}
        </div>
    }
}

/// Profile step of the wizard.
#[component]
fn ProfileStep(
    wizard: RwSignal<LeadWizard>,
    errors: RwSignal<ProfileErrors>,
    submitting: Memo<bool>,
    on_submit: impl FnMut(leptos::ev::SubmitEvent) + 'static,
) -> impl IntoView {
    let show_industry_other =
        Memo::new(move |_| wizard.with(|w| w.profile().industry == OTHER));
    let show_challenge_other =
        Memo::new(move |_| wizard.with(|w| w.profile().biggest_challenge == OTHER));

    view! {
        <div class="mb-8 text-center">
            <h2 class="text-[28px] font-black uppercase tracking-tighter mb-2">
                "Tell us about your business"
            </h2>
            <p class="text-[16px] text-black/60 font-medium">
                {move || wizard.with(|w| format!("We'll tailor the assistant preview to {}", w.url()))}
            </p>
        </div>

        <form on:submit=on_submit class="space-y-6 border-2 border-black p-8 bg-white">
            {move || {
                wizard.with(|w| w.last_error().map(str::to_string)).map(|error| {
                    view! {
                        <div class="border-2 border-red-500 bg-red-50 p-3">
                            <p class="text-red-600 text-xs font-bold uppercase">{error}</p>
                        </div>
                    }
                })
            }}

            // Business name (pre-filled from the URL, editable)
            <div class="space-y-2">
                <label for="business-name" class="block text-[14px] font-bold uppercase tracking-wide">
                    "Business Name *"
                </label>
                <input
                    id="business-name"
                    type="text"
                    placeholder="e.g., Manuel's Bakery"
                    class="h-12 w-full border-2 border-black rounded-none px-4 text-[16px] focus:outline-none"
                    class:border-red-500=move || errors.get().business_name.is_some()
                    prop:value=move || wizard.with(|w| w.profile().business_name.clone())
                    disabled=move || submitting.get()
                    on:input=move |ev| {
                        wizard.update(|w| w.profile_mut().business_name = event_target_value(&ev));
                        errors.update(|e| e.business_name = None);
                    }
                />
                {move || errors.get().business_name.map(|error| view! {
                    <p class="text-red-500 text-xs font-bold uppercase">{error}</p>
                })}
            </div>

            // Email
            <div class="space-y-2">
                <label for="lead-email" class="block text-[14px] font-bold uppercase tracking-wide">
                    "Email Address *"
                </label>
                <input
                    id="lead-email"
                    type="email"
                    placeholder="you@company.com"
                    class="h-12 w-full border-2 border-black rounded-none px-4 text-[16px] focus:outline-none"
                    class:border-red-500=move || errors.get().email.is_some()
                    prop:value=move || wizard.with(|w| w.profile().email.clone())
                    disabled=move || submitting.get()
                    on:input=move |ev| {
                        wizard.update(|w| w.profile_mut().email = event_target_value(&ev));
                        errors.update(|e| e.email = None);
                    }
                />
                <p class="text-[12px] text-black/40 font-medium">
                    "We'll send you the preview link and follow up."
                </p>
                {move || errors.get().email.map(|error| view! {
                    <p class="text-red-500 text-xs font-bold uppercase">{error}</p>
                })}
            </div>

            // Industry + company size
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="space-y-2">
                    <label for="industry" class="block text-[14px] font-bold uppercase tracking-wide">
                        "Industry"
                    </label>
                    <select
                        id="industry"
                        class="h-12 w-full border-2 border-black rounded-none px-4 text-[16px] bg-white focus:outline-none"
                        prop:value=move || wizard.with(|w| w.profile().industry.clone())
                        disabled=move || submitting.get()
                        on:change=move |ev| {
                            wizard.update(|w| w.profile_mut().industry = event_target_value(&ev));
                            errors.update(|e| e.industry_other = None);
                        }
                    >
                        <option value="">"Select industry..."</option>
                        {INDUSTRIES.iter().map(|&(value, label)| view! {
                            <option value=value>{label}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="space-y-2">
                    <label for="company-size" class="block text-[14px] font-bold uppercase tracking-wide">
                        "Company Size"
                    </label>
                    <select
                        id="company-size"
                        class="h-12 w-full border-2 border-black rounded-none px-4 text-[16px] bg-white focus:outline-none"
                        prop:value=move || wizard.with(|w| w.profile().company_size.clone())
                        disabled=move || submitting.get()
                        on:change=move |ev| {
                            wizard.update(|w| w.profile_mut().company_size = event_target_value(&ev));
                        }
                    >
                        <option value="">"Select size..."</option>
                        {COMPANY_SIZES.iter().map(|&(value, label)| view! {
                            <option value=value>{label}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <Show when=move || show_industry_other.get()>
                <div class="space-y-2">
                    <label for="industry-other" class="block text-[14px] font-bold uppercase tracking-wide">
                        "Your Industry *"
                    </label>
                    <input
                        id="industry-other"
                        type="text"
                        placeholder="Tell us your industry"
                        class="h-12 w-full border-2 border-black rounded-none px-4 text-[16px] focus:outline-none"
                        class:border-red-500=move || errors.get().industry_other.is_some()
                        prop:value=move || wizard.with(|w| w.profile().industry_other.clone())
                        disabled=move || submitting.get()
                        on:input=move |ev| {
                            wizard.update(|w| w.profile_mut().industry_other = event_target_value(&ev));
                            errors.update(|e| e.industry_other = None);
                        }
                    />
                    {move || errors.get().industry_other.map(|error| view! {
                        <p class="text-red-500 text-xs font-bold uppercase">{error}</p>
                    })}
                </div>
            </Show>

            // Biggest challenge
            <div class="space-y-2">
                <label for="challenge" class="block text-[14px] font-bold uppercase tracking-wide">
                    "Biggest Challenge *"
                </label>
                <select
                    id="challenge"
                    class="h-12 w-full border-2 border-black rounded-none px-4 text-[16px] bg-white focus:outline-none"
                    class:border-red-500=move || errors.get().biggest_challenge.is_some()
                    prop:value=move || wizard.with(|w| w.profile().biggest_challenge.clone())
                    disabled=move || submitting.get()
                    on:change=move |ev| {
                        wizard.update(|w| w.profile_mut().biggest_challenge = event_target_value(&ev));
                        errors.update(|e| {
                            e.biggest_challenge = None;
                            e.challenge_other = None;
                        });
                    }
                >
                    <option value="">"Select your biggest challenge..."</option>
                    {CHALLENGES.iter().map(|&(value, label)| view! {
                        <option value=value>{label}</option>
                    }).collect_view()}
                </select>
                {move || errors.get().biggest_challenge.map(|error| view! {
                    <p class="text-red-500 text-xs font-bold uppercase">{error}</p>
                })}
            </div>

            <Show when=move || show_challenge_other.get()>
                <div class="space-y-2">
                    <label for="challenge-other" class="block text-[14px] font-bold uppercase tracking-wide">
                        "Your Challenge *"
                    </label>
                    <input
                        id="challenge-other"
                        type="text"
                        placeholder="What should the assistant solve first?"
                        class="h-12 w-full border-2 border-black rounded-none px-4 text-[16px] focus:outline-none"
                        class:border-red-500=move || errors.get().challenge_other.is_some()
                        prop:value=move || wizard.with(|w| w.profile().challenge_other.clone())
                        disabled=move || submitting.get()
                        on:input=move |ev| {
                            wizard.update(|w| w.profile_mut().challenge_other = event_target_value(&ev));
                            errors.update(|e| e.challenge_other = None);
                        }
                    />
                    {move || errors.get().challenge_other.map(|error| view! {
                        <p class="text-red-500 text-xs font-bold uppercase">{error}</p>
                    })}
                </div>
            </Show>

            // Monthly traffic
            <div class="space-y-2">
                <label for="traffic" class="block text-[14px] font-bold uppercase tracking-wide">
                    "Monthly Website Traffic *"
                </label>
                <select
                    id="traffic"
                    class="h-12 w-full border-2 border-black rounded-none px-4 text-[16px] bg-white focus:outline-none"
                    class:border-red-500=move || errors.get().monthly_traffic.is_some()
                    prop:value=move || wizard.with(|w| w.profile().monthly_traffic.clone())
                    disabled=move || submitting.get()
                    on:change=move |ev| {
                        wizard.update(|w| w.profile_mut().monthly_traffic = event_target_value(&ev));
                        errors.update(|e| e.monthly_traffic = None);
                    }
                >
                    <option value="">"Select traffic..."</option>
                    {TRAFFIC.iter().map(|&(value, label)| view! {
                        <option value=value>{label}</option>
                    }).collect_view()}
                </select>
                {move || errors.get().monthly_traffic.map(|error| view! {
                    <p class="text-red-500 text-xs font-bold uppercase">{error}</p>
                })}
            </div>

            // Notes
            <div class="space-y-2">
                <label for="notes" class="block text-[14px] font-bold uppercase tracking-wide">
                    "Additional Notes"
                </label>
                <textarea
                    id="notes"
                    placeholder="Tell us about your specific needs or questions..."
                    class="min-h-[100px] w-full border-2 border-black rounded-none p-4 text-[16px] resize-y focus:outline-none"
                    prop:value=move || wizard.with(|w| w.profile().notes.clone())
                    disabled=move || submitting.get()
                    on:input=move |ev| {
                        wizard.update(|w| w.profile_mut().notes = event_target_value(&ev));
                    }
                ></textarea>
            </div>

            <div class="flex flex-col sm:flex-row gap-4">
                <button
                    type="button"
                    class="h-16 rounded-none border-2 border-black px-8 text-[14px] font-black uppercase tracking-widest text-black hover:bg-black/10 transition-all disabled:opacity-50"
                    disabled=move || submitting.get()
                    on:click=move |_| wizard.update(|w| w.back())
                >
                    <span class="inline-flex items-center gap-2">
                        <Icon name=icons::ARROW_LEFT class="h-4 w-4" />
                        "Back"
                    </span>
                </button>
                <button
                    type="submit"
                    class="h-16 flex-1 rounded-none bg-black text-[18px] font-black uppercase tracking-widest text-white hover:bg-black/90 transition-all disabled:opacity-70"
                    disabled=move || submitting.get()
                >
                    {move || {
                        if submitting.get() {
                            view! {
                                <span class="inline-flex items-center gap-2">
                                    "Creating your AI preview"
                                    <span class="flex gap-1 ml-2">
                                        <span class="h-1.5 w-1.5 bg-white rounded-full animate-bounce" style="animation-delay: -0.3s"></span>
                                        <span class="h-1.5 w-1.5 bg-white rounded-full animate-bounce" style="animation-delay: -0.15s"></span>
                                        <span class="h-1.5 w-1.5 bg-white rounded-full animate-bounce"></span>
                                    </span>
                                </span>
                            }
                            .into_any()
                        } else {
                            view! { <span>"Generate My Preview"</span> }.into_any()
                        }
                    }}
                </button>
            </div>
        </form>

        <Show when=move || submitting.get()>
            <p class="text-center mt-4 text-[14px] text-black/60 font-medium animate-pulse">
                "This takes about 10 seconds..."
            </p>
        </Show>
    }
}

/// Success panel shown once the preview service answers.
#[component]
fn SuccessPanel(
    preview_url: String,
    on_reset: impl FnMut(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <div class="w-full max-w-xl mx-auto flex flex-col items-center justify-center p-8 border-2 border-black bg-white gap-6">
            <span class="flex h-16 w-16 items-center justify-center bg-black text-white">
                <Icon name=icons::CHECK class="h-8 w-8" />
            </span>
            <div class="text-[24px] font-bold text-black uppercase tracking-tight">
                "Your Preview is Ready!"
            </div>
            <p class="text-center text-[15px] text-black/60">
                "We've analyzed your website and created a personalized AI assistant."
            </p>
            <a
                href=preview_url
                target="_blank"
                rel="noopener noreferrer"
                class="h-16 inline-flex items-center justify-center rounded-none bg-black px-10 text-[18px] font-black uppercase tracking-widest text-white hover:bg-black/90 transition-all w-full"
            >
                <span class="inline-flex items-center gap-2">
                    "View Preview"
                    <Icon name=icons::ARROW_RIGHT class="h-5 w-5" />
                </span>
            </a>
            <div class="text-[13px] text-black/40 font-medium">
                "Preview expires in 10 minutes"
            </div>
            <button
                class="text-[11px] font-bold uppercase tracking-widest text-black/40 hover:text-black mt-2"
                on:click=on_reset
            >
                "Create another preview"
            </button>
        </div>
    }
}
