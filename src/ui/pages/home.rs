//! Landing page
//!
//! The whole marketing site on one page:
//! - SEO meta tags
//! - header with section anchors and the EN/ES toggle
//! - hero with the phone-frame micro conversation
//! - features, integration and installation-steps sections
//! - device section with the browser-frame live chat demo
//! - demo-preview wizard and contact form
//!
//! Copy comes from the translation tables; the two lead forms keep their
//! own state and sit outside the language-reactive region so a toggle
//! never clears a half-filled form.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::i18n::{self, Chat, Cta, Device, Features, Hero, Integration, LiveChat, Nav, Steps};
use crate::ui::browser_demo::BrowserDemo;
use crate::ui::chat_demo::MicroConversation;
use crate::ui::contact_form::ContactForm;
use crate::ui::icon::{Icon, icons};
use crate::ui::language::use_language_context;
use crate::ui::preview_wizard::PreviewWizard;

/// Landing page component.
#[component]
pub fn HomePage() -> impl IntoView {
    let language = use_language_context();
    let lang = language.lang;

    view! {
        <SeoMeta />

        <main id="top" class="min-h-screen bg-white text-black font-sans overflow-x-hidden">
            {move || {
                let t = i18n::translations(lang.get());
                view! {
                    <Header nav=&t.nav />
                    <HeroSection hero=&t.hero chat=&t.chat />
                    <FeaturesSection t=&t.features />
                    <IntegrationSection t=&t.integration />
                    <DeviceSection t=&t.device live=&t.live_chat chat=&t.chat />
                    <StepsSection t=&t.steps />
                }
            }}

            // Demo-preview wizard
            <section id="preview" class="border-t border-black bg-gray-50">
                <div class="mx-auto max-w-[1200px] px-6 py-24">
                    <PreviewWizard />
                </div>
            </section>

            // Contact
            <section id="contact" class="border-t border-black bg-white">
                <div class="mx-auto max-w-[1200px] px-6 py-24 flex flex-col items-center">
                    {move || {
                        let t = i18n::translations(lang.get());
                        view! {
                            <div class="text-center mb-12">
                                <div class="text-[13px] font-black tracking-[0.25em] text-black/40 uppercase">
                                    {t.cta.kicker}
                                </div>
                                <h2 class="mt-6 text-[34px] font-black leading-tight tracking-tighter md:text-[48px] uppercase">
                                    {t.cta.title}
                                </h2>
                                <p class="mt-6 text-[16px] font-medium text-black/60 max-w-xl mx-auto">
                                    {t.cta.subtitle}
                                </p>
                            </div>
                        }
                    }}
                    <ContactForm />
                </div>
            </section>

            {move || {
                let t = i18n::translations(lang.get());
                view! { <CtaSection t=&t.cta /> }
            }}

            <SiteFooter />
            <LandingStyles />
        </main>
    }
}

/// SEO Meta tags using leptos_meta.
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="ILNAJ - Conversational AI Assistants for Your Website" />

        <Meta name="description" content="ILNAJ deploys intelligent conversational assistants on your website. Sales, appointments, and support - automated with precision. One line of code, live in minutes." />
        <Meta name="keywords" content="AI assistant, chat widget, conversational AI, appointment booking, website chat, lead capture, customer support automation" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://ilnaj.ai/" />
        <Meta property="og:title" content="ILNAJ - Conversational AI Assistants for Your Website" />
        <Meta property="og:description" content="Your customers book, buy, and get help. While you sleep." />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="ILNAJ - Conversational AI Assistants for Your Website" />
        <Meta property="twitter:description" content="Your customers book, buy, and get help. While you sleep." />

        // Canonical URL
        <Link rel="canonical" href="https://ilnaj.ai/" />
    }
}

/// Sticky header with section anchors and the language toggle.
#[component]
fn Header(nav: &'static Nav) -> impl IntoView {
    let language = use_language_context();

    view! {
        <header class="sticky top-0 z-50 border-b border-black bg-white/95 backdrop-blur">
            <div class="mx-auto flex h-16 max-w-[1200px] items-center justify-between px-6">
                <a href="#top" class="flex items-center gap-2 cursor-pointer group">
                    <div class="h-8 w-8 bg-black transition-transform group-hover:scale-90"></div>
                    <div class="text-[16px] font-black tracking-tighter uppercase">"ILNAJ"</div>
                </a>

                <nav class="hidden items-center gap-10 md:flex">
                    <a href="#features" class="text-[13px] font-bold uppercase tracking-wider hover:underline transition-all">
                        {nav.features}
                    </a>
                    <a href="#integration" class="text-[13px] font-bold uppercase tracking-wider hover:underline transition-all">
                        {nav.integration}
                    </a>
                    <a href="#steps" class="text-[13px] font-bold uppercase tracking-wider hover:underline transition-all">
                        {nav.steps}
                    </a>
                    <a href="#contact" class="text-[13px] font-bold uppercase tracking-wider hover:underline transition-all">
                        {nav.talk}
                    </a>
                </nav>

                <div class="flex items-center gap-4">
                    <button
                        class="h-10 px-3 border-2 border-black text-[12px] font-black uppercase tracking-widest hover:bg-black hover:text-white transition-colors"
                        on:click=move |_| language.toggle()
                        aria-label="Switch language"
                    >
                        {move || language.lang.get().toggled().label()}
                    </button>
                    <a
                        href="#preview"
                        class="hidden sm:flex h-10 items-center rounded-none bg-black px-6 text-[12px] font-bold uppercase tracking-widest text-white hover:bg-black/90"
                    >
                        {nav.action}
                    </a>
                </div>
            </div>
        </header>
    }
}

/// Decorative background shapes.
#[component]
fn FloatingShapes() -> impl IntoView {
    view! {
        <div aria-hidden="true" class="pointer-events-none absolute inset-0 overflow-hidden">
            <div class="ilnaj-floating-shape rounded-full" style="width: 180px; height: 180px; top: -40px; right: -40px; background: #8B5CF6; opacity: 0.05;"></div>
            <div class="ilnaj-floating-shape rounded-2xl" style="width: 64px; height: 64px; bottom: 30px; left: -10px; background: #3B82F6; opacity: 0.08;"></div>
            <div class="ilnaj-floating-shape rounded-full" style="width: 120px; height: 120px; top: 40px; left: 8%; background: #06B6D4; opacity: 0.04;"></div>
        </div>
    }
}

/// Hero: pitch on the left, phone-frame demo on the right.
#[component]
fn HeroSection(hero: &'static Hero, chat: &'static Chat) -> impl IntoView {
    view! {
        <section class="relative border-b border-black overflow-hidden">
            <FloatingShapes />
            <div class="relative mx-auto grid max-w-[1200px] gap-12 px-6 py-20 md:grid-cols-12 md:py-28">
                <div class="md:col-span-7 flex flex-col justify-center">
                    <h1 class="text-[40px] font-black leading-[1.05] tracking-tighter uppercase md:text-[64px]">
                        {hero.title}
                    </h1>
                    <p class="mt-8 max-w-xl text-[17px] font-medium leading-relaxed text-black/60">
                        {hero.subtitle}
                    </p>

                    <div class="mt-10 flex flex-wrap gap-4">
                        <a
                            href="#preview"
                            class="h-16 inline-flex items-center rounded-none bg-black px-10 text-[16px] font-black uppercase tracking-widest text-white hover:bg-black/90 transition-all shadow-[8px_8px_0px_0px_rgba(0,0,0,0.3)] hover:shadow-[4px_4px_0px_0px_rgba(0,0,0,0.3)] hover:translate-x-1 hover:translate-y-1"
                        >
                            {hero.cta_primary}
                            <Icon name=icons::ARROW_RIGHT class="ml-2 h-5 w-5" />
                        </a>
                        <a
                            href="#contact"
                            class="h-16 inline-flex items-center rounded-none border-2 border-black px-10 text-[16px] font-black uppercase tracking-widest text-black hover:bg-black/10 transition-all"
                        >
                            {hero.cta_secondary}
                        </a>
                    </div>

                    <div class="mt-12 flex flex-wrap gap-3">
                        <HeroBadge text=hero.badge1 />
                        <HeroBadge text=hero.badge2 />
                        <HeroBadge text=hero.badge3 />
                    </div>
                </div>

                <div class="md:col-span-5 mx-auto w-full max-w-[300px]">
                    <MicroConversation t=chat />
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroBadge(text: &'static str) -> impl IntoView {
    view! {
        <span class="border border-black px-3 py-1.5 text-[11px] font-bold uppercase tracking-widest text-black/70">
            {text}
        </span>
    }
}

/// Features: three process cards.
#[component]
fn FeaturesSection(t: &'static Features) -> impl IntoView {
    view! {
        <section id="features" class="border-b border-black bg-gray-50">
            <div class="mx-auto max-w-[1200px] px-6 py-24">
                <div class="text-center mb-16">
                    <div class="text-[13px] font-black tracking-[0.25em] text-black/40 uppercase">
                        {t.kicker}
                    </div>
                    <h2 class="mt-6 text-[34px] font-black leading-tight tracking-tighter md:text-[52px] uppercase">
                        {t.title}
                    </h2>
                    <p class="mt-6 text-[17px] font-medium text-black/60 max-w-2xl mx-auto">
                        {t.subtitle}
                    </p>
                </div>

                <div class="grid gap-8 md:grid-cols-3">
                    <FeatureCard icon=icons::CREDIT_CARD title=t.card1.title desc=t.card1.desc />
                    <FeatureCard icon=icons::CALENDAR title=t.card2.title desc=t.card2.desc />
                    <FeatureCard icon=icons::MESSAGE_CIRCLE title=t.card3.title desc=t.card3.desc />
                </div>
            </div>
        </section>
    }
}

/// Feature card component.
#[component]
fn FeatureCard(icon: &'static str, title: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="border-2 border-black bg-white p-8 shadow-[8px_8px_0px_0px_rgba(0,0,0,1)] hover:shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] hover:translate-x-1 hover:translate-y-1 transition-all">
            <span class="flex h-12 w-12 items-center justify-center bg-black text-white">
                <Icon name=icon class="h-6 w-6" />
            </span>
            <h3 class="mt-6 text-[20px] font-black uppercase tracking-tight">{title}</h3>
            <p class="mt-3 text-[15px] font-medium leading-relaxed text-black/60">{desc}</p>
        </div>
    }
}

/// Integration: the one-line snippet.
#[component]
fn IntegrationSection(t: &'static Integration) -> impl IntoView {
    view! {
        <section id="integration" class="border-b border-black bg-white">
            <div class="mx-auto max-w-[1200px] px-6 py-24">
                <div class="grid gap-12 md:grid-cols-2 items-center">
                    <div>
                        <div class="text-[13px] font-black tracking-[0.25em] text-black/40 uppercase">
                            {t.kicker}
                        </div>
                        <h2 class="mt-6 text-[34px] font-black leading-tight tracking-tighter md:text-[52px] uppercase">
                            {t.title}
                        </h2>
                        <p class="mt-6 text-[17px] font-medium leading-relaxed text-black/60">
                            {t.subtitle}
                        </p>

                        <div class="mt-10 space-y-3">
                            <IntegrationBadge text=t.badge1 />
                            <IntegrationBadge text=t.badge2 />
                            <IntegrationBadge text=t.badge3 />
                        </div>
                    </div>

                    <div class="border-2 border-black bg-black p-8 shadow-[12px_12px_0px_0px_rgba(0,0,0,0.2)]">
                        <div class="flex gap-2 mb-6">
                            <div class="h-3 w-3 rounded-full bg-white/30"></div>
                            <div class="h-3 w-3 rounded-full bg-white/30"></div>
                            <div class="h-3 w-3 rounded-full bg-white/30"></div>
                        </div>
                        <code class="block text-[13px] md:text-[15px] font-mono text-white whitespace-pre-wrap break-all">
                            "<script src=\"https://ilnaj.ai/widget.js\"></script>"
                        </code>
                        <p class="mt-6 text-[12px] font-bold uppercase tracking-widest text-white/40">
                            "That's the whole installation."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn IntegrationBadge(text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <span class="flex h-6 w-6 items-center justify-center bg-black text-white">
                <Icon name=icons::CHECK class="h-3.5 w-3.5" />
            </span>
            <span class="text-[14px] font-bold uppercase tracking-wide">{text}</span>
        </div>
    }
}

/// Device section: browser demo, capability badges and stat cards.
#[component]
fn DeviceSection(
    t: &'static Device,
    live: &'static LiveChat,
    chat: &'static Chat,
) -> impl IntoView {
    view! {
        <section id="device" class="relative bg-white border-b border-black overflow-hidden">
            // Background decoration
            <div class="absolute inset-0 overflow-hidden" aria-hidden="true">
                <div class="absolute top-20 left-10 w-64 h-64 border-2 border-black/5 rotate-12"></div>
                <div class="absolute bottom-20 right-10 w-96 h-96 border-2 border-black/5 -rotate-12"></div>
            </div>

            <div class="relative mx-auto max-w-[1400px] px-6 py-24 md:py-32">
                <div class="text-center mb-20">
                    <div class="text-[13px] font-black tracking-[0.25em] text-black/40 uppercase">
                        {t.kicker}
                    </div>
                    <h2 class="mt-6 text-[34px] font-black leading-tight tracking-tighter md:text-[64px] uppercase max-w-4xl mx-auto">
                        {t.title}
                    </h2>
                    <p class="mt-6 text-[18px] font-medium text-black/60 max-w-2xl mx-auto">
                        {t.subtitle}
                    </p>
                </div>

                <div class="grid lg:grid-cols-12 gap-12 items-start mb-20">
                    <div class="lg:col-span-8">
                        <BrowserDemo t=live assistant=chat.assistant online=chat.online />
                    </div>

                    <div class="lg:col-span-4 space-y-8">
                        <div class="space-y-6">
                            <h3 class="text-xl font-black uppercase tracking-tight">{t.can_do}</h3>
                            <div class="space-y-3">
                                <FeatureBadge icon=icons::MESSAGE_CIRCLE text=t.badge_chat />
                                <FeatureBadge icon=icons::CALENDAR text=t.badge_booking />
                                <FeatureBadge icon=icons::CREDIT_CARD text=t.badge_payments />
                                <FeatureBadge icon=icons::ZAP text=t.badge_always_on />
                            </div>
                        </div>

                        <div class="border-2 border-black p-6 bg-white shadow-[8px_8px_0px_0px_rgba(0,0,0,1)]">
                            <div class="grid grid-cols-2 gap-8">
                                <StatCard value="24/7" label=t.stat_active />
                                <StatCard value="−80%" label=t.stat_workload />
                                <StatCard value="+40%" label=t.stat_leads />
                                <StatCard value="2s" label=t.stat_response />
                            </div>
                        </div>
                    </div>
                </div>

                <div class="text-center">
                    <div class="inline-flex flex-wrap justify-center gap-4">
                        <a
                            href="#contact"
                            class="h-16 inline-flex items-center px-12 rounded-none bg-black text-[16px] font-black uppercase tracking-widest text-white hover:bg-black/90 transition-all shadow-[8px_8px_0px_0px_rgba(0,0,0,0.3)] hover:shadow-[4px_4px_0px_0px_rgba(0,0,0,0.3)] hover:translate-x-1 hover:translate-y-1"
                        >
                            {t.cta}
                            <Icon name=icons::ARROW_RIGHT class="ml-2 w-5 h-5" />
                        </a>
                        <a
                            href="#steps"
                            class="h-16 inline-flex items-center px-12 rounded-none border-2 border-black text-[16px] font-black uppercase tracking-widest text-black hover:bg-black/10 transition-all"
                        >
                            {t.steps}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureBadge(icon: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 bg-white border-2 border-black px-4 py-2 shadow-[4px_4px_0px_0px_rgba(0,0,0,1)]">
            <Icon name=icon class="w-4 h-4" />
            <span class="text-xs font-black uppercase tracking-wide">{text}</span>
        </div>
    }
}

#[component]
fn StatCard(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-4xl md:text-5xl font-black tracking-tighter">{value}</div>
            <div class="text-xs font-medium text-black/50 uppercase tracking-widest mt-1">{label}</div>
        </div>
    }
}

/// Installation steps.
#[component]
fn StepsSection(t: &'static Steps) -> impl IntoView {
    let cards = [
        ("01", &t.s1),
        ("02", &t.s2),
        ("03", &t.s3),
        ("04", &t.s4),
    ];

    view! {
        <section id="steps" class="border-b border-black bg-gray-50">
            <div class="mx-auto max-w-[1200px] px-6 py-24">
                <div class="text-center mb-16">
                    <div class="text-[13px] font-black tracking-[0.25em] text-black/40 uppercase">
                        {t.kicker}
                    </div>
                    <h2 class="mt-6 text-[34px] font-black leading-tight tracking-tighter md:text-[52px] uppercase">
                        {t.title}
                    </h2>
                    <p class="mt-6 text-[17px] font-medium text-black/60 max-w-2xl mx-auto">
                        {t.subtitle}
                    </p>
                </div>

                <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-4">
                    {cards.into_iter().map(|(number, card)| view! {
                        <div class="border-2 border-black bg-white p-6">
                            <div class="text-[32px] font-black tracking-tighter text-black/20">{number}</div>
                            <h3 class="mt-4 text-[17px] font-black uppercase tracking-tight">{card.title}</h3>
                            <p class="mt-3 text-[14px] font-medium leading-relaxed text-black/60">{card.desc}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Closing call to action.
#[component]
fn CtaSection(t: &'static Cta) -> impl IntoView {
    view! {
        <section class="border-t border-black bg-black text-white">
            <div class="mx-auto max-w-[1200px] px-6 py-24 text-center">
                <div class="text-[13px] font-black tracking-[0.25em] text-white/40 uppercase">
                    {t.kicker}
                </div>
                <h2 class="mt-6 text-[34px] font-black leading-tight tracking-tighter md:text-[52px] uppercase">
                    {t.title}
                </h2>
                <p class="mt-6 text-[17px] font-medium text-white/60 max-w-2xl mx-auto">
                    {t.subtitle}
                </p>
                <div class="mt-10 flex flex-wrap justify-center gap-4">
                    <a
                        href="#contact"
                        class="h-16 inline-flex items-center rounded-none bg-white px-10 text-[16px] font-black uppercase tracking-widest text-black hover:bg-white/90 transition-all"
                    >
                        {t.primary}
                    </a>
                    <a
                        href="#top"
                        class="h-16 inline-flex items-center rounded-none border-2 border-white px-10 text-[16px] font-black uppercase tracking-widest text-white hover:bg-white/10 transition-all"
                    >
                        {t.secondary}
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Footer with the legal links.
#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="bg-white">
            <div class="mx-auto flex max-w-[1200px] flex-col items-center justify-between gap-4 px-6 py-10 sm:flex-row">
                <div class="flex items-center gap-2">
                    <div class="h-6 w-6 bg-black"></div>
                    <span class="text-[14px] font-black tracking-tighter uppercase">"ILNAJ"</span>
                </div>
                <div class="flex items-center gap-6">
                    <a href="/about" class="text-[12px] font-bold uppercase tracking-widest text-black/40 hover:text-black transition-colors">
                        "About"
                    </a>
                    <a href="/terms" class="text-[12px] font-bold uppercase tracking-widest text-black/40 hover:text-black transition-colors">
                        "Terms"
                    </a>
                    <a href="/privacy" class="text-[12px] font-bold uppercase tracking-widest text-black/40 hover:text-black transition-colors">
                        "Privacy"
                    </a>
                </div>
                <span class="text-[12px] font-medium text-black/40">
                    "© 2025 ILNAJ. All rights reserved."
                </span>
            </div>
        </footer>
    }
}

/// CSS for the landing animations.
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html {
                scroll-behavior: smooth;
            }

            /* Scripted chat messages fade in as their step is reached */
            @keyframes ilnaj-msg-enter {
                from {
                    opacity: 0;
                    transform: translateY(6px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .ilnaj-msg-enter {
                animation: ilnaj-msg-enter 0.5s ease-out both;
            }

            /* Decorative background shapes drift slowly */
            @keyframes ilnaj-float {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-14px); }
            }

            .ilnaj-floating-shape {
                position: absolute;
                animation: ilnaj-float 9s ease-in-out infinite;
            }

            @media (prefers-reduced-motion: reduce) {
                html {
                    scroll-behavior: auto;
                }
                .ilnaj-msg-enter,
                .ilnaj-floating-shape {
                    animation: none;
                }
            }
            "#
        </style>
    }
}
