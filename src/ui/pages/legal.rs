//! Legal pages
//!
//! Terms of service and privacy policy, rendered in a shared layout with
//! a back-to-home header.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::icon::{Icon, icons};

/// Shared chrome for the legal pages.
#[component]
fn LegalLayout(
    title: &'static str,
    last_updated: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <main class="min-h-screen bg-white text-black font-sans">
            <header class="sticky top-0 z-50 border-b border-black bg-white/95 backdrop-blur">
                <div class="mx-auto flex h-16 max-w-[1200px] items-center justify-between px-6">
                    <a href="/" class="flex items-center gap-2 cursor-pointer group">
                        <div class="h-8 w-8 bg-black transition-transform group-hover:scale-90"></div>
                        <div class="text-[16px] font-black tracking-tighter uppercase">"ILNAJ"</div>
                    </a>

                    <a
                        href="/"
                        class="h-10 inline-flex items-center gap-2 rounded-none border-2 border-black px-4 text-[12px] font-bold uppercase tracking-widest hover:bg-black/10 transition-colors"
                    >
                        <Icon name=icons::ARROW_LEFT class="h-4 w-4" />
                        "Back to Home"
                    </a>
                </div>
            </header>

            <div class="mx-auto max-w-[800px] px-6 py-16">
                <h1 class="text-[34px] font-black uppercase tracking-tighter md:text-[44px]">
                    {title}
                </h1>
                <p class="mt-2 text-[13px] font-bold uppercase tracking-widest text-black/40">
                    {format!("Last updated: {last_updated}")}
                </p>

                <div class="mt-12 space-y-10">{children()}</div>
            </div>
        </main>
    }
}

#[component]
fn LegalSection(heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <section>
            <h2 class="text-[20px] font-black uppercase tracking-tight">{heading}</h2>
            <div class="mt-3 space-y-3 text-[15px] font-medium leading-relaxed text-black/70">
                {children()}
            </div>
        </section>
    }
}

/// Terms of service page.
#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <Title text="Terms of Service - ILNAJ" />

        <LegalLayout title="Terms of Service" last_updated="January 2025">
            <LegalSection heading="1. Acceptance of Terms">
                <p>
                    "By accessing or using the ILNAJ website and services, you agree to be bound by these terms. If you do not agree, do not use the service."
                </p>
            </LegalSection>

            <LegalSection heading="2. The Service">
                <p>
                    "ILNAJ provides conversational AI assistants that can be embedded on customer websites to handle sales, appointment bookings, and support conversations. Demo previews generated through this site are illustrative, time-limited, and not a production deployment."
                </p>
            </LegalSection>

            <LegalSection heading="3. Acceptable Use">
                <p>
                    "You agree not to misuse the service, including attempting to disrupt its operation, submitting unlawful content through forms, or generating previews for websites you have no right to represent."
                </p>
            </LegalSection>

            <LegalSection heading="4. Intellectual Property">
                <p>
                    "All content on this site, including the ILNAJ name, logo, copy, and software, is owned by ILNAJ or its licensors and protected by applicable law. You may not reproduce it without prior written permission."
                </p>
            </LegalSection>

            <LegalSection heading="5. Disclaimer">
                <p>
                    "The service is provided \"as is\" without warranties of any kind. ILNAJ does not guarantee uninterrupted availability of the website or of demo previews."
                </p>
            </LegalSection>

            <LegalSection heading="6. Contact">
                <p>
                    "Questions about these terms can be sent through the contact form on the home page."
                </p>
            </LegalSection>
        </LegalLayout>
    }
}

/// Privacy policy page.
#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Title text="Privacy Policy - ILNAJ" />

        <LegalLayout title="Privacy Policy" last_updated="January 2025">
            <LegalSection heading="1. Data We Collect">
                <p>
                    "When you submit the contact form we store the name, email address, and message you provide. When you request a demo preview we process the website URL and business details you enter in order to generate the preview."
                </p>
            </LegalSection>

            <LegalSection heading="2. How We Use It">
                <p>
                    "Contact submissions are used to respond to your inquiry and for sales follow-up. Preview details are used to generate your personalized demo and to understand which businesses are interested in ILNAJ."
                </p>
            </LegalSection>

            <LegalSection heading="3. Storage">
                <p>
                    "Contact submissions are stored on our servers. Demo previews are temporary and expire shortly after they are generated."
                </p>
            </LegalSection>

            <LegalSection heading="4. Sharing">
                <p>
                    "We do not sell your data. Information is shared only with service providers that operate the website infrastructure, and only to the extent needed to run the service."
                </p>
            </LegalSection>

            <LegalSection heading="5. Your Rights">
                <p>
                    "You can ask us at any time to access, correct, or delete the information you submitted. Use the contact form and we will handle the request."
                </p>
            </LegalSection>
        </LegalLayout>
    }
}
