//! About page
//!
//! A short founder/company page in the same black-and-white brand as the
//! rest of the site.

use leptos::prelude::*;
use leptos_meta::Title;

/// About page component.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About - ILNAJ" />

        <main class="min-h-screen bg-white text-black font-sans">
            <header class="sticky top-0 z-50 border-b border-black bg-white/95 backdrop-blur">
                <div class="mx-auto flex h-16 max-w-[1200px] items-center justify-between px-6">
                    <a href="/" class="flex items-center gap-2 cursor-pointer group">
                        <div class="h-8 w-8 bg-black transition-transform group-hover:scale-90"></div>
                        <div class="text-[16px] font-black tracking-tighter uppercase">"ILNAJ"</div>
                    </a>

                    <a
                        href="/"
                        class="h-10 inline-flex items-center rounded-none bg-black px-6 text-[12px] font-bold uppercase tracking-widest text-white hover:bg-black/90"
                    >
                        "Back to Site"
                    </a>
                </div>
            </header>

            <div class="mx-auto max-w-[1200px] px-6 py-12 md:py-24">
                <div class="grid md:grid-cols-12 gap-12 items-start">
                    // Portrait
                    <div class="md:col-span-5 relative">
                        <div class="border-2 border-black p-3 bg-white relative z-10">
                            <div class="aspect-[4/5] w-full bg-gray-100 overflow-hidden relative">
                                <img
                                    src="/profil.png"
                                    alt="ILNAJ founder"
                                    class="h-full w-full object-cover grayscale"
                                />
                            </div>
                        </div>
                        <div class="absolute -bottom-4 -right-4 h-full w-full border-2 border-black" aria-hidden="true"></div>
                    </div>

                    // Story
                    <div class="md:col-span-7 space-y-8">
                        <div>
                            <div class="text-[13px] font-black tracking-[0.25em] text-black/40 uppercase">
                                "The person behind ILNAJ"
                            </div>
                            <h1 class="mt-4 text-[34px] font-black leading-tight tracking-tighter md:text-[52px] uppercase">
                                "Built by one engineer who hates missed messages."
                            </h1>
                        </div>

                        <div class="space-y-5 text-[16px] font-medium leading-relaxed text-black/70">
                            <p>
                                "ILNAJ started after watching small businesses lose bookings and sales every single night - not because the product was bad, but because nobody was there to answer a simple question at 11pm."
                            </p>
                            <p>
                                "The goal has stayed the same since the first deployment: a conversational assistant that feels native to your website, handles the three conversations that actually matter - buying, booking, and getting help - and stays out of your way."
                            </p>
                            <p>
                                "Every assistant is configured by hand for the business it serves. No generic chatbot scripts, no dead-end conversation trees."
                            </p>
                        </div>

                        <div class="flex flex-wrap gap-4 pt-4">
                            <a
                                href="/#preview"
                                class="h-14 inline-flex items-center rounded-none bg-black px-8 text-[14px] font-black uppercase tracking-widest text-white hover:bg-black/90 transition-all"
                            >
                                "See it on your site"
                            </a>
                            <a
                                href="/#contact"
                                class="h-14 inline-flex items-center rounded-none border-2 border-black px-8 text-[14px] font-black uppercase tracking-widest text-black hover:bg-black/10 transition-all"
                            >
                                "Talk to us"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </main>
    }
}
