//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;

/// Not found (404) page component.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - ILNAJ" />

        <main class="min-h-screen bg-white text-black font-sans flex flex-col items-center justify-center p-6">
            <div class="text-center">
                <div class="text-[96px] font-black tracking-tighter leading-none">"404"</div>
                <h1 class="mt-4 text-[24px] font-black uppercase tracking-tight">
                    "Page Not Found"
                </h1>
                <p class="mt-4 max-w-md text-[15px] font-medium text-black/60">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <a
                    href="/"
                    class="mt-10 inline-flex h-14 items-center rounded-none bg-black px-10 text-[14px] font-black uppercase tracking-widest text-white hover:bg-black/90 transition-all"
                >
                    "Back to Home"
                </a>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-[12px] font-medium text-black/40">"© 2025 ILNAJ"</p>
            </div>
        </main>
    }
}
