//! Demo preview page
//!
//! Shows a generated preview: the visitor's website in a dimmed,
//! non-interactive frame with the mock widget floating over it. The page
//! reads the preview id from the path and the business name and target
//! URL from query parameters.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_params_map, use_query_map};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::ui::icon::{Icon, icons};

/// Which frame the preview renders in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame {
    Mobile,
    Desktop,
}

/// Demo preview page component.
#[component]
pub fn DemoPreviewPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    let preview_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let business_name = move || {
        query.with(|q| {
            q.get("business")
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| "Your Business".to_string())
        })
    };
    let target_url = move || query.with(|q| q.get("url").unwrap_or_default());

    let frame = RwSignal::new(Frame::Mobile);

    let visit_site = move |_| {
        let url = target_url();
        #[cfg(not(feature = "ssr"))]
        {
            if !url.is_empty() {
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(&url, "_blank");
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = url;
        }
    };

    view! {
        <Title text="AI Assistant Preview - ILNAJ" />

        <div class="min-h-screen bg-gray-50 font-sans flex flex-col">
            // Header
            <header class="bg-white border-b border-black sticky top-0 z-50">
                <div class="max-w-[1400px] mx-auto h-16 flex items-center justify-between px-6">
                    <div class="flex items-center gap-6">
                        <a href="/" class="inline-flex h-10 items-center gap-2 font-bold uppercase tracking-wider text-[13px] hover:underline">
                            <Icon name=icons::ARROW_LEFT class="h-4 w-4" />
                            "Back"
                        </a>
                        <div class="h-6 w-px bg-black/20"></div>
                        <div class="flex items-center gap-3">
                            <div class="h-6 w-6 bg-black"></div>
                            <span class="font-black uppercase tracking-tighter text-lg">
                                {business_name}
                                <span class="text-black/40 font-medium tracking-normal text-sm ml-2">
                                    "AI Assistant Preview"
                                </span>
                            </span>
                        </div>
                    </div>

                    <div class="flex items-center gap-4">
                        <div class="flex border border-black p-1 gap-1">
                            <button
                                class="h-8 w-8 flex items-center justify-center rounded-none transition-colors"
                                class:bg-black=move || frame.get() == Frame::Mobile
                                class:text-white=move || frame.get() == Frame::Mobile
                                on:click=move |_| frame.set(Frame::Mobile)
                                aria-label="Mobile frame"
                            >
                                <Icon name=icons::SMARTPHONE class="h-4 w-4" />
                            </button>
                            <button
                                class="h-8 w-8 flex items-center justify-center rounded-none transition-colors"
                                class:bg-black=move || frame.get() == Frame::Desktop
                                class:text-white=move || frame.get() == Frame::Desktop
                                on:click=move |_| frame.set(Frame::Desktop)
                                aria-label="Desktop frame"
                            >
                                <Icon name=icons::MONITOR class="h-4 w-4" />
                            </button>
                        </div>

                        <Show when=move || !target_url().is_empty()>
                            <button
                                class="h-9 inline-flex items-center rounded-none bg-black px-4 text-[12px] font-bold uppercase tracking-widest text-white hover:bg-black/90"
                                on:click=visit_site
                            >
                                "Visit Site"
                                <Icon name=icons::EXTERNAL_LINK class="ml-2 h-3 w-3" />
                            </button>
                        </Show>
                    </div>
                </div>
            </header>

            // Device frame
            <main class="flex-1 overflow-hidden relative flex items-center justify-center p-8">
                <div
                    class="relative bg-white border-black shadow-2xl transition-all duration-500 ease-in-out"
                    class=("w-[375px]", move || frame.get() == Frame::Mobile)
                    class=("h-[667px]", move || frame.get() == Frame::Mobile)
                    class=("rounded-[3rem]", move || frame.get() == Frame::Mobile)
                    class=("border-[8px]", move || frame.get() == Frame::Mobile)
                    class=("w-full", move || frame.get() == Frame::Desktop)
                    class=("max-w-6xl", move || frame.get() == Frame::Desktop)
                    class=("h-[80vh]", move || frame.get() == Frame::Desktop)
                    class=("border-[3px]", move || frame.get() == Frame::Desktop)
                >
                    // Mock widget overlay
                    <div class="absolute bottom-6 right-6 z-20">
                        <div class="bg-black text-white p-4 rounded-none shadow-xl flex items-center gap-3 max-w-[300px] cursor-pointer hover:scale-105 transition-transform">
                            <div class="h-10 w-10 bg-white rounded-full flex items-center justify-center shrink-0">
                                <div class="h-3 w-3 bg-black rounded-full animate-pulse"></div>
                            </div>
                            <div class="space-y-1">
                                <div class="text-[10px] font-bold uppercase tracking-widest opacity-70">
                                    "AI Assistant"
                                </div>
                                <div class="text-[13px] font-bold leading-tight">
                                    {move || format!("Hi! I can help you book an appointment at {}.", business_name())}
                                </div>
                            </div>
                        </div>
                    </div>

                    // Target site, dimmed and non-interactive
                    <div class="w-full h-full bg-gray-100 flex items-center justify-center overflow-hidden relative">
                        {move || {
                            let url = target_url();
                            if url.is_empty() {
                                view! {
                                    <div class="text-center p-8">
                                        <div class="text-4xl font-black text-black/10 mb-4">"PREVIEW"</div>
                                        <p class="text-black/40 font-medium">
                                            {move || format!("Content for ID: {}", preview_id())}
                                        </p>
                                    </div>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <iframe
                                        src=url
                                        class="w-full h-full border-0 opacity-50 grayscale hover:grayscale-0 transition-all duration-700 pointer-events-none"
                                        title="Website Preview"
                                    ></iframe>
                                }
                                .into_any()
                            }
                        }}

                        // Keeps the embedded site inert
                        <div class="absolute inset-0 bg-black/5 pointer-events-none"></div>
                    </div>
                </div>
            </main>
        </div>
    }
}
