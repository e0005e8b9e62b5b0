use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{
    AboutPage, DemoPreviewPage, HomePage, NotFoundPage, PrivacyPage, TermsPage,
};
use crate::ui::{
    ToastContainer, provide_language_context, provide_motion_context, provide_toasts,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // App-wide contexts: language, reduced-motion detection, toasts
    let _language = provide_language_context();
    let _motion = provide_motion_context();
    let _toasts = provide_toasts();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/ilnaj_site.css"/>

        // sets the document title
        <Title text="ILNAJ - Conversational AI Assistants for Your Website"/>

        <ToastContainer />

        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/demo-preview/:id") view=DemoPreviewPage />
                <Route path=path!("/terms") view=TermsPage />
                <Route path=path!("/privacy") view=PrivacyPage />
            </Routes>
        </Router>
    }
}
