//! Language context
//!
//! Holds the visitor's current language as a signal, persisted to
//! localStorage. Components resolve their copy table from it once via
//! `translations(lang)` and pass the sub-structs down explicitly.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::i18n::Lang;

#[cfg(not(feature = "ssr"))]
const STORAGE_KEY: &str = "ilnaj-lang";

/// Language context for the component tree.
#[derive(Clone, Copy)]
pub struct LanguageContext {
    pub lang: RwSignal<Lang>,
}

impl LanguageContext {
    /// Switch language and persist the choice.
    pub fn set(&self, lang: Lang) {
        self.lang.set(lang);
        persist_lang(lang);
    }

    /// Flip between the two shipped languages.
    pub fn toggle(&self) {
        self.set(self.lang.get().toggled());
    }
}

#[cfg(not(feature = "ssr"))]
fn persist_lang(lang: Lang) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, lang.as_str());
        }
    }
}

#[cfg(feature = "ssr")]
fn persist_lang(_lang: Lang) {}

/// Provide the language context to the application.
///
/// Starts as English on both server and client to avoid a hydration
/// mismatch; a persisted choice is restored after hydration.
pub fn provide_language_context() -> LanguageContext {
    let lang = RwSignal::new(Lang::default());
    let ctx = LanguageContext { lang };

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                        lang.set(Lang::from_str(&stored));
                    }
                }
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Use the language context from anywhere in the component tree.
pub fn use_language_context() -> LanguageContext {
    expect_context::<LanguageContext>()
}
