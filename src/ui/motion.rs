//! Reduced-motion context
//!
//! Detects the visitor's `prefers-reduced-motion` setting and tracks
//! changes to it. The scripted demos consult this before starting
//! playback: with reduced motion requested, they never start at all.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

#[cfg(not(feature = "ssr"))]
const MEDIA_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Motion context for the component tree.
#[derive(Clone, Copy)]
pub struct MotionContext {
    /// Whether the visitor asked for reduced motion.
    pub reduce_motion: RwSignal<bool>,
}

/// Provide the motion context to the application.
///
/// Starts as `false` on both server and client to avoid a hydration
/// mismatch; the real value is read after hydration and kept current
/// through a media-query change listener.
pub fn provide_motion_context() -> MotionContext {
    let reduce_motion = RwSignal::new(false);
    let ctx = MotionContext { reduce_motion };

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media(MEDIA_QUERY) {
                    reduce_motion.set(media_query.matches());

                    let signal = reduce_motion;
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            signal.set(e.matches());
                        },
                    );

                    let _ = media_query.add_event_listener_with_callback(
                        "change",
                        handler.as_ref().unchecked_ref(),
                    );

                    // Keep the closure alive
                    handler.forget();
                }
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Use the motion context from anywhere in the component tree.
pub fn use_motion_context() -> MotionContext {
    expect_context::<MotionContext>()
}
