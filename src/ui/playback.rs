//! Script playback hook
//!
//! One clock drives every scripted demo on the page: an interval polls
//! the elapsed time since mount and maps it through
//! [`ConversationScript::step_at`]. Because the mapping is
//! elapsed-time-modulo-cycle, a throttled tab resynchronizes on the next
//! tick and the loop restarts itself with no bookkeeping.

use leptos::prelude::*;

use crate::core::conversation::ConversationScript;
use crate::ui::motion::use_motion_context;

/// Poll interval of the playback clock.
#[cfg(not(feature = "ssr"))]
const TICK_MS: u32 = 100;

/// Drive a conversation script on a loop and return the current step
/// index.
///
/// When the visitor prefers reduced motion, playback never starts and the
/// index stays at its initial state; if the preference flips mid-visit,
/// the running clock is torn down.
pub fn use_script_playback(script: ConversationScript) -> ReadSignal<usize> {
    let (step, set_step) = signal(0usize);
    let motion = use_motion_context();

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Interval;

        Effect::new(move |_| {
            if motion.reduce_motion.get() {
                set_step.set(0);
                return;
            }

            let script = script.clone();
            let start = js_sys::Date::now();
            let interval = Interval::new(TICK_MS, move || {
                set_step.set(script.step_at(js_sys::Date::now() - start));
            });
            on_cleanup(move || drop(interval));
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (script, motion, set_step);
    }

    step
}
