//! Phone-frame micro conversation
//!
//! A phone mockup replaying one scripted exchange on a loop: the
//! assistant opens proactively, the visitor answers, the assistant
//! confirms, the widget minimizes, and the cycle restarts.

use leptos::prelude::*;

use crate::core::conversation::{ConversationScript, ConversationStep, StepKind};
use crate::core::i18n::Chat;
use crate::ui::icon::{Icon, icons};
use crate::ui::playback::use_script_playback;

/// The scripted cycle: proactive at 0 ms, visitor reply at 1.2 s, typing
/// at 2.4 s, assistant reply at 3.3 s, minimize at 5.2 s, wrap at 8.2 s.
fn micro_script() -> ConversationScript {
    ConversationScript::new(vec![
        ConversationStep::new(0, StepKind::Proactive),
        ConversationStep::new(1_200, StepKind::UserReply),
        ConversationStep::new(2_400, StepKind::Typing),
        ConversationStep::new(3_300, StepKind::AiReply),
        ConversationStep::new(5_200, StepKind::Minimize),
        ConversationStep::new(8_200, StepKind::Reset),
    ])
    .expect("micro conversation offsets are strictly increasing")
}

/// Phone mockup with the looping micro conversation.
#[component]
pub fn MicroConversation(
    /// Chat copy for the current language
    t: &'static Chat,
) -> impl IntoView {
    let script = micro_script();
    let step = use_script_playback(script.clone());
    let flags = Memo::new(move |_| script.flags_at(step.get()));

    view! {
        <div class="relative">
            <div class="rounded-[44px] border-[3px] border-black bg-white shadow-xl">
                <div class="relative aspect-[9/19] overflow-hidden rounded-[44px] bg-white">
                    // Speaker notch
                    <div class="absolute left-1/2 top-4 h-7 w-36 -translate-x-1/2 rounded-full bg-black"></div>

                    <div class="absolute inset-x-0 bottom-0 top-28 px-7 pb-7">
                        <div class="relative h-full rounded-3xl border border-black bg-white p-4 shadow-sm">
                            <div class="flex items-center justify-between border-b border-black pb-2">
                                <div class="text-[13px] font-bold text-black">{t.assistant}</div>
                                <div class="text-[11px] font-bold uppercase tracking-wider text-black">
                                    {t.online}
                                </div>
                            </div>

                            <div class="mt-4 space-y-3">
                                <Show when=move || flags.get().show_proactive>
                                    <div class="ilnaj-msg-enter max-w-[86%] rounded-xl border border-black bg-black px-3 py-2 text-[13px] leading-relaxed text-white">
                                        {t.proactive}
                                    </div>
                                </Show>

                                <Show when=move || flags.get().show_user>
                                    <div class="ilnaj-msg-enter ml-auto max-w-[86%] rounded-xl border border-black bg-white px-3 py-2 text-[13px] leading-relaxed text-black">
                                        {t.user}
                                    </div>
                                </Show>

                                <Show when=move || {
                                    let f = flags.get();
                                    f.show_typing && !f.show_ai
                                }>
                                    <div class="ilnaj-msg-enter inline-flex max-w-[70%] items-center gap-1 rounded-xl border border-black bg-black px-3 py-2">
                                        <span class="h-1.5 w-1.5 animate-bounce rounded-full bg-white" style="animation-delay: -0.2s"></span>
                                        <span class="h-1.5 w-1.5 animate-bounce rounded-full bg-white" style="animation-delay: -0.1s"></span>
                                        <span class="h-1.5 w-1.5 animate-bounce rounded-full bg-white"></span>
                                    </div>
                                </Show>

                                <Show when=move || flags.get().show_ai>
                                    <div class="ilnaj-msg-enter max-w-[92%] rounded-xl border border-black bg-black px-3 py-2 text-[13px] leading-relaxed text-white">
                                        {t.ai_response}
                                    </div>
                                </Show>
                            </div>

                            // Widget pill, flips its label once the booking lands
                            <div class="absolute bottom-4 right-4">
                                <div class="flex items-center gap-2 rounded-full border border-black bg-white px-3 py-2 text-[12px] font-bold text-black">
                                    <span class="inline-flex h-7 w-7 items-center justify-center rounded-full bg-black text-white">
                                        <Icon name=icons::SPARKLES class="h-4 w-4" />
                                    </span>
                                    {move || if flags.get().minimized { t.minimized } else { t.chat }}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
