//! Browser-frame live chat demo
//!
//! A desktop browser mockup with the widget chatting over a dimmed fake
//! website. Runs the chat-log presentation of the same script engine as
//! the phone demo: messages are revealed one by one with a typing
//! indicator before each assistant turn, then the loop restarts.

use leptos::prelude::*;

use crate::core::conversation::{
    ChatMessage, ConversationScript, ConversationStep, Role, StepKind,
};
use crate::core::i18n::LiveChat;
use crate::ui::icon::{Icon, icons};
use crate::ui::playback::use_script_playback;

/// The scripted cycle. Typing precedes each assistant reply; the long
/// tail before the wrap keeps the finished exchange on screen.
fn live_chat_script() -> ConversationScript {
    ConversationScript::new(vec![
        ConversationStep::new(0, StepKind::Proactive),
        ConversationStep::new(2_000, StepKind::UserReply),
        ConversationStep::new(2_500, StepKind::Typing),
        ConversationStep::new(4_000, StepKind::AiReply),
        ConversationStep::new(5_500, StepKind::UserReply),
        ConversationStep::new(6_000, StepKind::Typing),
        ConversationStep::new(7_500, StepKind::AiReply),
        ConversationStep::new(12_000, StepKind::Reset),
    ])
    .expect("live chat offsets are strictly increasing")
}

fn live_chat_messages(t: &'static LiveChat) -> Vec<ChatMessage> {
    vec![
        ChatMessage::ai(t.m1),
        ChatMessage::user(t.m2),
        ChatMessage::ai(t.m3),
        ChatMessage::user(t.m4),
        ChatMessage::ai(t.m5),
    ]
}

/// The chat widget replaying the scripted exchange.
#[component]
pub fn LiveChatDemo(
    /// Live-chat copy for the current language
    t: &'static LiveChat,
    /// Header label of the widget
    assistant: &'static str,
    /// Presence line under the header label
    online: &'static str,
) -> impl IntoView {
    let script = live_chat_script();
    let messages = live_chat_messages(t);
    let step = use_script_playback(script.clone());

    let revealed = {
        let script = script.clone();
        Memo::new(move |_| script.messages_revealed(step.get()))
    };
    let typing = Memo::new(move |_| script.is_typing(step.get()));

    let visible_messages = {
        let messages = messages.clone();
        move || messages[..revealed.get().min(messages.len())].to_vec()
    };

    // Quick replies appear while the assistant has the last word.
    let show_quick_replies = {
        let messages = messages.clone();
        move || {
            let count = revealed.get().min(messages.len());
            !typing.get() && count > 0 && messages[count - 1].role == Role::Ai
        }
    };

    view! {
        <div class="w-full max-w-xs mx-auto">
            <div class="border-2 border-black bg-white">
                // Chat header
                <div class="bg-black text-white px-4 py-3 flex items-center gap-3">
                    <div class="w-8 h-8 rounded-full bg-white/20 flex items-center justify-center">
                        <Icon name=icons::BOT class="w-4 h-4" />
                    </div>
                    <div>
                        <div class="text-xs font-black uppercase">{assistant}</div>
                        <div class="text-[10px] text-white/60">{online}</div>
                    </div>
                </div>

                // Messages
                <div class="p-4 space-y-3 min-h-[200px] max-h-[200px] overflow-hidden bg-gray-50">
                    <Show when=move || revealed.get() == 0>
                        <div class="text-center text-[10px] text-black/30 py-8">
                            {t.starting}
                        </div>
                    </Show>
                    <For
                        each=visible_messages
                        key=|message| message.text
                        let:message
                    >
                        <div class=if message.role == Role::Ai {
                            "ilnaj-msg-enter text-xs p-2 bg-black text-white"
                        } else {
                            "ilnaj-msg-enter text-xs p-2 bg-gray-200 text-black ml-8"
                        }>
                            {message.text}
                        </div>
                    </For>
                    <Show when=move || typing.get()>
                        <div class="ilnaj-msg-enter bg-black text-white text-xs p-2 inline-flex items-center gap-1">
                            <span class="w-1.5 h-1.5 bg-white/60 rounded-full animate-bounce"></span>
                            <span class="w-1.5 h-1.5 bg-white/60 rounded-full animate-bounce" style="animation-delay: 150ms"></span>
                            <span class="w-1.5 h-1.5 bg-white/60 rounded-full animate-bounce" style="animation-delay: 300ms"></span>
                        </div>
                    </Show>
                </div>

                // Quick replies
                <Show when=show_quick_replies>
                    <div class="p-2 border-t border-black/10 flex gap-2 overflow-x-auto">
                        <button class="text-[10px] bg-black text-white px-3 py-1.5 whitespace-nowrap font-medium">
                            {t.quick_book}
                        </button>
                        <button class="text-[10px] border border-black px-3 py-1.5 whitespace-nowrap font-medium">
                            {t.quick_slots}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// Browser chrome around the live chat demo, with a dimmed fake website
/// behind the widget.
#[component]
pub fn BrowserDemo(
    t: &'static LiveChat,
    assistant: &'static str,
    online: &'static str,
) -> impl IntoView {
    view! {
        <div class="border-[3px] border-black bg-white shadow-[16px_16px_0px_0px_rgba(0,0,0,1)]">
            // Browser header
            <div class="flex items-center justify-between border-b-[3px] border-black bg-white px-6 py-4">
                <div class="flex gap-2">
                    <div class="h-4 w-4 rounded-full bg-black"></div>
                    <div class="h-4 w-4 rounded-full bg-black"></div>
                    <div class="h-4 w-4 rounded-full bg-black"></div>
                </div>
                <div class="flex-1 max-w-md mx-8">
                    <div class="h-8 border-2 border-black bg-gray-50 flex items-center px-4 text-[11px] font-black uppercase tracking-widest text-black/40">
                        "yourwebsite.com"
                    </div>
                </div>
                <div class="w-12"></div>
            </div>

            <div class="relative bg-white">
                // Fake website behind the widget
                <div class="absolute inset-0 p-12 opacity-[0.04]" aria-hidden="true">
                    <div class="flex items-center justify-between mb-12">
                        <div class="h-8 w-28 bg-black"></div>
                        <div class="flex gap-6">
                            <div class="h-3 w-16 bg-black"></div>
                            <div class="h-3 w-16 bg-black"></div>
                            <div class="h-3 w-16 bg-black"></div>
                        </div>
                    </div>
                    <div class="h-24 w-2/3 bg-black mb-6"></div>
                    <div class="space-y-2 mb-12">
                        <div class="h-4 w-full bg-black"></div>
                        <div class="h-4 w-full bg-black"></div>
                        <div class="h-4 w-3/4 bg-black"></div>
                    </div>
                    <div class="grid grid-cols-4 gap-6">
                        <div class="h-32 bg-black"></div>
                        <div class="h-32 bg-black"></div>
                        <div class="h-32 bg-black"></div>
                        <div class="h-32 bg-black"></div>
                    </div>
                </div>

                // Widget demo
                <div class="relative z-10 p-8 min-h-[350px] flex items-end">
                    <LiveChatDemo t=t assistant=assistant online=online />
                </div>
            </div>
        </div>
    }
}
