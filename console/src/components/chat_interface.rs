//! Conversation panel for one agent.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the `ChatState` signal and swaps the agent; this component
//! renders the transcript, keeps it scrolled to the newest turn, and turns
//! the composer into `ChatState::send` calls.

use chrono::Utc;
use leptos::html;
use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize};
use crate::components::textarea::Textarea;
use crate::state::chat::{AgentProfile, ChatRole, ChatState, SendOutcome};
use crate::util::format::format_clock;

#[component]
pub fn AgentChatInterface(#[prop(into)] agent: Signal<AgentProfile>, chat: RwSignal<ChatState>) -> impl IntoView {
    let transcript_ref = NodeRef::<html::Div>::new();

    // Keep the newest turn in view.
    Effect::new(move || {
        let count = chat.with(|c| c.turns.len());
        log::trace!("transcript has {count} turns");

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = transcript_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let send = Callback::new(move |()| {
        let responder = agent.get_untracked().responder();
        if let Some(SendOutcome::Rejected(reason)) = chat.try_update(|c| c.send(&responder, Utc::now())) {
            log::debug!("send ignored: {reason:?}");
        }
    });

    let input = Signal::derive(move || chat.with(|c| c.input.clone()));
    let on_input = Callback::new(move |text: String| chat.update(|c| c.input = text));
    let disabled = Signal::derive(move || !chat.with(ChatState::can_send));

    view! {
        <section class="chat">
            <header class="chat__header">
                <h2 class="chat__title">
                    {move || agent.get().name}
                    " - "
                    <span class=move || format!("chat__agent-title accent--{}", agent.get().color)>
                        {move || agent.get().title}
                    </span>
                </h2>
            </header>

            <div class="chat__transcript" node_ref=transcript_ref>
                <Show
                    when=move || chat.with(|c| !c.turns.is_empty())
                    fallback=move || {
                        view! {
                            <p class="chat__empty">
                                {move || format!("Start a new conversation with {}.", agent.get().name)}
                            </p>
                        }
                    }
                >
                    {move || {
                        let color = agent.get().color;
                        chat.get()
                            .turns
                            .into_iter()
                            .map(|turn| {
                                let is_user = turn.role == ChatRole::User;
                                view! {
                                    <div
                                        class="chat__turn"
                                        class:chat__turn--user=is_user
                                        class:chat__turn--assistant=!is_user
                                        data-turn-id=turn.id
                                    >
                                        {(!is_user)
                                            .then(|| {
                                                view! {
                                                    <span
                                                        class=format!("chat__avatar accent--{color}")
                                                        aria-hidden="true"
                                                    >
                                                        "✦"
                                                    </span>
                                                }
                                            })}
                                        <div class="chat__bubble">
                                            <p class="chat__content">{turn.content}</p>
                                            <time class="chat__time">{format_clock(&turn.timestamp)}</time>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </div>

            <footer class="chat__composer">
                {move || {
                    let placeholder = format!("Message {}...", agent.get().name);
                    view! {
                        <Textarea
                            value=input
                            on_input=on_input
                            placeholder=placeholder
                            rows=1
                            on_submit=send
                            class="chat__input"
                        />
                    }
                }}
                <Button size=ButtonSize::Icon disabled=disabled on_click=send title="Send">
                    {move || if chat.with(|c| c.pending) { "…" } else { "➤" }}
                </Button>
            </footer>
        </section>
    }
}
