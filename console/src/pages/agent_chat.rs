//! Agent chat page: roster on the left, conversation on the right.

#[cfg(test)]
#[path = "agent_chat_test.rs"]
mod agent_chat_test;

use leptos::prelude::*;

use crate::components::chat_interface::AgentChatInterface;
use crate::state::chat::{AGENTS, AgentProfile, ChatState, agent_by_name};

/// Resolve a roster click. `None` when `next` is already the active agent.
#[must_use]
pub fn switch_agent(current: &AgentProfile, next: &str) -> Option<&'static AgentProfile> {
    (current.name != next).then(|| agent_by_name(next))
}

#[component]
pub fn AgentChatPage() -> impl IntoView {
    let agent = RwSignal::new(AGENTS[0].clone());
    let chat = RwSignal::new(ChatState::default());

    let pick = move |name: &'static str| {
        if let Some(next) = agent.with_untracked(|current| switch_agent(current, name)) {
            log::debug!("switching chat to {}", next.name);
            chat.update(ChatState::reset);
            agent.set(next.clone());
        }
    };

    view! {
        <div class="page chat-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Agent Chat"</h1>
                    <p class="page__subtitle">"Brainstorm with a specialist agent."</p>
                </div>
            </header>
            <div class="chat-page__grid">
                <ul class="chat-page__roster">
                    {AGENTS
                        .iter()
                        .map(|profile| {
                            let name = profile.name;
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class=format!("chat-page__agent accent--{}", profile.color)
                                        class:chat-page__agent--active=move || agent.with(|a| a.name == name)
                                        on:click=move |_| pick(name)
                                    >
                                        <span class="chat-page__agent-name">{name}</span>
                                        <span class="chat-page__agent-title">{profile.title}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <AgentChatInterface agent=agent chat=chat/>
            </div>
        </div>
    }
}
