//! Chat transcript with a loading indicator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `AssistState::messages` in order. Assistant replies are rendered
//! as sanitized Markdown; user text is shown verbatim.

use leptos::prelude::*;

use crate::state::assist::{AssistState, Message, Role};
use crate::state::slices;
use crate::util::markdown::render_markdown_html;

/// Ordered message list followed by a "Thinking…" row while an exchange is
/// in flight.
#[component]
pub fn MessageList() -> impl IntoView {
    let assist = expect_context::<RwSignal<AssistState>>();
    let messages = slices::messages(assist);
    let loading = slices::loading(assist);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        messages.track();
        loading.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="message-list" node_ref=messages_ref>
            <For
                each=move || messages.get()
                key=|msg: &Message| msg.id.clone()
                children=|msg: Message| view! { <ChatBubble role=msg.role content=msg.content/> }
            />

            {move || {
                loading.get().then(|| {
                    view! {
                        <div class="message-list__thinking">
                            <span class="message-list__pulse" aria-hidden="true"></span>
                            "Thinking…"
                        </div>
                    }
                })
            }}
        </div>
    }
}

#[component]
fn ChatBubble(role: Role, content: String) -> impl IntoView {
    let is_user = role == Role::User;

    view! {
        <div class="chat-bubble" class:chat-bubble--user=is_user class:chat-bubble--assistant={!is_user}>
            <div class="chat-bubble__body">
                {if is_user {
                    view! { <span>{content}</span> }.into_any()
                } else {
                    let rendered = render_markdown_html(&content);
                    view! { <div class="chat-bubble__markdown" inner_html=rendered></div> }.into_any()
                }}
            </div>
        </div>
    }
}
