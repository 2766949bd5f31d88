use shared::Conversation;
use yew::prelude::*;

use super::{ChatInput, MessageBubble};

#[derive(Properties, PartialEq)]
pub struct ChatWindowProps {
    pub conversation: Conversation,
    pub on_send: Callback<String>,
}

#[function_component]
pub fn ChatWindow(props: &ChatWindowProps) -> Html {
    let convo = &props.conversation;

    let (title, hint) = if convo.has_documents() {
        (
            "Start a conversation",
            "Ask any question about your uploaded documents and get instant AI-powered answers.",
        )
    } else {
        (
            "Upload a document to get started",
            "Upload your documents and start asking questions to get intelligent answers.",
        )
    };

    html! {
        <div class="chat">
            <div class="chat__messages">
                if convo.messages().is_empty() {
                    <div class="chat__empty">
                        <h3>{ title }</h3>
                        <p>{ hint }</p>
                    </div>
                } else {
                    { for convo.messages().iter().map(|message| html! {
                        <MessageBubble key={message.id.clone()} message={message.clone()} />
                    }) }
                }
                if convo.is_loading() {
                    <div class="message message--bot message--typing">
                        <div class="message__avatar">{ "Bot" }</div>
                        <div class="message__bubble">
                            <span class="dot" />
                            <span class="dot" />
                            <span class="dot" />
                        </div>
                    </div>
                }
            </div>
            <ChatInput on_send={props.on_send.clone()} disabled={!convo.input_enabled()} />
        </div>
    }
}
