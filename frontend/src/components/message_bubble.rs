use chrono::Local;
use shared::Message;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageBubbleProps {
    pub message: Message,
}

#[function_component]
pub fn MessageBubble(props: &MessageBubbleProps) -> Html {
    let message = &props.message;
    let (row, avatar) = if message.is_user {
        ("message message--user", "You")
    } else {
        ("message message--bot", "Bot")
    };
    let time = message
        .timestamp
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();

    html! {
        <div class={row}>
            <div class="message__avatar">{ avatar }</div>
            <div class="message__bubble">
                <p class="message__text">{ message.text.clone() }</p>
                <p class="message__time">{ time }</p>
            </div>
        </div>
    }
}
