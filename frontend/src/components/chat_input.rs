use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    pub on_send: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn ChatInput(props: &ChatInputProps) -> Html {
    let draft = use_state(String::new);

    let submit = {
        let draft = draft.clone();
        let on_send = props.on_send.clone();
        let disabled = props.disabled;

        move || {
            let text = draft.trim();
            if text.is_empty() || disabled {
                return;
            }
            on_send.emit(text.to_owned());
            draft.set(String::new());
        }
    };

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            draft.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let onkeypress = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                submit();
            }
        })
    };

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        submit();
    });

    html! {
        <form class="chat-input" {onsubmit}>
            <textarea
                value={(*draft).clone()}
                {oninput}
                {onkeypress}
                placeholder="Ask a question about your uploaded documents..."
                disabled={props.disabled}
                rows="1"
            />
            <button type="submit" disabled={draft.trim().is_empty() || props.disabled}>
                { "Send" }
            </button>
        </form>
    }
}
