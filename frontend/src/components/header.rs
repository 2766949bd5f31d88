use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_upload_click: Callback<()>,
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let onclick = props.on_upload_click.reform(|_: MouseEvent| ());

    html! {
        <header class="header">
            <div class="header__brand">
                <h1>{ "Smart FAQ Bot" }</h1>
                <p class="header__tagline">{ "AI-powered document assistant" }</p>
            </div>
            <button class="header__upload" {onclick}>{ "Upload Document" }</button>
        </header>
    }
}
