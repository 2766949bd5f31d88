use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use shared::{upload::SUCCESS_DISMISS_DELAY, ApiClient, Config};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use crate::{
    components::{ChatWindow, Header, UploadModal},
    rpc::{read_document, GlooTransport},
    state::{ChatAction, ChatState, UploadAction, UploadState},
};

mod components;
mod rpc;
mod state;

type Api = ApiClient<GlooTransport>;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Config,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let api: Rc<Api> = use_memo(
        |config| ApiClient::new(config.clone(), GlooTransport),
        props.config.clone(),
    );

    let chat = use_reducer(ChatState::default);
    let upload = use_reducer(UploadState::default);
    let modal_open = use_state(|| false);

    let on_send = {
        let chat = chat.clone();
        let api = api.clone();

        Callback::from(move |text: String| {
            if !chat.0.accepts(&text) {
                return;
            }
            chat.dispatch(ChatAction::Ask(text.clone()));

            let chat = chat.clone();
            let api = api.clone();
            spawn_local(async move {
                let outcome = api
                    .submit_question(text.trim())
                    .await
                    .map_err(|e| e.to_string());
                chat.dispatch(ChatAction::Answered(outcome));
            });
        })
    };

    let open_modal = {
        let modal_open = modal_open.clone();
        let upload = upload.clone();
        Callback::from(move |()| {
            upload.dispatch(UploadAction::Reset);
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        let upload = upload.clone();
        Callback::from(move |()| {
            modal_open.set(false);
            upload.dispatch(UploadAction::Reset);
        })
    };

    let on_file = {
        let api = api.clone();
        let chat = chat.clone();
        let upload = upload.clone();
        let close_modal = close_modal.clone();

        Callback::from(move |file: File| {
            let file_name = file.name();
            let accepted = upload.0.clone().accept_file(&file_name).is_ok();
            upload.dispatch(UploadAction::Accept(file_name.clone()));
            if !accepted {
                return;
            }

            let api = api.clone();
            let chat = chat.clone();
            let upload = upload.clone();
            let close_modal = close_modal.clone();
            spawn_local(async move {
                let outcome = match read_document(&file).await {
                    Ok(document) => api
                        .submit_document(document)
                        .await
                        .map_err(|e| e.to_string()),
                    Err(e) => Err(e.to_string()),
                };
                let succeeded = matches!(&outcome, Ok(resp) if resp.success);

                upload.dispatch(UploadAction::Finished(outcome));
                if !succeeded {
                    return;
                }

                chat.dispatch(ChatAction::DocumentAccepted(file_name));
                TimeoutFuture::new(SUCCESS_DISMISS_DELAY.as_millis() as u32).await;
                close_modal.emit(());
            });
        })
    };

    html! {
        <div class="app">
            <Header on_upload_click={open_modal} />
            <main class="app__main">
                <ChatWindow conversation={chat.0.clone()} {on_send} />
            </main>
            <UploadModal
                is_open={*modal_open}
                status={upload.0.status().clone()}
                on_close={close_modal}
                {on_file}
            />
            <footer class="app__footer">
                <p>{ "© 2025 Smart FAQ Bot. Powered by AI for intelligent document assistance." }</p>
            </footer>
        </div>
    }
}

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = match Config::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Cannot start: {e}");
            return;
        }
    };
    log::info!("Talking to {}", config.base_url());

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
