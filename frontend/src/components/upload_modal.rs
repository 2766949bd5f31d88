use shared::{
    upload::{UploadFailure, ACCEPT_ATTRIBUTE},
    UploadStatus,
};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadModalProps {
    pub is_open: bool,
    pub status: UploadStatus,
    pub on_close: Callback<()>,
    pub on_file: Callback<File>,
}

#[function_component]
pub fn UploadModal(props: &UploadModalProps) -> Html {
    let drag_active = use_state(|| false);

    if !props.is_open {
        return html! {};
    }

    // Both drag handlers must cancel the event or the browser opens the file.
    let ondragover = {
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            drag_active.set(true);
        })
    };
    let ondragenter = ondragover.clone();

    let ondragleave = {
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            drag_active.set(false);
        })
    };

    let ondrop = {
        let drag_active = drag_active.clone();
        let on_file = props.on_file.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            drag_active.set(false);

            if let Some(file) = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0))
            {
                on_file.emit(file);
            }
        })
    };

    let onchange = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file.emit(file);
            }
            // Picking the same file twice should still fire `change`.
            input.set_value("");
        })
    };

    let onclose = props.on_close.reform(|_: MouseEvent| ());

    let zone_class = classes!("dropzone", drag_active.then_some("dropzone--active"));

    let error_text = match &props.status {
        UploadStatus::Error(UploadFailure::Refused { message }) if !message.is_empty() => {
            Some(format!("Upload failed: {message}"))
        }
        UploadStatus::Error(_) => {
            Some("Upload failed. Please try again with a valid document.".to_owned())
        }
        _ => None,
    };

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal__header">
                    <h2>{ "Upload Document" }</h2>
                    <button class="modal__close" onclick={onclose}>{ "×" }</button>
                </div>
                <div class={zone_class} {ondragenter} {ondragover} {ondragleave} {ondrop}>
                    if matches!(props.status, UploadStatus::Success { .. }) {
                        <div class="dropzone__success">
                            <p>{ "Upload successful!" }</p>
                        </div>
                    } else {
                        <p>
                            { "Drag and drop your document here, or " }
                            <label class="dropzone__browse">
                                { "browse files" }
                                <input type="file" class="hidden" accept={ACCEPT_ATTRIBUTE} {onchange} />
                            </label>
                        </p>
                        <p class="dropzone__hint">{ "Supports DOCX and PDF files" }</p>
                    }
                </div>
                if matches!(props.status, UploadStatus::Uploading { .. }) {
                    <div class="modal__progress">
                        <div class="spinner" />
                        <p>{ "Uploading..." }</p>
                    </div>
                }
                if let Some(text) = error_text {
                    <p class="modal__error">{ text }</p>
                }
            </div>
        </div>
    }
}
