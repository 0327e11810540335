use super::model::upload_file;
use super::state::{plan_upload, InitialRender, SelectedFile, UploadPlan, UploadState};
use crate::shared::config::UploadConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn FileUpload(
    /// Endpoint, field name and size limit
    config: UploadConfig,
    /// What the server rendered before the widget took over
    #[prop(optional)]
    initial: InitialRender,
) -> impl IntoView {
    let state = RwSignal::new(UploadState::from_render(initial));
    let config_sv = StoredValue::new(config);

    // Selection is checked against the size limit before anything is sent
    let handle_file_select = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };

        let file = input.files().and_then(|files| files.get(0));
        let selected = file.as_ref().map(|f| SelectedFile {
            name: f.name(),
            size: f.size() as u64,
        });
        let config = config_sv.get_value();

        match plan_upload(selected, &config.file_id_key, config.max_file_size) {
            UploadPlan::Skip => {}
            UploadPlan::Reject(err) => {
                log::warn!("file upload rejected: {err}");
                input.set_value("");
                state.update(|s| s.reject(&err));
            }
            UploadPlan::Submit { field, file: selected } => {
                let Some(file) = file else {
                    return;
                };
                log::debug!(
                    "uploading {} ({} bytes) to {}",
                    selected.name,
                    selected.size,
                    config.file_url
                );
                leptos::task::spawn_local(async move {
                    match upload_file(&config.file_url, &field, file).await {
                        Ok(receipt) => {
                            let file_name = receipt.file_name.unwrap_or(selected.name);
                            log::info!("uploaded {file_name}");
                            state.update(|s| s.apply_success(file_name, receipt.url));
                        }
                        Err(err) => {
                            log::error!("upload failed: {err}");
                            state.update(|s| s.apply_failure(&err));
                        }
                    }
                });
            }
        }
    };

    let field_name = config_sv.with_value(|c| c.file_id_key.clone());

    view! {
        <div class="file-upload" class:has-error=move || state.with(|s| s.has_error())>
            <label
                class="btn btn-secondary file-upload__button"
                class:disabled=move || state.with(|s| s.disabled)
            >
                <span class="file-upload__button-label">
                    {move || state.with(|s| s.button_label)}
                </span>
                <input
                    type="file"
                    class="file-upload__input"
                    name=field_name
                    disabled=move || state.with(|s| s.disabled)
                    on:change=handle_file_select
                />
            </label>
            <span class="file-upload__file-name">
                {move || state.with(|s| s.file_label.clone())}
            </span>
            {move || {
                state.with(|s| {
                    s.file_link.clone().map(|link| {
                        if s.link_as_text {
                            view! { <span class="file-upload__link">{link.text}</span> }.into_any()
                        } else {
                            view! {
                                <a class="file-upload__link" href=link.href target="_blank">
                                    {link.text}
                                </a>
                            }
                            .into_any()
                        }
                    })
                })
            }}
            <ul class="file-upload__errors" hidden=move || !state.with(|s| s.has_error())>
                <For
                    each=move || state.with(|s| s.errors.clone())
                    key=|error| error.clone()
                    children=move |error| view! { <li class="file-upload__error">{error}</li> }
                />
            </ul>
        </div>
    }
}
