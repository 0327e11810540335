use super::model::{MessageHandler, RuntimeMessageHandler};
use super::state::EditorTarget;
use super::view_model::DisplayWidthViewModel;
use crate::shared::components::ui::{Button, Select};
use crate::shared::config::EditorConfig;
use contracts::enums::DisplayWidth;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn DisplayWidthEditor(
    /// Host the background script forwards the update to
    #[prop(into)]
    host: String,
    #[prop(into)]
    form_template_id: String,
    /// Width stored on the template when the page was rendered
    #[prop(optional)]
    initial_width: DisplayWidth,
    #[prop(optional)]
    config: EditorConfig,
    /// Defaults to extension runtime messaging
    #[prop(optional)]
    handler: Option<Rc<dyn MessageHandler>>,
) -> impl IntoView {
    let handler = handler.unwrap_or_else(|| Rc::new(RuntimeMessageHandler));
    let vm = DisplayWidthViewModel::new(
        EditorTarget {
            host,
            form_template_id,
        },
        config,
        initial_width,
        handler,
    );

    let options: Vec<(String, String)> = DisplayWidth::all()
        .into_iter()
        .map(|w| (w.code().to_string(), w.display_name().to_string()))
        .collect();

    let collapsed = move || vm.state.with(|s| !s.expanded);

    view! {
        <div class="display-width-editor">
            <h4 class="display-width-editor__heading" on:click=move |_| vm.activate()>
                "Display width"
            </h4>
            <div class="display-width-editor__panel" hidden=collapsed>
                <Select
                    id="display-width"
                    value=Signal::derive(move || vm.state.with(|s| s.rendered.code().to_string()))
                    options=options
                    hidden=Signal::derive(move || vm.state.with(|s| !s.selector_visible()))
                    on_change=Callback::new(move |code: String| vm.select_width(code))
                    on_blur=Callback::new(move |_: String| vm.blur())
                />
                <div
                    class="alert alert-danger display-width-editor__error"
                    hidden=move || vm.state.with(|s| s.error.is_none())
                >
                    {move || vm.state.with(|s| s.error.clone().unwrap_or_default())}
                </div>
                <div class="display-width-editor__actions">
                    <Button class="display-width-editor__update" on_click=Callback::new(move |_| vm.update_command())>
                        {move || vm.state.with(|s| s.primary_label)}
                    </Button>
                    <Button variant="link" on_click=Callback::new(move |_| vm.cancel())>
                        "Cancel"
                    </Button>
                </div>
            </div>
        </div>
    }
}
