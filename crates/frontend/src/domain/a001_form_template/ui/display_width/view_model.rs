use super::layout::apply_layout_class;
use super::model::MessageHandler;
use super::state::{create_state, DisplayWidthState, EditorTarget, UpdateOutcome};
use crate::shared::config::EditorConfig;
use contracts::enums::DisplayWidth;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the display width panel
#[derive(Clone, Copy)]
pub struct DisplayWidthViewModel {
    pub state: RwSignal<DisplayWidthState>,
    target: StoredValue<EditorTarget>,
    config: StoredValue<EditorConfig>,
    handler: StoredValue<Rc<dyn MessageHandler>, LocalStorage>,
}

impl DisplayWidthViewModel {
    pub fn new(
        target: EditorTarget,
        config: EditorConfig,
        initial_width: DisplayWidth,
        handler: Rc<dyn MessageHandler>,
    ) -> Self {
        Self {
            state: create_state(initial_width),
            target: StoredValue::new(target),
            config: StoredValue::new(config),
            handler: StoredValue::new_local(handler),
        }
    }

    pub fn activate(&self) {
        self.state.update(|s| s.activate());
    }

    pub fn cancel(&self) {
        self.state.update(|s| s.cancel());
    }

    pub fn blur(&self) {
        self.state.update(|s| s.blur());
    }

    /// New option picked: apply it right away, keeping the panel open
    pub fn select_width(&self, code: String) {
        let Some(width) = DisplayWidth::from_code(&code) else {
            log::warn!("ignoring unknown display width {code:?}");
            return;
        };
        self.state.update(|s| s.select(width));
        self.dispatch(false);
    }

    /// Update button: save and collapse on success
    pub fn update_command(&self) {
        self.dispatch(true);
    }

    fn dispatch(&self, hide_content: bool) {
        let target = self.target.get_value();
        let Some(pending) = self
            .state
            .try_update(|s| s.begin_update(&target, hide_content))
        else {
            return;
        };

        let state = self.state;
        let handler = self.handler.get_value();
        let layout_selector = self.config.with_value(|c| c.layout_selector.clone());

        log::debug!(
            "sending form template update #{} for {}",
            pending.seq,
            pending.request.form_template_id
        );
        leptos::task::spawn_local(async move {
            let response = handler.send(&pending.request).await;
            let Some(outcome) = state.try_update(|s| s.complete(&pending, &response)) else {
                return;
            };

            match outcome {
                UpdateOutcome::Confirmed { layout_class } => {
                    log::info!("form template {} updated", pending.request.form_template_id);
                    if let Some(class) = layout_class {
                        if let Err(e) = apply_layout_class(&layout_selector, class) {
                            log::warn!("layout column not updated: {e}");
                        }
                    }
                }
                UpdateOutcome::Failed(message) => {
                    log::warn!("form template update #{} failed: {message}", pending.seq);
                }
                UpdateOutcome::Stale => {
                    log::debug!("discarding stale response for update #{}", pending.seq);
                }
            }
        });
    }
}
