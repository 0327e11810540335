use super::layout::layout_class;
use contracts::domain::a001_form_template::FormTemplatePart;
use contracts::enums::DisplayWidth;
use contracts::shared::messaging::{ApiResponse, UpdateRequest};
use leptos::prelude::*;

pub const EDIT_LABEL: &str = "Edit";
pub const UPDATE_LABEL: &str = "Update";

/// Form template the editor is bound to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorTarget {
    pub host: String,
    pub form_template_id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayWidthState {
    pub expanded: bool,
    /// Width currently chosen in the selector
    pub selected: DisplayWidth,
    /// Width the `<select>` is rendered with. Refreshed on blur and on
    /// confirmation so a re-render never snaps the control back.
    pub rendered: DisplayWidth,
    pub error: Option<String>,
    pub primary_label: &'static str,
    latest_seq: u64,
}

/// Request handed to the message handler, with what is needed to apply
/// its response later
#[derive(Clone, Debug, PartialEq)]
pub struct PendingUpdate {
    pub seq: u64,
    pub hide_content: bool,
    pub request: UpdateRequest,
}

impl PendingUpdate {
    /// Width carried by the request, `None` when the selector was hidden
    pub fn sent_width(&self) -> Option<DisplayWidth> {
        self.request.data.form_template.display_width
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A newer request was dispatched meanwhile; nothing was applied
    Stale,
    Confirmed { layout_class: Option<&'static str> },
    Failed(String),
}

impl DisplayWidthState {
    pub fn new(initial: DisplayWidth) -> Self {
        Self {
            expanded: false,
            selected: initial,
            rendered: initial,
            error: None,
            primary_label: EDIT_LABEL,
            latest_seq: 0,
        }
    }

    /// The selector is only shown, and its value only sent, while expanded
    pub fn selector_visible(&self) -> bool {
        self.expanded
    }

    pub fn activate(&mut self) {
        self.expanded = true;
        self.primary_label = UPDATE_LABEL;
    }

    /// Collapse the panel. Responses still in flight become stale.
    pub fn cancel(&mut self) {
        self.error = None;
        self.expanded = false;
        self.latest_seq += 1;
    }

    pub fn select(&mut self, width: DisplayWidth) {
        self.selected = width;
    }

    pub fn blur(&mut self) {
        self.rendered = self.selected;
    }

    pub fn begin_update(&mut self, target: &EditorTarget, hide_content: bool) -> PendingUpdate {
        let mut part = FormTemplatePart::new(target.form_template_id.clone());
        if self.selector_visible() {
            part = part.with_display_width(self.selected);
        }

        self.latest_seq += 1;
        PendingUpdate {
            seq: self.latest_seq,
            hide_content,
            request: UpdateRequest::update_form_template(target.host.clone(), part),
        }
    }

    pub fn complete(&mut self, pending: &PendingUpdate, response: &ApiResponse) -> UpdateOutcome {
        if pending.seq != self.latest_seq {
            return UpdateOutcome::Stale;
        }

        if let Some(message) = response.failure_message() {
            self.error = Some(message.clone());
            return UpdateOutcome::Failed(message);
        }

        self.error = None;
        if pending.hide_content {
            self.expanded = false;
        }
        let class = pending.sent_width().and_then(|width| {
            self.rendered = width;
            layout_class(width.code())
        });
        UpdateOutcome::Confirmed {
            layout_class: class,
        }
    }
}

// Create state within component scope so it is disposed with the editor
pub fn create_state(initial: DisplayWidth) -> RwSignal<DisplayWidthState> {
    RwSignal::new(DisplayWidthState::new(initial))
}

#[cfg(test)]
mod tests {
    use super::super::layout::{FULL_WIDTH_CLASS, THREE_QUARTERS_CLASS, TWO_THIRDS_CLASS};
    use super::*;
    use serde_json::json;

    fn target() -> EditorTarget {
        EditorTarget {
            host: "tasks.example.com".to_string(),
            form_template_id: "tpl-7".to_string(),
        }
    }

    fn ok() -> ApiResponse {
        ApiResponse::from(json!({ "ok": true }))
    }

    #[test]
    fn test_initial_state_is_collapsed() {
        let state = DisplayWidthState::new(DisplayWidth::Large);
        assert!(!state.expanded);
        assert_eq!(state.rendered, DisplayWidth::Large);
        assert_eq!(state.primary_label, EDIT_LABEL);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut state = DisplayWidthState::new(DisplayWidth::Default);
        state.activate();
        let once = state.clone();
        state.activate();
        assert_eq!(state, once);
        assert!(state.expanded);
        assert_eq!(state.primary_label, UPDATE_LABEL);
    }

    #[test]
    fn test_cancel_hides_panel_and_error() {
        let mut state = DisplayWidthState::new(DisplayWidth::Medium);
        state.activate();
        state.select(DisplayWidth::Large);
        let pending = state.begin_update(&target(), true);
        state.complete(&pending, &ApiResponse::from(json!({ "ok": false, "error": "boom" })));
        assert!(state.error.is_some());

        state.cancel();
        assert!(!state.expanded);
        assert!(state.error.is_none());
        assert_eq!(state.selected, DisplayWidth::Large);
    }

    #[test]
    fn test_response_after_cancel_is_stale() {
        let mut state = DisplayWidthState::new(DisplayWidth::Medium);
        state.activate();
        let pending = state.begin_update(&target(), true);
        state.cancel();

        let late = ApiResponse::from(json!({ "ok": false, "error": "template not found" }));
        assert_eq!(state.complete(&pending, &late), UpdateOutcome::Stale);
        assert!(state.error.is_none());

        state.activate();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_width_sent_only_while_selector_visible() {
        let mut state = DisplayWidthState::new(DisplayWidth::Large);
        let hidden = state.begin_update(&target(), true);
        assert_eq!(hidden.sent_width(), None);
        assert_eq!(
            serde_json::to_value(&hidden.request).unwrap()["data"]["formTemplate"],
            json!({ "_id": "tpl-7" })
        );

        state.activate();
        let visible = state.begin_update(&target(), true);
        assert_eq!(visible.sent_width(), Some(DisplayWidth::Large));
        assert_eq!(visible.request.form_template_id, "tpl-7");
        assert_eq!(visible.request.host, "tasks.example.com");
    }

    #[test]
    fn test_confirmed_width_maps_to_layout_class() {
        let cases = [
            (DisplayWidth::Default, TWO_THIRDS_CLASS),
            (DisplayWidth::Medium, TWO_THIRDS_CLASS),
            (DisplayWidth::Large, THREE_QUARTERS_CLASS),
            (DisplayWidth::ExtraLarge, FULL_WIDTH_CLASS),
        ];
        for (width, class) in cases {
            let mut state = DisplayWidthState::new(DisplayWidth::Default);
            state.activate();
            state.select(width);
            let pending = state.begin_update(&target(), false);
            assert_eq!(
                state.complete(&pending, &ok()),
                UpdateOutcome::Confirmed {
                    layout_class: Some(class)
                }
            );
            assert_eq!(state.rendered, width);
        }
    }

    #[test]
    fn test_confirmation_without_width_leaves_layout() {
        let mut state = DisplayWidthState::new(DisplayWidth::Large);
        let pending = state.begin_update(&target(), true);
        assert_eq!(
            state.complete(&pending, &ok()),
            UpdateOutcome::Confirmed { layout_class: None }
        );
    }

    #[test]
    fn test_select_scenario_keeps_panel_open() {
        let mut state = DisplayWidthState::new(DisplayWidth::Medium);
        state.activate();
        state.select(DisplayWidth::ExtraLarge);
        let pending = state.begin_update(&target(), false);

        let outcome = state.complete(&pending, &ok());
        assert_eq!(
            outcome,
            UpdateOutcome::Confirmed {
                layout_class: Some(FULL_WIDTH_CLASS)
            }
        );
        assert!(state.error.is_none());
        assert!(state.expanded);
    }

    #[test]
    fn test_explicit_update_collapses_on_success() {
        let mut state = DisplayWidthState::new(DisplayWidth::Medium);
        state.activate();
        let pending = state.begin_update(&target(), true);
        state.complete(&pending, &ok());
        assert!(!state.expanded);
    }

    #[test]
    fn test_failed_update_keeps_panel_open() {
        let mut state = DisplayWidthState::new(DisplayWidth::Medium);
        state.activate();
        let pending = state.begin_update(&target(), true);

        let response = ApiResponse::from(json!({ "ok": false, "error": "template not found" }));
        assert_eq!(
            state.complete(&pending, &response),
            UpdateOutcome::Failed("template not found".to_string())
        );
        assert_eq!(state.error.as_deref(), Some("template not found"));
        assert!(state.expanded);
    }

    #[test]
    fn test_failure_without_error_shows_whole_response() {
        let mut state = DisplayWidthState::new(DisplayWidth::Medium);
        state.activate();
        let pending = state.begin_update(&target(), false);
        state.complete(&pending, &ApiResponse::from(json!({ "ok": false, "code": 3 })));
        assert_eq!(state.error.as_deref(), Some(r#"{"code":3,"ok":false}"#));
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut state = DisplayWidthState::new(DisplayWidth::Medium);
        state.activate();
        let failed = state.begin_update(&target(), false);
        state.complete(&failed, &ApiResponse::transport_failure("offline"));
        let retried = state.begin_update(&target(), false);
        state.complete(&retried, &ok());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_out_of_order_response_is_stale() {
        let mut state = DisplayWidthState::new(DisplayWidth::Medium);
        state.activate();
        state.select(DisplayWidth::Large);
        let first = state.begin_update(&target(), false);
        state.select(DisplayWidth::ExtraLarge);
        let second = state.begin_update(&target(), false);

        assert_eq!(
            state.complete(&second, &ok()),
            UpdateOutcome::Confirmed {
                layout_class: Some(FULL_WIDTH_CLASS)
            }
        );
        let late = ApiResponse::from(json!({ "ok": false, "error": "late failure" }));
        assert_eq!(state.complete(&first, &late), UpdateOutcome::Stale);
        assert!(state.error.is_none());
        assert_eq!(state.rendered, DisplayWidth::ExtraLarge);
    }

    #[test]
    fn test_blur_snapshots_selection() {
        let mut state = DisplayWidthState::new(DisplayWidth::Medium);
        state.activate();
        state.select(DisplayWidth::Large);
        assert_eq!(state.rendered, DisplayWidth::Medium);
        state.blur();
        assert_eq!(state.rendered, DisplayWidth::Large);
    }
}
