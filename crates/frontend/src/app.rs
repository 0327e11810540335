//! Mounting the widgets into an existing page

use crate::domain::a001_form_template::ui::DisplayWidthEditor;
use crate::shared::capabilities::Capabilities;
use crate::shared::config::{EditorConfig, UploadConfig, EDITOR_CONFIG_ATTR, UPLOAD_CONFIG_ATTR};
use crate::shared::dom::{attribute, query_all_html_elements, query_html_element, MountError};
use crate::shared::file_upload::{FileUpload, InitialRender};
use contracts::enums::DisplayWidth;
use leptos::prelude::*;

/// Hosts of the upload widget
pub const UPLOAD_HOST_SELECTOR: &str = "[data-file-upload]";
/// Set on a host once the widget owns it
const MOUNTED_ATTR: &str = "data-upload-mounted";

/// Attach the upload widget to every host on the page.
///
/// Without `File`, `FileList` and `FormData` nothing is touched and the
/// server-rendered link-based flow stays in place. Returns the number of
/// widgets attached.
pub fn mount_upload_widgets() -> Result<usize, MountError> {
    let capabilities = Capabilities::detect();
    if !capabilities.supports_enhanced_upload() {
        log::info!("enhanced upload unavailable ({capabilities:?}), keeping link-based flow");
        return Ok(0);
    }

    let mut mounted = 0;
    for host in query_all_html_elements(UPLOAD_HOST_SELECTOR)? {
        if host.has_attribute(MOUNTED_ATTR) {
            continue;
        }
        match mount_upload_widget(host) {
            Ok(()) => mounted += 1,
            Err(e) => log::warn!("upload widget not mounted: {e}"),
        }
    }
    log::debug!("mounted {mounted} upload widget(s)");
    Ok(mounted)
}

fn mount_upload_widget(host: web_sys::HtmlElement) -> Result<(), MountError> {
    let config = UploadConfig::from_attribute(host.get_attribute(UPLOAD_CONFIG_ATTR).as_deref())?;
    let initial = InitialRender {
        file_name: attribute(&host, "data-file-name"),
        file_link: attribute(&host, "data-file-link"),
        error: attribute(&host, "data-error"),
        disabled: host.has_attribute("data-disabled"),
    };

    host.set_inner_html("");
    host.set_attribute(MOUNTED_ATTR, "")
        .map_err(|e| MountError::Dom(format!("{e:?}")))?;
    leptos::mount::mount_to(host, move || view! { <FileUpload config=config initial=initial /> })
        .forget();
    Ok(())
}

/// Build a display width editor for one form template inside `container_selector`
pub fn mount_display_width_editor(
    host: String,
    form_template_id: String,
    container_selector: &str,
    initial_width: Option<&str>,
) -> Result<(), MountError> {
    let container = query_html_element(container_selector)?;
    let config = EditorConfig::from_attribute(container.get_attribute(EDITOR_CONFIG_ATTR).as_deref())?;
    let initial_width = match initial_width.map(DisplayWidth::from_code) {
        Some(Some(width)) => width,
        Some(None) => {
            log::warn!("unknown initial display width {initial_width:?}, using default");
            DisplayWidth::Default
        }
        None => DisplayWidth::Default,
    };

    log::debug!("mounting display width editor for {form_template_id} on {host}");
    leptos::mount::mount_to(container, move || {
        view! {
            <DisplayWidthEditor
                host=host
                form_template_id=form_template_id
                initial_width=initial_width
                config=config
            />
        }
    })
    .forget();
    Ok(())
}
