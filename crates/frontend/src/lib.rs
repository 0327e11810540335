pub mod app;
pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::*;

/// Attach upload widgets added to the page after startup
#[wasm_bindgen]
pub fn mount_upload_widgets() -> Result<usize, JsValue> {
    Ok(app::mount_upload_widgets()?)
}

/// Content-script entry point for the task landing page
#[wasm_bindgen]
pub fn mount_display_width_editor(
    host: String,
    form_template_id: String,
    container_selector: String,
    initial_width: Option<String>,
) -> Result<(), JsValue> {
    app::mount_display_width_editor(
        host,
        form_template_id,
        &container_selector,
        initial_width.as_deref(),
    )?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(e) = app::mount_upload_widgets() {
        log::error!("upload widgets not mounted: {e}");
    }
}
