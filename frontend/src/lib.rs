use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

use threadbox_app::app::CommentWidget;
use threadbox_core::state::WidgetBootstrap;
use threadbox_utils::errors::AppError;

const MOUNT_NODE_ID: &str = "comment-widget";
const BOOTSTRAP_NODE_ID: &str = "comment-widget-data";

#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();

    let mount_node = document()
        .get_element_by_id(MOUNT_NODE_ID)
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok());
    let Some(mount_node) = mount_node else {
        log::error!("No mount node with id {MOUNT_NODE_ID}, widget not mounted");
        return;
    };

    let bootstrap = match read_bootstrap() {
        Ok(bootstrap) => bootstrap,
        Err(e) => {
            log::error!("Could not read the widget bootstrap payload: {e}");
            return;
        }
    };

    log::debug!("Mounting comment widget for analysis {}", bootstrap.analysis_id);
    leptos::mount::mount_to(mount_node, move || view! { <CommentWidget bootstrap/> }).forget();
}

/// Reads the bootstrap payload embedded by the host page as a JSON island
fn read_bootstrap() -> Result<WidgetBootstrap, AppError> {
    let payload = document()
        .get_element_by_id(BOOTSTRAP_NODE_ID)
        .and_then(|node| node.text_content())
        .ok_or(AppError::new("Missing bootstrap payload island."))?;
    Ok(serde_json::from_str(&payload)?)
}
