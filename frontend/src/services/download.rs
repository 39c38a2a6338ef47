use gloo::file::{Blob, ObjectUrl};
use shared::ContactArtifact;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Offer `artifact` to the visitor as a plain-text download
pub fn save_text_file(artifact: &ContactArtifact) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document available".to_string())?;
    let body = document.body().ok_or_else(|| "No document body".to_string())?;

    let blob = Blob::new_with_options(artifact.content.as_str(), Some("text/plain"));
    // Revoked when dropped at the end of this function
    let url = ObjectUrl::from(blob);

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Failed to create link: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&artifact.file_name);

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to attach link: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to detach link: {:?}", e))?;

    Ok(())
}
