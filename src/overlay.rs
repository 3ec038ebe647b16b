use crate::constants::{CAMERA_LOADING_TEXT, CAMERA_UNAVAILABLE_TEXT, ERROR_PANEL_ID};
use crate::dom;
use folio_core::{Project, TrackerState};
use wasm_bindgen::JsCast;
use web_sys as web;

fn child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(class);
    el.set_text_content(Some(text));
    _ = parent.append_child(&el);
    Ok(el)
}

/// Fill the popup with `project` and reveal it.
pub fn show_project(
    document: &web::Document,
    popup: &web::HtmlElement,
    project: &Project,
) -> anyhow::Result<()> {
    popup.set_inner_html("");
    _ = popup
        .style()
        .set_property("border-color", &project.color_hex());

    let header = child(document, popup, "div", "popup-header", "")?;
    let title = child(document, &header, "h3", "popup-title", project.title)?;
    _ = title.set_attribute("style", &format!("color:{}", project.color_hex()));
    child(document, &header, "span", "popup-stat", project.stat)?;
    child(document, popup, "p", "popup-description", project.description)?;

    let tech = child(document, popup, "div", "popup-tech", "")?;
    for t in project.tech {
        child(document, &tech, "span", "tech-chip", t)?;
    }

    let link = child(document, popup, "a", "popup-link", "View Code")?;
    _ = link.set_attribute("href", project.link);
    _ = link.set_attribute("target", "_blank");
    _ = link.set_attribute("rel", "noopener noreferrer");

    dom::set_visible(popup, true);
    Ok(())
}

pub fn hide_project(popup: &web::HtmlElement) {
    dom::set_visible(popup, false);
}

/// The placeholder covers the preview until frames flow; a failed
/// lifecycle keeps it up with a terminal message.
pub fn sync_camera_placeholder(placeholder: &web::HtmlElement, state: &TrackerState) {
    let text = match state {
        TrackerState::Error(_) => CAMERA_UNAVAILABLE_TEXT,
        _ => CAMERA_LOADING_TEXT,
    };
    placeholder.set_text_content(Some(text));
    dom::set_visible(placeholder, state.shows_placeholder());
}

/// Replace the panel content with a diagnostic message and JS stack.
/// Falls back to appending a panel to `<body>` when the page has none.
pub fn show_error_panel(document: &web::Document, message: &str, stack: &str) {
    let existing = document
        .get_element_by_id(ERROR_PANEL_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let panel = match existing {
        Some(el) => el,
        None => {
            let Some(el) = document
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            el.set_id(ERROR_PANEL_ID);
            if let Some(body) = document.body() {
                _ = body.append_child(&el);
            }
            el
        }
    };
    panel.set_inner_html("");
    _ = child(document, &panel, "h2", "error-title", "Something went wrong");
    _ = child(document, &panel, "pre", "error-message", message);
    if !stack.is_empty() {
        _ = child(document, &panel, "pre", "error-stack", stack);
    }
    dom::set_visible(&panel, true);
}
