use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Click handler for every element matching `selector`; the handler gets the
/// clicked element's `data-section` attribute.
pub fn add_section_link_listeners(
    document: &web::Document,
    selector: &str,
    handler: impl Fn(&str) + Clone + 'static,
) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(id) = el.get_attribute("data-section") else {
            continue;
        };
        let handler = handler.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler(&id)) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.set_attribute("style", if visible { "" } else { "display:none" });
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_html(document: &web::Document, element_id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_inner_html(html);
    }
}

pub fn set_cursor(document: &web::Document, cursor: &str) {
    if let Some(body) = document.body() {
        let _ = body.style().set_property("cursor", cursor);
    }
}

/// Reflect the theme on the root element so the stylesheet can switch palettes.
pub fn set_theme_attr(document: &web::Document, theme: &str) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme);
    }
}

pub fn input_value(document: &web::Document, element_id: &str) -> Option<String> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Minimal escaping for text spliced into `inner_html`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn show_error(message: &str) {
    if let Some(doc) = window_document() {
        set_text(&doc, "error-banner", message);
        set_visible(&doc, "error-banner", true);
    }
}
