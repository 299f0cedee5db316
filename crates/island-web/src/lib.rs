#![cfg(target_arch = "wasm32")]
use island_core::{SceneConfig, SceneController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod labels;
mod loader;
mod overlay;
mod render;

const ASSET_BASE_URL: &str = "assets/";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("island-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            dom::show_error(&format!("{}", e));
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("scene-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #scene-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the canvas backing store at CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    let query = window.location().search().unwrap_or_default();
    let config = SceneConfig::default().apply_query(&query);
    log::info!(
        "[config] mode={:?} theme={} pan={:?}",
        config.modal_mode,
        config.theme.as_str(),
        config.pan.timing
    );
    let ctl = Rc::new(RefCell::new(SceneController::new(config)?));

    overlay::show_welcome(&document);
    overlay::update_loading(&document, ctl.borrow().assets());
    loader::spawn_asset_loads(ctl.clone(), ASSET_BASE_URL);

    wire_ui(&document, &ctl);
    events::wire_keyboard(ctl.clone());
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        ctl: ctl.clone(),
    });

    // Leak a canvas clone to satisfy the surface's 'static lifetime
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas)
        .await
        .map_err(|e| anyhow::anyhow!("WebGPU is unavailable: {}", e))?;

    let mut ctx = frame::FrameContext::new(ctl, canvas, document, gpu);
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
    log::info!("[scene] render loop started");
    Ok(())
}

fn wire_ui(document: &web::Document, ctl: &Rc<RefCell<SceneController>>) {
    // Welcome form: Enter or the submit button both land here
    if let Some(form) = document.get_element_by_id("welcome-form") {
        let ctl = ctl.clone();
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let name = dom::input_value(&doc, "welcome-name").unwrap_or_default();
            let effect = ctl.borrow_mut().submit_name(&name);
            log::info!("[welcome] submit -> {:?}", effect);
        }) as Box<dyn FnMut(_)>);
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #welcome-form");
    }

    {
        let ctl = ctl.clone();
        dom::add_section_link_listeners(document, "[data-section]", move |id| {
            ctl.borrow_mut().navigate(id);
        });
    }

    for close_id in ["section-panel-close", "subscene-close"] {
        let ctl = ctl.clone();
        dom::add_click_listener(document, close_id, move || {
            ctl.borrow_mut().close_section();
        });
    }
    {
        let ctl = ctl.clone();
        dom::add_click_listener(document, "mode-toggle", move || {
            ctl.borrow_mut().toggle_modal_mode();
        });
    }
    {
        let ctl = ctl.clone();
        dom::add_click_listener(document, "theme-toggle", move || {
            ctl.borrow_mut().toggle_theme();
        });
    }
    {
        let ctl = ctl.clone();
        dom::add_click_listener(document, "reset-camera", move || {
            ctl.borrow_mut().reset_camera();
        });
    }
    {
        let ctl = ctl.clone();
        dom::add_click_listener(document, "dramatic-reveal", move || {
            ctl.borrow_mut().dramatic_reveal();
        });
    }
}
