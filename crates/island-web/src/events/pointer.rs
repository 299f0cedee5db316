use crate::dom::set_cursor;
use glam::Vec2;
use island_core::SceneController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Movement (in canvas pixels) past which a press becomes an orbit drag
/// instead of a click.
const CLICK_SLOP_PX: f32 = 5.0;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub last: Vec2,
    pub down: bool,
    pub travelled: f32,
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    Vec2::new(x_css / w * canvas.width() as f32, y_css / h * canvas.height() as f32)
}

#[inline]
fn canvas_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    (canvas.width().max(1) as f32, canvas.height().max(1) as f32)
}

pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub ctl: Rc<RefCell<SceneController>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    let mouse = Rc::new(RefCell::new(MouseState::default()));

    // pointermove: hover while idle, orbit while pressed
    {
        let mouse = mouse.clone();
        let ctl = w.ctl.clone();
        let canvas = w.canvas.clone();
        let document = w.document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = pointer_canvas_px(&ev, &canvas);
            let (width, height) = canvas_size(&canvas);
            let mut ms = mouse.borrow_mut();
            let delta = pos - ms.last;
            ms.last = pos;
            if ms.down {
                ms.travelled += delta.length();
                if ms.travelled > CLICK_SLOP_PX {
                    ctl.borrow_mut().pointer_drag(delta.x, delta.y, height);
                }
                return;
            }
            drop(ms);
            if let Some(cursor) = ctl.borrow_mut().pointer_move(pos, width, height) {
                set_cursor(&document, cursor);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerdown
    {
        let mouse = mouse.clone();
        let canvas = w.canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut ms = mouse.borrow_mut();
            ms.down = true;
            ms.travelled = 0.0;
            ms.last = pointer_canvas_px(&ev, &canvas);
            let _ = canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup: a press that barely moved is a click
    {
        let mouse = mouse.clone();
        let ctl = w.ctl.clone();
        let canvas = w.canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut ms = mouse.borrow_mut();
            let was_click = ms.down && ms.travelled <= CLICK_SLOP_PX;
            ms.down = false;
            drop(ms);
            let _ = canvas.release_pointer_capture(ev.pointer_id());
            if was_click {
                let pos = pointer_canvas_px(&ev, &canvas);
                let (width, height) = canvas_size(&canvas);
                let effect = ctl.borrow_mut().click(pos, width, height);
                log::debug!("[mouse] click {:?}", effect);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerleave: drop hover so the cursor goes back to normal
    {
        let ctl = w.ctl.clone();
        let document = w.document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            if let Some(cursor) = ctl.borrow_mut().set_hovered(None) {
                set_cursor(&document, cursor);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // wheel
    {
        let ctl = w.ctl;
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ctl.borrow_mut().wheel(ev.delta_y() as f32);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
