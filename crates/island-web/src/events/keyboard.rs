use island_core::SceneController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Typing a name into the welcome form must not pan the camera.
#[inline]
fn from_text_input(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .is_some()
}

/// Route key codes into the controller. Keys are tracked by
/// `KeyboardEvent.code` so the layout does not matter.
pub fn wire_keyboard(ctl: Rc<RefCell<SceneController>>) {
    let Some(window) = web::window() else {
        return;
    };
    {
        let ctl = ctl.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if from_text_input(&ev) {
                    return;
                }
                let code = ev.code();
                ctl.borrow_mut().key_down(&code);
                if code == "Escape" {
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let ctl = ctl.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                ctl.borrow_mut().key_up(&ev.code());
            }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        // keyup never arrives for keys held while the tab lost focus
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            ctl.borrow_mut().clear_keys();
            log::debug!("[keys] cleared on blur");
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
