use crate::dom;
use crate::labels::LabelLayer;
use crate::overlay;
use crate::render;
use island_core::{compose, Atmosphere, ContentView, FrameTimer, ModalMode, SceneController, SceneEvent, Theme};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

// What the DOM last showed, so overlays are touched only on change.
#[derive(Default)]
struct DomShadow {
    view: Option<ContentView>,
    chrome: Option<(ModalMode, Theme)>,
    welcome_hidden: bool,
    assets_settled: bool,
}

pub struct FrameContext<'a> {
    pub ctl: Rc<RefCell<SceneController>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: render::GpuState<'a>,
    atmosphere: Atmosphere,
    labels: LabelLayer,
    timer: FrameTimer,
    shadow: DomShadow,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        ctl: Rc<RefCell<SceneController>>,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
        gpu: render::GpuState<'a>,
    ) -> Self {
        let atmosphere = Atmosphere::new(ctl.borrow().config().atmosphere_seed);
        let labels = LabelLayer::new(&document);
        Self {
            ctl,
            canvas,
            document,
            gpu,
            atmosphere,
            labels,
            timer: FrameTimer::new(),
            shadow: DomShadow::default(),
        }
    }

    pub fn frame(&mut self) {
        let dt = self.timer.lap();
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        let events = self.ctl.borrow_mut().tick(dt);
        for ev in &events {
            match ev {
                SceneEvent::SequenceComplete(done) => {
                    log::debug!("[camera] {:?} #{} complete", done.kind, done.id.get());
                }
                SceneEvent::SharkWelcomeHidden => log::info!("[scene] welcome bubble dismissed"),
            }
        }

        let ctl_rc = self.ctl.clone();
        let ctl = ctl_rc.borrow();
        self.atmosphere.step(ctl.clock().elapsed());
        let frame = compose(&ctl, &self.atmosphere, self.gpu.aspect());
        match self.gpu.render(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
        self.labels.update(&frame.labels);
        self.sync_dom(&ctl);
    }

    fn sync_dom(&mut self, ctl: &SceneController) {
        let view = ctl.content_view();
        if view != self.shadow.view {
            match &view {
                Some(v) => log::info!("[content] showing {} (closable={})", v.section_id(), v.closable()),
                None => log::info!("[content] cleared"),
            }
            overlay::sync_content(&self.document, view.as_ref());
            self.shadow.view = view;
        }

        let chrome = (ctl.modal_mode(), ctl.nav().theme());
        if self.shadow.chrome != Some(chrome) {
            overlay::sync_toggles(&self.document, chrome.0, chrome.1);
            dom::set_theme_attr(&self.document, chrome.1.as_str());
            self.shadow.chrome = Some(chrome);
        }

        if !self.shadow.welcome_hidden && ctl.nav().welcome_complete() {
            overlay::hide_welcome(&self.document);
            self.shadow.welcome_hidden = true;
        }

        if !self.shadow.assets_settled {
            overlay::update_loading(&self.document, ctl.assets());
            if ctl.assets().all_settled() {
                let failed = ctl.assets().failures().count();
                log::info!("[assets] settled with {} fallback(s)", failed);
                self.shadow.assets_settled = true;
            }
        }
    }
}
