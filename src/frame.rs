use crate::audio::AnalyserProvider;
use crate::canvas::CanvasSurface;
use crate::constants::FRAME_LOG_INTERVAL_SEC;
use crate::render;
use bandfield_core::{FrameLoop, FrameScheduler, VisualizerConfig, VisualizerState};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<VisualizerState>>,
    pub frames: FrameLoop,
    pub provider: AnalyserProvider,
    pub surface: CanvasSurface,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub audio_ctx: web::AudioContext,
    pub progress: Option<web::HtmlInputElement>,
    pub last_log: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
        }
        let now = self.audio_ctx.current_time();
        let mut state = self.state.borrow_mut();
        let result = self.frames.tick(
            &mut state,
            &mut self.provider,
            &mut self.surface,
            &mut self.gpu,
            now,
        );
        drop(state);
        match result {
            Ok(Some(report)) => {
                // Without a buffer the slider keeps whatever it shows.
                if let (Some(range), Some(percent)) = (&self.progress, report.progress) {
                    range.set_value(&format!("{percent}"));
                }
                if self.last_log.elapsed().as_secs_f64() >= FRAME_LOG_INTERVAL_SEC {
                    self.last_log = Instant::now();
                    log::debug!(
                        "[frame] #{} bands={} interval={:?}",
                        report.frame,
                        report.bands,
                        report.interval
                    );
                }
            }
            Ok(None) => {}
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    config: &VisualizerConfig,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(
        leaked_canvas,
        config.sphere_radius,
        config.sphere_segments,
        config.particle_count,
    )
    .await
    {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// `requestAnimationFrame` driver for a `FrameContext`. Clones share the
/// same callback and pending request.
#[derive(Clone)]
pub struct RafLoop {
    ctx: Rc<RefCell<FrameContext<'static>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl RafLoop {
    pub fn new(ctx: Rc<RefCell<FrameContext<'static>>>) -> Self {
        let raf = Self {
            ctx,
            tick: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        };
        let inner = raf.clone();
        *raf.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            inner.pending.set(None);
            inner.ctx.borrow_mut().frame();
            if inner.is_running() {
                inner.request();
            }
        }) as Box<dyn FnMut()>));
        raf
    }

    fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(handle) => self.pending.set(Some(handle)),
                Err(e) => log::error!("[frame] requestAnimationFrame error: {:?}", e),
            }
        }
    }
}

impl FrameScheduler for RafLoop {
    fn start(&mut self) {
        self.ctx.borrow_mut().frames.start();
        self.request();
    }

    fn stop(&mut self) {
        self.ctx.borrow_mut().frames.stop();
        if let Some(handle) = self.pending.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(handle);
            }
        }
    }

    fn is_running(&self) -> bool {
        self.ctx.borrow().frames.is_running()
    }
}
