use crate::audio::{self, Player};
use crate::constants::{PROGRESS_RANGE_ID, TRACK_SELECT_ID};
use crate::dom;
use crate::frame::RafLoop;
use bandfield_core::{Button, Control, ControlEffect, FrameScheduler, VisualizerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Handles shared by every DOM callback. Cloning is cheap: all fields are
/// reference counted or JS handles.
#[derive(Clone)]
pub struct Controller {
    pub state: Rc<RefCell<VisualizerState>>,
    pub player: Rc<RefCell<Player>>,
    pub analyser: web::AnalyserNode,
    pub audio_ctx: web::AudioContext,
    pub raf: RafLoop,
    pub document: web::Document,
}

impl Controller {
    pub fn dispatch(&mut self, control: Control) {
        if control == Control::Button(Button::Start) {
            self.ensure_context_started();
        }
        let now = self.audio_ctx.current_time();
        let effect = self
            .state
            .borrow_mut()
            .apply(control, now, &mut rand::thread_rng());
        self.perform(effect);
    }

    fn ensure_context_started(&self) {
        let mut state = self.state.borrow_mut();
        if state.playback.context_started() {
            return;
        }
        match self.audio_ctx.resume() {
            Ok(_) => {
                state.playback.mark_context_started();
                log::info!("[audio] context resumed");
            }
            Err(e) => log::error!("[audio] resume error: {:?}", e),
        }
    }

    fn perform(&mut self, effect: ControlEffect) {
        match effect {
            ControlEffect::None => {}
            ControlEffect::Play { offset, start_loop } => {
                self.play_from(offset);
                if start_loop {
                    self.raf.start();
                }
            }
            ControlEffect::Pause => self.player.borrow_mut().stop(),
            ControlEffect::Reposition { offset } => {
                if self.state.borrow().playback.is_audible() {
                    self.play_from(offset);
                }
            }
            ControlEffect::SetRate(rate) => self.player.borrow_mut().set_rate(rate),
            ControlEffect::SetFftSize(size) => self.analyser.set_fft_size(size),
            ControlEffect::SetBackground(color) => {
                dom::set_body_background(&self.document, &color.css())
            }
            ControlEffect::LoadTrack(url) => self.load_track(url),
        }
    }

    fn play_from(&self, offset: f64) {
        if let Err(e) = self.player.borrow_mut().play_from(offset) {
            log::error!("[audio] play error: {:?}", e);
        }
    }

    /// Fetch and decode `url`, then hand it to the player. Playback restarts
    /// on the new buffer when it was audible.
    pub fn load_track(&self, url: String) {
        let c = self.clone();
        spawn_local(async move {
            match audio::load_buffer(&c.audio_ctx, &url).await {
                Ok(buffer) => {
                    let duration = buffer.duration();
                    c.player.borrow_mut().set_buffer(buffer);
                    let now = c.audio_ctx.current_time();
                    let restart = c.state.borrow_mut().track_loaded(now, duration);
                    if let Some(offset) = restart {
                        c.play_from(offset);
                    }
                    log::info!("[audio] track {} ready", url);
                }
                Err(e) => log::error!("[audio] load {} failed: {:?}", url, e),
            }
        });
    }

    pub fn on_ended(&mut self) {
        let now = self.audio_ctx.current_time();
        self.state.borrow_mut().ended(now);
        self.raf.stop();
        log::info!("[audio] playback ended");
    }
}

pub fn wire_controls(controller: &Controller) {
    let document = controller.document.clone();
    for button in Button::ALL {
        let mut c = controller.clone();
        dom::add_click_listener(&document, button.element_id(), move || {
            c.dispatch(button.into())
        });
    }

    let mut c = controller.clone();
    let range = dom::input_by_id(&document, PROGRESS_RANGE_ID);
    dom::add_listener(&document, PROGRESS_RANGE_ID, "input", move || {
        let Some(range) = &range else {
            return;
        };
        match range.value().parse::<f64>() {
            Ok(percent) => c.dispatch(Control::Seek(percent)),
            Err(e) => log::warn!("[controls] bad range value {:?}: {}", range.value(), e),
        }
    });

    let mut c = controller.clone();
    let doc = document.clone();
    dom::add_listener(&document, TRACK_SELECT_ID, "change", move || {
        if let Some(url) = dom::select_value(&doc, TRACK_SELECT_ID) {
            c.dispatch(Control::SelectTrack(url));
        }
    });

    let mut c = controller.clone();
    controller
        .player
        .borrow_mut()
        .set_on_ended(move || c.on_ended());
}
