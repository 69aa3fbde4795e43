#![cfg(target_arch = "wasm32")]
use bandfield_core::{FrameLoop, VisualizerConfig, VisualizerState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod render;

use constants::{HISTOGRAM_CANVAS_ID, PROGRESS_RANGE_ID, VISUALIZER_CANVAS_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("bandfield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let visualizer = dom::canvas_by_id(&document, VISUALIZER_CANVAS_ID)?;
    let histogram = dom::canvas_by_id(&document, HISTOGRAM_CANVAS_ID)?;
    let (width, height) = dom::size_canvas_to_viewport(&window, &visualizer);
    dom::size_canvas_to_viewport(&window, &histogram);

    let config = VisualizerConfig::default().with_viewport_width(width as f32);
    config.validate()?;

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let analyser = audio::create_analyser(&audio_ctx, config.fft_size)?;
    log::info!(
        "[audio] sample rate {} Hz, {} bands",
        audio_ctx.sample_rate(),
        analyser.frequency_bin_count()
    );

    let initial_track = config.initial_track.clone();
    let gpu = frame::init_gpu(&visualizer, &config).await;
    let state = Rc::new(RefCell::new(VisualizerState::new(
        config,
        audio_ctx.sample_rate(),
        width as f32 / height as f32,
    )));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state: state.clone(),
        frames: FrameLoop::new(),
        provider: audio::AnalyserProvider::new(analyser.clone()),
        surface: canvas::CanvasSurface::new(&histogram)?,
        gpu,
        canvas: visualizer.clone(),
        audio_ctx: audio_ctx.clone(),
        progress: dom::input_by_id(&document, PROGRESS_RANGE_ID),
        last_log: Instant::now(),
    }));

    let controller = events::Controller {
        state,
        player: Rc::new(RefCell::new(audio::Player::new(
            audio_ctx.clone(),
            analyser.clone(),
        ))),
        analyser,
        audio_ctx,
        raf: frame::RafLoop::new(frame_ctx),
        document,
    };
    events::wire_controls(&controller);
    controller.load_track(initial_track);

    Ok(())
}
