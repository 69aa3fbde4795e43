use bandfield_core::FrequencyProvider;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Analyser between every source and the destination.
pub fn create_analyser(
    audio_ctx: &web::AudioContext,
    fft_size: u32,
) -> anyhow::Result<web::AnalyserNode> {
    let analyser = audio_ctx
        .create_analyser()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    analyser.set_fft_size(fft_size);
    analyser
        .connect_with_audio_node(&audio_ctx.destination())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(analyser)
}

/// Byte frequency data from an `AnalyserNode`, resized on demand when the
/// fft size changes.
pub struct AnalyserProvider {
    node: web::AnalyserNode,
    buf: Vec<u8>,
}

impl AnalyserProvider {
    pub fn new(node: web::AnalyserNode) -> Self {
        let bins = node.frequency_bin_count() as usize;
        Self {
            node,
            buf: vec![0; bins],
        }
    }
}

impl FrequencyProvider for AnalyserProvider {
    fn frequency_data(&mut self) -> &[u8] {
        let bins = self.node.frequency_bin_count() as usize;
        if self.buf.len() != bins {
            self.buf.resize(bins, 0);
        }
        self.node.get_byte_frequency_data(&mut self.buf);
        &self.buf
    }
}

/// Fetch `url` and decode it into an `AudioBuffer`.
pub async fn load_buffer(
    audio_ctx: &web::AudioContext,
    url: &str,
) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {} failed with status {}", url, resp.status());
    }
    let bytes = JsFuture::from(resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let decoded = audio_ctx
        .decode_audio_data(&bytes)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    JsFuture::from(decoded)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Restartable looping buffer source. A buffer source can only be started
/// once, so every play or seek builds a fresh node at the requested offset.
pub struct Player {
    audio_ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    buffer: Option<web::AudioBuffer>,
    source: Option<web::AudioBufferSourceNode>,
    rate: f64,
    on_ended: Option<Closure<dyn FnMut()>>,
}

impl Player {
    pub fn new(audio_ctx: web::AudioContext, analyser: web::AnalyserNode) -> Self {
        Self {
            audio_ctx,
            analyser,
            buffer: None,
            source: None,
            rate: 1.0,
            on_ended: None,
        }
    }

    pub fn set_on_ended(&mut self, handler: impl FnMut() + 'static) {
        self.on_ended = Some(Closure::wrap(Box::new(handler) as Box<dyn FnMut()>));
    }

    /// Replace the buffer; the current source, if any, is stopped.
    pub fn set_buffer(&mut self, buffer: web::AudioBuffer) {
        self.stop();
        log::info!(
            "[audio] buffer loaded: {:.1}s, {} ch @ {} Hz",
            buffer.duration(),
            buffer.number_of_channels(),
            buffer.sample_rate()
        );
        self.buffer = Some(buffer);
    }

    pub fn play_from(&mut self, offset: f64) -> anyhow::Result<()> {
        self.stop();
        let Some(buffer) = &self.buffer else {
            log::warn!("[audio] play requested before a buffer was loaded");
            return Ok(());
        };
        let source = self
            .audio_ctx
            .create_buffer_source()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        source.set_buffer(Some(buffer));
        source.set_loop(true);
        source.playback_rate().set_value(self.rate as f32);
        source
            .connect_with_audio_node(&self.analyser)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if let Some(cb) = &self.on_ended {
            source.set_onended(Some(cb.as_ref().unchecked_ref()));
        }
        source
            .start_with_when_and_grain_offset(0.0, offset)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        self.source = Some(source);
        Ok(())
    }

    /// Stop the current source without reporting it as ended.
    pub fn stop(&mut self) {
        if let Some(source) = self.source.take() {
            source.set_onended(None);
            #[allow(deprecated)]
            let _ = source.stop();
            let _ = source.disconnect();
        }
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
        if let Some(source) = &self.source {
            source.playback_rate().set_value(rate as f32);
        }
    }
}
