use bandfield_core::{DrawSurface, Hsl, LABEL_FONT};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `DrawSurface` over the histogram canvas' 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ctx.set_font(LABEL_FONT);
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }
}

#[allow(deprecated)]
impl DrawSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Hsl) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.css()));
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Hsl) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.css()));
        let _ = self.ctx.fill_text(text, x, y);
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Hsl) {
        self.ctx.set_stroke_style(&JsValue::from_str(&color.css()));
        self.ctx.begin_path();
        self.ctx.move_to(x0, y0);
        self.ctx.line_to(x1, y1);
        self.ctx.stroke();
    }
}
