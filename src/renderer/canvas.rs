//! 2D canvas backend

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::scene::{DrawCmd, SpriteImage};
use crate::settings::Settings;

/// Executes draw lists on a canvas
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    images: Vec<(SpriteImage, HtmlImageElement)>,
}

impl CanvasRenderer {
    /// Grab the 2D context and start loading the sprite images
    pub fn new(canvas: &HtmlCanvasElement, settings: &Settings) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut images = Vec::with_capacity(SpriteImage::ALL.len());
        for image in SpriteImage::ALL {
            let el = HtmlImageElement::new()?;
            el.set_src(&settings.asset_url(image.file()));
            images.push((image, el));
        }

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            images,
        })
    }

    fn image(&self, image: SpriteImage) -> Option<&HtmlImageElement> {
        self.images
            .iter()
            .find(|(kind, _)| *kind == image)
            .map(|(_, el)| el)
            // Skip images that have not finished loading
            .filter(|el| el.complete() && el.natural_width() > 0)
    }

    pub fn draw(&self, cmds: &[DrawCmd]) -> Result<(), JsValue> {
        for cmd in cmds {
            match cmd {
                DrawCmd::Clear => self.ctx.clear_rect(0.0, 0.0, self.width, self.height),
                DrawCmd::Sprite {
                    image,
                    pos,
                    size,
                    angle,
                    flip_v,
                    flip_h,
                } => {
                    let Some(el) = self.image(*image) else {
                        continue;
                    };
                    let (w, h) = (size.x as f64, size.y as f64);
                    self.ctx.save();
                    self.ctx
                        .translate(pos.x as f64 + w / 2.0, pos.y as f64 + h / 2.0)?;
                    self.ctx.rotate(*angle as f64 * PI / 180.0)?;
                    if *flip_v {
                        self.ctx.scale(1.0, -1.0)?;
                    }
                    if *flip_h {
                        self.ctx.scale(-1.0, 1.0)?;
                    }
                    self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        el,
                        -w / 2.0,
                        -h / 2.0,
                        w,
                        h,
                    )?;
                    self.ctx.restore();
                }
                DrawCmd::Image { image, pos } => {
                    if let Some(el) = self.image(*image) {
                        self.ctx
                            .draw_image_with_html_image_element(el, pos.x as f64, pos.y as f64)?;
                    }
                }
                DrawCmd::Text {
                    text,
                    pos,
                    size_px,
                    color,
                    align,
                } => {
                    self.ctx.set_font(&format!("{}px Arial", size_px));
                    self.ctx.set_fill_style_str(color);
                    self.ctx.set_text_align(align.as_str());
                    self.ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
                }
            }
        }
        Ok(())
    }
}
