use room_core::{
    LABEL_BACKGROUND, LABEL_BASELINE_OFFSET_PX, LABEL_CANVAS_HEIGHT, LABEL_CANVAS_WIDTH, LABEL_FONT,
    LABEL_TEXT_COLOR,
};
use wasm_bindgen::JsCast;
use web_sys as web;

/// RGBA8 pixels of one label, row-major, unpremultiplied.
pub struct LabelImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Draw `text` the same way for every object: dark translucent card, white
/// bold text centred slightly below the middle.
pub fn rasterize(document: &web::Document, text: &str) -> anyhow::Result<LabelImage> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(LABEL_CANVAS_WIDTH);
    canvas.set_height(LABEL_CANVAS_HEIGHT);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let w = LABEL_CANVAS_WIDTH as f64;
    let h = LABEL_CANVAS_HEIGHT as f64;
    ctx.set_fill_style_str(LABEL_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, w, h);
    ctx.set_font(LABEL_FONT);
    ctx.set_fill_style_str(LABEL_TEXT_COLOR);
    ctx.set_text_align("center");
    ctx.fill_text(text, w / 2.0, h / 2.0 + LABEL_BASELINE_OFFSET_PX)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let data = ctx
        .get_image_data(0.0, 0.0, w, h)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(LabelImage {
        width: data.width(),
        height: data.height(),
        rgba: data.data().0,
    })
}
