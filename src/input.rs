use web_sys as web;

/// Pointer position relative to the canvas, in normalized device coordinates.
#[inline]
pub fn pointer_canvas_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<[f32; 2]> {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Some([(x_css / w) * 2.0 - 1.0, 1.0 - (y_css / h) * 2.0])
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}
