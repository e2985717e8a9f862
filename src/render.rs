use crate::constants::{
    CAMERA_COLOR, CAMERA_RADIUS, GRID_COLOR, GRID_EXTENT, GRID_LINE_WIDTH, GRID_SPACING,
    TARGET_COLOR, TARGET_RADIUS,
};
use crate::core::FrameView;
use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D renderer for one simulation view.
pub struct SceneRenderer {
    ctx: web::CanvasRenderingContext2d,
}

impl SceneRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext(2d): {:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    pub fn draw(&self, view: &FrameView) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, view.viewport.x as f64, view.viewport.y as f64);

        ctx.save();
        _ = ctx.translate(view.translation.x as f64, view.translation.y as f64);
        self.draw_grid();
        self.draw_disc(view.target, TARGET_RADIUS, TARGET_COLOR);
        self.draw_disc(view.camera, CAMERA_RADIUS, CAMERA_COLOR);
        ctx.restore();
    }

    fn draw_grid(&self) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_line_width(GRID_LINE_WIDTH);
        let lines = (2.0 * GRID_EXTENT / GRID_SPACING) as i32;
        for i in 0..=lines {
            let c = -GRID_EXTENT + i as f64 * GRID_SPACING;
            ctx.begin_path();
            ctx.move_to(c, -GRID_EXTENT);
            ctx.line_to(c, GRID_EXTENT);
            ctx.stroke();
            ctx.begin_path();
            ctx.move_to(-GRID_EXTENT, c);
            ctx.line_to(GRID_EXTENT, c);
            ctx.stroke();
        }
    }

    fn draw_disc(&self, center: Vec2, radius: f64, color: &str) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        _ = ctx.arc(
            center.x as f64,
            center.y as f64,
            radius,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
}
