//! HTML canvas 2D renderer (wasm32 only)

use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{craft_triangle, lane_edges};
use super::{RenderSink, RenderSnapshot, shake_offset};
use crate::settings::Settings;

const LANE_FILL: &str = "#141a34";
const LANE_EDGE: &str = "#7df9ff";
const CRAFT_FILL: &str = "#ff7ad9";
const PARTICLE_FILL: &str = "#ffd36f";
const HUD_TEXT: &str = "#e8f2ff";
const OVERLAY_FILL: &str = "rgba(5, 6, 12, 0.7)";
const FONT_FAMILY: &str = "Space Grotesk, sans-serif";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    settings: Settings,
    /// Jitter only; kept apart from the simulation RNG
    rng: Pcg32,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, settings: Settings, seed: u64) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            settings,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    fn draw_lane(&self, snap: &RenderSnapshot) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(LANE_FILL);
        ctx.fill_rect(
            snap.lane_left as f64,
            0.0,
            snap.lane_width() as f64,
            self.height,
        );

        ctx.set_stroke_style_str(LANE_EDGE);
        ctx.set_line_width(3.0);
        ctx.set_shadow_color(LANE_EDGE);
        ctx.set_shadow_blur(12.0);
        ctx.begin_path();
        for (top, bottom) in lane_edges(snap.lane_left, snap.lane_right, self.height as f32) {
            ctx.move_to(top.x as f64, top.y as f64);
            ctx.line_to(bottom.x as f64, bottom.y as f64);
        }
        ctx.stroke();
        ctx.set_shadow_blur(0.0);
    }

    fn draw_particles(&self, snap: &RenderSnapshot) {
        if !self.settings.particles {
            return;
        }
        let ctx = &self.ctx;
        ctx.set_fill_style_str(PARTICLE_FILL);
        for p in &snap.particles {
            ctx.set_global_alpha(p.opacity as f64);
            ctx.begin_path();
            let _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    }

    fn draw_craft(&self, snap: &RenderSnapshot) {
        let ctx = &self.ctx;
        let [nose, left, right] =
            craft_triangle(snap.craft_pos, snap.craft_heading, snap.craft_radius);
        ctx.set_fill_style_str(CRAFT_FILL);
        ctx.begin_path();
        ctx.move_to(nose.x as f64, nose.y as f64);
        ctx.line_to(left.x as f64, left.y as f64);
        ctx.line_to(right.x as f64, right.y as f64);
        ctx.close_path();
        ctx.fill();
    }

    fn draw_hud(&self, snap: &RenderSnapshot) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(HUD_TEXT);
        ctx.set_font(&format!("16px {}", FONT_FAMILY));
        let _ = ctx.fill_text(&format!("Score: {}", snap.score), 20.0, 28.0);
        let _ = ctx.fill_text(&format!("Best: {}", snap.best_score), 20.0, 48.0);
    }

    fn draw_overlay(&self, snap: &RenderSnapshot) {
        if !snap.show_overlay() {
            return;
        }
        let ctx = &self.ctx;
        ctx.set_fill_style_str(OVERLAY_FILL);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);
        ctx.set_fill_style_str(LANE_EDGE);
        ctx.set_font(&format!("28px {}", FONT_FAMILY));
        let _ = ctx.fill_text("Tap / Click / Press Space", 70.0, self.height / 2.0 - 10.0);
        ctx.set_fill_style_str(PARTICLE_FILL);
        ctx.set_font(&format!("18px {}", FONT_FAMILY));
        let _ = ctx.fill_text("to start drifting", 160.0, self.height / 2.0 + 20.0);
    }
}

impl RenderSink for CanvasRenderer {
    fn present(&mut self, snap: &RenderSnapshot) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        let shaking = snap.shake > 0.0 && self.settings.effective_screen_shake();
        if shaking {
            let jitter = shake_offset(snap.shake, &mut self.rng);
            self.ctx.save();
            let _ = self.ctx.translate(jitter.x as f64, jitter.y as f64);
        }
        self.draw_lane(snap);
        self.draw_particles(snap);
        self.draw_craft(snap);
        if shaking {
            self.ctx.restore();
        }
        self.draw_hud(snap);
        self.draw_overlay(snap);
    }
}
