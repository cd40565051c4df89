//! 2D canvas renderer

use std::f64::consts::TAU;

use game_core::{Aabb, Frame, ParticleTint};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BG_INNER: &str = "#121629";
const BG_OUTER: &str = "#0a0d1a";
const CENTER_LINE: &str = "rgba(238, 187, 195, 0.3)";
const PLAYER_COLOR: &str = "#f6e7cb";
const OPPONENT_COLOR: &str = "#eebbc3";
const BALL_COLOR: &str = "#fffffe";
const BALL_HIGHLIGHT: &str = "rgba(255, 255, 255, 0.8)";
const PLAYER_SCORE_COLOR: &str = "rgba(246, 231, 203, 0.8)";
const OPPONENT_SCORE_COLOR: &str = "rgba(238, 187, 195, 0.8)";

const PARTICLE_RADIUS: f64 = 3.0;
const SCORE_OFFSET_X: f64 = 100.0;
const SCORE_Y: f64 = 80.0;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the arena so one unit is one pixel
    pub fn resize(&self, width: f32, height: f32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    /// Canvas-relative y for a viewport y
    pub fn to_canvas_y(&self, client_y: f64) -> f32 {
        (client_y - self.canvas.get_bounding_client_rect().top()) as f32
    }

    pub fn draw(&self, frame: &Frame) -> Result<(), JsValue> {
        let width = frame.arena.x as f64;
        let height = frame.arena.y as f64;

        self.draw_background(width, height)?;
        self.draw_paddle(&frame.player, PLAYER_COLOR);
        self.draw_paddle(&frame.opponent, OPPONENT_COLOR);
        self.draw_ball(frame)?;
        self.draw_particles(frame)?;
        self.draw_scores(frame, width)?;
        Ok(())
    }

    fn draw_background(&self, width: f64, height: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let (cx, cy) = (width / 2.0, height / 2.0);

        let gradient = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, cx)?;
        gradient.add_color_stop(0.0, BG_INNER)?;
        gradient.add_color_stop(1.0, BG_OUTER)?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(0.0, 0.0, width, height);

        let dash = js_sys::Array::of2(&JsValue::from_f64(15.0), &JsValue::from_f64(15.0));
        ctx.set_line_dash(&dash)?;
        ctx.set_stroke_style_str(CENTER_LINE);
        ctx.set_line_width(3.0);
        ctx.begin_path();
        ctx.move_to(cx, 0.0);
        ctx.line_to(cx, height);
        ctx.stroke();
        ctx.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    }

    fn draw_paddle(&self, rect: &Aabb, color: &str) {
        let ctx = &self.ctx;
        ctx.set_shadow_blur(20.0);
        ctx.set_shadow_color(color);
        ctx.set_fill_style_str(color);
        ctx.fill_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            (rect.max.x - rect.min.x) as f64,
            (rect.max.y - rect.min.y) as f64,
        );
        ctx.set_shadow_blur(0.0);
    }

    fn draw_ball(&self, frame: &Frame) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let (x, y) = (frame.ball.pos.x as f64, frame.ball.pos.y as f64);
        let radius = frame.ball_radius as f64;

        ctx.set_shadow_blur(25.0);
        ctx.set_shadow_color(BALL_COLOR);
        ctx.begin_path();
        ctx.arc(x, y, radius, 0.0, TAU)?;
        ctx.set_fill_style_str(BALL_COLOR);
        ctx.fill();

        ctx.begin_path();
        ctx.arc(x - 3.0, y - 3.0, radius * 0.3, 0.0, TAU)?;
        ctx.set_fill_style_str(BALL_HIGHLIGHT);
        ctx.fill();
        ctx.set_shadow_blur(0.0);
        Ok(())
    }

    fn draw_particles(&self, frame: &Frame) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        for particle in &frame.particles {
            ctx.set_global_alpha(particle.alpha() as f64);
            ctx.set_fill_style_str(tint_color(particle.tint));
            ctx.begin_path();
            ctx.arc(
                particle.pos.x as f64,
                particle.pos.y as f64,
                PARTICLE_RADIUS,
                0.0,
                TAU,
            )?;
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
        Ok(())
    }

    fn draw_scores(&self, frame: &Frame, width: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_font("bold 48px Arial");
        ctx.set_text_align("center");

        ctx.set_fill_style_str(PLAYER_SCORE_COLOR);
        ctx.fill_text(
            &frame.score.player.to_string(),
            width / 2.0 - SCORE_OFFSET_X,
            SCORE_Y,
        )?;

        ctx.set_fill_style_str(OPPONENT_SCORE_COLOR);
        ctx.fill_text(
            &frame.score.opponent.to_string(),
            width / 2.0 + SCORE_OFFSET_X,
            SCORE_Y,
        )?;
        Ok(())
    }
}

fn tint_color(tint: ParticleTint) -> &'static str {
    match tint {
        ParticleTint::PlayerPaddle => PLAYER_COLOR,
        ParticleTint::Wall | ParticleTint::OpponentPaddle => OPPONENT_COLOR,
    }
}
