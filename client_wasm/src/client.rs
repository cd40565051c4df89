//! JS-facing game host
//!
//! The page owns the requestAnimationFrame loop and forwards DOM events here;
//! every call into the session happens on that one thread.

use game_core::*;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::audio::WebAudio;
use crate::canvas::CanvasRenderer;
use crate::input::{handle_key_down, handle_key_up, parse_command, KeyAction};
use crate::logging;

/// Draws to the canvas and plays tones. Failures are logged, never raised.
struct BrowserPresenter {
    canvas: CanvasRenderer,
    audio: WebAudio,
}

impl Presenter for BrowserPresenter {
    fn render(&mut self, frame: &Frame) {
        if let Err(e) = self.canvas.draw(frame) {
            warn!(error = ?e, "canvas draw failed");
        }
    }

    fn play_sound(&mut self, kind: SoundKind) {
        if let Err(e) = self.audio.play(kind) {
            warn!(?kind, error = ?e, "sound failed");
        }
    }
}

#[wasm_bindgen]
pub struct PongClient {
    session: Session,
    input: InputBuffer,
    presenter: BrowserPresenter,
}

#[wasm_bindgen]
impl PongClient {
    /// Create a client drawing into `canvas`. `config_json` may override any
    /// subset of the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        config_json: Option<String>,
    ) -> Result<PongClient, JsValue> {
        console_error_panic_hook::set_once();
        logging::init();

        let config = match config_json.as_deref() {
            Some(json) => Config::from_json(json)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?,
            None => Config::default(),
        };

        let canvas = CanvasRenderer::new(canvas)?;
        canvas.resize(config.arena_width, config.arena_height);
        info!(
            width = config.arena_width,
            height = config.arena_height,
            difficulty = %config.difficulty,
            "pong client ready"
        );

        Ok(Self {
            session: Session::new(config, GameRng::from_entropy()),
            input: InputBuffer::new(),
            presenter: BrowserPresenter {
                canvas,
                audio: WebAudio::new(),
            },
        })
    }

    /// Advance and draw one frame. Call once per animation frame.
    pub fn frame(&mut self) {
        let input = self.input.snapshot();
        self.session.tick(&input, &mut self.presenter);
    }

    /// Pointer moved to viewport coordinate `client_y`
    pub fn pointer_move(&mut self, client_y: f64) {
        if self.session.state() == GameState::Playing {
            let y = self.presenter.canvas.to_canvas_y(client_y);
            self.input.pointer_moved(y);
        }
    }

    /// Returns true when the key was handled and the default action should be
    /// suppressed.
    pub fn key_down(&mut self, key: &str, repeat: bool) -> bool {
        match handle_key_down(key, repeat) {
            Some(action) => {
                self.apply(action);
                true
            }
            // Auto-repeat of a command key is still ours
            None => repeat && matches!(key, " " | "Escape"),
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match handle_key_up(key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    /// Run a UI button command by name. Returns whether the state changed.
    pub fn command(&mut self, name: &str) -> Result<bool, JsValue> {
        let command = parse_command(name)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown command: {name}")))?;
        Ok(self.run(command))
    }

    /// Pick a difficulty by name. Unknown names keep the current one.
    pub fn select_difficulty(&mut self, name: &str) -> bool {
        self.session
            .select_difficulty(name)
            .map(|t| t.accepted)
            .unwrap_or(false)
    }

    /// Page lost focus
    pub fn blur(&mut self) {
        self.input.release_all();
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.session.state().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn difficulty(&self) -> String {
        self.session.difficulty().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn player_score(&self) -> u8 {
        self.session.score().player
    }

    #[wasm_bindgen(getter)]
    pub fn opponent_score(&self) -> u8 {
        self.session.score().opponent
    }

    /// "player" or "opponent" once the match is over
    #[wasm_bindgen(getter)]
    pub fn winner(&self) -> Option<String> {
        self.session.frame().winner.map(|side| {
            match side {
                Side::Player => "player",
                Side::Opponent => "opponent",
            }
            .to_string()
        })
    }
}

impl PongClient {
    fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Up(pressed) => self.input.set_up(pressed),
            KeyAction::Down(pressed) => self.input.set_down(pressed),
            KeyAction::Command(command) => {
                self.run(command);
            }
        }
    }

    fn run(&mut self, command: Command) -> bool {
        let transition = self.session.command(command);
        if transition.accepted && transition.to != GameState::Playing {
            self.input.release_all();
        }
        transition.accepted
    }
}
