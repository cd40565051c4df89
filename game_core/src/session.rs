use glam::Vec2;
use hecs::World;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::DifficultyError;
use crate::systems::clear_particles;
use crate::{
    find_ball, find_paddle, step, Ball, Command, Config, Difficulty, DifficultyProfile, Events,
    Frame, GameFsm, GameRng, GameState, InputSnapshot, Paddle, Particle, Presenter, Rally, Score,
    Side, SoundKind, Transition,
};

/// One running game: the entity world, its resources and the state machine
pub struct Session {
    world: World,
    config: Config,
    difficulty: Difficulty,
    score: Score,
    rally: Rally,
    events: Events,
    rng: GameRng,
    fsm: GameFsm,
    ticks: u64,
}

impl Session {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let mut world = World::new();
        let paddle_y = config.centered_paddle_y();
        crate::create_paddle(&mut world, Side::Player, paddle_y);
        crate::create_paddle(&mut world, Side::Opponent, paddle_y);
        crate::create_ball(&mut world, config.center(), Vec2::ZERO);

        let mut session = Self {
            world,
            difficulty: config.difficulty,
            config,
            score: Score::new(),
            rally: Rally::default(),
            events: Events::new(),
            rng,
            fsm: GameFsm::new(),
            ticks: 0,
        };
        session.reset_match();
        session
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }

    /// Apply a host command. Rejected commands change nothing.
    pub fn command(&mut self, command: Command) -> Transition {
        let transition = self.fsm.transition(command);
        if !transition.accepted {
            debug!(?command, state = ?transition.from, "command ignored");
            return transition;
        }
        debug!(?command, from = ?transition.from, to = ?transition.to, "state transition");

        match (command, transition.from) {
            (Command::Start, GameState::Start) => self.reset_match(),
            (Command::Restart, GameState::GameOver) => {
                clear_particles(&mut self.world);
                self.reset_match();
            }
            (Command::SelectDifficulty(difficulty), GameState::Start) => {
                info!(%difficulty, "difficulty selected");
                self.difficulty = difficulty;
                self.reset_match();
            }
            (Command::ConfirmExit, _) => info!(ticks = self.ticks, "session exited"),
            _ => {}
        }
        transition
    }

    /// Select a difficulty by name. Unknown names keep the current preset.
    pub fn select_difficulty(&mut self, name: &str) -> Result<Transition, DifficultyError> {
        match name.parse::<Difficulty>() {
            Ok(difficulty) => Ok(self.command(Command::SelectDifficulty(difficulty))),
            Err(err) => {
                warn!(name, current = %self.difficulty, "unknown difficulty, keeping current");
                Err(err)
            }
        }
    }

    /// Advance one tick without presenting it
    pub fn advance(&mut self, input: &InputSnapshot) -> &Events {
        if !self.fsm.is_playing() {
            self.events.clear();
            return &self.events;
        }

        let profile = self.profile();
        step(
            &mut self.world,
            &self.config,
            &profile,
            input,
            &mut self.score,
            &mut self.rally,
            &mut self.events,
            &mut self.rng,
        );
        self.ticks += 1;

        if let Some(winner) = self.events.winner {
            let transition = self.fsm.finish_match();
            debug!(?winner, to = ?transition.to, "match finished");
        }
        &self.events
    }

    /// Advance one tick, then hand sounds and the frame to the presenter
    pub fn tick<P: Presenter + ?Sized>(&mut self, input: &InputSnapshot, presenter: &mut P) {
        if self.fsm.is_exited() {
            return;
        }

        let events = self.advance(input);
        let mut sounds = Vec::with_capacity(3);
        if events.ball_hit_wall {
            sounds.push(SoundKind::WallHit);
        }
        if events.ball_hit_paddle.is_some() {
            sounds.push(SoundKind::PaddleHit);
        }
        if events.scored.is_some() {
            sounds.push(SoundKind::Score);
        }
        for sound in sounds {
            presenter.play_sound(sound);
        }

        presenter.render(&self.frame());
    }

    /// Snapshot of the current state for drawing
    pub fn frame(&self) -> Frame {
        let paddle_y = |side| {
            find_paddle(&self.world, side)
                .map(|p| p.y)
                .unwrap_or_else(|| self.config.centered_paddle_y())
        };
        let winner = match self.fsm.state() {
            GameState::GameOver => self.score.has_winner(self.config.max_score),
            _ => None,
        };

        Frame {
            arena: Vec2::new(self.config.arena_width, self.config.arena_height),
            ball: self.ball(),
            ball_radius: self.config.ball_radius,
            player: self.config.paddle_rect(Side::Player, paddle_y(Side::Player)),
            opponent: self.config.paddle_rect(Side::Opponent, paddle_y(Side::Opponent)),
            particles: self.particles(),
            score: self.score,
            state: self.fsm.state(),
            difficulty: self.difficulty,
            winner,
        }
    }

    /// Center everything, zero the score and serve in a random direction
    fn reset_match(&mut self) {
        let paddle_y = self.config.centered_paddle_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = paddle_y;
        }

        let profile = self.profile();
        let toward = if self.rng.0.gen_bool(0.5) {
            Side::Player
        } else {
            Side::Opponent
        };
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(
                self.config.center(),
                profile.ball_speed,
                self.config.serve_vertical_factor,
                toward,
                &mut self.rng,
            );
        }

        self.score = Score::new();
        self.rally.reset();
        self.events.clear();
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn rally(&self) -> Rally {
        self.rally
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.difficulty.profile()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn ball(&self) -> Ball {
        find_ball(&self.world).unwrap_or_else(|| Ball::new(self.config.center(), Vec2::ZERO))
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        find_paddle(&self.world, side)
    }

    pub fn particles(&self) -> Vec<Particle> {
        self.world
            .query::<&Particle>()
            .iter()
            .map(|(_e, p)| *p)
            .collect()
    }

    /// Direct world access for hosts and tests that stage positions
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
