/// Game tuning parameters for Pong
///
/// Distances are in canvas pixels and speeds in pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 20.0; // Gap between screen edge and paddle
    pub const KEYBOARD_SPEED: f32 = 8.0;

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply |vx| on paddle hit
    pub const DEFLECTION_SCALE: f32 = 8.0; // vy at the very edge of a paddle
    pub const SERVE_VERTICAL_FACTOR: f32 = 0.6;

    // AI
    pub const AI_DEADBAND: f32 = 10.0;

    // Particles
    pub const PARTICLE_COUNT: usize = 8;
    pub const PARTICLE_LIFE: u32 = 30;
    pub const PARTICLE_SPREAD: f32 = 5.0;
    pub const PARTICLE_DAMPING: f32 = 0.98;

    // Score
    pub const MAX_SCORE: u8 = 10;
}
