//! Gameplay constants and tuning parameters.
//!
//! Distances are pixels, speeds pixels per tick, timers in ticks at the
//! shared 60 Hz tick rate.

// --- Playfield ---

/// Playfield width in pixels.
pub const ARENA_WIDTH: f32 = 800.0;

/// Playfield height in pixels.
pub const ARENA_HEIGHT: f32 = 600.0;

// --- King ---

pub const KING_RADIUS: f32 = 20.0;

pub const KING_MAX_HEALTH: i32 = 100;

/// Ticks between king shots.
pub const KING_SHOT_DELAY: u32 = 10;

pub const KING_SHOT_DAMAGE: i32 = 10;

pub const KING_SHOT_RADIUS: f32 = 2.0;

// --- Towers ---

/// Maximum targeting range in pixels.
pub const TOWER_RANGE: f32 = 150.0;

/// Ticks between tower shots. Slower than the king.
pub const TOWER_SHOT_DELAY: u32 = 30;

pub const TOWER_SHOT_DAMAGE: i32 = 20;

pub const TOWER_SHOT_RADIUS: f32 = 3.0;

/// Gold cost to raise one tower during a build phase.
pub const TOWER_COST: u32 = 50;

// --- Enemies ---

pub const ENEMY_SPEED: f32 = 1.5;

pub const ENEMY_MAX_HEALTH: i32 = 50;

pub const ENEMY_RADIUS: f32 = 15.0;

/// Gold credited per kill during a night, paid out at dawn.
pub const ENEMY_BOUNTY: u32 = 10;

/// Vertical margin kept clear at the top and bottom of spawn edges.
pub const ENEMY_SPAWN_MARGIN: f32 = 50.0;

// --- Projectiles ---

pub const PROJECTILE_SPEED: f32 = 8.0;

// --- Wave director (endless variant) ---

/// Ticks between waves (5 seconds at 60 Hz).
pub const WAVE_INTERVAL_TICKS: u32 = 300;

/// Enemies spawned per wave index.
pub const ENEMIES_PER_WAVE: u32 = 2;

/// Contact damage dealt by an enemy reaching the king.
pub const CONTACT_DAMAGE_ENDLESS: i32 = 10;

// --- Day director (day/night variant) ---

/// Enemies spawned per day index at nightfall.
pub const ENEMIES_PER_DAY: u32 = 3;

pub const CONTACT_DAMAGE_DAY_NIGHT: i32 = 15;

pub const STARTING_GOLD: u32 = 200;

/// Build phase length for day one (10 seconds at 60 Hz).
pub const BUILD_TICKS_BASE: u32 = 600;

/// Additional build ticks granted per survived day.
pub const BUILD_TICKS_PER_DAY: u32 = 60;

/// Flat gold bonus per day, on top of accumulated kill bounties.
pub const DAY_BONUS_GOLD: u32 = 50;

/// Surviving past this day wins the round.
pub const VICTORY_DAY: u32 = 5;
