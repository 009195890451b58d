//! Gameplay constants and tuning parameters.
//!
//! Distances are pixels, speeds pixels per tick, timers in ticks at the
//! shared 60 Hz tick rate.

// --- Playfield ---

pub const ARENA_WIDTH: f32 = 1024.0;

pub const ARENA_HEIGHT: f32 = 768.0;

// --- Units ---

pub const UNIT_MAX_HEALTH: i32 = 100;

pub const UNIT_SPEED: f32 = 2.0;

/// Unit footprint (square side) for drawing and selection.
pub const UNIT_SIZE: f32 = 16.0;

/// Mineral cost of any trainable unit.
pub const UNIT_COST: u32 = 50;

/// Newly trained units appear within this offset of their building,
/// per axis.
pub const TRAIN_SPAWN_JITTER: f32 = 20.0;

// --- Buildings ---

pub const BUILDING_MAX_HEALTH: i32 = 500;

pub const BUILDING_SIZE: f32 = 64.0;

/// A worker must be this close to its build site to place the building.
pub const BUILD_RANGE: f32 = 40.0;

// --- Combat ---

pub const ATTACK_RANGE: f32 = 50.0;

/// Damage per tick while the target is in range.
pub const ATTACK_DAMAGE: i32 = 10;

// --- Harvesting ---

/// A worker harvests while within this distance of its node.
pub const HARVEST_RANGE: f32 = 20.0;

/// Minerals moved from node to player per harvesting tick.
pub const HARVEST_RATE: u32 = 8;

/// A right-click within this distance of a node is a harvest order.
pub const RESOURCE_CLICK_RADIUS: f32 = 20.0;

/// Starting ore per mineral node.
pub const NODE_AMOUNT: u32 = 1000;

// --- Selection ---

/// Minimum drag extent, per axis, for a rectangle selection.
pub const DRAG_THRESHOLD: f32 = 10.0;

// --- Economy ---

pub const STARTING_MINERALS: u32 = 50;

pub const STARTING_SUPPLY_CAP: u32 = 10;

// --- Opponent ---

/// Ticks between opponent decision turns (~1 second).
pub const OPPONENT_INTERVAL_TICKS: u32 = 60;
