/// All game entity types — pure data, no logic.

use crate::shape::ShapeId;

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
    /// Start from the title screen, or restart after a loss.
    Start,
    Quit,
}

// ── Phases ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Start,
    Playing,
    Loss,
}

// ── Archetypes ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Archetype {
    Player,
    Scout,
    Weaver,
    Brute,
    Boss,
}

impl Archetype {
    pub fn width(self) -> i32 {
        self.shape().shape().width() as i32
    }

    pub fn max_health(self) -> i32 {
        match self {
            Archetype::Player => 100,
            Archetype::Scout => 5,
            Archetype::Weaver => 10,
            Archetype::Brute => 15,
            Archetype::Boss => 200,
        }
    }

    /// Primary bitmap.
    pub fn shape(self) -> ShapeId {
        match self {
            Archetype::Player => ShapeId::Player,
            Archetype::Scout => ShapeId::Scout,
            Archetype::Weaver => ShapeId::Weaver,
            Archetype::Brute => ShapeId::Brute,
            Archetype::Boss => ShapeId::Boss,
        }
    }

    /// Row an archetype enters on, given the terminal height.
    pub fn spawn_y(self, height: i32) -> i32 {
        match self {
            Archetype::Player => height - 3,
            Archetype::Scout => 4,
            Archetype::Weaver => height / 3,
            Archetype::Brute => height / 2,
            Archetype::Boss => (height / 4) * 3,
        }
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Horizontal boundary an entity touched most recently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub archetype: Archetype,
    /// Column of the bitmap's top-left cell.
    pub x: i32,
    /// Row of the bitmap's top-left cell.
    pub y: i32,
    pub shape: ShapeId,
    pub health: i32,
    pub alive: bool,
    /// Set by a hit, cleared after the entity's next movement step.
    pub damaged: bool,
    pub collided: Option<Wall>,
}

impl Entity {
    pub fn new(archetype: Archetype, x: i32, y: i32) -> Self {
        Entity {
            archetype,
            x,
            y,
            shape: archetype.shape(),
            health: archetype.max_health(),
            alive: true,
            damaged: false,
            collided: None,
        }
    }

    pub fn width(&self) -> i32 {
        self.archetype.width()
    }

    /// Rows in the bitmap currently shown.
    pub fn height(&self) -> i32 {
        self.shape.shape().height() as i32
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Rows travelled upward per tick.
    pub velocity: i32,
    pub damage: i32,
}

// ── Draw list ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub shape: ShapeId,
    pub x: i32,
    pub y: i32,
    pub damaged: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    Start,
    Loss { score: u32 },
}

/// Everything the renderer needs for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub sprites: Vec<Sprite>,
    pub overlay: Option<Overlay>,
    pub wave: u32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state. Only the tick loop owns a mutable copy.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Entity,
    /// Current wave's enemies, dead ones included until the wave is replaced.
    pub entities: Vec<Entity>,
    pub bullets: Vec<Bullet>,
    pub wave: u32,
    /// True between a wave being cleared and its replacement spawning.
    /// The tick loop regenerates within the same step, so it reads false
    /// after every `tick`.
    pub wave_complete: bool,
    pub phase: Phase,
    pub last_action: Option<Action>,
    pub width: u16,
    pub height: u16,
}
