/// Game state machine.
///
/// `tick` takes an immutable reference to the current `GameState`, the action
/// decoded this tick and an RNG handle, and returns the next state together
/// with the frame to draw. Side effects are limited to the injected RNG.

use log::info;
use rand::Rng;

use crate::combat;
use crate::entities::{Action, Archetype, Entity, Frame, GameState, Overlay, Phase, Sprite};
use crate::movement;
use crate::projectile;
use crate::wave;

// ── Constructors ─────────────────────────────────────────────────────────────

fn spawn_player(width: u16, height: u16) -> Entity {
    let p = Archetype::Player;
    Entity::new(p, (width / 2) as i32, p.spawn_y(height as i32))
}

/// Build the title-screen state for the given terminal dimensions.
pub fn init_state(width: u16, height: u16) -> GameState {
    GameState {
        player: spawn_player(width, height),
        entities: Vec::new(),
        bullets: Vec::new(),
        wave: 0,
        wave_complete: false,
        phase: Phase::Start,
        last_action: None,
        width,
        height,
    }
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Apply the phase transitions and one-shot effects of `action`, then record
/// it as the last action. Quit is left to the caller.
pub fn apply_action(state: &mut GameState, action: Option<Action>, rng: &mut impl Rng) {
    match (action, state.phase) {
        (Some(Action::Start), Phase::Start) => {
            info!("game started");
            state.phase = Phase::Playing;
            wave::new_wave(state, rng);
        }
        (Some(Action::Start), Phase::Loss) => restart(state, rng),
        // Edge-triggered: holding fire yields one volley.
        (Some(Action::Fire), Phase::Playing) if state.last_action != Some(Action::Fire) => {
            let volley = projectile::player_volley(&state.player);
            state.bullets.extend(volley);
        }
        _ => {}
    }
    state.last_action = action;
}

fn restart(state: &mut GameState, rng: &mut impl Rng) {
    info!("restarting after loss at wave {}", state.wave);
    state.wave = 0;
    state.bullets.clear();
    state.player = spawn_player(state.width, state.height);
    state.phase = Phase::Playing;
    wave::new_wave(state, rng);
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick.
pub fn tick(
    state: &GameState,
    action: Option<Action>,
    rng: &mut impl Rng,
) -> (GameState, Frame) {
    let mut next = state.clone();
    apply_action(&mut next, action, rng);

    let mut sprites = Vec::new();
    if next.phase == Phase::Playing {
        step_playing(&mut next, &mut sprites, rng);
    }

    if next.phase == Phase::Playing && combat::passed_through(&next.entities, next.height as i32) {
        info!("overrun at wave {}", next.wave);
        next.phase = Phase::Loss;
    }

    let frame = match next.phase {
        Phase::Start => Frame {
            sprites: Vec::new(),
            overlay: Some(Overlay::Start),
            wave: next.wave,
        },
        Phase::Playing => Frame {
            sprites,
            overlay: None,
            wave: next.wave,
        },
        Phase::Loss => Frame {
            sprites: Vec::new(),
            overlay: Some(Overlay::Loss { score: next.wave }),
            wave: next.wave,
        },
    };
    (next, frame)
}

fn step_playing(state: &mut GameState, sprites: &mut Vec<Sprite>, rng: &mut impl Rng) {
    let width = state.width as i32;

    // ── 1. Enemies ───────────────────────────────────────────────────────────
    for e in state.entities.iter_mut().filter(|e| e.alive) {
        movement::advance_enemy(e, width);
        if e.alive {
            sprites.push(Sprite {
                shape: e.shape,
                x: e.x,
                y: e.y,
                damaged: e.damaged,
            });
        }
        e.damaged = false;
    }

    // ── 2. Player ────────────────────────────────────────────────────────────
    movement::move_player(&mut state.player, state.last_action, width);
    sprites.push(Sprite {
        shape: state.player.shape,
        x: state.player.x,
        y: state.player.y,
        damaged: state.player.damaged,
    });

    // ── 3. Bullets: draw where they are, then retire or advance ──────────────
    let entities = &mut state.entities;
    state.bullets.retain_mut(|b| {
        sprites.push(projectile::sprite(b));
        if projectile::out_of_bounds(b) || combat::resolve_hit(entities, b) {
            false
        } else {
            projectile::advance(b);
            true
        }
    });

    // ── 4. Wave clear ────────────────────────────────────────────────────────
    if combat::wave_cleared(&state.entities) {
        state.wave += 1;
        info!("wave cleared, advancing to wave {}", state.wave);
        wave::new_wave(state, rng);
    }
}
