/// Per-archetype movement policies.
///
/// Enemies move autonomously; the player only follows the action decoded
/// this tick. Dead entities never reach these functions.

use crate::entities::{Action, Archetype, Entity, Wall};
use crate::shape::ShapeId;

/// Columns left of this are the left boundary.
pub const LEFT_MARGIN: i32 = 2;

const SWEEP_STEP: i32 = 1;
const SCOUT_DROP: i32 = 17;
const WEAVER_DODGE: i32 = 50;
const BRUTE_BURST: i32 = 20;
const BRUTE_LOW_HEALTH: i32 = 4;
const PLAYER_STEP: i32 = 2;

pub fn touches_left(x: i32) -> bool {
    x < LEFT_MARGIN
}

pub fn touches_right(x: i32, width: i32, term_width: i32) -> bool {
    x > term_width - width
}

/// Record whichever wall `probe_x` is against, keeping the old value otherwise.
fn update_collided(e: &mut Entity, probe_x: i32, term_width: i32) -> bool {
    if touches_left(probe_x) {
        e.collided = Some(Wall::Left);
        true
    } else if touches_right(probe_x, e.width(), term_width) {
        e.collided = Some(Wall::Right);
        true
    } else {
        false
    }
}

/// Rightward after bouncing off the left wall, leftward otherwise.
fn sweep_direction(e: &Entity) -> i32 {
    match e.collided {
        Some(Wall::Left) => SWEEP_STEP,
        _ => -SWEEP_STEP,
    }
}

/// Advance one enemy by one tick.
///
/// An entity whose health has run out is marked dead here, before it moves,
/// so a killing hit stays visible for exactly one frame.
pub fn advance_enemy(e: &mut Entity, term_width: i32) {
    if e.health <= 0 {
        e.alive = false;
    }
    if !e.alive {
        return;
    }

    let (dx, dy) = match e.archetype {
        Archetype::Scout => scout_step(e, term_width),
        Archetype::Weaver => weaver_step(e, term_width),
        Archetype::Brute => brute_step(e, term_width),
        Archetype::Boss => boss_step(e, term_width),
        Archetype::Player => (0, 0),
    };
    e.x += dx;
    e.y += dy;
}

fn scout_step(e: &mut Entity, term_width: i32) -> (i32, i32) {
    let x = e.x;
    let dy = if update_collided(e, x, term_width) {
        SCOUT_DROP
    } else {
        0
    };
    (sweep_direction(e), dy)
}

fn weaver_step(e: &mut Entity, term_width: i32) -> (i32, i32) {
    let x = e.x;
    update_collided(e, x, term_width);
    let mut dx = sweep_direction(e);
    if e.damaged {
        if touches_left(e.x - WEAVER_DODGE) {
            dx = WEAVER_DODGE;
        } else if touches_right(e.x + WEAVER_DODGE, e.width(), term_width) {
            dx = -WEAVER_DODGE;
        }
    }
    (dx, 0)
}

fn brute_step(e: &mut Entity, term_width: i32) -> (i32, i32) {
    if touches_left(e.x - BRUTE_BURST) {
        e.collided = Some(Wall::Left);
    } else if touches_right(e.x + BRUTE_BURST, e.width(), term_width) {
        e.collided = Some(Wall::Right);
    }
    if !(e.damaged && e.health < BRUTE_LOW_HEALTH) {
        return (0, 0);
    }
    match e.collided {
        Some(Wall::Left) => (BRUTE_BURST, 0),
        _ => (-BRUTE_BURST, 0),
    }
}

fn boss_step(e: &mut Entity, term_width: i32) -> (i32, i32) {
    let x = e.x;
    update_collided(e, x, term_width);
    e.shape = match e.collided {
        Some(Wall::Left) => ShapeId::BossTurned,
        _ => ShapeId::Boss,
    };
    (sweep_direction(e), 0)
}

/// Move the player by one step, suppressing moves that would leave the screen.
pub fn move_player(player: &mut Entity, action: Option<Action>, term_width: i32) {
    match action {
        Some(Action::MoveLeft) => {
            let x = player.x - PLAYER_STEP;
            if !touches_left(x) {
                player.x = x;
            }
        }
        Some(Action::MoveRight) => {
            let x = player.x + PLAYER_STEP;
            if !touches_right(x, player.width(), term_width) {
                player.x = x;
            }
        }
        _ => {}
    }
}
