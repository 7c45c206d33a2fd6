/// Bullet spawning and flight.

use crate::entities::{Bullet, Entity, Sprite};
use crate::shape::{Shape, ShapeId};

pub const PLAYER_SHOT_VELOCITY: i32 = 1;
pub const PLAYER_SHOT_DAMAGE: i32 = 1;

/// Split a shot bitmap placed at `(x, y)` into one bullet per filled cell.
pub fn fire(shot: &Shape, x: i32, y: i32, velocity: i32, damage: i32) -> Vec<Bullet> {
    shot.cells()
        .map(|(col, row)| Bullet {
            x: x + col as i32,
            y: y + row as i32,
            velocity,
            damage,
        })
        .collect()
}

/// One volley from the player's current position.
pub fn player_volley(player: &Entity) -> Vec<Bullet> {
    fire(
        ShapeId::PlayerShot.shape(),
        player.x,
        player.y,
        PLAYER_SHOT_VELOCITY,
        PLAYER_SHOT_DAMAGE,
    )
}

/// True once the next step would carry the bullet past the top row.
pub fn out_of_bounds(b: &Bullet) -> bool {
    b.y < b.velocity
}

pub fn advance(b: &mut Bullet) {
    b.y -= b.velocity;
}

pub fn sprite(b: &Bullet) -> Sprite {
    Sprite {
        shape: ShapeId::Bullet,
        x: b.x,
        y: b.y,
        damaged: false,
    }
}
