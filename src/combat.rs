/// Hit tests and end-of-wave checks.

use crate::entities::{Bullet, Entity};

/// A bullet hits when it sits on the row just below the entity's bitmap,
/// within the entity's columns.
pub fn hits(b: &Bullet, e: &Entity) -> bool {
    b.x >= e.x && b.x <= e.x + e.width() - 1 && b.y == e.y + e.height()
}

/// Apply `b` to every living entity it hits. Returns whether the bullet
/// was consumed.
///
/// Health may drop to zero or below here; the entity stays alive until its
/// next movement step.
pub fn resolve_hit(entities: &mut [Entity], b: &Bullet) -> bool {
    let mut consumed = false;
    for e in entities.iter_mut().filter(|e| e.alive && hits(b, e)) {
        e.health -= b.damage;
        e.damaged = true;
        consumed = true;
    }
    consumed
}

/// No living entity remains. An empty wave counts as cleared.
pub fn wave_cleared(entities: &[Entity]) -> bool {
    !entities.iter().any(|e| e.alive)
}

/// A living entity has moved past the bottom row.
pub fn passed_through(entities: &[Entity], height: i32) -> bool {
    entities.iter().any(|e| e.alive && e.y > height)
}
