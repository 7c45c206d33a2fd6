use terminal_invaders::entities::*;
use terminal_invaders::projectile::*;
use terminal_invaders::shape::{Shape, ShapeId};

#[test]
fn volley_splits_shot_into_one_bullet_per_cell() {
    let player = Entity::new(Archetype::Player, 100, 37);
    let bullets = player_volley(&player);
    let positions: Vec<_> = bullets.iter().map(|b| (b.x, b.y)).collect();
    assert_eq!(positions, vec![(104, 37), (100, 38), (104, 38), (108, 38)]);
    assert!(bullets
        .iter()
        .all(|b| b.velocity == PLAYER_SHOT_VELOCITY && b.damage == PLAYER_SHOT_DAMAGE));
}

#[test]
fn fire_uses_given_velocity_and_damage() {
    let shot = Shape::from_bits(3, &[0b101]);
    let bullets = fire(&shot, 10, 20, 2, 5);
    assert_eq!(bullets.len(), 2);
    assert_eq!((bullets[0].x, bullets[0].y), (10, 20));
    assert_eq!((bullets[1].x, bullets[1].y), (12, 20));
    assert!(bullets.iter().all(|b| b.velocity == 2 && b.damage == 5));
}

#[test]
fn empty_shot_fires_nothing() {
    let shot = Shape::from_bits(4, &[0, 0]);
    assert!(fire(&shot, 0, 0, 1, 1).is_empty());
}

#[test]
fn advance_moves_up_by_velocity() {
    let mut b = Bullet { x: 5, y: 10, velocity: 2, damage: 1 };
    advance(&mut b);
    assert_eq!((b.x, b.y), (5, 8));
}

#[test]
fn out_of_bounds_accounts_for_velocity() {
    let b = |y, velocity| Bullet { x: 0, y, velocity, damage: 1 };
    assert!(out_of_bounds(&b(0, 1)));
    assert!(!out_of_bounds(&b(1, 1)));
    assert!(out_of_bounds(&b(2, 3)));
    assert!(!out_of_bounds(&b(3, 3)));
}

#[test]
fn bullet_sprite_is_undamaged_single_cell() {
    let s = sprite(&Bullet { x: 3, y: 4, velocity: 1, damage: 1 });
    assert_eq!(s, Sprite { shape: ShapeId::Bullet, x: 3, y: 4, damaged: false });
}
