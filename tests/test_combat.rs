use terminal_invaders::combat::*;
use terminal_invaders::entities::*;

fn bullet(x: i32, y: i32) -> Bullet {
    Bullet { x, y, velocity: 1, damage: 1 }
}

// ── hit test ──────────────────────────────────────────────────────────────────

#[test]
fn hit_on_row_below_bitmap_within_columns() {
    // Scout: 7 wide, 3 rows → contact row is y + 3
    let e = Entity::new(Archetype::Scout, 10, 5);
    assert!(hits(&bullet(10, 8), &e));
    assert!(hits(&bullet(16, 8), &e));
}

#[test]
fn no_hit_outside_columns() {
    let e = Entity::new(Archetype::Scout, 10, 5);
    assert!(!hits(&bullet(9, 8), &e));
    assert!(!hits(&bullet(17, 8), &e));
}

#[test]
fn no_hit_off_contact_row() {
    let e = Entity::new(Archetype::Scout, 10, 5);
    assert!(!hits(&bullet(12, 7), &e)); // inside the bitmap
    assert!(!hits(&bullet(12, 9), &e));
    assert!(!hits(&bullet(12, 5), &e));
}

// ── resolve_hit ───────────────────────────────────────────────────────────────

#[test]
fn hit_applies_damage_and_marks_damaged() {
    let mut entities = vec![Entity::new(Archetype::Weaver, 20, 10)];
    assert!(resolve_hit(&mut entities, &bullet(25, 14)));
    assert_eq!(entities[0].health, 9);
    assert!(entities[0].damaged);
    assert!(entities[0].alive);
}

#[test]
fn killing_hit_leaves_entity_alive_until_next_move() {
    let mut entities = vec![Entity::new(Archetype::Scout, 10, 5)];
    entities[0].health = 1;
    assert!(resolve_hit(&mut entities, &bullet(12, 8)));
    assert_eq!(entities[0].health, 0);
    assert!(entities[0].alive);
}

#[test]
fn dead_entities_do_not_stop_bullets() {
    let mut entities = vec![Entity::new(Archetype::Scout, 10, 5)];
    entities[0].alive = false;
    assert!(!resolve_hit(&mut entities, &bullet(12, 8)));
    assert_eq!(entities[0].health, 5);
}

#[test]
fn bullet_damages_every_overlapping_entity() {
    let mut entities = vec![
        Entity::new(Archetype::Scout, 10, 5),
        Entity::new(Archetype::Scout, 11, 5),
    ];
    assert!(resolve_hit(&mut entities, &bullet(12, 8)));
    assert_eq!((entities[0].health, entities[1].health), (4, 4));
    assert!(entities.iter().all(|e| e.damaged));
}

#[test]
fn overlapping_hit_skips_entities_off_the_contact_row() {
    let mut entities = vec![
        Entity::new(Archetype::Scout, 10, 5),
        Entity::new(Archetype::Scout, 11, 6),
        Entity::new(Archetype::Scout, 40, 5),
    ];
    assert!(resolve_hit(&mut entities, &bullet(12, 8)));
    assert_eq!(entities[0].health, 4);
    assert_eq!(entities[1].health, 5);
    assert_eq!(entities[2].health, 5);
}

#[test]
fn miss_leaves_everything_untouched() {
    let mut entities = vec![Entity::new(Archetype::Scout, 10, 5)];
    assert!(!resolve_hit(&mut entities, &bullet(40, 8)));
    assert_eq!(entities[0].health, 5);
    assert!(!entities[0].damaged);
}

// ── wave clear & pass-through ─────────────────────────────────────────────────

#[test]
fn empty_wave_counts_as_cleared() {
    assert!(wave_cleared(&[]));
}

#[test]
fn wave_cleared_only_when_all_dead() {
    let mut entities = vec![
        Entity::new(Archetype::Scout, 10, 5),
        Entity::new(Archetype::Brute, 50, 20),
    ];
    assert!(!wave_cleared(&entities));
    entities[0].alive = false;
    assert!(!wave_cleared(&entities));
    entities[1].alive = false;
    assert!(wave_cleared(&entities));
}

#[test]
fn live_entity_below_bottom_passes_through() {
    let entities = vec![
        Entity::new(Archetype::Scout, 10, 41),
        Entity::new(Archetype::Brute, 50, 20),
    ];
    assert!(passed_through(&entities, 40));
}

#[test]
fn entity_on_bottom_row_has_not_passed() {
    let entities = vec![Entity::new(Archetype::Scout, 10, 40)];
    assert!(!passed_through(&entities, 40));
}

#[test]
fn dead_entity_below_bottom_is_ignored() {
    let mut entities = vec![Entity::new(Archetype::Scout, 10, 41)];
    entities[0].alive = false;
    assert!(!passed_through(&entities, 40));
}
