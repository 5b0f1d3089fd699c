use space_invaders::entities::*;
use space_invaders::geometry::Rect;

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges_and_centre() {
    let r = Rect::new(10, 20, 16, 8);
    assert_eq!(r.left(), 10);
    assert_eq!(r.right(), 26);
    assert_eq!(r.top(), 20);
    assert_eq!(r.bottom(), 28);
    assert_eq!(r.center_x(), 18);
    assert_eq!(r.center_y(), 24);
}

#[test]
fn rect_touching_edges_do_not_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(10, 0, 5, 5)));
    assert!(!a.intersects(&Rect::new(0, 10, 5, 5)));
    assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
}

#[test]
fn empty_rect_intersects_nothing() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(5, 5, 0, 3)));
}

#[test]
fn rect_contains_point_is_half_open() {
    let r = Rect::new(0, 0, 4, 4);
    assert!(r.contains_point(0, 0));
    assert!(r.contains_point(3, 3));
    assert!(!r.contains_point(4, 0));
    assert!(!r.contains_point(0, 4));
}

#[test]
fn from_center_bottom_places_rect() {
    let r = Rect::from_center_bottom(112, 226, 11, 8);
    assert_eq!(r, Rect::new(107, 218, 11, 8));
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_starts_centred_with_three_lives() {
    let p = Player::new();
    assert_eq!(p.rect, Rect::new(107, 218, 11, 8));
    assert_eq!(p.lives, 3);
    assert_eq!(p.score, 0);
}

#[test]
fn player_steer_moves_by_speed() {
    let mut p = Player::new();
    p.steer(true, false);
    assert_eq!(p.rect.x, 105);
    p.steer(false, true);
    p.steer(false, true);
    assert_eq!(p.rect.x, 109);
}

#[test]
fn player_both_keys_cancel() {
    let mut p = Player::new();
    p.steer(true, true);
    assert_eq!(p.rect.x, 107);
}

#[test]
fn player_refuses_to_leave_field() {
    let mut p = Player::new();
    p.rect.x = 0;
    p.steer(true, false);
    assert_eq!(p.rect.x, 0);

    p.rect.x = 224 - 11;
    p.steer(false, true);
    assert_eq!(p.rect.x, 213);
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[test]
fn player_shot_spawns_above_nose_and_rises() {
    let mut shot = Projectile::from_player(ProjectileId(7), 112, 218);
    assert_eq!(shot.rect, Rect::new(111, 210, 2, 8));
    assert_eq!(shot.direction, Direction::Up);
    assert_eq!(shot.owner, Owner::Player);
    shot.advance();
    assert_eq!(shot.rect.y, 205);
}

#[test]
fn invader_shot_falls() {
    let mut shot = Projectile::from_invader(ProjectileId(1), 48, 48);
    assert_eq!(shot.rect, Rect::new(47, 40, 2, 8));
    shot.advance();
    assert_eq!(shot.rect.y, 45);
    assert_eq!(shot.owner, Owner::Invader);
}

#[test]
fn projectile_offscreen_once_fully_outside() {
    let mut shot = Projectile::from_player(ProjectileId(0), 50, 0);
    assert!(!shot.is_offscreen()); // bottom == 0
    shot.advance();
    assert!(shot.is_offscreen());

    let mut low = Projectile::from_invader(ProjectileId(1), 50, 264);
    assert!(!low.is_offscreen()); // top == 256
    low.advance();
    assert!(low.is_offscreen());
}

// ── Invader ───────────────────────────────────────────────────────────────────

#[test]
fn tier_by_row_and_points() {
    assert_eq!(Tier::for_row(0), Tier::Small);
    assert_eq!(Tier::for_row(1), Tier::Small);
    assert_eq!(Tier::for_row(2), Tier::Medium);
    assert_eq!(Tier::for_row(3), Tier::Medium);
    assert_eq!(Tier::for_row(4), Tier::Large);
    assert_eq!(Tier::Large.points(), 30);
    assert_eq!(Tier::Medium.points(), 20);
    assert_eq!(Tier::Small.points(), 10);
}

#[test]
fn invader_flips_frame_only_when_pending() {
    let mut inv = Invader::new(40, 40, Tier::Small);
    inv.advance();
    assert_eq!(inv.frame, 0);

    inv.pending_toggle = true;
    inv.advance();
    assert_eq!(inv.frame, 1);
    assert!(!inv.pending_toggle);

    inv.advance();
    assert_eq!(inv.frame, 1);
}

#[test]
fn invader_never_offscreen() {
    let inv = Invader::new(-100, 900, Tier::Large);
    assert!(!inv.is_offscreen());
}

// ── Saucer ────────────────────────────────────────────────────────────────────

#[test]
fn saucer_enters_from_chosen_edge() {
    let mut left = Saucer::new(true, 100);
    assert_eq!(left.rect, Rect::new(-32, 20, 32, 8));
    assert!(!left.is_offscreen());
    left.advance();
    assert_eq!(left.rect.x, -30);

    let mut right = Saucer::new(false, 300);
    assert_eq!(right.rect.x, 224);
    assert!(!right.is_offscreen());
    right.advance();
    assert_eq!(right.rect.x, 222);
    assert_eq!(right.points, 300);
}

#[test]
fn saucer_offscreen_after_crossing() {
    let mut s = Saucer::new(true, 50);
    s.rect.x = 224;
    assert!(!s.is_offscreen());
    s.advance();
    assert!(s.is_offscreen());
}

// ── SimulationState ───────────────────────────────────────────────────────────

#[test]
fn projectile_ids_are_unique() {
    let mut s = space_invaders::compute::init_state();
    let a = s.alloc_projectile_id();
    let b = s.alloc_projectile_id();
    assert_ne!(a, b);
    assert_eq!(b, ProjectileId(a.0 + 1));
}

#[test]
fn game_state_clone_is_independent() {
    let original = space_invaders::compute::init_state();
    let mut cloned = original.clone();

    cloned.player.rect.x = 99;
    cloned.player.score = 999;
    cloned.swarm.invaders.clear();

    assert_eq!(original.player.rect.x, 107);
    assert_eq!(original.player.score, 0);
    assert_eq!(original.swarm.len(), 55);
}
