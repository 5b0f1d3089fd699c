use space_invaders::input::*;

fn held_fire() -> HeldKeys {
    HeldKeys {
        fire: true,
        ..HeldKeys::default()
    }
}

#[test]
fn fire_is_edge_triggered() {
    let mut latch = InputLatch::new();
    assert!(latch.latch(held_fire()).fire);
    assert!(!latch.latch(held_fire()).fire);
    assert!(!latch.latch(held_fire()).fire);

    assert!(!latch.latch(HeldKeys::default()).fire);
    assert!(latch.latch(held_fire()).fire);
}

#[test]
fn restart_is_edge_triggered() {
    let mut latch = InputLatch::new();
    let held = HeldKeys {
        restart: true,
        ..HeldKeys::default()
    };
    assert!(latch.latch(held).restart);
    assert!(!latch.latch(held).restart);
}

#[test]
fn movement_is_level_triggered() {
    let mut latch = InputLatch::new();
    let held = HeldKeys {
        left: true,
        right: true,
        ..HeldKeys::default()
    };
    for _ in 0..3 {
        let input = latch.latch(held);
        assert!(input.move_left);
        assert!(input.move_right);
    }
}

#[test]
fn fire_and_restart_latch_independently() {
    let mut latch = InputLatch::new();
    latch.latch(held_fire());
    let both = HeldKeys {
        fire: true,
        restart: true,
        ..HeldKeys::default()
    };
    let input = latch.latch(both);
    assert!(!input.fire);
    assert!(input.restart);
}

#[test]
fn quit_passes_through() {
    let mut latch = InputLatch::new();
    let held = HeldKeys {
        quit: true,
        ..HeldKeys::default()
    };
    assert!(latch.latch(held).quit);
    assert!(latch.latch(held).quit);
}
