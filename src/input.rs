/// Abstract input consumed by the simulation.
///
/// Movement is level-sensitive: it applies on every tick the key is held.
/// Fire and restart are edge-triggered: they fire once per press, however
/// long the key stays down.  `InputLatch` turns raw "is held" flags into
/// that shape.

/// What the orchestrator sees for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    /// True only on the tick fire went down.
    pub fire: bool,
    /// True only on the tick restart went down.
    pub restart: bool,
    pub quit: bool,
}

/// Keys the front-end currently considers held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub restart: bool,
    pub quit: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputLatch {
    fire_was_held: bool,
    restart_was_held: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latch(&mut self, held: HeldKeys) -> InputState {
        let state = InputState {
            move_left: held.left,
            move_right: held.right,
            fire: held.fire && !self.fire_was_held,
            restart: held.restart && !self.restart_was_held,
            quit: held.quit,
        };
        self.fire_was_held = held.fire;
        self.restart_was_held = held.restart;
        state
    }
}
