//! Player input captured between ticks.
//!
//! The host writes into an [`InputBuffer`] whenever the browser reports an
//! event; the session reads one [`InputSnapshot`] at the start of each tick.

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Pointer y the paddle center should jump to, if the pointer moved
    pub pointer_y: Option<f32>,
    pub up: bool,
    pub down: bool,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(y: f32) -> Self {
        Self {
            pointer_y: Some(y),
            ..Self::default()
        }
    }

    /// Vertical key direction: -1 up, 1 down, 0 when neither or both are held
    pub fn key_dir(&self) -> i8 {
        match (self.up, self.down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

/// Last-writer-wins buffer of pointer and key state
#[derive(Debug, Clone, Copy, Default)]
pub struct InputBuffer {
    pointer_y: Option<f32>,
    up: bool,
    down: bool,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_moved(&mut self, y: f32) {
        self.pointer_y = Some(y);
    }

    pub fn set_up(&mut self, pressed: bool) {
        self.up = pressed;
    }

    pub fn set_down(&mut self, pressed: bool) {
        self.down = pressed;
    }

    /// Read the state for the next tick. Held keys persist; a pointer move is
    /// consumed so a still pointer doesn't pin the paddle.
    pub fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot {
            pointer_y: self.pointer_y.take(),
            up: self.up,
            down: self.down,
        }
    }

    /// Drop held keys, e.g. when the page loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_is_consumed_once() {
        let mut buffer = InputBuffer::new();
        buffer.pointer_moved(120.0);
        buffer.pointer_moved(140.0);

        assert_eq!(buffer.snapshot().pointer_y, Some(140.0), "Last write wins");
        assert_eq!(buffer.snapshot().pointer_y, None);
    }

    #[test]
    fn test_keys_persist_until_released() {
        let mut buffer = InputBuffer::new();
        buffer.set_up(true);
        assert!(buffer.snapshot().up);
        assert!(buffer.snapshot().up);
        buffer.set_up(false);
        assert!(!buffer.snapshot().up);
    }

    #[test]
    fn test_key_dir() {
        let mut snapshot = InputSnapshot::new();
        assert_eq!(snapshot.key_dir(), 0);
        snapshot.up = true;
        assert_eq!(snapshot.key_dir(), -1);
        snapshot.down = true;
        assert_eq!(snapshot.key_dir(), 0, "Opposing keys cancel");
        snapshot.up = false;
        assert_eq!(snapshot.key_dir(), 1);
    }

    #[test]
    fn test_release_all() {
        let mut buffer = InputBuffer::new();
        buffer.set_down(true);
        buffer.pointer_moved(10.0);
        buffer.release_all();
        assert_eq!(buffer.snapshot(), InputSnapshot::default());
    }
}
