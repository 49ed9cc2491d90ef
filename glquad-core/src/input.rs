use std::collections::VecDeque;

use compact_str::CompactString;

/// Direction of a single movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Maps a DOM `KeyboardEvent.key` value to a direction.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns the translation for one step of the given length.
    pub fn offset(self, step: f32) -> [f32; 3] {
        match self {
            Direction::Up => [0.0, step, 0.0],
            Direction::Down => [0.0, -step, 0.0],
            Direction::Left => [-step, 0.0, 0.0],
            Direction::Right => [step, 0.0, 0.0],
        }
    }
}

/// Input delivered by the host, consumed once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed, or auto-repeated while held. `key` is the
    /// `KeyboardEvent.key` value.
    KeyDown { key: CompactString },
}

impl InputEvent {
    pub fn key_down(key: &str) -> Self {
        InputEvent::KeyDown { key: key.into() }
    }

    /// Returns the movement direction this event requests, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            InputEvent::KeyDown { key } => Direction::from_key(key),
        }
    }
}

/// FIFO of pending input events.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Removes and yields all pending events in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    /// Discards all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        for key in ["a", "Enter", "arrowup", "Up", "", " "] {
            assert_eq!(Direction::from_key(key), None, "key {key:?}");
        }
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Direction::Up.offset(0.1), [0.0, 0.1, 0.0]);
        assert_eq!(Direction::Down.offset(0.1), [0.0, -0.1, 0.0]);
        assert_eq!(Direction::Left.offset(0.1), [-0.1, 0.0, 0.0]);
        assert_eq!(Direction::Right.offset(0.1), [0.1, 0.0, 0.0]);
    }

    #[test]
    fn test_queue_preserves_order() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::key_down("ArrowLeft"));
        queue.push(InputEvent::key_down("x"));
        queue.push(InputEvent::key_down("ArrowUp"));
        assert_eq!(queue.len(), 3);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                InputEvent::key_down("ArrowLeft"),
                InputEvent::key_down("x"),
                InputEvent::key_down("ArrowUp"),
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear_discards_pending() {
        let mut queue = InputQueue::new();
        for _ in 0..5 {
            queue.push(InputEvent::key_down("ArrowDown"));
        }

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.drain().count(), 0);
    }

    #[test]
    fn test_event_direction() {
        assert_eq!(InputEvent::key_down("ArrowRight").direction(), Some(Direction::Right));
        assert_eq!(InputEvent::key_down("Shift").direction(), None);
    }
}
