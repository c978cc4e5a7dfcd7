//! Cooperative polling over an input driver.

use std::io;
use std::time::Duration;

use crate::drivers::{InputDriver, InputEvent};

/// Bounded-wait event source for the state loops.
///
/// The poll interval doubles as the tick sleep: when nothing is pending the
/// call returns after the interval and the caller runs its per-tick checks
/// (resize detection, redraw). Nothing here blocks indefinitely.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self { driver, poll_interval }
    }

    /// Waits up to the poll interval for one decoded event. `None` means
    /// the interval elapsed quietly or the pending raw event normalized to
    /// nothing.
    pub fn poll(&mut self) -> io::Result<Option<InputEvent>> {
        if self.driver.poll(self.poll_interval)? {
            self.driver.read()
        } else {
            Ok(None)
        }
    }

    /// Drains one already-queued event without waiting. Lets a state loop
    /// finish an input burst before it redraws.
    pub fn poll_ready(&mut self) -> io::Result<Option<InputEvent>> {
        if self.driver.poll(Duration::ZERO)? {
            self.driver.read()
        } else {
            Ok(None)
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::drivers::keyboard::KeyInput;

    use super::*;

    /// Scripted driver: pops pre-seeded normalized events.
    struct Scripted {
        events: VecDeque<Option<InputEvent>>,
    }

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.events.is_empty())
        }

        fn read(&mut self) -> io::Result<Option<InputEvent>> {
            Ok(self.events.pop_front().flatten())
        }
    }

    #[test]
    fn poll_passes_decoded_events_through() {
        let mut events = VecDeque::new();
        events.push_back(Some(InputEvent::Key(KeyInput::Enter)));
        let mut event_loop = EventLoop::new(Scripted { events }, Duration::from_millis(1));

        assert_eq!(event_loop.poll().unwrap(), Some(InputEvent::Key(KeyInput::Enter)));
        assert_eq!(event_loop.poll().unwrap(), None);
    }

    #[test]
    fn normalized_away_events_do_not_block() {
        let mut events = VecDeque::new();
        events.push_back(None);
        events.push_back(Some(InputEvent::Key(KeyInput::Escape)));
        let mut event_loop = EventLoop::new(Scripted { events }, Duration::from_millis(1));

        assert_eq!(event_loop.poll().unwrap(), None);
        assert_eq!(event_loop.poll_ready().unwrap(), Some(InputEvent::Key(KeyInput::Escape)));
    }
}
