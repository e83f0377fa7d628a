use std::sync::mpsc::{self, Receiver, RecvError};

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the modal loop
#[derive(Clone, Debug)]
pub enum DialogEvent {
    Key(KeyEvent),
    Resize,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource: Send + 'static {
    /// Block until the next event arrives.
    /// Err(RecvError) means the source is gone for good.
    fn recv(&self) -> Result<DialogEvent, RecvError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<DialogEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if tx.send(DialogEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(DialogEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv(&self) -> Result<DialogEvent, RecvError> {
        self.rx.recv()
    }
}

/// Test event source for unit and headless integration tests
pub struct TestEventSource {
    rx: Receiver<DialogEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<DialogEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv(&self) -> Result<DialogEvent, RecvError> {
        self.rx.recv()
    }
}

/// Runner that advances the dialog one event at a time
pub struct Runner<E: EventSource> {
    event_source: E,
}

impl<E: EventSource> Runner<E> {
    pub fn new(event_source: E) -> Self {
        Self { event_source }
    }

    /// Blocks for the next event; Err once the event source disconnects.
    pub fn step(&self) -> Result<DialogEvent, RecvError> {
        self.event_source.recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::mpsc;

    #[test]
    fn step_passes_through_events() {
        let (tx, rx) = mpsc::channel();
        tx.send(DialogEvent::Resize).unwrap();
        tx.send(DialogEvent::Key(KeyEvent::new(
            KeyCode::Enter,
            KeyModifiers::NONE,
        )))
        .unwrap();
        let runner = Runner::new(TestEventSource::new(rx));

        match runner.step() {
            Ok(DialogEvent::Resize) => {}
            other => panic!("expected Resize event, got {other:?}"),
        }
        match runner.step() {
            Ok(DialogEvent::Key(key)) => assert_eq!(key.code, KeyCode::Enter),
            other => panic!("expected Key event, got {other:?}"),
        }
    }

    #[test]
    fn step_errors_once_the_source_disconnects() {
        let (tx, rx) = mpsc::channel::<DialogEvent>();
        drop(tx);
        let runner = Runner::new(TestEventSource::new(rx));

        assert!(runner.step().is_err());
    }
}
