use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Tick(Instant),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Resize,
}
