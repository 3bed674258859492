use super::types::{GameResult, Mark};

pub trait GameObserver {
    fn on_game_started(&mut self) {}

    fn on_game_ended(&mut self, _result: GameResult) {}
}

// Opaque per-cell collaborator; the controller only forwards instructions to it.
pub trait CellHandle {
    fn show_mark(&mut self, mark: Mark);

    fn set_input_enabled(&mut self, enabled: bool);
}

impl CellHandle for () {
    fn show_mark(&mut self, _mark: Mark) {}

    fn set_input_enabled(&mut self, _enabled: bool) {}
}
