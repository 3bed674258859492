use std::time::Duration;

use crate::games::SessionRng;

pub const DEFAULT_AI_MOVE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub ai_move_delay: Duration,
    pub seed: Option<u64>,
}

impl TicTacToeSessionSettings {
    pub fn create_rng(&self) -> SessionRng {
        match self.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        }
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            ai_move_delay: DEFAULT_AI_MOVE_DELAY,
            seed: None,
        }
    }
}
