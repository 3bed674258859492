mod config;
mod input;
mod view;

use std::io::Stdout;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate};
use tictactoe_engine::games::tictactoe::{
    Difficulty, GameController, GameResult, Position, SessionCommand, TicTacToeSession,
};
use tictactoe_engine::{log, logger};
use tokio::sync::mpsc;

use config::{ConsoleConfig, get_config_manager};
use view::{ConsoleAnnouncer, ConsoleCell, ConsoleView};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Easy,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, config: &mut ConsoleConfig) {
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty.into();
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(delay_ms) = self.delay_ms {
            config.ai_move_delay_ms = delay_ms;
        }
    }
}

fn print_summary(results: &[GameResult]) {
    if results.is_empty() {
        return;
    }
    let count = |wanted: GameResult| results.iter().filter(|&&r| r == wanted).count();
    println!(
        "Played {} game(s): player {}, AI {}, ties {}",
        results.len(),
        count(GameResult::HumanWins),
        count(GameResult::AiWins),
        count(GameResult::Draw)
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Console".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let manager: ConfigManager<FileContentConfigProvider, ConsoleConfig> = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path.clone()),
        None => get_config_manager(),
    };
    let mut config = manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;
    if args.save_config {
        manager.set_config(&config)?;
        log!("Saved configuration");
    }

    let settings = config.session_settings();
    let view = ConsoleView::shared(std::io::stdout());
    let mut controller: GameController<ConsoleCell<Stdout>> =
        GameController::new(settings.create_rng());
    for position in Position::all() {
        controller.register_cell(
            position.row,
            position.col,
            ConsoleCell::new(position, view.clone()),
        )?;
    }
    controller.subscribe(Box::new(ConsoleAnnouncer::new(view.clone())));
    log!("Session seed {}", controller.seed());

    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    command_tx.send(SessionCommand::StartGame(config.difficulty))?;
    std::thread::spawn(move || input::read_commands(std::io::stdin().lock(), command_tx));

    let results = TicTacToeSession::run(&mut controller, &settings, &mut command_rx).await;
    print_summary(&results);

    Ok(())
}
