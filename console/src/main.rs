mod config;
mod game_loop;
mod input;
mod render;

use clap::{Parser, ValueEnum};
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{BoardSize, GameSettings, PlayerType, TicTacToeGameState};
use tictactoe_common::{log, logger};

use config::get_config_manager;
use game_loop::{GameEnd, run_game};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerArg {
    User,
    Computer,
}

impl From<PlayerArg> for PlayerType {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::User => PlayerType::User,
            PlayerArg::Computer => PlayerType::Computer,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    /// Config file; defaults to tictactoe_console_config.yaml next to the executable
    #[arg(long)]
    config: Option<String>,
    #[arg(long, value_enum)]
    player_x: Option<PlayerArg>,
    #[arg(long, value_enum)]
    player_o: Option<PlayerArg>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(3..=5))]
    board_size: Option<u8>,
    /// Computer players search with minimax (3x3 only)
    #[arg(long)]
    use_ai: bool,
    /// Seed for reproducible random moves
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Disable logging
    #[arg(long)]
    quiet: bool,
}

impl Args {
    fn apply_to(&self, mut settings: GameSettings) -> Result<GameSettings, String> {
        if let Some(player_x) = self.player_x {
            settings.player_x = player_x.into();
        }
        if let Some(player_o) = self.player_o {
            settings.player_o = player_o.into();
        }
        if let Some(size) = self.board_size {
            settings.board_size = BoardSize::try_from(usize::from(size)).map_err(String::from)?;
        }
        if self.use_ai {
            settings.use_ai = true;
        }
        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if !args.quiet {
        let prefix = if args.use_log_prefix {
            Some("Console".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config = get_config_manager(args.config.as_deref()).get_config()?;
    let settings = args.apply_to(config.game)?;

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Using seed {}", rng.seed());

    let mut state = TicTacToeGameState::new(settings);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let end = run_game(
        &mut state,
        &mut rng,
        &config.delays,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;

    if end == GameEnd::Quit {
        log!("Game abandoned");
    }

    Ok(())
}
