use std::io::Write;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tokio::sync::RwLock;
use tokio::sync::broadcast::error::RecvError;

use basketboard::logging;
use basketboard::manager::GameManager;
use basketboard::repl::readline;
use basketboard::service::ScoreboardService;
use basketboard::store::{BoardConfig, PresetStore};
use basketboard::GameEvent;

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();

    let store = PresetStore::open().map_err(|e| e.to_string())?;
    let mut config = BoardConfig::load().unwrap_or_default();

    let mut manager =
        GameManager::new(store.initial_match(&config)).map_err(|e| e.to_string())?;
    if config.pregame_countdown != "00:00"
        && manager.set_pregame_countdown(&config.pregame_countdown).is_err()
    {
        eprintln!("ignoring invalid pregame countdown in config");
    }

    let mut service = ScoreboardService::new(manager);

    // Alert view: prints sirens as they fire.
    let mut alerts = service.subscribe();
    tokio::spawn(async move {
        loop {
            match alerts.recv().await {
                Ok(GameEvent::Siren) => println!("\n*** SIREN ***"),
                Ok(GameEvent::Updated) => {}
                Err(RecvError::Lagged(_)) => {}
                Err(RecvError::Closed) => break,
            }
        }
    });

    service.start();
    let manager = service.manager();

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &manager, &store, &mut config).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    service.stop();
    Ok(())
}

#[derive(Parser)]
#[command(version, about = "scoreboard operator console")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Local,
    Visit,
}

#[derive(Subcommand)]
enum Commands {
    /// Start or pause the game clock
    Clock,
    /// Reset the clock to the quarter length
    Reset,
    /// Set the clock to an explicit MM:SS value
    Set { time: String },
    /// Add points (negative to correct), clamped at zero
    Score { side: Side, points: i32 },
    /// Add fouls (negative to correct), clamped at zero
    Foul {
        side: Side,
        #[arg(default_value_t = 1)]
        delta: i32,
    },
    /// Advance to the next period
    Period,
    /// Configure the pregame countdown (MM:SS)
    Pregame { time: String },
    /// Start the pregame countdown
    Go,
    /// Configure a new match from preset indices
    New {
        local: usize,
        visit: usize,
        game_type: usize,
    },
    /// List stored team and game-type presets
    Presets,
    /// Print the current board state
    Show,
    Exit,
}

async fn respond(
    line: &str,
    manager: &Arc<RwLock<GameManager>>,
    store: &PresetStore,
    config: &mut BoardConfig,
) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "basketboard".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Clock) => {
            manager.write().await.start_pause_clock();
        }
        Some(Commands::Reset) => {
            manager.write().await.reset_clock();
        }
        Some(Commands::Set { time }) => {
            manager
                .write()
                .await
                .set_clock(time)
                .map_err(|e| e.to_string())?;
        }
        Some(Commands::Score { side, points }) => {
            let mut m = manager.write().await;
            match side {
                Side::Local => m.score_local(*points),
                Side::Visit => m.score_visit(*points),
            }
        }
        Some(Commands::Foul { side, delta }) => {
            let mut m = manager.write().await;
            match side {
                Side::Local => m.foul_local(*delta),
                Side::Visit => m.foul_visit(*delta),
            }
        }
        Some(Commands::Period) => {
            manager.write().await.advance_period();
        }
        Some(Commands::Pregame { time }) => {
            manager
                .write()
                .await
                .set_pregame_countdown(time)
                .map_err(|e| e.to_string())?;
            config.pregame_countdown = time.clone();
            if let Err(e) = config.save() {
                eprintln!("failed to save config: {e}");
            }
        }
        Some(Commands::Go) => {
            manager.write().await.start_pregame();
        }
        Some(Commands::New {
            local,
            visit,
            game_type,
        }) => {
            let game = store.build_match(*local, *visit, *game_type);
            manager
                .write()
                .await
                .configure_match(game)
                .map_err(|e| e.to_string())?;
            config.last_selected_local = *local;
            config.last_selected_visit = *visit;
            config.last_selected_game_type = *game_type;
            if let Err(e) = config.save() {
                eprintln!("failed to save config: {e}");
            }
        }
        Some(Commands::Presets) => {
            for (i, team) in store.teams().iter().enumerate() {
                println!("team {i}: {} ({})", team.name, team.color_primary);
            }
            for (i, gt) in store.game_types().iter().enumerate() {
                println!(
                    "game type {i}: {} ({}x{})",
                    gt.name, gt.quarters, gt.time_per_quarter
                );
            }
        }
        Some(Commands::Show) => {
            let snapshot = manager.read().await.snapshot();
            println!("{snapshot}");
            if snapshot.pregame_running {
                println!("pregame: {}", snapshot.pregame_display);
            }
        }
        Some(Commands::Exit) => {
            write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
            std::io::stdout().flush().map_err(|e| e.to_string())?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
