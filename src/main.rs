use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use snake::build_info;
use snake::core::constants::*;
use snake::input::{map_key, InputResult};
use snake::ui::draw_ui;
use snake::utils::persistence::resolve_data_dir;
use snake::{GameConfig, ScoreBackend, ScoreStore, Session};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(
    name = "snake",
    version,
    long_version = build_info::LONG_VERSION,
    about = "Grid snake for the terminal"
)]
struct Cli {
    /// Side length of the square board, in cells
    #[arg(long, default_value_t = GRID_SIZE,
          value_parser = clap::value_parser!(i16).range(MIN_GRID_SIZE as i64..=MAX_GRID_SIZE as i64))]
    grid_size: i16,

    /// Milliseconds between snake moves
    #[arg(long, default_value_t = TICK_INTERVAL_MS,
          value_parser = clap::value_parser!(u64).range(MIN_TICK_MS..=MAX_TICK_MS))]
    tick_ms: u64,

    /// Points awarded for each food eaten
    #[arg(long, default_value_t = FOOD_REWARD,
          value_parser = clap::value_parser!(u32).range(MIN_FOOD_REWARD as i64..=MAX_FOOD_REWARD as i64))]
    food_reward: u32,

    /// Directory for the high score file and log (default: ~/.snake)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log file path (default: <data-dir>/snake.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity: off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Forget the stored high score before playing
    #[arg(long)]
    reset_high_score: bool,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            grid_size: self.grid_size,
            tick_ms: self.tick_ms,
            food_reward: self.food_reward,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let config = cli.game_config();
    config.validate()?;

    // Storage and logging problems degrade the session, they never stop it
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    if let Err(e) = init_logging(&cli, data_dir.as_deref().ok()) {
        eprintln!("Logging disabled: {}", e);
    }
    info!("Starting snake {}", build_info::LONG_VERSION);

    let mut session = Session::new(config, ScoreBackend::open(data_dir));
    if cli.reset_high_score {
        session.clear_high_score();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("Exiting on terminal error: {}", e);
    }
    result?;

    let best = session.high_score().best();
    info!("Exiting, high score {}", best);
    if session.view().high_score_saved {
        println!("High score: {}", best);
    } else {
        println!("High score: {} (not saved)", best);
    }
    Ok(())
}

/// Route logs to a file; the terminal belongs to the game. Without an
/// explicit log file or a data directory there is nowhere to write.
fn init_logging(cli: &Cli, data_dir: Option<&Path>) -> io::Result<()> {
    let path = match (&cli.log_file, data_dir) {
        (Some(path), _) => path.clone(),
        (None, Some(dir)) => dir.join(LOG_FILE),
        (None, None) => {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no data directory for the log file",
            ))
        }
    };
    WriteLogger::init(cli.log_level, Config::default(), File::create(path)?)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Main loop: draw, poll input, then run any ticks that came due.
fn run<S: ScoreStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session<S>,
) -> io::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, &session.view()))?;

        let timeout = session
            .scheduler()
            .time_to_next_ms()
            .map_or(INPUT_POLL_MS, |ms| ms.min(INPUT_POLL_MS));
        if event::poll(Duration::from_millis(timeout))? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    InputResult::Command(command) => {
                        session.handle(command);
                    }
                    InputResult::Quit => return Ok(()),
                    InputResult::Continue => {}
                }
            }
        }

        // Advance in whole milliseconds and carry the remainder forward
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(dt_ms);
        session.advance(dt_ms);
    }
}
