use burrow_dash::app::{App, Flow};
use burrow_dash::core::{GameConfig, GlyphSet};
use burrow_dash::input;
use burrow_dash::runner::GameEvent;
use burrow_dash::scheduler::Scheduler;
use burrow_dash::ui;
use burrow_dash::utils::persistence::HighScoreFile;
use burrow_dash::utils::{logging, version_line};
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

/// Parsed command line.
#[derive(Default)]
struct Options {
    seed: Option<u64>,
    config: Option<PathBuf>,
    ascii: bool,
}

fn print_help() {
    println!("Burrow Dash - Terminal Endless Runner\n");
    println!("Usage: burrow-dash [options]\n");
    println!("Options:");
    println!("  --seed <n>       Seed obstacle generation");
    println!("  --config <path>  Settings file (default: burrowdash.json)");
    println!("  --ascii          Draw with ASCII instead of emoji");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'burrow-dash --help' for usage.");
    std::process::exit(1);
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options::default();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => match iter.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => options.seed = Some(seed),
                _ => usage_error("--seed needs a non-negative integer"),
            },
            "--config" => match iter.next() {
                Some(path) => options.config = Some(PathBuf::from(path)),
                None => usage_error("--config needs a path"),
            },
            "--ascii" => options.ascii = true,
            other => usage_error(&format!("Unknown option: {}", other)),
        }
    }
    options
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    let (mut config, problems) = GameConfig::load(options.config.as_deref());
    if options.ascii {
        config.glyphs = GlyphSet::Ascii;
    }
    logging::init(config.log_file.as_deref())?;
    for problem in &problems {
        log::warn!("config: {}", problem);
    }

    let seed = options.seed.unwrap_or_else(rand::random);
    log::info!("{} seed={} config={:?}", version_line(), seed, config);

    let store = HighScoreFile::new(&config.high_score_file);
    let mut app = App::new(config, store, StdRng::seed_from_u64(seed));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B, R, S>(terminal: &mut Terminal<B>, app: &mut App<R, S>) -> io::Result<()>
where
    B: ratatui::backend::Backend,
    R: rand::Rng,
    S: burrow_dash::utils::persistence::HighScoreStore,
{
    let (tx, rx) = mpsc::channel();
    let scheduler = Scheduler::spawn(tx.clone())?;
    let _reader = input::spawn_reader(tx.clone())?;

    let size = terminal.size()?;
    tx.send(GameEvent::Resize {
        cols: size.width,
        rows: size.height,
    })
    .map_err(|e| io::Error::new(io::ErrorKind::BrokenPipe, e))?;
    drop(tx);

    app.start(&scheduler)?;

    // The reader thread blocks on terminal input and is left behind on exit
    while let Ok(event) = rx.recv() {
        let now = Instant::now();
        if app.handle(event, now, &scheduler)? == Flow::Exit {
            break;
        }
        terminal.draw(|frame| ui::draw(frame, &app.game, now))?;
    }

    Ok(())
}
