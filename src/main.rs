use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use village::app::App;
use village::cli::{Cli, topic_listing};
use village::config::{Config, load_config};

const TICK_RATE: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    if cli.list {
        println!("{}", topic_listing(cli.json)?);
        return Ok(());
    }

    village::logging::init()?;

    // Config errors are reported before the terminal is taken over
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    let terminal = ratatui::init();
    let result = run(terminal, &cli, &config);

    // Restore terminal before any error is printed
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, cli: &Cli, config: &Config) -> Result<()> {
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let mut app = App::new(config);
    if let Some(topic) = cli.topic {
        app.nav.jump_to_topic(topic as usize);
    }
    if cli.overview {
        app.nav.enter_overview();
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK_RATE)? {
            app.handle_event(event::read()?);
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
