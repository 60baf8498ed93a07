use std::io;
use std::io::Write;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor;
use crossterm::event;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event as CrossTermEvent;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifeview::app::App;
use lifeview::app::Control;
use lifeview::camera::Camera;
use lifeview::config::Config;
use lifeview::io::STATUS_ROWS;
use lifeview::io::TerminalInput;
use lifeview::io::viewport;
use lifeview::view::ViewState;

/// Raw mode, alternate screen and mouse capture for as long as it lives
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;

        // from here on, dropping the guard undoes whatever got set up
        let guard = Self;

        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )
        .context("Failed to set up the terminal")?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // stdout belongs to the grid, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let (cols, rows) = terminal::size().context("Failed to get the terminal size")?;
    let (width, height) = viewport(cols, rows);

    let view = ViewState::new(width, height)
        .with_base_cell_size(config.cell_size)
        .with_zoom_speed(config.zoom_speed);
    let mut app = App::new(config.pattern.cells(), view).with_running(config.run);

    info!(pattern = %config.pattern, cols, rows, "starting");

    let _guard = TerminalGuard::enter()?;

    run(&mut app, config.frame_time(), cols, rows)
}

fn run(app: &mut App, frame_time: Duration, mut cols: u16, mut rows: u16) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    let mut input = TerminalInput::new();
    let mut cam = Camera::for_terminal(cols, rows.saturating_sub(STATUS_ROWS));

    'main: loop {
        let t = Instant::now();

        // Handle everything that arrived since the last frame
        while event::poll(Duration::ZERO).context("Failed to poll events")? {
            let event = event::read().context("Failed to read event")?;

            if let CrossTermEvent::Resize(new_cols, new_rows) = event {
                (cols, rows) = (new_cols, new_rows);
                cam = Camera::for_terminal(cols, rows.saturating_sub(STATUS_ROWS));

                execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
            }

            let Some(event) = input.convert(event) else {
                continue;
            };

            if app.handle(event) == Control::Exit {
                break 'main;
            }
        }

        app.tick();

        let drawn = app.draw(&mut cam);
        let status: String = status_line(app, drawn).chars().take(cols as usize).collect();
        present(&mut stdout, cam.render(), &status, rows.saturating_sub(STATUS_ROWS))
            .context("Failed to draw frame")?;

        thread::sleep(frame_time.saturating_sub(t.elapsed()));
    }

    info!(generation = app.life().generation(), "exiting");

    Ok(())
}

fn status_line(app: &App, drawn: bool) -> String {
    let life = app.life();
    let view = app.view();

    let state = if app.is_running() { "running" } else { "paused" };
    let zoom = if drawn {
        format!("zoom {:.2}", view.zoom())
    } else {
        format!("zoom {:.2} (too far out to draw)", view.zoom())
    };

    format!(
        " gen {} | pop {} | {state} | {zoom} | space run  n step  c clear  r reset  g grid  0 home  q quit",
        life.generation(),
        life.population(),
    )
}

fn present(stdout: &mut impl Write, frame: &str, status: &str, status_row: u16) -> io::Result<()> {
    for (i, line) in frame.lines().enumerate() {
        queue!(stdout, cursor::MoveTo(0, i as u16), style::Print(line))?;
    }

    queue!(
        stdout,
        cursor::MoveTo(0, status_row),
        terminal::Clear(terminal::ClearType::CurrentLine),
        style::Print(status)
    )?;

    stdout.flush()
}
