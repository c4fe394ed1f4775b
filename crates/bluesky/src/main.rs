use std::path::PathBuf;
use std::time::Duration;

use bluesky_analog::AnalogLayer;
use bluesky_config::Config;
use chrono::{Local, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{error, info, warn};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use crate::host::TerminalHost;

mod host;
mod logging;
mod surface;

/// Terminal rows reserved around the face: spacing, date and help line.
const CHROME_ROWS: u16 = 4;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config_path = Config::default_path().ok();
    let config = match &config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };
    logging::init_logging(config.logging.filter.as_deref(), &config.log_path())?;
    match &config_path {
        Some(path) if !path.exists() => match config.save_to(path) {
            Ok(()) => info!("wrote default config to {}", path.display()),
            Err(err) => warn!("could not seed config: {err}"),
        },
        Some(path) => info!("using config {}", path.display()),
        None => info!("no config directory, using defaults"),
    }

    let terminal = ratatui::init();
    let result = App::new(config, config_path).run(terminal);
    ratatui::restore();
    result
}

/// Side of the square face, in pixels, that fits a terminal of this size.
///
/// Each cell holds two pixels stacked vertically.
fn face_side(width: u16, height: u16) -> i32 {
    let rows = height.saturating_sub(CHROME_ROWS);
    i32::from(width).min(i32::from(rows) * 2).max(1)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Where `r` reloads the config from.
    config_path: Option<PathBuf>,
    host: TerminalHost,
    /// Update period index of the last time handed to the clock.
    last_tick: Option<i64>,
    /// Transient message shown in place of the help line.
    status: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            running: false,
            config,
            config_path,
            host: TerminalHost::new(),
            last_tick: None,
            status: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        let side = face_side(size.width, size.height);
        let mut clock = AnalogLayer::with_palette(
            &mut self.host,
            bluesky_core::Rect::new(0, 0, side, side),
            self.config.palette.clone(),
        )?;

        self.running = true;
        let result = self.event_loop(&mut terminal, &mut clock);
        clock.destroy(&mut self.host);
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        clock: &mut AnalogLayer,
    ) -> color_eyre::Result<()> {
        while self.running {
            self.tick(clock);
            terminal.draw(|frame| self.render(frame, clock))?;
            self.handle_crossterm_events(clock)?;
        }
        Ok(())
    }

    /// Hand the clock a new time when the update period rolls over.
    fn tick(&mut self, clock: &mut AnalogLayer) {
        let now = Utc::now();
        let period = now
            .timestamp()
            .div_euclid(self.config.display.update_interval.seconds());
        if self.last_tick != Some(period) {
            self.last_tick = Some(period);
            clock.set_time(&mut self.host, &Local, now);
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame, clock: &AnalogLayer) {
        let area = frame.area();
        let side = face_side(area.width, area.height);
        let face = bluesky_core::Rect::new(0, 0, side, side);
        if self.host.frame(clock.layer()) != Some(face) {
            self.host.set_frame(clock.layer(), face);
        }
        self.host
            .redraw(clock.layer(), |bounds, surface| clock.render(bounds, surface));

        let rows = u16::try_from((side + 1) / 2).unwrap_or(u16::MAX);
        let chunks = Layout::vertical([
            Constraint::Fill(1),       // Top padding
            Constraint::Length(rows),  // Clock face
            Constraint::Length(1),     // Spacing
            Constraint::Length(1),     // Date
            Constraint::Fill(1),       // Bottom padding
            Constraint::Length(1),     // Help text
        ])
        .split(area);

        let face_area = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(u16::try_from(side).unwrap_or(u16::MAX)),
            Constraint::Fill(1),
        ])
        .split(chunks[1])[1];
        frame.render_widget(Paragraph::new(self.host.surface().to_lines()), face_area);

        let accent = Color::from(self.config.palette.sky_stroke);
        if let Some(caption) = self.date_caption(clock) {
            let date = Paragraph::new(caption)
                .style(Style::new().fg(accent))
                .alignment(Alignment::Center);
            frame.render_widget(date, chunks[3]);
        }

        let help = match &self.status {
            Some(message) => Line::from(message.clone().red()).centered(),
            None => Line::from(vec![
                "q".bold().fg(accent),
                " quit  ".dark_gray(),
                "d".bold().fg(accent),
                " toggle date  ".dark_gray(),
                "s".bold().fg(accent),
                " toggle seconds  ".dark_gray(),
                "r".bold().fg(accent),
                " reload config".dark_gray(),
            ])
            .centered(),
        };
        frame.render_widget(help, chunks[5]);
    }

    /// Date of the time the face shows, when the caption is enabled.
    fn date_caption(&self, clock: &AnalogLayer) -> Option<String> {
        if !self.config.display.show_date {
            return None;
        }
        let date = clock.wall_time().date()?;
        Some(date.format("%A, %B %d, %Y").to_string())
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so the clock keeps ticking.
    fn handle_crossterm_events(&mut self, clock: &mut AnalogLayer) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(self.config.display.poll_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key, clock),
                Event::Mouse(_) => {}
                // The next render picks up the new size.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent, clock: &mut AnalogLayer) {
        self.status = None;
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('d')) => self.toggle_date(),
            (_, KeyCode::Char('s')) => self.toggle_update_interval(),
            (_, KeyCode::Char('r')) => self.reload_config(clock),
            _ => {}
        }
    }

    fn toggle_date(&mut self) {
        self.config.display.show_date = !self.config.display.show_date;
    }

    /// Switch between per-second and per-minute updates.
    fn toggle_update_interval(&mut self) {
        let display = &mut self.config.display;
        display.update_interval = display.update_interval.toggle();
        self.last_tick = None;
    }

    /// Re-read the config file and apply palette and display settings.
    fn reload_config(&mut self, clock: &mut AnalogLayer) {
        let Some(path) = &self.config_path else {
            self.status = Some("no config directory".to_string());
            return;
        };
        match Config::load_from(path) {
            Ok(config) => {
                clock.set_palette(&mut self.host, config.palette.clone());
                self.config.palette = config.palette;
                self.config.display = config.display;
                self.last_tick = None;
                info!("reloaded config from {}", path.display());
            }
            Err(err) => {
                error!("reload failed: {err}");
                // The help line is a single row.
                let message = err.to_string();
                self.status = message.lines().next().map(str::to_string);
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
