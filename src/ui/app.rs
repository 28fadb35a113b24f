//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::dataset::Dataset;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the maintenance table and its statistics.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Where the maintenance table was loaded from (for display).
    data_path: PathBuf,

    /// The loaded table, shared read-only with every display component.
    dataset: Arc<Dataset>,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// UI configuration.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(data_path: PathBuf, dataset: Arc<Dataset>, ui_config: UIConfig) -> Self {
        Self {
            start_time: Instant::now(),
            data_path,
            dataset,
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    /// Build the dashboard screen over the loaded dataset.
    fn open_dashboard(&mut self) {
        let state = DashboardState::new(
            self.data_path.clone(),
            self.dataset.clone(),
            self.start_time,
            self.ui_config.clone(),
        );
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Update the state based on the current screen
        match &mut app.current_screen {
            Screen::Splash => {}
            Screen::Dashboard(state) => {
                // One linear render pass: drain events, recompute all blocks
                state.update();
            }
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        if key.code != KeyCode::Esc && key.code != KeyCode::Char('q') {
                            app.open_dashboard();
                        }
                    }
                    Screen::Dashboard(state) => match key.code {
                        // The threshold keys are the slider of the original
                        // dashboard; each change refilters synchronously.
                        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
                            state.raise_threshold();
                        }
                        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => {
                            state.lower_threshold();
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
