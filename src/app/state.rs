use crossterm::event::{Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, Extraction, start_extract_task},
    cli::Cli,
    palette::Denylist,
};

const MIN_COLORS: u8 = 2;
const MAX_COLORS: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub status: String,
    pub last_error: Option<String>,
    pub extraction: Option<Extraction>,
    pub requested_colors: u8,
    pub denylist: Denylist,
    pub extract_in_flight: bool,
    generation: u64,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        Self {
            mode: AppMode::Loading,
            running: true,
            status: "Loading artwork...".to_string(),
            last_error: None,
            extraction: None,
            requested_colors: cli.colors,
            denylist: cli.denylist(),
            extract_in_flight: false,
            generation: 0,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>, cli: &Cli) {
        match event {
            AppEvent::Bootstrap => self.start_extract(tx, cli),
            AppEvent::Input(event) => self.handle_input(&event, tx, cli),
            AppEvent::ExtractStarted { generation } => {
                if generation == self.generation {
                    self.extract_in_flight = true;
                    self.status = format!("Extracting {} colors...", self.requested_colors);
                }
            }
            AppEvent::ExtractFinished { generation, outcome } => {
                // A newer request supersedes this result.
                if generation != self.generation {
                    return;
                }
                self.extract_in_flight = false;
                match outcome {
                    Ok(extraction) => {
                        self.status = if extraction.theme.has_distinct_roles() {
                            format!("{} colors extracted", extraction.colors.len())
                        } else {
                            format!(
                                "{} colors extracted (too few for distinct roles)",
                                extraction.colors.len()
                            )
                        };
                        self.extraction = Some(extraction);
                        self.last_error = None;
                        self.mode = AppMode::Ready;
                    }
                    Err(message) => {
                        self.last_error = Some(message);
                        // Keep showing the previous swatches if we had any.
                        if self.extraction.is_none() {
                            self.mode = AppMode::Error;
                        }
                    }
                }
            }
        }
    }

    fn handle_input(&mut self, event: &Event, tx: &mpsc::Sender<AppEvent>, cli: &Cli) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.mode = AppMode::Quit,
            KeyCode::Char('r') => self.start_extract(tx, cli),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if self.requested_colors < MAX_COLORS {
                    self.requested_colors += 1;
                    self.start_extract(tx, cli);
                }
            }
            KeyCode::Char('-') => {
                if self.requested_colors > MIN_COLORS {
                    self.requested_colors -= 1;
                    self.start_extract(tx, cli);
                }
            }
            _ => {}
        }
    }

    fn start_extract(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) {
        self.generation += 1;
        start_extract_task(
            tx.clone(),
            cli.image.clone(),
            self.requested_colors,
            self.denylist.clone(),
            self.generation,
        );
    }
}
