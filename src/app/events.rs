use std::path::{Path, PathBuf};

use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::art;
use crate::palette::{self, Color, Denylist, Theme};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    ExtractStarted {
        generation: u64,
    },
    ExtractFinished {
        generation: u64,
        outcome: Result<Extraction, String>,
    },
}

/// Everything one pipeline run produced: the quantized palette (without
/// the average) and the derived theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub colors: Vec<Color>,
    pub theme: Theme,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Run decode, quantization, averaging and role selection off the UI
/// task. The generation number lets the state drop results that a newer
/// request superseded before they arrived.
pub fn start_extract_task(
    tx: mpsc::Sender<AppEvent>,
    path: PathBuf,
    count: u8,
    denylist: Denylist,
    generation: u64,
) {
    tokio::spawn(async move {
        let _ = tx.send(AppEvent::ExtractStarted { generation }).await;
        let outcome = tokio::task::spawn_blocking(move || {
            extract_from_path(&path, count, &denylist).map_err(|err| format!("{err:#}"))
        })
        .await
        .unwrap_or_else(|join_err| Err(format!("extraction task failed: {join_err}")));
        let _ = tx
            .send(AppEvent::ExtractFinished { generation, outcome })
            .await;
    });
}

/// The full pipeline for one image: decode, quantize, average, select.
pub fn extract_from_path(path: &Path, count: u8, denylist: &Denylist) -> Result<Extraction> {
    let image = art::load_image(path)?;
    let colors = art::distinct_colors(&image, usize::from(count));
    let average = art::average_color(&image);
    let theme = palette::extract_theme(&colors, average, denylist)?;
    Ok(Extraction { colors, theme })
}
