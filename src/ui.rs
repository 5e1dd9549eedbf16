pub mod swatches;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppMode, AppState},
    cli::Cli,
    palette,
};

pub fn render(frame: &mut Frame, state: &AppState, cli: &Cli) {
    let area = frame.area();

    if area.width < 48 || area.height < 16 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 48x16.")
            .block(Block::default().borders(Borders::ALL).title("artwork-theme"));
        frame.render_widget(warning, area);
        return;
    }

    if let Some(extraction) = &state.extraction {
        frame.render_widget(
            Block::default().style(Style::default().bg(tui_color(extraction.theme.background))),
            area,
        );
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(6)])
        .split(area);

    render_header(frame, chunks[0], state, cli);

    match state.mode {
        AppMode::Error => render_error(frame, chunks[1], state),
        _ => {
            if let Some(extraction) = &state.extraction {
                swatches::render(frame, chunks[1], extraction);
            }
        }
    }
}

/// Map a palette color to the terminal's truecolor representation.
#[must_use]
pub fn tui_color(color: palette::Color) -> Color {
    let (r, g, b) = color.to_rgb8();
    Color::Rgb(r, g, b)
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, cli: &Cli) {
    let image = cli.image.display();
    let title = format!(
        "{image}  ({} colors)  q quit · r re-extract · +/- colors",
        state.requested_colors
    );
    let status = state
        .last_error
        .as_deref()
        .map_or_else(|| state.status.clone(), |err| format!("error: {err}"));

    let style = state.extraction.as_ref().map_or_else(Style::default, |extraction| {
        Style::default()
            .fg(tui_color(extraction.theme.primary))
            .bg(tui_color(extraction.theme.background))
    });

    let header = Paragraph::new(vec![
        Line::from(title),
        Line::from(status),
    ])
    .style(style.add_modifier(Modifier::BOLD));
    frame.render_widget(header, area);
}

fn render_error(frame: &mut Frame, area: Rect, state: &AppState) {
    let message = state
        .last_error
        .clone()
        .unwrap_or_else(|| "extraction failed".to_string());
    let error = Paragraph::new(message)
        .style(Style::default().fg(Color::LightRed))
        .block(Block::default().borders(Borders::ALL).title("error"));
    frame.render_widget(error, area);
}
