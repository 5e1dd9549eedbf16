//! The swatchboard: every extracted color plus the average in a grid,
//! then the four assigned roles in a final row. Each cell carries the
//! measurements the selection scored it with.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use super::tui_color;
use crate::{
    app::events::Extraction,
    palette::{Color, Theme, ThemeRole, metrics},
};

const COLUMNS: usize = 4;

/// One labeled cell of the swatchboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub color: Color,
    pub tags: Vec<&'static str>,
}

/// Grid rows: the extracted palette with the average appended, chunked
/// four per row, then the roles row in assignment order.
#[must_use]
pub fn swatch_rows(extraction: &Extraction) -> Vec<Vec<Swatch>> {
    let theme = &extraction.theme;

    let palette_cells: Vec<Swatch> = extraction
        .colors
        .iter()
        .copied()
        .chain([theme.average])
        .map(|color| Swatch {
            color,
            tags: diagnostic_tags(color, theme),
        })
        .collect();

    let mut rows: Vec<Vec<Swatch>> = palette_cells
        .chunks(COLUMNS)
        .map(<[Swatch]>::to_vec)
        .collect();

    rows.push(
        ThemeRole::ALL
            .iter()
            .map(|&role| Swatch {
                color: theme.role(role),
                tags: vec![role.label()],
            })
            .collect(),
    );

    rows
}

fn diagnostic_tags(color: Color, theme: &Theme) -> Vec<&'static str> {
    let mut tags = Vec::new();
    if color == theme.average {
        tags.push("average");
    }
    if color == theme.lightest {
        tags.push("lightest");
    }
    tags
}

pub fn render(frame: &mut Frame, area: Rect, extraction: &Extraction) {
    let rows = swatch_rows(extraction);
    let background = extraction.theme.background;

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()])
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);

        for (swatch, cell_area) in row.iter().zip(cell_areas.iter()) {
            render_cell(frame, *cell_area, swatch, background);
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, swatch: &Swatch, background: Color) {
    let color = swatch.color;
    let (hue, saturation, brightness) = color.hsb();

    let lines = vec![
        Line::from(color.hex()),
        Line::from(format!("sat {saturation:.2}")),
        Line::from(format!("bri {brightness:.2}")),
        Line::from(format!("lum {:.2}", metrics::luminance(color))),
        Line::from(swatch.tags.join(" ")),
        Line::from(format!(
            "B {:.2} hue {hue:.2}",
            metrics::contrast_ratio(color, background)
        )),
    ];

    let cell = Paragraph::new(lines).style(
        Style::default()
            .bg(tui_color(color))
            .fg(tui_color(label_color(color))),
    );
    frame.render_widget(cell, area);
}

/// Black or white, whichever reads better on `color`.
fn label_color(color: Color) -> Color {
    if metrics::contrast_ratio(color, Color::WHITE) > metrics::contrast_ratio(color, Color::BLACK) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}
