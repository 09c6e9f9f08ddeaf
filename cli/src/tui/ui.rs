use easy_widget_core::model::grid::{ACCENT_RGB, GRID_COLS, GRID_ROWS};
use easy_widget_core::{ControlIcon, GridCell, SharedStore};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;

/// Widget surface color the accent is blended onto.
const BACKGROUND_RGB: u32 = 0x1C1C1E;
/// Foreground used for the faint "no activity" cells.
const PRIMARY_RGB: u32 = 0xFFFFFF;
const CELL_WIDTH: u16 = 2;
const CELL_GAP: u16 = 1;

fn rgb(hex: u32) -> (u8, u8, u8) {
    ((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// `fg` drawn at `opacity` over the widget background.
pub fn blend(fg: u32, opacity: f64) -> Color {
    let (fr, fg_, fb) = rgb(fg);
    let (br, bg, bb) = rgb(BACKGROUND_RGB);
    let mix = |f: u8, b: u8| (b as f64 + (f as f64 - b as f64) * opacity).round() as u8;
    Color::Rgb(mix(fr, br), mix(fg_, bg), mix(fb, bb))
}

pub fn cell_color(cell: &GridCell) -> Option<Color> {
    match cell.day {
        None => None,
        Some(_) if cell.count <= 0 => Some(blend(PRIMARY_RGB, cell.opacity())),
        Some(_) => Some(blend(ACCENT_RGB, cell.opacity())),
    }
}

fn grid_width() -> u16 {
    GRID_COLS as u16 * CELL_WIDTH + (GRID_COLS as u16 - 1) * CELL_GAP
}

pub fn control_text<S: SharedStore>(app: &App<S>) -> String {
    let icon = match app.view.control.icon {
        ControlIcon::Play => "▶",
        ControlIcon::Stop => "■",
    };
    format!("{} {}", icon, app.view.control.label)
}

/// Inner width of the widget: wide enough for the grid and the control label.
pub fn widget_width<S: SharedStore>(app: &App<S>) -> u16 {
    let label = control_text(app).width() as u16 + 4;
    grid_width().max(label)
}

pub fn draw<S: SharedStore>(f: &mut Frame, app: &App<S>) {
    let area = f.area();

    let [outer, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    // Fixed small widget centered on screen: grid, gap, control, borders.
    let width = widget_width(app) + 4;
    let height = GRID_ROWS as u16 * 2 - 1 + 1 + 3 + 2;
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(outer);
    let [widget] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {}-{:02} ", app.entry.stats.year, app.entry.stats.month));
    let inner = block.inner(widget);
    f.render_widget(block, widget);

    let [grid_area, _, control_area] = Layout::vertical([
        Constraint::Length(GRID_ROWS as u16 * 2 - 1),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(inner);

    draw_grid(f, app, grid_area);
    draw_control(f, app, control_area);

    let help = app
        .status
        .clone()
        .unwrap_or_else(|| format!("{} | r: Refresh | Enter: Start/Stop | q: Quit", app.namespace()));
    let footer_text = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer_text, footer);
}

fn draw_grid<S: SharedStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let [area] = Layout::horizontal([Constraint::Length(grid_width())])
        .flex(Flex::Center)
        .areas(area);

    let mut lines = Vec::with_capacity(GRID_ROWS * 2);
    for (i, row) in app.view.grid.rows().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        let mut spans = Vec::with_capacity(GRID_COLS * 2);
        for (j, cell) in row.iter().enumerate() {
            if j > 0 {
                spans.push(Span::raw(" ".repeat(CELL_GAP as usize)));
            }
            let fill = " ".repeat(CELL_WIDTH as usize);
            match cell_color(cell) {
                Some(color) => spans.push(Span::styled(fill, Style::default().bg(color))),
                None => spans.push(Span::raw(fill)),
            }
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_control<S: SharedStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let control = &app.view.control;
    let (r, g, b) = rgb(control.tint);

    let text = Line::from(vec![Span::styled(
        control_text(app),
        Style::default()
            .fg(Color::Rgb(r, g, b))
            .add_modifier(Modifier::BOLD),
    )]);
    let button = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(blend(PRIMARY_RGB, 0.25))),
    );
    f.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(ACCENT_RGB, 1.0), Color::Rgb(0x10, 0xB9, 0x81));
        assert_eq!(blend(ACCENT_RGB, 0.0), Color::Rgb(0x1C, 0x1C, 0x1E));
    }

    #[test]
    fn test_blank_cells_have_no_color() {
        assert_eq!(cell_color(&GridCell::blank(0, 0)), None);
        assert!(cell_color(&GridCell::day(0, 0, 1, 0)).is_some());
        assert_ne!(
            cell_color(&GridCell::day(0, 0, 1, 0)),
            cell_color(&GridCell::day(0, 0, 1, 1))
        );
    }

    #[test]
    fn test_grid_width() {
        assert_eq!(grid_width(), 20);
    }
}
