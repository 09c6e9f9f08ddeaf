use easy_widget_core::WidgetView;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CellRow {
    #[tabled(rename = "Row")]
    row: usize,
    #[tabled(rename = "Col")]
    col: usize,
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Count")]
    count: String,
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "Opacity")]
    opacity: String,
}

pub fn grid_table(view: &WidgetView) -> String {
    let rows: Vec<CellRow> = view
        .grid
        .cells
        .iter()
        .map(|cell| match cell.day {
            Some(day) => CellRow {
                row: cell.row,
                col: cell.col,
                day: day.to_string(),
                count: cell.count.to_string(),
                tier: cell.tier.to_string(),
                opacity: format!("{:.2}", cell.opacity()),
            },
            None => CellRow {
                row: cell.row,
                col: cell.col,
                day: "-".to_string(),
                count: "-".to_string(),
                tier: "-".to_string(),
                opacity: format!("{:.2}", cell.opacity()),
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

pub fn show_grid(view: &WidgetView, year: i32, month: u32) {
    println!(
        "\x1b[1;36m{}-{:02}\x1b[0m ({} days, day 1 in column {})",
        year, month, view.geometry.days_in_month, view.geometry.first_weekday_offset
    );
    println!("{}", grid_table(view));
    if !view.grid.truncated.is_empty() {
        println!("Not shown (grid full): {:?}", view.grid.truncated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone, Weekday};
    use easy_widget_core::{Entry, MonthlyStats};

    #[test]
    fn test_table_lists_every_cell() {
        let mut stats = MonthlyStats::new(2024, 1);
        stats.counts.insert(1, 3);
        let entry = Entry::new(
            Local.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap(),
            stats,
            false,
            String::new(),
        );
        let view = WidgetView::from_entry(&entry, Weekday::Sun);

        let table = grid_table(&view);
        assert!(table.contains("Opacity"));
        assert!(table.contains("0.85"));
        // Header plus 35 cells.
        assert_eq!(table.lines().filter(|l| l.contains('│')).count(), 36);
    }
}
