//! Dashboard table components
//!
//! Renders the top risky machines, the threshold-filtered view, and the full
//! maintenance schedule.

use super::super::state::DashboardState;
use crate::ui::dashboard::utils::risk_color;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

/// Render the tables section: top risky | filtered | full schedule.
pub fn render_tables_section(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let table_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(26),
            Constraint::Percentage(34),
            Constraint::Percentage(40),
        ])
        .split(area);

    render_top_risky(f, table_chunks[0], state);
    render_filtered(f, table_chunks[1], state);
    render_schedule(f, table_chunks[2], state);
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|t| {
                Cell::from(*t).style(
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>(),
    )
}

/// Top-N machines by failure risk, descending.
fn render_top_risky(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let rows: Vec<Row> = state
        .top_risky
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.product_id.clone()),
                Cell::from(format!("{:.2}", record.failure_risk))
                    .style(Style::default().fg(risk_color(record.failure_risk))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Percentage(60), Constraint::Percentage(40)],
    )
    .header(header_row(&["Product", "Risk"]))
    .block(
        Block::default()
            .title(format!("TOP {} RISKY MACHINES", state.top_risky.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(table, area);
}

/// Machines at or above the adjustable threshold.
fn render_filtered(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let rows: Vec<Row> = state
        .filtered
        .rows
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.product_id.clone()),
                Cell::from(format!("{:.2}", record.failure_risk))
                    .style(Style::default().fg(risk_color(record.failure_risk))),
                Cell::from(record.scheduled_at.clone())
                    .style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(20),
            Constraint::Percentage(45),
        ],
    )
    .header(header_row(&["Product", "Risk", "Scheduled"]))
    .block(
        Block::default()
            .title(state.filtered.summary_line())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(table, area);
}

/// The raw maintenance schedule, all columns passed through.
fn render_schedule(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let column_count = state.dataset.headers.len().max(1);
    let widths = vec![Constraint::Ratio(1, column_count as u32); column_count];

    let header = Row::new(
        state
            .dataset
            .headers
            .iter()
            .map(|h| {
                Cell::from(h.clone()).style(
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>(),
    );

    let rows: Vec<Row> = state
        .dataset
        .records
        .iter()
        .map(|record| {
            Row::new(
                record
                    .fields
                    .iter()
                    .map(|field| Cell::from(field.clone()))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title("SCHEDULED MAINTENANCE")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(table, area);
}
