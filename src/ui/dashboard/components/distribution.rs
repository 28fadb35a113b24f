//! Dashboard distribution components
//!
//! Draws the failure risk histogram and the category bar chart from their
//! ChartSpec descriptions.

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{BarChart, Block, BorderType, Borders, Paragraph};

/// Render the distribution section: histogram on the left, categories on the
/// right.
pub fn render_distribution_section(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
) {
    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_histogram(f, chart_chunks[0], state);
    render_categories(f, chart_chunks[1], state);
}

fn render_histogram(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let spec = &state.risk_histogram;
    let block = Block::default()
        .title(spec.title.as_str())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red));

    if spec.bars.is_empty() {
        let placeholder = Paragraph::new("No records to chart")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let data: Vec<(&str, u64)> = spec
        .bars
        .iter()
        .map(|bar| (bar.label.as_str(), bar.value))
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(&data)
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Red))
        .value_style(Style::default().fg(Color::White).bg(Color::Red));
    f.render_widget(chart, area);
}

fn render_categories(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let spec = &state.category_chart;
    let block = Block::default()
        .title(spec.title.as_str())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow));

    if let Err(e) = &state.breakdown {
        // Out-of-range data is surfaced, never silently clamped.
        let placeholder = Paragraph::new(format!("{}", e))
            .style(Style::default().fg(Color::Red))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let data: Vec<(&str, u64)> = spec
        .bars
        .iter()
        .map(|bar| (bar.label.as_str(), bar.value))
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(&data)
        .bar_width(17)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Yellow))
        .value_style(Style::default().fg(Color::Black).bg(Color::Yellow));
    f.render_widget(chart, area);
}
