//! Dashboard header component
//!
//! Renders the title and the risk filter gauge

use super::super::state::DashboardState;
use crate::consts::dashboard_consts::risk_filter;
use crate::ui::dashboard::utils::risk_color;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use ratatui::prelude::Color;

/// Render header with title and the current filter threshold gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    // Title section
    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!("MACHINE FAILURE RISK DASHBOARD v{}", version);

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // The gauge shows where the adjustable threshold sits within its range.
    let threshold = state.threshold();
    let span = risk_filter::MAX - risk_filter::MIN;
    let progress = (((threshold - risk_filter::MIN) / span) * 100.0) as u16;
    let label = format!(
        "RISK FILTER >= {:.2}  ({} machines selected)",
        threshold,
        state.filtered.count()
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(risk_color(threshold))
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress.min(100))
        .label(label);

    f.render_widget(gauge, header_chunks[1]);
}
