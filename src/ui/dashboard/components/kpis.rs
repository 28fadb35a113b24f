//! Dashboard KPI tiles component
//!
//! Renders the scalar aggregates of the maintenance table

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the KPI tile panel.
///
/// An empty table degrades the mean/max tiles to "N/A" instead of aborting
/// the render pass.
pub fn render_kpis(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut kpi_lines = Vec::new();

    match &state.kpis {
        Ok(kpis) => {
            kpi_lines.push(Line::from(vec![
                Span::styled("Scheduled: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{}", kpis.total_count),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));

            kpi_lines.push(Line::from(vec![
                Span::styled("Avg Risk: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    kpis.avg_risk_percent(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));

            kpi_lines.push(Line::from(vec![
                Span::styled("Max Risk: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    kpis.max_risk_percent(),
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));

            let high_risk_color = if kpis.high_risk_count > 0 {
                Color::Red
            } else {
                Color::Green
            };
            kpi_lines.push(Line::from(vec![
                Span::styled("High-Risk (>0.8): ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{}", kpis.high_risk_count),
                    Style::default()
                        .fg(high_risk_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        Err(e) => {
            kpi_lines.push(Line::from(vec![
                Span::styled("Scheduled: ", Style::default().fg(Color::Gray)),
                Span::styled("0", Style::default().fg(Color::White)),
            ]));
            for label in ["Avg Risk: ", "Max Risk: ", "High-Risk (>0.8): "] {
                kpi_lines.push(Line::from(vec![
                    Span::styled(label, Style::default().fg(Color::Gray)),
                    Span::styled("N/A", Style::default().fg(Color::DarkGray)),
                ]));
            }
            kpi_lines.push(Line::from(Span::styled(
                format!("{}", e),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    // Dataset origin, compacted to the file name.
    let file_name = state
        .data_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| state.data_path.display().to_string());
    kpi_lines.push(Line::from(vec![
        Span::styled("Source: ", Style::default().fg(Color::Gray)),
        Span::styled(file_name, Style::default().fg(Color::Cyan)),
    ]));

    let uptime = state.start_time.elapsed().as_secs();
    kpi_lines.push(Line::from(vec![
        Span::styled("Uptime: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}m {}s", uptime / 60, uptime % 60),
            Style::default().fg(Color::White),
        ),
    ]));

    let kpi_block = Block::default()
        .title("KPI TILES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let kpi_paragraph = Paragraph::new(kpi_lines)
        .block(kpi_block)
        .wrap(Wrap { trim: true });
    f.render_widget(kpi_paragraph, area);
}
