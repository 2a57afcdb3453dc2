use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
   ____ _____  _      ____       _
  / ___|_   _|/ \    |  _ \ ___ | | _____ _ __
 | |  _  | | / _ \   | |_) / _ \| |/ / _ \ '__|
 | |_| | | |/ ___ \  |  __/ (_) |   <  __/ |
  \____| |_/_/   \_\ |_|   \___/|_|\_\___|_|
"#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 70, f.area());
    let block = Block::default().title("gta-poker").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let logo_lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Green))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner_all);

    let logo_para = Paragraph::new(logo_lines).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    let mut cfg_lines: Vec<Line> = Vec::new();
    cfg_lines.push(Line::from(Span::styled(
        "Simulation:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, it) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it, style)));
    }
    cfg_lines.push(Line::from(""));
    cfg_lines.push(Line::from(format!(
        "Start: {} chips  Ante cap: {}  Side bet cap: {}",
        app.config().initial_chips,
        app.config().max_ante,
        app.config().max_side_bet
    )));
    if let Some(err) = app.error() {
        cfg_lines.push(Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))));
    }
    cfg_lines.push(Line::from(""));
    cfg_lines.push(Line::from(Span::styled(
        "[Enter] Run  [Esc] Back  [↑/↓] Move  [+/-] Adjust  [Q] Quit",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, rows[1]);
}
