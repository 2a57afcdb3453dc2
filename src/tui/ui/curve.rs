use crate::cards::{Card, Suit};
use crate::report::format_clock;
use crate::showdown::Winner;
use crate::tui::app::{AppState, SampleRound};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::inner;

pub(super) fn draw_curve(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Min(6),    // curve + sample
            Constraint::Length(3), // status bar
        ])
        .split(f.area());

    let cfg = app.config();
    let progress = format!("{}/{} round counts", app.curve.len(), cfg.max_rounds);
    let header_lines = vec![
        Line::from(format!(
            "Start: {}  Trials: {}  Dealing: {}  Execution: {}",
            cfg.initial_chips,
            cfg.trials,
            cfg.deal.label(),
            cfg.execution.label()
        )),
        Line::from(if app.paused { format!("{progress} (paused)") } else { progress }),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("gta-poker").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    draw_table(f, body[0], app);
    draw_sample(f, body[1], app.sample.as_ref());

    let status = match app.error() {
        Some(err) => Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))),
        None => Line::from(Span::styled(
            "[Space] Pause  [R] Restart  [M] Menu  [Q] Quit",
            Style::default().add_modifier(Modifier::DIM),
        )),
    };
    let status_para = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
    f.render_widget(status_para, chunks[2]);
}

fn draw_table(f: &mut Frame, area: Rect, app: &AppState) {
    let visible = inner(area).height.saturating_sub(1) as usize;
    // Keep the newest rows in view.
    let skip = app.curve.len().saturating_sub(visible);
    let start = app.config().initial_chips;
    let rows = app.curve.iter().skip(skip).map(|p| {
        let color = if p.avg_bankroll >= start { Color::Green } else { Color::Red };
        Row::new(vec![
            Cell::from(p.rounds.to_string()),
            Cell::from(p.avg_bankroll.to_string()).style(Style::default().fg(color)),
            Cell::from(format_clock(p.avg_time_secs)),
        ])
    });
    let widths = [Constraint::Length(6), Constraint::Length(16), Constraint::Min(10)];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Round", "Average Chips", "Average Time"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().title("Expected value").borders(Borders::ALL));
    f.render_widget(table, area);
}

fn draw_sample(f: &mut Frame, area: Rect, sample: Option<&SampleRound>) {
    let block = Block::default().title("Sample round").borders(Borders::ALL);
    let inner_area = inner(area);
    f.render_widget(block, area);
    let Some(sample) = sample else {
        f.render_widget(Paragraph::new("Dealing..."), inner_area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner_area);

    let r = &sample.result;
    f.render_widget(Paragraph::new(format!("Player: {}", r.player.describe(false))), rows[0]);
    draw_cards(f, rows[1], &sample.player, r.winner == Winner::Player);
    f.render_widget(Paragraph::new(format!("Dealer: {}", r.dealer.describe(true))), rows[2]);
    draw_cards(f, rows[3], &sample.dealer, r.winner == Winner::Dealer);

    let outcome = match r.winner {
        Winner::Player => format!("Player wins, payout {}", r.payout),
        Winner::Dealer => "Dealer wins".to_string(),
    };
    f.render_widget(Paragraph::new(outcome).wrap(Wrap { trim: true }), rows[4]);
}

fn draw_cards(f: &mut Frame, area: Rect, cards: &[Card], winner: bool) {
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(7), Constraint::Length(7), Constraint::Length(7)])
        .split(area);
    for (slot, card) in slots.iter().zip(cards) {
        render_card_widget(f, *slot, *card, winner.then_some(Color::Yellow));
    }
}

fn suit_style(s: Suit) -> Style {
    match s {
        Suit::Hearts | Suit::Diamonds => Style::default().fg(Color::Red),
        Suit::Spades | Suit::Clubs => Style::default().fg(Color::White),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Card, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let line = Line::from(Span::styled(card.name(), suit_style(card.suit())));
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
}
