use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Slide-in duration at both ends of a toast's life
const SLIDE_MS: u128 = 250;

pub fn render(f: &mut Frame, app: &App) {
    let Some(toast) = &app.toast else {
        return;
    };
    let theme = &app.theme;
    let screen = f.area();
    let now = Instant::now();

    // Expiry handled in App::on_tick()
    let width = (toast.message.width() as u16 + 6).min(screen.width.saturating_sub(4));
    let mut x = screen.width.saturating_sub(width + 1);

    let elapsed = now.duration_since(toast.start_time).as_millis();
    let remaining = toast.deadline.saturating_duration_since(now).as_millis();
    let offset = if elapsed < SLIDE_MS {
        // Entering from the right
        let t = elapsed as f32 / SLIDE_MS as f32;
        (1.0 - t).powi(3)
    } else if remaining < SLIDE_MS {
        let t = (SLIDE_MS - remaining) as f32 / SLIDE_MS as f32;
        t.powi(3)
    } else {
        0.0
    };
    x += (width as f32 * offset) as u16;

    if x >= screen.width {
        return;
    }
    let area = Rect::new(x, 1, width, 3).intersection(screen);
    if area.is_empty() {
        return;
    }

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(Color::Reset));
    let text = Paragraph::new(Line::from(Span::styled(
        toast.message.as_str(),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(text, area);
}
