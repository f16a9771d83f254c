use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let k = &app.keys;

    // 🎹 WhichKey-style floating popup, bottom-right
    let sections: [(&str, Vec<(String, &str)>); 3] = [
        (
            "Filter",
            vec![
                (k.display(&k.filter_all), "All languages"),
                (k.display(&k.filter_english), "English only"),
                (k.display(&k.filter_hindi), "Hindi only"),
                (k.display(&k.cycle_filter), "Next filter"),
            ],
        ),
        (
            "Tracks",
            vec![
                (
                    format!("{}/{}", k.display(&k.nav_down), k.display(&k.nav_up)),
                    "Move selection",
                ),
                (k.display(&k.open_youtube), "Open on YouTube"),
                (k.display(&k.open_spotify), "Open on Spotify"),
            ],
        ),
        (
            "Global",
            vec![
                (k.display(&k.toggle_keyhints), "Toggle this help"),
                (k.display(&k.quit), "Quit"),
            ],
        ),
    ];

    let mut lines: Vec<Line> = Vec::new();
    let mut content_width = 0;
    for (i, (heading, keys)) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            format!("── {} ──", heading),
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        )));
        for (key, desc) in keys {
            content_width = content_width.max(2 + key.width().max(5) + 3 + desc.width());
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:<5} ", key),
                    Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(*desc, Style::default().fg(theme.text)),
            ]));
        }
    }

    let screen = f.area();
    let popup_height = (lines.len() as u16 + 2).min(screen.height.saturating_sub(2));
    let popup_width = (content_width as u16 + 4).min(screen.width.saturating_sub(2));
    let popup_area = Rect::new(
        screen.width.saturating_sub(popup_width + 1),
        screen.height.saturating_sub(popup_height + 2),
        popup_width,
        popup_height,
    );

    f.render_widget(Clear, popup_area);
    let popup = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.blue))
            .title(" Keys ")
            .title_alignment(Alignment::Left)
            .style(Style::default().bg(Color::Reset)),
    );
    f.render_widget(popup, popup_area);
}
