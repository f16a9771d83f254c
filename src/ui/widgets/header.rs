use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut lines = vec![Line::from(vec![
        Span::styled("♫ ", Style::default().fg(theme.accent)),
        Span::styled(
            "Emotion Music Recommender",
            Style::default()
                .fg(theme.magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if area.height >= 2 {
        lines.push(Line::from(Span::styled(
            "Let us recommend and play music based on your mood!",
            Style::default().fg(theme.overlay),
        )));
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
