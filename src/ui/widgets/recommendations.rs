use crate::app::App;
use crate::recommend::LanguageFilter;
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const YOUTUBE_BUTTON: &str = " ▶ YouTube ";
const SPOTIFY_BUTTON: &str = " ● Spotify ";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let Some(emotion) = app.session.emotion else {
        return;
    };

    let title = format!(
        " {} Based on your {} mood, we recommend: ",
        emotion.icon(),
        emotion
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            title,
            Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(theme.magenta))
        .style(Style::default().bg(Color::Reset));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter toggles
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Tracks
        ])
        .split(inner);

    render_filters(f, chunks[0], app);
    render_tracks(f, chunks[2], app);
}

/// All / English / Hindi toggles, active one highlighted
fn render_filters(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let keys = &app.keys;

    let mut spans = Vec::new();
    for filter in LanguageFilter::ALL {
        let key = match filter {
            LanguageFilter::All => &keys.filter_all,
            LanguageFilter::English => &keys.filter_english,
            LanguageFilter::Hindi => &keys.filter_hindi,
        };
        let style = if app.session.filter == filter {
            Style::default()
                .fg(Color::White)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(theme.surface)
        };
        spans.push(Span::styled(format!(" {} ", filter.title()), style));
        spans.push(Span::styled(
            format!("{} ", keys.display(key)),
            Style::default().fg(theme.overlay),
        ));
        spans.push(Span::raw(" "));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        area,
    );
}

fn render_tracks(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let tracks = app.visible_tracks();

    if tracks.is_empty() {
        let msg = format!("No {} tracks for this mood.", app.session.filter.title());
        f.render_widget(
            Paragraph::new(Span::styled(msg, Style::default().fg(theme.overlay)))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let w = area.width as usize;
    let h = area.height as usize;
    let buttons_width = YOUTUBE_BUTTON.width() + 1 + SPOTIFY_BUTTON.width();

    let mut lines: Vec<Line> = Vec::with_capacity(tracks.len());
    for (idx, track) in tracks.iter().enumerate() {
        let selected = idx == app.selected;
        let badge = format!(" {} ", track.language);
        let marker = if selected { "▶ " } else { "  " };

        // marker + "♫ " + title + " " + badge + gap (at least 1) + buttons
        let fixed = 2 + 2 + 1 + badge.width() + 1 + buttons_width;
        let title = truncate(track.title, w.saturating_sub(fixed).max(4));
        let used = 2 + 2 + title.width() + 1 + badge.width() + buttons_width;
        let gap = w.saturating_sub(used).max(1);

        let row_style = if selected {
            Style::default().fg(theme.text).bg(theme.surface)
        } else {
            Style::default().fg(theme.text)
        };
        let title_style = if selected {
            row_style.add_modifier(Modifier::BOLD)
        } else {
            row_style
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(theme.accent)),
            Span::styled("♫ ", Style::default().fg(theme.magenta)),
            Span::styled(title, title_style),
            Span::raw(" "),
            Span::styled(badge, Style::default().fg(theme.overlay).bg(theme.base)),
            Span::raw(" ".repeat(gap)),
        ];

        let (yt_style, sp_style) = if selected {
            (
                Style::default().fg(Color::White).bg(theme.red),
                Style::default().fg(Color::White).bg(theme.green),
            )
        } else {
            (
                Style::default().fg(theme.red),
                Style::default().fg(theme.green),
            )
        };
        spans.push(Span::styled(YOUTUBE_BUTTON, yt_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(SPOTIFY_BUTTON, sp_style));

        lines.push(Line::from(spans));
    }

    // Keep the selection on screen
    let scroll = if h > 0 && app.selected >= h {
        app.selected + 1 - h
    } else {
        0
    };

    f.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), area);
}
