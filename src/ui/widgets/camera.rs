use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Rectangle},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if area.width < 4 || area.height < 3 {
        return;
    }
    let theme = &app.theme;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " Camera ",
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(theme.blue))
        .style(Style::default().bg(Color::Reset));

    if !app.session.is_loading() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} · {} detections ", app.detector_name, app.detections_seen),
            Style::default().fg(theme.overlay),
        )));
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.session.is_loading() {
        render_loading(f, inner, app);
    } else {
        render_overlay(f, inner, app);
        render_badge(f, inner, app);
    }
}

fn render_loading(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let spinner = SPINNER[app.spinner_frame % SPINNER.len()];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    let line = Line::from(vec![
        Span::styled(format!("{} ", spinner), Style::default().fg(theme.accent)),
        Span::styled(
            "Loading face detection models...",
            Style::default().fg(theme.text),
        ),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), rows[1]);
}

/// Frame outline plus the current detection box (canvas y grows upwards)
fn render_overlay(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let display = app.overlay.display;
    let (w, h) = (display.width, display.height);
    let current = app.overlay.current();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, w])
        .y_bounds([0.0, h])
        .paint(|ctx| {
            ctx.draw(&Rectangle {
                x: 0.0,
                y: 0.0,
                width: w,
                height: h,
                color: theme.surface,
            });

            if let Some(b) = current {
                let y = (h - b.y - b.height).max(0.0);
                ctx.draw(&Rectangle {
                    x: b.x,
                    y,
                    width: b.width,
                    height: b.height,
                    color: theme.accent,
                });
                ctx.print(
                    b.x,
                    (y + b.height).min(h),
                    Span::styled(
                        b.label.clone(),
                        Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}

fn render_badge(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = " 📷 Camera Active ";
    let width = (text.chars().count() as u16 + 1).min(area.width);
    let badge_area = Rect::new(area.x, area.y, width, 1);

    let badge = Paragraph::new(Span::styled(
        text,
        Style::default().fg(theme.text).bg(theme.base),
    ));
    f.render_widget(badge, badge_area);
}
