pub mod layout;
pub mod terminal;
pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;

use crate::app::App;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn ui(f: &mut Frame, app: &App) {
    let area = f.area();

    // 1. Layout
    let main_layout = layout::get_main_layout(area);
    widgets::header::render(f, main_layout.header_area, app);

    // 2. Camera pane, plus recommendations once a mood is known
    let show_panel = app.session.emotion.is_some();
    let content = layout::get_content_layout(main_layout.body_area, show_panel);

    widgets::camera::render(f, content.camera, app);
    if let Some(panel) = content.panel {
        widgets::recommendations::render(f, panel, app);
    }

    // 3. Footer hint (if no popup active)
    if !app.show_keyhints {
        let theme = &app.theme;
        let hint = Line::from(vec![
            Span::styled(
                format!(" {} ", app.keys.display(&app.keys.toggle_keyhints)),
                Style::default()
                    .fg(theme.overlay)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("keys", Style::default().fg(theme.overlay)),
        ]);
        let footer = Paragraph::new(hint).alignment(Alignment::Right);
        f.render_widget(footer, main_layout.footer_area);
    }

    // 4. Popups (Overlays)
    widgets::popups::render(f, app);
}
