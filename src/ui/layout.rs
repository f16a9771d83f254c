use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    // Header gets its tagline only when there is room for it
    let header_height = if area.height >= 24 { 3 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Header
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Footer
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        footer_area: chunks[2],
    }
}

pub struct ContentLayout {
    pub camera: Rect,
    pub panel: Option<Rect>,
    pub is_horizontal: bool,
}

/// Camera pane plus (optional) recommendation panel.
///
/// The panel only exists once a mood has been detected.
pub fn get_content_layout(area: Rect, show_panel: bool) -> ContentLayout {
    if !show_panel {
        return ContentLayout {
            camera: area,
            panel: None,
            is_horizontal: false,
        };
    }

    if area.width >= 100 {
        // Side by side: camera keeps a 4:3-ish share
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Min(40)])
            .split(area);
        ContentLayout {
            camera: chunks[0],
            panel: Some(chunks[1]),
            is_horizontal: true,
        }
    } else if area.height < 20 {
        // Too short for a stack -> panel only, camera squeezed out
        ContentLayout {
            camera: Rect::default(),
            panel: Some(area),
            is_horizontal: false,
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        ContentLayout {
            camera: chunks[0],
            panel: Some(chunks[1]),
            is_horizontal: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_panel_gives_camera_everything() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = get_content_layout(area, false);
        assert_eq!(layout.camera, area);
        assert!(layout.panel.is_none());
    }

    #[test]
    fn test_wide_terminal_is_horizontal() {
        let layout = get_content_layout(Rect::new(0, 0, 160, 40), true);
        assert!(layout.is_horizontal);
        assert!(layout.panel.is_some());
    }

    #[test]
    fn test_short_terminal_drops_camera() {
        let layout = get_content_layout(Rect::new(0, 0, 80, 15), true);
        assert_eq!(layout.camera, Rect::default());
        assert_eq!(layout.panel, Some(Rect::new(0, 0, 80, 15)));
    }
}
