use crate::core::config::Accent;
use crate::core::state::Store;
use crate::core::strings;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ArtworkFrame, NavRow, StatusBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Color;

/// Screen regions, top to bottom.
pub struct ScreenAreas {
    pub title: Rect,
    pub artwork: Rect,
    pub nav: Rect,
    pub status: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    use Constraint::{Length, Min};

    let [body, status] = Layout::vertical([Min(0), Length(1)]).areas(area);
    let [_, body, _] = Layout::horizontal([Length(2), Min(0), Length(2)]).areas(body);
    let [title, _, artwork, _, nav] =
        Layout::vertical([Length(1), Length(1), Min(3), Length(1), Length(4)]).areas(body);

    ScreenAreas {
        title,
        artwork,
        nav,
        status,
    }
}

pub fn accent_color(accent: Accent) -> Color {
    match accent {
        // teal_700
        Accent::Teal => Color::Rgb(0x01, 0x87, 0x86),
        Accent::Cyan => Color::Cyan,
        Accent::Magenta => Color::Magenta,
        Accent::Yellow => Color::Yellow,
        Accent::Green => Color::Green,
        Accent::Blue => Color::Blue,
        Accent::White => Color::White,
    }
}

pub fn draw_ui(frame: &mut Frame, store: &Store, tui: &mut TuiState) {
    let areas = screen_areas(frame.area());
    let state = store.current_state();
    let artwork = store.current_artwork();
    let accent = accent_color(tui.accent);
    let title = strings::resolve(artwork.title);

    TitleBar::new(title, accent).render(frame, areas.title);

    ArtworkFrame::new(artwork.image.name(), title, state.drag_offset, accent)
        .render(frame, areas.artwork);

    NavRow::new(strings::resolve(artwork.artist), artwork.year, accent).render(frame, areas.nav);
    tui.gestures.nav_area = areas.nav;

    StatusBar {
        collection: (state.collection_index, store.catalog().len()),
        artwork: (state.artwork_index, store.current_collection_len()),
        drag_offset: state.drag_offset,
        show_hints: tui.show_hints,
    }
    .render(frame, areas.status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use crate::test_support::test_store;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(store: &Store, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, store, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_screen_areas_stack() {
        let areas = screen_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.title, Rect::new(2, 0, 76, 1));
        assert_eq!(areas.artwork, Rect::new(2, 2, 76, 16));
        assert_eq!(areas.nav, Rect::new(2, 19, 76, 4));
        assert_eq!(areas.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_draw_ui_shows_current_artwork() {
        let store = test_store();
        let mut tui = TuiState::new(Accent::Teal, true);
        let text = screen(&store, &mut tui);

        assert!(text.contains("Café Terrace at Night"));
        assert!(text.contains("cafe_terrace_at_night"));
        assert!(text.contains("Vincent van Gogh"));
        assert!(text.contains("(1888)"));
        assert!(text.contains("Collection 1/2 · Artwork 1/5"));
    }

    #[test]
    fn test_draw_ui_records_nav_area() {
        let store = test_store();
        let mut tui = TuiState::new(Accent::Teal, true);
        screen(&store, &mut tui);
        assert_eq!(tui.gestures.nav_area, Rect::new(2, 19, 76, 4));
    }

    #[test]
    fn test_draw_ui_after_collection_switch() {
        let mut store = test_store();
        store.dispatch(Action::DragReleased).unwrap();
        store.dispatch(Action::TapLeft).unwrap();

        let mut tui = TuiState::new(Accent::Cyan, false);
        let text = screen(&store, &mut tui);
        assert!(text.contains("The Marketplace"));
        assert!(text.contains("Marc Chagall"));
        assert!(text.contains("(1917)"));
        assert!(text.contains("Collection 2/2 · Artwork 4/4"));
        assert!(!text.contains("q quit"));
    }

    #[test]
    fn test_draw_ui_survives_huge_drag_offsets() {
        for delta in [1e10, -1e10] {
            let mut store = test_store();
            store.dispatch(Action::Drag(delta)).unwrap();

            let mut tui = TuiState::new(Accent::Teal, false);
            let text = screen(&store, &mut tui);
            // Frame is dragged out of view; title and details stay put
            assert!(!text.contains("cafe_terrace_at_night"));
            assert!(text.contains("Vincent van Gogh"));
            assert!(text.contains("drag"));
        }
    }

    #[test]
    fn test_accent_teal_is_rgb() {
        assert_eq!(accent_color(Accent::Teal), Color::Rgb(1, 135, 134));
    }
}
