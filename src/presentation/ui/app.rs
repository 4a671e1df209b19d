//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{ListState, StatefulWidget, Widget},
};
use tokio::sync::watch;
use tracing::{debug, info, trace};

use crate::application::navigation::{NavEvent, Screen, ScreenFlow, ScreenKind, Transition};
use crate::application::services::{CatalogStore, UiState, ViewStateController};
use crate::domain::keybinding::Action;
use crate::infrastructure::config::{AppConfig, UiConfig};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventResult, key_press};
use crate::presentation::i18n::Strings;
use crate::presentation::theme::Theme;
use crate::presentation::ui::{AboutScreen, CategoryScreen, PlaceDetailScreen, PlaceListScreen};
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, list_cursor,
};

pub struct App {
    flow: ScreenFlow,
    state_rx: watch::Receiver<Arc<UiState>>,
    registry: CommandRegistry,
    strings: Strings,
    theme: Theme,
    ui_config: UiConfig,
    category_list: ListState,
    place_list: ListState,
    detail_scroll: u16,
    running: bool,
}

impl App {
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>, config: &AppConfig) -> Self {
        let controller = Arc::new(ViewStateController::new(catalog));
        let state_rx = controller.subscribe();

        let mut category_list = ListState::default();
        category_list.select(Some(0));

        Self {
            flow: ScreenFlow::new(controller),
            state_rx,
            registry: CommandRegistry::new(),
            strings: Strings::new(config.locale),
            theme: Theme::new(&config.theme.accent_color),
            ui_config: config.ui.clone(),
            category_list,
            place_list: ListState::default(),
            detail_scroll: 0,
            running: true,
        }
    }

    /// Screen currently on top of the navigation stack.
    #[must_use]
    pub fn current_screen(&self) -> &Screen {
        self.flow.current()
    }

    /// Latest view state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<UiState> {
        self.flow.controller().snapshot()
    }

    /// # Errors
    /// Returns error if drawing to the terminal or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            let terminal_event = terminal_events.next();

            tokio::select! {
                changed = self.state_rx.changed() => {
                    if changed.is_err() {
                        debug!("View state channel closed");
                        break;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                event = terminal_event => {
                    let Some(event) = event else {
                        debug!("Terminal event stream ended");
                        break;
                    };
                    match self.handle_terminal_event(&event?) {
                        EventResult::Exit => self.running = false,
                        EventResult::Consumed => {
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        EventResult::Continue => {}
                    }
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        if let Event::Resize(..) = event {
            return EventResult::Consumed;
        }
        key_press(event).map_or(EventResult::Continue, |key| self.handle_key(key))
    }

    /// Dispatches a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match self.registry.find_action(key) {
            Some(action) => {
                trace!(?action, "Key mapped");
                self.handle_action(action)
            }
            None => EventResult::Continue,
        }
    }

    fn handle_action(&mut self, action: Action) -> EventResult {
        match action {
            Action::Quit => EventResult::Exit,
            Action::Back => self.navigate(NavEvent::Back),
            Action::OpenAbout => self.navigate(NavEvent::OpenAbout),
            Action::Select => match self.selected_event() {
                Some(event) => self.navigate(event),
                None => EventResult::Continue,
            },
            Action::NavigateUp | Action::NavigateDown | Action::SelectFirst | Action::SelectLast => {
                self.move_cursor(action)
            }
        }
    }

    fn selected_event(&self) -> Option<NavEvent> {
        let state = self.snapshot();
        match self.flow.current() {
            Screen::CategoryList => self
                .category_list
                .selected()
                .and_then(|i| CategoryScreen::event_for(&state.categories, i)),
            Screen::PlaceList { .. } => self
                .place_list
                .selected()
                .and_then(|i| PlaceListScreen::event_for(&state.current_category_places, i)),
            Screen::PlaceDetail { .. } | Screen::About => None,
        }
    }

    fn move_cursor(&mut self, action: Action) -> EventResult {
        let state = self.snapshot();
        let (list, len) = match self.flow.current().kind() {
            ScreenKind::CategoryList => (
                &mut self.category_list,
                CategoryScreen::row_count(&state.categories),
            ),
            ScreenKind::PlaceList => (
                &mut self.place_list,
                state.current_category_places.len(),
            ),
            ScreenKind::PlaceDetail => return self.scroll_detail(action),
            ScreenKind::About => return EventResult::Continue,
        };

        match action {
            Action::NavigateUp => list_cursor::select_previous(list, len),
            Action::NavigateDown => list_cursor::select_next(list, len),
            Action::SelectFirst => list_cursor::select_first(list, len),
            Action::SelectLast => list_cursor::select_last(list, len),
            _ => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    fn scroll_detail(&mut self, action: Action) -> EventResult {
        let scroll = match action {
            Action::NavigateUp => self.detail_scroll.saturating_sub(1),
            Action::NavigateDown => self.detail_scroll.saturating_add(1),
            Action::SelectFirst => 0,
            _ => return EventResult::Continue,
        };
        self.detail_scroll = scroll;
        EventResult::Consumed
    }

    fn navigate(&mut self, event: NavEvent) -> EventResult {
        match self.flow.handle(event) {
            Transition::Ignored => EventResult::Continue,
            Transition::Pushed(Screen::PlaceList { .. }) => {
                let places = self.snapshot().current_category_places.len();
                self.place_list.select(None);
                list_cursor::clamp(&mut self.place_list, places);
                EventResult::Consumed
            }
            Transition::Pushed(Screen::PlaceDetail { .. }) => {
                self.detail_scroll = 0;
                EventResult::Consumed
            }
            Transition::Pushed(_) | Transition::Popped(_) => EventResult::Consumed,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.draw(area, frame.buffer_mut());
    }

    fn draw(&mut self, area: Rect, buf: &mut Buffer) {
        let state = self.state_rx.borrow_and_update().clone();
        let screen = self.flow.current().clone();
        trace!(revision = state.revision, screen = %screen, "Rendering");

        let footer_height = u16::from(self.ui_config.show_key_hints);
        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        HeaderBar::new(
            self.strings.title(screen.kind()),
            crate::NAME,
            crate::VERSION,
        )
        .can_navigate_back(self.flow.can_navigate_back())
        .style(HeaderBarStyle::from_theme(&self.theme))
        .render(header_area, buf);

        let position = match &screen {
            Screen::CategoryList => {
                CategoryScreen::new(&state.categories, self.strings, &self.theme).render(
                    body_area,
                    buf,
                    &mut self.category_list,
                );
                list_position(&self.category_list, CategoryScreen::row_count(&state.categories))
            }
            Screen::PlaceList { category } => {
                PlaceListScreen::new(
                    category,
                    &state.current_category_places,
                    self.strings,
                    &self.theme,
                )
                .show_address(self.ui_config.show_address_in_list)
                .render(body_area, buf, &mut self.place_list);
                list_position(&self.place_list, state.current_category_places.len())
            }
            Screen::PlaceDetail { .. } => {
                PlaceDetailScreen::new(
                    state.current_selected_place.as_ref(),
                    self.strings,
                    &self.theme,
                )
                .scroll(self.detail_scroll)
                .render(body_area, buf);
                None
            }
            Screen::About => {
                AboutScreen::new(self.strings, crate::VERSION, &self.theme).render(body_area, buf);
                None
            }
        };

        if self.ui_config.show_key_hints {
            let hints = self.registry.hints_for(screen.kind(), &self.strings);
            FooterBar::new(&hints)
                .right_info(position.as_deref())
                .style(FooterBarStyle::from_theme(&self.theme))
                .render(footer_area, buf);
        }
    }
}

fn list_position(state: &ListState, len: usize) -> Option<String> {
    state.selected().map(|i| format!(" {}/{len} ", i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Place, PlaceId};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        let catalog = CatalogStore::new(vec![
            Place::new(1_u32, "Coffee Mania", "Cafe", "Bolshaya Nikitskaya St, 13", "Coffee"),
            Place::new(2_u32, "Pushkin Museum", "Museum", "Volkhonka St, 12", "Fine arts"),
            Place::new(3_u32, "Garage", "Museum", "Krymsky Val St, 9/32", "Contemporary art"),
        ])
        .unwrap();
        App::new(Arc::new(catalog), &AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn screen_text(app: &mut App) -> String {
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);
        app.draw(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_browse_category_to_detail_and_back() {
        let mut app = app();

        assert_eq!(press(&mut app, KeyCode::Down), EventResult::Consumed);
        assert_eq!(press(&mut app, KeyCode::Enter), EventResult::Consumed);
        assert_eq!(
            app.current_screen(),
            &Screen::PlaceList {
                category: "Museum".to_string()
            }
        );
        assert_eq!(app.snapshot().current_category_places.len(), 2);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.current_screen(),
            &Screen::PlaceDetail {
                place_id: PlaceId(3)
            }
        );
        assert!(screen_text(&mut app).contains("Garage"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(
            app.current_screen(),
            &Screen::PlaceList {
                category: "Museum".to_string()
            }
        );
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen(), &Screen::CategoryList);
        assert_eq!(press(&mut app, KeyCode::Esc), EventResult::Continue);
    }

    #[test]
    fn test_about_entry_opens_about_without_state_change() {
        let mut app = app();
        let revision = app.snapshot().revision;

        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.current_screen(), &Screen::About);
        assert_eq!(app.snapshot().revision, revision);
        assert!(screen_text(&mut app).contains("About"));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.current_screen(), &Screen::CategoryList);
    }

    #[test]
    fn test_about_shortcut_only_on_root() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        assert_eq!(press(&mut app, KeyCode::Char('a')), EventResult::Continue);
        assert!(matches!(app.current_screen(), Screen::PlaceList { .. }));
    }

    #[test]
    fn test_place_list_selection_resets_per_category() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.place_list.selected(), Some(1));

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.snapshot().current_category, "Cafe");
        assert_eq!(app.place_list.selected(), Some(0));
    }

    #[test]
    fn test_header_shows_title_and_back_marker() {
        let mut app = app();
        let root = screen_text(&mut app);
        assert!(root.lines().next().unwrap().contains("City Guide"));
        assert!(!root.lines().next().unwrap().contains('←'));

        press(&mut app, KeyCode::Enter);
        let places = screen_text(&mut app);
        let header = places.lines().next().unwrap();
        assert!(header.contains('←'));
        assert!(header.contains("Places"));
    }

    #[test]
    fn test_detail_scroll() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(press(&mut app, KeyCode::Down), EventResult::Consumed);
        assert_eq!(app.detail_scroll, 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();

        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Exit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EventResult::Exit
        );
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut app = app();

        assert_eq!(press(&mut app, KeyCode::Char('z')), EventResult::Continue);
        assert_eq!(app.current_screen(), &Screen::CategoryList);
    }

    #[test]
    fn test_footer_shows_position() {
        let mut app = app();

        let text = screen_text(&mut app);
        assert!(text.lines().last().unwrap().contains("1/3"));
    }
}
