//! Places of the selected category.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, StatefulWidget, Widget},
};

use crate::application::navigation::NavEvent;
use crate::domain::entities::Place;
use crate::presentation::i18n::{StringKey, Strings};
use crate::presentation::theme::Theme;

pub struct PlaceListScreen<'a> {
    category: &'a str,
    places: &'a [Place],
    show_address: bool,
    strings: Strings,
    theme: &'a Theme,
}

impl<'a> PlaceListScreen<'a> {
    #[must_use]
    pub const fn new(
        category: &'a str,
        places: &'a [Place],
        strings: Strings,
        theme: &'a Theme,
    ) -> Self {
        Self {
            category,
            places,
            show_address: true,
            strings,
            theme,
        }
    }

    #[must_use]
    pub const fn show_address(mut self, show_address: bool) -> Self {
        self.show_address = show_address;
        self
    }

    /// Navigation event for the row at `index`.
    #[must_use]
    pub fn event_for(places: &[Place], index: usize) -> Option<NavEvent> {
        places.get(index).map(|place| NavEvent::SelectPlace(place.id()))
    }

    fn item(&self, place: &'a Place) -> ListItem<'a> {
        let mut lines = vec![Line::from(Span::styled(
            place.name(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if self.show_address {
            lines.push(Line::from(Span::styled(
                place.address(),
                self.theme.dimmed_style,
            )));
        }
        ListItem::new(lines)
    }
}

impl StatefulWidget for PlaceListScreen<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(format!(" {} ", self.category))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.places.is_empty() {
            let [_, center, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(inner);
            Paragraph::new(self.strings.get(StringKey::NoPlaces))
                .style(self.theme.dimmed_style)
                .alignment(Alignment::Center)
                .render(center, buf);
            return;
        }

        let items: Vec<ListItem> = self.places.iter().map(|place| self.item(place)).collect();
        let list = List::new(items)
            .highlight_style(self.theme.selection_style)
            .highlight_symbol("▶ ");
        StatefulWidget::render(list, inner, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PlaceId;

    fn places() -> Vec<Place> {
        vec![
            Place::new(1_u32, "Coffee Mania", "Cafes", "Bolshaya Nikitskaya St, 13", ""),
            Place::new(2_u32, "Surf Coffee", "Cafes", "Pokrovka St, 2", ""),
        ]
    }

    fn render(places: &[Place], show_address: bool) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default();
        state.select(Some(0));

        PlaceListScreen::new("Cafes", places, Strings::default(), &theme)
            .show_address(show_address)
            .render(area, &mut buf, &mut state);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..40).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_event_for_row() {
        let places = places();

        assert_eq!(
            PlaceListScreen::event_for(&places, 1),
            Some(NavEvent::SelectPlace(PlaceId(2)))
        );
        assert_eq!(PlaceListScreen::event_for(&places, 2), None);
    }

    #[test]
    fn test_rows_show_name_and_address() {
        let buf = render(&places(), true);

        assert!(row(&buf, 0).contains("Cafes"));
        assert!(row(&buf, 1).contains("▶ Coffee Mania"));
        assert!(row(&buf, 2).contains("Bolshaya Nikitskaya"));
        assert!(row(&buf, 3).contains("Surf Coffee"));
    }

    #[test]
    fn test_rows_without_address() {
        let buf = render(&places(), false);

        assert!(row(&buf, 2).contains("Surf Coffee"));
    }

    #[test]
    fn test_empty_category_message() {
        let buf = render(&[], true);

        assert!((0..8).any(|y| row(&buf, y).contains("No places in this category")));
    }
}
