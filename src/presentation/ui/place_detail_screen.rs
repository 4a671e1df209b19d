//! Details of the selected place.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};

use crate::domain::entities::Place;
use crate::presentation::i18n::{StringKey, Strings};
use crate::presentation::theme::Theme;

/// Shows the selected place, or a not-found message when there is none.
pub struct PlaceDetailScreen<'a> {
    place: Option<&'a Place>,
    scroll: u16,
    strings: Strings,
    theme: &'a Theme,
}

impl<'a> PlaceDetailScreen<'a> {
    #[must_use]
    pub const fn new(place: Option<&'a Place>, strings: Strings, theme: &'a Theme) -> Self {
        Self {
            place,
            scroll: 0,
            strings,
            theme,
        }
    }

    #[must_use]
    pub const fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    fn lines(&self, place: &'a Place, width: u16) -> Vec<Line<'a>> {
        let label = |key| format!("{}: ", self.strings.get(key));

        vec![
            Line::from(Span::styled(
                place.name(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(label(StringKey::CategoryLabel), self.theme.dimmed_style),
                Span::styled(place.category(), Style::default().fg(self.theme.accent)),
            ]),
            Line::from(vec![
                Span::styled(label(StringKey::AddressLabel), self.theme.dimmed_style),
                Span::raw(place.address()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "─".repeat(usize::from(width)),
                self.theme.dimmed_style,
            )),
            Line::from(""),
            Line::from(place.description()),
        ]
    }
}

impl Widget for PlaceDetailScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .padding(Padding::new(2, 2, 1, 1));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(place) = self.place else {
            let [_, center, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(inner);
            Paragraph::new(self.strings.get(StringKey::PlaceNotFound))
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .render(center, buf);
            return;
        };

        Paragraph::new(self.lines(place, inner.width))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::Locale;

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(place: Option<&Place>, strings: Strings, scroll: u16) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 50, 14);
        let mut buf = Buffer::empty(area);
        PlaceDetailScreen::new(place, strings, &theme)
            .scroll(scroll)
            .render(area, &mut buf);
        buf
    }

    #[test]
    fn test_missing_place_shows_not_found() {
        let buf = render(None, Strings::default(), 0);

        assert!(text(&buf).contains("Place not found"));
    }

    #[test]
    fn test_missing_place_localized() {
        let buf = render(None, Strings::new(Locale::Ru), 0);

        assert!(text(&buf).contains("Место не найдено"));
    }

    #[test]
    fn test_place_fields_rendered() {
        let place = Place::new(
            4_u32,
            "Tretyakov Gallery",
            "Museums",
            "Lavrushinsky Ln, 10",
            "Russian fine art",
        );
        let buf = render(Some(&place), Strings::default(), 0);
        let text = text(&buf);

        assert!(text.contains("Tretyakov Gallery"));
        assert!(text.contains("Category: Museums"));
        assert!(text.contains("Address: Lavrushinsky Ln, 10"));
        assert!(text.contains("Russian fine art"));
        assert!(!text.contains("Place not found"));
    }

    #[test]
    fn test_scroll_hides_heading() {
        let place = Place::new(4_u32, "Tretyakov Gallery", "Museums", "Lavrushinsky Ln, 10", "");
        let buf = render(Some(&place), Strings::default(), 2);

        assert!(!text(&buf).contains("Tretyakov Gallery"));
        assert!(text(&buf).contains("Category: Museums"));
    }
}
