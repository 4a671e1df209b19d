//! Category list, the root screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, StatefulWidget, Widget},
};

use crate::application::navigation::NavEvent;
use crate::presentation::i18n::{StringKey, Strings};
use crate::presentation::theme::Theme;

/// Categories followed by a separate entry that opens the about screen.
pub struct CategoryScreen<'a> {
    categories: &'a [String],
    strings: Strings,
    theme: &'a Theme,
}

impl<'a> CategoryScreen<'a> {
    #[must_use]
    pub const fn new(categories: &'a [String], strings: Strings, theme: &'a Theme) -> Self {
        Self {
            categories,
            strings,
            theme,
        }
    }

    /// Number of selectable rows, the about entry included.
    #[must_use]
    pub const fn row_count(categories: &[String]) -> usize {
        categories.len() + 1
    }

    /// Navigation event for the row at `index`.
    #[must_use]
    pub fn event_for(categories: &[String], index: usize) -> Option<NavEvent> {
        match index.cmp(&categories.len()) {
            std::cmp::Ordering::Less => {
                Some(NavEvent::EnterCategory(categories[index].clone()))
            }
            std::cmp::Ordering::Equal => Some(NavEvent::OpenAbout),
            std::cmp::Ordering::Greater => None,
        }
    }
}

impl StatefulWidget for CategoryScreen<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut items: Vec<ListItem> = self
            .categories
            .iter()
            .map(|category| {
                ListItem::new(Line::from(Span::styled(
                    category.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )))
            })
            .collect();
        items.push(ListItem::new(Line::from(Span::styled(
            self.strings.get(StringKey::AboutApp),
            self.theme.dimmed_style,
        ))));

        let list = List::new(items)
            .highlight_style(self.theme.selection_style)
            .highlight_symbol("▶ ");
        StatefulWidget::render(list, inner, buf, state);
    }
}
