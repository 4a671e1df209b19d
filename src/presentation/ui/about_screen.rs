//! Static information screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::i18n::{StringKey, Strings};
use crate::presentation::theme::Theme;

pub struct AboutScreen<'a> {
    strings: Strings,
    version: &'a str,
    theme: &'a Theme,
}

impl<'a> AboutScreen<'a> {
    #[must_use]
    pub const fn new(strings: Strings, version: &'a str, theme: &'a Theme) -> Self {
        Self {
            strings,
            version,
            theme,
        }
    }
}

impl Widget for AboutScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut text = Text::from(Line::from(self.strings.get(StringKey::AboutHeading)).style(
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        text.push_line(Line::from(""));
        for line in self.strings.get(StringKey::AboutBody).lines() {
            text.push_line(Line::from(line));
        }
        text.push_line(Line::from(""));
        text.push_line(Line::from(format!("v{}", self.version)).style(self.theme.dimmed_style));

        #[allow(clippy::cast_possible_truncation)]
        let height = (text.height() as u16).min(inner.height);
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(center, buf);
    }
}
