use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBarStyle {
    pub background: Style,
    pub back: Style,
    pub title: Style,
    pub version: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            back: Style::default()
                .bg(theme.muted_background())
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            title: theme.title_style,
            version: Style::default()
                .bg(theme.muted_background())
                .fg(Color::White),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            back: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Top bar with the screen title and, below the root, a back marker.
pub struct HeaderBar<'a> {
    title: &'a str,
    app_name: &'a str,
    version: &'a str,
    can_navigate_back: bool,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(title: &'a str, app_name: &'a str, version: &'a str) -> Self {
        Self {
            title,
            app_name,
            version,
            can_navigate_back: false,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn can_navigate_back(mut self, can_navigate_back: bool) -> Self {
        self.can_navigate_back = can_navigate_back;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn left_spans(&self) -> Vec<Span<'a>> {
        let mut spans = Vec::with_capacity(3);
        if self.can_navigate_back {
            spans.push(Span::styled(" ← ", self.style.back));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {} ", self.title), self.style.title));
        spans
    }

    fn right_text(&self) -> String {
        format!(" {} v{} ", self.app_name, self.version)
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_line = Line::from(self.left_spans());
        let left_width = left_line.width() as u16;
        Paragraph::new(left_line).render(
            Rect::new(area.x, area.y, left_width.min(area.width), 1),
            buf,
        );

        let right = self.right_text();
        let right_width = right.width() as u16;
        if right_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(right_width);
            Paragraph::new(Span::styled(right, self.style.version))
                .render(Rect::new(right_x, area.y, right_width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_root_header_has_no_back_marker() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("City Guide", "cityguide", "0.1.0").render(area, &mut buf);

        let text = row_text(&buf, 40);
        assert!(text.starts_with(" City Guide "));
        assert!(!text.contains('←'));
        assert!(text.ends_with(" cityguide v0.1.0 "));
    }

    #[test]
    fn test_back_marker_before_title() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("Places", "cityguide", "0.1.0")
            .can_navigate_back(true)
            .render(area, &mut buf);

        assert!(row_text(&buf, 40).starts_with(" ←   Places "));
    }

    #[test]
    fn test_version_hidden_when_narrow() {
        let area = Rect::new(0, 0, 14, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("City Guide", "cityguide", "0.1.0").render(area, &mut buf);

        assert!(!row_text(&buf, 14).contains("cityguide"));
    }
}
