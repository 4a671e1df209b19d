use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Approximate RGB value of a terminal color.
#[must_use]
pub fn approximate_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (170, 0, 0),
        Color::Green => (0, 170, 0),
        Color::Yellow => (170, 85, 0),
        Color::Blue => (0, 0, 170),
        Color::Magenta => (170, 0, 170),
        Color::Cyan => (0, 170, 170),
        Color::Gray => (170, 170, 170),
        Color::DarkGray => (85, 85, 85),
        Color::LightRed => (255, 85, 85),
        Color::LightGreen => (85, 255, 85),
        Color::LightYellow => (255, 255, 85),
        Color::LightBlue => (85, 85, 255),
        Color::LightMagenta => (255, 85, 255),
        Color::LightCyan => (85, 255, 255),
        Color::Indexed(208) => (255, 135, 0),
        _ => (255, 255, 255),
    }
}

/// Keeps the hue of `color` but forces lightness and saturation.
#[must_use]
pub fn shade(color: Color, lightness: f32, saturation: f32) -> Color {
    let (r, g, b) = approximate_rgb(color);
    let mut hsl: Hsl = Rgb::new(r, g, b).to_hsl();
    hsl.l = lightness;
    hsl.s = saturation;
    let rgb = hsl.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
