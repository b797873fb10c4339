use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 110, g: 200, b: 250 };
pub const ACCENT: Color = Color::TrueColor { r: 250, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 210, g: 210, b: 210 };

pub const IPV4_ADDR: Color = Color::TrueColor { r: 120, g: 220, b: 160 };
pub const MAC_ADDR: Color = Color::TrueColor { r: 200, g: 160, b: 250 };

pub const TRUSTED: Color = Color::Green;
pub const UNTRUSTED: Color = Color::Red;
