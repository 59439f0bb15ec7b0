use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x3f, 0x3f, 0x46);
pub const TEXT: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
pub const MUTED_TEXT: Color = Color::Rgb(0x71, 0x71, 0x7a);
pub const FOCUS_BORDER: Color = ACCENT;
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x27, 0x27, 0x2a);
