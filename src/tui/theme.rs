use ratatui::style::Color;

// Accent colors (amber family)
pub const AMBER: Color = Color::Rgb(217, 119, 6);             // #D97706
pub const AMBER_LIGHT: Color = Color::Rgb(252, 211, 77);      // #FCD34D
pub const AMBER_DARK: Color = Color::Rgb(146, 64, 14);        // #92400E

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
pub const BORDER_IDLE: Color = Color::Rgb(90, 90, 90);        // #5A5A5A
