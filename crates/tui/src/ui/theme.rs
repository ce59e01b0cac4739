use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface_bright: Color,
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub positive: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),
            surface_bright: Color::Rgb(31, 41, 55),
            text: Color::Rgb(243, 244, 246),
            text_muted: Color::Rgb(209, 213, 219),
            dim: Color::Rgb(156, 163, 175),
            accent: Color::Rgb(209, 213, 219),
            border: Color::Rgb(55, 65, 81),
            border_focused: Color::Rgb(107, 114, 128),
            positive: Color::Rgb(80, 160, 120),
            error: Color::Rgb(200, 80, 80),
        }
    }
}
