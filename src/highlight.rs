use inksac::prelude::*;

use crate::core::config::ColorsConfig;

/// Maps a colorama-style color name (`"BLUE"`, `"LIGHTCYAN_EX"`) to a color.
pub fn color_by_name(name: &str) -> Option<Color> {
    let color = match name.to_ascii_uppercase().as_str() {
        "BLACK" => Color::Black,
        "RED" => Color::Red,
        "GREEN" => Color::Green,
        "YELLOW" => Color::Yellow,
        "BLUE" => Color::Blue,
        "MAGENTA" => Color::Magenta,
        "CYAN" => Color::Cyan,
        "WHITE" => Color::White,
        "LIGHTBLACK_EX" => Color::RGB(128, 128, 128),
        "LIGHTRED_EX" => Color::RGB(255, 85, 85),
        "LIGHTGREEN_EX" => Color::RGB(85, 255, 85),
        "LIGHTYELLOW_EX" => Color::RGB(255, 255, 85),
        "LIGHTBLUE_EX" => Color::RGB(85, 85, 255),
        "LIGHTMAGENTA_EX" => Color::RGB(255, 85, 255),
        "LIGHTCYAN_EX" => Color::RGB(85, 255, 255),
        "LIGHTWHITE_EX" => Color::RGB(255, 255, 255),
        _ => return None,
    };
    Some(color)
}

/// Configurable color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    AboutBackground,
    AboutForeground,
    LsDir,
    LsFile,
    User,
    Path,
}

impl ColorRole {
    fn configured(self, colors: &ColorsConfig) -> &str {
        match self {
            ColorRole::AboutBackground => &colors.about_bg,
            ColorRole::AboutForeground => &colors.about_fg,
            ColorRole::LsDir => &colors.ls_dir,
            ColorRole::LsFile => &colors.ls_file,
            ColorRole::User => &colors.user,
            ColorRole::Path => &colors.path,
        }
    }

    /// The configured name if it is a known color, else the built-in default.
    pub fn effective_name(self, colors: &ColorsConfig) -> String {
        let configured = self.configured(colors);
        if color_by_name(configured).is_some() {
            configured.to_string()
        } else {
            self.configured(&ColorsConfig::default()).to_string()
        }
    }

    pub fn color(self, colors: &ColorsConfig) -> Color {
        color_by_name(&self.effective_name(colors)).unwrap_or(Color::White)
    }
}

/// Applies styles to plain text, or leaves it alone on terminals without color.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    colored: bool,
}

impl Default for Painter {
    fn default() -> Self {
        Self::detect()
    }
}

impl Painter {
    pub fn detect() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            colored: !matches!(support, ColorSupport::NoColor),
        }
    }

    /// Never emits escape sequences.
    pub fn plain() -> Self {
        Self { colored: false }
    }

    pub fn is_plain(&self) -> bool {
        !self.colored
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        text.style(style).to_string()
    }

    pub fn foreground(&self, text: &str, color: Color) -> String {
        self.paint(text, Style::builder().foreground(color).build())
    }

    pub fn bold(&self, text: &str, color: Color) -> String {
        self.paint(text, Style::builder().foreground(color).bold().build())
    }

    pub fn on(&self, text: &str, foreground: Color, background: Color) -> String {
        self.paint(
            text,
            Style::builder()
                .foreground(foreground)
                .background(background)
                .build(),
        )
    }

    pub fn role(&self, text: &str, role: ColorRole, colors: &ColorsConfig) -> String {
        self.foreground(text, role.color(colors))
    }

    /// Green for success, red for anything else.
    pub fn exit_code(&self, code: i32) -> String {
        let text = format!("{} ", code);
        if code == 0 {
            self.foreground(&text, Color::Green)
        } else {
            self.foreground(&text, Color::Red)
        }
    }

    pub fn error(&self, label: &str, message: &str) -> String {
        format!(
            "{}{}",
            self.foreground(label, Color::Red),
            self.bold(message, Color::Red)
        )
    }

    pub fn header(&self, text: &str) -> String {
        self.on(text, Color::Black, Color::RGB(255, 255, 255))
    }
}
