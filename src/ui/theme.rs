use ratatui::style::{Color, Modifier, Style};

// ── Helper: build an Rgb Color from a hex literal ──────────────────────

const fn rgb(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >>  8) & 0xFF) as u8,
        ( hex        & 0xFF) as u8,
    )
}

// ── Theme variant selector ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeVariant {
    Default,
    Dracula,
    Gruvbox,
    Nord,
}

impl ThemeVariant {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::Dracula,
            "gruvbox" => Self::Gruvbox,
            "nord"    => Self::Nord,
            _         => Self::Default,
        }
    }
}

// ── Theme struct ────────────────────────────────────────────────────────

/// Styles for the two report tables. Column styles follow the table layout:
/// name, quota, used, available, mountpoint, type.
#[derive(Clone)]
pub struct Theme {
    pub border:     Style,
    pub title:      Style,
    pub header:     Style,
    pub name:       Style,
    pub quota:      Style,
    pub used:       Style,
    pub avail:      Style,
    pub mountpoint: Style,
    pub kind:       Style,
}

impl Theme {
    pub fn for_variant(v: ThemeVariant) -> Self {
        match v {
            ThemeVariant::Default => Self::default(),
            ThemeVariant::Dracula => Self::dracula(),
            ThemeVariant::Gruvbox => Self::gruvbox(),
            ThemeVariant::Nord    => Self::nord(),
        }
    }

    pub fn default() -> Self {
        Self {
            border:     Style::default().fg(Color::DarkGray),
            title:      Style::default().add_modifier(Modifier::BOLD | Modifier::ITALIC),
            header:     Style::default().add_modifier(Modifier::BOLD),
            name:       Style::default().fg(Color::Cyan),
            quota:      Style::default().fg(Color::Magenta),
            used:       Style::default().fg(Color::Green),
            avail:      Style::default().fg(Color::Yellow),
            mountpoint: Style::default().fg(Color::Blue),
            kind:       Style::default().fg(Color::Red),
        }
    }

    fn dracula() -> Self {
        // https://draculatheme.com/
        Self {
            border:     Style::default().fg(rgb(0x6272a4)),
            title:      Style::default().fg(rgb(0xf8f8f2)).add_modifier(Modifier::BOLD),
            header:     Style::default().fg(rgb(0xf8f8f2)).add_modifier(Modifier::BOLD),
            name:       Style::default().fg(rgb(0x8be9fd)),
            quota:      Style::default().fg(rgb(0xff79c6)),
            used:       Style::default().fg(rgb(0x50fa7b)),
            avail:      Style::default().fg(rgb(0xf1fa8c)),
            mountpoint: Style::default().fg(rgb(0xbd93f9)),
            kind:       Style::default().fg(rgb(0xff5555)),
        }
    }

    fn gruvbox() -> Self {
        // https://github.com/morhetz/gruvbox
        Self {
            border:     Style::default().fg(rgb(0x504945)),
            title:      Style::default().fg(rgb(0xebdbb2)).add_modifier(Modifier::BOLD),
            header:     Style::default().fg(rgb(0xebdbb2)).add_modifier(Modifier::BOLD),
            name:       Style::default().fg(rgb(0x8ec07c)),
            quota:      Style::default().fg(rgb(0xd3869b)),
            used:       Style::default().fg(rgb(0xb8bb26)),
            avail:      Style::default().fg(rgb(0xfabd2f)),
            mountpoint: Style::default().fg(rgb(0x83a598)),
            kind:       Style::default().fg(rgb(0xfb4934)),
        }
    }

    fn nord() -> Self {
        // https://www.nordtheme.com/
        Self {
            border:     Style::default().fg(rgb(0x4c566a)),
            title:      Style::default().fg(rgb(0xeceff4)).add_modifier(Modifier::BOLD),
            header:     Style::default().fg(rgb(0xeceff4)).add_modifier(Modifier::BOLD),
            name:       Style::default().fg(rgb(0x88c0d0)),
            quota:      Style::default().fg(rgb(0xb48ead)),
            used:       Style::default().fg(rgb(0xa3be8c)),
            avail:      Style::default().fg(rgb(0xebcb8b)),
            mountpoint: Style::default().fg(rgb(0x81a1c1)),
            kind:       Style::default().fg(rgb(0xbf616a)),
        }
    }
}
