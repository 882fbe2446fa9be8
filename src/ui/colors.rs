use ratatui::style::{palette::tailwind, Color};

#[derive(Clone, Debug)]
pub struct Colors {
    pub buffer_bg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub selected_row_fg: Color,
    pub row_fg: Color,
    pub row_bg: Color,
    pub border_color: Color,
    pub scroll_bar_fg: Color,
    pub label: Color,
    pub input_editing: Color,
}

impl Colors {
    pub fn new(color: &tailwind::Palette, true_color_enabled: bool) -> Self {
        if true_color_enabled {
            Self {
                buffer_bg: tailwind::SLATE.c950,
                header_bg: color.c900,
                header_fg: tailwind::SLATE.c200,
                selected_row_fg: color.c400,
                row_fg: tailwind::SLATE.c200,
                row_bg: tailwind::SLATE.c950,
                border_color: color.c400,
                scroll_bar_fg: tailwind::SLATE.c800,
                label: color.c400,
                input_editing: tailwind::AMBER.c500,
            }
        } else {
            Self {
                buffer_bg: Color::Black,
                header_bg: color.c900,
                header_fg: Color::Black,
                selected_row_fg: color.c400,
                row_fg: Color::White,
                row_bg: Color::Black,
                border_color: color.c400,
                scroll_bar_fg: Color::Black,
                label: color.c400,
                input_editing: Color::LightYellow,
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Theme {
    Blue,
    Emerald,
    Amber,
    Rose,
}

const BASIC_CYAN_PALETTE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightCyan,
    c100: Color::LightCyan,
    c200: Color::LightCyan,
    c300: Color::LightCyan,
    c400: Color::LightCyan,
    c500: Color::Cyan,
    c600: Color::Cyan,
    c700: Color::Cyan,
    c800: Color::Cyan,
    c900: Color::Cyan,
    c950: Color::Cyan,
};

const BASIC_GREEN_PALETTE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightGreen,
    c100: Color::LightGreen,
    c200: Color::LightGreen,
    c300: Color::LightGreen,
    c400: Color::LightGreen,
    c500: Color::Green,
    c600: Color::Green,
    c700: Color::Green,
    c800: Color::Green,
    c900: Color::Green,
    c950: Color::Green,
};

const BASIC_YELLOW_PALETTE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightYellow,
    c100: Color::LightYellow,
    c200: Color::LightYellow,
    c300: Color::LightYellow,
    c400: Color::LightYellow,
    c500: Color::Yellow,
    c600: Color::Yellow,
    c700: Color::Yellow,
    c800: Color::Yellow,
    c900: Color::Yellow,
    c950: Color::Yellow,
};

const BASIC_MAGENTA_PALETTE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightMagenta,
    c100: Color::LightMagenta,
    c200: Color::LightMagenta,
    c300: Color::LightMagenta,
    c400: Color::LightMagenta,
    c500: Color::Magenta,
    c600: Color::Magenta,
    c700: Color::Magenta,
    c800: Color::Magenta,
    c900: Color::Magenta,
    c950: Color::Magenta,
};

impl Theme {
    pub fn from_string(value: &str) -> Theme {
        match value {
            "Blue" => Theme::Blue,
            "Emerald" => Theme::Emerald,
            "Amber" => Theme::Amber,
            "Rose" => Theme::Rose,
            _ => Theme::Blue,
        }
    }

    pub fn to_string(&self) -> String {
        match self {
            Theme::Blue => "Blue".to_string(),
            Theme::Emerald => "Emerald".to_string(),
            Theme::Amber => "Amber".to_string(),
            Theme::Rose => "Rose".to_string(),
        }
    }

    pub fn to_palette(&self, true_color_enabled: bool) -> &'static tailwind::Palette {
        if true_color_enabled {
            match self {
                Theme::Blue => &tailwind::BLUE,
                Theme::Emerald => &tailwind::EMERALD,
                Theme::Amber => &tailwind::AMBER,
                Theme::Rose => &tailwind::ROSE,
            }
        } else {
            match self {
                Theme::Blue => &BASIC_CYAN_PALETTE,
                Theme::Emerald => &BASIC_GREEN_PALETTE,
                Theme::Amber => &BASIC_YELLOW_PALETTE,
                Theme::Rose => &BASIC_MAGENTA_PALETTE,
            }
        }
    }
}
