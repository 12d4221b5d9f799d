use std::io::IsTerminal;

use clap::{ValueEnum, builder::styling::Ansi256Color};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

pub enum Theme {
  Dark,
  Light,
}

/// Role-keyed colors for one background theme.
struct Palette {
  timestamp: Color,
  primary: Color,
  accent: Color,
  info: Color,
  success: Color,
  label: Color,
  value: Color,
}

const DARK: Palette = Palette {
  timestamp: Color::Rgb { r: 116, g: 148, b: 166 },
  primary: Color::Rgb { r: 203, g: 206, b: 222 },
  accent: Color::Rgb { r: 224, g: 134, b: 60 },
  info: Color::Rgb { r: 128, g: 174, b: 240 },
  success: Color::Rgb { r: 133, g: 190, b: 128 },
  label: Color::Rgb { r: 152, g: 186, b: 229 },
  value: Color::Rgb { r: 244, g: 222, b: 164 },
};

const LIGHT: Palette = Palette {
  timestamp: Color::Rgb { r: 84, g: 102, b: 114 },
  primary: Color::Rgb { r: 52, g: 58, b: 76 },
  accent: Color::Rgb { r: 187, g: 88, b: 26 },
  info: Color::Rgb { r: 38, g: 98, b: 172 },
  success: Color::Rgb { r: 36, g: 128, b: 74 },
  label: Color::Rgb { r: 74, g: 110, b: 165 },
  value: Color::Rgb { r: 146, g: 108, b: 44 },
};

pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn palette(&self) -> &'static Palette {
    match self.theme {
      Theme::Dark => &DARK,
      Theme::Light => &LIGHT,
    }
  }

  const fn pick(&self, color: Color) -> Color {
    if self.enabled { color } else { Color::Reset }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(self.palette().timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.pick(self.palette().primary)
  }

  pub const fn accent(&self) -> Color {
    self.pick(self.palette().accent)
  }

  pub const fn info(&self) -> Color {
    self.pick(self.palette().info)
  }

  pub const fn success(&self) -> Color {
    self.pick(self.palette().success)
  }

  pub const fn label(&self) -> Color {
    self.pick(self.palette().label)
  }

  pub const fn value(&self) -> Color {
    self.pick(self.palette().value)
  }

  const fn to_clap(color: Color) -> Option<clap::builder::styling::Color> {
    use clap::builder::styling::{Color as ClapColor, RgbColor};

    // The palettes only carry RGB values; anything else renders unstyled.
    match color {
      Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
      Color::AnsiValue(value) => Some(ClapColor::Ansi256(Ansi256Color(value))),
      _ => None,
    }
  }

  pub const fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{Style, Styles};

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(Self::to_clap(DARK.label)))
      .usage(Style::new().bold().fg_color(Self::to_clap(DARK.label)))
      .literal(Style::new().fg_color(Self::to_clap(DARK.success)))
      .placeholder(Style::new().fg_color(Self::to_clap(DARK.info)))
      .error(Style::new().bold().fg_color(Self::to_clap(DARK.accent)))
      .valid(Style::new().fg_color(Self::to_clap(DARK.success)))
      .invalid(Style::new().bold().fg_color(Self::to_clap(DARK.accent)))
  }
}

/// Bridges a crossterm color into comfy-table's own color enum.
pub fn comfy_color(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
    _ => ComfyColor::Reset,
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

fn detect_terminal_theme() -> Theme {
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(bg) = colorfgbg.split(';').next_back()
    && let Ok(bg_num) = bg.parse::<u8>()
  {
    return if bg_num >= 8 { Theme::Light } else { Theme::Dark };
  }

  if let Ok(term_program) = std::env::var("TERM_PROGRAM")
    && (term_program == "Apple_Terminal" || term_program == "iTerm.app")
    && let Ok(theme) = std::env::var("ITERM_PROFILE")
    && theme.to_lowercase().contains("light")
  {
    return Theme::Light;
  }

  Theme::Dark
}
