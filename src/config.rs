use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use ratatui::style::Color;
use serde::{Deserialize, Deserializer};
use tracing::info;

// ─── Embedded Default ────────────────────────────────────────────────────
/// Baked into the binary at compile time. The app can never crash due to a
/// missing config file — this is always available as the base layer.
const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

// ─── CLI Arguments (override layer) ─────────────────────────────────────
/// chainline — a decorative click-stepped chain animation for the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "chainline", version, about, long_about = None)]
pub struct CliArgs {
    /// Path to a custom config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the default config to stdout and exit
    #[arg(long)]
    pub print_default_config: bool,

    /// Tick period in milliseconds (overrides config file)
    #[arg(short, long)]
    pub tick_rate: Option<u64>,

    /// Number of nodes in the chain (overrides config file)
    #[arg(short, long)]
    pub node_count: Option<usize>,

    /// Sub-strokes per node (overrides config file)
    #[arg(short, long)]
    pub regions: Option<u16>,

    /// Log file path (logging disabled if not specified)
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Log level filter (overrides config file)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Disable mouse support (tap with Space/Enter instead)
    #[arg(long, default_value_t = false)]
    pub no_mouse: bool,
}

// ─── TOML Structs ───────────────────────────────────────────────────────

/// Root configuration — parsed from TOML, then overridden by CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Mouse tap capture
    #[serde(default = "default_true")]
    pub mouse_support: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Tick period in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Number of nodes in the chain
    #[serde(default = "default_node_count")]
    pub node_count: usize,

    /// Sub-strokes per node; also divides the slow-phase easing rate
    #[serde(default = "default_region_count")]
    pub region_count: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(
        deserialize_with = "deserialize_color",
        default = "default_color_reset"
    )]
    pub bg: Color,

    #[serde(
        deserialize_with = "deserialize_color",
        default = "default_color_white"
    )]
    pub fg: Color,

    #[serde(
        deserialize_with = "deserialize_color",
        default = "default_color_darkgray"
    )]
    pub fg_dim: Color,

    #[serde(deserialize_with = "deserialize_color", default = "default_color_cyan")]
    pub stroke: Color,

    #[serde(
        deserialize_with = "deserialize_color",
        default = "default_color_magenta"
    )]
    pub stroke_active: Color,

    #[serde(
        deserialize_with = "deserialize_color",
        default = "default_color_darkgray"
    )]
    pub border: Color,
}

// ─── Defaults ───────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        // Parse the embedded TOML — this cannot fail since we control it
        toml::from_str(DEFAULT_CONFIG_TOML)
            .expect("BUG: embedded default_config.toml is invalid TOML")
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            mouse_support: true,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            node_count: 5,
            region_count: 3,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            fg_dim: Color::DarkGray,
            stroke: Color::Cyan,
            stroke_active: Color::Magenta,
            border: Color::DarkGray,
        }
    }
}

// ─── Color Deserializer ─────────────────────────────────────────────────

fn deserialize_color<'de, D>(deserializer: D) -> std::result::Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color: \"{s}\"")))
}

/// Parse a color string into a ratatui Color.
/// Supports: named colors, "reset", "#RRGGBB" hex.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();
    match s.as_str() {
        "reset" | "default" | "transparent" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Some(Color::DarkGray),
        "lightred" | "light_red" => Some(Color::LightRed),
        "lightgreen" | "light_green" => Some(Color::LightGreen),
        "lightyellow" | "light_yellow" => Some(Color::LightYellow),
        "lightblue" | "light_blue" => Some(Color::LightBlue),
        "lightmagenta" | "light_magenta" => Some(Color::LightMagenta),
        "lightcyan" | "light_cyan" => Some(Color::LightCyan),
        hex if hex.starts_with('#') && hex.len() == 7 => {
            let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
            let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
            let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

// ─── Serde Default Helpers ──────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".into()
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_node_count() -> usize {
    5
}
fn default_region_count() -> u16 {
    3
}
fn default_color_reset() -> Color {
    Color::Reset
}
fn default_color_white() -> Color {
    Color::White
}
fn default_color_darkgray() -> Color {
    Color::DarkGray
}
fn default_color_cyan() -> Color {
    Color::Cyan
}
fn default_color_magenta() -> Color {
    Color::Magenta
}

// ─── Path Resolution & Accessors ────────────────────────────────────────

impl Config {
    /// Standard config file path: ~/.config/chainline/config.toml
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chainline")
            .join("config.toml")
    }

    /// Tick period as a Duration
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.animation.tick_rate_ms)
    }

    /// Validate values that would otherwise fail deep inside the
    /// animation at runtime. Called once, before the terminal is touched.
    pub fn validate(&self) -> Result<()> {
        use color_eyre::eyre::eyre;
        if self.animation.node_count == 0 {
            return Err(eyre!("animation.node_count must be at least 1"));
        }
        if self.animation.region_count == 0 {
            return Err(eyre!("animation.region_count must be at least 1"));
        }
        if self.animation.tick_rate_ms == 0 {
            return Err(eyre!("animation.tick_rate_ms must be at least 1"));
        }
        Ok(())
    }
}

// ─── Bootloader ─────────────────────────────────────────────────────────

/// The single entry point for configuration. Called exactly once at startup.
///
/// 1. Resolve config file path (CLI override or default)
/// 2. If config file doesn't exist, create directory tree + write defaults
/// 3. Parse TOML from disk into Config
/// 4. Apply CLI overrides on top
/// 5. Validate
pub fn load(cli: &CliArgs) -> Result<Config> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // Bootstrap: ensure the file exists on disk
    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).wrap_err_with(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        std::fs::write(&config_path, DEFAULT_CONFIG_TOML).wrap_err_with(|| {
            format!(
                "Failed to write default config to {}",
                config_path.display()
            )
        })?;
        info!("Created default config at {}", config_path.display());
    }

    // Read and parse
    let toml_str = std::fs::read_to_string(&config_path)
        .wrap_err_with(|| format!("Failed to read config from {}", config_path.display()))?;

    let mut config: Config = toml::from_str(&toml_str).wrap_err_with(|| {
        format!(
            "Failed to parse config at {}.\n\
             Delete the file to regenerate defaults, or run:\n  \
             chainline --print-default-config > {:?}",
            config_path.display(),
            config_path
        )
    })?;

    // ── CLI overrides ───────────────────────────────────────────────
    if let Some(tick_rate) = cli.tick_rate {
        config.animation.tick_rate_ms = tick_rate;
    }
    if let Some(node_count) = cli.node_count {
        config.animation.node_count = node_count;
    }
    if let Some(regions) = cli.regions {
        config.animation.region_count = regions;
    }
    if let Some(ref level) = cli.log_level {
        config.general.log_level = level.clone();
    }
    if cli.no_mouse {
        config.general.mouse_support = false;
    }

    config.validate()?;
    Ok(config)
}

/// Returns the embedded default config TOML string.
pub fn default_config_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}
