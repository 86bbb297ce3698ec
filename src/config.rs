use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Theme active when the terminal view opens
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Jump straight to the terminal view
    #[serde(default)]
    pub skip_intro: bool,

    #[serde(default)]
    pub terminal: TerminalConfig,

    #[serde(default)]
    pub intro: IntroConfig,

    #[serde(default)]
    pub physics: PhysicsConfig,

    #[serde(default)]
    pub profile: Profile,
}

fn default_theme_name() -> String {
    "default".to_string()
}

/// Timing of the simulated terminal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Delay between two revealed characters
    #[serde(default = "default_typing_delay")]
    pub typing_delay_ms: u64,

    /// Delay before `clear` wipes the history (exit animation)
    #[serde(default = "default_clear_delay")]
    pub clear_delay_ms: u64,

    /// Full on+off period of the input caret is twice this value
    #[serde(default = "default_caret_blink")]
    pub caret_blink_ms: u64,
}

fn default_typing_delay() -> u64 {
    20
}

fn default_clear_delay() -> u64 {
    500
}

fn default_caret_blink() -> u64 {
    200
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay(),
            clear_delay_ms: default_clear_delay(),
            caret_blink_ms: default_caret_blink(),
        }
    }
}

/// Timeline of the splash screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroConfig {
    /// Offsets from activation at which phases 1 through 6 begin
    #[serde(default = "default_phase_offsets")]
    pub phase_offsets_ms: [u64; 6],

    #[serde(default = "default_title_char")]
    pub title_char_ms: u64,

    #[serde(default = "default_subtitle_char")]
    pub subtitle_char_ms: u64,

    /// Pause between the title and the subtitle
    #[serde(default = "default_line_pause")]
    pub line_pause_ms: u64,

    #[serde(default = "default_rain_interval")]
    pub rain_interval_ms: u64,
}

fn default_phase_offsets() -> [u64; 6] {
    [300, 800, 1200, 3000, 4500, 6000]
}

fn default_title_char() -> u64 {
    80
}

fn default_subtitle_char() -> u64 {
    120
}

fn default_line_pause() -> u64 {
    500
}

fn default_rain_interval() -> u64 {
    50
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            phase_offsets_ms: default_phase_offsets(),
            title_char_ms: default_title_char(),
            subtitle_char_ms: default_subtitle_char(),
            line_pause_ms: default_line_pause(),
            rain_interval_ms: default_rain_interval(),
        }
    }
}

/// Constants of the ID-card pendulum
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f64,
    pub length: f64,
    /// Velocity multiplier applied every frame; must be in (0, 1)
    pub damping: f64,
    /// Largest allowed swing, in radians
    pub max_angle: f64,
    pub min_velocity: f64,
    /// Angular velocity (radians per frame) of an impulse of strength 1.0
    pub impulse_scale: f64,
    /// Strength of a click on the card
    pub click_impulse: f64,
    /// Strength of the nudge given when the terminal view opens
    pub nudge_impulse: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            length: 120.0,
            damping: 0.985,
            max_angle: 0.6,
            min_velocity: 0.001,
            impulse_scale: 0.08,
            click_impulse: 1.2,
            nudge_impulse: 0.9,
        }
    }
}

/// Who the portfolio belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub subtitle: String,
    /// User part of the shell prompt
    pub handle: String,
    pub card_title: String,
    pub department: String,
    pub enrollment: String,
    pub signature: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Yash Gandhi".to_string(),
            subtitle: "FULL-STACK DEVELOPER".to_string(),
            handle: "Yash".to_string(),
            card_title: "STUDENT ID".to_string(),
            department: "Computer Science & engineering".to_string(),
            enrollment: "2301201713".to_string(),
            signature: "yash".to_string(),
        }
    }
}

impl Profile {
    /// Shell prompt shown before every command
    pub fn prompt(&self) -> String {
        format!("{}@portfolio:~/desktop$ ", self.handle)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            skip_intro: false,
            terminal: TerminalConfig::default(),
            intro: IntroConfig::default(),
            physics: PhysicsConfig::default(),
            profile: Profile::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terminal.typing_delay_ms == 0 {
            return Err(ConfigError::ValidationError(
                "typing_delay_ms must be greater than 0".to_string(),
            ));
        }

        if self.terminal.caret_blink_ms == 0 {
            return Err(ConfigError::ValidationError(
                "caret_blink_ms must be greater than 0".to_string(),
            ));
        }

        if self.intro.rain_interval_ms == 0 {
            return Err(ConfigError::ValidationError(
                "rain_interval_ms must be greater than 0".to_string(),
            ));
        }

        let offsets = &self.intro.phase_offsets_ms;
        if offsets.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::ValidationError(
                "phase_offsets_ms must be non-decreasing".to_string(),
            ));
        }

        let physics = &self.physics;
        let finite = [
            ("gravity", physics.gravity),
            ("length", physics.length),
            ("max_angle", physics.max_angle),
            ("min_velocity", physics.min_velocity),
            ("impulse_scale", physics.impulse_scale),
            ("click_impulse", physics.click_impulse),
            ("nudge_impulse", physics.nudge_impulse),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "{name} must be a finite number"
            )));
        }
        if !(physics.damping > 0.0 && physics.damping < 1.0) {
            return Err(ConfigError::ValidationError(
                "damping must be between 0 and 1 (exclusive)".to_string(),
            ));
        }
        if physics.length <= 0.0 {
            return Err(ConfigError::ValidationError(
                "pendulum length must be positive".to_string(),
            ));
        }
        if physics.max_angle <= 0.0 {
            return Err(ConfigError::ValidationError(
                "max_angle must be positive".to_string(),
            ));
        }
        if physics.gravity <= 0.0 {
            return Err(ConfigError::ValidationError(
                "gravity must be positive".to_string(),
            ));
        }
        // The card only comes to rest once |velocity| drops below this
        if physics.min_velocity <= 0.0 {
            return Err(ConfigError::ValidationError(
                "min_velocity must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
