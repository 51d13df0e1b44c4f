use kestrel_logging::{log_error, LogCategory, LogLevel, Logger};
use kestrel_math::config::{self, PreconditionMode};
use serde::Deserialize;

const LOG_CAT : LogCategory = LogCategory::new("Settings");

/// Logging and math settings
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Settings {
    /// Maximum level that will be logged
    pub log_level          : LogLevel,
    /// Flush the logger after each message
    pub always_flush       : bool,
    /// Also write logs to the console
    pub log_to_console     : bool,
    /// How violated preconditions, like non-unit directions, are reported
    pub precondition_mode  : PreconditionMode,
    /// Max difference a squared length can be from 1 to still be unit length
    pub unit_epsilon       : f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Debug,
            always_flush: false,
            log_to_console: true,
            precondition_mode: PreconditionMode::Ignore,
            unit_epsilon: config::DEFAULT_UNIT_EPSILON,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SettingsFile {
    logging : LoggingSection,
    math    : MathSection,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct LoggingSection {
    level          : Option<String>,
    always_flush   : Option<bool>,
    log_to_console : Option<bool>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct MathSection {
    preconditions : Option<String>,
    unit_epsilon  : Option<f32>,
}

impl Settings {
    /// Load the settings from a toml document, keys that are not present keep their default value
    ///
    /// Level and precondition mode names are case-insensitive.
    ///
    /// ```toml
    /// [logging]
    /// level = "warning"
    /// always_flush = true
    /// log_to_console = false
    ///
    /// [math]
    /// preconditions = "warn"
    /// unit_epsilon = 1e-3
    /// ```
    pub fn load(toml: &str) -> Option<Settings> {
        let file = match toml::from_str::<SettingsFile>(toml) {
            Ok(file) => file,
            Err(err) => {
                log_error!(LOG_CAT, Self::load, "Failed to parse settings, err: {err}");
                return None;
            }
        };
        let mut settings = Settings::default();

        if let Some(level) = file.logging.level {
            settings.log_level = match LogLevel::from_name(&level.to_ascii_lowercase()) {
                Some(level) => level,
                None => {
                    log_error!(LOG_CAT, Self::load, "Unknown log level '{level}'");
                    return None;
                }
            };
        }
        if let Some(always_flush) = file.logging.always_flush {
            settings.always_flush = always_flush;
        }
        if let Some(log_to_console) = file.logging.log_to_console {
            settings.log_to_console = log_to_console;
        }

        if let Some(mode) = file.math.preconditions {
            settings.precondition_mode = match PreconditionMode::from_name(&mode) {
                Some(mode) => mode,
                None => {
                    log_error!(LOG_CAT, Self::load, "Unknown precondition mode '{mode}', expected 'ignore', 'warn' or 'panic'");
                    return None;
                }
            };
        }
        if let Some(epsilon) = file.math.unit_epsilon {
            if !epsilon.is_finite() || epsilon < 0.0 {
                log_error!(LOG_CAT, Self::load, "Unit epsilon needs to be a positive number, found {epsilon}");
                return None;
            }
            settings.unit_epsilon = epsilon;
        }

        Some(settings)
    }

    /// Push the settings into the logger and the math configuration
    pub fn apply(&self, logger: &Logger) {
        logger.set_max_level(self.log_level);
        logger.set_always_flush(self.always_flush);
        logger.set_log_to_console(self.log_to_console);

        config::set_precondition_mode(self.precondition_mode);
        config::set_unit_epsilon(self.unit_epsilon);
    }
}
