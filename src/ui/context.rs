use std::path::Path;

use fueleu::config::{ColorMode, Config, ConfigSource};

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub config: Config,
    pub source: ConfigSource,
}

impl UiContext {
    pub fn new(json: bool, config: Config, source: ConfigSource) -> Self {
        Self::from_caps(json, config, source, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        config: Config,
        source: ConfigSource,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = !json
            && match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            };

        Self {
            json,
            color,
            config,
            source,
        }
    }

    pub fn data_dir(&self) -> &Path {
        self.config.data_dir()
    }
}
