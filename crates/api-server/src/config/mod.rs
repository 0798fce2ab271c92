mod settings;

pub use settings::{
    AiConfig, ApiConfig, AuthConfig, CorsConfig, DatabaseConfig, LimitsConfig, ServerConfig,
    Settings, SettingsError,
};
