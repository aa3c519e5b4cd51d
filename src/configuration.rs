use config::{Config, File, FileFormat};
use std::path::PathBuf;

/// Retrive the configuration for the application.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    Config::builder()
        .add_source(File::new("configuration.yaml", FileFormat::Yaml))
        .build()?
        .try_deserialize()
}

#[derive(Debug, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub templates: TemplateSettings,
    pub assets: AssetSettings,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the shell document lives. The document is resolved against `dir` on
/// every render.
#[derive(Debug, serde::Deserialize)]
pub struct TemplateSettings {
    pub dir: PathBuf,
    pub document: String,
}

/// Directory served verbatim under the `/static` prefix.
#[derive(Debug, serde::Deserialize)]
pub struct AssetSettings {
    pub dir: PathBuf,
}
