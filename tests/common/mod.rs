use derive_getters::Getters;
use once_cell::sync::Lazy;
use static_shell::{
    configuration::{ApplicationSettings, AssetSettings, Settings, TemplateSettings},
    telemetry::{get_subscriber, init_subscriber},
    App,
};
use std::{net::TcpListener, path::PathBuf};
use tempfile::TempDir;

pub const SHELL_DOCUMENT: &str = "<!DOCTYPE html>\n<html>\n<head><title>Shell</title></head>\n<body><div id=\"app\"></div><script src=\"/static/js/script.js\"></script></body>\n</html>\n";

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber("test".into(), std::io::stdout));
    } else {
        init_subscriber(get_subscriber("test".into(), std::io::sink));
    };
});

#[derive(Debug, Getters)]
pub struct TestApp {
    address: String,
    content_root: TempDir,
}

impl TestApp {
    pub fn shell_document_path(&self) -> PathBuf {
        self.content_root.path().join("templates/index.html")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.content_root.path().join("static")
    }
}

/// Spawn a instance of the app on a random port, serving a disposable copy of
/// the shell document.
pub async fn spawn_app() -> anyhow::Result<TestApp> {
    Lazy::force(&TRACING);

    let content_root = TempDir::new()?;
    let templates_dir = content_root.path().join("templates");
    let assets_dir = content_root.path().join("static");
    std::fs::create_dir(&templates_dir)?;
    std::fs::create_dir(&assets_dir)?;
    std::fs::write(templates_dir.join("index.html"), SHELL_DOCUMENT)?;

    let configuration = Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        templates: TemplateSettings {
            dir: templates_dir,
            document: "index.html".into(),
        },
        assets: AssetSettings { dir: assets_dir },
    };

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind address");
    let address = format!("http://{}", listener.local_addr()?);
    let app = App::from_listener(listener, configuration)?;
    let _ = tokio::spawn(app.run_until_stopped());

    Ok(TestApp {
        address,
        content_root,
    })
}
