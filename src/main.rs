use static_shell::{configuration::get_configuration, telemetry, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().expect("Failed to read configuration.");

    telemetry::init_subscriber(telemetry::get_subscriber(
        "static-shell".to_string(),
        std::io::stdout,
    ));

    App::build(configuration)?.run_until_stopped().await?;

    Ok(())
}
