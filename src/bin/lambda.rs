use static_shell::{configuration::get_configuration, serverless, telemetry};

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let configuration = get_configuration()?;

    telemetry::init_subscriber(telemetry::get_subscriber(
        "static-shell".to_string(),
        std::io::stdout,
    ));

    serverless::run(configuration).await
}
