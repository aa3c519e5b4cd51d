use crate::{configuration::Settings, App};
use lambda_http::Error;

/// Run the application under the AWS Lambda runtime.
///
/// The router is built once per execution environment; the runtime then
/// drives it once per invocation. The service is the same router the
/// long-running server uses, so per-invocation behaviour matches the
/// server's.
pub async fn run(configuration: Settings) -> Result<(), Error> {
    lambda_http::run(App::router::<lambda_http::Body>(&configuration)).await
}
