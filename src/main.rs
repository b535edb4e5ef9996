use lambda_runtime::Error;
use samoyed::handler::echo_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Use Lambda runtime's built-in tracing subscriber for CloudWatch Logs
    lambda_runtime::tracing::init_default_subscriber();

    samoyed::runtime::run(echo_handler).await
}
