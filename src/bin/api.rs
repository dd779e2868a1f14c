pub use send_lead::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    send_lead::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
