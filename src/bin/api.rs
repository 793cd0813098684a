pub use emote_relay::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    emote_relay::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
