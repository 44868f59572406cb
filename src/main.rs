#[tokio::main]
async fn main() -> reviewbot::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("reviewbot=info"),
    )
    .init();
    log::info!("Starting homework review bot");

    match reviewbot::run().await {
        Ok(()) => {
            log::info!("Bot shut down");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot cannot start: {}", e);
            Err(e)
        }
    }
}
