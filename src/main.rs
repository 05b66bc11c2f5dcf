use ojek::config::Config;
use ojek::engine::Engine;
use ojek::server::serve;

#[tokio::main]
async fn main() -> Result<(), ojek::error::Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let engine = Engine::from_config(&config)?;

    serve(engine, &config).await
}
