use mock_server::Fixtures;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let fixtures = match std::env::var("FIXTURES") {
        Ok(path) => {
            info!(path = %path, "loading fixtures");
            Fixtures::from_json(&std::fs::read_to_string(&path)?)?
        }
        Err(_) => Fixtures::sample(),
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "listening");
    mock_server::run_with(listener, fixtures).await?;
    Ok(())
}
