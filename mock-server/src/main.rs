use env_logger::Env;
use log::info;
use mock_server::MockGateway;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("trace")).init();

    let port = MockGateway::default().listen(6510).await;
    info!("Mock gateway listening on 127.0.0.1:{port}");

    // Serving happens in background tasks; park the main task.
    std::future::pending::<()>().await;
}
