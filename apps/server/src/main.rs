#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lexiflow_server::run().await
}
