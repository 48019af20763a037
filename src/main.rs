#[tokio::main]
async fn main() -> anyhow::Result<()> {
    guitar_specs::run_server().await
}
