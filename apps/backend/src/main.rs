#[tokio::main]
async fn main() -> anyhow::Result<()> {
    workout_log_backend::run().await
}
