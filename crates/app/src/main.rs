use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    showdeck::shell::main_entry().await
}
