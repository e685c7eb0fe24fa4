use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    rentahan::run().await
}
