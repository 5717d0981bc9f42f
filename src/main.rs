#[tokio::main]
async fn main() {
    if let Err(e) = medassist_lib::run().await {
        tracing::error!("{e}");
        eprintln!("medassist: {e}");
        std::process::exit(1);
    }
}
