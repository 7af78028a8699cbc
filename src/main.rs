#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    if let Err(error) = showcase::server::run().await {
        tracing::error!(%error, "portfolio host failed");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    showcase::frontend::run();
}
