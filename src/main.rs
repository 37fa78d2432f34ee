use divio_logs::cli::{output, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse arguments and run the export
    if let Err(e) = Cli::run().await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
