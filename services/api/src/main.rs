#[tokio::main]
async fn main() {
    if let Err(err) = jee_scorecard_api::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
