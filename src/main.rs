use clap::Parser;

mod cli;
mod health;
mod http;
mod logging;
mod points;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = cli::Args::parse();
    logging::init(&args);
    let router = http::router::new(&args);
    let listener = tokio::net::TcpListener::bind(args.listen_address).await?;
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router).await
}
