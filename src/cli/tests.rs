use crate::cli::Args;
use clap::Parser;
use std::{net::SocketAddr, str::FromStr};

pub fn fake_args() -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed to construct fake listen address."),
        allowed_origins: vec![String::from("http://localhost:3000")],
        max_body_bytes: 1_000,
        log_filter: String::from("geobounds_server=debug"),
    }
}

#[test]
fn test_defaults() {
    let args = Args::parse_from(["geobounds-server"]);

    assert_eq!(args.listen_address, SocketAddr::from(([0, 0, 0, 0], 3030)));
    assert_eq!(
        args.allowed_origins,
        vec!["http://127.0.0.1:3000", "http://localhost:3000"]
    );
    assert_eq!(args.max_body_bytes, 1_000_000);
    assert_eq!(args.log_filter, "geobounds_server=info");
}

#[test]
fn test_comma_separated_origins() {
    let args = Args::parse_from([
        "geobounds-server",
        "--allowed-origins",
        "https://a.example,https://b.example",
        "--max-body-bytes",
        "512",
    ]);

    assert_eq!(
        args.allowed_origins,
        vec!["https://a.example", "https://b.example"]
    );
    assert_eq!(args.max_body_bytes, 512);
}
