//! Publish Service Provider metadata over HTTP.
//!
//! ```shell
//! cargo run --bin server -- sp.json [--addr localhost:8080]
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Serve SAML 2.0 Service Provider metadata at `/saml/metadata`.
#[derive(Parser)]
#[command(name = "server")]
struct Args {
    /// JSON Service Provider configuration.
    config: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "localhost:8080")]
    addr: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    demos::init_tracing();

    let config = demos::load_config(&args.config)?;
    demos::server::serve(&args.addr, config).await
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn default_addr() {
        let args = Args::try_parse_from(["server", "sp.json"]).expect("should parse");
        assert_eq!(args.config, PathBuf::from("sp.json"));
        assert_eq!(args.addr, "localhost:8080");
    }

    #[test]
    fn addr() {
        let args = Args::try_parse_from(["server", "sp.json", "--addr", "0.0.0.0:9000"])
            .expect("should parse");
        assert_eq!(args.addr, "0.0.0.0:9000");
    }

    #[test]
    fn help_is_not_a_path() {
        let Err(err) = Args::try_parse_from(["server", "--help"]) else {
            panic!("should show help");
        };
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
