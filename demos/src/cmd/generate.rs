//! Generate Service Provider metadata from a JSON configuration file.
//!
//! ```shell
//! cargo run --bin generate -- sp.json [--compact]
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Print SAML 2.0 Service Provider metadata.
#[derive(Parser)]
#[command(name = "generate")]
struct Args {
    /// JSON Service Provider configuration.
    config: PathBuf,

    /// Write the document on a single line.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    demos::init_tracing();

    let config = demos::load_config(&args.config)?;
    let xml = credibil_saml::metadata(&config)?.to_xml(!args.compact)?;
    println!("{xml}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn parse() {
        let args = Args::try_parse_from(["generate", "sp.json", "--compact"]).expect("should parse");
        assert_eq!(args.config, PathBuf::from("sp.json"));
        assert!(args.compact);

        let args = Args::try_parse_from(["generate", "sp.json"]).expect("should parse");
        assert!(!args.compact);
    }

    #[test]
    fn help_is_not_a_path() {
        let Err(err) = Args::try_parse_from(["generate", "--help"]) else {
            panic!("should show help");
        };
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn config_required() {
        assert!(Args::try_parse_from(["generate"]).is_err());
    }
}
