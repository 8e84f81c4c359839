use clap::Parser;
use std::io::Read;

use cookie_scan::find;

mod telemetry;

#[derive(Debug, Parser)]
#[command(name = "cookie-scan", version, about = "Look up one value in a raw Cookie header")]
struct Args {
    /// Cookie name to look up
    name: String,

    /// Raw Cookie header; read from stdin when omitted
    #[arg(long)]
    header: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    telemetry::init_tracing()?;

    let header = match args.header {
        Some(h) => h,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            let len = buf.trim_end_matches(['\r', '\n']).len();
            buf.truncate(len);
            buf
        }
    };

    match find(&header, &args.name) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => {
            // grep convention: silent miss, nonzero exit
            tracing::debug!(name = %args.name, "cookie not found");
            std::process::exit(1);
        }
    }
}
