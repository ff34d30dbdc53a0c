//! Print the OpenAPI document as JSON.
//!
//! The output is the same document the server publishes at
//! `/api-docs/openapi.json`.

use clap::Parser;
use users_api::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the users API OpenAPI document")]
struct Args {
    /// Emit single-line JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<(), serde_json::Error> {
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let json = if args.compact {
        doc.to_json()?
    } else {
        doc.to_pretty_json()?
    };
    println!("{json}");
    Ok(())
}
