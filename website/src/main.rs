use std::path::Path;

use content::content_sources;
use rehber::{BuildOptions, BuildOutput, coronate, routes};

mod content;
mod layout;
mod routes;

use routes::*;

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    coronate(routes![Index, Guide, NotFound], content_sources(), build_options())
}

/// `REHBER_BASE_URL` turns on canonical links. Static files are read from this crate's `static/` wherever the build runs from.
fn build_options() -> BuildOptions {
    let base_url = std::env::var("REHBER_BASE_URL")
        .ok()
        .filter(|url| !url.is_empty());

    BuildOptions {
        base_url,
        static_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("static"),
        ..Default::default()
    }
}
