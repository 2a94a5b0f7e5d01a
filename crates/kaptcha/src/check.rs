//! `check`: resolve every setting and every component.

use kaptcha_config::Config;
use tracing::info;

use crate::{cli::CheckArgs, error::Result, source};

/// Resolve all settings; the first invalid value is returned as an error.
pub fn run(args: &CheckArgs) -> Result<()> {
    let config = Config::new(source::load(&args.source)?);
    let settings = config.settings()?;
    // Constructing the producer resolves and configures the whole pipeline.
    config.producer_impl()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        info!(
            width = settings.width,
            height = settings.height,
            "configuration ok"
        );
        println!("ok");
    }
    Ok(())
}
