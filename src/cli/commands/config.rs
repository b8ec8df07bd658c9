//! lookup config - Show the effective configuration

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_json};
use crate::error::Result;

pub fn run(ctx: &AppContext) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => emit_json(&ctx.config),
        OutputFormat::Human => {
            print!("{}", ctx.config.to_toml()?);
            Ok(())
        }
    }
}
