//! lookup tui - Interactive search

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext) -> Result<()> {
    let runtime = super::runtime()?;
    let _guard = runtime.enter();
    crate::tui::run(&ctx.config)
}
