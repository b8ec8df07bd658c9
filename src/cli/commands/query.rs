//! lookup query - Run one search and print the results

use std::sync::Arc;

use clap::Args;
use parking_lot::Mutex;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, ResultJson, emit_json, emit_rows};
use crate::client::HttpBackend;
use crate::controller::{SearchController, SearchOutcome};
use crate::error::Result;
use crate::render::{RenderOptions, ResultsList};

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Search query, sent to the server verbatim
    pub query: String,
}

pub fn run(ctx: &AppContext, args: &QueryArgs) -> Result<()> {
    let backend = HttpBackend::from_config(&ctx.config.server)?;
    let list = Arc::new(Mutex::new(ResultsList::new()));
    let controller = SearchController::new(
        backend,
        Arc::clone(&list),
        RenderOptions::from_config(&ctx.config.render),
    );

    let results = match super::runtime()?.block_on(controller.search(&args.query)) {
        SearchOutcome::Rendered { results, .. } => results,
        SearchOutcome::Failed { error, .. } => return Err(error),
    };
    let rows = list.lock().rows().to_vec();

    match ctx.output_format {
        OutputFormat::Json => {
            let payload: Vec<ResultJson<'_>> = results
                .iter()
                .zip(&rows)
                .map(|(item, row)| ResultJson::new(item, row))
                .collect();
            emit_json(&payload)
        }
        OutputFormat::Human => {
            emit_rows(&rows, &ctx.config.server.base_url);
            Ok(())
        }
    }
}
