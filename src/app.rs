use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = Config::load(cli.config.as_deref())?;

        // Flags win over file and environment.
        if let Some(base_url) = cli.base_url.as_ref() {
            config.server.base_url.clone_from(base_url);
        }
        if let Some(mode) = cli.render {
            config.render.mode = mode;
        }
        if let Some(sequencing) = cli.sequencing {
            config.search.sequencing = sequencing;
        }

        Ok(Self {
            config,
            output_format: cli.output_format(),
        })
    }
}
