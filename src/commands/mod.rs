//! CLI command implementations.
//!
//! - **indicator**: metrics and category fields for one indicator document
//! - **project**: aggregate a project document
//! - **category**: run one category calculator on two payload files
//! - **init**: write a default `.roimap.toml`

pub mod category;
pub mod indicator;
pub mod init;
pub mod project;

pub use category::{handle_category, CategoryConfig};
pub use indicator::{handle_indicator, IndicatorConfig};
pub use init::{init_config, init_config_in};
pub use project::{handle_project, ProjectConfig};

use crate::config::RoimapConfig;
use crate::core::Error;
use crate::io::{create_writer, OutputFormat, OutputWriter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// `--format` flag, then `[output] default_format`, then terminal.
pub(crate) fn resolve_format(flag: Option<OutputFormat>, config: &RoimapConfig) -> OutputFormat {
    flag.or_else(|| {
        config.default_format().and_then(|label| {
            let parsed = OutputFormat::parse(label);
            if parsed.is_none() {
                log::warn!("Unknown default_format '{}'; using terminal", label);
            }
            parsed
        })
    })
    .unwrap_or_default()
}

/// Writer for `--output`, or stdout.
pub(crate) fn output_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let out: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| Error::file_system("Failed to create output file", path, e))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout()),
    };
    Ok(create_writer(format, out))
}
