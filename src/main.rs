use anyhow::Result;
use clap::Parser;
use roimap::cli::{Cli, Commands};
use roimap::commands::{self, CategoryConfig, IndicatorConfig, ProjectConfig};
use roimap::config;
use roimap::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { force } => commands::init_config(force),
        Commands::Indicator {
            path,
            format,
            output,
            store,
        } => commands::handle_indicator(
            IndicatorConfig {
                path,
                format,
                output,
                store,
            },
            &config::load_config(),
        ),
        Commands::Project {
            path,
            project_id,
            format,
            output,
        } => commands::handle_project(
            ProjectConfig {
                path,
                project_id,
                format,
                output,
            },
            &config::load_config(),
        ),
        Commands::Category {
            category,
            baseline,
            post_change,
            format,
            output,
        } => commands::handle_category(
            CategoryConfig {
                category,
                baseline,
                post_change,
                format,
                output,
            },
            &config::load_config(),
        ),
    }
}
