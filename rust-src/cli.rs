//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use crate::config::{default_chart_path, API_URL_ENV, DEFAULT_API_URL, DEFAULT_PROJECT_ID};


/// hotstats - progress statistics and charts for HOT Tasking Manager projects
#[derive(Parser)]
#[command(name = "hotstats")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tasking Manager API base URL
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Args)]
struct ProjectArg {
    /// Project identifier
    #[arg(default_value_t = DEFAULT_PROJECT_ID)]
    project_id: u64,
}


#[derive(Subcommand)]
enum Commands {
    /// Render the progress chart (displayed unless --output is given)
    Plot {
        #[command(flatten)]
        project: ProjectArg,

        /// Series to draw: mapped, cumulative_mapped, validated, cumulative_validated (default: all)
        #[arg(short, long)]
        which: Vec<String>,

        /// Draw a dashed line at the total task count
        #[arg(long)]
        total: bool,

        /// Output file path (.svg for SVG, anything else for PNG)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save to ~/.hotstats/ instead of displaying
        #[arg(long, conflicts_with = "output")]
        save: bool,

        /// Export as SVG instead of PNG (with --save)
        #[arg(long, requires = "save")]
        svg: bool,

        /// Open file after export
        #[arg(long)]
        open: bool,
    },

    /// Print the day-by-day progress table
    Progress {
        #[command(flatten)]
        project: ProjectArg,
    },

    /// Print the contributors table
    Contributors {
        #[command(flatten)]
        project: ProjectArg,
    },

    /// Print one attribute of the project record as JSON
    Info {
        /// Project identifier
        project_id: u64,

        /// Attribute key, e.g. percentMapped, or contributions / progress
        key: String,
    },
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let api_url = cli.api_url.as_str();

    match cli.command {
        Some(Commands::Plot { project, which, total, output, save, svg, open }) => {
            let output = match output {
                Some(path) => Some(path),
                None if save => Some(default_chart_path(project.project_id, svg)),
                None => None,
            };
            commands::plot::run(api_url, project.project_id, which, total, output, open)
        }
        Some(Commands::Progress { project }) => commands::progress::run(api_url, project.project_id),
        Some(Commands::Contributors { project }) => commands::contributors::run(api_url, project.project_id),
        Some(Commands::Info { project_id, key }) => commands::info::run(api_url, project_id, &key),
        None => commands::plot::run_default(api_url),
    }
}
