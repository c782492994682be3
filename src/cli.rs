use clap::{ArgAction, Parser};

use project_hierarchy::application::dto::ImageFormat;
use project_hierarchy::config::CliOverrides;

/// Document the project hierarchy of .NET solutions
#[derive(Parser, Debug)]
#[command(name = "project-hierarchy")]
#[command(version)]
#[command(
    about = "Generate Markdown, DGML, GraphML and Graphviz reports describing the project hierarchy of .NET solutions",
    long_about = None
)]
pub struct Args {
    /// Directory to scan (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Write a ReadMe with the project hierarchy next to each project file
    #[arg(short = 'H', long)]
    pub project_hierarchy: bool,

    /// Do not write a ReadMe for each solution
    #[arg(long)]
    pub no_solution_readme: bool,

    /// Write a directed graph (.dgml) next to each project file
    #[arg(short, long)]
    pub directed_graph: bool,

    /// Write a GraphML file next to each project file
    #[arg(short, long)]
    pub graphml: bool,

    /// Render an image of each project's hierarchy with Graphviz
    #[arg(short, long)]
    pub image: bool,

    /// Image format passed to Graphviz (e.g. png, svg, pdf)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ImageFormat>,

    /// Path to a config file (defaults to project-hierarchy.config.yml in the scan directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the directory structure instead of generating reports
    #[arg(long)]
    pub directory_tree: bool,

    /// List file names in the directory structure
    #[arg(long, requires = "directory_tree")]
    pub include_filenames: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Report selections made on the command line
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            project_hierarchy: self.project_hierarchy,
            no_solution_readme: self.no_solution_readme,
            directed_graph: self.directed_graph,
            graphml: self.graphml,
            image: self.image,
            image_format: self.format,
        }
    }

    /// Default tracing filter for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
