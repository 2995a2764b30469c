//! Command-line argument parsing and validation

use clap::Parser;

/// Docker automation - menu-driven docker and kubectl lifecycle commands
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "dockauto")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Print the commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Container engine binary
    #[arg(long = "docker-bin", value_name = "PATH", default_value = "docker")]
    pub docker_bin: String,

    /// Orchestration binary
    #[arg(long = "kubectl-bin", value_name = "PATH", default_value = "kubectl")]
    pub kubectl_bin: String,

    /// Buildx builder used for multiplatform builds
    #[arg(long = "builder-name", default_value = "multiarch_builder")]
    pub builder_name: String,

    /// Target platforms for multiplatform builds
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "linux/amd64,linux/arm64,linux/arm/v7"
    )]
    pub platforms: Vec<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
