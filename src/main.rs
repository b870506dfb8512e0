//! pdftoolbox-run - command-line front end
//!
//! Lists profiles or runs one, printing the result as JSON.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};

use pdftoolbox::toolbox::{Arg, Client, ClientOpts};

/// Run pdfToolbox profiles and print structured results
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the pdfToolbox executable
    #[arg(long, env = "PDFTOOLBOX_EXE")]
    exe: PathBuf,

    /// Folder that relative profile names are resolved against
    #[arg(long, global = true)]
    profile_folder: Option<PathBuf>,

    /// Cache folder passed to pdfToolbox
    #[arg(long, global = true)]
    cache_folder: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the profiles in a folder
    Profiles {
        /// Folder containing .kfpx profiles
        folder: PathBuf,
    },

    /// Run a profile against input files
    Run {
        /// Profile file (.kfpx)
        profile: String,

        /// Input PDF files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Profile variable, as name=value (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        variables: Vec<String>,

        /// Timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Folder receiving output files
        #[arg(long)]
        output_folder: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = ClientOpts {
        profile_folder: cli.profile_folder,
        cache_folder: cli.cache_folder,
        ..Default::default()
    };
    let client = Client::new(&cli.exe, opts)?;

    let json = match cli.command {
        Commands::Profiles { folder } => {
            serde_json::to_string_pretty(&client.enumerate_profiles(folder)?)?
        }
        Commands::Run {
            profile,
            inputs,
            variables,
            timeout,
            output_folder,
        } => {
            let args = build_args(&variables, timeout, output_folder)?;
            let result = client.run_profile(&profile, &inputs, &args)?;
            tracing::info!(
                steps = result.steps.len(),
                outputs = result.output_file_paths().count(),
                exit_code = result.exit_code,
                "profile finished"
            );
            serde_json::to_string_pretty(&result)?
        }
    };

    println!("{json}");
    Ok(())
}

/// Turn command-line options into pdfToolbox arguments
fn build_args(
    variables: &[String],
    timeout: Option<u64>,
    output_folder: Option<PathBuf>,
) -> Result<Vec<Arg>> {
    let mut args = Vec::new();

    for variable in variables {
        let (name, value) = variable
            .split_once('=')
            .ok_or_else(|| eyre!("expected NAME=VALUE, got {variable:?}"))?;
        args.push(Arg::set_variable(name, value));
    }
    if let Some(secs) = timeout {
        args.push(Arg::timeout(Duration::from_secs(secs)));
    }
    if let Some(dir) = output_folder {
        args.push(Arg::output_folder(dir));
    }

    Ok(args)
}
