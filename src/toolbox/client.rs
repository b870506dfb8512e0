//! pdfToolbox client
//!
//! Builds command lines, runs them through an [`Executor`] and decides
//! whether each run succeeded.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use super::ToolboxError;
use super::args::Arg;
use super::constants::{exit_codes, flags};
use super::executor::{Executor, SystemExecutor};
use super::invocation::{InvocationError, failure_reason};
use super::parser::Parser;
use crate::model::{EnumerateProfilesResponse, ParseResult};

/// Options for [`Client::new`]
#[derive(Clone, Default)]
pub struct ClientOpts {
    /// Folder that local profile names are resolved against
    pub profile_folder: Option<PathBuf>,
    /// Passed to every run as `--cachefolder`
    pub cache_folder: Option<PathBuf>,
    /// Process executor (default: [`SystemExecutor`])
    pub executor: Option<Arc<dyn Executor>>,
}

impl ClientOpts {
    pub fn with_profile_folder(mut self, dir: impl Into<PathBuf>) -> Self {
        self.profile_folder = Some(dir.into());
        self
    }

    pub fn with_cache_folder(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_folder = Some(dir.into());
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn Executor>) -> Self {
        self.executor = Some(executor);
        self
    }
}

/// Client for one pdfToolbox installation
///
/// Each call runs one process and blocks until it exits. The client holds
/// no per-call state, so it can be shared between threads.
#[derive(Clone)]
pub struct Client {
    exe_path: PathBuf,
    profile_folder: Option<PathBuf>,
    cache_folder: Option<PathBuf>,
    executor: Arc<dyn Executor>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("exe_path", &self.exe_path)
            .field("profile_folder", &self.profile_folder)
            .field("cache_folder", &self.cache_folder)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client for the executable at `exe_path`
    ///
    /// Relative paths are made absolute against the current directory.
    pub fn new(exe_path: impl AsRef<Path>, opts: ClientOpts) -> Result<Self, ToolboxError> {
        let exe_path = std::path::absolute(exe_path)?;

        Ok(Self {
            exe_path,
            profile_folder: opts.profile_folder,
            cache_folder: opts.cache_folder,
            executor: opts
                .executor
                .unwrap_or_else(|| Arc::new(SystemExecutor) as Arc<dyn Executor>),
        })
    }

    /// Absolute path of the executable
    pub fn exe_path(&self) -> &Path {
        &self.exe_path
    }

    /// Run a profile (e.g. `myprofile.kfpx`) against the input files
    ///
    /// Returns the parsed output on success. A run with empty output, a
    /// fatal exit code (>= 100) or no exit code fails with
    /// [`ToolboxError::Invocation`].
    pub fn run_profile(
        &self,
        profile: &str,
        input_files: &[impl AsRef<Path>],
        args: &[Arg],
    ) -> Result<ParseResult, ToolboxError> {
        let command = self.build_profile_command(profile, input_files, args);
        self.run(command)
    }

    /// List the profiles in `profile_folder`
    ///
    /// The tool writes its JSON report to a temporary file, which is removed
    /// when this call returns.
    pub fn enumerate_profiles(
        &self,
        profile_folder: impl AsRef<Path>,
    ) -> Result<EnumerateProfilesResponse, ToolboxError> {
        let report = tempfile::Builder::new()
            .prefix("enumprofile")
            .suffix(".json")
            .tempfile()?;

        let mut command = self.base_args();
        command.extend([
            flags::FORMAT_JSON.to_string(),
            flags::ENUMERATE_PROFILES.to_string(),
            path_arg(profile_folder.as_ref()),
            path_arg(report.path()),
        ]);
        self.run(command)?;

        let reader = BufReader::new(File::open(report.path())?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Build the argument list for a profile run
    ///
    /// Order: client-wide options, `args`, the profile, then the input files.
    pub fn build_profile_command(
        &self,
        profile: &str,
        input_files: &[impl AsRef<Path>],
        args: &[Arg],
    ) -> Vec<String> {
        let mut command = self.base_args();
        command.extend(args.iter().map(Arg::to_arg_string));
        command.push(self.resolve_profile(profile));
        command.extend(input_files.iter().map(|f| path_arg(f.as_ref())));
        command
    }

    /// Resolve a profile against the profile folder if it is a local path
    fn resolve_profile(&self, profile: &str) -> String {
        match &self.profile_folder {
            Some(folder) if is_local(Path::new(profile)) => path_arg(&folder.join(profile)),
            _ => profile.to_string(),
        }
    }

    fn base_args(&self) -> Vec<String> {
        self.cache_folder
            .iter()
            .map(|dir| Arg::cache_folder(dir).to_arg_string())
            .collect()
    }

    /// Render the command line for logs and results
    fn command_line(&self, args: &[String]) -> String {
        std::iter::once(path_arg(&self.exe_path))
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run(&self, args: Vec<String>) -> Result<ParseResult, ToolboxError> {
        let command = self.command_line(&args);
        tracing::debug!(%command, "running pdfToolbox");

        let started_at = Instant::now();
        let captured = self.executor.execute(&self.exe_path, &args)?;
        let elapsed = started_at.elapsed();
        let exit_code = captured.exit_code.unwrap_or(exit_codes::ABNORMAL);
        tracing::debug!(exit_code, ?elapsed, "pdfToolbox finished");

        if let Some(reason) = failure_reason(&captured) {
            tracing::debug!(%command, %reason, "pdfToolbox run failed");
            return Err(InvocationError::extract(exit_code, &captured.output).into());
        }

        let mut result = Parser::parse_output(&captured.output);
        result.command = command;
        result.exit_code = exit_code;
        result.elapsed = elapsed;
        Ok(result)
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Non-empty relative path that never climbs above its base
///
/// `..` is allowed as long as it only undoes a preceding component, so
/// `sub/../p.kfpx` is local and `sub/../../p.kfpx` is not.
fn is_local(path: &Path) -> bool {
    if path.as_os_str().is_empty() {
        return false;
    }

    let mut depth = 0usize;
    for component in path.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    true
}
