//! Host state for a single CLI invocation
//!
//! The terminal plays the editor's role: `--file` is the active file and
//! `--folder` the open folders, with the current directory as the fallback
//! folder.

use std::path::{Path, PathBuf};

use toolenv_core::{
    AsdfLayout, EnvironmentState, Orchestrator, ResolutionContext, RunReport, Settings,
    SettingsLoader, StaticHost,
};
use toolenv_fs::NormalizedPath;

use crate::cli::Cli;
use crate::error::Result;

/// Everything a command needs to run the core.
#[derive(Debug)]
pub struct CliContext {
    pub orchestrator: Orchestrator,
    pub host: StaticHost,
    /// The inherited process environment
    pub base: EnvironmentState,
}

impl CliContext {
    /// Build the context from parsed arguments and the current directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings = load_settings(cli.settings.as_deref())?;
        let cwd = std::env::current_dir()?;
        Self::new(
            cli.home.as_deref(),
            settings,
            cli.file.clone(),
            cli.folders.clone(),
            &cwd,
        )
    }

    pub fn new(
        home: Option<&Path>,
        settings: Settings,
        file: Option<PathBuf>,
        folders: Vec<PathBuf>,
        cwd: &Path,
    ) -> Result<Self> {
        let layout = match home {
            Some(home) => AsdfLayout::new(home),
            None => AsdfLayout::detect()?,
        };

        let folders = if folders.is_empty() {
            vec![cwd.to_path_buf()]
        } else {
            folders.into_iter().map(|f| cwd.join(f)).collect()
        };
        let host = StaticHost {
            active_file: file.map(|f| cwd.join(f)),
            folders,
            window_id: None,
        };

        Ok(Self {
            orchestrator: Orchestrator::new(layout, settings),
            host,
            base: EnvironmentState::from_process(),
        })
    }

    /// Replace the inherited environment.
    pub fn with_base(mut self, base: EnvironmentState) -> Self {
        self.base = base;
        self
    }

    pub fn settings(&self) -> &Settings {
        self.orchestrator.settings()
    }

    /// Run orchestration once.
    pub fn run(&self) -> Result<RunReport> {
        Ok(self.orchestrator.run(&self.host, &self.base)?)
    }

    /// Resolution inputs for commands that only resolve.
    pub fn resolution_context(&self) -> ResolutionContext {
        ResolutionContext::from_host(&self.host, self.orchestrator.layout().clone())
    }
}

/// Load an explicit settings file, or the default one when none is given.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Ok(Settings::load(&NormalizedPath::new(path))?),
        None => Ok(SettingsLoader::new().load()?),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use toolenv_test_utils::TestAsdf;

    /// A context over `asdf` with `folder` (relative to home) open.
    pub fn context(asdf: &TestAsdf, folder: &str) -> CliContext {
        let cwd = asdf.mkdir(folder);
        CliContext::new(
            Some(asdf.home()),
            Settings::default(),
            None,
            Vec::new(),
            &cwd,
        )
        .unwrap()
        .with_base(EnvironmentState::from_vars([("PATH", "/usr/bin")]))
    }
}
