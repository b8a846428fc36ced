//! Trigger handling for hosts that re-run on editor events

use std::path::PathBuf;

use toolenv_fs::AsdfPath;

use crate::Result;
use crate::environment::EnvironmentState;
use crate::host::Host;
use crate::orchestrator::Orchestrator;
use crate::report::RunReport;

/// Events that may cause a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Plugin or program start
    Startup,
    /// Explicit "reload environment" command
    Manual,
    /// A file was saved
    Saved(PathBuf),
    /// A view was activated in the given window
    Activated { window_id: Option<u64> },
}

/// Decides which triggers run the orchestrator.
///
/// Handling takes `&mut self`, so a session never runs twice at once. Hosts
/// that share one across threads wrap it in a `Mutex`.
#[derive(Debug)]
pub struct Session {
    orchestrator: Orchestrator,
    last_window: Option<u64>,
}

impl Session {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            last_window: None,
        }
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Whether `trigger` should cause a run. Records window activations.
    pub fn should_run(&mut self, trigger: &Trigger) -> bool {
        match trigger {
            Trigger::Startup | Trigger::Manual => true,
            Trigger::Saved(path) => {
                self.orchestrator.settings().auto_reload_on_save
                    && path
                        .to_string_lossy()
                        .ends_with(AsdfPath::ToolVersions.as_str())
            }
            Trigger::Activated { window_id } => {
                let changed = self
                    .last_window
                    .is_some_and(|last| *window_id != Some(last));
                if window_id.is_some() {
                    self.last_window = *window_id;
                }
                changed
            }
        }
    }

    /// Run the orchestrator if `trigger` calls for it.
    ///
    /// An activation without a window id takes the host's.
    pub fn handle(
        &mut self,
        trigger: &Trigger,
        host: &dyn Host,
        base: &EnvironmentState,
    ) -> Option<Result<RunReport>> {
        let run = match trigger {
            Trigger::Activated { window_id: None } => self.should_run(&Trigger::Activated {
                window_id: host.window_id(),
            }),
            other => self.should_run(other),
        };
        if !run {
            return None;
        }
        tracing::debug!(?trigger, "Reloading environment");
        Some(self.orchestrator.run(host, base))
    }
}
