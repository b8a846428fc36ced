//! The top-level environment construction procedure

use crate::builder::{ApplyOutcome, ToolEnvironmentBuilder};
use crate::environment::{BASELINE_PATH, EnvironmentState};
use crate::host::Host;
use crate::layout::AsdfLayout;
use crate::report::{ConfiguredTool, FollowUp, RunReport, SkippedTool};
use crate::resolver::{ResolutionContext, VersionResolver};
use crate::settings::Settings;
use crate::verify::verify_tools;
use crate::{Error, Result};

/// Builds the environment for every installed tool.
///
/// A run:
/// 1. Fails with [`Error::RootNotFound`] when the asdf root is missing
/// 2. Resets PATH to [`BASELINE_PATH`]
/// 3. Prepends `<root>/shims`, then `<root>/bin`
/// 4. Sets `ASDF_DIR` and `ASDF_DATA_DIR`
/// 5. Resolves and applies each tool under `<root>/installs`
///
/// Per-tool problems never stop the run; they are recorded as skipped.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    layout: AsdfLayout,
    settings: Settings,
}

impl Orchestrator {
    pub fn new(layout: AsdfLayout, settings: Settings) -> Self {
        Self { layout, settings }
    }

    pub fn layout(&self) -> &AsdfLayout {
        &self.layout
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run against the host's current state, starting from `base`.
    ///
    /// `base` is only read; when the root is missing nothing is produced
    /// and the caller keeps its previous environment.
    pub fn run(&self, host: &dyn Host, base: &EnvironmentState) -> Result<RunReport> {
        let root = self.layout.root();
        if !self.layout.exists() {
            tracing::error!(%root, "asdf not found");
            return Err(Error::RootNotFound {
                path: root.to_native(),
            });
        }
        tracing::info!(%root, "Setting up environment");

        let mut env = base.clone();
        env.reset_path(BASELINE_PATH);
        for dir in [self.layout.shims(), self.layout.bin()] {
            if dir.exists() {
                env.prepend_path(dir.to_native().to_string_lossy());
            }
        }

        let root_native = root.to_native().to_string_lossy().to_string();
        let data_dir = base
            .var("ASDF_DATA_DIR")
            .map(String::from)
            .unwrap_or_else(|| root_native.clone());
        env.set_var("ASDF_DIR", root_native);
        env.set_var("ASDF_DATA_DIR", data_dir);

        let tools = self.layout.installed_tools().unwrap_or_else(|e| {
            tracing::warn!("Could not list installed tools: {}", e);
            Vec::new()
        });
        tracing::debug!(?tools, "Installed tools");

        let context = ResolutionContext::from_host(host, self.layout.clone());
        let resolver = VersionResolver::new(&context);
        let builder = ToolEnvironmentBuilder::new(&self.layout);

        let mut configured = Vec::new();
        let mut skipped = Vec::new();
        for tool in tools {
            let Some(resolved) = resolver.resolve(&tool) else {
                skipped.push(SkippedTool::Unresolved { tool });
                continue;
            };
            tracing::debug!(tool = %tool, version = %resolved.version, "Setting up tool");
            match builder.apply(&tool, &resolved.version, &mut env) {
                ApplyOutcome::Configured { actions } => configured.push(ConfiguredTool {
                    tool,
                    version: resolved.version,
                    source: resolved.source,
                    actions,
                }),
                ApplyOutcome::NotInstalled { install_path } => {
                    skipped.push(SkippedTool::NotInstalled {
                        tool,
                        version: resolved.version,
                        install_path,
                    })
                }
            }
        }

        let status = if self.settings.show_status {
            RunReport::status_text(&configured)
        } else {
            None
        };
        let verified = if self.settings.debug {
            verify_tools(&self.settings.verify_tools, &env)
        } else {
            Vec::new()
        };

        let report = RunReport {
            configured,
            skipped,
            environment: env,
            status,
            verified,
            follow_up: vec![FollowUp::RestartLanguageServers],
        };
        tracing::info!(
            configured = ?report.configured_names(),
            skipped = report.skipped.len(),
            "Environment setup complete"
        );
        Ok(report)
    }
}
