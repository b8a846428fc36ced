//! Version resolution and environment construction for toolenv
//!
//! Given the editor context (active file, open folders) this crate decides
//! which version of every installed tool should be active and builds the
//! environment that activates them:
//!
//! - **Declaration files**: upward discovery and parsing of `.tool-versions`
//! - **Resolution**: active file, then deepest open folder, then home, then
//!   the per-tool global default
//! - **Tool rules**: per-tool environment wiring (`GOROOT`, `NODE_PATH`, ...)
//! - **Orchestration**: PATH reset, ordered prepends and the run report
//!
//! ```text
//!            Session (triggers)
//!                   |
//!             Orchestrator
//!            /            \
//!   VersionResolver   ToolEnvironmentBuilder
//!           |                  |
//!    tool_versions        rules + EnvironmentState
//! ```
//!
//! The process environment is never written directly. A run produces an
//! [`EnvironmentState`] that the host applies as one update.

pub mod builder;
pub mod environment;
pub mod error;
pub mod host;
pub mod layout;
pub mod orchestrator;
pub mod report;
pub mod resolver;
pub mod rules;
pub mod session;
pub mod settings;
pub mod tool_versions;
pub mod verify;

pub use builder::{ApplyOutcome, ToolEnvironmentBuilder};
pub use environment::{BASELINE_PATH, EnvironmentState, TRACKED_VARS};
pub use error::{Error, Result};
pub use host::{Host, StaticHost};
pub use layout::AsdfLayout;
pub use orchestrator::Orchestrator;
pub use report::{ConfiguredTool, FollowUp, RunReport, SkippedTool, environment_dump};
pub use resolver::{
    ResolutionContext, ResolvedVersion, VersionResolver, VersionSource, get_tool_version,
};
pub use rules::{PathTemplate, RuleInputs, RulePlan, ToolKind, ToolRule};
pub use session::{Session, Trigger};
pub use settings::{Settings, SettingsLoader};
pub use tool_versions::{ToolVersions, locate};
pub use verify::{ToolLocation, verify_tools};
