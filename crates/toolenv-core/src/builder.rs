//! Applies a tool's rule to the environment state

use serde::Serialize;
use toolenv_fs::NormalizedPath;

use crate::environment::EnvironmentState;
use crate::layout::AsdfLayout;
use crate::rules::{RuleInputs, ToolKind};

/// Result of applying one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApplyOutcome {
    /// The install directory exists. `actions` lists what was actually set,
    /// which may be nothing.
    Configured { actions: Vec<String> },
    /// The resolved version is not installed; the state was left untouched.
    NotInstalled { install_path: String },
}

impl ApplyOutcome {
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured { .. })
    }
}

/// Wires installed tool versions into an [`EnvironmentState`].
pub struct ToolEnvironmentBuilder<'a> {
    layout: &'a AsdfLayout,
}

impl<'a> ToolEnvironmentBuilder<'a> {
    pub fn new(layout: &'a AsdfLayout) -> Self {
        Self { layout }
    }

    /// Apply the rule for `tool` at `version`.
    ///
    /// Each variable and PATH entry is applied only when its target exists.
    /// `GOPATH` is read from `env` before any change is made.
    pub fn apply(&self, tool: &str, version: &str, env: &mut EnvironmentState) -> ApplyOutcome {
        let install_path = self.layout.install_path(tool, version);
        if !self.layout.is_installed(tool, version) {
            tracing::warn!(tool, version, path = %install_path, "Tool version not installed");
            return ApplyOutcome::NotInstalled {
                install_path: install_path.to_string(),
            };
        }

        let gopath = env.var("GOPATH").map(String::from);
        let inputs = RuleInputs {
            install_path: &install_path,
            home: self.layout.home(),
            gopath: gopath.as_deref(),
        };
        let plan = ToolKind::from_name(tool).rule().plan(&inputs);

        let mut actions = Vec::new();
        for (name, value) in plan.vars.into_iter().filter(|(_, p)| p.exists()) {
            tracing::debug!(tool, var = name, %value, "Set variable");
            env.set_var(name, value.to_native().to_string_lossy());
            actions.push(format!("{name}={value}"));
        }
        for entry in plan.paths.iter().filter(|p| p.exists()) {
            if prepend(env, entry) {
                actions.push(format!("PATH+={entry}"));
            }
        }

        ApplyOutcome::Configured { actions }
    }
}

fn prepend(env: &mut EnvironmentState, entry: &NormalizedPath) -> bool {
    let added = env.prepend_path(entry.to_native().to_string_lossy());
    if added {
        tracing::debug!(path = %entry, "Prepended to PATH");
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use toolenv_test_utils::TestAsdf;

    fn base() -> EnvironmentState {
        let mut env = EnvironmentState::new();
        env.reset_path(&["/usr/bin"]);
        env
    }

    #[test]
    fn test_not_installed_leaves_state_untouched() {
        let asdf = TestAsdf::new();
        let layout = AsdfLayout::new(asdf.home());
        let mut env = base();

        let outcome = ToolEnvironmentBuilder::new(&layout).apply("nodejs", "18.0.0", &mut env);
        assert!(!outcome.is_configured());
        assert_eq!(env, base());
    }

    #[test]
    fn test_nodejs_full_install() {
        let asdf = TestAsdf::new();
        let install = asdf.install("nodejs", "18.0.0", &["bin", "lib/node_modules"]);
        let layout = AsdfLayout::new(asdf.home());
        let mut env = base();

        let outcome = ToolEnvironmentBuilder::new(&layout).apply("nodejs", "18.0.0", &mut env);
        assert!(outcome.is_configured());
        assert_eq!(
            env.var("NODE_PATH"),
            Some(install.join("lib/node_modules").to_string_lossy().as_ref())
        );
        assert_eq!(env.path_entries()[0], install.join("bin").to_string_lossy());
    }

    #[test]
    fn test_missing_sub_paths_are_skipped() {
        let asdf = TestAsdf::new();
        asdf.install("ruby", "3.2.0", &[]);
        let layout = AsdfLayout::new(asdf.home());
        let mut env = base();

        let outcome = ToolEnvironmentBuilder::new(&layout).apply("ruby", "3.2.0", &mut env);
        assert_eq!(outcome, ApplyOutcome::Configured { actions: vec![] });
        assert_eq!(env, base());
    }

    #[test]
    fn test_golang_without_go_dir_sets_nothing() {
        let asdf = TestAsdf::new();
        // bin/ exists but golang never uses the generic rule
        asdf.install("golang", "1.21.0", &["bin"]);
        let layout = AsdfLayout::new(asdf.home());
        let mut env = base();

        let outcome = ToolEnvironmentBuilder::new(&layout).apply("golang", "1.21.0", &mut env);
        assert!(outcome.is_configured());
        assert_eq!(env.var("GOROOT"), None);
        assert_eq!(env.path_entries(), ["/usr/bin"]);
    }

    #[test]
    fn test_golang_uses_inherited_gopath() {
        let asdf = TestAsdf::new();
        asdf.install("golang", "1.21.0", &["go/bin"]);
        let gopath = asdf.mkdir("work/gopath/bin");
        let gopath = gopath.parent().unwrap().to_path_buf();
        let layout = AsdfLayout::new(asdf.home());
        let mut env = base();
        env.set_var("GOPATH", gopath.to_string_lossy());

        ToolEnvironmentBuilder::new(&layout).apply("golang", "1.21.0", &mut env);
        let goroot = layout.install_path("golang", "1.21.0").join("go");
        assert_eq!(
            env.var("GOROOT"),
            Some(goroot.to_native().to_string_lossy().as_ref())
        );
        assert_eq!(
            env.path_entries()[..2],
            [
                gopath.join("bin").to_string_lossy().to_string(),
                goroot.join("bin").to_native().to_string_lossy().to_string(),
            ]
        );
    }

    #[test]
    fn test_generic_tool_adds_bin() {
        let asdf = TestAsdf::new();
        let install = asdf.install("elixir", "1.15.0", &["bin"]);
        let layout = AsdfLayout::new(asdf.home());
        let mut env = base();

        let outcome = ToolEnvironmentBuilder::new(&layout).apply("elixir", "1.15.0", &mut env);
        assert!(matches!(outcome, ApplyOutcome::Configured { ref actions } if actions.len() == 1));
        assert_eq!(env.path_entries()[0], install.join("bin").to_string_lossy());
    }
}
