//! Per-tool environment rules
//!
//! Each known tool maps to a data-only [`ToolRule`]: variables to set and
//! directories to prepend to PATH, both expressed as [`PathTemplate`]s.
//! Tools without an entry use the generic rule (`<install>/bin`). A specific
//! rule replaces the generic one entirely.

use serde::Serialize;
use toolenv_fs::NormalizedPath;

/// A path computed from the install directory or from GOPATH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathTemplate {
    /// `<install_path>/<segments...>`
    Install(&'static [&'static str]),
    /// `<GOPATH>/<segments...>`, GOPATH defaulting to `<home>/go`
    GoPath(&'static [&'static str]),
}

/// Values a [`PathTemplate`] is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct RuleInputs<'a> {
    pub install_path: &'a NormalizedPath,
    pub home: &'a NormalizedPath,
    /// GOPATH inherited from the environment, if set
    pub gopath: Option<&'a str>,
}

impl PathTemplate {
    pub fn render(&self, inputs: &RuleInputs<'_>) -> NormalizedPath {
        let (base, segments) = match self {
            Self::Install(segments) => (inputs.install_path.clone(), segments),
            Self::GoPath(segments) => {
                let gopath = match inputs.gopath {
                    Some(gopath) if !gopath.is_empty() => NormalizedPath::new(gopath),
                    _ => inputs.home.join("go"),
                };
                (gopath, segments)
            }
        };
        segments.iter().fold(base, |path, segment| path.join(segment))
    }
}

/// Variables and PATH entries contributed by one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRule {
    pub vars: &'static [(&'static str, PathTemplate)],
    pub paths: &'static [PathTemplate],
}

/// A rule evaluated for a concrete install, before existence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulePlan {
    pub vars: Vec<(&'static str, NormalizedPath)>,
    pub paths: Vec<NormalizedPath>,
}

impl ToolRule {
    /// Render every template, in table order.
    pub fn plan(&self, inputs: &RuleInputs<'_>) -> RulePlan {
        RulePlan {
            vars: self
                .vars
                .iter()
                .map(|(name, template)| (*name, template.render(inputs)))
                .collect(),
            paths: self.paths.iter().map(|t| t.render(inputs)).collect(),
        }
    }
}

const GOLANG: ToolRule = ToolRule {
    vars: &[
        ("GOROOT", PathTemplate::Install(&["go"])),
        ("GOPATH", PathTemplate::GoPath(&[])),
    ],
    paths: &[
        PathTemplate::Install(&["go", "bin"]),
        PathTemplate::GoPath(&["bin"]),
    ],
};

const NODEJS: ToolRule = ToolRule {
    vars: &[("NODE_PATH", PathTemplate::Install(&["lib", "node_modules"]))],
    paths: &[PathTemplate::Install(&["bin"])],
};

const RUBY: ToolRule = ToolRule {
    vars: &[("GEM_PATH", PathTemplate::Install(&["lib", "ruby", "gems"]))],
    paths: &[PathTemplate::Install(&["bin"])],
};

const RUST: ToolRule = ToolRule {
    vars: &[("CARGO_HOME", PathTemplate::Install(&[]))],
    paths: &[PathTemplate::Install(&["bin"])],
};

const GENERIC: ToolRule = ToolRule {
    vars: &[],
    paths: &[PathTemplate::Install(&["bin"])],
};

/// Tools with dedicated wiring. Everything else is [`ToolKind::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Golang,
    Nodejs,
    Ruby,
    Rust,
    Generic,
}

impl ToolKind {
    /// Exact, case-sensitive match on the asdf plugin name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "golang" => Self::Golang,
            "nodejs" => Self::Nodejs,
            "ruby" => Self::Ruby,
            "rust" => Self::Rust,
            _ => Self::Generic,
        }
    }

    pub fn rule(&self) -> &'static ToolRule {
        match self {
            Self::Golang => &GOLANG,
            Self::Nodejs => &NODEJS,
            Self::Ruby => &RUBY,
            Self::Rust => &RUST,
            Self::Generic => &GENERIC,
        }
    }
}
