//! End-to-end flow: settings -> resolution -> environment -> report

use pretty_assertions::assert_eq;
use std::fs;
use toolenv_core::{
    AsdfLayout, EnvironmentState, Orchestrator, SettingsLoader, SkippedTool, StaticHost,
    VersionSource, environment_dump,
};
use toolenv_fs::NormalizedPath;
use toolenv_test_utils::TestAsdf;

/// A home with four installed tools and a layered set of declarations
fn setup_home() -> TestAsdf {
    let asdf = TestAsdf::new().with_asdf_dirs();
    asdf.mkdir("go/bin");
    asdf.install("golang", "1.21.0", &["go/bin", "bin"]);
    asdf.install("nodejs", "18.0.0", &["bin", "lib/node_modules"]);
    asdf.install("ruby", "3.2.0", &["bin", "lib/ruby/gems"]);
    asdf.install("rust", "1.75.0", &["bin"]);

    asdf.tool_versions("work/api", "golang 1.21.0\nnodejs 18.0.0\n");
    asdf.home_tool_versions("nodejs 16.0.0\nruby 3.2.0\n");
    asdf.global_version("rust", "1.75.0\n");
    asdf
}

fn base() -> EnvironmentState {
    EnvironmentState::from_vars([("PATH", "/opt/custom/bin:/usr/bin"), ("GOPATH", "")])
}

#[test]
fn test_full_reload_from_active_file() {
    let asdf = setup_home();
    let layout = AsdfLayout::new(asdf.home());
    let settings = SettingsLoader::with_config_dir(asdf.home().join(".config/toolenv"))
        .load()
        .unwrap();
    let host = StaticHost::new().with_active_file(asdf.home().join("work/api/cmd/main.go"));

    let report = Orchestrator::new(layout.clone(), settings)
        .run(&host, &base())
        .unwrap();

    assert_eq!(
        report.configured_names(),
        vec!["golang@1.21.0", "nodejs@18.0.0", "ruby@3.2.0", "rust@1.75.0"]
    );
    assert!(report.skipped.is_empty());

    let sources: Vec<&VersionSource> = report.configured.iter().map(|c| &c.source).collect();
    assert!(matches!(sources[0], VersionSource::ActiveFile(_)));
    assert!(matches!(sources[1], VersionSource::ActiveFile(_)));
    assert!(matches!(sources[2], VersionSource::Home(_)));
    assert!(matches!(sources[3], VersionSource::Global(_)));

    let env = &report.environment;
    let go_root = layout.install_path("golang", "1.21.0");
    assert_eq!(env.var("GOROOT"), Some(go_root.join("go").as_str()));
    assert_eq!(
        env.var("GOPATH"),
        Some(NormalizedPath::new(asdf.home()).join("go").as_str())
    );
    assert!(env.var("NODE_PATH").unwrap().ends_with("nodejs/18.0.0/lib/node_modules"));
    assert!(env.var("GEM_PATH").unwrap().ends_with("ruby/3.2.0/lib/ruby/gems"));
    assert!(env.var("CARGO_HOME").unwrap().ends_with("rust/1.75.0"));

    // Inherited entries are gone; tool entries sit ahead of asdf's own
    assert!(!env.path_entries().iter().any(|p| p == "/opt/custom/bin"));
    let shims = env
        .path_entries()
        .iter()
        .position(|p| p == layout.shims().as_str())
        .unwrap();
    assert!(shims > 0);
    let tail: Vec<&str> = env.path_entries()[env.path_entries().len() - 5..]
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(tail, toolenv_core::BASELINE_PATH);

    assert_eq!(
        report.status.as_deref(),
        Some("asdf: golang@1.21.0, nodejs@18.0.0, ruby@3.2.0, rust@1.75.0")
    );
    assert_eq!(report.follow_up.len(), 1);
}

#[test]
fn test_active_file_beats_home() {
    let asdf = setup_home();
    let host = StaticHost::new().with_active_file(asdf.home().join("work/api/sub/x.js"));

    let report = Orchestrator::new(AsdfLayout::new(asdf.home()), Default::default())
        .run(&host, &base())
        .unwrap();
    let node = report
        .configured
        .iter()
        .find(|c| c.tool == "nodejs")
        .unwrap();
    assert_eq!(node.version, "18.0.0");
}

#[test]
fn test_without_project_falls_back_to_home() {
    let asdf = setup_home();
    let report = Orchestrator::new(AsdfLayout::new(asdf.home()), Default::default())
        .run(&StaticHost::new(), &base())
        .unwrap();

    assert_eq!(report.configured_names(), vec!["ruby@3.2.0", "rust@1.75.0"]);
    assert!(report.skipped.contains(&SkippedTool::NotInstalled {
        tool: "nodejs".into(),
        version: "16.0.0".into(),
        install_path: AsdfLayout::new(asdf.home())
            .install_path("nodejs", "16.0.0")
            .to_string(),
    }));
    assert!(
        report
            .skipped
            .contains(&SkippedTool::Unresolved { tool: "golang".into() })
    );
}

#[test]
fn test_settings_file_controls_status_and_verification() {
    let asdf = setup_home();
    let config = asdf.mkdir(".config/toolenv");
    fs::write(
        config.join("settings.toml"),
        "debug = true\nshow_status = false\nverify_tools = []\n",
    )
    .unwrap();

    let settings = SettingsLoader::with_config_dir(asdf.home().join(".config/toolenv"))
        .load()
        .unwrap();
    assert!(settings.debug);

    let report = Orchestrator::new(AsdfLayout::new(asdf.home()), settings)
        .run(&StaticHost::new(), &base())
        .unwrap();
    assert_eq!(report.status, None);
    assert!(report.verified.is_empty());
    assert_eq!(report.configured_names(), vec!["ruby@3.2.0", "rust@1.75.0"]);
}

#[test]
fn test_dump_and_exports_describe_result() {
    let asdf = setup_home();
    let report = Orchestrator::new(AsdfLayout::new(asdf.home()), Default::default())
        .run(&StaticHost::new(), &base())
        .unwrap();

    let dump = environment_dump(&report.environment);
    assert!(dump[0].starts_with("PATH: "));
    assert!(dump[1].ends_with(".asdf"));
    assert!(dump.iter().any(|l| l.starts_with("CARGO_HOME: ")));
    assert!(!dump.iter().any(|l| l.starts_with("GOROOT: ")));

    let exports = report.environment.shell_exports();
    assert!(exports[0].starts_with("export PATH='"));
    assert!(exports.iter().any(|l| l.starts_with("export ASDF_DIR='")));
}

#[test]
fn test_report_serializes_to_json() {
    let asdf = setup_home();
    let report = Orchestrator::new(AsdfLayout::new(asdf.home()), Default::default())
        .run(&StaticHost::new(), &base())
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["configured"][1]["source"]["kind"], "global");
    assert_eq!(json["follow_up"][0], "restart_language_servers");
}
