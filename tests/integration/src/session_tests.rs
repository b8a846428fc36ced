//! Editor-style sessions: triggers, window switches and file saves

use pretty_assertions::assert_eq;
use toolenv_core::{
    AsdfLayout, EnvironmentState, Orchestrator, Session, Settings, StaticHost, Trigger,
};
use toolenv_test_utils::TestAsdf;

fn session(asdf: &TestAsdf, settings: Settings) -> Session {
    Session::new(Orchestrator::new(AsdfLayout::new(asdf.home()), settings))
}

fn base() -> EnvironmentState {
    EnvironmentState::from_vars([("PATH", "/usr/bin")])
}

fn node_version(session: &mut Session, trigger: &Trigger, host: &StaticHost) -> Option<String> {
    let report = session.handle(trigger, host, &base())?.unwrap();
    report
        .configured
        .into_iter()
        .find(|c| c.tool == "nodejs")
        .map(|c| c.version)
}

#[test]
fn test_switching_projects_between_windows() {
    let asdf = TestAsdf::new().with_asdf_dirs();
    asdf.install("nodejs", "18.0.0", &["bin"]);
    asdf.install("nodejs", "20.0.0", &["bin"]);
    asdf.tool_versions("alpha", "nodejs 18.0.0\n");
    asdf.tool_versions("beta", "nodejs 20.0.0\n");

    let alpha = StaticHost::new()
        .with_folder(asdf.home().join("alpha"))
        .with_window(1);
    let beta = StaticHost::new()
        .with_folder(asdf.home().join("beta"))
        .with_window(2);

    let mut session = session(&asdf, Settings::default());

    assert_eq!(
        node_version(&mut session, &Trigger::Startup, &alpha),
        Some("18.0.0".into())
    );

    // First activation only records the window
    let first = Trigger::Activated { window_id: Some(1) };
    assert!(session.handle(&first, &alpha, &base()).is_none());

    let second = Trigger::Activated { window_id: Some(2) };
    assert_eq!(
        node_version(&mut session, &second, &beta),
        Some("20.0.0".into())
    );

    // Same window again: nothing to do
    assert!(session.handle(&second, &beta, &base()).is_none());
}

#[test]
fn test_saving_declaration_file_reloads() {
    let asdf = TestAsdf::new();
    asdf.install("nodejs", "18.0.0", &["bin"]);
    asdf.install("nodejs", "20.0.0", &["bin"]);
    let file = asdf.tool_versions("proj", "nodejs 18.0.0\n");
    let host = StaticHost::new().with_folder(asdf.home().join("proj"));

    let mut session = session(&asdf, Settings::default());
    assert_eq!(
        node_version(&mut session, &Trigger::Manual, &host),
        Some("18.0.0".into())
    );

    std::fs::write(&file, "nodejs 20.0.0\n").unwrap();
    assert_eq!(
        node_version(&mut session, &Trigger::Saved(file.clone()), &host),
        Some("20.0.0".into())
    );

    let other = Trigger::Saved(asdf.home().join("proj/main.js"));
    assert!(session.handle(&other, &host, &base()).is_none());
}

#[test]
fn test_save_reload_can_be_disabled() {
    let asdf = TestAsdf::new();
    let file = asdf.tool_versions("proj", "nodejs 18.0.0\n");
    let settings = Settings {
        auto_reload_on_save: false,
        ..Settings::default()
    };

    let mut session = session(&asdf, settings);
    assert!(
        session
            .handle(&Trigger::Saved(file), &StaticHost::new(), &base())
            .is_none()
    );
}

#[test]
fn test_missing_root_surfaces_error_and_keeps_base() {
    let asdf = TestAsdf::without_root();
    let mut session = session(&asdf, Settings::default());
    let base = base();

    let result = session.handle(&Trigger::Startup, &StaticHost::new(), &base);
    let err = result.unwrap().unwrap_err();
    assert!(err.to_string().starts_with("asdf not found at"));
    assert_eq!(base.path_entries(), ["/usr/bin"]);
}
