//! End-to-end runs: configuration, host inputs, use sites and rendering.

use availkit_analyzer::{AccessKind, OperationKind, Symbol, SymbolKind, UseSite};
use availkit_config::{load_config, resolve_analysis, ConfigError, CONFIG_FILE_NAME};
use availkit_conformance::{
    advice, ios, run_pipeline, single, sites_from_json, Compilation,
};
use availkit_diagnostics::{DiagnosticRenderer, JsonRenderer, Severity, TerminalRenderer};
use availkit_model::{Architecture, AvailabilityKind, DeploymentVersion, PlatformName};

const FIXTURE: &str = include_str!("fixtures/use_sites.json");

fn fixture_sites() -> Vec<UseSite> {
    sites_from_json(FIXTURE).unwrap()
}

#[test]
fn fixture_on_ios_8() {
    let result = run_pipeline(&Compilation::ios("8.0"), &fixture_sites()).unwrap();
    assert_eq!(result.codes(), vec!["XIA1002", "XIA1003", "XIA1003", "XIA1001"]);
    assert_eq!(
        result.messages(),
        vec![
            "'AddArrangedSubview' is only available on iOS 9.0 or newer",
            "'NSURLConnection' was deprecated in iOS 9.0.\n Use NSURLSession",
            "'BackgroundColor' was made unavailable in iOS",
            "Override instead of calling directly",
        ]
    );
    assert!(!result.has_errors);
    assert_eq!(result.info_count, 4);
}

#[test]
fn fixture_on_newer_target_drops_introduced_later() {
    let result = run_pipeline(&Compilation::ios("10.3.1"), &fixture_sites()).unwrap();
    assert_eq!(result.codes(), vec!["XIA1003", "XIA1003", "XIA1001"]);
}

#[test]
fn unparseable_manifest_disables_only_introduction() {
    let result = run_pipeline(&Compilation::ios("ten"), &fixture_sites()).unwrap();
    assert_eq!(result.codes(), vec!["XIA1003", "XIA1003", "XIA1001"]);
}

#[test]
fn no_platform_binding_keeps_only_advice() {
    let compilation = Compilation {
        config: "",
        assemblies: &["mscorlib", "System.Core"],
        manifest_version: Some("8.0"),
    };
    let result = run_pipeline(&compilation, &fixture_sites()).unwrap();
    assert_eq!(result.codes(), vec!["XIA1001"]);
}

#[test]
fn platform_is_taken_from_the_binding_assembly() {
    let sites = vec![UseSite::new(
        Symbol::new("Complication", SymbolKind::Type).with_attributes([single(
            AvailabilityKind::Introduced,
            PlatformName::WatchOS,
            3,
            0,
            Architecture::ALL,
            None,
        )]),
        OperationKind::ObjectCreation,
    )];

    let watch = Compilation {
        config: "",
        assemblies: &["Xamarin.WatchOS"],
        manifest_version: Some("2.0"),
    };
    let result = run_pipeline(&watch, &sites).unwrap();
    assert_eq!(result.messages(), vec!["'Complication' is only available on watchOS 3.0 or newer"]);

    let tv = Compilation {
        assemblies: &["Xamarin.TVOS"],
        ..watch
    };
    assert!(run_pipeline(&tv, &sites).unwrap().diagnostics.is_empty());
}

#[test]
fn configuration_overrides() {
    let config = r#"
[analysis]
minimum_os_version = "9.0"

[rules]
allow = ["advice"]
deny = ["XIA1003"]
"#;
    let compilation = Compilation {
        config,
        ..Compilation::ios("8.0")
    };
    let result = run_pipeline(&compilation, &fixture_sites()).unwrap();
    assert_eq!(result.codes(), vec!["XIA1003", "XIA1003"]);
    assert!(result.has_errors);
    assert_eq!(result.error_count, 2);
    assert!(result.diagnostics.iter().all(|d| d.severity == Severity::Error));
}

#[test]
fn invalid_configuration_is_reported() {
    let compilation = Compilation {
        config: "[rules]\nallow = [\"XIA1003\"]\ndeny = [\"deprecated\"]\n",
        ..Compilation::ios("8.0")
    };
    let err = run_pipeline(&compilation, &[]).err().unwrap();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn compound_assignment_merges_getter_then_setter() {
    let prop = Symbol::new("Alpha", SymbolKind::Property)
        .with_getter(Symbol::new("get_Alpha", SymbolKind::Method).with_attributes([ios(9, 0)]))
        .with_setter(
            Symbol::new("set_Alpha", SymbolKind::Method).with_attributes([advice("Animatable")]),
        );
    let site = UseSite::new(prop, OperationKind::PropertyReference)
        .with_access(AccessKind::CompoundAssignment);

    let result = run_pipeline(&Compilation::ios("8.0"), &[site]).unwrap();
    assert_eq!(result.codes(), vec!["XIA1001", "XIA1002"]);
    assert_eq!(result.messages()[1], "'Alpha' is only available on iOS 9.0 or newer");
}

#[test]
fn renderers_show_location_and_code() {
    let result = run_pipeline(&Compilation::ios("8.0"), &fixture_sites()).unwrap();

    let terminal = TerminalRenderer::new(false).render(&result.diagnostics[0]);
    assert!(terminal.starts_with("info[XIA1002]: 'AddArrangedSubview' is only available"));
    assert!(terminal.contains("  --> App/ViewController.cs:12:9"));

    let json = JsonRenderer.render_all(&result.diagnostics);
    let values: Vec<serde_json::Value> = json
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(values.len(), 4);
    assert_eq!(values[1]["code"], "XIA1003");
    assert_eq!(values[1]["location"]["path"], "App/Network.cs");
    assert!(values[3]["location"].is_null());
}

#[test]
fn config_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[analysis]\nplatform = \"macos\"\nconflict_policy = \"prefer-newest\"\n",
    )
    .unwrap();

    let config = load_config(dir.path()).unwrap();
    let resolved = resolve_analysis(&config, ["Xamarin.iOS"], Some("10.12")).unwrap();
    assert_eq!(resolved.platform, PlatformName::MacOS);
    assert_eq!(resolved.minimum_version, Some(DeploymentVersion::new(10, 12, 0)));
}
