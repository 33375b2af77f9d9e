//! End-to-end tests for the project generator.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::Path;

use ractive_gen_codegen::{
    Generator, ProjectGenerator, ProjectOptions, files::BowerManifest, generation::FileRegistry,
};
use ractive_gen_config::{
    Answers, DerivedConfig, Feature, LoadMethod, PersistedSettings, Router, TestFramework,
};
use serde_json::Value;
use tempfile::TempDir;

const APP_SCRIPTS: [&str; 2] = ["app/scripts/app.js", "app/scripts/main.js"];

fn registry(answers: &Answers) -> FileRegistry {
    ProjectGenerator::new(answers, ProjectOptions::default())
        .expect("valid answers")
        .files()
        .expect("files")
}

fn bower(registry: &FileRegistry) -> Value {
    let entry = registry.get("bower.json").expect("bower.json registered");
    serde_json::from_str(&entry.content).expect("bower.json is JSON")
}

fn paths_under<'a>(registry: &'a FileRegistry, prefix: &str) -> Vec<&'a str> {
    registry
        .entries()
        .map(|e| e.path.as_str())
        .filter(|p| p.starts_with(prefix))
        .collect()
}

fn read(dir: &Path, path: &str) -> String {
    std::fs::read_to_string(dir.join(path)).unwrap_or_else(|_| panic!("{path} missing"))
}

fn feature_subsets() -> Vec<Vec<Feature>> {
    (0..1u8 << Feature::ALL.len())
        .map(|mask| {
            Feature::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, f)| f)
                .collect()
        })
        .collect()
}

#[test]
fn test_scenario_a_defaults() {
    let answers = Answers::new("foo");
    let registry = registry(&answers);

    assert_eq!(paths_under(&registry, "app/styles/"), ["app/styles/app.css"]);

    let bower = bower(&registry);
    assert_eq!(bower["dependencies"]["ractive"], "~0.5.5");
    assert!(bower.get("overrides").is_none());
    for router in Router::ALL {
        assert!(bower["dependencies"].get(router.as_str()).is_none());
    }
    assert_eq!(bower["devDependencies"]["chai"], "^1.9.1");
    assert_eq!(bower["devDependencies"]["mocha"], "^1.21.4");
}

#[test]
fn test_scenario_b_amd_sass_page() {
    let answers = Answers::new("foo")
        .with_router(Router::Page)
        .with_load_method(LoadMethod::Amd)
        .with_features([Feature::Sass])
        .with_libsass(true);
    let registry = registry(&answers);

    assert_eq!(paths_under(&registry, "app/scripts/"), APP_SCRIPTS);
    assert_eq!(paths_under(&registry, "app/styles/").len(), 4);

    let bower = bower(&registry);
    assert_eq!(bower["dependencies"]["page"], "~1.3.7");
    assert_eq!(bower["overrides"]["page"]["main"], "index.js");
    assert_eq!(bower["dependencies"]["requirejs-ractive"], "~0.1.5");
    assert_eq!(bower["dependencies"]["requirejs"], "~2.1.14");

    let content = registry.get("bower.json").unwrap().content.as_str();
    insta::assert_snapshot!("scenario_b_bower", content);
}

#[test]
fn test_feature_presence() {
    for features in feature_subsets() {
        let answers = Answers::new("foo").with_features(features.iter().copied());
        let bower = bower(&registry(&answers));
        let deps = &bower["dependencies"];

        assert_eq!(deps.get("jQuery").is_some(), features.contains(&Feature::Jquery));
        assert_eq!(
            deps.get("modernizr").is_some(),
            features.contains(&Feature::Modernizr)
        );
        let normalize = deps.get("normalize-css").is_some() || deps.get("normalize-scss").is_some();
        assert_eq!(normalize, features.contains(&Feature::Normalize), "{features:?}");
    }
}

#[test]
fn test_app_scripts_per_load_method() {
    for method in LoadMethod::ALL {
        let registry = registry(&Answers::new("foo").with_load_method(method));
        let scripts = paths_under(&registry, "app/scripts/");

        match method {
            LoadMethod::Amd => assert_eq!(scripts, APP_SCRIPTS),
            _ => assert_eq!(scripts, ["app/scripts/app.js"]),
        }
    }
}

#[test]
fn test_load_method_and_style_pairs() {
    for method in LoadMethod::ALL {
        for sass in [false, true] {
            let features = if sass { vec![Feature::Sass] } else { vec![] };
            let registry = registry(
                &Answers::new("foo")
                    .with_load_method(method)
                    .with_features(features),
            );

            let styles = paths_under(&registry, "app/styles/");
            assert_eq!(styles.len(), if sass { 4 } else { 1 }, "{method} sass={sass}");
            assert!(registry.contains("app/index.html"));
            assert!(registry.contains("Gruntfile.js"));
            assert!(registry.contains("test/app_test.js"));
        }
    }
}

#[test]
fn test_router_overrides_match_table() {
    for router in Router::ALL {
        let bower = bower(&registry(&Answers::new("foo").with_router(router)));
        let spec = router.spec();

        assert_eq!(bower["dependencies"][spec.package], spec.version);
        assert_eq!(bower["overrides"][spec.package]["main"], spec.main);
        assert_eq!(bower["overrides"].as_object().unwrap().len(), 1);
    }
}

#[test]
fn test_project_name_without_identifier_is_rejected() {
    let temp = TempDir::new().unwrap();

    let err = ProjectGenerator::new(&Answers::new("!!!"), ProjectOptions::default())
        .map(|generator| generator.generate(temp.path()))
        .err()
        .expect("name without letters or digits rejected");

    assert_eq!(err.to_string(), "invalid answers");
    assert!(format!("{err:?}").contains("has no letters or digits"));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_resolution_is_idempotent() {
    let answers = Answers::new("foo")
        .with_router(Router::Director)
        .with_features([Feature::Jquery, Feature::Normalize]);

    let first = DerivedConfig::resolve(&answers, TestFramework::Mocha).unwrap();
    let second = DerivedConfig::resolve(&answers, TestFramework::Mocha).unwrap();
    assert_eq!(first, second);

    let render = |config: &DerivedConfig| {
        ractive_gen_core::GeneratedFile::render(&BowerManifest::from_config(config))
    };
    assert_eq!(render(&first), render(&second));
}

#[test]
fn test_generate_writes_project_and_settings() {
    let temp = TempDir::new().unwrap();
    let answers = Answers::new("todo app").with_load_method(LoadMethod::ScriptTags);
    let generator = ProjectGenerator::new(&answers, ProjectOptions::default()).unwrap();

    let stats = generator.generate(temp.path()).unwrap();
    assert!(stats.skipped.is_empty());
    assert_eq!(stats.total(), generator.files().unwrap().len());

    for path in ["app/index.html", ".gitattributes", "bower.json", "test/spec_runner.html"] {
        assert!(temp.path().join(path).exists(), "{path} missing");
    }

    // bower installs where index.html looks for its packages
    let bowerrc: Value = serde_json::from_str(&read(temp.path(), ".bowerrc")).unwrap();
    assert_eq!(bowerrc["directory"], "app/bower_components");
    assert!(read(temp.path(), "app/index.html").contains("src=\"bower_components/ractive/ractive.js\""));

    let settings = PersistedSettings::load(temp.path()).unwrap();
    assert_eq!(settings.load_method, LoadMethod::ScriptTags);
    assert_eq!(settings.name_space.as_deref(), Some("TodoApp"));
    assert_eq!(settings.test_framework, TestFramework::Mocha);

    let raw: Value = serde_json::from_str(&read(temp.path(), ".yo-rc.json")).unwrap();
    assert_eq!(raw["generator-ractive"]["loadMethod"], "scriptTags");
}

#[test]
fn test_skip_yo_rc() {
    let temp = TempDir::new().unwrap();
    let options = ProjectOptions {
        skip_yo_rc: true,
        ..ProjectOptions::default()
    };

    ProjectGenerator::new(&Answers::new("foo"), options)
        .unwrap()
        .generate(temp.path())
        .unwrap();

    assert!(temp.path().join("app/index.html").exists());
    assert!(!temp.path().join(".yo-rc.json").exists());
}

#[test]
fn test_regenerate_is_stable() {
    let temp = TempDir::new().unwrap();
    let answers = Answers::new("foo").with_load_method(LoadMethod::Browserify);
    let generator = ProjectGenerator::new(&answers, ProjectOptions::default()).unwrap();

    generator.generate(temp.path()).unwrap();
    let first = read(temp.path(), "bower.json");
    generator.generate(temp.path()).unwrap();

    assert_eq!(read(temp.path(), "bower.json"), first);
}

#[test]
fn test_failed_stage_aborts_later_stages() {
    let temp = TempDir::new().unwrap();
    // A file where the test directory should go makes the tests stage fail
    std::fs::write(temp.path().join("test"), "").unwrap();

    let err = ProjectGenerator::new(&Answers::new("foo"), ProjectOptions::default())
        .unwrap()
        .generate(temp.path())
        .unwrap_err();

    assert!(format!("{err:#}").contains("stage 'tests' failed"));
    assert!(temp.path().join("bower.json").exists());
    assert!(!temp.path().join("test/app_test.js").exists());
}

#[test]
fn test_failed_app_stage_writes_nothing_else() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("app"), "").unwrap();

    let err = ProjectGenerator::new(&Answers::new("foo"), ProjectOptions::default())
        .unwrap()
        .generate(temp.path())
        .unwrap_err();

    assert!(format!("{err:#}").contains("stage 'app' failed"));
    assert!(!temp.path().join("package.json").exists());
    assert!(!temp.path().join("bower.json").exists());
}
