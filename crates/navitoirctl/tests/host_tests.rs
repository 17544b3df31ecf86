//! Host-side tests: config files, settings persistence, override tables.

use navitoir_shared::{
    ActionDirective, FeatureKey, Locale, Navitoir, PersistedSettings, ResourceId, SectionId,
    SettingsStore, Theme,
};
use navitoirctl::{ContentRegistry, JsonFileStore, NavitoirConfig, Session};
use std::fs;
use std::time::Instant;
use tempfile::TempDir;

fn session_at(dir: &TempDir, locale: Locale) -> Session<JsonFileStore> {
    let store = JsonFileStore::new(dir.path().join("state").join("settings.json"));
    Session::start(Navitoir::with_defaults().unwrap(), store, locale).unwrap()
}

#[test]
fn test_json_store_missing_file_is_none() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("settings.json"));
    assert!(store.load().unwrap().is_none());
    assert!(!store.clear().unwrap());
}

#[test]
fn test_json_store_creates_parent_and_roundtrips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.json");
    let mut store = JsonFileStore::new(&path);

    let mut session = session_at(&dir, Locale::En);
    session.handle("turn on dyslexia font", Instant::now()).unwrap();
    let snapshot: PersistedSettings = session.engine().snapshot();
    store.save(&snapshot).unwrap();

    assert!(path.exists());
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"dyslexia\": 1"));
    assert!(contents.contains("\"theme\": \"light\""));

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.accessibility.get(&FeatureKey::Dyslexia), Some(&1));
    assert!(store.clear().unwrap());
    assert!(!path.exists());
}

#[test]
fn test_corrupt_settings_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert_eq!(err.code(), -32700);
}

#[test]
fn test_settings_path_that_is_a_directory() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(dir.path());
    let err = store.load().unwrap_err();
    assert_eq!(err.code(), -32005);
    assert!(err.to_string().contains("is a directory"));

    let snapshot = Navitoir::with_defaults().unwrap().snapshot();
    assert_eq!(store.save(&snapshot).unwrap_err().code(), -32005);
    assert!(store.clear().is_err());
    assert!(dir.path().is_dir());
}

#[test]
fn test_settings_survive_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut session = session_at(&dir, Locale::En);
        let turn = session.handle("dark theme", Instant::now()).unwrap();
        assert!(turn.persisted);
        session.run_pending(false, |_| {});
        let turn = session.handle("blue light level 2", Instant::now()).unwrap();
        assert!(turn.persisted);
    }

    let session = session_at(&dir, Locale::De);
    assert_eq!(session.engine().state().theme, Theme::Dark);
    assert_eq!(session.engine().state().level(FeatureKey::BlueLight), 2);
    // Panels are not persisted
    assert!(!session.engine().state().panels.navitoir);
}

#[test]
fn test_navigation_is_not_persisted() {
    let dir = TempDir::new().unwrap();
    let mut session = session_at(&dir, Locale::En);
    let turn = session.handle("take me to projects", Instant::now()).unwrap();
    assert!(!turn.persisted);
    assert!(session.store().load().unwrap().is_none());
}

#[test]
fn test_config_file_with_overrides() {
    let dir = TempDir::new().unwrap();
    let triggers = dir.path().join("extra.toml");
    fs::write(
        &triggers,
        r#"
        [[triggers]]
        category = "section"
        payload = "contact"
        phrases.en = ["say hello"]

        [phrase_sets.help]
        en = ["halp"]
        "#,
    )
    .unwrap();

    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            r##"
            locale = "de"
            triggers_path = "{}"

            [timing]
            scroll_to_open_ms = 100

            [sections]
            contact = "#kontakt"

            [resources]
            cv = "https://example.org/cv.pdf"
            "##,
            triggers.display()
        ),
    )
    .unwrap();

    let config = NavitoirConfig::load(Some(config_path.as_path())).unwrap();
    assert_eq!(config.locale, Locale::De);
    assert_eq!(config.timing.scroll_to_open_ms, 100);
    assert_eq!(config.timing.close_panel_ms, 1500);

    let content = ContentRegistry::from_config(&config).unwrap();
    assert_eq!(content.anchor(SectionId::Contact), Some("#kontakt"));
    assert_eq!(content.url(ResourceId::Cv), Some("https://example.org/cv.pdf"));

    let registry = config.registry().unwrap();
    let mut engine = Navitoir::new(registry, Default::default(), config.timing);
    let now = Instant::now();
    let response = engine.submit("say hello", Locale::De, now).unwrap();
    assert_eq!(
        response.directive,
        ActionDirective::NavigateSection {
            id: SectionId::Contact
        }
    );
    engine.poll(now);
    let help = engine.submit("halp", Locale::En, now).unwrap();
    assert_eq!(help.directive, ActionDirective::ShowHelp);
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(NavitoirConfig::load(Some(dir.path().join("nope.toml").as_path())).is_err());
}

#[test]
fn test_bad_override_table_is_an_error() {
    let dir = TempDir::new().unwrap();
    let triggers = dir.path().join("bad.toml");
    fs::write(
        &triggers,
        r#"
        [[triggers]]
        category = "project"
        payload = "efset-english"
        phrases.en = ["english"]
        "#,
    )
    .unwrap();
    let config = NavitoirConfig {
        triggers_path: Some(triggers),
        ..Default::default()
    };
    assert!(config.registry().is_err());
}
