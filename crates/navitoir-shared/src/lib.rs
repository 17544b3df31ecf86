//! Navitoir core: rule-based intent recognition and action dispatch for the
//! portfolio site control surface (EN/DE).

pub mod classifier;
pub mod directive;
pub mod effects;
pub mod engine;
pub mod error;
pub mod executor;
pub mod feature;
pub mod locale;
pub mod messages;
pub mod registry;
pub mod resolver;
pub mod settings;
pub mod state;
pub mod target;
pub mod utterance;

pub use classifier::{Classification, IntentClassifier, Stage};
pub use directive::{ActionDirective, Resolution, ThemeRequest, TransitionKind};
pub use effects::{DeferredStep, EffectScheduler, EffectTiming, ScheduledStep, SideEffect};
pub use engine::{Navitoir, Response};
pub use error::NavitoirError;
pub use executor::{ActionExecutor, Outcome};
pub use feature::{FeatureKey, FeatureKind};
pub use locale::Locale;
pub use registry::{Category, Payload, PhraseSet, TriggerRegistry};
pub use settings::{MemoryStore, PersistedSettings, SettingsStore};
pub use state::{ControlState, Panel, PanelsOpen, StateDelta, Theme};
pub use target::{ResourceId, ResourceKind, SectionId};
pub use utterance::Utterance;

/// Settings file name under the data directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Config file name under the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Application directory name under config/data roots
pub const APP_DIR: &str = "navitoir";
