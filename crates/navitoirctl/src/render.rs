//! Terminal rendering for engine responses and host effects.

use crate::content::ContentRegistry;
use chrono::Local;
use navitoir_shared::{
    messages, ControlState, FeatureKey, Locale, Panel, PersistedSettings, SideEffect,
};
use owo_colors::OwoColorize;

/// Render `**bold**` spans. An unmatched `**` is printed literally.
pub fn markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(&(&after[..end]).bold().to_string());
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

/// One line describing what the host does for a released step
pub fn describe_effect(effect: &SideEffect, content: &ContentRegistry) -> String {
    match effect {
        SideEffect::ScrollTo { section } => format!(
            "-> scroll to {}",
            content.anchor(*section).unwrap_or(section.as_str())
        ),
        SideEffect::OpenResource { id } => format!(
            "-> open {}",
            content.url(*id).unwrap_or(id.as_str())
        ),
        SideEffect::ClosePanel { panel } => format!("-> close {} panel", panel_name(*panel)),
    }
}

pub fn panel_name(panel: Panel) -> &'static str {
    match panel {
        Panel::Accessibility => "accessibility",
        Panel::Navitoir => "navitoir",
        Panel::KnowledgeAssistant => "knowledge assistant",
    }
}

/// Notice printed instead of a real knowledge assistant call
pub fn handoff_notice(question: &str, locale: Locale) -> String {
    format!(
        "{} {}",
        locale.pick("[knowledge assistant] would answer:", "[Wissensassistent] würde beantworten:"),
        question.trim()
    )
}

/// Active features and theme, one per line
pub fn state_lines(state: &ControlState, locale: Locale) -> Vec<String> {
    let mut lines = vec![format!(
        "{}: {}",
        locale.pick("Theme", "Design"),
        messages::theme_name(state.theme, locale)
    )];
    for key in FeatureKey::ALL {
        let level = state.level(key);
        if level > 0 {
            lines.push(format!(
                "{}: {}",
                key.display_name(locale),
                messages::level_name(key.kind(), level, locale)
            ));
        }
    }
    if state.all_off() {
        lines.push(
            locale
                .pick("No accessibility features active", "Keine Barrierefreiheitsfunktionen aktiv")
                .to_string(),
        );
    }
    lines
}

pub fn settings_lines(settings: &PersistedSettings, locale: Locale) -> Vec<String> {
    let accessibility = settings
        .accessibility
        .iter()
        .map(|(key, level)| (*key, key.kind().clamp(*level as u32)))
        .collect();
    let state = ControlState {
        accessibility,
        theme: settings.theme,
        ..Default::default()
    };
    let mut lines = state_lines(&state, locale);
    lines.push(format!(
        "{}: {}",
        locale.pick("Saved", "Gespeichert"),
        settings
            .updated_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    ));
    lines
}
