//! Localized response catalog.
//!
//! Templates are keyed by message id and locale; `{name}` placeholders are
//! filled by `render`. Control flow never embeds language text.

use crate::directive::{Resolution, TransitionKind};
use crate::feature::{FeatureKey, FeatureKind};
use crate::locale::Locale;
use crate::state::Theme;
use crate::target::{ResourceId, SectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    Navigate,
    OpenResource,
    RequestCv,
    Handoff,
    OpenAccessibilityPanel,
    FeatureOn,
    FeatureOnLevel,
    FeatureOff,
    FeatureIncreased,
    FeatureDecreased,
    FeatureAlreadyAt,
    FeatureAlreadyOn,
    FeatureAlreadyOff,
    ThemeSwitched,
    ThemeAlready,
    ThemeAmbiguous,
    ResetDone,
    ResetAlready,
    UnrecognizedHeader,
    HelpHeader,
    MenuSections,
    MenuHints,
}

pub fn template(id: MessageId, locale: Locale) -> &'static str {
    use MessageId::*;
    match (id, locale) {
        (Navigate, Locale::En) => "✅ Navigating to **{section}** section...",
        (Navigate, Locale::De) => "✅ Navigiere zum Bereich **{section}**...",
        (OpenResource, Locale::En) => "✅ Opening **{resource}** in the **{section}** section...",
        (OpenResource, Locale::De) => "✅ Öffne **{resource}** im Bereich **{section}**...",
        (RequestCv, Locale::En) => {
            "📄 You can request the **CV** in the **{section}** section. Taking you there..."
        }
        (RequestCv, Locale::De) => {
            "📄 Den **Lebenslauf** können Sie im Bereich **{section}** anfordern. Ich bringe Sie hin..."
        }
        (Handoff, Locale::En) => {
            "💬 That sounds like a question for the **Knowledge Assistant**. Opening it now..."
        }
        (Handoff, Locale::De) => {
            "💬 Das ist eine Frage für den **Wissensassistenten**. Ich öffne ihn jetzt..."
        }
        (OpenAccessibilityPanel, Locale::En) => "♿ Opening the **Accessibility** panel...",
        (OpenAccessibilityPanel, Locale::De) => "♿ Öffne das Menü **Barrierefreiheit**...",
        (FeatureOn, Locale::En) => "✅ **{feature}** turned on.",
        (FeatureOn, Locale::De) => "✅ **{feature}** aktiviert.",
        (FeatureOnLevel, Locale::En) => "✅ **{feature}** turned on ({level}).",
        (FeatureOnLevel, Locale::De) => "✅ **{feature}** aktiviert ({level}).",
        (FeatureOff, Locale::En) => "✅ **{feature}** turned off.",
        (FeatureOff, Locale::De) => "✅ **{feature}** deaktiviert.",
        (FeatureIncreased, Locale::En) => "✅ **{feature}** increased to {level}.",
        (FeatureIncreased, Locale::De) => "✅ **{feature}** erhöht auf {level}.",
        (FeatureDecreased, Locale::En) => "✅ **{feature}** decreased to {level}.",
        (FeatureDecreased, Locale::De) => "✅ **{feature}** verringert auf {level}.",
        (FeatureAlreadyAt, Locale::En) => "ℹ️ **{feature}** is already at {level}.",
        (FeatureAlreadyAt, Locale::De) => "ℹ️ **{feature}** ist bereits auf {level}.",
        (FeatureAlreadyOn, Locale::En) => "ℹ️ **{feature}** is already on.",
        (FeatureAlreadyOn, Locale::De) => "ℹ️ **{feature}** ist bereits aktiviert.",
        (FeatureAlreadyOff, Locale::En) => "ℹ️ **{feature}** is already off.",
        (FeatureAlreadyOff, Locale::De) => "ℹ️ **{feature}** ist bereits deaktiviert.",
        (ThemeSwitched, Locale::En) => "✅ Switched to **{theme}**.",
        (ThemeSwitched, Locale::De) => "✅ **{theme}** aktiviert.",
        (ThemeAlready, Locale::En) => "ℹ️ Already using **{theme}**.",
        (ThemeAlready, Locale::De) => "ℹ️ **{theme}** ist bereits aktiv.",
        (ThemeAmbiguous, Locale::En) => {
            "🤔 Did you mean **{dark}** or **{light}**? Say just one and I'll switch."
        }
        (ThemeAmbiguous, Locale::De) => {
            "🤔 Meinten Sie **{dark}** oder **{light}**? Nennen Sie eins und ich wechsle."
        }
        (ResetDone, Locale::En) => "✅ All accessibility settings have been reset.",
        (ResetDone, Locale::De) => "✅ Alle Barrierefreiheitseinstellungen wurden zurückgesetzt.",
        (ResetAlready, Locale::En) => "ℹ️ All accessibility settings are already off.",
        (ResetAlready, Locale::De) => {
            "ℹ️ Alle Barrierefreiheitseinstellungen sind bereits deaktiviert."
        }
        (UnrecognizedHeader, Locale::En) => "🤔 I couldn't match that to a command.",
        (UnrecognizedHeader, Locale::De) => "🤔 Das konnte ich keinem Befehl zuordnen.",
        (HelpHeader, Locale::En) => "👋 Here's what I can do:",
        (HelpHeader, Locale::De) => "👋 Das kann ich für Sie tun:",
        (MenuSections, Locale::En) => "Go to a section: {sections}",
        (MenuSections, Locale::De) => "Zu einem Bereich springen: {sections}",
        (MenuHints, Locale::En) => {
            "Or try \"increase contrast\", \"dark mode\", \"open cv\", or ask \"tell me about his experience\"."
        }
        (MenuHints, Locale::De) => {
            "Oder versuchen Sie \"Kontrast erhöhen\", \"dunkler Modus\", \"Lebenslauf öffnen\" oder fragen Sie \"erzähl mir von seiner Erfahrung\"."
        }
    }
}

/// Fill `{name}` placeholders. Unknown placeholders are left as-is.
pub fn render(id: MessageId, locale: Locale, args: &[(&str, &str)]) -> String {
    let mut out = template(id, locale).to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

pub fn theme_name(theme: Theme, locale: Locale) -> &'static str {
    match theme {
        Theme::Dark => locale.pick("Dark Theme", "Dunkles Design"),
        Theme::Light => locale.pick("Light Theme", "Helles Design"),
    }
}

/// Level as used after "increased to" / "turned on (...)"
pub fn level_name(kind: FeatureKind, level: u8, locale: Locale) -> String {
    match (kind, level) {
        (_, 0) => locale.pick("off", "aus").to_string(),
        (FeatureKind::Binary, _) => locale.pick("on", "an").to_string(),
        (FeatureKind::Graded3, 1) => locale.pick("light", "leicht").to_string(),
        (FeatureKind::Graded3, _) => locale.pick("full", "voll").to_string(),
        (FeatureKind::Graded6, n) => format!("{} {}", locale.pick("level", "Stufe"), n),
    }
}

/// Level as used after "is already at"
pub fn level_phrase(kind: FeatureKind, level: u8, locale: Locale) -> String {
    match (kind, level) {
        (FeatureKind::Graded3, 1) => locale.pick("light level", "leichter Stufe").to_string(),
        (FeatureKind::Graded3, _) => locale.pick("full level", "voller Stufe").to_string(),
        _ => level_name(kind, level, locale),
    }
}

/// Confirmation for a feature adjustment. `previous` is the value before
/// the change; explicit levels are reported by direction.
pub fn feature_message(
    key: FeatureKey,
    previous: u8,
    resolution: &Resolution,
    locale: Locale,
) -> String {
    let kind = key.kind();
    let feature = key.display_name(locale);
    let value = resolution.new_value;
    let level = level_name(kind, value, locale);

    let id = match resolution.transition {
        TransitionKind::NoOp => {
            return match (kind, value) {
                (_, 0) => render(MessageId::FeatureAlreadyOff, locale, &[("feature", feature)]),
                (FeatureKind::Binary, _) => {
                    render(MessageId::FeatureAlreadyOn, locale, &[("feature", feature)])
                }
                _ => render(
                    MessageId::FeatureAlreadyAt,
                    locale,
                    &[("feature", feature), ("level", &level_phrase(kind, value, locale))],
                ),
            };
        }
        TransitionKind::TurnedOff => MessageId::FeatureOff,
        TransitionKind::TurnedOn if kind == FeatureKind::Binary => MessageId::FeatureOn,
        TransitionKind::TurnedOn => MessageId::FeatureOnLevel,
        TransitionKind::IncreasedTo(_) => MessageId::FeatureIncreased,
        TransitionKind::DecreasedTo(_) => MessageId::FeatureDecreased,
        TransitionKind::SetTo(_) => {
            if value == 0 {
                MessageId::FeatureOff
            } else if kind == FeatureKind::Binary {
                MessageId::FeatureOn
            } else if value > previous {
                MessageId::FeatureIncreased
            } else {
                MessageId::FeatureDecreased
            }
        }
    };
    render(id, locale, &[("feature", feature), ("level", &level)])
}

pub fn navigate_message(section: SectionId, locale: Locale) -> String {
    render(
        MessageId::Navigate,
        locale,
        &[("section", section.display_name(locale))],
    )
}

pub fn open_resource_message(resource: ResourceId, locale: Locale) -> String {
    render(
        MessageId::OpenResource,
        locale,
        &[
            ("resource", resource.display_name(locale)),
            ("section", resource.home_section().display_name(locale)),
        ],
    )
}

/// Section menu shown for help and unrecognized input
pub fn menu_message(header: MessageId, locale: Locale) -> String {
    let sections = SectionId::ALL
        .iter()
        .map(|s| format!("**{}**", s.display_name(locale)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{}\n{}\n{}",
        template(header, locale),
        render(MessageId::MenuSections, locale, &[("sections", &sections)]),
        template(MessageId::MenuHints, locale)
    )
}
