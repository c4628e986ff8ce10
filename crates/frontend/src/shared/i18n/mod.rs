//! Localization for the dashboard (English / Portuguese).
//!
//! Provides a context with the current language; the preference is
//! persisted in localStorage.

pub mod translations;

use leptos::prelude::*;
use web_sys::window;

pub use translations::translate;

/// Available interface languages.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    /// Language code (used for localStorage and `<html lang>`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    /// Unknown codes fall back to English.
    pub fn from_str(s: &str) -> Self {
        match s {
            "pt" => Language::Pt,
            _ => Language::En,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Pt,
            Language::Pt => Language::En,
        }
    }
}

const LANGUAGE_STORAGE_KEY: &str = "talkguest-language";

fn load_language_from_storage() -> Language {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
        .map(|s| Language::from_str(&s))
        .unwrap_or_default()
}

fn save_language_to_storage(language: Language) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANGUAGE_STORAGE_KEY, language.as_str());
    }
}

/// Language context type.
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub language: RwSignal<Language>,
}

impl I18nContext {
    /// Set the language and persist it.
    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        save_language_to_storage(language);
    }

    pub fn toggle(&self) {
        self.set_language(self.language.get_untracked().toggled());
    }

    /// Reactive translation: re-evaluates when the language changes.
    pub fn t(&self, key: &str) -> String {
        translate(self.language.get(), key).to_string()
    }
}

/// Creates the language context from the stored preference.
pub fn provide_i18n() -> I18nContext {
    let context = I18nContext {
        language: RwSignal::new(load_language_from_storage()),
    };
    provide_context(context);
    context
}

/// Hook to use the language context; outside the app root English is used.
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().unwrap_or_else(|| I18nContext {
        language: RwSignal::new(Language::En),
    })
}

/// Language toggle button for the header.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <thaw::Button
            appearance=thaw::ButtonAppearance::Subtle
            size=thaw::ButtonSize::Small
            on_click=move |_| i18n.toggle()
        >
            {move || match i18n.language.get() {
                Language::En => "🇬🇧 EN",
                Language::Pt => "🇵🇹 PT",
            }}
        </thaw::Button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_str("pt"), Language::Pt);
        assert_eq!(Language::from_str("de"), Language::En);
        assert_eq!(Language::Pt.toggled(), Language::En);
        assert_eq!(Language::from_str(Language::Pt.as_str()), Language::Pt);
    }
}
