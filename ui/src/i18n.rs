//! Internationalization (i18n) for `cardiocare-ui`.
//!
//! `i18n-embed` selects the language and loads bundles, `fluent` formats
//! messages, `rust-embed` compiles the `.ftl` files in, and `i18n-embed-fl`
//! provides the compile-time checked `fl!` lookups behind [`t!`].
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/cardiocare-ui.ftl   (fallback/reference)
//!   es-ES/cardiocare-ui.ftl
//! ```
//!
//! Desktop builds ask the OS for preferred languages, web builds read
//! `navigator.languages`. WASM always embeds the assets (`debug-embed`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation lookup through the shared loader.
///
/// ```text
/// t!("nav-home")
/// t!("card-gap", gap = "+3")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "cardiocare-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
        disable_isolation();
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    disable_isolation();
    Ok(())
}

/// `select` loads fresh bundles with isolation on; interpolated ages and
/// gaps must render without bidi marks.
fn disable_isolation() {
    LOADER.set_use_isolating(false);
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;
    use std::sync::Mutex;

    // Tests share the global loader; language switches must not interleave.
    static LANG_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn fallback_language_is_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn unknown_language_keeps_current_bundle() {
        let _guard = LANG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        set_language("en-US").unwrap();
        let before = fl!(&*LOADER, "nav-home");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-home");
        assert_eq!(before, after);
    }

    #[test]
    fn interpolation_has_no_isolation_marks() {
        let _guard = LANG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        let text = fl!(&*LOADER, "card-gap", gap = "+7");
        assert!(text.contains("+7"));
        assert!(!text.contains('\u{2068}'));
        assert!(!text.contains('\u{2069}'));
    }

    #[test]
    fn language_switch_keeps_isolation_off() {
        let _guard = LANG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        set_language("es-ES").unwrap();
        let spanish = fl!(&*LOADER, "advice-high-age", age = "58");
        set_language("en-US").unwrap();
        let english = fl!(&*LOADER, "advice-high-age", age = "58");
        for text in [spanish, english] {
            assert!(text.contains("58"));
            assert!(!text.contains('\u{2068}'), "isolation mark in {text:?}");
        }
    }
}
