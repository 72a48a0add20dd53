//! Locale name resolution
//!
//! Maps the names people actually have lying around (`de`, `en-IN`,
//! `de_DE.UTF-8`, `C`) onto the CLDR tables shipped with `num-format`.

use anyhow::{bail, Result};
use num_format::Locale;

/// Environment variables consulted for the host locale, highest priority first
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Resolve a CLDR or POSIX locale name.
///
/// # Examples
/// ```
/// use numfmt::format::resolve_locale;
/// use num_format::Locale;
///
/// assert_eq!(resolve_locale("de_CH.UTF-8").unwrap(), Locale::de_CH);
/// assert_eq!(resolve_locale("C").unwrap(), Locale::en);
/// assert!(resolve_locale("not-a-locale").is_err());
/// ```
pub fn resolve_locale(name: &str) -> Result<Locale> {
    // Strip POSIX encoding and modifier: "fr_FR.UTF-8@euro" -> "fr_FR"
    let base = name
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() {
        bail!("empty locale name: {:?}", name);
    }
    if base == "C" || base == "POSIX" {
        return Ok(Locale::en);
    }

    let tag = base.replace('_', "-");
    let mut parts = tag.split('-');
    let language = parts.next().unwrap_or_default().to_lowercase();

    // CLDR tags are "ll-RR"; fix up the case before asking num-format
    let mut candidates = vec![tag.clone()];
    if let Some(region) = parts.next() {
        let region = if region.len() == 2 {
            region.to_uppercase()
        } else {
            region.to_string()
        };
        candidates.push(format!("{}-{}", language, region));
    }
    candidates.push(language);

    for candidate in &candidates {
        if let Ok(locale) = Locale::from_name(candidate) {
            return Ok(locale);
        }
    }

    bail!("unknown locale: {:?}", name)
}

/// Host locale from `LC_ALL`, `LC_NUMERIC`, then `LANG`; `en` when unset.
pub fn system_locale() -> Locale {
    locale_from_env(|key| std::env::var(key).ok())
}

/// Same lookup as [`system_locale`] over an arbitrary variable source
pub fn locale_from_env<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    let Some((var, name)) = LOCALE_ENV_VARS
        .into_iter()
        .find_map(|var| lookup(var).filter(|v| !v.is_empty()).map(|v| (var, v)))
    else {
        tracing::debug!("no locale in environment, using en");
        return Locale::en;
    };

    match resolve_locale(&name) {
        Ok(locale) => {
            tracing::trace!(var, locale = locale.name(), "resolved host locale");
            locale
        }
        Err(e) => {
            tracing::debug!(var, error = %e, "unusable host locale, using en");
            Locale::en
        }
    }
}
