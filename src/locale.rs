//! Locale symbol tables
//!
//! This module loads the embedded per-locale symbol data (separators,
//! signs, special-value tokens, digit glyph sets and standard patterns)
//! and hands out [`LocaleSymbols`] values by locale identifier. The engine
//! itself never looks anything up here; callers fetch symbols once and pass
//! them into formatter/parser construction.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::types::LocaleSymbols;

/// Error type for locale data loading
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocaleError {
    /// An error occurred while parsing the embedded locale data
    #[error("error parsing locale data: {0}")]
    ParseError(String),
}

type Result<T> = std::result::Result<T, LocaleError>;

/// Registry of the embedded locale symbol tables
pub struct LocaleManager {
    symbols: HashMap<String, LocaleSymbols>,
}

// Global singleton for the embedded symbol tables
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    fn new() -> Self {
        let mut manager = Self {
            symbols: HashMap::new(),
        };

        if let Err(e) = manager.load_embedded_data() {
            // Log the error and continue with an empty registry
            eprintln!("Failed to load embedded locale data: {e}");
        }

        manager
    }

    fn load_embedded_data(&mut self) -> Result<()> {
        let symbols_toml = include_str!("locale/symbols.toml");
        self.parse_symbol_tables(symbols_toml)
    }

    /// Parse the symbol tables: `base` supplies defaults, every other
    /// section overrides individual symbols on top of it
    fn parse_symbol_tables(&mut self, toml_str: &str) -> Result<()> {
        let parsed: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("root is not a table".to_string()))?;

        let base = if let Some(base) = table.get("base") {
            let mut symbols = LocaleSymbols::default();
            apply_symbol_overrides(&mut symbols, base)?;
            symbols
        } else {
            LocaleSymbols::default()
        };

        for (locale_id, value) in table {
            if locale_id.as_str() == "base" {
                continue;
            }
            let mut symbols = base.clone();
            apply_symbol_overrides(&mut symbols, value)?;
            self.symbols.insert(locale_id.to_string(), symbols);
        }

        Ok(())
    }

    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }
}

fn apply_symbol_overrides(symbols: &mut LocaleSymbols, value: &toml::Value) -> Result<()> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("locale entry is not a table".to_string()))?;

    if let Some(v) = table.get("decimal").and_then(|v| v.as_str()) {
        symbols.decimal = v.to_string();
    }
    if let Some(v) = table.get("group").and_then(|v| v.as_str()) {
        symbols.group = v.to_string();
    }
    if let Some(v) = table.get("percent_sign").and_then(|v| v.as_str()) {
        symbols.percent_sign = v.to_string();
    }
    if let Some(v) = table.get("per_mille").and_then(|v| v.as_str()) {
        symbols.per_mille = v.to_string();
    }
    if let Some(v) = table.get("minus_sign").and_then(|v| v.as_str()) {
        symbols.minus_sign = v.to_string();
    }
    if let Some(v) = table.get("plus_sign").and_then(|v| v.as_str()) {
        symbols.plus_sign = v.to_string();
    }
    if let Some(v) = table.get("infinity").and_then(|v| v.as_str()) {
        symbols.infinity = v.to_string();
    }
    if let Some(v) = table.get("nan").and_then(|v| v.as_str()) {
        symbols.nan = v.to_string();
    }
    if let Some(v) = table.get("decimal_pattern").and_then(|v| v.as_str()) {
        symbols.decimal_pattern = v.to_string();
    }
    if let Some(v) = table.get("percent_pattern").and_then(|v| v.as_str()) {
        symbols.percent_pattern = v.to_string();
    }
    if let Some(v) = table.get("digits").and_then(|v| v.as_str()) {
        let glyphs: Vec<char> = v.chars().collect();
        symbols.digits = glyphs.try_into().map_err(|_| {
            LocaleError::ParseError("digits must hold exactly ten glyphs".to_string())
        })?;
    }

    Ok(())
}

/// Get locale symbols by locale identifier (e.g. `"en"`, `"ar"`)
pub fn get_locale_symbols(locale_id: &str) -> Option<LocaleSymbols> {
    LocaleManager::get().symbols.get(locale_id).cloned()
}

/// List all embedded locale identifiers
pub fn list_available_locales() -> Vec<String> {
    LocaleManager::get().symbols.keys().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_loading() {
        let locales = list_available_locales();
        assert!(!locales.is_empty(), "Should have loaded some locales");

        let en = get_locale_symbols("en");
        assert!(en.is_some(), "Should have en locale");

        if let Some(symbols) = en {
            assert_eq!(symbols.decimal, ".");
            assert_eq!(symbols.group, ",");
            assert_eq!(symbols.digits[3], '3');
        }
    }

    #[test]
    fn test_locale_overrides() {
        let es = get_locale_symbols("es").unwrap();
        assert_eq!(es.decimal, ",");
        assert_eq!(es.group, ".");
        // Untouched symbols fall through from the base table
        assert_eq!(es.nan, "NaN");
    }

    #[test]
    fn test_arabic_numbering_system() {
        let ar = get_locale_symbols("ar").unwrap();
        assert_eq!(ar.digits[0], '\u{0660}');
        assert_eq!(ar.digits[9], '\u{0669}');
        assert_eq!(ar.percent_sign, "\u{066a}");
        assert_eq!(ar.digit_value('\u{0663}'), Some(3));
    }

    #[test]
    fn test_unknown_locale() {
        assert!(get_locale_symbols("tlh").is_none());
    }
}
