//! Locale-aware number formatting on ICU4X.
//!
//! Identifiers are parsed as BCP 47 locales and formatted with CLDR decimal
//! data through [`icu::decimal::DecimalFormatter`]. Values are converted to
//! an exact decimal first, so rounding to the requested fraction digits is
//! half away from zero on the printed value, the way `Intl.NumberFormat`
//! rounds.
//!
//! A well-formed identifier whose language CLDR does not know (`xx`, `zz`)
//! would silently format with root data. That case is reported as
//! [`FormatError::UnsupportedLocale`] instead, so the caller can fall back.

use crate::i18n::FormatError;
use fixed_decimal::{SignedRoundingMode, UnsignedRoundingMode};
use icu::decimal::input::Decimal;
use icu::decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu::decimal::DecimalFormatter;
use icu::locale::subtags::Language;
use icu::locale::{LanguageIdentifier, Locale, LocaleExpander};

/// Largest supported number of fraction digits
pub const MAX_FRACTION_DIGITS: usize = 20;

/// Options controlling number output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormatOptions {
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
    pub use_grouping: bool,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        Self {
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 3,
            use_grouping: true,
        }
    }
}

impl NumberFormatOptions {
    /// Set the fraction digit range.
    ///
    /// # Arguments
    /// * `minimum` - Digits always printed, padded with zeros
    /// * `maximum` - Digits kept after rounding
    pub fn with_fraction_digits(mut self, minimum: usize, maximum: usize) -> Self {
        self.minimum_fraction_digits = minimum;
        self.maximum_fraction_digits = maximum;
        self
    }

    /// Print the integer part without group separators.
    pub fn without_grouping(mut self) -> Self {
        self.use_grouping = false;
        self
    }

    fn validate(&self) -> Result<(), FormatError> {
        if self.maximum_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(FormatError::InvalidOptions(format!(
                "maximum_fraction_digits must be at most {}, got {}",
                MAX_FRACTION_DIGITS, self.maximum_fraction_digits
            )));
        }
        if self.minimum_fraction_digits > self.maximum_fraction_digits {
            return Err(FormatError::InvalidOptions(format!(
                "minimum_fraction_digits ({}) exceeds maximum_fraction_digits ({})",
                self.minimum_fraction_digits, self.maximum_fraction_digits
            )));
        }
        Ok(())
    }

    fn formatter_options(&self) -> DecimalFormatterOptions {
        let mut options = DecimalFormatterOptions::default();
        if !self.use_grouping {
            options.grouping_strategy = Some(GroupingStrategy::Never);
        }
        options
    }
}

/// Whether CLDR's likely-subtags data knows `language`.
///
/// Unknown languages are maximized with the root defaults, so they end up
/// with the same script and region as `und`. The root default's own
/// language is the one known language that does too.
fn is_known_language(language: Language) -> bool {
    if language.is_unknown() {
        return false;
    }

    let expander = LocaleExpander::new_extended();

    let mut root = LanguageIdentifier::UNKNOWN;
    expander.maximize(&mut root);
    if language == root.language {
        return true;
    }

    let mut id = LanguageIdentifier::UNKNOWN;
    id.language = language;
    expander.maximize(&mut id);
    (id.script, id.region) != (root.script, root.region)
}

fn resolve(code: &str) -> Result<Locale, FormatError> {
    let locale: Locale = code.parse().map_err(|e| FormatError::InvalidIdentifier {
        code: code.to_string(),
        reason: format!("{}", e),
    })?;

    if !is_known_language(locale.id.language) {
        return Err(FormatError::UnsupportedLocale {
            code: code.to_string(),
        });
    }
    Ok(locale)
}

/// Exact decimal for a finite `value`, rounded and padded per `options`.
fn to_decimal(value: f64, options: &NumberFormatOptions) -> Result<Decimal, FormatError> {
    // `Display` for f64 prints the shortest round-tripping digits, never an exponent
    let text = value.to_string();
    let mut decimal: Decimal = text.parse().map_err(|e| FormatError::InvalidNumber {
        value: text.clone(),
        reason: format!("{:?}", e),
    })?;

    // Both bounded by MAX_FRACTION_DIGITS
    let max = options.maximum_fraction_digits as i16;
    let min = options.minimum_fraction_digits as i16;

    decimal.round_with_mode(
        -max,
        SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
    );
    decimal.absolute.trim_end();
    decimal.absolute.pad_end(-min);
    Ok(decimal)
}

/// Format `value` using the conventions of locale `code`.
///
/// # Errors
/// Fails if `code` is not a valid locale identifier, if its language has no
/// CLDR data, or if `options` are inconsistent.
///
/// # Example
/// ```
/// use locale_loader::i18n::format_number;
///
/// assert_eq!(format_number("en", 1234.5, None).unwrap(), "1,234.5");
/// assert_eq!(format_number("de", 1234.5, None).unwrap(), "1.234,5");
/// ```
pub fn format_number(
    code: &str,
    value: f64,
    options: Option<&NumberFormatOptions>,
) -> Result<String, FormatError> {
    let defaults = NumberFormatOptions::default();
    let options = options.unwrap_or(&defaults);
    options.validate()?;

    let locale = resolve(code)?;

    if value.is_nan() {
        return Ok("NaN".to_string());
    }
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return Ok(format!("{}∞", sign));
    }

    let formatter = DecimalFormatter::try_new(locale.into(), options.formatter_options())
        .map_err(|_| FormatError::UnsupportedLocale {
            code: code.to_string(),
        })?;

    let decimal = to_decimal(value, options)?;
    Ok(formatter.format(&decimal).to_string())
}
