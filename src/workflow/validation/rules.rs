//! Individual field rule implementations.
//!
//! Each rule is a pure function over one raw field value. Rules return the
//! normalized value on success or a human-readable message on failure, which
//! schemas record with [`FieldErrors::capture`].
//!
//! [`FieldErrors::capture`]: crate::workflow::domain::FieldErrors::capture

use crate::workflow::ports::ValidationConfig;

/// Result type for a single field rule.
pub type RuleResult<T> = Result<T, String>;

/// Applies the configured whitespace normalization.
#[must_use]
pub fn normalize<'a>(value: &'a str, config: &ValidationConfig) -> &'a str {
    if config.trim_text { value.trim() } else { value }
}

/// Requires a non-empty value within the configured length.
///
/// # Errors
///
/// Returns a message when the value is empty after normalization or exceeds
/// `config.max_text_length` characters.
pub fn required_text(value: &str, label: &str, config: &ValidationConfig) -> RuleResult<String> {
    let normalized = normalize(value, config);
    if normalized.is_empty() {
        return Err(format!("{label} is required"));
    }
    within_length(normalized, label, config)?;
    Ok(normalized.to_owned())
}

/// Accepts an optional value; empty input maps to `None`.
///
/// # Errors
///
/// Returns a message when the value exceeds `config.max_text_length`
/// characters.
pub fn optional_text(
    value: &str,
    label: &str,
    config: &ValidationConfig,
) -> RuleResult<Option<String>> {
    let normalized = normalize(value, config);
    if normalized.is_empty() {
        return Ok(None);
    }
    within_length(normalized, label, config)?;
    Ok(Some(normalized.to_owned()))
}

/// Accepts any value verbatim; only the empty string maps to `None`.
///
/// Neither trimming nor the configured length limit applies.
#[must_use]
pub fn free_text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Requires the value to name exactly one member of a closed set.
///
/// # Errors
///
/// Returns a message listing `options` when the value does not parse.
pub fn one_of<T>(value: &str, label: &str, options: &[&str]) -> RuleResult<T>
where
    T: for<'a> TryFrom<&'a str>,
{
    T::try_from(value).map_err(|_| format!("{label} must be one of: {}", options.join(", ")))
}

/// Requires a plausible `local@domain.tld` e-mail address.
///
/// # Errors
///
/// Returns a message when the value is empty, too long, or not shaped like
/// an address.
pub fn email_address(value: &str, label: &str, config: &ValidationConfig) -> RuleResult<String> {
    let address = required_text(value, label, config)?;
    let is_valid = address
        .split_once('@')
        .is_some_and(|(local, domain)| is_email_shape(local, domain));
    if !is_valid {
        return Err(format!("{label} must be a valid e-mail address"));
    }
    Ok(address)
}

fn is_email_shape(local: &str, domain: &str) -> bool {
    let domain_ok = domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
    !local.is_empty()
        && domain_ok
        && !domain.contains('@')
        && !local.chars().chain(domain.chars()).any(char::is_whitespace)
}

fn within_length(value: &str, label: &str, config: &ValidationConfig) -> RuleResult<()> {
    if value.chars().count() > config.max_text_length {
        return Err(format!(
            "{label} must be at most {} characters",
            config.max_text_length
        ));
    }
    Ok(())
}
