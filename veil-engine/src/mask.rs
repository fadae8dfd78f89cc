//! Masking primitive.
//!
//! Pure string transforms that keep just enough of a value to stay
//! recognizable. Masking is lossy: there is no unmask.
//!
//! Lengths and first/last characters are counted in Unicode scalar values,
//! so multi-byte characters mask cleanly.

/// Masks an email address, keeping the first and last character of the
/// local part and the whole domain: `jd@example.com` -> `j****d@example.com`.
///
/// Values that do not look like an email (no `@`, empty domain, more than
/// one `@`) fall back to [`mask_generic`]. A local part of a single
/// character is too short to mask meaningfully and is returned unchanged.
#[must_use]
pub fn mask_email(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let Some((local, domain)) = value.split_once('@') else {
        return mask_generic(value);
    };
    if domain.is_empty() || domain.contains('@') {
        return mask_generic(value);
    }

    let mut chars = local.chars();
    let (Some(first), Some(last)) = (chars.next(), local.chars().next_back()) else {
        // Empty local part, e.g. "@example.com".
        return value.to_string();
    };
    if chars.next().is_none() {
        // Single-character local part.
        return value.to_string();
    }

    format!("{first}****{last}@{domain}")
}

/// Masks an arbitrary string, keeping the first and last character:
/// `abcdef` -> `a****f`. Strings of two characters or fewer carry too
/// little to keep anything and become `**`; the empty string is returned
/// unchanged.
#[must_use]
pub fn mask_generic(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let mut chars = value.chars();
    let first = chars.next();
    let last = chars.next_back();
    match (first, last) {
        (Some(first), Some(last)) if chars.next().is_some() => format!("{first}****{last}"),
        _ => "**".to_string(),
    }
}
