/// Redact an email for display, keeping the domain.
///
/// `alice@example.com` becomes `a***e@example.com`; local parts of one or two
/// characters keep only the first one. Input without an `@` or without a domain is
/// returned unchanged. Masking is not idempotent, so only pass real addresses.
#[must_use]
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    if domain.is_empty() {
        return email.to_string();
    }

    let mut chars = local.chars();
    let first = chars.next();
    let last = chars.next_back();
    let len = local.chars().count();

    match (first, last) {
        (Some(first), Some(last)) if len > 2 => format!("{first}***{last}@{domain}"),
        (Some(first), _) => format!("{first}***@{domain}"),
        (None, _) => format!("***@{domain}"),
    }
}
