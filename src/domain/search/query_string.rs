//! Conversion between the search page's URL query string and [`SearchCriteria`].
//!
//! Recognized keys are `text`, `accepted_from`, `accepted_to`, `page` and the
//! repeatable filter keys `category`, `maturity` and `rating`. Anything else
//! is ignored. Decoding never fails: malformed values fall back to defaults.
use crate::domain::search::{
    criteria::{PageNumber, SearchCriteria},
    filters::FilterCategory,
};
use chrono::NaiveDate;

pub const TEXT_KEY: &str = "text";
pub const ACCEPTED_FROM_KEY: &str = "accepted_from";
pub const ACCEPTED_TO_KEY: &str = "accepted_to";
pub const PAGE_KEY: &str = "page";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build criteria from a raw query string, with or without the leading `?`.
pub fn decode(query: &str) -> SearchCriteria {
    let raw = query.strip_prefix('?').unwrap_or(query);
    match serde_urlencoded::from_str::<Vec<(String, String)>>(raw) {
        Ok(pairs) => decode_pairs(pairs),
        Err(err) => {
            tracing::debug!(error = %err, "ignoring malformed search query string");
            SearchCriteria::default()
        }
    }
}

/// Build criteria from already-split parameters. For scalar keys the first
/// occurrence wins; filter keys accumulate in order.
pub fn decode_pairs<I, K, V>(pairs: I) -> SearchCriteria
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut criteria = SearchCriteria::default();
    let mut seen: Vec<&'static str> = Vec::new();

    for (key, value) in pairs {
        let key = key.as_ref();
        if let Some(category) = FilterCategory::from_key(key) {
            criteria.filters.push(category, value);
            continue;
        }

        let Some(scalar) = [TEXT_KEY, ACCEPTED_FROM_KEY, ACCEPTED_TO_KEY, PAGE_KEY]
            .into_iter()
            .find(|candidate| *candidate == key)
        else {
            continue;
        };
        if seen.contains(&scalar) {
            continue;
        }
        seen.push(scalar);

        let value: String = value.into();
        match scalar {
            TEXT_KEY => criteria.text = Some(value).filter(|text| !text.is_empty()),
            ACCEPTED_FROM_KEY => criteria.accepted_from = parse_date(scalar, &value),
            ACCEPTED_TO_KEY => criteria.accepted_to = parse_date(scalar, &value),
            _ => criteria.page = PageNumber::parse_lenient(&value),
        }
    }

    criteria
}

/// Render criteria as `?key=value&...`. Absent or empty fields are omitted;
/// `page` is always present.
pub fn encode(criteria: &SearchCriteria) -> String {
    let mut pairs: Vec<(&str, String)> = criteria
        .filters
        .iter()
        .map(|(category, value)| (category.as_str(), value.to_owned()))
        .collect();

    if let Some(text) = criteria.text() {
        pairs.push((TEXT_KEY, text.to_owned()));
    }
    if let Some(from) = criteria.accepted_from {
        pairs.push((ACCEPTED_FROM_KEY, format_date(from)));
    }
    if let Some(to) = criteria.accepted_to {
        pairs.push((ACCEPTED_TO_KEY, format_date(to)));
    }
    pairs.push((PAGE_KEY, criteria.page.to_string()));

    match serde_urlencoded::to_string(&pairs) {
        Ok(encoded) => format!("?{encoded}"),
        Err(err) => {
            tracing::error!(error = %err, "failed to encode search query string");
            format!("?{PAGE_KEY}={}", criteria.page)
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date(key: &str, raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::debug!(key, value = raw, "dropping malformed date parameter");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_question_mark_is_optional() {
        assert_eq!(decode("?text=helm&page=2"), decode("text=helm&page=2"));
    }

    #[test]
    fn scalar_keys_keep_first_occurrence() {
        let criteria = decode("text=first&text=second&page=3&page=9");
        assert_eq!(criteria.text.as_deref(), Some("first"));
        assert_eq!(criteria.page.get(), 3);
    }

    #[test]
    fn empty_text_is_absent() {
        assert_eq!(decode("text=&page=1").text, None);
        assert_eq!(encode(&decode("text=")), "?page=1");
    }

    #[test]
    fn malformed_dates_are_dropped() {
        let criteria = decode("accepted_from=yesterday&accepted_to=2021-12-31");
        assert_eq!(criteria.accepted_from, None);
        assert_eq!(
            criteria.accepted_to,
            NaiveDate::from_ymd_opt(2021, 12, 31)
        );
    }

    #[test]
    fn spaces_are_form_encoded() {
        let criteria = decode("?text=service+mesh");
        assert_eq!(criteria.text.as_deref(), Some("service mesh"));
        assert_eq!(encode(&criteria), "?text=service+mesh&page=1");
    }
}
