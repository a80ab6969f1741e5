// Query-string construction for list and lookup endpoints.

use chrono::{DateTime, SecondsFormat, Utc};
use url::form_urlencoded;

/// Filter and pagination parameters shared by the list endpoints.
///
/// Only fields that are set are encoded. `lek` is the opaque "last evaluated
/// key" from a previous page and is passed back verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub id: Option<String>,
    pub card_type: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
    pub lek: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn lek(mut self, lek: impl Into<String>) -> Self {
        self.lek = Some(lek.into());
        self
    }

    /// Encodes the parameters, naming the identifier `id_key` (`user` for
    /// cards, `card` for transactions).
    pub fn to_query(&self, id_key: &str) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());

        if let Some(id) = &self.id {
            query.append_pair(id_key, id);
        }
        if let Some(card_type) = &self.card_type {
            query.append_pair("type", card_type);
        }
        if let Some(start) = &self.start_date {
            query.append_pair("startDate", &format_timestamp(start));
        }
        if let Some(end) = &self.end_date {
            query.append_pair("endDate", &format_timestamp(end));
        }
        if let Some(limit) = self.limit {
            query.append_pair("limit", &limit.to_string());
        }
        if let Some(lek) = &self.lek {
            query.append_pair("lek", lek);
        }

        query.finish()
    }
}

/// Encodes `(key, value)` pairs in order.
pub fn pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Encodes a multi-valued parameter as repeated `key=value` pairs.
pub fn repeated<S: AsRef<str>>(key: &str, values: &[S]) -> String {
    pairs(values.iter().map(|value| (key, value.as_ref())))
}

/// Appends `query` to `path`, leaving the path untouched when there is nothing to add.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_repeated_preserves_order_without_trailing_separator() {
        assert_eq!(
            repeated("currencies", &["USD", "BTC"]),
            "currencies=USD&currencies=BTC"
        );
    }

    #[test]
    fn test_repeated_single_and_empty() {
        assert_eq!(repeated("currencies", &["USD"]), "currencies=USD");
        assert_eq!(repeated::<&str>("currencies", &[]), "");
    }

    #[test]
    fn test_list_params_encode_only_present_fields() {
        let params = ListParams::new().id("aa174033").limit(20);

        assert_eq!(params.to_query("card"), "card=aa174033&limit=20");
    }

    #[test]
    fn test_list_params_full_encoding() {
        let start = Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2022, 6, 2, 14, 2, 37).unwrap();
        let params = ListParams::new()
            .id("e08078bd")
            .card_type("virtual")
            .between(start, end)
            .limit(5)
            .lek("eyJpZCI6IjEyMyJ9");

        assert_eq!(
            params.to_query("user"),
            "user=e08078bd&type=virtual&startDate=2022-06-01T00%3A00%3A00Z\
             &endDate=2022-06-02T14%3A02%3A37Z&limit=5&lek=eyJpZCI6IjEyMyJ9"
        );
    }

    #[test]
    fn test_values_are_percent_encoded() {
        assert_eq!(
            pairs([("card", "a b&c"), ("trackingNumber", "1/2")]),
            "card=a+b%26c&trackingNumber=1%2F2"
        );
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/cards/v1", ""), "/cards/v1");
        assert_eq!(with_query("/cards/v1", "limit=1"), "/cards/v1?limit=1");
    }
}
