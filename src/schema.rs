use derive_more::{Deref, From};
use getset::Getters;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use typed_builder::TypedBuilder;

pub const QUERY_KEY: &str = "q";
pub const PER_PAGE_KEY: &str = "per_page";
pub const PAGE_NUM_KEY: &str = "page_num";

/// Number of rows the site is asked to put on a single page.
///
/// The site only understands these three values.
/// Anything else is replaced by the default, `100`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Display, EnumString)]
pub enum PerPage {
    #[strum(to_string = "25")]
    TwentyFive,
    #[strum(to_string = "50")]
    Fifty,
    #[default]
    #[strum(to_string = "100")]
    Hundred,
}

impl PerPage {
    pub fn row_count(self) -> usize {
        match self {
            PerPage::TwentyFive => 25,
            PerPage::Fifty => 50,
            PerPage::Hundred => 100,
        }
    }

    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(|x| x.parse().ok()).unwrap_or_default()
    }
}

/// Query string sent with each request, in insertion order.
#[derive(Clone, PartialEq, Eq, Debug, Default, Deref, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParameters(IndexMap<String, String>);

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn per_page(&self) -> PerPage {
        PerPage::from_param(self.get(PER_PAGE_KEY).map(String::as_str))
    }

    /// Returns a copy whose `per_page` is one of the accepted values.
    pub fn with_normalized_per_page(&self) -> (Self, PerPage) {
        let per_page = self.per_page();
        let mut normalized = self.clone();
        normalized.insert(PER_PAGE_KEY, per_page.to_string());
        (normalized, per_page)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One season of one team, as shown in a single table row.
///
/// Every value is the trimmed cell text; nothing is parsed into numbers.
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
#[builder(field_defaults(setter(into)))]
#[getset(get = "pub")]
pub struct TeamRecord {
    team_name: String,
    year: String,
    wins: String,
    losses: String,
    ot_losses: String,
    win_pct: String,
    goals_for: String,
    goals_against: String,
    goal_difference: String,
}

impl TeamRecord {
    pub const FIELD_NAMES: [&'static str; 9] = [
        "team_name",
        "year",
        "wins",
        "losses",
        "ot_losses",
        "win_pct",
        "goals_for",
        "goals_against",
        "goal_difference",
    ];
}

/// Serializes records as a JSON array indented by four spaces.
pub fn records_to_pretty_json(records: &[TeamRecord]) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::{records_to_pretty_json, PerPage, QueryParameters, TeamRecord, PER_PAGE_KEY};

    #[test]
    fn test_per_page_parse() {
        assert_eq!(PerPage::from_param(Some("25")), PerPage::TwentyFive);
        assert_eq!(PerPage::from_param(Some("50")), PerPage::Fifty);
        assert_eq!(PerPage::from_param(Some("100")), PerPage::Hundred);
        assert_eq!(PerPage::from_param(Some("10")), PerPage::Hundred);
        assert_eq!(PerPage::from_param(Some(" 25")), PerPage::Hundred);
        assert_eq!(PerPage::from_param(None), PerPage::Hundred);
        assert_eq!(PerPage::Fifty.to_string(), "50");
        assert_eq!(PerPage::TwentyFive.row_count(), 25);
    }

    #[test]
    fn test_normalize_copies_params() {
        let params: QueryParameters = [("q", "boston"), (PER_PAGE_KEY, "7")]
            .into_iter()
            .collect();
        let (normalized, per_page) = params.with_normalized_per_page();
        assert_eq!(per_page, PerPage::Hundred);
        assert_eq!(normalized.get(PER_PAGE_KEY).map(String::as_str), Some("100"));
        assert_eq!(normalized.get("q").map(String::as_str), Some("boston"));
        assert_eq!(params.get(PER_PAGE_KEY).map(String::as_str), Some("7"));
    }

    #[test]
    fn test_pretty_json() {
        let record = TeamRecord::builder()
            .team_name("Boston Bruins")
            .year("1990")
            .wins("44")
            .losses("24")
            .ot_losses("")
            .win_pct("0.55")
            .goals_for("299")
            .goals_against("264")
            .goal_difference("35")
            .build();
        let json = records_to_pretty_json(&[record]).unwrap();
        assert_eq!(
            json,
            r#"[
    {
        "team_name": "Boston Bruins",
        "year": "1990",
        "wins": "44",
        "losses": "24",
        "ot_losses": "",
        "win_pct": "0.55",
        "goals_for": "299",
        "goals_against": "264",
        "goal_difference": "35"
    }
]"#
        );
        assert_eq!(records_to_pretty_json(&[]).unwrap(), "[]");
    }
}
