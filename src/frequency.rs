use serde::{Deserialize, Deserializer, Serialize};

/// Rank given to entries without frequency data.
pub const UNRANKED: i64 = i64::MAX;

/// Corpus statistics for one query key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FrequencyRecord {
    #[serde(alias = "Hits")]
    pub hits: u64,
    #[serde(alias = "Total", deserialize_with = "number_or_string")]
    pub total: u64,
    #[serde(alias = "Frequency")]
    pub frequency: i64,
    #[serde(alias = "Query")]
    pub query: String,
}

impl FrequencyRecord {
    /// `total / hits`, lower is more frequent. Zero hits is the best rank.
    pub fn rank(&self) -> i64 {
        if self.hits == 0 {
            return 0;
        }
        i64::try_from(self.total / self.hits).unwrap_or(UNRANKED)
    }
}

/// Accepts `100` and `"100"`; the service reports totals as strings.
fn number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Outcome of a frequency lookup, as cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    Found(FrequencyRecord),
    /// The service was asked and gave no usable answer.
    NotFound,
}

impl Lookup {
    pub fn rank(&self) -> i64 {
        match self {
            Lookup::Found(record) => record.rank(),
            Lookup::NotFound => UNRANKED,
        }
    }

    pub fn record(&self) -> Option<&FrequencyRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

impl From<Option<FrequencyRecord>> for Lookup {
    fn from(value: Option<FrequencyRecord>) -> Self {
        value.map_or(Lookup::NotFound, Lookup::Found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hits: u64, total: u64) -> FrequencyRecord {
        FrequencyRecord {
            hits,
            total,
            frequency: 3,
            query: "Haus".to_string(),
        }
    }

    #[test]
    fn test_rank_is_integer_division() {
        assert_eq!(record(10, 100).rank(), 10);
        assert_eq!(record(3, 100).rank(), 33);
        assert_eq!(record(500, 100).rank(), 0);
    }

    #[test]
    fn test_zero_hits_is_best_rank() {
        assert_eq!(record(0, 0).rank(), 0);
        assert_eq!(record(0, 12345).rank(), 0);
    }

    #[test]
    fn test_not_found_is_worst_rank() {
        assert_eq!(Lookup::NotFound.rank(), i64::MAX);
        assert!(Lookup::Found(record(1, u64::MAX)).rank() <= Lookup::NotFound.rank());
    }

    #[test]
    fn test_legacy_field_names() {
        let json = r#"{"Hits":5,"Total":500,"Frequency":4,"Order":100,"Query":"Buches"}"#;
        let parsed: FrequencyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.hits, 5);
        assert_eq!(parsed.total, 500);
        assert_eq!(parsed.query, "Buches");
        assert_eq!(parsed.rank(), 100);
    }

    #[test]
    fn test_total_may_be_a_string() {
        let json = r#"{"hits":10,"total":"100","frequency":5,"query":"Haus"}"#;
        let parsed: FrequencyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.total, 100);

        let bad = r#"{"hits":10,"total":"viel","frequency":5,"query":"Haus"}"#;
        assert!(serde_json::from_str::<FrequencyRecord>(bad).is_err());
    }
}
