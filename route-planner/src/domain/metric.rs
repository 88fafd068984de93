//! Ranking metric.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// The scalar a set of routes is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Total ticket cost.
    Cost,
    /// Total travel time in minutes.
    Time,
}

impl Metric {
    /// Parse a sort key strictly.
    ///
    /// Accepts `C`/`T` and `cost`/`time`, in any case.
    ///
    /// ```
    /// use route_planner::domain::Metric;
    ///
    /// assert_eq!(Metric::parse("c").unwrap(), Metric::Cost);
    /// assert_eq!(Metric::parse("Time").unwrap(), Metric::Time);
    /// assert!(Metric::parse("X").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "cost" => Ok(Metric::Cost),
            "t" | "time" => Ok(Metric::Time),
            _ => Err(DomainError::InvalidMetric(s.trim().to_string())),
        }
    }

    /// Convert a single-character tag leniently.
    ///
    /// Only the cost marker `C` selects [`Metric::Cost`]; every other tag
    /// falls back to [`Metric::Time`], which is how request files have
    /// always been interpreted.
    pub fn from_tag(tag: char) -> Self {
        if tag.eq_ignore_ascii_case(&'C') {
            Metric::Cost
        } else {
            Metric::Time
        }
    }

    /// Single-character tag used in request files.
    pub fn tag(&self) -> char {
        match self {
            Metric::Cost => 'C',
            Metric::Time => 'T',
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Cost => "Cost",
            Metric::Time => "Time",
        }
    }

    /// Pick the value this metric ranks by.
    pub fn select(&self, cost: u64, time: u64) -> u64 {
        match self {
            Metric::Cost => cost,
            Metric::Time => time,
        }
    }
}

impl FromStr for Metric {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::parse(s)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_tags_and_words() {
        assert_eq!(Metric::parse("C"), Ok(Metric::Cost));
        assert_eq!(Metric::parse("t"), Ok(Metric::Time));
        assert_eq!(Metric::parse(" COST "), Ok(Metric::Cost));
        assert_eq!(Metric::parse("time"), Ok(Metric::Time));
    }

    #[test]
    fn parse_rejects_other_values() {
        assert_eq!(
            Metric::parse("speed"),
            Err(DomainError::InvalidMetric("speed".into()))
        );
        assert!(Metric::parse("").is_err());
        assert!(Metric::parse("CT").is_err());
    }

    #[test]
    fn from_tag_defaults_to_time() {
        assert_eq!(Metric::from_tag('C'), Metric::Cost);
        assert_eq!(Metric::from_tag('c'), Metric::Cost);
        assert_eq!(Metric::from_tag('T'), Metric::Time);
        assert_eq!(Metric::from_tag('X'), Metric::Time);
        assert_eq!(Metric::from_tag('1'), Metric::Time);
    }

    #[test]
    fn select_picks_field() {
        assert_eq!(Metric::Cost.select(120, 70), 120);
        assert_eq!(Metric::Time.select(120, 70), 70);
    }

    #[test]
    fn tag_and_label() {
        assert_eq!(Metric::Cost.tag(), 'C');
        assert_eq!(Metric::Time.tag(), 'T');
        assert_eq!(Metric::Cost.to_string(), "Cost");
        assert_eq!(Metric::Time.label(), "Time");
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Metric::Cost).unwrap(), "\"cost\"");
        let m: Metric = serde_json::from_str("\"time\"").unwrap();
        assert_eq!(m, Metric::Time);
    }
}
