//! Plottable progress series and selection validation.

use crate::error::{Result, StatsError};


/// A progress column that can be drawn on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Mapped,
    CumulativeMapped,
    Validated,
    CumulativeValidated,
}


impl Series {
    pub const ALL: [Series; 4] = [
        Series::Mapped,
        Series::CumulativeMapped,
        Series::Validated,
        Series::CumulativeValidated,
    ];

    /// Column name in the progress table.
    pub fn name(self) -> &'static str {
        match self {
            Series::Mapped => "mapped",
            Series::CumulativeMapped => "cumulative_mapped",
            Series::Validated => "validated",
            Series::CumulativeValidated => "cumulative_validated",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Series::Mapped => "Mapped",
            Series::CumulativeMapped => "Mapped (cumulative)",
            Series::Validated => "Validated",
            Series::CumulativeValidated => "Validated (cumulative)",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Series::Mapped => "blue",
            Series::CumulativeMapped => "lightblue",
            Series::Validated => "green",
            Series::CumulativeValidated => "lightgreen",
        }
    }

    /// Daily series are drawn as bars, cumulative ones as filled areas.
    pub fn is_cumulative(self) -> bool {
        matches!(self, Series::CumulativeMapped | Series::CumulativeValidated)
    }

    pub fn valid_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }

    pub fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| StatsError::InvalidSeriesSelection {
                item: name.to_string(),
                valid: Self::valid_names(),
            })
    }

    /// Validate a requested selection; `None` or an empty list selects all.
    ///
    /// The result is deduplicated and ordered like [`Series::ALL`].
    pub fn parse_selection<S: AsRef<str>>(which: Option<&[S]>) -> Result<Vec<Series>> {
        let requested = match which {
            Some(names) if !names.is_empty() => names,
            _ => return Ok(Self::ALL.to_vec()),
        };

        let mut parsed = Vec::with_capacity(requested.len());
        for name in requested {
            parsed.push(Self::parse(name.as_ref())?);
        }

        Ok(Self::ALL.into_iter().filter(|s| parsed.contains(s)).collect())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_all() {
        let selection = Series::parse_selection::<&str>(None).unwrap();
        assert_eq!(selection, Series::ALL.to_vec());

        let empty: [&str; 0] = [];
        assert_eq!(Series::parse_selection(Some(&empty[..])).unwrap(), Series::ALL.to_vec());
    }

    #[test]
    fn test_single_name() {
        let selection = Series::parse_selection(Some(&["validated"][..])).unwrap();
        assert_eq!(selection, vec![Series::Validated]);
    }

    #[test]
    fn test_selection_is_ordered_and_deduplicated() {
        let names = ["cumulative_validated", "mapped", "mapped"];
        let selection = Series::parse_selection(Some(&names[..])).unwrap();
        assert_eq!(selection, vec![Series::Mapped, Series::CumulativeValidated]);
    }

    #[test]
    fn test_bogus_name_rejected() {
        let names = ["mapped", "bogus"];
        match Series::parse_selection(Some(&names[..])) {
            Err(StatsError::InvalidSeriesSelection { item, valid }) => {
                assert_eq!(item, "bogus");
                assert_eq!(valid, vec!["mapped", "cumulative_mapped", "validated", "cumulative_validated"]);
            }
            other => panic!("expected invalid selection, got {other:?}"),
        }
    }

    #[test]
    fn test_cumulative_flags() {
        assert!(!Series::Mapped.is_cumulative());
        assert!(Series::CumulativeMapped.is_cumulative());
        assert!(Series::CumulativeValidated.is_cumulative());
    }
}
