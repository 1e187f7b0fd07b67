//! Human-readable rendering of validation results.

use super::{UnitReport, UnitStatus, ValidationReport};
use std::fmt;

const RULE_WIDTH: usize = 50;

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitStatus::Ok { words } => write!(f, "{} words", words),
            UnitStatus::Below { words, missing } => {
                write!(f, "{} words ({} missing)", words, missing)
            }
            UnitStatus::Unreadable(reason) => write!(f, "unreadable: {}", reason),
        }
    }
}

impl UnitReport {
    fn label(&self) -> &'static str {
        match self.status {
            UnitStatus::Ok { .. } => "OK",
            UnitStatus::Below { .. } => "BELOW",
            UnitStatus::Unreadable(_) => "ERROR",
        }
    }
}

impl fmt::Display for UnitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5} {}: {}", self.label(), self.name, self.status)
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(f)?;
    writeln!(f, "{}", rule)?;
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", rule)
}

/// Format an integer with comma thousands separators.
pub(crate) fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Store: {} (minimum {} words per unit)",
            self.store.display(),
            self.minimum_words
        )?;
        for unit in &self.units {
            writeln!(f, "{}", unit)?;
        }

        heading(f, "SUMMARY")?;
        writeln!(f, "Units: {}", self.total())?;
        writeln!(f, "With >= {} words: {}", self.minimum_words, self.ok_count())?;
        writeln!(f, "With < {} words: {}", self.minimum_words, self.below_count())?;
        writeln!(f, "Unreadable: {}", self.unreadable_count())?;
        writeln!(f, "Mean words per unit: {:.1}", self.mean_words())?;
        writeln!(f, "Total words: {}", group_thousands(self.total_words()))?;

        if self.failures().next().is_some() {
            heading(f, "UNITS NEEDING ATTENTION")?;
            for unit in self.failures() {
                writeln!(f, "{}: {}", unit.name, unit.status)?;
            }
        }

        if let (Some(largest), Some(smallest)) = (self.largest(), self.smallest()) {
            let most = largest.words().unwrap_or(0);
            let least = smallest.words().unwrap_or(0);
            heading(f, "HIGHLIGHTS")?;
            writeln!(f, "Largest: {} - {} words", largest.name, most)?;
            writeln!(f, "Smallest: {} - {} words", smallest.name, least)?;
            writeln!(f, "Spread: {} words", most - least)?;
        }

        writeln!(f)?;
        write!(f, "Result: {}", if self.passed() { "PASS" } else { "FAIL" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::classify;
    use std::path::PathBuf;

    fn unit(name: &str, status: UnitStatus) -> UnitReport {
        UnitReport {
            name: name.to_string(),
            path: PathBuf::from(name),
            status,
        }
    }

    fn sample() -> ValidationReport {
        ValidationReport {
            store: PathBuf::from("textos"),
            minimum_words: 1000,
            units: vec![
                unit("1.txt", classify(1000, 1000)),
                unit("2.txt", classify(850, 1000)),
                unit("3.txt", classify(1200, 1000)),
            ],
        }
    }

    #[test]
    fn test_unit_lines() {
        let report = sample();
        assert_eq!(report.units[0].to_string(), "OK    1.txt: 1000 words");
        assert_eq!(report.units[1].to_string(), "BELOW 2.txt: 850 words (150 missing)");

        let broken = unit("4.txt", UnitStatus::Unreadable("bad data".to_string()));
        assert_eq!(broken.to_string(), "ERROR 4.txt: unreadable: bad data");
    }

    #[test]
    fn test_report_summary() {
        let rendered = sample().to_string();
        assert!(rendered.contains("Units: 3"));
        assert!(rendered.contains("With >= 1000 words: 2"));
        assert!(rendered.contains("With < 1000 words: 1"));
        assert!(rendered.contains("Mean words per unit: 1016.7"));
        assert!(rendered.contains("Total words: 3,050"));
        assert!(rendered.contains("UNITS NEEDING ATTENTION\n=================================================="));
        assert!(rendered.contains("Largest: 3.txt - 1200 words"));
        assert!(rendered.contains("Smallest: 2.txt - 850 words"));
        assert!(rendered.contains("Spread: 350 words"));
        assert!(rendered.ends_with("Result: FAIL"));
    }

    #[test]
    fn test_empty_report_has_no_highlights() {
        let report = ValidationReport {
            store: PathBuf::from("textos"),
            minimum_words: 1000,
            units: Vec::new(),
        };
        let rendered = report.to_string();
        assert!(!rendered.contains("HIGHLIGHTS"));
        assert!(!rendered.contains("NEEDING ATTENTION"));
        assert!(rendered.ends_with("Result: PASS"));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
