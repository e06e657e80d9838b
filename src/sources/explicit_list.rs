use std::io::Write;

use crate::sources::{SampleSource, SourceError, SourceReport};

/// Values supplied directly, e.g. through `--numbers`.
#[derive(Debug, Clone, Default)]
pub struct ExplicitList {
    values: Vec<f64>,
}

impl ExplicitList {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl SampleSource for ExplicitList {
    fn label(&self) -> &'static str {
        "numbers"
    }

    fn read(&mut self, diag: &mut dyn Write) -> Result<SourceReport, SourceError> {
        let mut report = SourceReport::default();
        for &v in &self.values {
            report.push_value(v, diag)?;
        }
        Ok(report)
    }

    fn announce_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_values_as_given() {
        let mut src = ExplicitList::new(vec![3.0, 1.0]);
        let mut diag = Vec::new();
        let report = src.read(&mut diag).unwrap();
        assert_eq!(report.values, vec![3.0, 1.0]);
        assert!(report.skipped.is_empty());
        assert!(diag.is_empty());
    }

    #[test]
    fn non_finite_values_are_skipped_with_warning() {
        let mut src = ExplicitList::new(vec![1.0, f64::NAN, 3.0, f64::INFINITY]);
        let mut diag = Vec::new();
        let report = src.read(&mut diag).unwrap();
        assert_eq!(report.values, vec![1.0, 3.0]);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(
            String::from_utf8(diag).unwrap(),
            "Line format not recognized: \"NaN\", skipped\n\
             Line format not recognized: \"inf\", skipped\n"
        );
    }

    #[test]
    fn only_non_finite_values_read_as_empty() {
        let mut src = ExplicitList::new(vec![f64::NAN]);
        assert!(src.read(&mut Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn empty_list_is_quiet() {
        let mut src = ExplicitList::default();
        assert!(src.read(&mut Vec::new()).unwrap().is_empty());
        assert!(!src.announce_empty());
    }
}
