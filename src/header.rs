use crate::error::{Error, Result};

/// Header names are restricted to ASCII letters and hyphens.
pub fn is_valid_header_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic() || b == b'-')
}

/// Strips leading and trailing whitespace, counting a byte order mark as
/// whitespace.
pub fn trim_header_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// One or more headers submitted together.
///
/// A batch is either applied in full or not at all: [`HeaderBatch::validate`]
/// checks every name before the caller touches its header map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderBatch {
    entries: Vec<(String, String)>,
}

impl HeaderBatch {
    pub fn new<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let entries = headers
            .into_iter()
            .map(|(name, value)| (name.into(), trim_header_value(value.as_ref()).to_string()))
            .collect();
        Self { entries }
    }

    pub fn single(name: impl Into<String>, value: impl AsRef<str>) -> Self {
        Self::new([(name.into(), value)])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fails on the first name that is not a valid header name.
    pub fn validate(&self) -> Result<()> {
        match self.entries.iter().find(|(name, _)| !is_valid_header_name(name)) {
            Some((name, _)) => Err(Error::InvalidHeaderName(name.clone())),
            None => Ok(()),
        }
    }
}

impl IntoIterator for HeaderBatch {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_name_charset() {
        assert!(is_valid_header_name("Content-Type"));
        assert!(is_valid_header_name("x-magnetikonline"));
        assert!(is_valid_header_name("-"));

        assert!(!is_valid_header_name(""));
        assert!(!is_valid_header_name("x-invalid^%$#@-header"));
        assert!(!is_valid_header_name("X-Header-2"));
        assert!(!is_valid_header_name("x_header"));
        assert!(!is_valid_header_name("x:header"));
        assert!(!is_valid_header_name("x header"));
        assert!(!is_valid_header_name("x-héader"));
    }

    #[test]
    fn test_batch_trims_values_and_keeps_order() {
        let batch = HeaderBatch::new([("x-a", "  one "), ("x-b", "\ttwo\n"), ("x-a", "three")]);
        let entries: Vec<_> = batch.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                ("x-a".to_string(), "one".to_string()),
                ("x-b".to_string(), "two".to_string()),
                ("x-a".to_string(), "three".to_string()),
            ]
        );
    }

    #[test]
    fn test_value_trim_strips_byte_order_mark() {
        assert_eq!(trim_header_value("\u{FEFF}val\u{FEFF}"), "val");
        assert_eq!(trim_header_value(" \u{00A0}val\u{2028} "), "val");
        assert_eq!(trim_header_value("in\u{FEFF}side"), "in\u{FEFF}side");

        let batch = HeaderBatch::single("x-bom", "\u{FEFF} val ");
        assert_eq!(batch.len(), 1);
        assert!(!batch.is_empty());
        assert_eq!(batch.into_iter().next(), Some(("x-bom".to_string(), "val".to_string())));
        assert!(HeaderBatch::new(Vec::<(String, String)>::new()).is_empty());
    }

    #[test]
    fn test_batch_validation_reports_offending_name() {
        let batch = HeaderBatch::new([("x-first", "value"), ("x-bad!", "value"), ("x-worse?", "value")]);
        match batch.validate() {
            Err(Error::InvalidHeaderName(name)) => assert_eq!(name, "x-bad!"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(HeaderBatch::default().validate().is_ok());
    }
}
