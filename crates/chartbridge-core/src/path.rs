//! Dotted field paths such as `options.legend.onClick`

use crate::error::PipelineError;
use std::fmt;
use std::str::FromStr;

/// Ordered sequence of canonical field names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Parent segments and the leaf key, or `None` for an empty path
    pub fn split_leaf(&self) -> Option<(&[String], &str)> {
        self.segments
            .split_last()
            .map(|(leaf, parents)| (parents, leaf.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromStr for FieldPath {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('.').collect();
        if segments.iter().any(|seg| seg.is_empty()) {
            return Err(PipelineError::parse(format!("invalid field path '{}'", s)));
        }
        Ok(FieldPath::new(segments))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let path: FieldPath = "options.legend.onClick".parse().unwrap();
        assert_eq!(path.segments(), &["options", "legend", "onClick"]);
        assert_eq!(path.to_string(), "options.legend.onClick");
    }

    #[test]
    fn test_split_leaf() {
        let path = FieldPath::new(["options", "legend", "onHover"]);
        let (parents, leaf) = path.split_leaf().unwrap();
        assert_eq!(parents, &["options", "legend"]);
        assert_eq!(leaf, "onHover");
    }

    #[test]
    fn test_rejects_empty_segments() {
        assert!("".parse::<FieldPath>().is_err());
        assert!("options..onClick".parse::<FieldPath>().is_err());
        assert!("options.".parse::<FieldPath>().is_err());
    }
}
