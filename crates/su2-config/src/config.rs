//! Writer configuration

use serde::{Deserialize, Serialize};

/// Output layout options for the writer
///
/// Every combination writes text that reads back to the same document; the
/// default reproduces the canonical annotated format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Emit description, type and domain comments above each option
    pub annotate: bool,
    /// Emit a banner before the first printed option of each category
    pub category_banners: bool,
    /// Emit the fixed header block
    pub header: bool,
}

impl WriterConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bare `KEY= value` lines with no header, banners or comments
    #[inline]
    #[must_use]
    pub fn compact() -> Self {
        Self {
            annotate: false,
            category_banners: false,
            header: false,
        }
    }

    /// With option annotations
    #[inline]
    #[must_use]
    pub fn with_annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// With category banners
    #[inline]
    #[must_use]
    pub fn with_category_banners(mut self, banners: bool) -> Self {
        self.category_banners = banners;
        self
    }

    /// With header block
    #[inline]
    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            annotate: true,
            category_banners: true,
            header: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fully_annotated() {
        let config = WriterConfig::new();
        assert!(config.annotate && config.category_banners && config.header);
    }

    #[test]
    fn builders_toggle_fields() {
        let config = WriterConfig::new().with_annotate(false).with_header(false);
        assert!(!config.annotate);
        assert!(config.category_banners);
        assert!(!config.header);
        let compact = WriterConfig::compact();
        assert_eq!(compact, config.with_category_banners(false));
    }

    #[test]
    fn missing_json_fields_take_defaults() {
        let config: WriterConfig = serde_json::from_str(r#"{ "annotate": false }"#).unwrap();
        assert_eq!(config, WriterConfig::new().with_annotate(false));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"annotate":false,"category_banners":true,"header":true}"#);
    }
}
