//! Fixed metadata stamped on every generated manual page
//!
//! The generation date is a literal, never the current time, so repeated
//! runs produce byte-identical pages.

use chrono::NaiveDate;

use super::error::ManpageError;

/// Display name of the host program, used as the page title
pub const PROGRAM_TITLE: &str = "mangen";

/// Manual section for user commands
pub const SECTION: &str = "1";

/// Provenance shown in the page footer
pub const SOURCE: &str = "generated by `mangen manpage`";

/// Generation date literal, parsed with [`DATE_FORMAT`]
pub const FIXED_DATE: &str = "2017-01-01";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Footer date format, e.g. "Jan 2017"
const DISPLAY_FORMAT: &str = "%b %Y";

/// Header attached to every page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManpageHeader {
    pub title: String,
    pub section: String,
    pub source: String,
    pub date: NaiveDate,
}

impl ManpageHeader {
    /// Builds the header used for all pages of this program
    pub fn fixed() -> Result<Self, ManpageError> {
        Self::with_date_literal(FIXED_DATE)
    }

    fn with_date_literal(literal: &'static str) -> Result<Self, ManpageError> {
        let date = NaiveDate::parse_from_str(literal, DATE_FORMAT)
            .map_err(|source| ManpageError::Configuration { literal, source })?;

        Ok(Self {
            title: PROGRAM_TITLE.to_string(),
            section: SECTION.to_string(),
            source: SOURCE.to_string(),
            date,
        })
    }

    /// Returns the date as it appears in the page footer
    pub fn date_string(&self) -> String {
        self.date.format(DISPLAY_FORMAT).to_string()
    }
}
