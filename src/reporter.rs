//! Presentation of validation results.
//!
//! This module turns the results of both validation phases into a structure front ends
//! can render directly: an error count per phase and, per error, a display path and the
//! message split into plain and highlighted segments. Identifiers and values inside
//! messages are wrapped in single quotes, which is what the highlighting keys on.
//!
//! It performs no validation itself. Three renderings are provided:
//! - Colored terminal text via `Display`
//! - A table via [`Presentation::to_table`]
//! - JSON via [`Presentation::to_json`]

use std::fmt::{self, Display};

use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};
use variantly::Variantly;

use crate::validation::result::{ValidationError, ValidationResult};

lazy_static! {
    static ref QUOTED: Regex = Regex::new(r"'([^']*)'").expect("Invalid highlight pattern");
}

/// Presentation of a complete validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    /// Findings of the structural validator.
    pub structure: Section,
    /// Findings of the consistency validator, `None` if it did not run because the
    /// document is structurally invalid.
    pub consistency: Option<Section>,
}

/// Findings of one validation phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub error_count: usize,
    pub entries: Vec<Entry>,
}

/// A single finding, prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Location without the leading `#/`, e.g. `reactions/0/species/0/species_id`.
    pub display_path: String,
    /// The unmodified message.
    pub message: String,
    /// The message split into plain and highlighted parts.
    pub segments: Vec<Segment>,
}

/// Part of a message. Highlighted segments are the quoted tokens, without quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Variantly)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Highlighted(String),
}

impl Presentation {
    /// Builds the presentation of a validation run.
    ///
    /// # Arguments
    ///
    /// * `structure` - Result of the structural validator.
    /// * `consistency` - Result of the consistency validator, if it ran.
    pub fn new(structure: &ValidationResult, consistency: Option<&ValidationResult>) -> Self {
        Self {
            structure: Section::from(structure),
            consistency: consistency.map(Section::from),
        }
    }

    /// Whether no phase reported an error.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Total number of errors over all phases.
    pub fn error_count(&self) -> usize {
        self.structure.error_count
            + self
                .consistency
                .as_ref()
                .map_or(0, |section| section.error_count)
    }

    /// Renders the presentation as pretty printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Renders all errors as one table with a row per error.
    pub fn to_table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Phase", "Location", "Message"]);

        let phases = [
            ("structure", Some(&self.structure)),
            ("consistency", self.consistency.as_ref()),
        ];

        for (phase, section) in phases {
            for entry in section.iter().flat_map(|s| s.entries.iter()) {
                builder.push_record(vec![phase, entry.display_path.as_str(), entry.message.as_str()]);
            }
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }
}

impl From<&ValidationResult> for Section {
    fn from(result: &ValidationResult) -> Self {
        Self {
            error_count: result.error_count(),
            entries: result.errors.iter().map(Entry::from).collect(),
        }
    }
}

impl From<&ValidationError> for Entry {
    fn from(error: &ValidationError) -> Self {
        Self {
            display_path: display_path(&error.location),
            message: error.message.clone(),
            segments: highlight(&error.message),
        }
    }
}

/// Strips the leading `#/` (or `#` for the root) from a location.
pub fn display_path(location: &str) -> String {
    location
        .strip_prefix("#/")
        .or_else(|| location.strip_prefix('#'))
        .unwrap_or(location)
        .to_string()
}

/// Splits a message into plain text and highlighted single-quoted tokens.
///
/// # Arguments
///
/// * `message` - A validation message such as `Species 's1' is not defined`.
///
/// # Returns
///
/// The segments in message order. Empty plain segments are omitted, quoted tokens are
/// kept even if empty.
pub fn highlight(message: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for captures in QUOTED.captures_iter(message) {
        let (Some(quoted), Some(token)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        if quoted.start() > last {
            segments.push(Segment::Plain(message[last..quoted.start()].to_string()));
        }

        segments.push(Segment::Highlighted(token.as_str().to_string()));
        last = quoted.end();
    }

    if last < message.len() {
        segments.push(Segment::Plain(message[last..].to_string()));
    }

    segments
}

impl Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, "Structure", &self.structure)?;

        match &self.consistency {
            Some(section) => write_section(f, "Consistency", section)?,
            None => writeln!(
                f,
                "{}",
                "Consistency: skipped, the document is structurally invalid".dimmed()
            )?,
        }

        if self.is_valid() {
            writeln!(f, "{}", "The EnzymeML document is valid!".green().bold())?;
        }

        Ok(())
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, section: &Section) -> fmt::Result {
    let count = format!("{} error(s)", section.error_count);
    let count = if section.error_count == 0 {
        count.green()
    } else {
        count.red()
    };
    writeln!(f, "{}: {}", title.bold(), count)?;

    for entry in &section.entries {
        writeln!(f, "  {}", entry.display_path.bold())?;
        write!(f, "\t└── ")?;

        for segment in &entry.segments {
            match segment {
                Segment::Plain(text) => write!(f, "{text}")?,
                Segment::Highlighted(text) => write!(f, "{}", text.yellow().bold())?,
            }
        }

        writeln!(f)?;
    }

    Ok(())
}
