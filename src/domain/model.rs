use crate::utils::error::{PlanError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive calendar range. `end` is never earlier than `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn day_count(&self) -> u32 {
        inclusive_day_count(self.start, self.end)
    }
}

/// `max(1, round(end - start) + 1)`，反向區間也會回傳 1
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> u32 {
    let diff = end.signed_duration_since(start).num_days();
    let days = (diff + 1).max(1);
    u32::try_from(days).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day_number: u32,
    pub title: String,
    pub activities: Vec<String>,
}

impl DayPlan {
    pub fn new<T, A>(day_number: u32, title: T, activities: A) -> Self
    where
        T: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            day_number,
            title: title.into(),
            activities: activities.into_iter().map(Into::into).collect(),
        }
    }

    pub fn label(&self) -> String {
        format!("Day {}", self.day_number)
    }
}

/// Days ordered by `day_number`, numbered `1..=N` with no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    days: Vec<DayPlan>,
}

impl Itinerary {
    /// Builds an itinerary from hand-assembled days, checking numbering and activities.
    pub fn from_days(days: Vec<DayPlan>) -> Result<Self> {
        if days.is_empty() {
            return Err(PlanError::invalid_input(
                "days",
                "an itinerary needs at least one day",
            ));
        }

        for (index, day) in days.iter().enumerate() {
            let expected = index as u32 + 1;
            if day.day_number != expected {
                return Err(PlanError::invalid_input(
                    "day_number",
                    format!("expected day {} but found day {}", expected, day.day_number),
                ));
            }
            if day.activities.is_empty() {
                return Err(PlanError::invalid_input(
                    "activities",
                    format!("day {} has no activities", day.day_number),
                ));
            }
        }

        Ok(Self { days })
    }

    // 由產生器內部使用，樣板保證編號連續
    pub(crate) fn from_generated(days: Vec<DayPlan>) -> Self {
        debug_assert!(days
            .iter()
            .enumerate()
            .all(|(i, d)| d.day_number == i as u32 + 1 && !d.activities.is_empty()));
        Self { days }
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|d| d.activities.len()).sum()
    }
}

impl<'de> Deserialize<'de> for Itinerary {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            days: Vec<DayPlan>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Itinerary::from_days(raw.days).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.days.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "Day {} — {}", day.day_number, day.title)?;
            for activity in &day.activities {
                writeln!(f, "  • {}", activity)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Basic,
    Advanced,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Basic => write!(f, "basic"),
            Mode::Advanced => write!(f, "advanced"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Pace {
    #[default]
    Balanced,
    Packed,
    Relaxed,
}

impl FromStr for Pace {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "balanced" | "balanced pace" => Ok(Pace::Balanced),
            "packed" => Ok(Pace::Packed),
            "relaxed" => Ok(Pace::Relaxed),
            other => Err(PlanError::InvalidConfigValueError {
                field: "pace".to_string(),
                value: other.to_string(),
                reason: "Valid values: balanced, packed, relaxed".to_string(),
            }),
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pace::Balanced => write!(f, "Balanced pace"),
            Pace::Packed => write!(f, "Packed"),
            Pace::Relaxed => write!(f, "Relaxed"),
        }
    }
}

impl TryFrom<String> for Pace {
    type Error = PlanError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Pace> for String {
    fn from(value: Pace) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TransportMode {
    #[default]
    Walking,
    PublicTransport,
    Car,
}

impl FromStr for TransportMode {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "walking" => Ok(TransportMode::Walking),
            "public transport" => Ok(TransportMode::PublicTransport),
            "car" => Ok(TransportMode::Car),
            other => Err(PlanError::InvalidConfigValueError {
                field: "transport".to_string(),
                value: other.to_string(),
                reason: "Valid values: walking, public-transport, car".to_string(),
            }),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Walking => write!(f, "Walking"),
            TransportMode::PublicTransport => write!(f, "Public transport"),
            TransportMode::Car => write!(f, "Car"),
        }
    }
}

impl TryFrom<String> for TransportMode {
    type Error = PlanError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TransportMode> for String {
    fn from(value: TransportMode) -> Self {
        value.to_string()
    }
}

/// Advanced form fields. Collected but not yet consumed by generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedPreferences {
    pub day_start: Option<String>,
    pub day_end: Option<String>,
    pub pace: Pace,
    pub must_visit: Vec<String>,
    pub transport: TransportMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub destination: Option<String>,
    pub interests: Vec<String>,
    pub advanced: AdvancedPreferences,
}

/// Raw form values for one generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripRequest {
    pub start: Option<String>,
    pub end: Option<String>,
    pub mode: Mode,
    pub preferences: Preferences,
}

impl TripRequest {
    pub fn basic(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            mode: Mode::Basic,
            preferences: Preferences::default(),
        }
    }

    pub fn advanced(preferences: Preferences) -> Self {
        Self {
            mode: Mode::Advanced,
            preferences,
            ..Self::default()
        }
    }
}

/// A rendered export ready to be handed to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [&'static str; 2] = ["csv", "pdf"];
}

impl FromStr for ExportFormat {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(PlanError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", ExportFormat::ALL.join(", ")),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}
