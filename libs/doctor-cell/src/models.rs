use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    pub id: String,
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub subspecialty: String,
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
    /// Free text such as "15 years"; only the leading integer is meaningful.
    pub experience: String,
    pub consultation_fee: f64,
    pub location: String,
    pub hospital: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl DoctorRecord {
    /// Years of experience parsed from the leading integer of `experience`.
    /// `None` when the text does not start with a number.
    pub fn experience_years(&self) -> Option<i64> {
        parse_leading_int(&self.experience)
    }
}

/// Reads an optionally signed integer from the start of `text`, skipping
/// leading whitespace and ignoring whatever follows the digits. Values too
/// large for `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // Digits are all ASCII here, so a parse failure can only be overflow
    let value = match rest[..digits_end].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Some(value)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Rating,
    Experience,
    Fee,
}

/// Filter and sort criteria for a directory lookup. Empty strings count as
/// "no filter", the same as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
}

impl DirectoryQuery {
    pub fn search(term: &str) -> Self {
        Self {
            search_term: Some(term.to_string()),
            ..Self::default()
        }
    }

    pub fn sorted_by(sort_by: SortBy) -> Self {
        Self {
            sort_by,
            ..Self::default()
        }
    }

    pub fn with_specialty(mut self, specialty: &str) -> Self {
        self.specialty = Some(specialty.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// The trimmed search term, or `None` when it is blank.
    pub fn active_search_term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    pub fn active_specialty(&self) -> Option<&str> {
        active(&self.specialty)
    }

    pub fn active_location(&self) -> Option<&str> {
        active(&self.location)
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Distinct values offered by the listing's filter dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryFilters {
    pub specialties: Vec<String>,
    pub locations: Vec<String>,
}

/// On-disk shape of the doctor dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorDataset {
    pub doctors: Vec<DoctorRecord>,
}
