use std::cmp::Ordering;

use tracing::debug;

use crate::models::{DirectoryFilters, DirectoryQuery, DoctorRecord, SortBy};

/// Filters `doctors` by every active criterion and orders the survivors.
///
/// The search term matches case-insensitively against name, specialty or
/// hospital; specialty and location must match exactly. Sorting is stable,
/// so ties keep their dataset order. Records whose experience text has no
/// leading number are placed after every record that has one.
pub fn query<'a>(doctors: &'a [DoctorRecord], criteria: &DirectoryQuery) -> Vec<&'a DoctorRecord> {
    let needle = criteria.active_search_term().map(str::to_lowercase);
    let specialty = criteria.active_specialty();
    let location = criteria.active_location();

    let mut matches: Vec<&DoctorRecord> = doctors
        .iter()
        .filter(|doctor| needle.as_deref().map_or(true, |n| matches_search(doctor, n)))
        .filter(|doctor| specialty.map_or(true, |s| doctor.specialty == s))
        .filter(|doctor| location.map_or(true, |l| doctor.location == l))
        .collect();

    match criteria.sort_by {
        SortBy::Rating => matches.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Experience => matches.sort_by(|a, b| by_experience_desc(a, b)),
        SortBy::Fee => matches.sort_by(|a, b| a.consultation_fee.total_cmp(&b.consultation_fee)),
    }

    debug!(
        "Directory query matched {} of {} doctors (sort: {:?})",
        matches.len(),
        doctors.len(),
        criteria.sort_by
    );

    matches
}

fn matches_search(doctor: &DoctorRecord, needle: &str) -> bool {
    doctor.name.to_lowercase().contains(needle)
        || doctor.specialty.to_lowercase().contains(needle)
        || doctor.hospital.to_lowercase().contains(needle)
}

fn by_experience_desc(a: &DoctorRecord, b: &DoctorRecord) -> Ordering {
    match (a.experience_years(), b.experience_years()) {
        (Some(a_years), Some(b_years)) => b_years.cmp(&a_years),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Distinct specialties in the order they first appear.
pub fn specialties(doctors: &[DoctorRecord]) -> Vec<String> {
    distinct(doctors.iter().map(|d| d.specialty.as_str()))
}

/// Distinct locations in the order they first appear.
pub fn locations(doctors: &[DoctorRecord]) -> Vec<String> {
    distinct(doctors.iter().map(|d| d.location.as_str()))
}

pub fn filters(doctors: &[DoctorRecord]) -> DirectoryFilters {
    DirectoryFilters {
        specialties: specialties(doctors),
        locations: locations(doctors),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

pub fn find_by_id<'a>(doctors: &'a [DoctorRecord], id: &str) -> Option<&'a DoctorRecord> {
    doctors.iter().find(|doctor| doctor.id == id)
}

pub fn first_with_specialty<'a>(
    doctors: &'a [DoctorRecord],
    specialty: &str,
) -> Option<&'a DoctorRecord> {
    doctors.iter().find(|doctor| doctor.specialty == specialty)
}

/// Headline shown above the listing, e.g. `Found 2 doctors for "cardio"`.
pub fn result_summary(count: usize, search_term: Option<&str>) -> String {
    let plural = if count == 1 { "" } else { "s" };
    match search_term.map(str::trim).filter(|t| !t.is_empty()) {
        Some(term) => format!("Found {} doctor{} for \"{}\"", count, plural, term),
        None => format!("Found {} doctor{}", count, plural),
    }
}
