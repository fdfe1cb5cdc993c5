use crate::models::{Candidate, CandidateKind, MatchQuery};

/// The eight ABO/Rh groups
pub const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Trim and uppercase a blood group tag
#[inline]
pub fn normalize_blood_group(tag: &str) -> String {
    tag.trim().to_uppercase()
}

/// Check whether a tag names one of the ABO/Rh groups
pub fn is_known_blood_group(tag: &str) -> bool {
    let normalized = normalize_blood_group(tag);
    BLOOD_GROUPS.contains(&normalized.as_str())
}

/// Check if a candidate carries the requested blood group
///
/// An empty request matches everything. Blood bank tags list their inventory
/// separated by commas and any entry may match; donor tags compare whole.
#[inline]
pub fn matches_blood_group(candidate: &Candidate, blood_group: &str) -> bool {
    let wanted = blood_group.trim();
    if wanted.is_empty() {
        return true;
    }

    match candidate.kind {
        CandidateKind::BloodBank => candidate
            .blood_group
            .split(',')
            .any(|tag| tag.trim().eq_ignore_ascii_case(wanted)),
        CandidateKind::Donor => candidate.blood_group.trim().eq_ignore_ascii_case(wanted),
    }
}

/// Location heuristic: does the candidate's city contain the requester location
///
/// Plain substring containment, case-insensitive. An empty location never
/// matches.
#[inline]
pub fn matches_location(candidate: &Candidate, location: &str) -> bool {
    let wanted = location.trim().to_lowercase();
    if wanted.is_empty() {
        return false;
    }

    candidate.city.to_lowercase().contains(&wanted)
}

/// Check if a candidate passes every query filter that does not need a distance
#[inline]
pub fn matches_query_constraints(candidate: &Candidate, query: &MatchQuery) -> bool {
    if let Some(kind) = query.kind {
        if candidate.kind != kind {
            return false;
        }
    }

    if query.available_only && !candidate.available {
        return false;
    }

    matches_blood_group(candidate, &query.blood_group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_group_case_and_whitespace() {
        let donor = Candidate::donor("1", "Asha", "A+", "Mumbai");

        assert!(matches_blood_group(&donor, "a+"));
        assert!(matches_blood_group(&donor, "  A+ "));
        assert!(!matches_blood_group(&donor, "A-"));
    }

    #[test]
    fn test_empty_blood_group_matches_all() {
        let donor = Candidate::donor("1", "Asha", "B-", "Pune");
        assert!(matches_blood_group(&donor, ""));
        assert!(matches_blood_group(&donor, "   "));
    }

    #[test]
    fn test_bank_inventory_matches_any_group() {
        let bank = Candidate::blood_bank("b1", "City Bank", &["A+", " o-", "AB+"], "Delhi");

        assert!(matches_blood_group(&bank, "O-"));
        assert!(matches_blood_group(&bank, "ab+"));
        assert!(!matches_blood_group(&bank, "B+"));
        // "A+" is not a prefix match for "AB+"
        assert!(!matches_blood_group(&Candidate::blood_bank("b2", "x", &["AB+"], "Delhi"), "A+"));
    }

    #[test]
    fn test_donor_tag_is_not_split() {
        let donor = Candidate::donor("1", "Asha", "A+,B+", "Mumbai");

        assert!(!matches_blood_group(&donor, "B+"));
        assert!(!matches_blood_group(&donor, "A+"));
        assert!(matches_blood_group(&donor, "a+,b+"));
    }

    #[test]
    fn test_location_substring() {
        let donor = Candidate::donor("1", "Ravi", "O+", "Navi Mumbai");

        assert!(matches_location(&donor, "mumbai"));
        assert!(matches_location(&donor, " MUMBAI "));
        assert!(!matches_location(&donor, "pune"));
        assert!(!matches_location(&donor, ""));
    }

    #[test]
    fn test_query_constraints() {
        let donor = Candidate::donor("1", "Ravi", "O+", "Pune").with_availability(false);

        assert!(matches_query_constraints(&donor, &MatchQuery::new("o+")));
        assert!(!matches_query_constraints(&donor, &MatchQuery::new("o+").available_only()));
        assert!(!matches_query_constraints(
            &donor,
            &MatchQuery::new("").with_kind(CandidateKind::BloodBank)
        ));
    }

    #[test]
    fn test_known_blood_groups() {
        assert!(is_known_blood_group(" ab- "));
        assert!(!is_known_blood_group("C+"));
        assert_eq!(normalize_blood_group(" o+ "), "O+");
    }
}
