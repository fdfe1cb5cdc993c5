use serde::{Deserialize, Serialize};

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Build a coordinate only when both components are present
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(Self::new(lat, lon)),
            _ => None,
        }
    }

    /// Latitude in [-90, 90], longitude in [-180, 180], both finite
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Kind of record a candidate was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CandidateKind {
    Donor,
    BloodBank,
}

/// A donor or blood bank eligible for matching
///
/// For blood banks `blood_group` holds the comma-separated inventory list,
/// e.g. `"A+, O-"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub kind: CandidateKind,
    pub name: String,
    #[serde(rename = "bloodGroup")]
    pub blood_group: String,
    pub city: String,
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    /// Donor availability, or bank stock indicator
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub contact: Option<String>,
}

fn default_true() -> bool { true }

impl Candidate {
    pub fn donor(id: impl Into<String>, name: impl Into<String>, blood_group: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: CandidateKind::Donor,
            name: name.into(),
            blood_group: blood_group.into(),
            city: city.into(),
            coordinate: None,
            available: true,
            contact: None,
        }
    }

    pub fn blood_bank(id: impl Into<String>, name: impl Into<String>, blood_groups: &[&str], city: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: CandidateKind::BloodBank,
            name: name.into(),
            blood_group: blood_groups.join(","),
            city: city.into(),
            coordinate: None,
            available: true,
            contact: None,
        }
    }

    pub fn with_coordinate(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinate = Some(Coordinate::new(latitude, longitude));
        self
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Coordinate usable for distance computation
    pub fn valid_coordinate(&self) -> Option<Coordinate> {
        self.coordinate.filter(Coordinate::is_valid)
    }
}

/// Matching query issued by a requester
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchQuery {
    /// Empty matches any group
    pub blood_group: String,
    /// Requester city label, only used for the heuristic fallback
    pub location: String,
    pub coordinate: Option<Coordinate>,
    pub max_radius_km: Option<f64>,
    pub available_only: bool,
    pub kind: Option<CandidateKind>,
}

impl MatchQuery {
    pub fn new(blood_group: impl Into<String>) -> Self {
        Self {
            blood_group: blood_group.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_coordinate(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinate = Some(Coordinate::new(latitude, longitude));
        self
    }

    pub fn with_max_radius(mut self, max_radius_km: f64) -> Self {
        self.max_radius_km = Some(max_radius_km);
        self
    }

    pub fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }

    pub fn with_kind(mut self, kind: CandidateKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// How far a candidate is from the requester
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// Haversine distance in kilometers, one decimal place
    Known(f64),
    /// No coordinates, but the city label matches the requester location
    Heuristic,
    /// Nothing to go on
    Unknown,
}

impl Distance {
    /// Kilometers used for sorting and radius checks. Heuristic counts as 0.0.
    pub fn km(&self) -> Option<f64> {
        match self {
            Distance::Known(km) => Some(*km),
            Distance::Heuristic => Some(0.0),
            Distance::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Distance::Known(_))
    }

    /// Label for the `distanceSource` field
    pub fn source(&self) -> &'static str {
        match self {
            Distance::Known(_) => "computed",
            Distance::Heuristic => "heuristic",
            Distance::Unknown => "unknown",
        }
    }

    /// Display string such as `"12.5 km"`
    pub fn display(&self) -> Option<String> {
        self.km().map(|km| format!("{:.1} km", km))
    }
}

/// A candidate annotated with its distance from the requester
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'a> {
    pub candidate: &'a Candidate,
    pub distance: Distance,
}
