//! Near-Earth objects, their close approaches, and the flat records they
//! serialize to.
//!
//! Both record types are built independently from loaded data with their links
//! unset. [`crate::database::NeoDatabase`] links them once; after that the
//! graph is read-only. Links are positions into the database's collections
//! rather than owning pointers: an object observes its approaches, it does not
//! own them.

use crate::error::{NeoError, Result};
use crate::helpers::datetime_to_str;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Position of an object in its [`crate::database::NeoDatabase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeoId(pub(crate) usize);

/// Position of an approach in its [`crate::database::NeoDatabase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApproachId(pub(crate) usize);

/// A near-Earth object (NEO).
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    pub designation: String,
    /// IAU name. Many objects have none.
    pub name: Option<String>,
    /// Diameter in kilometers, NaN when unknown.
    pub diameter: f64,
    pub hazardous: bool,
    pub(crate) approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: f64,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.filter(|n| !n.trim().is_empty()),
            diameter,
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// Close approaches of this object, in load order. Empty until linked.
    pub fn approaches(&self) -> &[ApproachId] {
        &self.approaches
    }

    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    pub fn serialize(&self) -> NeoRecord {
        NeoRecord {
            designation: self.designation.clone(),
            name: self.name.clone().unwrap_or_default(),
            diameter_km: self.diameter,
            potentially_hazardous: self.hazardous,
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {} ", self.fullname())?;
        if self.diameter.is_nan() {
            write!(f, "has an unknown diameter")?;
        } else {
            write!(f, "has a diameter of {:.3} km", self.diameter)?;
        }
        write!(
            f,
            " and {} potentially hazardous.",
            if self.hazardous { "is" } else { "is not" }
        )
    }
}

/// A close approach to Earth by a NEO.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    designation: String,
    pub time: NaiveDateTime,
    /// Nominal approach distance in astronomical units.
    pub distance: f64,
    /// Relative approach velocity in km/s.
    pub velocity: f64,
    pub(crate) neo: Option<NeoId>,
}

impl CloseApproach {
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Designation of the object this approach belongs to.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn neo_id(&self) -> Option<NeoId> {
        self.neo
    }

    pub fn time_str(&self) -> String {
        datetime_to_str(&self.time)
    }

    pub fn serialize(&self) -> ApproachRecord {
        ApproachRecord {
            datetime_utc: self.time_str(),
            distance_au: self.distance,
            velocity_km_s: self.velocity,
        }
    }
}

/// An approach viewed together with its linked object, if any.
///
/// This is what filters evaluate and what queries yield.
#[derive(Debug, Clone, Copy)]
pub struct LinkedApproach<'db> {
    pub approach: &'db CloseApproach,
    pub neo: Option<&'db NearEarthObject>,
}

impl<'db> LinkedApproach<'db> {
    pub fn new(approach: &'db CloseApproach, neo: Option<&'db NearEarthObject>) -> Self {
        Self { approach, neo }
    }

    /// The linked object, or `AttributeUnavailable` naming the attribute that
    /// needed it.
    pub fn require_neo(&self, attribute: &'static str) -> Result<&'db NearEarthObject> {
        self.neo.ok_or_else(|| NeoError::AttributeUnavailable {
            attribute,
            designation: self.approach.designation.clone(),
        })
    }
}

impl fmt::Display for LinkedApproach<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let who = match self.neo {
            Some(neo) => neo.fullname(),
            None => self.approach.designation.clone(),
        };
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time_str(),
            who,
            self.approach.distance,
            self.approach.velocity
        )
    }
}

/// Flat mapping of an approach for CSV and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachRecord {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
}

/// Flat mapping of an object for CSV and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoRecord {
    pub designation: String,
    pub name: String,
    pub diameter_km: f64,
    pub potentially_hazardous: bool,
}
