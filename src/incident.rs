//! Incident markers recorded against unsuitable signal placements.
//!
//! Records serialize to the JSON layout the viewer reads back
//! (`{"location": {..}, "severity": .., "id": .., "iconIndex": .., "text": ..}`).
//! Markers whose footprints overlap are grouped into clusters that report
//! their most severe members.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::math::Point3;

/// Severity given to a placement warning.
pub const PLACEMENT_WARNING_SEVERITY: u32 = 10;

/// Text shown for a placement warning ("signal light placement is
/// unsuitable, please correct it").
pub const PLACEMENT_WARNING_TEXT: &str = "信号灯放置位置不合适，请修正。";

/// Maximum number of markers listed in a cluster summary.
pub const CLUSTER_TOP_COUNT: usize = 10;

const MIN_SEVERITY: u32 = 1;
const AMBER_SEVERITY: u32 = 16;
const MAX_SEVERITY: u32 = 30;

/// World location of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerLocation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Point3> for MarkerLocation {
    fn from(p: Point3) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl From<MarkerLocation> for Point3 {
    fn from(l: MarkerLocation) -> Self {
        Point3::new(l.x, l.y, l.z)
    }
}

/// A single incident marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    pub location: MarkerLocation,
    pub severity: u32,
    pub id: u64,
    pub icon_index: u32,
    pub text: String,
}

impl IncidentRecord {
    /// The marker placed at `location` when a light's sightline is blocked.
    #[must_use]
    pub fn placement_warning(id: u64, location: Point3) -> Self {
        Self {
            location: location.into(),
            severity: PLACEMENT_WARNING_SEVERITY,
            id,
            icon_index: 0,
            text: PLACEMENT_WARNING_TEXT.to_owned(),
        }
    }

    /// Parses a record from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the JSON does not describe a record.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(ConfigError::from)?)
    }

    /// Serializes the record to JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self).map_err(ConfigError::from)?)
    }

    /// Colour of this marker.
    #[must_use]
    pub fn color(&self) -> Rgb {
        severity_color(self.severity)
    }
}

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const AMBER: Self = Self::new(255, 191, 0);
    pub const RED: Self = Self::new(255, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation toward `other`; `t` is clamped to `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colour for a severity: green at 1 through amber at 16 to red at 30.
/// Severities outside `1..=30` are clamped.
#[must_use]
pub fn severity_color(severity: u32) -> Rgb {
    let s = severity.clamp(MIN_SEVERITY, MAX_SEVERITY);
    if s <= AMBER_SEVERITY {
        Rgb::GREEN.lerp(
            Rgb::AMBER,
            f64::from(s - MIN_SEVERITY) / f64::from(AMBER_SEVERITY - MIN_SEVERITY),
        )
    } else {
        Rgb::AMBER.lerp(
            Rgb::RED,
            f64::from(s - AMBER_SEVERITY) / f64::from(MAX_SEVERITY - AMBER_SEVERITY),
        )
    }
}

/// Markers grouped because their square footprints overlap.
#[derive(Debug, Clone)]
pub struct IncidentCluster {
    markers: Vec<IncidentRecord>,
}

/// What a cluster displays: its size, its most severe markers and their
/// colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSummary {
    /// Number of markers in the cluster.
    pub count: usize,
    /// Up to ten markers, most severe first; ties keep insertion order.
    pub top: Vec<IncidentRecord>,
    /// One `Severity: s Id: id` line per top marker joined by `<br>`, with a
    /// trailing `...` line when markers were left out.
    pub title: String,
    /// Colour of the most severe marker.
    pub color: Rgb,
}

impl IncidentCluster {
    /// Greedily groups `records`. A record joins the first cluster whose
    /// first marker lies within `footprint` of it on both X and Y; otherwise
    /// it starts a new cluster.
    #[must_use]
    pub fn group(records: &[IncidentRecord], footprint: f64) -> Vec<Self> {
        let mut clusters: Vec<Self> = Vec::new();
        for record in records {
            let home = clusters.iter_mut().find(|c| {
                let anchor = &c.markers[0].location;
                (anchor.x - record.location.x).abs() < footprint
                    && (anchor.y - record.location.y).abs() < footprint
            });
            match home {
                Some(cluster) => cluster.markers.push(record.clone()),
                None => clusters.push(Self {
                    markers: vec![record.clone()],
                }),
            }
        }
        clusters
    }

    /// Markers in insertion order. Never empty.
    #[must_use]
    pub fn markers(&self) -> &[IncidentRecord] {
        &self.markers
    }

    #[must_use]
    pub fn summary(&self) -> ClusterSummary {
        let mut top = self.markers.clone();
        top.sort_by(|a, b| b.severity.cmp(&a.severity));
        top.truncate(CLUSTER_TOP_COUNT);

        let mut title = top
            .iter()
            .map(|m| format!("Severity: {} Id: {}", m.severity, m.id))
            .collect::<Vec<_>>()
            .join("<br>");
        if self.markers.len() > CLUSTER_TOP_COUNT {
            title.push_str("<br>...");
        }

        let color = top.first().map_or(Rgb::GREEN, IncidentRecord::color);
        ClusterSummary {
            count: self.markers.len(),
            top,
            title,
            color,
        }
    }
}
