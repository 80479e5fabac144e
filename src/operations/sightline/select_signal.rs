use slotmap::Key;

use crate::error::{ElementError, Result};
use crate::incident::IncidentRecord;
use crate::math::Point3;
use crate::model::{ElementId, ElementStore, GeometrySink, Placement};

use super::calculator::{SightlineAnalysis, SightlineObstruction};
use super::config::SightlineConfig;

/// Outcome of a [`SelectSignal`] request.
#[derive(Debug, Clone)]
pub struct SignalReport {
    /// The computed sightline geometry.
    pub analysis: SightlineAnalysis,
    /// Placement warning at the target when the obstruction blocks part of
    /// the field of view.
    pub incident: Option<IncidentRecord>,
}

/// Computes the sightline of a light element toward a target, past an
/// obstruction element, and delivers the region to a sink.
pub struct SelectSignal {
    light: ElementId,
    obstruction: ElementId,
    target: Option<Point3>,
    config: SightlineConfig,
}

impl SelectSignal {
    /// Creates a new `SelectSignal` operation.
    #[must_use]
    pub fn new(light: ElementId, obstruction: ElementId, target: Option<Point3>) -> Self {
        Self {
            light,
            obstruction,
            target,
            config: SightlineConfig::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SightlineConfig) -> Self {
        self.config = config;
        self
    }

    /// Fetches both elements, computes the sightline and hands the resulting
    /// region to `sink`. Nothing reaches the sink on failure.
    ///
    /// # Errors
    ///
    /// Returns `ElementError::InvalidGeometry` naming the element when it is
    /// missing from `store` or has an unusable box, and any error of
    /// [`SightlineObstruction::execute`].
    pub fn execute<S, K>(&self, store: &S, sink: &mut K) -> Result<SignalReport>
    where
        S: ElementStore + ?Sized,
        K: GeometrySink + ?Sized,
    {
        tracing::debug!(light = ?self.light, obstruction = ?self.obstruction, "select signal");
        let light = fetch(store, self.light)?;
        let obstruction = fetch(store, self.obstruction)?;

        let analysis = SightlineObstruction::new(light, obstruction, self.target)
            .with_config(self.config)
            .execute()?;

        let incident = match self.target {
            Some(target) if analysis.is_obstructed() => {
                tracing::info!(light = ?self.light, "sightline obstructed");
                Some(IncidentRecord::placement_warning(self.light.data().as_ffi(), target))
            }
            _ => None,
        };

        sink.accept(analysis.region().clone());
        Ok(SignalReport { analysis, incident })
    }
}

fn fetch<S: ElementStore + ?Sized>(store: &S, id: ElementId) -> Result<Placement> {
    let Some(placement) = store.placement(id) else {
        tracing::warn!(element = ?id, "element not found");
        return Err(ElementError::InvalidGeometry {
            element: format!("{id:?}"),
            reason: "element not found".into(),
        }
        .into());
    };
    if !placement.is_valid() {
        tracing::warn!(element = ?id, "element has no usable bounding box");
        return Err(ElementError::InvalidGeometry {
            element: format!("{id:?}"),
            reason: "non-finite origin or inverted bounding box".into(),
        }
        .into());
    }
    Ok(placement)
}
