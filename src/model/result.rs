use chrono::{DateTime, Utc};

use crate::error::Result;

/// Finish quantities computed for one staircase.
///
/// Areas are in squared model units and always non-negative. The room
/// pair is absent when no room contains the first run's centroid.
#[derive(Debug, Clone)]
pub struct FinishResult {
    /// Identity of the staircase the record belongs to.
    pub staircase: String,
    /// Total walking-surface (tread) area over all runs.
    pub treads_area: f64,
    /// Closed-form riser area, `width * height` summed over runs.
    pub risers_area: f64,
    /// Landing top-surface area.
    pub landings_area: f64,
    /// Run soffit (underside) area.
    pub run_soffits_area: f64,
    /// Landing soffit area.
    pub landing_soffits_area: f64,
    /// Room-facing vertical side-face area.
    pub side_finish_area: f64,
    /// Skirting strip area along wall-facing faces.
    pub skirtings_area: f64,
    /// Number of the associated room, if any.
    pub room_number: Option<String>,
    /// Name of the associated room, if any.
    pub room_name: Option<String>,
    /// When the computation ran.
    pub computed_at: DateTime<Utc>,
    /// Who ran the computation.
    pub computed_by: String,
}

impl FinishResult {
    /// Renders the provenance stamp written alongside the quantities.
    #[must_use]
    pub fn stamp(&self) -> String {
        format!(
            "{} UTC - {}",
            self.computed_at.format("%Y-%m-%d %H:%M:%S"),
            self.computed_by
        )
    }
}

/// Destination for computed finish results.
///
/// Implementations must apply the whole batch atomically: either every
/// record is committed or none is, so partially computed batches are
/// never persisted.
pub trait ResultSink {
    /// Applies a batch of results all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TakeoffError::SinkRejected`] if the batch cannot be
    /// committed; no record may have been applied in that case.
    ///
    /// [`TakeoffError::SinkRejected`]: crate::error::TakeoffError::SinkRejected
    fn apply(&mut self, results: &[FinishResult]) -> Result<()>;
}
