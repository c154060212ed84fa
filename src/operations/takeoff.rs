use chrono::Utc;

use crate::error::{Result, TakeoffError};
use crate::model::{first_containing, FinishResult, Room, RunStyle, Staircase};
use crate::topology::{FaceId, GeometryStore};

use super::classify::{FaceClass, FaceClassifier};
use super::path_filter::PathIntersectionFilter;
use super::side_partition::RoomAdjacencyPartition;
use super::skirting::SkirtingLength;

/// Computes all finish quantities for one staircase.
///
/// One staircase is processed fully before the next; the working set
/// (side-face partition, path curves) is private to the computation and
/// the store is only queried, never mutated.
pub struct FinishTakeoff<'a> {
    staircase: &'a Staircase,
    rooms: &'a [&'a dyn Room],
    actor: &'a str,
}

impl<'a> FinishTakeoff<'a> {
    /// Creates a takeoff for one staircase against the candidate room
    /// set and the acting user recorded on the result.
    #[must_use]
    pub fn new(staircase: &'a Staircase, rooms: &'a [&'a dyn Room], actor: &'a str) -> Self {
        Self {
            staircase,
            rooms,
            actor,
        }
    }

    /// Executes the takeoff, producing the staircase's finish record.
    ///
    /// # Errors
    ///
    /// Returns an error if the staircase has no runs, an element has no
    /// solid body, or a run has no walking path. Classification misses
    /// are absorbed as exclusions, never errors.
    pub fn execute(&self, store: &GeometryStore) -> Result<FinishResult> {
        let stair = self.staircase;
        self.validate()?;

        let room = self.associate_room(store)?;

        let treads_area: f64 = stair.runs.iter().map(|run| run.footprint.area_xy()).sum();
        let risers_area: f64 = stair.runs.iter().map(|run| run.width * run.height).sum();

        let mut run_soffits_area = 0.0;
        for run in &stair.runs {
            let classifier = FaceClassifier::for_run(
                stair.tread_depth,
                stair.riser_height,
                run.style == RunStyle::Spiral,
            )?;
            for &face_id in &run.faces {
                let face = store.face(face_id)?;
                if classifier.classify(face) == FaceClass::Soffit {
                    run_soffits_area += face.area();
                }
            }
        }

        let mut landings_area = 0.0;
        let mut landing_soffits_area = 0.0;
        let landing_classifier = FaceClassifier::for_landing();
        for landing in &stair.landings {
            for &face_id in &landing.faces {
                let face = store.face(face_id)?;
                match landing_classifier.classify(face) {
                    FaceClass::Upward => landings_area += face.area(),
                    FaceClass::Downward => landing_soffits_area += face.area(),
                    _ => {}
                }
            }
        }

        let path = stair.walking_path();
        let candidates = PathIntersectionFilter::new(&path).execute(
            &stair.all_faces(),
            &stair.all_edges(),
            store,
        )?;
        let partition = RoomAdjacencyPartition::new(room).execute(&candidates, store)?;

        let side_finish_area = face_area_sum(&partition.room_facing, store)?;
        let trim_length =
            SkirtingLength::new(&partition.wall_facing, stair.riser_height).execute(store)?;
        let skirtings_area = trim_length * stair.skirting_height;

        Ok(FinishResult {
            staircase: stair.id.clone(),
            treads_area,
            risers_area,
            landings_area,
            run_soffits_area,
            landing_soffits_area,
            side_finish_area,
            skirtings_area,
            room_number: room.and_then(|r| r.number().map(str::to_owned)),
            room_name: room.and_then(|r| r.name().map(str::to_owned)),
            computed_at: Utc::now(),
            computed_by: self.actor.to_owned(),
        })
    }

    fn validate(&self) -> Result<()> {
        let stair = self.staircase;
        if stair.runs.is_empty() {
            return Err(TakeoffError::NoRuns {
                staircase: stair.id.clone(),
            }
            .into());
        }
        for run in &stair.runs {
            if run.solids.is_empty() {
                return Err(TakeoffError::MissingSolid {
                    staircase: stair.id.clone(),
                    element: run.id.clone(),
                }
                .into());
            }
            if run.path.is_empty() {
                return Err(TakeoffError::EmptyPath {
                    staircase: stair.id.clone(),
                    element: run.id.clone(),
                }
                .into());
            }
        }
        for landing in &stair.landings {
            if landing.solids.is_empty() {
                return Err(TakeoffError::MissingSolid {
                    staircase: stair.id.clone(),
                    element: landing.id.clone(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Tests the first run's first solid centroid against the candidate
    /// rooms; the first containing room is fixed for the whole
    /// staircase, even across runs passing through other rooms.
    fn associate_room(&self, store: &GeometryStore) -> Result<Option<&'a dyn Room>> {
        let Some(first_run) = self.staircase.runs.first() else {
            return Ok(None);
        };
        let Some(&solid_id) = first_run.solids.first() else {
            return Ok(None);
        };
        let centroid = store.solid(solid_id)?.centroid();
        Ok(first_containing(self.rooms, centroid))
    }
}

fn face_area_sum(faces: &[FaceId], store: &GeometryStore) -> Result<f64> {
    let mut total = 0.0;
    for &face_id in faces {
        total += store.face(face_id)?.area();
    }
    Ok(total)
}

/// Runs takeoffs for an ordered batch of staircases.
///
/// A structural failure aborts only the offending staircase; the batch
/// reports one result per staircase in supplied order so the sink can
/// decide whether to commit.
pub struct TakeoffBatch<'a> {
    staircases: &'a [Staircase],
    rooms: &'a [&'a dyn Room],
    actor: &'a str,
}

impl<'a> TakeoffBatch<'a> {
    /// Creates a batch over the staircases, sharing one room set and actor.
    #[must_use]
    pub fn new(staircases: &'a [Staircase], rooms: &'a [&'a dyn Room], actor: &'a str) -> Self {
        Self {
            staircases,
            rooms,
            actor,
        }
    }

    /// Executes the batch, one staircase fully at a time.
    #[must_use]
    pub fn execute(&self, store: &GeometryStore) -> Vec<Result<FinishResult>> {
        self.staircases
            .iter()
            .map(|stair| FinishTakeoff::new(stair, self.rooms, self.actor).execute(store))
            .collect()
    }
}
