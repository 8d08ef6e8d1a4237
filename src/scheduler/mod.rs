mod assignment;
mod conflicts;
mod special;
mod types;
mod util;

pub use types::{
    Conflict, ConflictKind, Generation, PlacementMode, SchedError, SubjectOutcome,
};

use crate::catalog::Catalog;
use crate::grid::SlotGrid;
use crate::policy::Policy;
use crate::schedule::Schedule;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

/// Scheduler : moteur glouton randomisé, paramétré par une politique et une
/// source aléatoire injectée.
#[derive(Debug)]
pub struct Scheduler<R = ChaCha8Rng> {
    policy: Policy,
    grid: SlotGrid,
    rng: R,
}

impl Scheduler<ChaCha8Rng> {
    /// Source reproductible : même graine + mêmes entrées ⇒ même emploi du temps.
    pub fn seeded(policy: Policy, seed: u64) -> Result<Self, SchedError> {
        Self::with_rng(policy, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Scheduler<R> {
    pub fn with_rng(policy: Policy, rng: R) -> Result<Self, SchedError> {
        policy.validate()?;
        let grid = policy.grid();
        Ok(Self { policy, grid, rng })
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// Remplit un emploi du temps neuf. Les matières non plaçables ne sont pas
    /// des erreurs : elles apparaissent incomplètes dans `outcomes`.
    pub fn generate(&mut self, catalog: &Catalog) -> Result<Generation, SchedError> {
        catalog.validate()?;

        let mut schedule = Schedule::new();
        let mut blocks = self.grid.double_period_candidates();
        let mut outcomes = Vec::with_capacity(catalog.subjects.len());

        for subject in &catalog.subjects {
            if self.policy.is_special(&subject.name) {
                continue;
            }
            let outcome = if self.policy.is_double_period(&subject.name) {
                assignment::place_double(&mut schedule, catalog, subject, &mut blocks, &mut self.rng)
            } else {
                assignment::place_single(&mut schedule, catalog, subject, &self.grid)
            };
            outcomes.push(outcome);
        }

        outcomes.extend(special::place_special(
            &mut schedule,
            catalog,
            &self.policy,
            &mut self.rng,
        ));

        for o in outcomes.iter().filter(|o| !o.is_complete()) {
            warn!(
                subject = %o.subject,
                requested = o.periods_requested,
                placed = o.periods_placed,
                "could not schedule all periods"
            );
        }
        info!(
            periods = schedule.len(),
            subjects = outcomes.len(),
            "timetable generated"
        );

        Ok(Generation { schedule, outcomes })
    }

    pub fn detect_conflicts(&self, schedule: &Schedule, catalog: &Catalog) -> Vec<Conflict> {
        conflicts::detect_conflicts(schedule, catalog, &self.policy)
    }
}

/// Audit autonome, sans moteur (p. ex. pour un emploi du temps rechargé).
pub fn detect_conflicts(schedule: &Schedule, catalog: &Catalog, policy: &Policy) -> Vec<Conflict> {
    conflicts::detect_conflicts(schedule, catalog, policy)
}
