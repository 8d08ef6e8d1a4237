use crate::catalog::Catalog;
use crate::policy::Policy;
use crate::schedule::Schedule;
use crate::scheduler::{Generation, SubjectOutcome};
use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Résultat opaque remis à la persistance et à l'affichage : l'emploi du
/// temps et tout ce qu'il faut pour le rejouer ou l'auditer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timetable {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub policy: Policy,
    pub catalog: Catalog,
    pub schedule: Schedule,
    #[cfg_attr(feature = "serde", serde(default))]
    pub outcomes: Vec<SubjectOutcome>,
}

impl Timetable {
    pub fn new(seed: u64, policy: Policy, catalog: Catalog, generation: Generation) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            seed,
            policy,
            catalog,
            schedule: generation.schedule,
            outcomes: generation.outcomes,
        }
    }

    /// Matières placées en dessous de leur volume demandé.
    pub fn shortfalls(&self) -> Vec<&SubjectOutcome> {
        self.outcomes.iter().filter(|o| !o.is_complete()).collect()
    }
}
