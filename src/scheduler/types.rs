use crate::grid::Slot;
use crate::model::Subject;
use crate::schedule::Schedule;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chemin de placement suivi par une matière.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum PlacementMode {
    Double,
    Single,
    Special,
}

impl PlacementMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PlacementMode::Double => "double",
            PlacementMode::Single => "single",
            PlacementMode::Special => "special",
        }
    }
}

/// Bilan par matière : périodes demandées vs placées.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubjectOutcome {
    pub subject: String,
    pub mode: PlacementMode,
    pub periods_requested: u32,
    pub periods_placed: u32,
}

impl SubjectOutcome {
    pub(crate) fn new(subject: &Subject, mode: PlacementMode, requested: u32, placed: u32) -> Self {
        Self {
            subject: subject.name.clone(),
            mode,
            periods_requested: requested,
            periods_placed: placed,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.periods_placed >= self.periods_requested
    }
}

/// Résultat d'une génération : l'emploi du temps et le bilan par matière.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub schedule: Schedule,
    pub outcomes: Vec<SubjectOutcome>,
}

impl Generation {
    pub fn shortfalls(&self) -> impl Iterator<Item = &SubjectOutcome> {
        self.outcomes.iter().filter(|o| !o.is_complete())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    OutsideGrid,
    BreakPeriod,
    UnknownSubject,
    UnqualifiedTeacher,
    UnsuitableRoom,
    BrokenSession,
    MisplacedSpecial,
}

impl ConflictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictKind::OutsideGrid => "outside_grid",
            ConflictKind::BreakPeriod => "break",
            ConflictKind::UnknownSubject => "unknown_subject",
            ConflictKind::UnqualifiedTeacher => "unqualified_teacher",
            ConflictKind::UnsuitableRoom => "unsuitable_room",
            ConflictKind::BrokenSession => "broken_session",
            ConflictKind::MisplacedSpecial => "misplaced_special",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Conflict {
    pub slot: Slot,
    pub subject: String,
    pub kind: ConflictKind,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("catalog has no {0}")]
    EmptyCatalog(&'static str),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
