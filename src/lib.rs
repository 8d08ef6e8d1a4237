#![forbid(unsafe_code)]
//! Horaire — bibliothèque de génération d'emplois du temps hebdomadaires (sans BD).
//!
//! - Grille 5 jours × N périodes, avec une période de pause.
//! - Placement glouton randomisé : blocs doubles, périodes simples, matières à période fixe.
//! - Source aléatoire injectable (graine reproductible).
//! - Audit des conflits ; stockage fichiers (JSON/CSV) en dehors du moteur.

pub mod catalog;
pub mod grid;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod policy;
pub mod report;
pub mod schedule;
pub mod scheduler;
#[cfg(feature = "serde")]
pub mod storage;
pub mod timetable;

pub use catalog::Catalog;
pub use grid::{Block, Day, Slot, SlotGrid};
pub use model::{Assignment, Classroom, Subject, Teacher};
pub use policy::{Policy, SpecialSubjects, Timing};
#[cfg(feature = "serde")]
pub use policy::{export_policy_json, load_policy_from_file};
pub use report::{render_report, ReportRenderer, TextReport};
pub use schedule::Schedule;
pub use scheduler::{
    detect_conflicts, Conflict, ConflictKind, Generation, PlacementMode, SchedError, Scheduler,
    SubjectOutcome,
};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
pub use timetable::Timetable;
