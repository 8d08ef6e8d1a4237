use crate::grid::{Day, Slot};
use crate::model::{Assignment, Classroom, Subject, Teacher};
use crate::scheduler::SchedError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Emploi du temps : au plus une affectation par créneau.
///
/// Les requêtes de disponibilité parcourent toutes les affectations ; à
/// l'échelle d'une classe (≤ 45 créneaux) c'est suffisant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Assignment>", into = "Vec<Assignment>")
)]
pub struct Schedule {
    entries: BTreeMap<Slot, Assignment>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry_at(&self, slot: Slot) -> Option<&Assignment> {
        self.entries.get(&slot)
    }

    pub fn is_teacher_free(&self, teacher: &Teacher, slot: Slot) -> bool {
        !self
            .entries
            .values()
            .any(|a| a.teacher == teacher.name && a.slot == slot)
    }

    pub fn is_room_free(&self, classroom: &Classroom, slot: Slot) -> bool {
        !self
            .entries
            .values()
            .any(|a| a.classroom == classroom.label && a.slot == slot)
    }

    /// Écriture inconditionnelle ; l'appelant a déjà vérifié les disponibilités.
    pub fn insert(&mut self, teacher: &Teacher, classroom: &Classroom, slot: Slot, subject: &Subject) {
        self.entries.insert(
            slot,
            Assignment {
                slot,
                subject: subject.name.clone(),
                teacher: teacher.name.clone(),
                classroom: classroom.label.clone(),
            },
        );
    }

    pub fn has_subject_on(&self, subject: &str, day: Day) -> bool {
        self.entries
            .values()
            .any(|a| a.slot.day == day && a.subject == subject)
    }

    pub fn slots_for_subject<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = Slot> + 'a {
        self.entries
            .values()
            .filter(move |a| a.subject == subject)
            .map(|a| a.slot)
    }

    pub fn count_for_subject(&self, subject: &str) -> usize {
        self.slots_for_subject(subject).count()
    }

    /// Affectations triées par créneau (jour puis période).
    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reconstruit un emploi du temps sauvegardé ; un créneau présent deux fois est refusé.
impl TryFrom<Vec<Assignment>> for Schedule {
    type Error = SchedError;

    fn try_from(list: Vec<Assignment>) -> Result<Self, Self::Error> {
        let mut entries = BTreeMap::new();
        for a in list {
            let slot = a.slot;
            if entries.insert(slot, a).is_some() {
                return Err(SchedError::InvalidInput(format!("slot {slot} assigned twice")));
            }
        }
        Ok(Self { entries })
    }
}

impl From<Schedule> for Vec<Assignment> {
    fn from(schedule: Schedule) -> Self {
        schedule.entries.into_values().collect()
    }
}
