use crate::grid::Slot;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Enseignant. Le nom sert d'identité.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Teacher {
    pub name: String,
    pub subjects: Vec<String>,
    /// Lu et conservé, mais non appliqué par le moteur.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_periods_per_day: u32,
}

impl Teacher {
    pub fn new<N, I, S>(name: N, subjects: I, max_periods_per_day: u32) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            subjects: subjects.into_iter().map(Into::into).collect(),
            max_periods_per_day,
        }
    }

    pub fn teaches(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }
}

/// Matière avec son volume hebdomadaire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subject {
    pub name: String,
    pub weekly_periods: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires_lab: bool,
}

impl Subject {
    pub fn new<N: Into<String>>(name: N, weekly_periods: u32, requires_lab: bool) -> Self {
        Self {
            name: name.into(),
            weekly_periods,
            requires_lab,
        }
    }
}

/// Salle de classe (ou laboratoire).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Classroom {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_lab: bool,
    /// Lu et conservé, mais non appliqué par le moteur.
    #[cfg_attr(feature = "serde", serde(default))]
    pub capacity: u32,
}

impl Classroom {
    pub fn new<L: Into<String>>(label: L, is_lab: bool, capacity: u32) -> Self {
        Self {
            label: label.into(),
            is_lab,
            capacity,
        }
    }

    /// Une matière de labo exige un labo ; les autres acceptent toute salle.
    pub fn suits(&self, subject: &Subject) -> bool {
        !subject.requires_lab || self.is_lab
    }
}

/// Affectation d'un créneau : matière, enseignant, salle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    pub slot: Slot,
    pub subject: String,
    pub teacher: String,
    pub classroom: String,
}
