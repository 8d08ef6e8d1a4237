#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Jour ouvré. L'ordre de déclaration ne sert qu'à l'énumération.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Créneau (jour, période). Les périodes sont numérotées à partir de 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    pub day: Day,
    pub period: u8,
}

impl Slot {
    pub fn new(day: Day, period: u8) -> Self {
        Self { day, period }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.day, self.period)
    }
}

/// Deux créneaux contigus du même jour.
pub type Block = [Slot; 2];

/// Grille hebdomadaire : 5 jours × `periods_per_day`, avec une période de pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    periods_per_day: u8,
    break_period: u8,
    double_starts: Vec<u8>,
}

impl SlotGrid {
    pub fn new(periods_per_day: u8, break_period: u8, double_starts: &[u8]) -> Self {
        Self {
            periods_per_day,
            break_period,
            double_starts: double_starts.to_vec(),
        }
    }

    pub fn periods_per_day(&self) -> u8 {
        self.periods_per_day
    }

    pub fn break_period(&self) -> u8 {
        self.break_period
    }

    pub fn is_break(&self, period: u8) -> bool {
        period == self.break_period
    }

    pub fn contains(&self, slot: Slot) -> bool {
        (1..=self.periods_per_day).contains(&slot.period)
    }

    /// Tous les créneaux de la semaine, pause comprise (jour puis période).
    pub fn all_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        Day::ALL
            .into_iter()
            .flat_map(move |day| (1..=self.periods_per_day).map(move |p| Slot::new(day, p)))
    }

    /// Créneaux assignables : tous sauf la pause.
    pub fn teaching_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.all_slots().filter(move |s| !self.is_break(s.period))
    }

    /// Blocs (p, p+1) pour chaque début autorisé, hors blocs touchant la pause.
    pub fn double_period_candidates(&self) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(Day::ALL.len() * self.double_starts.len());
        for day in Day::ALL {
            for &start in &self.double_starts {
                if start == 0 || start >= self.periods_per_day {
                    continue;
                }
                if self.is_break(start) || self.is_break(start + 1) {
                    continue;
                }
                blocks.push([Slot::new(day, start), Slot::new(day, start + 1)]);
            }
        }
        blocks
    }
}
