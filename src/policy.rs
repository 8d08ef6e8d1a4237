use crate::grid::SlotGrid;
use anyhow::{bail, Result};
use chrono::{Duration, NaiveTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
#[cfg(feature = "serde")]
use std::{fs, path::Path};

/// Matières placées en blocs de deux périodes (politique de référence).
pub const DEFAULT_DOUBLE_PERIOD_SUBJECTS: [&str; 4] =
    ["Combined Maths", "Biology", "Physics", "Chemistry"];

/// Débuts autorisés d'un bloc double (bandes du matin et de l'après-midi).
pub const DEFAULT_DOUBLE_PERIOD_STARTS: [u8; 5] = [1, 2, 3, 6, 7];

/// Politique de génération : grille, classification des matières, horaires.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Policy {
    pub periods_per_day: u8,
    pub break_period: u8,
    pub double_period_subjects: BTreeSet<String>,
    pub special_subjects: SpecialSubjects,
    pub double_period_starts: Vec<u8>,
    pub timing: Timing,
}

/// Deux matières à période fixe : avant-dernière et dernière période.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SpecialSubjects {
    pub penultimate: String,
    pub last: String,
}

/// Horaires, utilisés seulement pour l'affichage des périodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Timing {
    pub day_start: NaiveTime,
    pub period_minutes: u32,
    pub break_minutes: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            period_minutes: 40,
            break_minutes: 20,
        }
    }
}

impl Default for SpecialSubjects {
    fn default() -> Self {
        Self {
            penultimate: "English".into(),
            last: "Git".into(),
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            periods_per_day: 9,
            break_period: 5,
            double_period_subjects: DEFAULT_DOUBLE_PERIOD_SUBJECTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            special_subjects: SpecialSubjects::default(),
            double_period_starts: DEFAULT_DOUBLE_PERIOD_STARTS.to_vec(),
            timing: Timing::default(),
        }
    }
}

impl Policy {
    pub fn validate(&self) -> Result<()> {
        let ppd = self.periods_per_day;
        if ppd < 2 {
            bail!("periods_per_day must be >= 2");
        }
        if !(1..=ppd).contains(&self.break_period) {
            bail!("break_period {} outside 1..={ppd}", self.break_period);
        }
        if self.break_period >= ppd - 1 {
            bail!("break_period cannot be one of the fixed end-of-day periods");
        }
        let special = &self.special_subjects;
        if special.penultimate.trim().is_empty() || special.last.trim().is_empty() {
            bail!("special subject names cannot be empty");
        }
        if special.penultimate == special.last {
            bail!("special subjects must be distinct");
        }
        for name in [&special.penultimate, &special.last] {
            if self.double_period_subjects.contains(name) {
                bail!("subject {name} cannot be both special and double-period");
            }
        }
        for &start in &self.double_period_starts {
            if start == 0 || start >= ppd {
                bail!("double-period start {start} leaves no room for a second period");
            }
        }
        if self.timing.period_minutes == 0 {
            bail!("period_minutes must be > 0");
        }
        Ok(())
    }

    pub fn grid(&self) -> SlotGrid {
        SlotGrid::new(
            self.periods_per_day,
            self.break_period,
            &self.double_period_starts,
        )
    }

    pub fn is_double_period(&self, subject: &str) -> bool {
        self.double_period_subjects.contains(subject)
    }

    pub fn is_special(&self, subject: &str) -> bool {
        self.special_period(subject).is_some()
    }

    /// Période fixe d'une matière spéciale.
    pub fn special_period(&self, subject: &str) -> Option<u8> {
        self.special_placements()
            .into_iter()
            .find(|(name, _)| *name == subject)
            .map(|(_, period)| period)
    }

    /// Matières spéciales dans leur ordre de placement, avec leur période.
    pub fn special_placements(&self) -> [(&str, u8); 2] {
        let ppd = self.periods_per_day;
        [
            (self.special_subjects.penultimate.as_str(), ppd.saturating_sub(1)),
            (self.special_subjects.last.as_str(), ppd),
        ]
    }

    /// Taille d'une séance : 2 pour les matières en blocs, 1 sinon.
    pub fn session_len(&self, subject: &str) -> usize {
        if self.is_double_period(subject) {
            2
        } else {
            1
        }
    }

    /// Libellé horaire d'une période, p. ex. `8.00 - 8.40`, ou `BREAK`.
    pub fn period_label(&self, period: u8) -> String {
        if period == self.break_period {
            return "BREAK".to_string();
        }
        let t = &self.timing;
        let pm = i64::from(t.period_minutes);
        let index = i64::from(period.saturating_sub(1));
        let offset = if period > self.break_period {
            (index - 1) * pm + i64::from(t.break_minutes)
        } else {
            index * pm
        };
        let start = t.day_start + Duration::minutes(offset);
        let end = start + Duration::minutes(pm);
        format!("{} - {}", start.format("%-H.%M"), end.format("%-H.%M"))
    }
}

#[cfg(feature = "serde")]
pub fn load_policy_from_file<P: AsRef<Path>>(path: P) -> Result<Policy> {
    use anyhow::Context;
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading policy {}", path.display()))?;
    let policy: Policy = serde_json::from_slice(&data)
        .with_context(|| format!("parsing policy {}", path.display()))?;
    policy.validate()?;
    Ok(policy)
}

#[cfg(feature = "serde")]
pub fn export_policy_json<P: AsRef<Path>>(path: P, policy: &Policy) -> Result<()> {
    policy.validate()?;
    let json = serde_json::to_string_pretty(policy)?;
    fs::write(path, json)?;
    Ok(())
}
