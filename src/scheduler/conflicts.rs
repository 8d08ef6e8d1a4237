use super::{Conflict, ConflictKind};
use crate::catalog::Catalog;
use crate::grid::{Day, Slot};
use crate::policy::Policy;
use crate::schedule::Schedule;
use std::collections::BTreeMap;

/// Audite un emploi du temps : grille, pause, qualifications, salles,
/// forme des séances et périodes fixes des matières spéciales.
pub(super) fn detect_conflicts(
    schedule: &Schedule,
    catalog: &Catalog,
    policy: &Policy,
) -> Vec<Conflict> {
    let grid = policy.grid();
    let mut out = Vec::new();
    let mut sessions: BTreeMap<(&str, Day), Vec<u8>> = BTreeMap::new();

    let mut push = |slot: Slot, subject: &str, kind: ConflictKind| {
        out.push(Conflict {
            slot,
            subject: subject.to_string(),
            kind,
        });
    };

    for a in schedule.iter() {
        if !grid.contains(a.slot) {
            push(a.slot, &a.subject, ConflictKind::OutsideGrid);
        }
        if grid.is_break(a.slot.period) {
            push(a.slot, &a.subject, ConflictKind::BreakPeriod);
        }

        let Some(subject) = catalog.find_subject(&a.subject) else {
            push(a.slot, &a.subject, ConflictKind::UnknownSubject);
            continue;
        };
        let qualified = catalog
            .find_teacher(&a.teacher)
            .is_some_and(|t| t.teaches(&subject.name));
        if !qualified {
            push(a.slot, &a.subject, ConflictKind::UnqualifiedTeacher);
        }
        let suitable = catalog
            .find_classroom(&a.classroom)
            .is_some_and(|r| r.suits(subject));
        if !suitable {
            push(a.slot, &a.subject, ConflictKind::UnsuitableRoom);
        }
        if let Some(period) = policy.special_period(&a.subject) {
            if a.slot.period != period {
                push(a.slot, &a.subject, ConflictKind::MisplacedSpecial);
            }
        }

        sessions
            .entry((a.subject.as_str(), a.slot.day))
            .or_default()
            .push(a.slot.period);
    }

    for ((subject, day), periods) in sessions {
        // triées : le schedule est itéré par créneau
        let expected = policy.session_len(subject);
        let contiguous = periods.windows(2).all(|w| w[1] == w[0] + 1);
        if periods.len() != expected || !contiguous {
            push(Slot::new(day, periods[0]), subject, ConflictKind::BrokenSession);
        }
    }

    out
}
