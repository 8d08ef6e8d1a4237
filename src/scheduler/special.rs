use super::{util, PlacementMode, SubjectOutcome};
use crate::catalog::Catalog;
use crate::grid::{Day, Slot};
use crate::policy::Policy;
use crate::schedule::Schedule;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Place chaque matière spéciale une seule fois par semaine, à sa période
/// fixe, le premier jour (ordre aléatoire) où un enseignant et une salle sont libres.
pub(super) fn place_special<R: Rng + ?Sized>(
    schedule: &mut Schedule,
    catalog: &Catalog,
    policy: &Policy,
    rng: &mut R,
) -> Vec<SubjectOutcome> {
    let mut out = Vec::with_capacity(2);

    for (name, period) in policy.special_placements() {
        let Some(subject) = catalog.find_subject(name) else {
            debug!(subject = name, "special subject absent from catalog");
            continue;
        };
        let mut teachers = catalog.qualified_teachers(name);
        let mut rooms = catalog.suitable_rooms(subject);
        let mut days = Day::ALL;
        days.shuffle(rng);

        let mut placed = 0u32;
        for day in days {
            let slot = Slot::new(day, period);
            teachers.shuffle(rng);
            rooms.shuffle(rng);

            let found = teachers.iter().find_map(|teacher| {
                rooms
                    .iter()
                    .find(|room| util::slot_available(schedule, slot, teacher, room))
                    .map(|room| (*teacher, *room))
            });
            if let Some((teacher, room)) = found {
                schedule.insert(teacher, room, slot, subject);
                debug!(subject = name, %slot, teacher = %teacher.name, "special subject placed");
                placed = 1;
                break;
            }
        }

        out.push(SubjectOutcome::new(subject, PlacementMode::Special, 1, placed));
    }

    out
}
