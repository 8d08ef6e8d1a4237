use super::{util, PlacementMode, SubjectOutcome};
use crate::catalog::Catalog;
use crate::grid::{Block, SlotGrid};
use crate::model::Subject;
use crate::schedule::Schedule;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Placement en blocs doubles : au plus `ceil(n/2)` tentatives, chacune sur
/// des listes rebrassées. Une tentative infructueuse arrête la matière.
pub(super) fn place_double<R: Rng + ?Sized>(
    schedule: &mut Schedule,
    catalog: &Catalog,
    subject: &Subject,
    blocks: &mut [Block],
    rng: &mut R,
) -> SubjectOutcome {
    let blocks_needed = subject.weekly_periods.div_ceil(2);
    let mut teachers = catalog.qualified_teachers(&subject.name);
    let mut rooms = catalog.suitable_rooms(subject);
    let mut placed = 0u32;

    while placed < blocks_needed {
        blocks.shuffle(rng);
        teachers.shuffle(rng);
        rooms.shuffle(rng);

        let found = blocks.iter().find_map(|block| {
            teachers.iter().find_map(|teacher| {
                rooms
                    .iter()
                    .find(|room| {
                        block
                            .iter()
                            .all(|&slot| util::can_place(schedule, slot, teacher, room, subject))
                    })
                    .map(|room| (*block, *teacher, *room))
            })
        });

        let Some(([first, second], teacher, room)) = found else {
            break;
        };
        schedule.insert(teacher, room, first, subject);
        schedule.insert(teacher, room, second, subject);
        debug!(subject = %subject.name, %first, %second, teacher = %teacher.name, room = %room.label, "double block placed");
        placed += 1;
    }

    SubjectOutcome::new(
        subject,
        PlacementMode::Double,
        subject.weekly_periods,
        placed * 2,
    )
}

/// Placement période par période : parcours déterministe jour → période,
/// enseignants et salles dans l'ordre d'entrée.
pub(super) fn place_single(
    schedule: &mut Schedule,
    catalog: &Catalog,
    subject: &Subject,
    grid: &SlotGrid,
) -> SubjectOutcome {
    let needed = subject.weekly_periods;
    let teachers = catalog.qualified_teachers(&subject.name);
    let rooms = catalog.suitable_rooms(subject);
    let mut placed = 0u32;

    'slots: for slot in grid.teaching_slots() {
        for teacher in &teachers {
            for room in &rooms {
                if !util::can_place(schedule, slot, teacher, room, subject) {
                    continue;
                }
                schedule.insert(teacher, room, slot, subject);
                debug!(subject = %subject.name, %slot, teacher = %teacher.name, room = %room.label, "period placed");
                placed += 1;
                if placed >= needed {
                    break 'slots;
                }
            }
        }
    }

    SubjectOutcome::new(subject, PlacementMode::Single, needed, placed)
}
