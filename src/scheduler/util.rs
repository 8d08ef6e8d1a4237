use crate::grid::Slot;
use crate::model::{Classroom, Subject, Teacher};
use crate::schedule::Schedule;

/// Créneau vide, enseignant et salle libres.
pub(super) fn slot_available(
    schedule: &Schedule,
    slot: Slot,
    teacher: &Teacher,
    room: &Classroom,
) -> bool {
    schedule.entry_at(slot).is_none()
        && schedule.is_teacher_free(teacher, slot)
        && schedule.is_room_free(room, slot)
}

/// Comme `slot_available`, et la matière n'a pas encore de séance ce jour-là.
pub(super) fn can_place(
    schedule: &Schedule,
    slot: Slot,
    teacher: &Teacher,
    room: &Classroom,
    subject: &Subject,
) -> bool {
    slot_available(schedule, slot, teacher, room) && !schedule.has_subject_on(&subject.name, slot.day)
}
