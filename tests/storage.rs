#![forbid(unsafe_code)]
use horaire::{
    io, render_report, Catalog, Classroom, JsonStorage, Policy, Scheduler, Storage, Subject,
    Teacher, Timetable,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn save_and_load_timetable_roundtrip() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("timetable.json")).unwrap();
    let timetable = sample_timetable(5);

    storage.save(&timetable).unwrap();
    let loaded = storage.load().unwrap();
    assert_eq!(loaded, timetable);
}

#[test]
fn timetable_with_duplicate_slot_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("timetable.json");
    let storage = JsonStorage::open(&path).unwrap();
    storage.save(&sample_timetable(5)).unwrap();

    // duplique la première affectation
    let mut json: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    let entries = json["schedule"].as_array_mut().unwrap();
    let first = entries[0].clone();
    entries.push(first);
    fs::write(&path, serde_json::to_vec(&json).unwrap()).unwrap();

    let err = storage.load().unwrap_err();
    assert!(format!("{err:#}").contains("assigned twice"), "{err:#}");
}

#[test]
fn missing_timetable_is_an_error() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("absent.json")).unwrap();
    assert!(storage.load().is_err());
}

#[test]
fn import_catalog_from_csv() {
    let dir = tempdir().unwrap();
    let teachers = dir.path().join("teachers.csv");
    let subjects = dir.path().join("subjects.csv");
    let rooms = dir.path().join("classrooms.csv");
    fs::write(
        &teachers,
        "name,subjects,max_periods_per_day\nSilva,Physics; Combined Maths,4\nDias,History,\n",
    )
    .unwrap();
    fs::write(
        &subjects,
        "name,weekly_periods,requires_lab\nPhysics,4,yes\nHistory,3,\n",
    )
    .unwrap();
    fs::write(&rooms, "label,is_lab,capacity\nLab A,true,30\nRoom 1,no,\n").unwrap();

    let teachers = io::import_teachers_csv(&teachers).unwrap();
    assert_eq!(teachers[0].subjects, vec!["Physics", "Combined Maths"]);
    assert_eq!(teachers[1].max_periods_per_day, 0);

    let subjects = io::import_subjects_csv(&subjects).unwrap();
    assert!(subjects[0].requires_lab);
    assert!(!subjects[1].requires_lab);

    let rooms = io::import_classrooms_csv(&rooms).unwrap();
    assert!(rooms[0].is_lab);
    assert_eq!(rooms[1].capacity, 0);
}

#[test]
fn csv_import_rejects_bad_rows() {
    let dir = tempdir().unwrap();
    let subjects = dir.path().join("subjects.csv");
    fs::write(&subjects, "name,weekly_periods,requires_lab\nPhysics,0,yes\n").unwrap();
    assert!(io::import_subjects_csv(&subjects).is_err());

    let teachers = dir.path().join("teachers.csv");
    fs::write(&teachers, "name,subjects,max_periods_per_day\nSilva,,4\n").unwrap();
    assert!(io::import_teachers_csv(&teachers).is_err());

    let rooms = dir.path().join("classrooms.csv");
    fs::write(&rooms, "label,is_lab,capacity\nLab A,maybe,30\n").unwrap();
    assert!(io::import_classrooms_csv(&rooms).is_err());
}

#[test]
fn catalog_json_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let catalog = sample_catalog();
    io::export_catalog_json(&path, &catalog).unwrap();
    assert_eq!(io::load_catalog_json(&path).unwrap(), catalog);
}

#[test]
fn schedule_csv_lists_slots_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.csv");
    let timetable = sample_timetable(9);
    io::export_schedule_csv(&path, &timetable).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("day,period,time,subject,teacher,classroom")
    );
    // lundi 1 est toujours pris : bloc de Physics ou première période de History
    assert!(lines.next().unwrap().starts_with("Monday,1,8.00 - 8.40,"));
    assert_eq!(content.lines().count(), timetable.schedule.len() + 1);
}

#[test]
fn report_lists_outcomes_and_shortfalls() {
    let catalog = Catalog::new(
        vec![Teacher::new("Perera", ["Chemistry", "History"], 4)],
        vec![
            Subject::new("Chemistry", 4, true),
            Subject::new("History", 2, false),
        ],
        vec![Classroom::new("Room 1", false, 40)],
    );
    let policy = Policy::default();
    let generation = Scheduler::seeded(policy.clone(), 1)
        .unwrap()
        .generate(&catalog)
        .unwrap();
    let timetable = Timetable::new(1, policy, catalog, generation);

    let report = render_report(&timetable);
    assert!(report.starts_with(&format!("Timetable {} (seed 1), 2 period(s) placed", timetable.id)));
    assert!(report.contains("  Chemistry  double   0/4"));
    assert!(report.contains("  History    single   2/2"));
    assert!(report.contains("warning: could not schedule all periods for Chemistry (0/4)"));
    assert!(!report.contains("for History"));
}

fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![
            Teacher::new("Silva", ["Physics"], 4),
            Teacher::new("Dias", ["History"], 3),
        ],
        vec![Subject::new("Physics", 4, true), Subject::new("History", 3, false)],
        vec![
            Classroom::new("Lab A", true, 30),
            Classroom::new("Room 1", false, 40),
        ],
    )
}

fn sample_timetable(seed: u64) -> Timetable {
    let catalog = sample_catalog();
    let policy = Policy::default();
    let generation = Scheduler::seeded(policy.clone(), seed)
        .unwrap()
        .generate(&catalog)
        .unwrap();
    Timetable::new(seed, policy, catalog, generation)
}
