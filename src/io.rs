use crate::catalog::Catalog;
use crate::model::{Classroom, Subject, Teacher};
use crate::timetable::Timetable;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'enseignants depuis CSV: header `name,subjects,max_periods_per_day`
/// (matières séparées par `;`).
pub fn import_teachers_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Teacher>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = field(&rec, 0, "name")?;
        let subjects: Vec<&str> = field(&rec, 1, "subjects")?
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if subjects.is_empty() {
            bail!("teacher {name} has no subject");
        }
        let max = match rec.get(2).map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<u32>()
                .with_context(|| format!("invalid max_periods_per_day for teacher {name}"))?,
            _ => 0,
        };
        out.push(Teacher::new(name, subjects, max));
    }
    Ok(out)
}

/// Import de matières: header `name,weekly_periods,requires_lab`
pub fn import_subjects_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Subject>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = field(&rec, 0, "name")?;
        let weekly = field(&rec, 1, "weekly_periods")?
            .parse::<u32>()
            .with_context(|| format!("invalid weekly_periods for subject {name}"))?;
        if weekly == 0 {
            bail!("subject {name} must have at least one weekly period");
        }
        let lab = optional_bool(&rec, 2)
            .with_context(|| format!("invalid requires_lab for subject {name}"))?;
        out.push(Subject::new(name, weekly, lab));
    }
    Ok(out)
}

/// Import de salles: header `label,is_lab,capacity`
pub fn import_classrooms_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Classroom>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let label = field(&rec, 0, "label")?;
        let lab =
            optional_bool(&rec, 1).with_context(|| format!("invalid is_lab for room {label}"))?;
        let capacity = match rec.get(2).map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<u32>()
                .with_context(|| format!("invalid capacity for room {label}"))?,
            _ => 0,
        };
        out.push(Classroom::new(label, lab, capacity));
    }
    Ok(out)
}

fn field<'r>(rec: &'r StringRecord, idx: usize, name: &str) -> anyhow::Result<&'r str> {
    let value = rec
        .get(idx)
        .with_context(|| format!("missing {name}"))?
        .trim();
    if value.is_empty() {
        bail!("invalid row (empty {name})");
    }
    Ok(value)
}

fn optional_bool(rec: &StringRecord, idx: usize) -> anyhow::Result<bool> {
    match rec.get(idx).map(str::trim) {
        Some(raw) if !raw.is_empty() => parse_bool(raw),
        _ => Ok(false),
    }
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "oui" => Ok(true),
        "false" | "0" | "no" | "n" | "non" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

pub fn load_catalog_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Catalog> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog: Catalog = serde_json::from_slice(&data)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    Ok(catalog)
}

pub fn export_catalog_json<P: AsRef<Path>>(path: P, catalog: &Catalog) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(catalog)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export JSON de l'emploi du temps (jolie mise en forme)
pub fn export_timetable_json<P: AsRef<Path>>(path: P, timetable: &Timetable) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(timetable)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV: header `day,period,time,subject,teacher,classroom`, trié par créneau.
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, timetable: &Timetable) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "period", "time", "subject", "teacher", "classroom"])?;
    for a in timetable.schedule.iter() {
        let period = a.slot.period.to_string();
        let time = timetable.policy.period_label(a.slot.period);
        w.write_record([
            a.slot.day.as_str(),
            period.as_str(),
            time.as_str(),
            a.subject.as_str(),
            a.teacher.as_str(),
            a.classroom.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
