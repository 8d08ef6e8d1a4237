use crate::timetable::Timetable;
use std::fmt::Write;

/// Permet de customiser le rendu du bilan (texte, mail, etc.).
pub trait ReportRenderer {
    fn render(&self, timetable: &Timetable) -> String;
}

/// Bilan texte : une ligne par matière, puis les manques.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render(&self, timetable: &Timetable) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Timetable {id} (seed {seed}), {n} period(s) placed",
            id = timetable.id,
            seed = timetable.seed,
            n = timetable.schedule.len()
        );
        let width = timetable
            .outcomes
            .iter()
            .map(|o| o.subject.chars().count())
            .max()
            .unwrap_or(0);
        for o in &timetable.outcomes {
            let _ = writeln!(
                out,
                "  {subject:<width$}  {mode:<7}  {placed}/{requested}",
                subject = o.subject,
                mode = o.mode.as_str(),
                placed = o.periods_placed,
                requested = o.periods_requested,
            );
        }
        for o in timetable.shortfalls() {
            let _ = writeln!(
                out,
                "warning: could not schedule all periods for {} ({}/{})",
                o.subject, o.periods_placed, o.periods_requested
            );
        }
        out
    }
}

/// Raccourci pour le rendu par défaut.
pub fn render_report(timetable: &Timetable) -> String {
    TextReport.render(timetable)
}
