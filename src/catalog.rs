use crate::model::{Classroom, Subject, Teacher};
use crate::scheduler::SchedError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Les trois collections d'entrée, en lecture seule pendant une génération.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalog {
    #[cfg_attr(feature = "serde", serde(default))]
    pub teachers: Vec<Teacher>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subjects: Vec<Subject>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub classrooms: Vec<Classroom>,
}

impl Catalog {
    pub fn new(teachers: Vec<Teacher>, subjects: Vec<Subject>, classrooms: Vec<Classroom>) -> Self {
        Self {
            teachers,
            subjects,
            classrooms,
        }
    }

    /// Validation amont : collections non vides, noms renseignés, volumes > 0.
    pub fn validate(&self) -> Result<(), SchedError> {
        if self.teachers.is_empty() {
            return Err(SchedError::EmptyCatalog("teachers"));
        }
        if self.subjects.is_empty() {
            return Err(SchedError::EmptyCatalog("subjects"));
        }
        if self.classrooms.is_empty() {
            return Err(SchedError::EmptyCatalog("classrooms"));
        }
        if let Some(t) = self.teachers.iter().find(|t| t.name.trim().is_empty()) {
            return Err(SchedError::InvalidInput(format!(
                "teacher with empty name (subjects: {})",
                t.subjects.join(", ")
            )));
        }
        for s in &self.subjects {
            if s.name.trim().is_empty() {
                return Err(SchedError::InvalidInput("subject with empty name".into()));
            }
            if s.weekly_periods == 0 {
                return Err(SchedError::InvalidInput(format!(
                    "subject {} has weekly_periods=0",
                    s.name
                )));
            }
        }
        if self.classrooms.iter().any(|r| r.label.trim().is_empty()) {
            return Err(SchedError::InvalidInput("classroom with empty label".into()));
        }
        Ok(())
    }

    /// Enseignants qualifiés, dans l'ordre d'entrée.
    pub fn qualified_teachers(&self, subject: &str) -> Vec<&Teacher> {
        self.teachers.iter().filter(|t| t.teaches(subject)).collect()
    }

    /// Salles compatibles, dans l'ordre d'entrée.
    pub fn suitable_rooms(&self, subject: &Subject) -> Vec<&Classroom> {
        self.classrooms.iter().filter(|r| r.suits(subject)).collect()
    }

    pub fn find_subject(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.name == name)
    }

    pub fn find_teacher(&self, name: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.name == name)
    }

    pub fn find_classroom(&self, label: &str) -> Option<&Classroom> {
        self.classrooms.iter().find(|r| r.label == label)
    }
}
