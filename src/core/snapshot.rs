use std::collections::BTreeMap;

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::domain::model::{Course, OrganizationalUnit, Subject};
use crate::utils::error::Result;

/// Borrowed view over a collected catalog, rendered in a shallow export
/// shape: unit entries reference courses by name, course entries reference
/// subjects by code, and each subject appears once in a code-keyed map.
pub struct CatalogSnapshot<'a> {
    units: &'a [OrganizationalUnit],
    courses: &'a [Course],
    subjects: &'a BTreeMap<String, Subject>,
}

impl<'a> CatalogSnapshot<'a> {
    pub fn new(
        units: &'a [OrganizationalUnit],
        courses: &'a [Course],
        subjects: &'a BTreeMap<String, Subject>,
    ) -> Self {
        Self {
            units,
            courses,
            subjects,
        }
    }

    pub fn to_value(&self) -> Value {
        let subjects: Map<String, Value> = self
            .subjects
            .iter()
            .map(|(code, subject)| (code.clone(), subject_entry(subject)))
            .collect();
        json!({
            "units": self.units.iter().map(unit_entry).collect::<Vec<_>>(),
            "courses": self.courses.iter().map(course_entry).collect::<Vec<_>>(),
            "subjects": subjects,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        debug!(
            units = self.units.len(),
            courses = self.courses.len(),
            subjects = self.subjects.len(),
            "rendering catalog snapshot"
        );
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }
}

fn unit_entry(unit: &OrganizationalUnit) -> Value {
    json!({
        "name": unit.name(),
        "courses": unit.courses().iter().map(Course::name).collect::<Vec<_>>(),
    })
}

fn course_entry(course: &Course) -> Value {
    json!({
        "name": course.name(),
        "unit": course.unit(),
        "ideal_duration": course.ideal_duration(),
        "min_duration": course.min_duration(),
        "max_duration": course.max_duration(),
        "mandatory": codes(course.mandatory()),
        "free_electives": codes(course.free_electives()),
        "directed_electives": codes(course.directed_electives()),
    })
}

fn subject_entry(subject: &Subject) -> Value {
    json!({
        "code": subject.code(),
        "name": subject.name(),
        "class_credits": subject.class_credits(),
        "work_credits": subject.work_credits(),
        "total_hours": subject.total_hours(),
        "internship_hours": subject.internship_hours(),
        "practice_hours": subject.practice_hours(),
        "supplementary_hours": subject.supplementary_hours(),
    })
}

fn codes(subjects: &[Subject]) -> Vec<&str> {
    subjects.iter().map(Subject::code).collect()
}
