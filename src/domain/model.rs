use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace};

/// A single curricular unit of study.
///
/// Identity is the subject code alone: two subjects with the same code are
/// equal and hash identically even when every other field differs. All
/// fields are fixed at construction; there are no mutators. Hour fields of
/// zero mean the category does not apply to the subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    code: String,
    name: String,
    class_credits: i32,
    work_credits: i32,
    total_hours: i32,
    internship_hours: i32,
    practice_hours: i32,
    supplementary_hours: i32,
}

impl Subject {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: String,
        name: String,
        class_credits: i32,
        work_credits: i32,
        total_hours: i32,
        internship_hours: i32,
        practice_hours: i32,
        supplementary_hours: i32,
    ) -> Self {
        Self {
            code,
            name,
            class_credits,
            work_credits,
            total_hours,
            internship_hours,
            practice_hours,
            supplementary_hours,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_credits(&self) -> i32 {
        self.class_credits
    }

    pub fn work_credits(&self) -> i32 {
        self.work_credits
    }

    pub fn total_hours(&self) -> i32 {
        self.total_hours
    }

    pub fn internship_hours(&self) -> i32 {
        self.internship_hours
    }

    /// Pedagogical-practice workload hours.
    pub fn practice_hours(&self) -> i32 {
        self.practice_hours
    }

    /// Supplementary-activity hours.
    pub fn supplementary_hours(&self) -> i32 {
        self.supplementary_hours
    }
}

impl PartialEq for Subject {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Subject {}

impl Hash for Subject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subject {{ code='{}', name='{}', class_credits={}, work_credits={}, workload={}h",
            self.code, self.name, self.class_credits, self.work_credits, self.total_hours
        )?;
        if self.internship_hours > 0 {
            write!(f, ", internship={}h", self.internship_hours)?;
        }
        if self.practice_hours > 0 {
            write!(f, ", practice={}h", self.practice_hours)?;
        }
        if self.supplementary_hours > 0 {
            write!(f, ", supplementary={}h", self.supplementary_hours)?;
        }
        write!(f, " }}")
    }
}

/// A named academic program grouping subjects into mandatory, free-elective
/// and directed-elective sequences.
///
/// Each sequence is append-only and keeps insertion order; nothing is
/// deduplicated, so the same subject may appear twice in one sequence or
/// across several. Durations are opaque catalog text and are never parsed.
/// The owning-unit name has an accessor but no crate API assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    name: String,
    unit: Option<String>,
    ideal_duration: String,
    min_duration: String,
    max_duration: String,
    mandatory: Vec<Subject>,
    free_electives: Vec<Subject>,
    directed_electives: Vec<Subject>,
}

impl Course {
    pub fn new(
        name: String,
        ideal_duration: String,
        min_duration: String,
        max_duration: String,
    ) -> Self {
        Self {
            name,
            unit: None,
            ideal_duration,
            min_duration,
            max_duration,
            mandatory: Vec::new(),
            free_electives: Vec::new(),
            directed_electives: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the unit offering this course, when known.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn ideal_duration(&self) -> &str {
        &self.ideal_duration
    }

    pub fn min_duration(&self) -> &str {
        &self.min_duration
    }

    pub fn max_duration(&self) -> &str {
        &self.max_duration
    }

    pub fn mandatory(&self) -> &[Subject] {
        &self.mandatory
    }

    pub fn free_electives(&self) -> &[Subject] {
        &self.free_electives
    }

    pub fn directed_electives(&self) -> &[Subject] {
        &self.directed_electives
    }

    pub fn push_mandatory(&mut self, subject: Subject) {
        trace!(course = %self.name, subject = %subject.code, "append mandatory subject");
        self.mandatory.push(subject);
    }

    pub fn push_free_elective(&mut self, subject: Subject) {
        trace!(course = %self.name, subject = %subject.code, "append free-elective subject");
        self.free_electives.push(subject);
    }

    pub fn push_directed_elective(&mut self, subject: Subject) {
        trace!(course = %self.name, subject = %subject.code, "append directed-elective subject");
        self.directed_electives.push(subject);
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course {{ name = {}, unit = {} }}",
            self.name,
            self.unit.as_deref().unwrap_or("unassigned")
        )
    }
}

/// An administrative grouping that offers one or more courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationalUnit {
    name: String,
    courses: Vec<Course>,
}

impl OrganizationalUnit {
    pub fn new(name: String) -> Self {
        Self {
            name,
            courses: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Appends unconditionally; no duplicate check, no capacity limit.
    pub fn add_course(&mut self, course: Course) {
        debug!(unit = %self.name, course = %course.name, "add course");
        self.courses.push(course);
    }
}

impl fmt::Display for OrganizationalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit: {}\nCourses: [", self.name)?;
        for (i, course) in self.courses.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", course)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(subject: &Subject) -> u64 {
        let mut hasher = DefaultHasher::new();
        subject.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_ignores_everything_but_the_code() {
        let a = Subject::new("MAC0110".to_string(), "Introduction to Computing".to_string(), 4, 0, 60, 0, 0, 0);
        let b = Subject::new("MAC0110".to_string(), "Computing I".to_string(), 2, 2, 90, 30, 0, 0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = Subject::new("MAC0121".to_string(), "Introduction to Computing".to_string(), 4, 0, 60, 0, 0, 0);
        assert_ne!(a, c);
    }

    #[test]
    fn test_set_lookup_is_keyed_by_code() {
        let mut offered = HashSet::new();
        offered.insert(Subject::new("EDM0425".to_string(), "Teaching Methodology".to_string(), 4, 1, 90, 0, 5, 30));
        assert!(offered.contains(&Subject::new("EDM0425".to_string(), "".to_string(), 0, 0, 0, 0, 0, 0)));
        assert!(!offered.contains(&Subject::new("EDM0426".to_string(), "Teaching Methodology".to_string(), 4, 1, 90, 0, 5, 30)));
    }

    #[test]
    fn test_summary_shows_only_applicable_hour_categories() {
        let subject = Subject::new("EDM0425".to_string(), "Teaching Methodology".to_string(), 4, 1, 90, 0, 5, 0);
        let summary = subject.to_string();
        assert!(summary.contains("practice=5h"));
        assert!(!summary.contains("internship"));
        assert!(!summary.contains("supplementary"));
    }

    #[test]
    fn test_summary_with_no_optional_categories() {
        let subject = Subject::new("MAT2453".to_string(), "Calculus I".to_string(), 6, 0, 90, 0, 0, 0);
        let summary = subject.to_string();
        assert!(summary.contains("code='MAT2453'"));
        assert!(summary.contains("workload=90h"));
        assert!(!summary.contains("internship"));
        assert!(!summary.contains("practice"));
        assert!(!summary.contains("supplementary"));
    }

    #[test]
    fn test_negative_hours_are_stored_verbatim() {
        let subject = Subject::new("XXX0000".to_string(), "Odd catalog row".to_string(), -1, 0, -60, 0, 0, 0);
        assert_eq!(subject.class_credits(), -1);
        assert_eq!(subject.total_hours(), -60);
    }

    #[test]
    fn test_course_summary_shows_name_and_unit_only() {
        let course = Course::new("Mathematics".to_string(), "8".to_string(), "8".to_string(), "12".to_string());
        assert_eq!(course.unit(), None);
        let summary = course.to_string();
        assert_eq!(summary, "Course { name = Mathematics, unit = unassigned }");
        assert!(!summary.contains('8'));
    }

    #[test]
    fn test_course_sequences_keep_duplicates_and_order() {
        let mut course = Course::new("Mathematics".to_string(), "8".to_string(), "8".to_string(), "12".to_string());
        let calculus = Subject::new("MAT2453".to_string(), "Calculus I".to_string(), 6, 0, 90, 0, 0, 0);
        course.push_mandatory(calculus.clone());
        course.push_mandatory(calculus.clone());
        course.push_free_elective(calculus);
        let codes: Vec<_> = course.mandatory().iter().map(Subject::code).collect();
        assert_eq!(codes, ["MAT2453", "MAT2453"]);
        assert_eq!(course.free_electives().len(), 1);
        assert!(course.directed_electives().is_empty());
    }

    #[test]
    fn test_unit_appends_courses_in_order() {
        let mut unit = OrganizationalUnit::new("Engineering".to_string());
        unit.add_course(Course::new("CS101".to_string(), "8".to_string(), "6".to_string(), "12".to_string()));
        unit.add_course(Course::new("CS102".to_string(), "8".to_string(), "6".to_string(), "12".to_string()));
        let names: Vec<_> = unit.courses().iter().map(Course::name).collect();
        assert_eq!(names, ["CS101", "CS102"]);
    }

    #[test]
    fn test_unit_summary_embeds_course_summaries_in_order() {
        let mut unit = OrganizationalUnit::new("Engineering".to_string());
        unit.add_course(Course::new("CS101".to_string(), "8".to_string(), "6".to_string(), "12".to_string()));
        unit.add_course(Course::new("CS102".to_string(), "8".to_string(), "6".to_string(), "12".to_string()));
        let summary = unit.to_string();
        assert!(summary.starts_with("Unit: Engineering\nCourses: ["));
        let first = summary.find("Course { name = CS101").unwrap();
        let second = summary.find("Course { name = CS102").unwrap();
        assert!(first < second);
    }
}
