//! Canonical appraisal record schema.
//!
//! This is the flat, template-shaped schema consumed by the form renderer
//! and returned by the fetch endpoint. Every field is always present: scalar
//! fields default to the empty string and list fields to an empty vec, so
//! the output schema is never partial regardless of how sparse the upstream
//! document was.
//!
//! Records are constructed fresh per request by the mapper and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One academic qualification row (S.S.C. through post-graduation).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Qualification {
    pub examination: String,
    pub board: String,
    pub year: String,
    pub percentage: String,
    pub division: String,
    pub subject: String,
}

/// One research degree row (M.Phil., Ph.D., D.Sc. and similar).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResearchDegree {
    pub degree: String,
    pub title: String,
    pub date: String,
    pub university: String,
}

/// One appointment held before joining the current institution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriorAppointment {
    pub designation: String,
    pub employer: String,
    pub qualifications: String,
    pub nature: String,
    pub duties: String,
    pub joining_date: String,
    pub leaving_date: String,
    pub salary: String,
    pub reason: String,
}

/// One post held after appointment at the current institution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CurrentPost {
    pub designation: String,
    pub department: String,
    pub from_date: String,
    pub to_date: String,
    pub grade_pay: String,
}

/// One orientation/refresher/FDP course row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub name: String,
    pub place: String,
    pub duration: String,
    pub organizer: String,
}

/// One book or book-chapter publication row (Part B, Table 2).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Publication {
    pub title: String,
    pub publisher: String,
    pub year: String,
    pub isbn: String,
    pub authorship: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One journal/conference research paper row (Part B, Table 2).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResearchPaper {
    pub title: String,
    pub journal: String,
    pub issn: String,
    pub year: String,
}

/// Teaching performance figures for Part B, Table 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeachingData {
    pub actual_classes: String,
    pub self_grading: String,
    pub verified_grading: String,
}

/// Bucketed activity involvement for Part B, Table 1 section 2.
///
/// Buckets are filled by the mapper's category heuristic: administrative,
/// examination and student-related rows each carry a days figure and a
/// self-appraisal grading.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivitiesData {
    pub admin_days: String,
    pub admin_grading: String,
    pub exam_days: String,
    pub exam_grading: String,
    pub student_days: String,
    pub student_grading: String,
}

/// The canonical flat appraisal record.
///
/// Field names follow the PBAS form template. The invariant maintained by
/// the mapper is that every field listed here is populated — possibly with
/// its default — for every successfully fetched document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppraisalRecord {
    pub institute: String,
    pub department: String,
    pub faculty: String,
    pub academic_year: String,

    pub name: String,
    pub current_designation: String,
    pub last_promotion: String,
    pub cas_level: String,
    pub applied_designation: String,
    pub eligibility_date: String,
    pub address: String,
    pub mobile: String,
    pub email: String,

    pub pg_experience: String,
    pub ug_experience: String,
    pub research_experience: String,
    pub specialization: String,

    pub qualifications: Vec<Qualification>,
    pub research_degrees: Vec<ResearchDegree>,
    pub prior_appointments: Vec<PriorAppointment>,
    pub current_posts: Vec<CurrentPost>,
    pub courses: Vec<Course>,
    pub publications: Vec<Publication>,
    pub research_papers: Vec<ResearchPaper>,

    pub teaching_data: TeachingData,
    pub activities_data: ActivitiesData,
}
