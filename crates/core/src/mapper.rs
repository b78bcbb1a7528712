//! Schema mapping from decoded documents to the canonical record.
//!
//! Faculty documents exist in several historical shapes at once: a nested
//! `part_a`/`part_b` structure written by the current form wizard, a flat
//! legacy shape, and a `formHeader` block that may carry institute-level
//! fields. Each canonical field therefore resolves through an explicit
//! ordered fallback chain of dotted lookup paths — most-structured source
//! first — and defaults to the empty string when every path misses.
//!
//! Mapping never fails. Entries of list-valued fields are projected through
//! fixed key-rename tables without filtering or validation; absent sub-fields
//! default to the empty string and every entry passes through.

use crate::record::{
    ActivitiesData, AppraisalRecord, Course, CurrentPost, PriorAppointment, Publication,
    Qualification, ResearchDegree, ResearchPaper, TeachingData,
};
use firestore::DecodedDocument;
use serde_json::{Map, Value};

// ============================================================================
// Fallback chains (declarative, most-specific path first)
// ============================================================================

mod chains {
    pub const INSTITUTE: &[&str] = &["formHeader.institute_name", "institute"];
    pub const DEPARTMENT: &[&str] = &[
        "formHeader.department_name",
        "part_a.personal_in.department",
        "department",
    ];
    pub const FACULTY: &[&str] = &["formHeader.faculty_name", "faculty"];
    pub const ACADEMIC_YEAR: &[&str] = &["formHeader.academic_year", "academic_year"];
    pub const NAME: &[&str] = &["part_a.personal_in.name", "name"];
    pub const CURRENT_DESIGNATION: &[&str] = &[
        "part_a.personal_in.current_designation",
        "current_designation",
    ];
    pub const LAST_PROMOTION: &[&str] =
        &["part_a.personal_in.date_last_promotion", "last_promotion"];
    pub const CAS_LEVEL: &[&str] = &[
        "part_a.personal_in.level_cas",
        "formHeader.cas_promotion_stage",
        "cas_level",
    ];
    pub const APPLIED_DESIGNATION: &[&str] = &[
        "part_a.personal_in.designation_applied",
        "applied_designation",
    ];
    pub const ELIGIBILITY_DATE: &[&str] =
        &["part_a.personal_in.date_eligibility", "eligibility_date"];
    pub const ADDRESS: &[&str] = &["part_a.personal_in.address", "address"];
    pub const MOBILE: &[&str] = &["part_a.personal_in.telephone", "mobile"];
    pub const EMAIL: &[&str] = &["part_a.personal_in.email", "email"];
    pub const PG_EXPERIENCE: &[&str] = &[
        "part_a.teaching_research_experience.pg_years",
        "pg_experience",
    ];
    pub const UG_EXPERIENCE: &[&str] = &[
        "part_a.teaching_research_experience.ug_years",
        "ug_experience",
    ];
    pub const RESEARCH_EXPERIENCE: &[&str] = &[
        "part_a.teaching_research_experience.research_years",
        "research_experience",
    ];
    pub const SPECIALIZATION: &[&str] = &[
        "part_a.teaching_research_experience.specialization",
        "specialization",
    ];

    pub const QUALIFICATIONS: &[&str] = &["part_a.academic_qualifications", "qualifications"];
    pub const RESEARCH_DEGREES: &[&str] = &["part_a.research_degrees", "research_degrees"];
    pub const PRIOR_APPOINTMENTS: &[&str] = &["part_a.employment.prior", "prior_appointments"];
    pub const CURRENT_POSTS: &[&str] = &["part_a.employment.posts", "current_posts"];
    pub const COURSES: &[&str] = &["part_a.courses_fdp", "courses"];
    pub const PUBLICATIONS: &[&str] = &["part_b.table2.publications", "publications"];
    pub const RESEARCH_PAPERS: &[&str] = &["part_b.table2.researchPapers", "research_papers"];
    pub const TEACHING: &[&str] = &["part_a.teaching_student_assessment.teaching"];
    pub const ACTIVITIES: &[&str] = &["part_a.teaching_student_assessment.activities"];
}

// ============================================================================
// Public mapping operation
// ============================================================================

/// Map a decoded document into a fully populated [`AppraisalRecord`].
///
/// Never errors and never leaves a field unset: missing scalars become empty
/// strings, missing lists become empty vecs. The caller is responsible for
/// having fetched and decoded the document successfully.
pub fn map_document(doc: &DecodedDocument) -> AppraisalRecord {
    AppraisalRecord {
        institute: resolve_text(doc, chains::INSTITUTE),
        department: resolve_text(doc, chains::DEPARTMENT),
        faculty: resolve_text(doc, chains::FACULTY),
        academic_year: resolve_text(doc, chains::ACADEMIC_YEAR),

        name: resolve_text(doc, chains::NAME),
        current_designation: resolve_text(doc, chains::CURRENT_DESIGNATION),
        last_promotion: resolve_text(doc, chains::LAST_PROMOTION),
        cas_level: resolve_text(doc, chains::CAS_LEVEL),
        applied_designation: resolve_text(doc, chains::APPLIED_DESIGNATION),
        eligibility_date: resolve_text(doc, chains::ELIGIBILITY_DATE),
        address: resolve_text(doc, chains::ADDRESS),
        mobile: resolve_text(doc, chains::MOBILE),
        email: resolve_text(doc, chains::EMAIL),

        pg_experience: resolve_text(doc, chains::PG_EXPERIENCE),
        ug_experience: resolve_text(doc, chains::UG_EXPERIENCE),
        research_experience: resolve_text(doc, chains::RESEARCH_EXPERIENCE),
        specialization: resolve_text(doc, chains::SPECIALIZATION),

        qualifications: project_list(doc, chains::QUALIFICATIONS, qualification_entry),
        research_degrees: project_list(doc, chains::RESEARCH_DEGREES, research_degree_entry),
        prior_appointments: project_list(doc, chains::PRIOR_APPOINTMENTS, prior_appointment_entry),
        current_posts: project_list(doc, chains::CURRENT_POSTS, current_post_entry),
        courses: project_list(doc, chains::COURSES, course_entry),
        publications: project_list(doc, chains::PUBLICATIONS, publication_entry),
        research_papers: project_list(doc, chains::RESEARCH_PAPERS, research_paper_entry),

        teaching_data: map_teaching(doc),
        activities_data: map_activities(doc),
    }
}

// ============================================================================
// Lookup helpers
// ============================================================================

/// Walk a dotted path through nested objects.
fn lookup<'a>(doc: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = doc.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Resolve a scalar field through its fallback chain; first present,
/// non-null value wins.
fn resolve_text(doc: &Map<String, Value>, chain: &[&str]) -> String {
    chain
        .iter()
        .filter_map(|path| lookup(doc, path))
        .find(|v| !v.is_null())
        .map(as_text)
        .unwrap_or_default()
}

/// Coerce any scalar value to form text. Containers and nulls collapse to
/// the empty string rather than leaking JSON syntax into the form.
fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Resolve the first present list through the chain, else empty.
fn resolve_list<'a>(doc: &'a Map<String, Value>, chain: &[&str]) -> &'a [Value] {
    chain
        .iter()
        .filter_map(|path| lookup(doc, path))
        .find_map(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Project every entry of a source list through an entry mapper.
///
/// Non-object entries still pass through as an all-default record; list
/// entries are never filtered.
fn project_list<T>(
    doc: &Map<String, Value>,
    chain: &[&str],
    entry: fn(&Map<String, Value>) -> T,
) -> Vec<T>
where
    T: Default,
{
    resolve_list(doc, chain)
        .iter()
        .map(|item| item.as_object().map(entry).unwrap_or_default())
        .collect()
}

/// First present key wins; supports legacy key spellings per field.
fn entry_text(entry: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|k| entry.get(*k))
        .find(|v| !v.is_null())
        .map(as_text)
        .unwrap_or_default()
}

// ============================================================================
// List projection tables
// ============================================================================

fn qualification_entry(entry: &Map<String, Value>) -> Qualification {
    Qualification {
        examination: entry_text(entry, &["examination"]),
        board: entry_text(entry, &["board_university", "board"]),
        year: entry_text(entry, &["year_passing", "year"]),
        percentage: entry_text(entry, &["percentage"]),
        division: entry_text(entry, &["class_division", "division"]),
        subject: entry_text(entry, &["subject"]),
    }
}

fn research_degree_entry(entry: &Map<String, Value>) -> ResearchDegree {
    ResearchDegree {
        degree: entry_text(entry, &["degree"]),
        title: entry_text(entry, &["title"]),
        date: entry_text(entry, &["date_of_award", "date_award", "date"]),
        university: entry_text(entry, &["university"]),
    }
}

fn prior_appointment_entry(entry: &Map<String, Value>) -> PriorAppointment {
    PriorAppointment {
        designation: entry_text(entry, &["designation"]),
        employer: entry_text(entry, &["employer"]),
        qualifications: entry_text(entry, &["qualifications"]),
        nature: entry_text(entry, &["nature"]),
        duties: entry_text(entry, &["duties"]),
        joining_date: entry_text(entry, &["joining_date"]),
        leaving_date: entry_text(entry, &["leaving_date"]),
        salary: entry_text(entry, &["salary"]),
        reason: entry_text(entry, &["reason", "reason_leaving"]),
    }
}

fn current_post_entry(entry: &Map<String, Value>) -> CurrentPost {
    CurrentPost {
        designation: entry_text(entry, &["designation"]),
        department: entry_text(entry, &["department"]),
        from_date: entry_text(entry, &["joining_date", "from_date"]),
        to_date: entry_text(entry, &["leaving_date", "to_date"]),
        grade_pay: entry_text(entry, &["grade_pay"]),
    }
}

fn course_entry(entry: &Map<String, Value>) -> Course {
    Course {
        name: entry_text(entry, &["name"]),
        place: entry_text(entry, &["place"]),
        duration: entry_text(entry, &["duration"]),
        organizer: entry_text(entry, &["organizer"]),
    }
}

fn publication_entry(entry: &Map<String, Value>) -> Publication {
    Publication {
        title: entry_text(entry, &["title"]),
        publisher: entry_text(entry, &["publisher"]),
        year: entry_text(entry, &["year"]),
        isbn: entry_text(entry, &["isbn"]),
        authorship: entry_text(entry, &["authorship"]),
        kind: entry_text(entry, &["type"]),
    }
}

fn research_paper_entry(entry: &Map<String, Value>) -> ResearchPaper {
    ResearchPaper {
        title: entry_text(entry, &["title"]),
        journal: entry_text(entry, &["journal"]),
        issn: entry_text(entry, &["issn"]),
        year: entry_text(entry, &["year"]),
    }
}

// ============================================================================
// Derived groups
// ============================================================================

/// Flatten the teaching assessment list into the form's single teaching row.
///
/// The template carries one teaching figure set; when the source holds
/// several rows the last one wins, matching the activity bucketing policy.
fn map_teaching(doc: &Map<String, Value>) -> TeachingData {
    let mut teaching = TeachingData::default();
    for entry in resolve_list(doc, chains::TEACHING) {
        let Some(entry) = entry.as_object() else {
            continue;
        };
        teaching = TeachingData {
            actual_classes: entry_text(entry, &["actual_class_spent", "actual_classes"]),
            self_grading: entry_text(entry, &["self_appraisal", "self_grading"]),
            verified_grading: entry_text(entry, &["verified_grading"]),
        };
    }
    teaching
}

/// Bucket free-text activity categories into the form's fixed rows.
///
/// Categorisation is a lowercase substring heuristic over the category
/// field. When several entries hit the same bucket the last one overwrites
/// the earlier ones; entries are not aggregated.
fn map_activities(doc: &Map<String, Value>) -> ActivitiesData {
    let mut activities = ActivitiesData::default();

    for entry in resolve_list(doc, chains::ACTIVITIES) {
        let Some(entry) = entry.as_object() else {
            continue;
        };

        let category = entry_text(entry, &["activity_category", "category"]).to_lowercase();
        let days = entry_text(entry, &["total_days", "days"]);
        let grading = entry_text(entry, &["self_appraisal", "grading"]);

        if category.contains("admin") {
            activities.admin_days = days.clone();
            activities.admin_grading = grading.clone();
        }
        if category.contains("exam") {
            activities.exam_days = days.clone();
            activities.exam_grading = grading.clone();
        }
        if category.contains("student") {
            activities.student_days = days.clone();
            activities.student_grading = grading.clone();
        }
    }

    activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> DecodedDocument {
        value.as_object().expect("test document is an object").clone()
    }

    #[test]
    fn empty_document_yields_fully_defaulted_record() {
        let record = map_document(&DecodedDocument::new());

        assert_eq!(record, AppraisalRecord::default());
        // Spot-check the always-fully-populated invariant through serde: no
        // key may be missing from the serialised output.
        let json = serde_json::to_value(&record).expect("record serialises");
        let obj = json.as_object().expect("record is an object");
        for key in [
            "institute",
            "name",
            "qualifications",
            "research_papers",
            "teaching_data",
            "activities_data",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(record.qualifications.len(), 0);
        assert_eq!(record.publications.len(), 0);
        assert_eq!(record.institute, "");
    }

    #[test]
    fn nested_path_wins_over_flat_legacy_field() {
        let record = map_document(&doc(json!({
            "name": "B",
            "part_a": {"personal_in": {"name": "A"}},
        })));

        assert_eq!(record.name, "A");
    }

    #[test]
    fn flat_field_used_when_nested_path_absent() {
        let record = map_document(&doc(json!({
            "name": "B",
            "department": "Computer",
        })));

        assert_eq!(record.name, "B");
        assert_eq!(record.department, "Computer");
    }

    #[test]
    fn null_nested_value_falls_through_to_legacy_field() {
        let record = map_document(&doc(json!({
            "part_a": {"personal_in": {"name": null}},
            "name": "B",
        })));

        assert_eq!(record.name, "B");
    }

    #[test]
    fn form_header_feeds_institute_fields() {
        let record = map_document(&doc(json!({
            "formHeader": {
                "institute_name": "VESIT",
                "department_name": "Computer",
                "faculty_name": "Engineering",
                "academic_year": "2025-26",
                "cas_promotion_stage": "Stage 1",
            },
        })));

        assert_eq!(record.institute, "VESIT");
        assert_eq!(record.department, "Computer");
        assert_eq!(record.faculty, "Engineering");
        assert_eq!(record.academic_year, "2025-26");
        assert_eq!(record.cas_level, "Stage 1");
    }

    #[test]
    fn personal_cas_level_beats_form_header_stage() {
        let record = map_document(&doc(json!({
            "formHeader": {"cas_promotion_stage": "Stage 1"},
            "part_a": {"personal_in": {"level_cas": "Stage 2"}},
        })));

        assert_eq!(record.cas_level, "Stage 2");
    }

    #[test]
    fn numeric_scalars_are_rendered_as_text() {
        let record = map_document(&doc(json!({
            "part_a": {"teaching_research_experience": {"pg_years": 7, "ug_years": "5"}},
        })));

        assert_eq!(record.pg_experience, "7");
        assert_eq!(record.ug_experience, "5");
    }

    #[test]
    fn qualifications_project_through_rename_table() {
        let record = map_document(&doc(json!({
            "part_a": {
                "academic_qualifications": [
                    {
                        "examination": "B.E.",
                        "board_university": "University of Mumbai",
                        "year_passing": 2015,
                        "percentage": "78.2",
                        "class_division": "First Class",
                        "subject": "Computer Engineering",
                    },
                    {"examination": "H.S.C."},
                ],
            },
        })));

        assert_eq!(record.qualifications.len(), 2);
        assert_eq!(record.qualifications[0].board, "University of Mumbai");
        assert_eq!(record.qualifications[0].year, "2015");
        assert_eq!(record.qualifications[0].division, "First Class");
        // Sparse entries pass through with defaults, never filtered.
        assert_eq!(record.qualifications[1].examination, "H.S.C.");
        assert_eq!(record.qualifications[1].board, "");
    }

    #[test]
    fn malformed_list_entries_pass_through_as_defaults() {
        let record = map_document(&doc(json!({
            "part_a": {"academic_qualifications": ["not-an-object", 42]},
        })));

        assert_eq!(record.qualifications.len(), 2);
        assert_eq!(record.qualifications[0], Qualification::default());
        assert_eq!(record.qualifications[1], Qualification::default());
    }

    #[test]
    fn current_posts_map_joining_and_leaving_dates() {
        let record = map_document(&doc(json!({
            "part_a": {
                "employment": {
                    "prior": [{"designation": "JRF", "reason_leaving": "Career growth"}],
                    "posts": [{
                        "designation": "Assistant Professor",
                        "department": "Computer",
                        "joining_date": "2020-08-01",
                        "grade_pay": "Level 10",
                    }],
                },
            },
        })));

        assert_eq!(record.prior_appointments.len(), 1);
        assert_eq!(record.prior_appointments[0].reason, "Career growth");
        assert_eq!(record.current_posts.len(), 1);
        assert_eq!(record.current_posts[0].from_date, "2020-08-01");
        assert_eq!(record.current_posts[0].to_date, "");
    }

    #[test]
    fn part_b_tables_feed_publications_and_papers() {
        let record = map_document(&doc(json!({
            "part_b": {
                "table2": {
                    "publications": [{
                        "title": "Book on ML",
                        "publisher": "Springer",
                        "year": 2023,
                        "isbn": "978-1",
                        "authorship": "Sole Author",
                        "type": "Book",
                    }],
                    "researchPapers": [
                        {"title": "P1", "journal": "JMLR", "issn": "1533-7928", "year": "2024"},
                        {"title": "P2"},
                    ],
                },
            },
        })));

        assert_eq!(record.publications.len(), 1);
        assert_eq!(record.publications[0].kind, "Book");
        assert_eq!(record.publications[0].year, "2023");
        assert_eq!(record.research_papers.len(), 2);
        assert_eq!(record.research_papers[1].journal, "");
    }

    #[test]
    fn teaching_data_takes_last_row() {
        let record = map_document(&doc(json!({
            "part_a": {
                "teaching_student_assessment": {
                    "teaching": [
                        {"actual_class_spent": "40", "self_appraisal": "Good"},
                        {"actual_class_spent": "72", "self_appraisal": "Very Good",
                         "verified_grading": "Good"},
                    ],
                },
            },
        })));

        assert_eq!(record.teaching_data.actual_classes, "72");
        assert_eq!(record.teaching_data.self_grading, "Very Good");
        assert_eq!(record.teaching_data.verified_grading, "Good");
    }

    #[test]
    fn activity_categories_bucket_by_substring() {
        let record = map_document(&doc(json!({
            "part_a": {
                "teaching_student_assessment": {
                    "activities": [
                        {"activity_category": "Administrative duties", "total_days": "30",
                         "self_appraisal": "Good"},
                        {"activity_category": "Examination", "total_days": "45",
                         "self_appraisal": "Good"},
                        {"activity_category": "Student Activities", "total_days": "25",
                         "self_appraisal": "Satisfactory"},
                        {"activity_category": "Departmental", "total_days": "99",
                         "self_appraisal": "Good"},
                    ],
                },
            },
        })));

        assert_eq!(record.activities_data.admin_days, "30");
        assert_eq!(record.activities_data.exam_days, "45");
        assert_eq!(record.activities_data.exam_grading, "Good");
        assert_eq!(record.activities_data.student_days, "25");
        assert_eq!(record.activities_data.student_grading, "Satisfactory");
    }

    #[test]
    fn later_admin_activity_overwrites_earlier() {
        // Last match wins per bucket; entries are not aggregated.
        let record = map_document(&doc(json!({
            "part_a": {
                "teaching_student_assessment": {
                    "activities": [
                        {"activity_category": "Admin committee", "total_days": "10",
                         "self_appraisal": "Good"},
                        {"activity_category": "Administration", "total_days": "20",
                         "self_appraisal": "Satisfactory"},
                    ],
                },
            },
        })));

        assert_eq!(record.activities_data.admin_days, "20");
        assert_eq!(record.activities_data.admin_grading, "Satisfactory");
    }
}
