//! Fixed layout of the PBAS self-assessment form.
//!
//! The layout follows the government proforma: a title block, Part A with
//! numbered general-information fields and qualification/appointment tables,
//! and Part B with the API teaching and activities tables plus the research
//! contribution tables. All static text comes from [`crate::boilerplate`].

use crate::boilerplate as text;
use docx_rs::{
    AlignmentType, BreakType, Docx, PageMargin, Paragraph, Run, Table, TableCell, TableRow,
};
use pbas_core::AppraisalRecord;

/// Body text size in half-points (10pt).
const BODY_SIZE: usize = 20;
/// Title text size in half-points (14pt).
const TITLE_SIZE: usize = 28;

/// One-inch page margins, in twips.
const MARGIN: i32 = 1440;

/// Fixed degree labels of the research degree table; the form keeps these
/// rows even when no degree is recorded.
const DEGREE_LABELS: [&str; 3] = ["M. Phil.", "Ph.D. / D. Phil.", "D.Sc. / D.Litt. / Any other"];

/// Assemble the complete document for one appraisal record.
pub(crate) fn build(record: &AppraisalRecord) -> Docx {
    let mut docx = Docx::new().page_margin(
        PageMargin::new()
            .top(MARGIN)
            .bottom(MARGIN)
            .left(MARGIN)
            .right(MARGIN),
    );

    docx = title_block(docx);
    docx = header_block(docx, record);
    docx = part_a(docx, record);
    docx = part_b(docx, record);
    docx
}

// ============================================================================
// Building blocks
// ============================================================================

/// A run carrying multi-line text as soft line breaks.
fn multiline(content: &str) -> Run {
    let mut run = Run::new().size(BODY_SIZE);
    for (i, line) in content.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    run
}

fn para(content: &str) -> Paragraph {
    Paragraph::new().add_run(multiline(content))
}

fn bold_para(content: &str) -> Paragraph {
    Paragraph::new().add_run(multiline(content).bold())
}

/// Bold label followed by plain value on the same line.
fn labelled(label: &str, value: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().size(BODY_SIZE).add_text(label).bold())
        .add_run(Run::new().size(BODY_SIZE).add_text(value))
}

/// Numbered form field with its value on the following line.
fn numbered_field(label: &str, value: &str) -> Paragraph {
    let mut paragraph = Paragraph::new().add_run(Run::new().size(BODY_SIZE).add_text(label));
    if !value.is_empty() {
        paragraph = paragraph.add_run(
            Run::new()
                .size(BODY_SIZE)
                .add_break(BreakType::TextWrapping)
                .add_text(value),
        );
    }
    paragraph
}

fn cell(content: &str) -> TableCell {
    TableCell::new().add_paragraph(para(content))
}

fn bold_cell(content: &str) -> TableCell {
    TableCell::new().add_paragraph(bold_para(content))
}

fn header_row(headers: &[&str]) -> TableRow {
    TableRow::new(headers.iter().map(|h| bold_cell(h)).collect())
}

fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

// ============================================================================
// Sections
// ============================================================================

fn title_block(docx: Docx) -> Docx {
    let title = Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(
            Run::new()
                .add_text(text::TITLE_LINE_1)
                .bold()
                .underline("single")
                .size(TITLE_SIZE),
        )
        .add_run(
            Run::new()
                .add_break(BreakType::TextWrapping)
                .add_text(text::TITLE_LINE_2)
                .bold()
                .underline("single")
                .size(TITLE_SIZE),
        );
    docx.add_paragraph(title)
}

fn header_block(docx: Docx, record: &AppraisalRecord) -> Docx {
    docx.add_paragraph(labelled(
        "Name of the Institute / College: ",
        &record.institute,
    ))
    .add_paragraph(labelled("Name of the Department: ", &record.department))
    .add_paragraph(labelled(
        "Under CAS Promotion for Stage / Level: ",
        &record.cas_level,
    ))
    .add_paragraph(labelled("Faculty of: ", &record.faculty))
    .add_paragraph(para(text::REFERENCES))
    .add_paragraph(labelled("ACADEMIC YEAR: ", &record.academic_year))
}

fn part_a(mut docx: Docx, record: &AppraisalRecord) -> Docx {
    docx = docx.add_paragraph(bold_para(text::PART_A_HEADING));

    let fields = [
        ("1. Name (in Block Letters)", record.name.as_str()),
        ("2. Department", record.department.as_str()),
        (
            "3. Current Designation & Academic Level",
            record.current_designation.as_str(),
        ),
        (
            "4. Date of last Promotion to current position and Academic Level",
            record.last_promotion.as_str(),
        ),
        (
            "5. Level of an applicant under CAS",
            record.cas_level.as_str(),
        ),
        (
            "6. The designation and grade pay applied for under CAS",
            record.applied_designation.as_str(),
        ),
        (
            "7. Date of eligibility for promotion",
            record.eligibility_date.as_str(),
        ),
    ];
    for (label, value) in fields {
        docx = docx.add_paragraph(numbered_field(label, value));
    }

    docx = docx
        .add_paragraph(numbered_field("8. Address (with Pin code)", &record.address))
        .add_paragraph(numbered_field("Telephone / Mobile No.", &record.mobile))
        .add_paragraph(numbered_field("E-mail", &record.email));

    // 9. Academic qualifications
    docx = docx.add_paragraph(bold_para(
        "9. Academic Qualifications (from S.S.C. till Post-Graduation):",
    ));
    let mut rows = vec![header_row(&[
        "Examinations",
        "Name of the Board / University",
        "Year of Passing",
        "Percentage of Marks Obtained",
        "Division / Class / Grade",
        "Subject",
    ])];
    for q in &record.qualifications {
        rows.push(TableRow::new(vec![
            cell(&q.examination),
            cell(&q.board),
            cell(&q.year),
            cell(&q.percentage),
            cell(&q.division),
            cell(&q.subject),
        ]));
    }
    docx = docx.add_table(Table::new(rows));

    // 10. Research degrees (fixed degree labels kept even when empty)
    docx = docx.add_paragraph(bold_para("10. Research Degree(s):"));
    let mut rows = vec![header_row(&[
        "Degrees",
        "Title",
        "Date of Award",
        "Name of University",
    ])];
    let degree_rows = record.research_degrees.len().max(DEGREE_LABELS.len());
    for i in 0..degree_rows {
        let entry = record.research_degrees.get(i);
        let label = entry
            .map(|d| d.degree.as_str())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEGREE_LABELS.get(i).copied().unwrap_or(""));
        rows.push(TableRow::new(vec![
            cell(label),
            cell(entry.map(|d| d.title.as_str()).unwrap_or("")),
            cell(entry.map(|d| d.date.as_str()).unwrap_or("")),
            cell(entry.map(|d| d.university.as_str()).unwrap_or("")),
        ]));
    }
    docx = docx.add_table(Table::new(rows));

    // 11. Prior appointments
    docx = docx.add_paragraph(bold_para(
        "11. Appointments held prior to joining this institution (please attach relevant \
certificates of service / experience):",
    ));
    let mut rows = vec![header_row(&[
        "Designation",
        "Name of Employer",
        "Essential Qualifications for the Post at the time of Appointment",
        "Nature of Appointment (Regular / Fixed term / Temporary / Adhoc)",
        "Nature of Duties",
        "Date of Joining",
        "Date of Leaving",
        "Salary with Grade",
        "Reason of Leaving",
    ])];
    for appt in &record.prior_appointments {
        rows.push(TableRow::new(vec![
            cell(&appt.designation),
            cell(&appt.employer),
            cell(&appt.qualifications),
            cell(&appt.nature),
            cell(&appt.duties),
            cell(&appt.joining_date),
            cell(&appt.leaving_date),
            cell(&appt.salary),
            cell(&appt.reason),
        ]));
    }
    docx = docx.add_table(Table::new(rows));

    // 12. Posts at this institution
    docx = docx.add_paragraph(bold_para(
        "12. Posts Held after appointment at this Institution:",
    ));
    let mut rows = vec![header_row(&[
        "Designation",
        "Department",
        "Date of Joining (From)",
        "Date of Joining (To)",
        "Grade Pay / Pay Matrix Level",
    ])];
    for post in &record.current_posts {
        rows.push(TableRow::new(vec![
            cell(&post.designation),
            cell(&post.department),
            cell(&post.from_date),
            cell(&post.to_date),
            cell(&post.grade_pay),
        ]));
    }
    docx = docx.add_table(Table::new(rows));

    // 13-15. Experience
    docx = docx
        .add_paragraph(bold_para("13. Period of teaching experience:"))
        .add_paragraph(labelled(
            "P.G. Classes (In Years): ",
            &record.pg_experience,
        ))
        .add_paragraph(labelled(
            "U.G. Classes (In Years): ",
            &record.ug_experience,
        ))
        .add_paragraph(numbered_field(
            "14. Research Experience excluding years spent in M.Phil. / Ph.D. (in Years)",
            &record.research_experience,
        ))
        .add_paragraph(numbered_field(
            "15. Fields of Specialization under the Subject / Discipline:",
            &record.specialization,
        ));

    // 16. Courses
    docx = docx.add_paragraph(bold_para(
        "16. Human Resource Development Centre Orientation / Refresher Course / FDP / MOOC / \
One-Two week Course attended so far:",
    ));
    let mut rows = vec![header_row(&[
        "Name of the Course",
        "Place",
        "Duration",
        "Name of Organizer",
    ])];
    for course in &record.courses {
        rows.push(TableRow::new(vec![
            cell(&course.name),
            cell(&course.place),
            cell(&course.duration),
            cell(&course.organizer),
        ]));
    }
    docx = docx.add_table(Table::new(rows));

    docx.add_paragraph(para("")).add_paragraph(para(text::SIGNATURE_LINE))
}

fn part_b(mut docx: Docx, record: &AppraisalRecord) -> Docx {
    docx = docx
        .add_paragraph(page_break())
        .add_paragraph(bold_para(text::PART_B_HEADING))
        .add_paragraph(para(text::PART_B_INTRO));

    // Table 1, section 1: teaching
    docx = docx.add_paragraph(bold_para("1. Teaching"));
    let rows = vec![
        header_row(&[
            "Category",
            "Name of Activity",
            "Unit of Calculation",
            "Self-Appraisal Grading",
            "Verified API Grading by Committee",
        ]),
        TableRow::new(vec![
            cell(""),
            cell(""),
            cell("Actual classes spent per year\n% of Teaching"),
            cell(text::GRADING_SCALE),
            cell(""),
        ]),
        TableRow::new(vec![
            cell("1"),
            cell(text::TEACHING_ACTIVITY),
            cell(&record.teaching_data.actual_classes),
            cell(&record.teaching_data.self_grading),
            cell(&record.teaching_data.verified_grading),
        ]),
        TableRow::new(vec![
            cell(""),
            bold_cell("Total actual hours spent"),
            cell(""),
            cell(""),
            cell(""),
        ]),
    ];
    docx = docx.add_table(Table::new(rows));

    // Table 1, section 2: activities
    docx = docx.add_paragraph(bold_para(
        "2. Involvement in the University / College students related activities / research \
activities",
    ));
    let activities = &record.activities_data;
    let mut rows = vec![
        TableRow::new(vec![
            bold_cell("Activities"),
            bold_cell("Total days spent per year"),
            bold_cell(&format!("Self-Appraisal Grading\n{}", text::GRADING_SCALE)),
            bold_cell("Verified API Grading by Committee"),
        ]),
        TableRow::new(vec![cell("(1)"), cell("(2)"), cell("(3)"), cell("(4)")]),
        TableRow::new(vec![
            cell(text::ACTIVITY_ADMIN),
            cell(&activities.admin_days),
            cell(&activities.admin_grading),
            cell(""),
        ]),
        TableRow::new(vec![
            cell(text::ACTIVITY_EXAM),
            cell(&activities.exam_days),
            cell(&activities.exam_grading),
            cell(""),
        ]),
        TableRow::new(vec![
            cell(text::ACTIVITY_STUDENT),
            cell(&activities.student_days),
            cell(&activities.student_grading),
            cell(""),
        ]),
    ];
    for description in text::EXTRA_ACTIVITIES {
        rows.push(TableRow::new(vec![
            cell(description),
            cell(""),
            cell(""),
            cell(""),
        ]));
    }
    rows.push(TableRow::new(vec![
        bold_cell("Overall Grading:"),
        cell(""),
        cell(text::OVERALL_GRADING),
        cell(""),
    ]));
    docx = docx.add_table(Table::new(rows));

    // Table 2: research and academic contributions
    if !record.publications.is_empty() || !record.research_papers.is_empty() {
        docx = docx.add_paragraph(bold_para("Table 2: Research and Academic Contributions"));
    }

    if !record.publications.is_empty() {
        docx = docx.add_paragraph(bold_para("Publications:"));
        let mut rows = vec![header_row(&[
            "Title",
            "Publisher",
            "Year",
            "ISBN",
            "Authorship",
            "Type",
        ])];
        for publication in &record.publications {
            rows.push(TableRow::new(vec![
                cell(&publication.title),
                cell(&publication.publisher),
                cell(&publication.year),
                cell(&publication.isbn),
                cell(&publication.authorship),
                cell(&publication.kind),
            ]));
        }
        docx = docx.add_table(Table::new(rows));
    }

    if !record.research_papers.is_empty() {
        docx = docx.add_paragraph(bold_para("Research Papers:"));
        let mut rows = vec![header_row(&["Title", "Journal", "ISSN", "Year"])];
        for paper in &record.research_papers {
            rows.push(TableRow::new(vec![
                cell(&paper.title),
                cell(&paper.journal),
                cell(&paper.issn),
                cell(&paper.year),
            ]));
        }
        docx = docx.add_table(Table::new(rows));
    }

    docx.add_paragraph(labelled("Note: ", text::CLOSING_NOTE))
}
