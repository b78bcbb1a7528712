//! Static boilerplate text of the PBAS proforma.
//!
//! The form carries fixed statutory references, grading criteria and
//! activity descriptions that appear verbatim in every generated document.
//! They live here so the layout code in `template` stays readable.

pub const TITLE_LINE_1: &str = "Self-Assessment-Cum-Performance Appraisal Forms";
pub const TITLE_LINE_2: &str = "API-PBAS Proforma";

pub const REFERENCES: &str = "Reference:\n\
i) The Gazette of India: Extraordinary, Part III Section 4 dated 18th July, 2018\n\
ii) Government of Maharashtra Misc. - 2018 CR 56/18/UNI-1 dated 8th March, 2019\n\
iii) Government of Maharashtra Misc. - 2018 CR 56/18/UNI-1 dated 10th May, 2019";

pub const PART_A_HEADING: &str = "PART A: GENERAL INFORMATION AND ACADEMIC BACKGROUND";

pub const PART_B_HEADING: &str = "PART B: ACADEMIC PERFORMANCE INDICATORS (API)";

pub const PART_B_INTRO: &str = "Based on the teacher's self-assessment, API scores are proposed for \
(1) teaching related activities and domain knowledge; (2) involvement in University/College \
students' related activities / research activities. The minimum API score required by teachers \
from this category is different for different levels of promotion. The self-assessment score \
should be based on objectively verifiable records. It shall be finalized by the Screening cum \
Evaluation / Selection Committee. The University may detail the activities, in case institutional \
specificities require, and adjust the weightages without changing the minimum total API scores \
required under this category.\n\n\
Table 1\n\
Assessment Criteria and Methodology for University/College Teachers";

pub const GRADING_SCALE: &str = "For Assistant Professor / Associate Professor / Professor\n\
i) Good: 80% & Above\n\
ii) Satisfactory: Below 80% but 70% & Above\n\
iii) Not satisfactory: Less than 70%";

pub const TEACHING_ACTIVITY: &str = "Teaching: (Number of classes taught / total classes \
assigned) x 100% (classes taught include sessions on tutorials, lab and other teaching related \
activities)\n\
(Teaching: Blackboard Teaching, ICT based, Practical / Laboratory, Tutorials / Assignments / \
Project, Field Work, Group Discussion, Seminars, Remedial Teaching, clarifying doubts within \
and outside the class hours, additional teaching to support counselling and mentoring)";

pub const ACTIVITY_ADMIN: &str = "(a) Administrative responsibilities such as Head, \
Chairperson / Dean / Director / IQAC Coordinator / different committees / Warden, etc.";

pub const ACTIVITY_EXAM: &str = "(b) Examination and evaluation duties assigned by the \
college / university or attending the examination paper evaluation:\n\
i) Question Paper Setting\n\
ii) Invigilation / Supervision\n\
iii) Flying Squad\n\
iv) CS / ACS / Custodian\n\
v) CAP Director / Assistant Director\n\
vi) Unfair Means Committee\n\
vii) Grievance Committee\n\
viii) Internal Assessment\n\
ix) External Assessment\n\
x) Re-valuation\n\
xi) Result Preparation (College Level for Internal Assessment)\n\
xii) RRC / RAC Committee\n\
xiii) M.Phil. / Ph.D. Thesis evaluation / any other";

pub const ACTIVITY_STUDENT: &str = "(c) Student related co-curricular, extension and field \
based activities such as student clubs, career counselling, study visits, student seminars and \
other events, cultural, sports, NCC, NSS and community services.";

/// Fixed activity rows (d) onward; the form keeps them even when no data is
/// captured for them.
pub const EXTRA_ACTIVITIES: &[&str] = &[
    "(d) Institutional governance / participation in State / Central bodies / committees on \
education, research and national development (Govt. nominee / nodal officer / enquiry committee \
member / inspection committee member / State Govt. workshop committee / Govt. CAS committee / \
subject expert)",
    "(e) Organizing seminars / conferences / workshops and other college / university activities.",
    "(f) Evidence of active involvement in guiding Ph.D. students:\n\
i) No. of registered candidates\n\
ii) No. of awarded candidates",
    "(g) Conducting minor or major research projects sponsored by national or international \
agencies:\n\
i) Above 10 lacs\n\
ii) Below 10 lacs",
    "(h) At least one single or joint publication in peer-reviewed or UGC listed journals.",
];

pub const OVERALL_GRADING: &str = "Good: good in teaching and satisfactory or good in activity \
at S.No. 2. Or Satisfactory: satisfactory in teaching and good or satisfactory in activity at \
S.No. 2.\n\
Not satisfactory: if neither good nor satisfactory in overall grading.";

pub const CLOSING_NOTE: &str = "For the purpose of assessing the grading of activity at Serial \
No. 1 and Serial No. 2, all such periods of duration which have been spent by the teacher on \
different kinds of paid leaves such as Maternity Leave, Child Care Leave, Study Leave, Medical \
Leave, Extraordinary Leave and Deputation shall be excluded from the grading assessment. The \
teacher shall be assessed for the remaining period of duration and the same shall be \
extrapolated for the entire period of assessment to arrive at the grading of the teacher. The \
teacher on such leaves or deputation as mentioned above shall not be put to any disadvantage \
for promotion under CAS due to his/her absence from his/her teaching responsibilities, subject \
to the condition that such leave / deputation was undertaken with the prior approval of the \
competent authority following all procedures laid down in these regulations and as per the \
acts, statutes and ordinances of the parent institution.";

pub const SIGNATURE_LINE: &str = "Name & Signature of Teacher";
