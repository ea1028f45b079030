//! Prompt construction for attendance suggestions.
//!
//! The prompt is deterministic: the same subjects in the same order always
//! produce a byte-identical string.

use crate::dtos::Subject;

/// Fixed instruction block that precedes the subject stats.
const PROMPT_HEADER: &str =
    "You are an assistant helping a student plan class attendance and study schedule.\n\
     Given these subjects with attendance stats, suggest:\n\
     1) Which subjects they need to focus more on.\n\
     2) How they should adjust their timetable for the next week.\n\
     3) Any warnings about low attendance.\n\n\
     Subjects:\n";

/// Render one subject as a stats line.
pub fn render_subject_line(subject: &Subject) -> String {
    format!(
        "{}: attended={}, total={}, target={}%",
        subject.name, subject.attended, subject.total, subject.target_attendance
    )
}

/// Build the full model prompt: instruction header plus one stats line per
/// subject, in input order. An empty subject list leaves the section empty.
pub fn build_prompt(subjects: &[Subject]) -> String {
    let lines: Vec<String> = subjects.iter().map(render_subject_line).collect();
    format!("{}{}", PROMPT_HEADER, lines.join("\n"))
}
