// src/specs/results.rs
//! Result record → export rows.
//!
//! A record looks like:
//! ```text
//! { "doclist": { "docs": [
//!     { "courseid_s": …, "coursename_s": …, "curriculumyear_ss": [..], "group_ss": [..],
//!       "eventdate_min_dt": "2017-08-14T13:00:00Z", "filetype_s": …, "title_t": …,
//!       "hl_content_txt": ["… <strong>term</strong> …"], "page_number_i": 4,
//!       "instructor_ss": [..], "score": 3.2 },
//!     …one doc per matching page…
//! ] } }
//! ```
//! Lecture-level columns come from `docs[0]`; page-level columns (page, lecturer,
//! score) from each doc.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::core::{html, sanitize};

pub const HEADERS: [&str; 11] = [
    "Unique Lecture", "Graduation Year", "Program Level", "Course", "Document Type", "Page",
    "Lecture Title", "Date", "Keyword(s)", "Lecturer", "Score",
];

pub fn headers() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

/// One row per page hit, lectures numbered from 1 in result order.
pub fn rows(results: &[Value]) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    for (i, record) in results.iter().enumerate() {
        let docs = record
            .pointer("/doclist/docs")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let Some(first) = docs.first() else {
            logd!("Export: Result {} has no docs, skipped", i + 1);
            continue;
        };

        let lecture = Lecture::from_doc(first);
        for doc in docs {
            out.push(lecture.row(i + 1, doc));
        }
    }
    out
}

/// Columns shared by every page hit of one lecture.
struct Lecture {
    grad_year: String,
    program_level: String,
    course: String,
    doc_type: String,
    title: String,
    date: String,
    keywords: String,
}

impl Lecture {
    fn from_doc(doc: &Value) -> Self {
        let keywords = first_of(doc.get("hl_content_txt"))
            .and_then(Value::as_str)
            .and_then(|snippet| html::first_element_inner(snippet, "strong"))
            .map(String::from)
            .unwrap_or_default();
        let date = doc
            .get("eventdate_min_dt")
            .and_then(Value::as_str)
            .and_then(parse_date)
            .map(format_date)
            .unwrap_or_default();

        Self {
            grad_year: cell(first_of(doc.get("curriculumyear_ss"))),
            program_level: cell(first_of(doc.get("group_ss"))),
            course: cell(doc.get("coursename_s")),
            doc_type: cell(doc.get("filetype_s")),
            title: cell(doc.get("title_t")),
            date,
            keywords,
        }
    }

    fn row(&self, number: usize, doc: &Value) -> Vec<String> {
        // Instructor missing → last word of the title (titles end in the lecturer's name)
        let lecturer = match doc.get("instructor_ss") {
            Some(v) if !v.is_null() => cell(Some(v)),
            _ => s!(sanitize::last_word(&self.title)),
        };
        // Trailing space keeps spreadsheets from reading the page as a number
        let page = join!(&cell(doc.get("page_number_i")), " ");

        vec![
            number.to_string(),
            self.grad_year.clone(),
            self.program_level.clone(),
            self.course.clone(),
            self.doc_type.clone(),
            page,
            self.title.clone(),
            self.date.clone(),
            self.keywords.clone(),
            lecturer,
            cell(doc.get("score")),
        ]
    }
}

fn first_of(v: Option<&Value>) -> Option<&Value> {
    v?.as_array()?.first()
}

/// Plain text for a JSON value; arrays are comma-joined, null/missing is empty.
pub fn cell(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => s!(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| cell(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    }
}

/// RFC 3339 timestamps are taken in UTC; bare dates and zone-less timestamps as-is.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// "August 14, 2017"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lecture() -> Value {
        json!({ "doclist": { "docs": [
            {
                "coursename_s": "Cardiology",
                "curriculumyear_ss": ["2021", "2022"],
                "group_ss": ["MS2"],
                "eventdate_min_dt": "2017-08-04T13:00:00Z",
                "filetype_s": "pdf",
                "title_t": "Heart Failure Smith",
                "hl_content_txt": ["about <strong>systolic</strong> <strong>x</strong>"],
                "page_number_i": 3,
                "instructor_ss": ["Smith, J", "Doe, A"],
                "score": 2.5
            },
            { "page_number_i": 7, "score": 1 }
        ]}})
    }

    #[test]
    fn one_row_per_page_hit() {
        let rows = rows(&[lecture()]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![
            "1", "2021", "MS2", "Cardiology", "pdf", "3 ", "Heart Failure Smith",
            "August 4, 2017", "systolic", "Smith, J,Doe, A", "2.5",
        ]);
        // second hit: lecture columns from docs[0], lecturer from the title
        assert_eq!(rows[1][0], "1");
        assert_eq!(rows[1][5], "7 ");
        assert_eq!(rows[1][6], "Heart Failure Smith");
        assert_eq!(rows[1][9], "Smith");
        assert_eq!(rows[1][10], "1");
    }

    #[test]
    fn lectures_are_numbered_in_order_and_empty_records_skipped() {
        let rows = rows(&[lecture(), json!({ "doclist": { "docs": [] } }), json!("junk"), lecture()]);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2][0], "4");
    }

    #[test]
    fn missing_fields_are_blank() {
        let rows = rows(&[json!({ "doclist": { "docs": [{}] } })]);
        assert_eq!(rows[0], vec!["1", "", "", "", "", " ", "", "", "", "", ""]);
    }

    #[test]
    fn dates_in_several_shapes() {
        let d = NaiveDate::from_ymd_opt(2019, 1, 9).unwrap();
        assert_eq!(parse_date("2019-01-09T23:30:00Z"), Some(d));
        assert_eq!(parse_date("2019-01-09T23:30:00"), Some(d));
        assert_eq!(parse_date("2019-01-09"), Some(d));
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(format_date(d), "January 9, 2019");
    }
}
