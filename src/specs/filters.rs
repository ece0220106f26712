// src/specs/filters.rs

/// Display label for a filter code as the search page names it.
/// Unknown codes fall back to the code itself.
pub fn label(code: &str) -> &str {
    match code {
        "module_category_ss"    => "Category",
        "cluster"               => "Topic",
        "eventdate_dts"         => "Date",
        "sortableinstructor_ss" => "Instructor/Author",
        "eventtype_ss"          => "Instructional Method",
        "filetype_s"            => "File Type",
        "coursename_s"          => "Course Name",
        "group_ss"              => "Program Level",
        "curriculumyear_ss"     => "Graduation Year",
        "source_s"              => "Source",
        other                   => other,
    }
}
