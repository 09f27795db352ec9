use std::collections::HashSet;

use log::{debug, info};
use regex::Regex;

use crate::core::page_type::PageConfig;
use crate::model::course::Course;
use crate::model::grid::TimetableGrid;

/// 课程代码的形状，如 COMP7103A、FITE7410B、SFEC5101
pub const COURSE_CODE_PATTERN: &str = r"^[A-Z]{4}\d{4}[A-Z]?$";

/// 从课表网格提取课程列表。
/// 先找到表头行，再逐行读取固定列位上的代码和名称，
/// 按代码去重，保留文档顺序中第一次出现的条目。
/// 找不到表头不算错误，直接返回空列表
pub fn extract_courses(grid: &TimetableGrid, config: &PageConfig) -> Vec<Course> {
    let header_row = match find_header_row(grid, config) {
        Some(index) => index,
        None => {
            debug!(
                "header cell {:?}/{:?} not found",
                config.header_class, config.header_text
            );
            return Vec::new();
        }
    };

    let code_regex = Regex::new(COURSE_CODE_PATTERN).unwrap();
    let mut courses = Vec::new();
    let mut seen_codes = HashSet::new();

    for row in &grid.rows[header_row + 1..] {
        if row.cells.len() <= 2 {
            continue;
        }
        // 代码固定在第二列，名称固定在第三列，这是页面布局的约定
        let code = config.fix_course_code(row.cells[1].text.trim());
        let title = row.cells[2].text.trim().to_string();

        if !code_regex.is_match(&code) {
            continue;
        }
        if seen_codes.insert(code.clone()) {
            courses.push(Course { code, title });
        }
    }

    info!("extracted {} courses", courses.len());
    courses
}

/// 第一个 class 和文本都匹配的表头单元格所在的行
fn find_header_row(grid: &TimetableGrid, config: &PageConfig) -> Option<usize> {
    grid.rows.iter().position(|row| {
        row.cells.iter().any(|cell| {
            cell.has_class(config.header_class) && cell.text.trim() == config.header_text
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page_type::PageType;
    use crate::model::grid::{Cell, Row};
    use pretty_assertions::assert_eq;

    fn row(texts: &[&str]) -> Row {
        Row::new(texts.iter().map(|text| Cell::new(*text)).collect())
    }

    fn header_row(config: &PageConfig) -> Row {
        Row::new(vec![
            Cell::new(""),
            Cell::with_class(config.header_text, config.header_class),
            Cell::new("Course Title"),
        ])
    }

    #[test]
    fn extracts_single_course_after_header() {
        let config = PageType::Sem1.config();
        let grid = TimetableGrid::new(vec![
            header_row(config),
            row(&["", "COMP7103A", "Data Mining"]),
            row(&["", "", ""]),
        ]);

        let courses = extract_courses(&grid, config);
        assert_eq!(
            courses,
            vec![Course {
                code: "COMP7103A".to_string(),
                title: "Data Mining".to_string(),
            }]
        );
    }

    #[test]
    fn missing_header_returns_empty_list() {
        let config = PageType::Sem1.config();
        let grid = TimetableGrid::new(vec![row(&["", "COMP7103A", "Data Mining"])]);
        assert!(extract_courses(&grid, config).is_empty());
    }

    #[test]
    fn header_needs_both_class_and_text() {
        let config = PageType::Sem1.config();
        // class 对但文本不对
        let wrong_text = Row::new(vec![
            Cell::new(""),
            Cell::with_class("Something", config.header_class),
            Cell::new(""),
        ]);
        // 文本对但 class 不对
        let wrong_class = Row::new(vec![
            Cell::new(""),
            Cell::with_class(config.header_text, "xl0000000"),
            Cell::new(""),
        ]);
        let grid = TimetableGrid::new(vec![
            wrong_text,
            wrong_class,
            row(&["", "COMP7103A", "Data Mining"]),
        ]);
        assert!(extract_courses(&grid, config).is_empty());
    }

    #[test]
    fn rows_before_header_are_ignored() {
        let config = PageType::Sem1.config();
        let grid = TimetableGrid::new(vec![
            row(&["", "AAAA1111", "Before Header"]),
            header_row(config),
            row(&["", "BBBB2222", "After Header"]),
        ]);

        let courses = extract_courses(&grid, config);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].code, "BBBB2222");
    }

    #[test]
    fn deduplicates_by_code_keeping_first_occurrence() {
        let config = PageType::Sem1.config();
        let grid = TimetableGrid::new(vec![
            header_row(config),
            row(&["", "COMP7103A", "Data Mining"]),
            row(&["", "FITE7410B", "Financial Fraud"]),
            row(&["", "COMP7103A", "Data Mining (repeat)"]),
        ]);

        let courses = extract_courses(&grid, config);
        let codes: Vec<&str> = courses.iter().map(|course| course.code.as_str()).collect();
        assert_eq!(codes, vec!["COMP7103A", "FITE7410B"]);
        assert_eq!(courses[0].title, "Data Mining");
    }

    #[test]
    fn rejects_codes_that_do_not_match_shape() {
        let config = PageType::Sem1.config();
        let grid = TimetableGrid::new(vec![
            header_row(config),
            row(&["", "COMP710", "too short"]),
            row(&["", "comp7103a", "lower case"]),
            row(&["", "COMP7103AB", "double section"]),
            row(&["", "Venue: Room 101", "not a code"]),
            row(&["", "SFEC5101", "Entrepreneurship"]),
        ]);

        let courses = extract_courses(&grid, config);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].code, "SFEC5101");
    }

    #[test]
    fn skips_rows_with_two_or_fewer_cells() {
        let config = PageType::Sem1.config();
        let grid = TimetableGrid::new(vec![
            header_row(config),
            Row::new(vec![Cell::new(""), Cell::new("COMP7103A")]),
            row(&["", "FITE7410B", "Financial Fraud"]),
        ]);

        let courses = extract_courses(&grid, config);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].code, "FITE7410B");
    }

    #[test]
    fn sem2sh_normalizes_code_before_shape_check() {
        let config = PageType::Sem2Sh.config();
        let grid = TimetableGrid::new(vec![
            header_row(config),
            row(&["", "COMP7611A", "Advanced Topics"]),
        ]);

        let courses = extract_courses(&grid, config);
        assert_eq!(courses.len(), 1);
        // 提取结果里是修正后的基础代码
        assert_eq!(courses[0].code, "COMP7611");
    }
}
