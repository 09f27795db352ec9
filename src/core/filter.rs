use std::collections::HashSet;

use log::info;

use crate::core::page_type::PageConfig;
use crate::model::grid::TimetableGrid;

pub const WEEKDAYS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

pub const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

pub const SPECIAL_LABELS: [&str; 4] = [
    "Exam",
    "University Holiday",
    "Holiday",
    "Tech Immersion Week",
];

/// 课表正式网格从第一个 MON 行开始，MON 固定出现在这一列
const WEEKDAY_PROBE_COLUMN: usize = 3;

/// 允许保留的前缀集合：选中的课程代码 + 星期 + 时间数字 + 特殊标签
pub fn allowed_texts(selected_codes: &[String]) -> Vec<String> {
    let mut allowed: Vec<String> = selected_codes.to_vec();
    allowed.extend(WEEKDAYS.iter().map(|token| token.to_string()));
    allowed.extend(DIGITS.iter().map(|token| token.to_string()));
    allowed.extend(SPECIAL_LABELS.iter().map(|token| token.to_string()));
    allowed
}

/// 唯一的匹配策略：前缀匹配，不是全等
pub fn matches_allowed(text: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|prefix| text.starts_with(prefix.as_str()))
}

/// 就地过滤课表：不在允许集合里的单元格被清空（文本置空、背景刷白），
/// 表格行列结构不变。清空不可逆，恢复原状只能重新加载页面
pub fn apply_filter(grid: &mut TimetableGrid, selected_codes: &[String], config: &PageConfig) {
    let allowed = allowed_texts(selected_codes);
    if config.preserve_location_cells {
        filter_two_row(grid, selected_codes, &allowed);
    } else {
        filter_simple(grid, &allowed);
    }
}

/// 单行布局：每个单元格只看自己，空白或前缀命中就保留
fn filter_simple(grid: &mut TimetableGrid, allowed: &[String]) {
    let mut cleared = 0usize;
    for row in &mut grid.rows {
        for cell in &mut row.cells {
            if cell.is_blank() || matches_allowed(cell.text.trim(), allowed) {
                continue;
            }
            cell.clear();
            cleared += 1;
        }
    }
    info!("filter cleared {cleared} cells");
}

/// 两行（ECIC）布局：地点行紧跟在课程行下面同一列，
/// 地点文本本身过不了前缀匹配，所以要分两遍处理
fn filter_two_row(grid: &mut TimetableGrid, selected_codes: &[String], allowed: &[String]) {
    // 第一遍：在做任何修改之前，先把保留集合完整记下来。
    // 第二遍必须基于这份原始判定，不能看改了一半的网格
    let mut keep: HashSet<(usize, usize)> = HashSet::new();
    for (row_index, row) in grid.rows.iter().enumerate() {
        for (col_index, cell) in row.cells.iter().enumerate() {
            if cell.is_blank() || matches_allowed(cell.text.trim(), allowed) {
                keep.insert((row_index, col_index));
            }
        }
    }

    // 第二遍：第一遍没保留的单元格，如果正上方（上一行同列）的单元格
    // 被保留且以选中的课程代码开头，它就是该课程的地点格，留下；
    // 否则清空。注意只有选中的课程能保护下一行，
    // 星期、数字、特殊标签被保留时并不保护它们下面的格子
    let mut cleared = 0usize;
    for row_index in 0..grid.rows.len() {
        for col_index in 0..grid.rows[row_index].cells.len() {
            if keep.contains(&(row_index, col_index)) {
                continue;
            }
            if is_location_of_selected(grid, row_index, col_index, selected_codes, &keep) {
                continue;
            }
            grid.rows[row_index].cells[col_index].clear();
            cleared += 1;
        }
    }
    info!("two-row filter cleared {cleared} cells");
}

fn is_location_of_selected(
    grid: &TimetableGrid,
    row_index: usize,
    col_index: usize,
    selected_codes: &[String],
    keep: &HashSet<(usize, usize)>,
) -> bool {
    if row_index == 0 {
        return false;
    }
    // 上一行同列没有对应单元格，或第一遍没保留它，都不构成保护
    if !keep.contains(&(row_index - 1, col_index)) {
        return false;
    }
    let Some(above) = grid.cell_at(row_index - 1, col_index) else {
        return false;
    };
    let text_above = above.text.trim();
    selected_codes
        .iter()
        .any(|code| text_above.starts_with(code.as_str()))
}

/// 隐藏正式课表开始之前的说明性行：从头数，
/// 遇到第一个 MON 行停下并保留它和之后的所有行
pub fn trim_leading_rows(grid: &mut TimetableGrid) {
    for row in &mut grid.rows {
        let grid_starts_here = row
            .cells
            .get(WEEKDAY_PROBE_COLUMN)
            .map(|cell| cell.text.trim() == "MON")
            .unwrap_or(false);
        if grid_starts_here {
            break;
        }
        row.hidden = true;
    }
}
