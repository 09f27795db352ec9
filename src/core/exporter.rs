use std::path::Path;

use log::info;

use crate::core::page_type::PageConfig;
use crate::error::timetable::TimetableError;
use crate::model::grid::TimetableGrid;

/// 页面标题：过滤器名称 + 布局后缀 + 页面上的「最后更新」标签。
/// 要在过滤之前取，过滤可能把那个单元格清掉
pub fn page_title(grid: &TimetableGrid, config: &PageConfig) -> String {
    let last_updated = grid
        .nth_cell(config.last_updated_index)
        .map(|cell| cell.text.trim())
        .unwrap_or("");

    if last_updated.is_empty() {
        format!("课程过滤器 / Course Filter{}", config.title_suffix)
    } else {
        format!(
            "课程过滤器 / Course Filter{} {}",
            config.title_suffix, last_updated
        )
    }
}

/// 把（过滤后的）课表渲染成独立的 HTML 页面。
/// 隐藏行不输出，清空的单元格带上背景色
pub fn render_html(grid: &TimetableGrid, title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(title)));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h3>{}</h3>\n", escape(title)));
    html.push_str("<table border=\"1\" cellspacing=\"0\">\n");
    for row in &grid.rows {
        if row.hidden {
            continue;
        }
        html.push_str("<tr>");
        for cell in &row.cells {
            match &cell.background {
                Some(background) => html.push_str(&format!(
                    "<td style=\"background:{}\">{}</td>",
                    background,
                    escape(&cell.text)
                )),
                None => html.push_str(&format!("<td>{}</td>", escape(&cell.text))),
            }
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n</body>\n</html>\n");
    html
}

pub async fn write_html_file(
    grid: &TimetableGrid,
    title: &str,
    path: &Path,
) -> Result<(), TimetableError> {
    let html = render_html(grid, title);
    tokio::fs::write(path, html).await?;
    info!("filtered timetable written to {}", path.display());
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
