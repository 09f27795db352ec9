use scraper::{Html, Selector};

use crate::model::grid::{Cell, Row, TimetableGrid};

/// 把渲染好的课表页面解析成网格：每个 tr 一行，每个 td 一格。
/// 不处理 rowspan/colspan，页面结构是固定的
pub fn parse_timetable(html: &str) -> TimetableGrid {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut rows = Vec::new();
    for tr in document.select(&row_selector) {
        let mut cells = Vec::new();
        for td in tr.select(&cell_selector) {
            let text = td
                .text()
                .collect::<Vec<_>>()
                .join("")
                .trim()
                .to_string();
            let class = td.value().attr("class").map(|value| value.to_string());
            cells.push(Cell {
                text,
                class,
                background: None,
            });
        }
        rows.push(Row::new(cells));
    }

    TimetableGrid::new(rows)
}
