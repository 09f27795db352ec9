/// 被清空的单元格统一刷成白色背景
pub const CLEARED_BACKGROUND: &str = "white";

/// 课表中的一个单元格：文本、class 属性（用于定位表头）和背景色
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub class: Option<String>,
    pub background: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            class: None,
            background: None,
        }
    }

    pub fn with_class(text: impl Into<String>, class: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            class: Some(class.into()),
            background: None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// 清空内容并重置背景，表格几何结构保持不变
    pub fn clear(&mut self) {
        self.text.clear();
        self.background = Some(CLEARED_BACKGROUND.to_string());
    }

    pub fn has_class(&self, class: &str) -> bool {
        match &self.class {
            Some(value) => value.split_whitespace().any(|token| token == class),
            None => false,
        }
    }
}

/// 课表的一行，hidden 只影响输出，不影响过滤时的行间邻接关系
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub hidden: bool,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row {
            cells,
            hidden: false,
        }
    }
}

/// 课表的网格视图：按文档顺序的行，每行若干单元格。
/// 不建模 rowspan/colspan，两行布局只依赖「上一行同列」的位置关系
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimetableGrid {
    pub rows: Vec<Row>,
}

impl TimetableGrid {
    pub fn new(rows: Vec<Row>) -> Self {
        TimetableGrid { rows }
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.cells.get(col)
    }

    /// 按文档顺序数第 index 个单元格，跨行连续编号
    pub fn nth_cell(&self, index: usize) -> Option<&Cell> {
        self.rows.iter().flat_map(|row| row.cells.iter()).nth(index)
    }
}
