use log::debug;

/// 已知的课表页面布局
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageType {
    Sem1,
    Sem1Ecic,
    Sem2Sh,
    Sem2Hk,
    Sem2HkEcic,
}

/// 按优先级排列的识别标记。
/// 更具体的标记必须排在它的前缀之前：sem2hkecic 在 sem2hk 之前，
/// sem1ecic 在 sem1 之前，否则会被前缀误判
const PAGE_MARKERS: &[(&str, PageType)] = &[
    ("sem2hkecic", PageType::Sem2HkEcic),
    ("sem2hk", PageType::Sem2Hk),
    ("sem2sh", PageType::Sem2Sh),
    ("sem1ecic", PageType::Sem1Ecic),
    ("sem1", PageType::Sem1),
];

impl PageType {
    /// 从页面地址识别布局，识别不出来就按 Sem1 处理，从不失败
    pub fn detect(identifier: &str) -> PageType {
        let lower = identifier.to_lowercase();
        for (marker, page_type) in PAGE_MARKERS {
            if lower.contains(marker) {
                debug!("page identifier matched marker {marker}");
                return *page_type;
            }
        }
        PageType::Sem1
    }

    pub fn config(self) -> &'static PageConfig {
        match self {
            PageType::Sem1 => &SEM1,
            PageType::Sem1Ecic => &SEM1_ECIC,
            PageType::Sem2Sh => &SEM2_SH,
            PageType::Sem2Hk => &SEM2_HK,
            PageType::Sem2HkEcic => &SEM2_HK_ECIC,
        }
    }
}

/// 每种页面布局的固定参数，页面解析期间不可变
pub struct PageConfig {
    pub page_type: PageType,
    /// 课程代码表头单元格的 class
    pub header_class: &'static str,
    pub header_text: &'static str,
    /// 「最后更新」标签在全部单元格中的位置，只用于展示
    pub last_updated_index: usize,
    pub title_suffix: &'static str,
    /// ECIC 两行布局：课程格下面一行是地点格，要成对保留
    pub preserve_location_cells: bool,
}

impl PageConfig {
    /// 修正页面上已知不一致的课程代码。
    /// sem2sh 页面把 COMP7611 写成了带班别的 COMP7611A
    pub fn fix_course_code(&self, code: &str) -> String {
        match self.page_type {
            PageType::Sem2Sh if code == "COMP7611A" => "COMP7611".to_string(),
            _ => code.to_string(),
        }
    }
}

static SEM1: PageConfig = PageConfig {
    page_type: PageType::Sem1,
    header_class: "xl8925285",
    header_text: "Code",
    last_updated_index: 2,
    title_suffix: "",
    preserve_location_cells: false,
};

static SEM1_ECIC: PageConfig = PageConfig {
    page_type: PageType::Sem1Ecic,
    header_class: "xl9526745",
    header_text: "Code",
    last_updated_index: 2,
    title_suffix: " (Sem1, ECIC)",
    preserve_location_cells: true,
};

static SEM2_SH: PageConfig = PageConfig {
    page_type: PageType::Sem2Sh,
    header_class: "xl6415137",
    header_text: "Course Code",
    last_updated_index: 3,
    title_suffix: " (Sem2, SH)",
    preserve_location_cells: false,
};

static SEM2_HK: PageConfig = PageConfig {
    page_type: PageType::Sem2Hk,
    header_class: "xl6430258",
    header_text: "Course Code",
    last_updated_index: 3,
    title_suffix: " (Sem2, HK)",
    preserve_location_cells: false,
};

static SEM2_HK_ECIC: PageConfig = PageConfig {
    page_type: PageType::Sem2HkEcic,
    header_class: "xl9126745",
    header_text: "Course Code",
    last_updated_index: 3,
    title_suffix: " (Sem2, HK ECIC)",
    preserve_location_cells: true,
};
