use std::path::Path;

use log::info;
use reqwest::{
    header::{HeaderMap, USER_AGENT},
    Client,
};

use crate::core::page_type::{PageConfig, PageType};
use crate::core::{exporter, extractor, filter, html_parser, url_state};
use crate::error::timetable::TimetableError;
use crate::model::course::Course;
use crate::model::filter_state::FilterState;
use crate::model::grid::TimetableGrid;

pub struct Timetable {
    client: Client,
}

impl Timetable {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36".parse().unwrap());

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        Timetable { client }
    }

    /// 支持 http(s) 链接和本地 HTML 文件两种来源
    pub async fn load_page(&self, identifier: &str) -> Result<String, TimetableError> {
        if identifier.starts_with("http://") || identifier.starts_with("https://") {
            let response = self.client.get(identifier).send().await?;
            let text = response.text().await?;
            Ok(text)
        } else {
            let text = tokio::fs::read_to_string(Path::new(identifier)).await?;
            Ok(text)
        }
    }

    /// 加载并解析一张课表：识别布局、建网格、提取课程、
    /// 读出地址里带的过滤状态，并隐藏课表开始前的说明行
    pub async fn load_timetable(&self, identifier: &str) -> Result<LoadedTimetable, TimetableError> {
        let page_type = PageType::detect(identifier);
        info!("detected page type {:?}", page_type);

        let html = self.load_page(identifier).await?;
        let mut grid = html_parser::parse_timetable(&html);
        let courses = extractor::extract_courses(&grid, page_type.config());
        let state = url_state::decode(identifier);
        // 标题要在过滤前取，「最后更新」那格之后可能被清掉
        let title = exporter::page_title(&grid, page_type.config());

        filter::trim_leading_rows(&mut grid);

        Ok(LoadedTimetable {
            page_type,
            grid,
            courses,
            state,
            title,
        })
    }
}

/// 一张加载好的课表，网格可以就地过滤。
/// 过滤不可逆，要恢复只能重新 load_timetable
pub struct LoadedTimetable {
    pub page_type: PageType,
    pub grid: TimetableGrid,
    pub courses: Vec<Course>,
    pub state: FilterState,
    pub title: String,
}

impl LoadedTimetable {
    pub fn config(&self) -> &'static PageConfig {
        self.page_type.config()
    }

    pub fn apply_filter(&mut self, selected_codes: &[String]) {
        let config = self.config();
        filter::apply_filter(&mut self.grid, selected_codes, config);
    }
}
