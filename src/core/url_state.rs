use url::Url;

use crate::model::filter_state::FilterState;

const COURSES_PARAM: &str = "courses";
const FILTER_PARAM: &str = "filter";

/// 从页面地址的查询参数解析过滤状态。
/// 地址不是合法 URL、参数缺失或格式不对，都当作「没有选择、未过滤」
pub fn decode(page_url: &str) -> FilterState {
    let Ok(url) = Url::parse(page_url) else {
        return FilterState::default();
    };

    let mut state = FilterState::default();
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            COURSES_PARAM => {
                state.selected_codes = value
                    .split(',')
                    .filter(|code| !code.is_empty())
                    .map(|code| code.to_string())
                    .collect();
            }
            FILTER_PARAM => state.filter_applied = value == "true",
            _ => {}
        }
    }
    state
}

/// 把当前选择写回页面地址，生成可分享的链接。
/// 没选任何课程时去掉 courses 参数，filter 参数总是写上
pub fn encode(page_url: &str, state: &FilterState) -> Option<String> {
    let mut url = Url::parse(page_url).ok()?;

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != COURSES_PARAM && key != FILTER_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        if !state.selected_codes.is_empty() {
            pairs.append_pair(COURSES_PARAM, &state.selected_codes.join(","));
        }
        pairs.append_pair(FILTER_PARAM, if state.filter_applied { "true" } else { "false" });
    }

    Some(url.to_string())
}
