use std::collections::HashSet;
use std::env;
use std::path::Path;

use log::warn;
use timetable_filter::core::exporter::write_html_file;
use timetable_filter::core::timetable::Timetable;
use timetable_filter::core::url_state;
use timetable_filter::error::timetable::TimetableError;
use timetable_filter::utils::input::{input, input_codes};

const OUTPUT_FILE: &str = "filtered-timetable.html";

#[tokio::main]
async fn main() -> Result<(), TimetableError> {
    env_logger::init();

    let identifier = match env::args().nth(1) {
        Some(arg) => arg,
        None => input("请输入课表页面链接或本地 HTML 文件路径："),
    };

    let timetable = Timetable::new();
    let mut loaded = timetable.load_timetable(&identifier).await?;
    let config = loaded.config();

    println!("{}", loaded.title);
    if loaded.courses.is_empty() {
        println!("页面里没有找到课程，过滤时只保留星期和时间刻度");
    } else {
        println!("课程信息：{}", serde_json::to_string_pretty(&loaded.courses)?);
    }

    // 地址里带了 filter=true 和课程列表就直接过滤，否则让用户选
    let mut state = loaded.state.clone();
    if !state.filter_applied || state.selected_codes.is_empty() {
        state.selected_codes = input_codes("请输入要保留的课程代码（逗号分隔，留空只保留课表框架）：");
        state.filter_applied = true;
    }

    // 选中的代码同样过一遍修正，页面里没有的代码提醒一下但照样参与匹配
    let fixed_codes: Vec<String> = state
        .selected_codes
        .iter()
        .map(|code| config.fix_course_code(code))
        .collect();
    state.selected_codes = fixed_codes;

    let known: HashSet<&str> = loaded.courses.iter().map(|course| course.code.as_str()).collect();
    for code in &state.selected_codes {
        if !known.contains(code.as_str()) {
            warn!("selected code {code} is not in the extracted course list");
        }
    }

    loaded.apply_filter(&state.selected_codes);

    write_html_file(&loaded.grid, &loaded.title, Path::new(OUTPUT_FILE)).await?;
    println!("过滤后的课表已写入 {}", OUTPUT_FILE);

    // 来源是网页时打印可分享的链接；重置就是用 filter=false 重新打开
    if identifier.starts_with("http://") || identifier.starts_with("https://") {
        if let Some(share_url) = url_state::encode(&identifier, &state) {
            println!("分享链接 / Share URL：{}", share_url);
        }
    }

    Ok(())
}
