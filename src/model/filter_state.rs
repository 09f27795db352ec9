use serde::{Deserialize, Serialize};

/// 过滤状态：启动时从 URL 查询参数构造，
/// 显式传给过滤引擎和分享链接编码器，不放在任何全局变量里
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub selected_codes: Vec<String>,
    pub filter_applied: bool,
}
