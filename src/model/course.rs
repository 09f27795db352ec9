use serde::{Deserialize, Serialize};

/// 课表中的一门课程，code 是唯一标识
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Course {
    pub code: String,
    pub title: String,
}
