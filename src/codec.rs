//! 线上记录编解码
//!
//! 记录形如 `"<类型标签>|<JSON负载>"`，只在第一个分隔符处拆分，
//! 因此负载内容可以合法地包含分隔符，标签则不允许。

use crate::errors::{QueueError, Result};

/// 类型标签与负载之间的分隔符
pub const DELIMITER: char = '|';

/// 拼装线上记录
pub fn encode(tag: &str, payload: &str) -> String {
    format!("{tag}{DELIMITER}{payload}")
}

/// 拆分线上记录为 (类型标签, JSON负载)
///
/// 记录中不存在分隔符时返回 `QueueError::Format`，错误携带完整原始记录。
pub fn decode(record: &str) -> Result<(&str, &str)> {
    record
        .split_once(DELIMITER)
        .ok_or_else(|| QueueError::Format(record.to_string()))
}
