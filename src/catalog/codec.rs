//! 目录文件行格式
//!
//! ```text
//! <标题行，忽略>
//! <index:int>,<name>,<category>
//! ```
//!
//! 没有引号和转义机制：字段中若含逗号，该行在下次加载时会被当作畸形行跳过。

use crate::entity::Entry;
use crate::error::RowRejection;

pub const FIELD_SEPARATOR: char = ',';
pub const LINE_TERMINATOR: char = '\n';
const FIELD_COUNT: usize = 3;

/// 解析单行数据
pub fn parse_row(line: &str) -> Result<Entry, RowRejection> {
    let columns: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if columns.len() != FIELD_COUNT {
        return Err(RowRejection::FieldCount(columns.len()));
    }

    let index = columns[0]
        .parse::<i64>()
        .map_err(|_| RowRejection::InvalidIndex(columns[0].to_string()))?;

    Ok(Entry::new(index, columns[1], columns[2]))
}

/// 解析整个文件内容
///
/// 第一行无条件视为标题行丢弃；畸形行跳过并记录 debug 日志。
pub fn parse_document(text: &str) -> Vec<Entry> {
    text.split(LINE_TERMINATOR)
        .enumerate()
        .skip(1)
        .filter_map(|(line_no, line)| match parse_row(line) {
            Ok(entry) => Some(entry),
            Err(reason) => {
                log::debug!("跳过第 {} 行: {}", line_no + 1, reason);
                None
            }
        })
        .collect()
}

/// 生成追加用的一行（含换行符），字段原样拼接
pub fn format_row(index: &str, name: &str, category: &str) -> String {
    format!("{index}{FIELD_SEPARATOR}{name}{FIELD_SEPARATOR}{category}{LINE_TERMINATOR}")
}
