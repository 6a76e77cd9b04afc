//! 员工名单导入：首行为表头，其余每行一条记录

use crate::error::{AppError, AppResult};
use crate::models::EmployeeRow;

// 表头匹配关键字（中文或英文，小写后做子串匹配）
const STAFF_ID_TOKENS: &[&str] = &["工號", "工号", "staff", "id"];
const NAME_TOKENS: &[&str] = &["姓名", "name"];
const DEPARTMENT_TOKENS: &[&str] = &["部門", "部门", "dept", "department"];
const TITLE_TOKENS: &[&str] = &["職稱", "职称", "title"];
const GENDER_TOKENS: &[&str] = &["性別", "性别", "gender"];

struct ColumnMap {
    staff_id: usize,
    name: usize,
    department: usize,
    title: usize,
    gender: usize,
}

impl ColumnMap {
    fn from_headers(headers: &[String]) -> Self {
        let find = |tokens: &[&str], fallback: usize| {
            headers
                .iter()
                .position(|h| tokens.iter().any(|t| h.contains(t)))
                .unwrap_or(fallback)
        };
        Self {
            staff_id: find(STAFF_ID_TOKENS, 0),
            name: find(NAME_TOKENS, 1),
            department: find(DEPARTMENT_TOKENS, 2),
            title: find(TITLE_TOKENS, 3),
            gender: find(GENDER_TOKENS, 4),
        }
    }
}

/// 按逗号切分一行；双引号内的逗号保留，`""` 还原为 `"`
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            // 只有字段开头的引号才开启引用
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut field).trim().to_string()),
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

/// 解析导入文本；缺少姓名的行会被丢弃
pub fn parse_employee_rows(content: &str) -> AppResult<Vec<EmployeeRow>> {
    let lines: Vec<&str> = content
        .trim_start_matches('\u{feff}')
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some((header_line, data_lines)) = lines.split_first() else {
        return Err(AppError::ParseError("Import file is empty".to_string()));
    };
    if data_lines.is_empty() {
        return Err(AppError::ParseError(
            "Import file needs a header row and at least one data row".to_string(),
        ));
    }

    let headers: Vec<String> = split_fields(header_line)
        .into_iter()
        .map(|h| h.to_lowercase())
        .collect();
    let columns = ColumnMap::from_headers(&headers);

    let rows = data_lines
        .iter()
        .map(|line| {
            let values = split_fields(line);
            let value = |idx: usize| values.get(idx).filter(|v| !v.is_empty()).cloned();
            EmployeeRow {
                staff_id: value(columns.staff_id),
                name: value(columns.name),
                department: value(columns.department),
                title: value(columns.title),
                gender: value(columns.gender),
            }
        })
        .filter(|row| row.name.is_some())
        .collect();

    Ok(rows)
}
