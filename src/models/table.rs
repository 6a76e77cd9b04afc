use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Employee;

/// 桌次，每次自动分配时整体重建
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Table 1")]
    pub name: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeatingMode {
    /// 按部门名称升序（稳定排序）
    Department,
    /// 均匀随机排列
    Random,
}

impl std::fmt::Display for SeatingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatingMode::Department => write!(f, "department"),
            SeatingMode::Random => write!(f, "random"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignTablesRequest {
    /// 每桌人数，缺省使用配置值
    pub capacity: Option<u32>,
    pub mode: SeatingMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveEmployeeRequest {
    pub employee_id: String,
    pub table_id: String,
}

/// 单桌的当前就座情况（每次根据实际成员重新计算）
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableLayout {
    pub table: Table,
    pub occupants: Vec<Employee>,
    pub occupant_count: usize,
    pub over_capacity: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeatingLayout {
    pub tables: Vec<TableLayout>,
    /// 未分配或桌次已不存在的员工
    pub unassigned: Vec<Employee>,
    pub capacity_options: Vec<u32>,
}
