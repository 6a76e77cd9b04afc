use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 员工（名单中的一条记录）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// 内部唯一ID
    pub id: String,
    /// 工号（不保证唯一）
    #[schema(example = "A001")]
    pub staff_id: String,
    #[schema(example = "Alice Chen")]
    pub name: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = "Staff")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// 所在桌次ID，None 表示未分配
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(default)]
    pub is_winner: bool,
    /// 最近一次中奖的奖项名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize_won: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    /// 调用方可指定ID，缺省时自动生成
    pub id: Option<String>,
    #[schema(example = "A001")]
    pub staff_id: String,
    #[schema(example = "Alice Chen")]
    pub name: String,
    pub department: Option<String>,
    pub title: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub staff_id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub title: Option<String>,
    pub gender: Option<String>,
}

/// 导入文件中解析出的一行（字段均可能缺失）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeRow {
    pub staff_id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub title: Option<String>,
    pub gender: Option<String>,
}

/// 名单查询参数
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct EmployeeQuery {
    /// 按姓名/部门/工号模糊搜索（不区分大小写）
    pub q: Option<String>,
    /// 页码 (默认 1)
    pub page: Option<u32>,
    /// 每页数量 (默认 20)
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RosterStatsQuery {
    /// 每桌人数，缺省使用配置值
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    pub total: usize,
    pub assigned: usize,
    pub unassigned: usize,
    pub capacity: u32,
    pub required_tables: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImportResponse {
    pub imported: usize,
    pub employees: Vec<Employee>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClearResponse {
    pub removed: usize,
}
