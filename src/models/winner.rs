use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Employee;

/// 中奖记录（只追加，不修改）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WinnerRecord {
    pub id: String,
    pub employee_id: String,
    pub prize_id: String,
    /// 抽奖时间 (epoch 毫秒)
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawRequest {
    pub prize_id: Option<String>,
    /// 一次抽出人数 (默认 1)
    pub batch_size: Option<u32>,
    /// 是否允许已中奖者再次中奖 (默认 false)
    pub allow_repeat: Option<bool>,
}

/// 校验后的抽奖参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawPlan {
    pub prize_id: String,
    pub batch_size: u32,
    pub allow_repeat: bool,
}

/// 一次抽奖的结果
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawOutcome {
    pub prize_id: String,
    pub prize_name: String,
    pub winners: Vec<Employee>,
    pub records: Vec<WinnerRecord>,
    pub remaining: u32,
}

/// 抽奖舞台当前展示内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawDisplay {
    pub rolling: bool,
    pub prize_id: Option<String>,
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for DrawDisplay {
    fn default() -> Self {
        Self {
            rolling: false,
            prize_id: None,
            names: vec!["Ready".to_string()],
            error: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WinnerQuery {
    /// 仅返回该奖项的中奖记录
    pub prize_id: Option<String>,
}

/// 中奖名单展示行，引用缺失时显示 Unknown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WinnerView {
    pub record_id: String,
    pub prize_id: String,
    pub prize_name: String,
    pub employee_id: String,
    pub staff_id: String,
    pub name: String,
    pub department: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub cleared_records: usize,
}
