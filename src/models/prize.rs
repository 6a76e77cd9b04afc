use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    pub id: String,
    #[schema(example = "Grand Prize: iPhone 15 Pro")]
    pub name: String,
    /// 名额上限
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrizeRequest {
    pub name: String,
    /// 缺省为 1
    pub count: Option<u32>,
    pub image: Option<String>,
}

/// 奖项及其抽取进度
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrizeStatus {
    pub prize: Prize,
    pub drawn: usize,
    pub remaining: u32,
    /// remaining 为 0 时禁止继续抽取
    pub draw_enabled: bool,
}
