use uuid::Uuid;

/// 生成记录ID（员工、奖项、中奖记录共用）
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
