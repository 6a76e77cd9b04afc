use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Employee, Prize, Table, WinnerRecord};

/// 持久化单元：整个应用状态作为一个文档保存
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AppState {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub prizes: Vec<Prize>,
    #[serde(default)]
    pub winners: Vec<WinnerRecord>,
}

impl AppState {
    pub fn find_employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn find_prize(&self, id: &str) -> Option<&Prize> {
        self.prizes.iter().find(|p| p.id == id)
    }

    pub fn find_table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// 该奖项已记录的中奖人数
    pub fn drawn_count(&self, prize_id: &str) -> usize {
        self.winners.iter().filter(|w| w.prize_id == prize_id).count()
    }
}
