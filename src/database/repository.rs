use std::sync::Arc;

use super::KeyValueStore;
use crate::error::AppResult;
use crate::models::{AppState, Prize};

/// 读取持久化状态的三种结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(AppState),
    /// 从未保存过
    Missing,
    /// 存在但无法解析（或无法读取），按空状态处理
    Corrupt,
}

/// AppState 的持久化适配器：固定键下整文档读写
#[derive(Clone)]
pub struct StateRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl StateRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn load(&self) -> LoadOutcome {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadOutcome::Missing,
            Err(e) => {
                log::warn!("Failed to read stored state {}: {e}", self.key);
                return LoadOutcome::Corrupt;
            }
        };
        match serde_json::from_str::<AppState>(&raw) {
            Ok(state) => LoadOutcome::Loaded(state),
            Err(e) => {
                log::warn!("Stored state {} is malformed, starting empty: {e}", self.key);
                LoadOutcome::Corrupt
            }
        }
    }

    /// 启动时加载；仅在完全没有存档时写入默认奖项
    pub fn load_or_seed(&self) -> AppState {
        match self.load() {
            LoadOutcome::Loaded(state) => {
                log::info!(
                    "Loaded state: {} employees, {} tables, {} prizes, {} winner records",
                    state.employees.len(),
                    state.tables.len(),
                    state.prizes.len(),
                    state.winners.len()
                );
                state
            }
            LoadOutcome::Missing => {
                log::info!("No stored state found, seeding default prizes");
                AppState {
                    prizes: default_prizes(),
                    ..Default::default()
                }
            }
            LoadOutcome::Corrupt => AppState::default(),
        }
    }

    pub fn save(&self, state: &AppState) -> AppResult<()> {
        let doc = serde_json::to_string(state)?;
        self.store.set(&self.key, &doc)
    }
}

pub fn default_prizes() -> Vec<Prize> {
    [
        ("p1", "Grand Prize: iPhone 15 Pro", 1),
        ("p2", "Second Prize: iPad Air", 3),
        ("p3", "Third Prize: 5000 Gift Voucher", 10),
    ]
    .into_iter()
    .map(|(id, name, count)| Prize {
        id: id.to_string(),
        name: name.to_string(),
        count,
        image: None,
    })
    .collect()
}
