use std::sync::Arc;
use tokio::sync::Mutex;

use crate::database::StateRepository;
use crate::error::AppResult;
use crate::models::AppState;

/// 应用状态容器：持有当前不可变快照，所有修改在副本上进行，成功后整体替换并保存
#[derive(Clone)]
pub struct StateStore {
    current: Arc<Mutex<Arc<AppState>>>,
    repository: StateRepository,
}

impl StateStore {
    /// 加载已保存状态（必要时写入默认奖项）
    pub fn open(repository: StateRepository) -> Self {
        let state = repository.load_or_seed();
        if let Err(e) = repository.save(&state) {
            log::error!("Failed to persist initial state: {e}");
        }
        Self::with_state(repository, state)
    }

    pub fn with_state(repository: StateRepository, state: AppState) -> Self {
        Self {
            current: Arc::new(Mutex::new(Arc::new(state))),
            repository,
        }
    }

    pub async fn snapshot(&self) -> Arc<AppState> {
        self.current.lock().await.clone()
    }

    /// 在草稿上执行修改；闭包返回错误时状态保持不变
    pub async fn update<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut AppState) -> AppResult<T>,
    {
        let mut guard = self.current.lock().await;
        let mut draft = AppState::clone(&guard);
        let result = f(&mut draft)?;
        let next = Arc::new(draft);

        // 文件写入放到阻塞线程池；持锁等待保证写入顺序与提交顺序一致
        // 存储失败不回滚内存状态
        let repository = self.repository.clone();
        let doc = next.clone();
        match tokio::task::spawn_blocking(move || repository.save(&doc)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::error!("Failed to persist state: {e}"),
            Err(e) => log::error!("Persist task failed: {e}"),
        }
        *guard = next;
        Ok(result)
    }
}
