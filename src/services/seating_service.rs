use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::SeatingConfig;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::StateStore;

#[derive(Clone)]
pub struct SeatingService {
    store: StateStore,
    config: SeatingConfig,
}

impl SeatingService {
    pub fn new(store: StateStore, config: SeatingConfig) -> Self {
        Self { store, config }
    }

    pub fn default_capacity(&self) -> u32 {
        self.config.default_capacity
    }

    /// 当前桌次布局（超员标记按实际人数实时计算）
    pub async fn layout(&self) -> AppResult<SeatingLayout> {
        let state = self.store.snapshot().await;
        let mut layout = build_layout(&state);
        layout.capacity_options = self.config.capacity_options.clone();
        Ok(layout)
    }

    /// 自动分桌，覆盖之前的全部安排
    pub async fn assign(&self, request: AssignTablesRequest) -> AppResult<SeatingLayout> {
        let capacity = request.capacity.unwrap_or(self.config.default_capacity);
        let mode = request.mode;
        let tables = self
            .store
            .update(|s| {
                let mut rng = rand::thread_rng();
                let tables = assign_tables(&mut s.employees, capacity, mode, &mut rng)?;
                s.tables = tables.clone();
                Ok(tables)
            })
            .await?;
        log::info!(
            "Assigned seating: {} tables of {} ({} mode)",
            tables.len(),
            capacity,
            mode
        );
        self.layout().await
    }

    /// 清空所有桌次
    pub async fn clear(&self) -> AppResult<SeatingLayout> {
        self.store
            .update(|s| {
                clear_tables(s);
                Ok(())
            })
            .await?;
        log::info!("Cleared all table assignments");
        self.layout().await
    }

    /// 手动换桌，不检查容量
    pub async fn move_employee(&self, request: MoveEmployeeRequest) -> AppResult<SeatingLayout> {
        self.store
            .update(|s| move_employee(s, &request.employee_id, &request.table_id))
            .await?;
        self.layout().await
    }
}

/// 分桌算法：按模式排序后每 capacity 人一桌
///
/// 员工列表本身的顺序保持不变，只重写每个人的 `table_id`。
/// 没有员工时返回空桌次列表且不修改任何记录。
pub fn assign_tables<R: Rng + ?Sized>(
    employees: &mut [Employee],
    capacity: u32,
    mode: SeatingMode,
    rng: &mut R,
) -> AppResult<Vec<Table>> {
    if capacity == 0 {
        return Err(AppError::ValidationError(
            "Table capacity must be at least 1".into(),
        ));
    }
    if employees.is_empty() {
        return Ok(Vec::new());
    }

    let mut order: Vec<usize> = (0..employees.len()).collect();
    match mode {
        // sort_by 为稳定排序
        SeatingMode::Department => {
            order.sort_by(|&a, &b| employees[a].department.cmp(&employees[b].department))
        }
        SeatingMode::Random => order.shuffle(rng),
    }

    let per_table = capacity as usize;
    let table_count = employees.len().div_ceil(per_table);
    let tables: Vec<Table> = (1..=table_count)
        .map(|i| Table {
            id: i.to_string(),
            name: format!("Table {i}"),
            capacity,
        })
        .collect();

    for (position, &idx) in order.iter().enumerate() {
        employees[idx].table_id = Some(tables[position / per_table].id.clone());
    }

    Ok(tables)
}

pub fn clear_tables(state: &mut AppState) {
    state.tables.clear();
    for e in &mut state.employees {
        e.table_id = None;
    }
}

pub fn move_employee(state: &mut AppState, employee_id: &str, table_id: &str) -> AppResult<()> {
    if state.find_table(table_id).is_none() {
        return Err(AppError::NotFound(format!("Table {table_id} not found")));
    }
    let employee = state
        .employees
        .iter_mut()
        .find(|e| e.id == employee_id)
        .ok_or_else(|| AppError::NotFound(format!("Employee {employee_id} not found")))?;
    employee.table_id = Some(table_id.to_string());
    Ok(())
}

pub fn build_layout(state: &AppState) -> SeatingLayout {
    let tables = state
        .tables
        .iter()
        .map(|table| {
            let occupants: Vec<Employee> = state
                .employees
                .iter()
                .filter(|e| e.table_id.as_deref() == Some(table.id.as_str()))
                .cloned()
                .collect();
            TableLayout {
                table: table.clone(),
                occupant_count: occupants.len(),
                over_capacity: occupants.len() > table.capacity as usize,
                occupants,
            }
        })
        .collect();

    let unassigned = state
        .employees
        .iter()
        .filter(|e| match e.table_id.as_deref() {
            Some(id) => state.find_table(id).is_none(),
            None => true,
        })
        .cloned()
        .collect();

    SeatingLayout {
        tables,
        unassigned,
        capacity_options: Vec::new(),
    }
}
