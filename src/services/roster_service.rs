use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::StateStore;
use crate::utils::{generate_id, parse_employee_rows};

const DEFAULT_DEPARTMENT: &str = "General";
const DEFAULT_TITLE: &str = "Staff";

#[derive(Clone)]
pub struct RosterService {
    store: StateStore,
}

impl RosterService {
    pub fn new(store: StateStore) -> Self {
        Self { store }
    }

    /// 查询名单（分页 + 模糊搜索）
    pub async fn list_employees(
        &self,
        query: &EmployeeQuery,
    ) -> AppResult<PaginatedResponse<Employee>> {
        let state = self.store.snapshot().await;
        let params = PaginationParams::new(query.page, query.per_page);

        let matched = filter_employees(&state.employees, query.q.as_deref().unwrap_or(""));
        let total = matched.len();
        let items = matched
            .into_iter()
            .skip(params.get_offset())
            .take(params.get_limit())
            .cloned()
            .collect();

        Ok(PaginatedResponse::new(items, &params, total))
    }

    /// 新增员工
    pub async fn add_employee(&self, request: CreateEmployeeRequest) -> AppResult<Employee> {
        let employee = build_employee(request)?;
        let created = employee.clone();
        self.store
            .update(move |s| {
                if s.find_employee(&employee.id).is_some() {
                    return Err(AppError::ValidationError(format!(
                        "Employee id {} already exists",
                        employee.id
                    )));
                }
                s.employees.push(employee);
                Ok(())
            })
            .await?;
        log::info!("Added employee {} ({})", created.name, created.staff_id);
        Ok(created)
    }

    /// 修改员工资料（部分字段）
    pub async fn update_employee(
        &self,
        id: &str,
        request: UpdateEmployeeRequest,
    ) -> AppResult<Employee> {
        self.store
            .update(|s| {
                let employee = s
                    .employees
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or_else(|| AppError::NotFound(format!("Employee {id} not found")))?;
                apply_update(employee, request)?;
                Ok(employee.clone())
            })
            .await
    }

    /// 删除员工；其中奖记录与桌次引用保留
    pub async fn remove_employee(&self, id: &str) -> AppResult<Employee> {
        let removed = self
            .store
            .update(|s| {
                let idx = s
                    .employees
                    .iter()
                    .position(|e| e.id == id)
                    .ok_or_else(|| AppError::NotFound(format!("Employee {id} not found")))?;
                Ok(s.employees.remove(idx))
            })
            .await?;
        log::info!("Removed employee {} ({})", removed.name, removed.id);
        Ok(removed)
    }

    /// 清空全部名单
    pub async fn clear_employees(&self) -> AppResult<usize> {
        let removed = self
            .store
            .update(|s| Ok(std::mem::take(&mut s.employees).len()))
            .await?;
        log::info!("Cleared roster, {removed} employees removed");
        Ok(removed)
    }

    /// 批量追加（导入）
    pub async fn bulk_append(&self, rows: Vec<EmployeeRow>) -> AppResult<Vec<Employee>> {
        let employees: Vec<Employee> = rows.into_iter().filter_map(employee_from_row).collect();
        let appended = employees.clone();
        self.store
            .update(move |s| {
                s.employees.extend(employees);
                Ok(())
            })
            .await?;
        Ok(appended)
    }

    /// 导入 CSV 文本
    pub async fn import_csv(&self, content: &str) -> AppResult<ImportResponse> {
        let rows = parse_employee_rows(content)?;
        let employees = self.bulk_append(rows).await?;
        log::info!("Imported {} employees", employees.len());
        Ok(ImportResponse {
            imported: employees.len(),
            employees,
        })
    }

    /// 名单统计（已入座 / 未分配 / 所需桌数）
    pub async fn stats(&self, capacity: u32) -> AppResult<RosterStats> {
        if capacity == 0 {
            return Err(AppError::ValidationError(
                "Capacity must be at least 1".into(),
            ));
        }
        let state = self.store.snapshot().await;
        let total = state.employees.len();
        let assigned = state
            .employees
            .iter()
            .filter(|e| e.table_id.is_some())
            .count();
        Ok(RosterStats {
            total,
            assigned,
            unassigned: total - assigned,
            capacity,
            required_tables: total.div_ceil(capacity as usize),
        })
    }
}

/// 姓名/部门/工号 不区分大小写的子串匹配；空关键字返回全部
pub fn filter_employees<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let term = term.trim().to_lowercase();
    employees
        .iter()
        .filter(|e| {
            term.is_empty()
                || e.name.to_lowercase().contains(&term)
                || e.department.to_lowercase().contains(&term)
                || e.staff_id.to_lowercase().contains(&term)
        })
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require(value: &str, field: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::ValidationError(format!("{field} is required")));
    }
    Ok(value.to_string())
}

pub fn build_employee(request: CreateEmployeeRequest) -> AppResult<Employee> {
    let name = require(&request.name, "name")?;
    let staff_id = require(&request.staff_id, "staffId")?;
    Ok(Employee {
        id: non_blank(request.id).unwrap_or_else(generate_id),
        staff_id,
        name,
        department: non_blank(request.department)
            .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string()),
        title: non_blank(request.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        gender: non_blank(request.gender),
        table_id: None,
        is_winner: false,
        prize_won: None,
    })
}

/// 应用部分更新；校验失败时不修改原记录
pub fn apply_update(employee: &mut Employee, request: UpdateEmployeeRequest) -> AppResult<()> {
    let name = match request.name {
        Some(n) => require(&n, "name")?,
        None => employee.name.clone(),
    };
    let staff_id = match request.staff_id {
        Some(s) => require(&s, "staffId")?,
        None => employee.staff_id.clone(),
    };

    employee.name = name;
    employee.staff_id = staff_id;
    if let Some(department) = non_blank(request.department) {
        employee.department = department;
    }
    if let Some(title) = non_blank(request.title) {
        employee.title = title;
    }
    if let Some(gender) = request.gender {
        employee.gender = non_blank(Some(gender));
    }
    Ok(())
}

/// 导入行转员工；缺少姓名的行丢弃
pub fn employee_from_row(row: EmployeeRow) -> Option<Employee> {
    let name = non_blank(row.name)?;
    Some(Employee {
        id: generate_id(),
        staff_id: non_blank(row.staff_id).unwrap_or_else(generate_id),
        name,
        department: non_blank(row.department).unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string()),
        title: non_blank(row.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        gender: non_blank(row.gender),
        table_id: None,
        is_winner: false,
        prize_won: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{MemoryStore, StateRepository};
    use std::sync::Arc;

    fn service() -> RosterService {
        let repo = StateRepository::new(Arc::new(MemoryStore::new()), "roster_test");
        RosterService::new(StateStore::with_state(repo, AppState::default()))
    }

    fn request(staff_id: &str, name: &str, department: Option<&str>) -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            staff_id: staff_id.into(),
            name: name.into(),
            department: department.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_employee_defaults() {
        let e = build_employee(request("A1", " Amy ", None)).unwrap();
        assert_eq!(e.name, "Amy");
        assert_eq!(e.department, "General");
        assert_eq!(e.title, "Staff");
        assert!(!e.is_winner);
        assert!(!e.id.is_empty());
    }

    #[test]
    fn test_build_employee_requires_name_and_staff_id() {
        assert!(matches!(
            build_employee(request("A1", "  ", None)),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            build_employee(request("", "Amy", None)),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_apply_update_rejects_blank_name_without_mutation() {
        let mut e = build_employee(request("A1", "Amy", Some("HR"))).unwrap();
        let original = e.clone();
        let result = apply_update(
            &mut e,
            UpdateEmployeeRequest {
                name: Some("".into()),
                department: Some("Sales".into()),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(e, original);
    }

    #[test]
    fn test_filter_employees_case_insensitive() {
        let list = vec![
            build_employee(request("ENG-1", "Amy", Some("Engineering"))).unwrap(),
            build_employee(request("HR-2", "Bob", Some("Human Resources"))).unwrap(),
        ];
        assert_eq!(filter_employees(&list, "eng").len(), 1);
        assert_eq!(filter_employees(&list, "BOB")[0].staff_id, "HR-2");
        assert_eq!(filter_employees(&list, "hr-").len(), 1);
        assert_eq!(filter_employees(&list, "").len(), 2);
    }

    #[test]
    fn test_employee_from_row_defaults_and_drop() {
        let e = employee_from_row(EmployeeRow {
            name: Some("Cara".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(e.department, "General");
        assert_eq!(e.title, "Staff");
        assert!(!e.staff_id.is_empty());

        assert!(employee_from_row(EmployeeRow {
            staff_id: Some("X".into()),
            ..Default::default()
        })
        .is_none());
    }

    #[tokio::test]
    async fn test_add_update_remove_flow() {
        let svc = service();
        let amy = svc.add_employee(request("A1", "Amy", None)).await.unwrap();
        // 工号允许重复
        svc.add_employee(request("A1", "Another Amy", None))
            .await
            .unwrap();

        let updated = svc
            .update_employee(
                &amy.id,
                UpdateEmployeeRequest {
                    title: Some("Manager".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Manager");

        svc.remove_employee(&amy.id).await.unwrap();
        assert!(matches!(
            svc.remove_employee(&amy.id).await,
            Err(AppError::NotFound(_))
        ));

        let page = svc.list_employees(&EmployeeQuery::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(svc.clear_employees().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_add_with_existing_id_is_rejected() {
        let svc = service();
        let mut req = request("A1", "Amy", None);
        req.id = Some("fixed".into());
        svc.add_employee(req.clone()).await.unwrap();
        assert!(svc.add_employee(req).await.is_err());
    }

    #[tokio::test]
    async fn test_import_and_stats() {
        let svc = service();
        let result = svc
            .import_csv("staff id,name,department\n1,Amy,HR\n2,Bob,\n3,,Ops\n")
            .await
            .unwrap();
        assert_eq!(result.imported, 2);
        assert_eq!(result.employees[1].department, "General");

        let stats = svc.stats(1).await.unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.unassigned, 2);
        assert_eq!(stats.required_tables, 2);
        assert!(svc.stats(0).await.is_err());
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let svc = service();
        for i in 0..5 {
            svc.add_employee(request(&format!("S{i}"), &format!("Person {i}"), None))
                .await
                .unwrap();
        }
        let page = svc
            .list_employees(&EmployeeQuery {
                q: Some("person".into()),
                page: Some(2),
                per_page: Some(2),
            })
            .await
            .unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].name, "Person 2");
    }
}
