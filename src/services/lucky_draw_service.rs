use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::DrawConfig;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::StateStore;
use crate::utils::{generate_id, render_winners_csv};

const UNKNOWN: &str = "Unknown";

/// 进行中的抽奖：滚动展示任务 + 定时开奖任务
struct SpinSession {
    plan: DrawPlan,
    token: CancellationToken,
    spin: JoinHandle<()>,
    resolver: Option<JoinHandle<()>>,
}

#[derive(Clone)]
pub struct LuckyDrawService {
    store: StateStore,
    config: DrawConfig,
    session: Arc<Mutex<Option<SpinSession>>>,
    display: Arc<watch::Sender<DrawDisplay>>,
}

impl LuckyDrawService {
    pub fn new(store: StateStore, config: DrawConfig) -> Self {
        let (display, _) = watch::channel(DrawDisplay::default());
        Self {
            store,
            config,
            session: Arc::new(Mutex::new(None)),
            display: Arc::new(display),
        }
    }

    /// 奖项列表及剩余名额
    pub async fn list_prizes(&self) -> AppResult<Vec<PrizeStatus>> {
        let state = self.store.snapshot().await;
        Ok(state
            .prizes
            .iter()
            .map(|p| {
                let remaining = remaining_slots(&state, p);
                PrizeStatus {
                    prize: p.clone(),
                    drawn: state.drawn_count(&p.id),
                    remaining,
                    draw_enabled: remaining > 0,
                }
            })
            .collect())
    }

    /// 新增奖项
    pub async fn add_prize(&self, request: CreatePrizeRequest) -> AppResult<Prize> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::ValidationError("Prize name is required".into()));
        }
        let count = request.count.unwrap_or(1);
        if count == 0 {
            return Err(AppError::ValidationError(
                "Prize count must be at least 1".into(),
            ));
        }
        let prize = Prize {
            id: generate_id(),
            name,
            count,
            image: request
                .image
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty()),
        };
        let created = prize.clone();
        self.store
            .update(move |s| {
                s.prizes.push(prize);
                Ok(())
            })
            .await?;
        log::info!("Added prize {} x{}", created.name, created.count);
        Ok(created)
    }

    /// 立即抽奖（无滚动阶段）
    pub async fn draw(&self, request: DrawRequest) -> AppResult<DrawOutcome> {
        let plan = self.plan(request)?;
        if self.session.lock().await.is_some() {
            return Err(AppError::Conflict("A draw is already in progress".into()));
        }
        let outcome = self.commit_draw(&plan).await?;
        self.display.send_replace(final_display(&outcome));
        Ok(outcome)
    }

    /// 开始滚动展示，到时后自动开奖
    pub async fn start_draw(&self, request: DrawRequest) -> AppResult<DrawDisplay> {
        let plan = self.plan(request)?;
        let mut slot = self.session.lock().await;
        if slot.is_some() {
            return Err(AppError::Conflict("A draw is already in progress".into()));
        }

        let state = self.store.snapshot().await;
        let (_, pool) = check_draw(&state, &plan)?;
        let names: Vec<String> = pool.iter().map(|e| e.name.clone()).collect();

        let initial = DrawDisplay {
            rolling: true,
            prize_id: Some(plan.prize_id.clone()),
            names: Vec::new(),
            error: None,
        };
        self.display.send_replace(initial.clone());

        let token = CancellationToken::new();
        let spin = tokio::spawn(run_spin(
            names,
            plan.batch_size as usize,
            Duration::from_millis(self.config.spin_frame_ms),
            plan.prize_id.clone(),
            token.clone(),
            self.display.clone(),
        ));

        let svc = self.clone();
        let delay = Duration::from_millis(self.config.spin_duration_ms);
        let resolver = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            svc.resolve_session().await;
        });

        log::info!(
            "Draw started for prize {} (batch {}, allow repeat {})",
            plan.prize_id,
            plan.batch_size,
            plan.allow_repeat
        );
        *slot = Some(SpinSession {
            plan,
            token,
            spin,
            resolver: Some(resolver),
        });
        Ok(initial)
    }

    /// 取消进行中的抽奖，不写入任何结果
    pub async fn cancel_draw(&self) -> AppResult<DrawDisplay> {
        let mut slot = self.session.lock().await;
        let session = slot
            .take()
            .ok_or_else(|| AppError::NotFound("No draw in progress".into()))?;

        if let Some(resolver) = session.resolver {
            resolver.abort();
        }
        session.token.cancel();
        if let Err(e) = session.spin.await {
            log::warn!("Spin task ended abnormally: {e}");
        }

        let display = DrawDisplay::default();
        self.display.send_replace(display.clone());
        log::info!("Draw for prize {} cancelled", session.plan.prize_id);
        Ok(display)
    }

    pub fn display(&self) -> DrawDisplay {
        self.display.borrow().clone()
    }

    /// 中奖名单（新的在前）
    pub async fn winners(&self, prize_id: Option<&str>) -> AppResult<Vec<WinnerView>> {
        let state = self.store.snapshot().await;
        let mut views = winner_views(&state, prize_id);
        views.reverse();
        Ok(views)
    }

    pub async fn export_csv(&self) -> AppResult<String> {
        let state = self.store.snapshot().await;
        Ok(render_winners_csv(&winner_views(&state, None)))
    }

    /// 清空中奖记录与中奖标记，桌次和奖项不变
    pub async fn reset(&self) -> AppResult<ResetResponse> {
        if self.session.lock().await.is_some() {
            return Err(AppError::Conflict("A draw is in progress".into()));
        }
        let cleared_records = self.store.update(|s| Ok(reset_draw(s))).await?;
        self.display.send_replace(DrawDisplay::default());
        log::info!("Draw reset, {cleared_records} winner records cleared");
        Ok(ResetResponse { cleared_records })
    }

    fn plan(&self, request: DrawRequest) -> AppResult<DrawPlan> {
        let prize_id = request
            .prize_id
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::ValidationError("No prize selected".into()))?;
        let batch_size = request.batch_size.unwrap_or(1);
        if batch_size == 0 || batch_size > self.config.max_batch_size {
            return Err(AppError::ValidationError(format!(
                "Batch size must be between 1 and {}",
                self.config.max_batch_size
            )));
        }
        Ok(DrawPlan {
            prize_id,
            batch_size,
            allow_repeat: request.allow_repeat.unwrap_or(false),
        })
    }

    async fn commit_draw(&self, plan: &DrawPlan) -> AppResult<DrawOutcome> {
        let timestamp = Utc::now().timestamp_millis();
        let outcome = self
            .store
            .update(|s| {
                let mut rng = StdRng::from_entropy();
                resolve_draw(s, plan, &mut rng, timestamp)
            })
            .await?;
        log::info!(
            "Drew {} winners for {} ({} slots left)",
            outcome.winners.len(),
            outcome.prize_name,
            outcome.remaining
        );
        Ok(outcome)
    }

    /// 定时开奖：先停止滚动任务，再计算并提交结果
    async fn resolve_session(&self) {
        let mut slot = self.session.lock().await;
        let Some(session) = slot.take() else {
            return;
        };

        session.token.cancel();
        if let Err(e) = session.spin.await {
            log::warn!("Spin task ended abnormally: {e}");
        }

        let display = match self.commit_draw(&session.plan).await {
            Ok(outcome) => final_display(&outcome),
            Err(e) => {
                log::warn!("Draw for prize {} rejected: {e}", session.plan.prize_id);
                DrawDisplay {
                    rolling: false,
                    prize_id: Some(session.plan.prize_id.clone()),
                    names: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        };
        self.display.send_replace(display);
    }
}

async fn run_spin(
    names: Vec<String>,
    batch_size: usize,
    frame: Duration,
    prize_id: String,
    token: CancellationToken,
    display: Arc<watch::Sender<DrawDisplay>>,
) {
    let mut rng = StdRng::from_entropy();
    let mut ticker = tokio::time::interval(frame);
    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                display.send_replace(DrawDisplay {
                    rolling: true,
                    prize_id: Some(prize_id.clone()),
                    names: spin_names(&names, batch_size, &mut rng),
                    error: None,
                });
            }
        }
    }
}

fn final_display(outcome: &DrawOutcome) -> DrawDisplay {
    DrawDisplay {
        rolling: false,
        prize_id: Some(outcome.prize_id.clone()),
        names: outcome.winners.iter().map(|w| w.name.clone()).collect(),
        error: None,
    }
}

pub fn remaining_slots(state: &AppState, prize: &Prize) -> u32 {
    let drawn = state.drawn_count(&prize.id);
    (prize.count as usize).saturating_sub(drawn) as u32
}

pub fn eligible_pool(employees: &[Employee], allow_repeat: bool) -> Vec<&Employee> {
    employees
        .iter()
        .filter(|e| allow_repeat || !e.is_winner)
        .collect()
}

/// 校验抽奖前置条件，返回奖项与候选池
pub fn check_draw<'a>(
    state: &'a AppState,
    plan: &DrawPlan,
) -> AppResult<(&'a Prize, Vec<&'a Employee>)> {
    let prize = state
        .find_prize(&plan.prize_id)
        .ok_or_else(|| AppError::NotFound(format!("Prize {} not found", plan.prize_id)))?;

    let remaining = remaining_slots(state, prize);
    if remaining == 0 {
        return Err(AppError::ValidationError(format!(
            "Prize {} has no remaining slots",
            prize.name
        )));
    }
    if plan.batch_size > remaining {
        return Err(AppError::ValidationError(format!(
            "Prize {} has only {} slots left, {} requested",
            prize.name, remaining, plan.batch_size
        )));
    }

    let pool = eligible_pool(&state.employees, plan.allow_repeat);
    if pool.len() < plan.batch_size as usize {
        return Err(AppError::ValidationError(format!(
            "Not enough eligible employees: {} eligible, {} requested",
            pool.len(),
            plan.batch_size
        )));
    }
    Ok((prize, pool))
}

/// 不放回抽样：每次从剩余池中均匀抽取一人并移出
pub fn sample_without_replacement<'a, R: Rng + ?Sized>(
    mut pool: Vec<&'a Employee>,
    count: usize,
    rng: &mut R,
) -> Vec<&'a Employee> {
    let mut picked = Vec::with_capacity(count.min(pool.len()));
    while picked.len() < count && !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        picked.push(pool.remove(idx));
    }
    picked
}

/// 滚动展示用的放回抽样，与最终结果无关
pub fn spin_names<R: Rng + ?Sized>(names: &[String], count: usize, rng: &mut R) -> Vec<String> {
    if names.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| names[rng.gen_range(0..names.len())].clone())
        .collect()
}

/// 抽出中奖者并写入记录；校验失败时不修改状态
pub fn resolve_draw<R: Rng + ?Sized>(
    state: &mut AppState,
    plan: &DrawPlan,
    rng: &mut R,
    timestamp: i64,
) -> AppResult<DrawOutcome> {
    let (prize, winner_ids) = {
        let (prize, pool) = check_draw(state, plan)?;
        let ids: Vec<String> = sample_without_replacement(pool, plan.batch_size as usize, rng)
            .into_iter()
            .map(|e| e.id.clone())
            .collect();
        (prize.clone(), ids)
    };

    let records: Vec<WinnerRecord> = winner_ids
        .iter()
        .map(|employee_id| WinnerRecord {
            id: generate_id(),
            employee_id: employee_id.clone(),
            prize_id: prize.id.clone(),
            timestamp,
        })
        .collect();
    state.winners.extend(records.iter().cloned());

    let mut winners = Vec::with_capacity(winner_ids.len());
    for id in &winner_ids {
        if let Some(e) = state.employees.iter_mut().find(|e| &e.id == id) {
            e.is_winner = true;
            e.prize_won = Some(prize.name.clone());
            winners.push(e.clone());
        }
    }

    Ok(DrawOutcome {
        remaining: remaining_slots(state, &prize),
        prize_id: prize.id,
        prize_name: prize.name,
        winners,
        records,
    })
}

/// 清空中奖记录，返回清除条数；重复执行结果相同
pub fn reset_draw(state: &mut AppState) -> usize {
    let cleared = state.winners.len();
    state.winners.clear();
    for e in &mut state.employees {
        e.is_winner = false;
        e.prize_won = None;
    }
    cleared
}

/// 按记录顺序生成展示行；员工或奖项已删除时显示 Unknown
pub fn winner_views(state: &AppState, prize_id: Option<&str>) -> Vec<WinnerView> {
    state
        .winners
        .iter()
        .filter(|w| prize_id.is_none_or(|p| w.prize_id == p))
        .map(|w| {
            let employee = state.find_employee(&w.employee_id);
            let prize = state.find_prize(&w.prize_id);
            WinnerView {
                record_id: w.id.clone(),
                prize_id: w.prize_id.clone(),
                prize_name: prize.map_or(UNKNOWN, |p| p.name.as_str()).to_string(),
                employee_id: w.employee_id.clone(),
                staff_id: employee.map_or(UNKNOWN, |e| e.staff_id.as_str()).to_string(),
                name: employee.map_or(UNKNOWN, |e| e.name.as_str()).to_string(),
                department: employee
                    .map_or(UNKNOWN, |e| e.department.as_str())
                    .to_string(),
                timestamp: w.timestamp,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{MemoryStore, StateRepository};
    use std::collections::HashSet;

    fn employee(id: &str) -> Employee {
        Employee {
            id: id.into(),
            staff_id: id.to_uppercase(),
            name: format!("Name {id}"),
            department: "HR".into(),
            title: "Staff".into(),
            gender: None,
            table_id: None,
            is_winner: false,
            prize_won: None,
        }
    }

    fn prize(id: &str, count: u32) -> Prize {
        Prize {
            id: id.into(),
            name: format!("Prize {id}"),
            count,
            image: None,
        }
    }

    fn state(n: usize, prizes: Vec<Prize>) -> AppState {
        AppState {
            employees: (0..n).map(|i| employee(&format!("e{i}"))).collect(),
            prizes,
            ..Default::default()
        }
    }

    fn plan(prize_id: &str, batch_size: u32, allow_repeat: bool) -> DrawPlan {
        DrawPlan {
            prize_id: prize_id.into(),
            batch_size,
            allow_repeat,
        }
    }

    fn service(state: AppState, config: DrawConfig) -> LuckyDrawService {
        let repo = StateRepository::new(Arc::new(MemoryStore::new()), "draw_test");
        LuckyDrawService::new(StateStore::with_state(repo, state), config)
    }

    fn fast_config() -> DrawConfig {
        DrawConfig {
            spin_duration_ms: 40,
            spin_frame_ms: 5,
            max_batch_size: 10,
        }
    }

    fn request(prize_id: &str, batch_size: u32) -> DrawRequest {
        DrawRequest {
            prize_id: Some(prize_id.into()),
            batch_size: Some(batch_size),
            allow_repeat: None,
        }
    }

    #[test]
    fn test_draw_returns_distinct_winners() {
        let mut rng = StdRng::seed_from_u64(11);
        for k in 1..=10u32 {
            let mut s = state(10, vec![prize("p1", 10)]);
            let outcome = resolve_draw(&mut s, &plan("p1", k, false), &mut rng, 1).unwrap();
            let ids: HashSet<_> = outcome.winners.iter().map(|w| w.id.clone()).collect();
            assert_eq!(ids.len(), k as usize);
            assert_eq!(outcome.records.len(), k as usize);
            assert!(outcome.records.iter().all(|r| r.timestamp == 1));
            assert_eq!(outcome.remaining, 10 - k);
            assert_eq!(s.employees.iter().filter(|e| e.is_winner).count(), k as usize);
        }
    }

    #[test]
    fn test_single_slot_prize_then_rejected() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut s = state(3, vec![prize("p1", 1)]);
        let outcome = resolve_draw(&mut s, &plan("p1", 1, false), &mut rng, 10).unwrap();
        assert_eq!(outcome.winners.len(), 1);
        assert_eq!(outcome.remaining, 0);
        assert_eq!(outcome.winners[0].prize_won.as_deref(), Some("Prize p1"));

        let before = s.clone();
        assert!(matches!(
            resolve_draw(&mut s, &plan("p1", 1, false), &mut rng, 11),
            Err(AppError::ValidationError(_))
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn test_insufficient_pool_leaves_state_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut s = state(2, vec![prize("p1", 5)]);
        let before = s.clone();
        assert!(resolve_draw(&mut s, &plan("p1", 3, false), &mut rng, 1).is_err());
        assert_eq!(s, before);
    }

    #[test]
    fn test_batch_larger_than_remaining_is_refused() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut s = state(10, vec![prize("p1", 3)]);
        resolve_draw(&mut s, &plan("p1", 2, false), &mut rng, 1).unwrap();
        assert!(resolve_draw(&mut s, &plan("p1", 2, false), &mut rng, 2).is_err());
        assert!(resolve_draw(&mut s, &plan("p1", 1, false), &mut rng, 3).is_ok());
        assert_eq!(s.drawn_count("p1"), 3);
    }

    #[test]
    fn test_repeat_policy_controls_eligibility() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut s = state(2, vec![prize("p1", 2), prize("p2", 5)]);
        resolve_draw(&mut s, &plan("p1", 2, false), &mut rng, 1).unwrap();

        // 所有人都已中奖
        assert!(resolve_draw(&mut s, &plan("p2", 1, false), &mut rng, 2).is_err());
        let outcome = resolve_draw(&mut s, &plan("p2", 2, true), &mut rng, 3).unwrap();
        assert_eq!(outcome.winners.len(), 2);
        // 仅保留最近一次奖项名称，记录全部保留
        assert!(s
            .employees
            .iter()
            .all(|e| e.prize_won.as_deref() == Some("Prize p2")));
        assert_eq!(s.winners.len(), 4);
    }

    #[test]
    fn test_unknown_prize() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut s = state(2, vec![]);
        assert!(matches!(
            resolve_draw(&mut s, &plan("nope", 1, false), &mut rng, 1),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut s = state(5, vec![prize("p1", 3)]);
        s.tables.push(Table {
            id: "1".into(),
            name: "Table 1".into(),
            capacity: 5,
        });
        resolve_draw(&mut s, &plan("p1", 3, false), &mut rng, 1).unwrap();

        assert_eq!(reset_draw(&mut s), 3);
        let once = s.clone();
        assert_eq!(reset_draw(&mut s), 0);
        assert_eq!(s, once);
        assert!(s.winners.is_empty());
        assert!(s.employees.iter().all(|e| !e.is_winner && e.prize_won.is_none()));
        assert_eq!(s.tables.len(), 1);
        assert_eq!(s.prizes.len(), 1);
    }

    #[test]
    fn test_winner_views_resolve_missing_references() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut s = state(3, vec![prize("p1", 3)]);
        resolve_draw(&mut s, &plan("p1", 2, false), &mut rng, 1).unwrap();
        let removed = s.winners[0].employee_id.clone();
        s.employees.retain(|e| e.id != removed);
        s.prizes.clear();

        let views = winner_views(&s, Some("p1"));
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].name, "Unknown");
        assert_eq!(views[0].prize_name, "Unknown");
        assert_ne!(views[1].name, "Unknown");
        assert!(winner_views(&s, Some("p2")).is_empty());
    }

    #[test]
    fn test_spin_names_sample_with_replacement() {
        let mut rng = StdRng::seed_from_u64(9);
        let names = vec!["A".to_string()];
        assert_eq!(spin_names(&names, 3, &mut rng), vec!["A", "A", "A"]);
        assert!(spin_names(&[], 3, &mut rng).is_empty());
    }

    #[tokio::test]
    async fn test_plan_validation() {
        let svc = service(state(3, vec![prize("p1", 1)]), DrawConfig::default());
        let no_prize = DrawRequest {
            prize_id: None,
            batch_size: None,
            allow_repeat: None,
        };
        assert!(matches!(
            svc.draw(no_prize).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(svc.draw(request("p1", 0)).await.is_err());
        assert!(svc.draw(request("p1", 11)).await.is_err());
    }

    #[tokio::test]
    async fn test_immediate_draw_and_prize_status() {
        let svc = service(state(5, vec![prize("p1", 2)]), DrawConfig::default());
        let outcome = svc.draw(request("p1", 2)).await.unwrap();
        assert_eq!(outcome.winners.len(), 2);

        let prizes = svc.list_prizes().await.unwrap();
        assert_eq!(prizes[0].drawn, 2);
        assert_eq!(prizes[0].remaining, 0);
        assert!(!prizes[0].draw_enabled);

        let display = svc.display();
        assert!(!display.rolling);
        assert_eq!(display.names.len(), 2);

        let csv = svc.export_csv().await.unwrap();
        assert_eq!(csv.lines().count(), 3);

        assert_eq!(svc.reset().await.unwrap().cleared_records, 2);
        assert!(svc.winners(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_prize_validation() {
        let svc = service(AppState::default(), DrawConfig::default());
        let created = svc
            .add_prize(CreatePrizeRequest {
                name: " Mug ".into(),
                count: None,
                image: Some(" ".into()),
            })
            .await
            .unwrap();
        assert_eq!(created.name, "Mug");
        assert_eq!(created.count, 1);
        assert!(created.image.is_none());

        assert!(svc
            .add_prize(CreatePrizeRequest {
                name: "".into(),
                count: Some(1),
                image: None,
            })
            .await
            .is_err());
        assert!(svc
            .add_prize(CreatePrizeRequest {
                name: "Zero".into(),
                count: Some(0),
                image: None,
            })
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_spin_session_resolves_after_timer() {
        let svc = service(state(6, vec![prize("p1", 3)]), fast_config());
        let started = svc.start_draw(request("p1", 3)).await.unwrap();
        assert!(started.rolling);

        assert!(matches!(
            svc.start_draw(request("p1", 1)).await,
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(
            svc.draw(request("p1", 1)).await,
            Err(AppError::Conflict(_))
        ));

        tokio::time::sleep(Duration::from_millis(300)).await;

        let display = svc.display();
        assert!(!display.rolling);
        assert_eq!(display.names.len(), 3);
        let winners = svc.winners(Some("p1")).await.unwrap();
        assert_eq!(winners.len(), 3);

        // 开奖后展示不再变化
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(svc.display(), display);
    }

    #[tokio::test]
    async fn test_cancelled_session_commits_nothing() {
        let mut config = fast_config();
        config.spin_duration_ms = 10_000;
        let svc = service(state(4, vec![prize("p1", 1)]), config);
        svc.start_draw(request("p1", 1)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;

        let display = svc.cancel_draw().await.unwrap();
        assert!(!display.rolling);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(svc.display(), display);
        assert!(svc.winners(None).await.unwrap().is_empty());
        assert!(matches!(
            svc.cancel_draw().await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_start_draw_rejects_insufficient_pool() {
        let svc = service(state(1, vec![prize("p1", 5)]), fast_config());
        assert!(matches!(
            svc.start_draw(request("p1", 2)).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(!svc.display().rolling);
    }
}
