//! プロジェクトストア（中央状態管理）
//!
//! アプリ全体で共有する projects スライスを一箇所で持つ。
//! スライスの変更は取得アクションのライフサイクル
//! (request → success / failure) 経由のみで、ビューから直接書き換えない

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use crate::models::Project;
use crate::utils::api;
use crate::utils::log_trace::{log_error, log_info, log_info_with_data, log_warn};

/// projects スライス
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectsState {
    /// 取得済みレコード。初回成功までは None
    pub data: Option<Vec<Project>>,
    /// 取得中フラグ
    pub loading: bool,
}

impl ProjectsState {
    /// 取得開始
    pub fn request(&mut self) {
        self.loading = true;
    }

    /// 取得成功。コレクションは丸ごと置き換える（マージしない）
    pub fn success(&mut self, projects: Vec<Project>) {
        self.data = Some(projects);
        self.loading = false;
    }

    /// 取得失敗。data は変更しない
    pub fn failure(&mut self) {
        self.loading = false;
    }
}

/// 取得タスクのキャンセルハンドル
///
/// ビュー破棄時に cancel すると、遅れて届いた応答は data に反映されない
#[derive(Clone, Default)]
pub struct FetchHandle {
    cancelled: Rc<Cell<bool>>,
}

impl FetchHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// projects スライスを保持するストア
///
/// App でコンテキストに載せ、ビューは use_projects_store で取得する
#[derive(Clone, Copy)]
pub struct ProjectsStore {
    state: RwSignal<ProjectsState>,
}

impl ProjectsStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(ProjectsState::default()),
        }
    }

    /// スライスの読み取り（リアクティブ）
    pub fn with_state<R>(&self, f: impl FnOnce(&ProjectsState) -> R) -> R {
        self.state.with(f)
    }

    /// 取得中フラグの読み取り
    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// 取得アクションを発行する
    ///
    /// 呼び出しごとに1リクエスト。重複発行の抑止はしない
    pub fn dispatch_fetch(&self) -> FetchHandle {
        let state = self.state;
        let handle = FetchHandle::default();
        let guard = handle.clone();

        state.update(|s| s.request());
        log_info("store", "プロジェクト取得を開始");

        spawn_local(async move {
            let result = api::fetch_projects().await;

            if guard.is_cancelled() {
                // ビュー破棄後に届いた応答は捨てる。loading だけ戻す
                log_warn("store", "破棄済みビューへの応答を無視");
                state.update(|s| s.failure());
                return;
            }

            match result {
                Ok(projects) => {
                    log_info_with_data(
                        "store",
                        "プロジェクト取得成功",
                        serde_json::json!({ "count": projects.len() }),
                    );
                    state.update(|s| s.success(projects));
                }
                Err(e) => {
                    log_error("store", &format!("プロジェクト取得失敗: {}", e));
                    state.update(|s| s.failure());
                }
            }
        });

        handle
    }
}

/// コンテキストからストアを取得
pub fn use_projects_store() -> ProjectsStore {
    use_context::<ProjectsStore>().expect("ProjectsStore not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            name: format!("プロジェクト{}", id),
            description: String::new(),
            url: None,
            repo_url: None,
            tags: Vec::new(),
            updated: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ProjectsState::default();
        assert!(state.data.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_request_sets_loading() {
        let mut state = ProjectsState::default();
        state.request();
        assert!(state.loading);
        assert!(state.data.is_none());
    }

    #[test]
    fn test_success_replaces_collection() {
        let mut state = ProjectsState::default();
        state.request();
        state.success(vec![project("a"), project("b")]);
        assert!(!state.loading);
        assert_eq!(state.data.as_ref().unwrap().len(), 2);

        // 2回目の成功はマージではなく置き換え
        state.success(vec![project("c")]);
        let data = state.data.as_ref().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].id, "c");
    }

    #[test]
    fn test_success_with_empty_collection() {
        let mut state = ProjectsState::default();
        state.request();
        state.success(Vec::new());
        assert!(!state.loading);
        assert_eq!(state.data.as_ref().unwrap().len(), 0);
    }

    #[test]
    fn test_failure_keeps_data() {
        let mut state = ProjectsState::default();
        state.success(vec![project("a")]);
        state.request();
        state.failure();
        assert!(!state.loading);
        assert_eq!(state.data.as_ref().unwrap()[0].id, "a");
    }

    #[test]
    fn test_failure_before_first_success() {
        let mut state = ProjectsState::default();
        state.request();
        state.failure();
        assert!(!state.loading);
        assert!(state.data.is_none());
    }

    #[test]
    fn test_fetch_handle_cancel() {
        let handle = FetchHandle::default();
        let guard = handle.clone();
        assert!(!guard.is_cancelled());
        handle.cancel();
        // クローン同士でフラグを共有する
        assert!(guard.is_cancelled());
    }
}
