//! プロジェクト一覧ビュー

use leptos::*;

use crate::components::ProjectWidget;
use crate::models::Project;
use crate::store::{use_projects_store, ProjectsState};

/// スライスから表示する (位置, レコード) の組を導出する
///
/// data が None の間は空。順序はAPIが返した並びのまま
pub fn child_rows(state: &ProjectsState) -> Vec<(usize, Project)> {
    match &state.data {
        Some(projects) => projects.iter().cloned().enumerate().collect(),
        None => Vec::new(),
    }
}

/// プロジェクト一覧ビュー
///
/// マウント時に一度だけ取得アクションを発行し、projects スライスを購読する。
/// 再描画では再発行しない
#[component]
pub fn ProjectListView() -> impl IntoView {
    let store = use_projects_store();

    let handle = store.dispatch_fetch();
    // loading は読み取るが、現状は表示に影響しない
    let _loading = store.loading();

    // ビュー破棄後に届いた応答は無視する
    on_cleanup(move || handle.cancel());

    view! {
        <div class="projects">
            <div class="widgets-list">
                {move || store.with_state(child_rows).into_iter().map(|(i, p)| view! {
                    <ProjectWidget project=p index=i />
                }).collect_view()}
            </div>
        </div>
    }
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
    fn test_child_rows_empty_when_absent() {
        let state = ProjectsState::default();
        assert!(child_rows(&state).is_empty());
    }

    #[test]
    fn test_child_rows_order_and_index() {
        let state = ProjectsState {
            data: Some(vec![project("a"), project("b"), project("c")]),
            loading: false,
        };
        let rows = child_rows(&state);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].0, 0);
        assert_eq!(rows[0].1.id, "a");
        assert_eq!(rows[1].0, 1);
        assert_eq!(rows[1].1.id, "b");
        assert_eq!(rows[2].0, 2);
        assert_eq!(rows[2].1.id, "c");
    }

    #[test]
    fn test_child_rows_unaffected_by_loading() {
        let mut state = ProjectsState {
            data: Some(vec![project("a"), project("b")]),
            loading: false,
        };
        let before = child_rows(&state);
        state.loading = true;
        let after = child_rows(&state);
        assert_eq!(before, after);
    }

    #[test]
    fn test_child_rows_mount_scenario() {
        // マウント直後: 取得中・データ未着
        let mut state = ProjectsState {
            data: None,
            loading: true,
        };
        assert!(child_rows(&state).is_empty());

        // 取得完了で1件描画
        state.success(vec![project("1")]);
        let rows = child_rows(&state);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, 0);
        assert_eq!(rows[0].1.id, "1");
    }
}
