//! プロジェクトカードコンポーネント

use leptos::*;

use crate::models::Project;

/// プロジェクトカード
/// 一覧の1件分。レコードと並び順の位置だけを受け取る
#[component]
pub fn ProjectWidget(project: Project, index: usize) -> impl IntoView {
    let name = project.name.clone();
    let url = project.url.clone();
    let has_tags = !project.tags.is_empty();
    let has_description = !project.description.is_empty();

    view! {
        <div class="project-widget">
            <div class="widget-header">
                <span class="widget-index">{index + 1}</span>
                {if let Some(u) = url {
                    view! {
                        <a class="project-name project-link" href=u target="_blank" rel="noopener">{name}</a>
                    }.into_view()
                } else {
                    view! {
                        <span class="project-name">{name}</span>
                    }.into_view()
                }}
                {project.updated.map(|u| view! {
                    <span class="updated">{u}</span>
                })}
            </div>

            {has_description.then(|| view! {
                <p class="project-description">{project.description.clone()}</p>
            })}

            {has_tags.then(|| view! {
                <div class="tag-list">
                    {project.tags.iter().map(|t| view! {
                        <span class="tag">{t.clone()}</span>
                    }).collect_view()}
                </div>
            })}

            {project.repo_url.map(|u| view! {
                <a class="repo-link" href=u target="_blank" rel="noopener">"リポジトリ"</a>
            })}
        </div>
    }
}
