//! プロジェクトダッシュボード
//!
//! 中央ストアの projects スライスを購読し、一覧を描画するCSRアプリ

use leptos::*;

mod components;
mod models;
mod store;
mod utils;
mod views;

use store::ProjectsStore;
use views::ProjectListView;

#[component]
fn App() -> impl IntoView {
    // 起動時に ?api= からエンドポイント設定を取り込む
    utils::api::init_api_from_url_params();

    let store = ProjectsStore::new();
    provide_context(store);

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"プロジェクトダッシュボード"</h1>
            </header>

            <main class="container">
                <ProjectListView />
            </main>

            <footer class="app-footer">
                <span class="data-version">{utils::api::format_data_modified_time()}</span>
            </footer>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
