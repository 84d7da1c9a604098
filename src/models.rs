//! データ構造体モジュール

use serde::{Deserialize, Serialize};

/// プロジェクトレコード
///
/// 一覧APIが返す1件分。id の一意性はデータ層側が保証する
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub updated: Option<String>,
}
