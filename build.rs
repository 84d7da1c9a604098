use std::fs;
use std::time::UNIX_EPOCH;

fn main() {
    // data/sample_projects.json の更新日時を取得
    if let Ok(metadata) = fs::metadata("data/sample_projects.json") {
        if let Ok(modified) = metadata.modified() {
            if let Ok(duration) = modified.duration_since(UNIX_EPOCH) {
                let timestamp = duration.as_secs();
                println!("cargo:rustc-env=SAMPLE_DATA_MODIFIED={}", timestamp);
            }
        }
    } else {
        println!("cargo:warning=Could not read data/sample_projects.json");
    }

    // ファイル変更時に再ビルド
    println!("cargo:rerun-if-changed=data/sample_projects.json");
}
