use std::path::PathBuf;

use dot3_client::{client::HttpApi, view::Section, Dashboard};

pub async fn upload(dashboard: &mut Dashboard<HttpApi>, path: Option<PathBuf>) -> Section {
    dashboard.view_mut().pdf_file = path;
    dashboard.upload_and_index().await;
    Section::Upload
}

/// Query with an optional one-off `top_k`
pub async fn query(
    dashboard: &mut Dashboard<HttpApi>,
    words: &[String],
    top_k: Option<usize>,
) -> Section {
    dashboard.view_mut().query_text = words.join(" ");

    let configured = dashboard.top_k();
    if let Some(k) = top_k {
        dashboard.set_top_k(k);
    }
    dashboard.query_documents().await;
    dashboard.set_top_k(configured);

    Section::QueryResults
}
