use dot3_client::{client::HttpApi, view::Section, Dashboard};

use super::FilterAction;

pub async fn apply_filter(dashboard: &mut Dashboard<HttpApi>, action: &FilterAction) -> Section {
    match action {
        FilterAction::List => dashboard.update_filter_list().await,
        FilterAction::Add { word } => {
            dashboard.view_mut().filter_word = word.clone().unwrap_or_default();
            dashboard.add_filter_word().await;
        }
        FilterAction::Delete { word } => {
            dashboard.view_mut().filter_word = word.clone().unwrap_or_default();
            dashboard.delete_filter_word().await;
        }
    }
    Section::FilterList
}

pub async fn filter_message(dashboard: &mut Dashboard<HttpApi>, words: &[String]) -> Section {
    dashboard.view_mut().filter_message = words.join(" ");
    dashboard.filter_message().await;
    Section::FilteredResult
}
