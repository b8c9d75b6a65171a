use dot3_client::{client::HttpApi, view::Section, Dashboard};

use super::PermissionChange;

pub async fn login(dashboard: &mut Dashboard<HttpApi>, username: Option<&str>) -> Section {
    dashboard.view_mut().username_input = username.unwrap_or_default().to_string();
    dashboard.login().await;
    Section::Session
}

pub async fn logout(dashboard: &mut Dashboard<HttpApi>) -> Section {
    dashboard.logout().await;
    Section::Session
}

pub async fn status(dashboard: &mut Dashboard<HttpApi>) -> Section {
    dashboard.check_login_status().await;
    Section::Session
}

pub async fn change_permission(
    dashboard: &mut Dashboard<HttpApi>,
    change: PermissionChange,
) -> Section {
    match change {
        PermissionChange::Increase => dashboard.increase_permission().await,
        PermissionChange::Decrease => dashboard.decrease_permission().await,
    }
    Section::Session
}
