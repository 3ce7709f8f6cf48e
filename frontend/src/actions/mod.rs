pub mod actions_load;
pub mod app_actions;
