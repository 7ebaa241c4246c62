pub mod app_reducer;
pub mod check_list_reducer;
pub mod merge_reducer;
pub mod spinner_reducer;
