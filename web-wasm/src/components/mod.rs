pub mod action_buttons;
pub mod confidence_gauge;
pub mod header;
pub mod history_list;
pub mod result_panel;
pub mod status_bar;
pub mod upload_area;
