pub mod date_range_picker;
pub mod load_state_view;
pub mod stat_card;
