pub mod multi_select_filter;
pub mod nav;
pub mod stat_card;
