pub mod card_animated;
pub mod filter_panel;
pub mod live_clock;
pub mod stat_card;
pub mod ui;
