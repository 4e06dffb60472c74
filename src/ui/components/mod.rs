pub mod badge;
pub mod impact_tile;
pub mod kpi_card;
pub mod offset_card;
pub mod progress_bar;
pub mod toast;
