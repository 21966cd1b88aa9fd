pub mod analysis_period;
pub mod calendar;
pub mod epw_field;
pub mod hour_range;
pub mod location;
pub mod plot_mode;
pub mod series;
pub mod threshold_range;
pub mod unit;
