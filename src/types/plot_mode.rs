//! Defines the presentation modes a chart layer can request for a series.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the rendering layer intends to present the analysed series.
///
/// The pipeline itself never draws anything. The mode only decides which
/// derived view accompanies the report: [`PlotMode::MeanDaily`] additionally
/// produces one mean per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlotMode {
    /// One cell per hour, typically a day-by-hour heatmap.
    #[default]
    Hourly,
    /// One value per day, the mean of that day's samples.
    MeanDaily,
    /// The hourly values as a continuous line.
    Line,
}

impl PlotMode {
    pub fn title(&self) -> &'static str {
        match self {
            PlotMode::Hourly => "Hourly Plot",
            PlotMode::MeanDaily => "Mean Daily Plot",
            PlotMode::Line => "Line Plot",
        }
    }
}

/// # Examples
///
/// ```
/// use epw_analysis::PlotMode;
///
/// assert_eq!(PlotMode::MeanDaily.to_string(), "Mean Daily Plot");
/// ```
impl fmt::Display for PlotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
