pub mod scale;
pub mod series_path;
pub mod types;
pub mod windowing;

pub use scale::{LinearScale, SeriesScale, build_scale};
pub use series_path::{PathVertex, SeriesPath, Trend, build_path};
pub use types::{Sample, Viewport};
pub use windowing::{FilteredSeries, NoChart, RangeWindow, filter_series};
