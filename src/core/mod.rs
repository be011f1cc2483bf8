pub mod geometry;
pub mod nearest;
pub mod transform;
pub mod types;

pub use geometry::{
    Dimensions, Margin, PlotGeometry, PlotPoint, Spacing, to_pixel_space, to_plot_space,
};
pub use nearest::{NearestSample, find_sample_by_index, nearest_sample, nearest_sample_index};
pub use transform::{MIN_ZOOM, PanBounds, Transform, TransformState, WHEEL_DELTA_PER_ZOOM_UNIT};
pub use types::{BoundingBox, PixelPoint, Sample};
