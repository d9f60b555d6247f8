pub mod collections;
pub mod interpolator;
pub mod primitives;
pub mod tween;
pub mod types;

pub use collections::{
    collapse_adjacent_duplicates, normalize, partial_sums, trim_trailing_duplicates, with_size,
};
pub use interpolator::Interpolator;
pub use primitives::{FULL_ANGLE, deg_to_rad, rad_to_deg};
pub use tween::evaluate;
pub use types::{ChartGeometry, DataPoint, Padding, Viewport};
