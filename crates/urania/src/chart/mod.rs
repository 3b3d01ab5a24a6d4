pub mod format;
pub mod projector;

pub use format::{format_longitude, to_dms, DegreeStyle, Dms};
pub use projector::{
    AxisAngles, ChartGeometry, ChartProjector, DegreeTick, ProjectedAxis, ProjectedCusp,
    ProjectedPoint, ProjectedSign, WheelLayout,
};
