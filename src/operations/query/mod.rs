mod area;
mod bounding_box;
mod volume;

pub use area::{frustum_lateral_area, revolved_area, GlazeArea};
pub use bounding_box::{Aabb2, BoundingBox};
pub use volume::{
    frustum_volume, revolved_volume, ComputeVolumes, VesselVolumes, CLAY_DENSITY_G_PER_ML,
    G_PER_LB, ML_PER_US_FL_OZ, MM2_PER_IN2,
};
