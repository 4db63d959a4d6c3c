pub mod path;
pub mod profile;
pub mod wall_curve;

pub use path::{Path2D, PathCommand};
pub use profile::{Floor, Foot, Profile, RimLip, VesselKind};
pub use wall_curve::WallCurve;
