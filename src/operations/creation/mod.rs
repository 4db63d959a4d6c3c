mod make_rib;
mod make_rim;

pub use make_rib::{
    ribs_for_nest, HangingHole, MakeRib, RibConfig, RibPolygon, WallPair, CORNER_GAP_RATIO,
    CORNER_SEGMENTS, CORNER_STEP_RATIO, DEFAULT_CORNER_RADIUS, DEFAULT_HOLE_RADIUS,
    DEFAULT_MIN_GAP, HOLE_GAP_RATIO, HOLE_HEIGHT_RATIO,
};
pub use make_rim::{
    rim_profile_for_tag, MakeRim, RimParams, RimProfile, RimSpec, RimType, Side, UnknownRimType,
    MIN_LIP_HEIGHT, MIN_OVERHANG,
};
