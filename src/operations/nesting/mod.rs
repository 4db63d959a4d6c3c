mod nest;

pub use nest::{
    Nest, NestedInstance, FOOT_PARENT_MARGIN, FOOT_WALL_MARGIN, MIN_FOOT_RING, MIN_NEST_SCALE,
};
