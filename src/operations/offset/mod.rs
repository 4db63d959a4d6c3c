mod wall_offset;

pub use wall_offset::OffsetInward;
