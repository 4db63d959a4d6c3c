//! Built-in vessel profiles.
//!
//! Dimensions are in millimeters. Outer curves run from the wall base
//! (height 0) to the rim.

use crate::geometry::{Floor, Foot, Profile, RimLip, VesselKind, WallCurve};
use crate::math::Point2;

struct Entry {
    key: &'static str,
    name: &'static str,
    source: &'static str,
    vessel: VesselKind,
    rim_diameter: f64,
    wall_thickness: f64,
    interior_depth: f64,
    floor_thickness: f64,
    /// Outer radius, inner radius, height.
    foot: (f64, f64, f64),
    /// Height, overhang.
    rim_lip: (f64, f64),
    outer: &'static [[f64; 2]],
}

impl Entry {
    fn to_profile(&self) -> Profile {
        let points = self.outer.iter().map(|&[r, h]| Point2::new(r, h)).collect();
        Profile {
            name: self.name.to_owned(),
            source: self.source.to_owned(),
            vessel: self.vessel,
            rim_diameter: self.rim_diameter,
            wall_thickness: self.wall_thickness,
            interior_depth: self.interior_depth,
            floor: Floor {
                thickness: self.floor_thickness,
            },
            foot: Foot {
                outer_radius: self.foot.0,
                inner_radius: self.foot.1,
                height: self.foot.2,
            },
            rim_lip: RimLip {
                height: self.rim_lip.0,
                overhang: self.rim_lip.1,
            },
            // Catalog curves are checked by the tests below.
            outer: WallCurve::from_points_unchecked(points),
        }
    }
}

const ENTRIES: &[Entry] = &[
    Entry {
        key: "fargklar-real",
        name: "IKEA Färgklar Bowl (EXTRACTED)",
        source: "dimensions.com SVG beziers",
        vessel: VesselKind::Bowl,
        rim_diameter: 165.0,
        wall_thickness: 5.5,
        interior_depth: 47.0,
        floor_thickness: 8.0,
        foot: (50.0, 46.0, 3.3),
        rim_lip: (3.0, 1.5),
        outer: &[
            [55.3, 0.0],
            [59.9, 4.4],
            [64.2, 9.2],
            [68.1, 14.6],
            [71.6, 20.3],
            [74.7, 26.4],
            [77.5, 32.8],
            [79.8, 39.5],
            [81.7, 46.3],
            [82.3, 49.2],
            [82.9, 52.1],
            [83.3, 55.1],
            [83.7, 58.0],
            [84.0, 61.0],
            [84.3, 64.0],
            [84.4, 67.0],
            [84.5, 70.0],
        ],
    },
    Entry {
        key: "fargklar-deep",
        name: "Färgklar Deep Plate",
        source: "9\" ø × 2\" H",
        vessel: VesselKind::Plate,
        rim_diameter: 230.0,
        wall_thickness: 5.0,
        interior_depth: 32.0,
        floor_thickness: 6.0,
        foot: (42.0, 38.0, 3.0),
        rim_lip: (2.0, 2.0),
        outer: &[
            [45.0, 0.0],
            [52.0, 5.0],
            [60.0, 10.0],
            [70.0, 17.0],
            [80.0, 24.0],
            [90.0, 31.0],
            [100.0, 38.0],
            [108.0, 44.0],
            [113.0, 48.0],
            [115.0, 50.0],
        ],
    },
    Entry {
        key: "cereal",
        name: "Classic Cereal Bowl",
        source: "6\" ø × 3\" H",
        vessel: VesselKind::Bowl,
        rim_diameter: 152.0,
        wall_thickness: 6.0,
        interior_depth: 55.0,
        floor_thickness: 10.0,
        foot: (28.0, 24.0, 4.0),
        rim_lip: (3.0, 1.0),
        outer: &[
            [30.0, 0.0],
            [36.0, 10.0],
            [45.0, 20.0],
            [55.0, 30.0],
            [63.0, 40.0],
            [69.0, 50.0],
            [73.0, 60.0],
            [75.5, 70.0],
            [76.0, 76.0],
        ],
    },
    Entry {
        key: "ramen",
        name: "Deep Ramen Bowl",
        source: "7.5\" ø × 3.5\" H",
        vessel: VesselKind::Bowl,
        rim_diameter: 190.0,
        wall_thickness: 6.0,
        interior_depth: 68.0,
        floor_thickness: 10.0,
        foot: (33.0, 29.0, 5.0),
        rim_lip: (3.0, 1.5),
        outer: &[
            [35.0, 0.0],
            [44.0, 14.0],
            [56.0, 26.0],
            [68.0, 38.0],
            [80.0, 50.0],
            [89.0, 62.0],
            [94.0, 74.0],
            [95.0, 84.0],
            [95.0, 89.0],
        ],
    },
    Entry {
        key: "mug",
        name: "Coffee Mug",
        source: "3.25\" ø × 3.75\" H",
        vessel: VesselKind::Mug,
        rim_diameter: 82.0,
        wall_thickness: 5.0,
        interior_depth: 80.0,
        floor_thickness: 8.0,
        foot: (32.0, 28.0, 3.0),
        rim_lip: (2.0, 1.0),
        outer: &[
            [33.0, 0.0],
            [34.0, 10.0],
            [35.0, 20.0],
            [36.0, 30.0],
            [37.0, 40.0],
            [38.0, 50.0],
            [39.0, 60.0],
            [40.0, 70.0],
            [41.0, 80.0],
            [41.0, 90.0],
        ],
    },
    Entry {
        key: "espresso",
        name: "Espresso Demitasse",
        source: "2.25\" ø × 2.25\" H",
        vessel: VesselKind::Cup,
        rim_diameter: 57.0,
        wall_thickness: 3.5,
        interior_depth: 42.0,
        floor_thickness: 6.0,
        foot: (20.0, 17.0, 3.0),
        rim_lip: (1.5, 0.5),
        outer: &[
            [22.0, 0.0],
            [23.0, 6.0],
            [24.0, 12.0],
            [25.5, 20.0],
            [27.0, 28.0],
            [28.0, 36.0],
            [28.5, 44.0],
            [28.5, 48.0],
        ],
    },
    Entry {
        key: "cappuccino",
        name: "Cappuccino Mug",
        source: "3.5\" ø × 2.75\" H",
        vessel: VesselKind::Mug,
        rim_diameter: 89.0,
        wall_thickness: 5.0,
        interior_depth: 55.0,
        floor_thickness: 8.0,
        foot: (30.0, 26.0, 3.0),
        rim_lip: (2.0, 1.0),
        outer: &[
            [32.0, 0.0],
            [34.0, 8.0],
            [37.0, 16.0],
            [39.0, 24.0],
            [41.0, 32.0],
            [43.0, 40.0],
            [44.0, 48.0],
            [44.5, 55.0],
            [44.5, 60.0],
        ],
    },
    Entry {
        key: "latte",
        name: "Latte Mug",
        source: "3.5\" ø × 4.5\" H",
        vessel: VesselKind::Mug,
        rim_diameter: 89.0,
        wall_thickness: 5.0,
        interior_depth: 95.0,
        floor_thickness: 8.0,
        foot: (32.0, 28.0, 3.0),
        rim_lip: (2.0, 1.0),
        outer: &[
            [34.0, 0.0],
            [35.0, 12.0],
            [36.0, 24.0],
            [37.0, 36.0],
            [38.0, 48.0],
            [39.0, 60.0],
            [40.0, 72.0],
            [41.5, 84.0],
            [43.0, 95.0],
            [44.5, 103.0],
        ],
    },
    Entry {
        key: "camp",
        name: "Camp / Diner Mug",
        source: "3.5\" ø × 3.5\" H",
        vessel: VesselKind::Mug,
        rim_diameter: 89.0,
        wall_thickness: 6.5,
        interior_depth: 75.0,
        floor_thickness: 10.0,
        foot: (35.0, 31.0, 2.5),
        rim_lip: (2.5, 1.0),
        outer: &[
            [36.0, 0.0],
            [36.5, 10.0],
            [37.0, 20.0],
            [37.5, 30.0],
            [38.0, 40.0],
            [39.0, 50.0],
            [40.0, 60.0],
            [41.5, 70.0],
            [43.0, 78.0],
            [44.5, 84.0],
        ],
    },
    Entry {
        key: "stacking",
        name: "Stacking Mug",
        source: "4\" ø × 2.75\" H",
        vessel: VesselKind::Mug,
        rim_diameter: 102.0,
        wall_thickness: 5.5,
        interior_depth: 52.0,
        floor_thickness: 9.0,
        foot: (38.0, 34.0, 3.0),
        rim_lip: (2.0, 0.5),
        outer: &[
            [40.0, 0.0],
            [41.0, 7.0],
            [43.0, 14.0],
            [45.0, 22.0],
            [47.0, 30.0],
            [48.5, 38.0],
            [50.0, 46.0],
            [51.0, 52.0],
            [51.0, 57.0],
        ],
    },
    Entry {
        key: "teacup",
        name: "Japanese Tea Cup",
        source: "3\" ø × 2.5\" H",
        vessel: VesselKind::Cup,
        rim_diameter: 76.0,
        wall_thickness: 4.0,
        interior_depth: 50.0,
        floor_thickness: 6.0,
        foot: (22.0, 18.0, 5.0),
        rim_lip: (2.0, 0.5),
        outer: &[
            [24.0, 0.0],
            [27.0, 8.0],
            [31.0, 16.0],
            [34.0, 24.0],
            [36.0, 32.0],
            [37.5, 40.0],
            [38.0, 48.0],
            [38.0, 55.0],
        ],
    },
    Entry {
        key: "serving",
        name: "Serving Bowl",
        source: "10\" ø × 4\" H",
        vessel: VesselKind::Serving,
        rim_diameter: 254.0,
        wall_thickness: 7.0,
        interior_depth: 70.0,
        floor_thickness: 12.0,
        foot: (55.0, 50.0, 5.0),
        rim_lip: (4.0, 3.0),
        outer: &[
            [58.0, 0.0],
            [65.0, 8.0],
            [75.0, 16.0],
            [86.0, 24.0],
            [97.0, 34.0],
            [107.0, 44.0],
            [115.0, 54.0],
            [121.0, 64.0],
            [125.0, 74.0],
            [127.0, 82.0],
            [127.0, 88.0],
        ],
    },
    Entry {
        key: "plate",
        name: "Dinner Plate",
        source: "10.5\" ø × 1\" H",
        vessel: VesselKind::Plate,
        rim_diameter: 267.0,
        wall_thickness: 5.0,
        interior_depth: 15.0,
        floor_thickness: 7.0,
        foot: (55.0, 50.0, 3.0),
        rim_lip: (2.0, 3.0),
        outer: &[
            [58.0, 0.0],
            [70.0, 3.0],
            [85.0, 6.0],
            [100.0, 9.0],
            [115.0, 12.0],
            [127.0, 15.0],
            [133.0, 18.0],
            [133.5, 20.0],
        ],
    },
    Entry {
        key: "tumbler",
        name: "Whiskey Tumbler",
        source: "3.5\" ø × 3.5\" H",
        vessel: VesselKind::Tumbler,
        rim_diameter: 89.0,
        wall_thickness: 6.0,
        interior_depth: 72.0,
        floor_thickness: 10.0,
        foot: (35.0, 31.0, 3.0),
        rim_lip: (2.0, 0.5),
        outer: &[
            [36.0, 0.0],
            [37.0, 10.0],
            [38.0, 18.0],
            [39.0, 28.0],
            [40.0, 38.0],
            [41.0, 48.0],
            [42.0, 58.0],
            [43.0, 68.0],
            [44.0, 78.0],
            [44.5, 85.0],
        ],
    },
    Entry {
        key: "custom",
        name: "✎ Custom Bowl",
        source: "drag points to shape",
        vessel: VesselKind::Bowl,
        rim_diameter: 160.0,
        wall_thickness: 5.0,
        interior_depth: 50.0,
        floor_thickness: 8.0,
        foot: (35.0, 31.0, 4.0),
        rim_lip: (3.0, 1.0),
        outer: &[
            [38.0, 0.0],
            [46.0, 10.0],
            [56.0, 20.0],
            [66.0, 30.0],
            [74.0, 40.0],
            [79.0, 50.0],
            [80.0, 60.0],
        ],
    },
];

/// Returns the catalog keys in catalog order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|e| e.key)
}

/// Looks up a built-in profile by key.
#[must_use]
pub fn profile(key: &str) -> Option<Profile> {
    ENTRIES.iter().find(|e| e.key == key).map(Entry::to_profile)
}

/// Returns every built-in profile with its key.
#[must_use]
pub fn all() -> Vec<(&'static str, Profile)> {
    ENTRIES.iter().map(|e| (e.key, e.to_profile())).collect()
}
