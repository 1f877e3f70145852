/// A logical 3-component vector stored as a single record.
///
/// This is the element type of the array-of-structs layouts, and also the
/// additive vector applied by every timed pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }
}

/// Number of scalar cells one logical vector occupies in a flat layout.
pub const COMPONENTS: usize = 3;
