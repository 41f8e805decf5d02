use glam::Vec3;

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Last known pointer position in normalized device coordinates.
///
/// `x` grows to the right and `y` grows upwards; both are in \[-1, 1\] for
/// pointers inside the viewport. Starts centred and is never reset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Store a pointer-move sample given in client (CSS pixel) coordinates.
    pub fn on_move(&mut self, client_x: f32, client_y: f32, viewport: Viewport) {
        if viewport.is_degenerate() {
            return;
        }
        let (x, y) = to_ndc(client_x, client_y, viewport);
        self.x = x;
        self.y = y;
    }
}

#[inline]
pub fn to_ndc(client_x: f32, client_y: f32, viewport: Viewport) -> (f32, f32) {
    let x = (client_x / viewport.width) * 2.0 - 1.0;
    let y = -((client_y / viewport.height) * 2.0 - 1.0);
    (x, y)
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}
