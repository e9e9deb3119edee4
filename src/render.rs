//! Renderer-facing state: matrix stack, camera, draw settings.
//!
//! The renderer itself (GPU API, shaders, windowing) is outside this crate;
//! what lives here is the bookkeeping it consumes every frame, gathered into
//! an explicit [`RenderContext`] that is passed to draw calls instead of
//! being scattered across globals. That covers the model-view matrix stack
//! for hierarchical transforms, the camera, the draw-mode and surface-effect
//! toggles, and the Phong material and light parameters.

use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// A model-view matrix stack for hierarchical transforms.
///
/// `push` saves the current matrix, `pop` restores the last saved one. All
/// transform helpers compose onto the current matrix.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    current: Matrix4<f32>,
    saved: Vec<Matrix4<f32>>,
}

impl MatrixStack {
    /// Create a stack whose current matrix is the identity.
    pub fn new() -> Self {
        Self {
            current: Matrix4::identity(),
            saved: Vec::new(),
        }
    }

    /// The current matrix.
    pub fn current(&self) -> &Matrix4<f32> {
        &self.current
    }

    /// Save a copy of the current matrix.
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the last saved matrix.
    ///
    /// Returns `false` if the stack is empty, leaving the current matrix
    /// untouched.
    pub fn pop(&mut self) -> bool {
        match self.saved.pop() {
            Some(m) => {
                self.current = m;
                true
            }
            None => false,
        }
    }

    /// Number of saved matrices.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Reset to the identity and discard all saved matrices.
    pub fn reset(&mut self) {
        self.current = Matrix4::identity();
        self.saved.clear();
    }

    /// Compose a rotation about the y axis onto the current matrix.
    pub fn rotate_y(&mut self, radians: f32) {
        self.current *= Matrix4::from_axis_angle(&Vector3::y_axis(), radians);
    }

    /// Compose a uniform scale onto the current matrix.
    pub fn scale(&mut self, factor: f32) {
        self.current *= Matrix4::new_scaling(factor);
    }

    /// Pre-multiply by a view matrix, yielding the model-view transform.
    pub fn apply_view(&mut self, view: &Matrix4<f32>) {
        self.current = view * self.current;
    }

    /// The normal matrix for the current model-view transform.
    ///
    /// Inverse-transpose of the upper-left 3x3; `None` if the matrix is
    /// singular.
    pub fn normal_matrix(&self) -> Option<Matrix3<f32>> {
        let m: Matrix3<f32> = self.current.fixed_view::<3, 3>(0, 0).into_owned();
        m.try_inverse().map(|inv| inv.transpose())
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

/// A look-at camera with a perspective projection.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position in world coordinates.
    pub eye: Point3<f32>,
    /// View direction in world coordinates.
    pub view_dir: Vector3<f32>,
    /// Up vector.
    pub up: Vector3<f32>,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 0.0, 0.3),
            view_dir: Vector3::new(0.0, 0.0, -1.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: 45.0_f32.to_radians(),
            near: 0.1,
            far: 500.0,
        }
    }
}

impl Camera {
    /// The view matrix (world to camera transform).
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let target = self.eye + self.view_dir;
        Matrix4::look_at_rh(&self.eye, &target, &self.up)
    }

    /// The perspective projection matrix for the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        Matrix4::new_perspective(aspect, self.fov, self.near, self.far)
    }
}

/// How the mesh surface is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Shaded triangles only.
    #[default]
    Shaded,
    /// Shaded triangles with black edges on top.
    ShadedWireframe,
    /// White edges only.
    Wireframe,
}

/// Which shading effect the surface uses against the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceEffect {
    /// Plain Phong shading.
    #[default]
    Phong,
    /// Environment reflection.
    Reflect,
    /// Environment refraction.
    Refract,
}

/// Phong material parameters.
#[derive(Debug, Clone)]
pub struct Material {
    /// Ambient color.
    pub ambient: Vector3<f32>,
    /// Diffuse color.
    pub diffuse: Vector3<f32>,
    /// Specular color.
    pub specular: Vector3<f32>,
    /// Shininess exponent.
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vector3::new(1.0, 1.0, 1.0),
            diffuse: Vector3::new(205.0 / 255.0, 163.0 / 255.0, 63.0 / 255.0),
            specular: Vector3::zeros(),
            shininess: 27.0,
        }
    }
}

impl Material {
    /// Black edge material for wireframe-over-shaded rendering.
    pub fn edge_black() -> Self {
        Self {
            diffuse: Vector3::zeros(),
            ..Self::default()
        }
    }

    /// White edge material for pure wireframe rendering.
    pub fn edge_white() -> Self {
        Self {
            diffuse: Vector3::new(1.0, 1.0, 1.0),
            ..Self::default()
        }
    }
}

/// Phong light parameters, in view coordinates.
#[derive(Debug, Clone)]
pub struct Light {
    /// Light position.
    pub position: Vector3<f32>,
    /// Ambient intensity.
    pub ambient: Vector3<f32>,
    /// Diffuse intensity.
    pub diffuse: Vector3<f32>,
    /// Specular intensity.
    pub specular: Vector3<f32>,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vector3::new(1.0, 1.0, 1.0),
            ambient: Vector3::zeros(),
            diffuse: Vector3::new(1.0, 1.0, 1.0),
            specular: Vector3::zeros(),
        }
    }
}

/// Model orientation driven by user input.
///
/// `orbit` turns the model (and its environment reflections) around the y
/// axis; `spin` turns the model alone. Angles are in degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spin {
    /// Orbit angle around the y axis, degrees.
    pub orbit: f32,
    /// Model spin angle around the y axis, degrees.
    pub spin: f32,
}

impl Spin {
    /// Orbit the model; also spins it so the environment stays coherent.
    pub fn orbit_by(&mut self, degrees: f32) {
        self.orbit += degrees;
        self.spin += degrees;
    }

    /// Spin the model in place.
    pub fn spin_by(&mut self, degrees: f32) {
        self.spin += degrees;
    }
}

/// Everything a draw call needs, passed explicitly.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// The camera.
    pub camera: Camera,
    /// The model-view matrix stack.
    pub stack: MatrixStack,
    /// Surface draw mode.
    pub mode: DrawMode,
    /// Surface shading effect.
    pub effect: SurfaceEffect,
    /// Mesh surface material.
    pub material: Material,
    /// Light parameters.
    pub light: Light,
    /// Model orientation state.
    pub spin: Spin,
}

impl RenderContext {
    /// Create a context with default camera, materials and toggles.
    pub fn new() -> Self {
        Self {
            camera: Camera::default(),
            stack: MatrixStack::new(),
            mode: DrawMode::default(),
            effect: SurfaceEffect::default(),
            material: Material::default(),
            light: Light::default(),
            spin: Spin::default(),
        }
    }

    /// Compose the per-frame model-view transform for the mesh.
    ///
    /// Saves the stack, applies the model spin and the camera's view matrix.
    /// The caller draws, then calls [`MatrixStack::pop`] to unwind.
    pub fn begin_mesh_transform(&mut self) {
        self.stack.push();
        self.stack.rotate_y(self.spin.spin.to_radians());
        let view = self.camera.view_matrix();
        self.stack.apply_view(&view);
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_push_pop() {
        let mut stack = MatrixStack::new();
        stack.push();
        stack.scale(2.0);
        assert_ne!(*stack.current(), Matrix4::identity());

        assert!(stack.pop());
        assert_eq!(*stack.current(), Matrix4::identity());
    }

    #[test]
    fn test_stack_pop_empty() {
        let mut stack = MatrixStack::new();
        assert!(!stack.pop());
        assert_eq!(*stack.current(), Matrix4::identity());
    }

    #[test]
    fn test_stack_depth_and_reset() {
        let mut stack = MatrixStack::new();
        stack.push();
        stack.push();
        assert_eq!(stack.depth(), 2);

        stack.reset();
        assert_eq!(stack.depth(), 0);
        assert_eq!(*stack.current(), Matrix4::identity());
    }

    #[test]
    fn test_normal_matrix_identity() {
        let stack = MatrixStack::new();
        let n = stack.normal_matrix().unwrap();
        assert!((n - Matrix3::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_normal_matrix_undoes_scale() {
        let mut stack = MatrixStack::new();
        stack.scale(2.0);
        let n = stack.normal_matrix().unwrap();
        // Inverse-transpose of a uniform scale is the reciprocal scale
        assert!((n[(0, 0)] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_camera_view_matrix_is_invertible() {
        let camera = Camera::default();
        assert!(camera.view_matrix().try_inverse().is_some());
    }

    #[test]
    fn test_spin_orbit_moves_both_angles() {
        let mut spin = Spin::default();
        spin.orbit_by(5.0);
        spin.spin_by(-2.0);
        assert_eq!(spin.orbit, 5.0);
        assert_eq!(spin.spin, 3.0);
    }

    #[test]
    fn test_context_mesh_transform_unwinds() {
        let mut ctx = RenderContext::new();
        ctx.spin.spin_by(30.0);
        ctx.begin_mesh_transform();
        assert_eq!(ctx.stack.depth(), 1);
        assert_ne!(*ctx.stack.current(), Matrix4::identity());

        assert!(ctx.stack.pop());
        assert_eq!(*ctx.stack.current(), Matrix4::identity());
    }
}
