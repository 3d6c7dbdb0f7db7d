use glam::Vec3;
use pulselattice_scene::SceneDescription;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 10.0, 25.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads a composed scene and a view configuration, then
/// produces output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene description and view.
    fn render(&self, scene: &SceneDescription, view: &RenderView) -> Self::Output;
}

/// Text renderer for headless output.
///
/// Produces a human-readable summary of the composed scene. Used by the CLI
/// and by tests that exercise the render interface without a GPU.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, scene: &SceneDescription, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Scene (spheres={}, lights={}) ===\n",
            scene.spheres.len(),
            scene.lights.len()
        ));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));
        out.push_str(&format!(
            "Rotation: ({:.3}, {:.3}, {:.3})\n",
            scene.rotation.x, scene.rotation.y, scene.rotation.z
        ));
        out.push_str(&format!(
            "Ground: y={:.1} extent={:.0}x{:.0}\n",
            scene.ground.center.y,
            scene.ground.half_extent * 2.0,
            scene.ground.half_extent * 2.0
        ));

        for light in &scene.lights {
            let p = light.position;
            out.push_str(&format!(
                "  light pos=({:.2}, {:.2}, {:.2}) intensity={:.0}\n",
                p.x, p.y, p.z, light.intensity
            ));
        }
        for sphere in &scene.spheres {
            let p = sphere.position;
            out.push_str(&format!(
                "  sphere {} pos=({:.2}, {:.2}, {:.2})\n",
                sphere.index, p.x, p.y, p.z
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulselattice_scene::{SceneComposer, SceneParams};

    #[test]
    fn text_renderer_lists_default_scene() {
        let mut composer = SceneComposer::new(1);
        let scene = composer.advance(SceneParams::default(), 0.0, 0.0);
        let output = TextRenderer::new().render(&scene, &RenderView::default());

        assert!(output.contains("spheres=27"));
        assert!(output.contains("lights=4"));
        assert!(output.contains("Ground: y=-10.0"));
    }

    #[test]
    fn text_renderer_reflects_params() {
        let mut composer = SceneComposer::new(1);
        let params = SceneParams {
            boxes: 2,
            lights: 2,
            ..SceneParams::default()
        };
        let scene = composer.advance(params, 0.0, 0.0);
        let output = TextRenderer::new().render(&scene, &RenderView::default());

        assert!(output.contains("spheres=8"));
        assert!(output.contains("lights=2"));
    }

    #[test]
    fn render_view_default_matches_original_camera() {
        let view = RenderView::default();
        assert_eq!(view.eye, Vec3::new(0.0, 10.0, 25.0));
        assert_eq!(view.target, Vec3::ZERO);
        assert_eq!(view.fov_degrees, 60.0);
    }
}
