/// ASCII rasterizer for side-by-side stereo rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use hmd3d_core::lighting::{self, LightRig, Material};
use hmd3d_core::{Mesh, Triangle};
use nalgebra::{Matrix4, Point3, Vector2};
use std::io::Write;

/// Character luminosity ramp (darkest to lightest).
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Region of the character grid one eye renders into.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Leftmost column of the region.
    pub x: usize,
    pub width: usize,
    pub height: usize,
}

/// Converts meshes to terminal characters, one depth-buffered grid shared
/// by both eye viewports.
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.char_buffer.fill(' ');
    }

    /// The left and right halves of the grid, for the left and right eye.
    pub fn split_viewports(&self) -> (Viewport, Viewport) {
        let half = self.width / 2;
        let left = Viewport {
            x: 0,
            width: half,
            height: self.height,
        };
        let right = Viewport {
            x: half,
            width: self.width - half,
            height: self.height,
        };
        (left, right)
    }

    /// Renders one eye's view of the mesh into its viewport, flat-shading
    /// each face at its centroid with the scene lighting.
    pub fn render_eye(
        &mut self,
        mesh: &Mesh,
        material: &Material,
        lights: &LightRig,
        model: &Matrix4<f32>,
        view: &Matrix4<f32>,
        projection: &Matrix4<f32>,
        viewport: Viewport,
    ) {
        let model_view = view * model;
        let mvp = projection * model_view;
        for triangle in &mesh.triangles {
            self.render_triangle(triangle, material, lights, &model_view, view, &mvp, viewport);
        }
    }

    fn render_triangle(
        &mut self,
        triangle: &Triangle,
        material: &Material,
        lights: &LightRig,
        model_view: &Matrix4<f32>,
        view: &Matrix4<f32>,
        mvp: &Matrix4<f32>,
        viewport: Viewport,
    ) {
        let mut screen = [(0.0f32, 0.0f32, 0.0f32); 3];
        for (corner, vertex) in screen.iter_mut().zip(&triangle.vertices) {
            match project(mvp, viewport, &vertex.position) {
                Some(coords) => *corner = coords,
                // Whole triangle is culled as soon as one corner leaves
                // the frustum.
                None => return,
            }
        }

        // Rigid model-view transform, so the normal moves without an
        // inverse-transpose.
        let normal_cam = (model_view * triangle.face_normal().to_homogeneous())
            .xyz()
            .normalize();
        let centroid_cam = model_view.transform_point(&triangle.centroid());
        let color = lighting::shade(material, lights, &centroid_cam, &normal_cam, view);

        // Rec. 709 luma, clamped onto the ramp.
        let luminance = (0.2126 * color.x + 0.7152 * color.y + 0.0722 * color.z).clamp(0.0, 1.0);
        let index = (luminance * (LUMINOSITY_RAMP.len() - 1) as f32).round() as usize;
        let character = LUMINOSITY_RAMP[index.min(LUMINOSITY_RAMP.len() - 1)];

        self.rasterize(&screen, viewport, character);
    }

    fn rasterize(&mut self, corners: &[(f32, f32, f32); 3], viewport: Viewport, character: char) {
        let (v0, v1, v2) = (corners[0], corners[1], corners[2]);
        let a = Vector2::new(v0.0, v0.1);
        let b = Vector2::new(v1.0, v1.1);
        let c = Vector2::new(v2.0, v2.1);

        let min_x = (a.x.min(b.x).min(c.x).floor() as i64).max(viewport.x as i64);
        let max_x =
            (a.x.max(b.x).max(c.x).ceil() as i64).min((viewport.x + viewport.width) as i64 - 1);
        let min_y = (a.y.min(b.y).min(c.y).floor() as i64).max(0);
        let max_y = (a.y.max(b.y).max(c.y).ceil() as i64).min(viewport.height as i64 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vector2::new(x as f32 + 0.5, y as f32 + 0.5);
                let Some((w0, w1, w2)) = barycentric(a, b, c, p) else {
                    continue;
                };
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;
                let idx = y as usize * self.width + x as usize;
                if depth < self.depth_buffer[idx] {
                    self.depth_buffer[idx] = depth;
                    self.char_buffer[idx] = character;
                }
            }
        }
    }

    /// The characters currently stored for one row, for inspection.
    pub fn row(&self, y: usize) -> &[char] {
        &self.char_buffer[y * self.width..(y + 1) * self.width]
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_buffer[y * self.width + x];

                let color = match c {
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Cyan,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Projects a model-space point through the combined matrix into viewport
/// pixel coordinates plus NDC depth. `None` when the point is behind the
/// eye or outside the frustum.
fn project(
    mvp: &Matrix4<f32>,
    viewport: Viewport,
    point: &Point3<f32>,
) -> Option<(f32, f32, f32)> {
    let clip = mvp * point.to_homogeneous();
    if clip.w <= 1e-6 {
        return None;
    }

    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    let ndc_z = clip.z / clip.w;
    if !(-1.0..=1.0).contains(&ndc_x)
        || !(-1.0..=1.0).contains(&ndc_y)
        || !(-1.0..=1.0).contains(&ndc_z)
    {
        return None;
    }

    let screen_x = viewport.x as f32 + (ndc_x + 1.0) * 0.5 * viewport.width as f32;
    let screen_y = (1.0 - ndc_y) * 0.5 * viewport.height as f32;
    Some((screen_x, screen_y, ndc_z))
}

/// Barycentric coordinates of `p` in the triangle `abc`; `None` for
/// degenerate (zero-area) screen triangles.
fn barycentric(
    a: Vector2<f32>,
    b: Vector2<f32>,
    c: Vector2<f32>,
    p: Vector2<f32>,
) -> Option<(f32, f32, f32)> {
    let denom = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / denom;
    let w1 = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmd3d_core::{DisplayParameters, FrameState, PointLight, StereoTransforms};
    use nalgebra::Vector3;

    fn test_material() -> Material {
        Material {
            ambient: Vector3::new(0.3, 0.3, 0.3),
            diffuse: Vector3::new(0.8, 0.8, 0.8),
            specular: Vector3::new(0.5, 0.5, 0.5),
            shininess: 20.0,
        }
    }

    fn test_lights() -> LightRig {
        LightRig {
            ambient_color: Vector3::new(0.4, 0.4, 0.4),
            point_lights: vec![PointLight {
                position: Point3::new(0.5, 0.5, 0.5),
                color: Vector3::new(1.0, 1.0, 1.0),
            }],
            directional_lights: vec![],
        }
    }

    #[test]
    fn test_barycentric_center_weights() {
        let (w0, w1, w2) = barycentric(
            Vector2::new(0.0, 0.0),
            Vector2::new(3.0, 0.0),
            Vector2::new(0.0, 3.0),
            Vector2::new(1.0, 1.0),
        )
        .unwrap();
        assert!((w0 + w1 + w2 - 1.0).abs() < 1e-6);
        assert!((w0 - w1).abs() < 1e-6);
        assert!((w1 - w2).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_triangle_is_rejected() {
        let collinear = barycentric(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 2.0),
            Vector2::new(0.5, 0.5),
        );
        assert!(collinear.is_none());
    }

    #[test]
    fn test_both_eye_viewports_receive_the_cube() {
        let mut transforms = StereoTransforms::new(DisplayParameters::default()).unwrap();
        transforms.update(&FrameState::default()).unwrap();

        let mut renderer = AsciiRenderer::new(80, 24);
        let (left_vp, right_vp) = renderer.split_viewports();
        let mesh = Mesh::cube(0.3);
        let model = *transforms.model_mat();

        renderer.render_eye(
            &mesh,
            &test_material(),
            &test_lights(),
            &model,
            &transforms.stereo_view_mat().left,
            &transforms.stereo_projection_mat().left,
            left_vp,
        );
        renderer.render_eye(
            &mesh,
            &test_material(),
            &test_lights(),
            &model,
            &transforms.stereo_view_mat().right,
            &transforms.stereo_projection_mat().right,
            right_vp,
        );

        let mut left_filled = 0usize;
        let mut right_filled = 0usize;
        for y in 0..24 {
            let row = renderer.row(y);
            left_filled += row[..40].iter().filter(|&&c| c != ' ').count();
            right_filled += row[40..].iter().filter(|&&c| c != ' ').count();
        }
        assert!(left_filled > 0, "left eye rendered nothing");
        assert!(right_filled > 0, "right eye rendered nothing");
    }

    #[test]
    fn test_clear_resets_the_buffers() {
        let mut renderer = AsciiRenderer::new(10, 4);
        renderer.rasterize(
            &[(1.0, 1.0, 0.0), (8.0, 1.0, 0.0), (4.0, 3.0, 0.0)],
            Viewport {
                x: 0,
                width: 10,
                height: 4,
            },
            '@',
        );
        assert!(renderer.row(1).iter().any(|&c| c == '@'));

        renderer.clear();
        assert!(renderer.row(1).iter().all(|&c| c == ' '));
    }
}
