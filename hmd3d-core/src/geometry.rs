/// Triangle-soup geometry primitives for the software renderers
use nalgebra::{Point3, Vector3};

/// A vertex with position and outward normal.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }
}

/// A triangle face defined by three vertices.
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Geometric face normal from the winding order.
    pub fn face_normal(&self) -> Vector3<f32> {
        let [a, b, c] = &self.vertices;
        let edge1 = b.position - a.position;
        let edge2 = c.position - a.position;
        edge1.cross(&edge2).normalize()
    }

    /// Face centroid, the shading sample point for flat-shaded rendering.
    pub fn centroid(&self) -> Point3<f32> {
        let [a, b, c] = &self.vertices;
        Point3::from((a.position.coords + b.position.coords + c.position.coords) / 3.0)
    }
}

/// A mesh as a flat list of triangles.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Axis-aligned cube of the given edge length, centered at the origin,
    /// two triangles per face with per-face normals.
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let mut mesh = Self::new();

        // One entry per face: outward normal and the four corners in
        // counter-clockwise order seen from outside.
        let faces: [(Vector3<f32>, [Point3<f32>; 4]); 6] = [
            (
                Vector3::z(),
                [
                    Point3::new(-h, -h, h),
                    Point3::new(h, -h, h),
                    Point3::new(h, h, h),
                    Point3::new(-h, h, h),
                ],
            ),
            (
                -Vector3::z(),
                [
                    Point3::new(h, -h, -h),
                    Point3::new(-h, -h, -h),
                    Point3::new(-h, h, -h),
                    Point3::new(h, h, -h),
                ],
            ),
            (
                Vector3::y(),
                [
                    Point3::new(-h, h, h),
                    Point3::new(h, h, h),
                    Point3::new(h, h, -h),
                    Point3::new(-h, h, -h),
                ],
            ),
            (
                -Vector3::y(),
                [
                    Point3::new(-h, -h, -h),
                    Point3::new(h, -h, -h),
                    Point3::new(h, -h, h),
                    Point3::new(-h, -h, h),
                ],
            ),
            (
                Vector3::x(),
                [
                    Point3::new(h, -h, h),
                    Point3::new(h, -h, -h),
                    Point3::new(h, h, -h),
                    Point3::new(h, h, h),
                ],
            ),
            (
                -Vector3::x(),
                [
                    Point3::new(-h, -h, -h),
                    Point3::new(-h, -h, h),
                    Point3::new(-h, h, h),
                    Point3::new(-h, h, -h),
                ],
            ),
        ];

        for (normal, [a, b, c, d]) in faces {
            let v = |p: Point3<f32>| Vertex::new(p, normal);
            mesh.add_triangle(Triangle::new(v(a), v(b), v(c)));
            mesh.add_triangle(Triangle::new(v(a), v(c), v(d)));
        }

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_twelve_triangles() {
        assert_eq!(Mesh::cube(1.0).triangles.len(), 12);
    }

    #[test]
    fn test_cube_winding_matches_stored_normals() {
        for triangle in &Mesh::cube(2.0).triangles {
            let stored = triangle.vertices[0].normal;
            assert!((triangle.face_normal() - stored).norm() < 1e-6);
        }
    }

    #[test]
    fn test_face_normal_is_unit_length() {
        let triangle = Triangle::new(
            Vertex::new(Point3::origin(), Vector3::z()),
            Vertex::new(Point3::new(2.0, 0.0, 0.0), Vector3::z()),
            Vertex::new(Point3::new(0.0, 2.0, 0.0), Vector3::z()),
        );
        assert!((triangle.face_normal().norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_centroid_averages_the_corners() {
        let triangle = Triangle::new(
            Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::z()),
            Vertex::new(Point3::new(3.0, 0.0, 0.0), Vector3::z()),
            Vertex::new(Point3::new(0.0, 3.0, 0.0), Vector3::z()),
        );
        assert!((triangle.centroid() - Point3::new(1.0, 1.0, 0.0)).norm() < 1e-6);
    }
}
