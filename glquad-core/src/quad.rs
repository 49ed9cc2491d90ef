/// A single 2D vertex position.
///
/// `#[repr(C)]` so a slice of vertices can be uploaded to a vertex buffer
/// as tightly packed `vec2` attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

impl QuadVertex {
    pub const COMPONENTS: i32 = 2;
    pub const STRIDE: i32 = size_of::<QuadVertex>() as i32;

    const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }
}

/// Unit quad centered on the origin, ordered for a triangle strip.
#[rustfmt::skip]
pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex::new(-0.5, -0.5),
    QuadVertex::new( 0.5, -0.5),
    QuadVertex::new(-0.5,  0.5),
    QuadVertex::new( 0.5,  0.5),
];

/// Primitive topology of a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    TriangleStrip,
}

/// Parameters of a non-indexed draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub topology: Topology,
    pub first: i32,
    pub count: i32,
}

impl DrawCall {
    /// The draw call covering [`QUAD_VERTICES`].
    pub const QUAD: DrawCall = DrawCall {
        topology: Topology::TriangleStrip,
        first: 0,
        count: QUAD_VERTICES.len() as i32,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_vertices() {
        let positions: Vec<[f32; 2]> = QUAD_VERTICES.iter().map(|v| v.position).collect();
        assert_eq!(positions, vec![[-0.5, -0.5], [0.5, -0.5], [-0.5, 0.5], [0.5, 0.5]]);
    }

    #[test]
    fn test_vertex_layout_is_packed() {
        assert_eq!(QuadVertex::STRIDE, 8);
        assert_eq!(size_of_val(&QUAD_VERTICES), 32);
    }

    #[test]
    fn test_quad_draw_call() {
        assert_eq!(DrawCall::QUAD.topology, Topology::TriangleStrip);
        assert_eq!(DrawCall::QUAD.first, 0);
        assert_eq!(DrawCall::QUAD.count, 4);
    }
}
