use glquad_core::{DrawCall, Mat4, QuadVertex, Topology, QUAD_VERTICES};
use web_sys::{WebGlBuffer, WebGlUniformLocation, WebGlVertexArrayObject};

use crate::{
    error::Error,
    gl::{buffer_upload_array, Drawable, RenderContext, ShaderProgram, GL},
};

/// The quad's GPU resources: shader program, static vertex buffer and the
/// uniform slots for its transforms and color.
#[derive(Debug)]
pub(crate) struct QuadMesh {
    shader: ShaderProgram,
    vao: WebGlVertexArrayObject,
    vertices: WebGlBuffer,
    uniforms: QuadUniforms,
    fill_color: [f32; 4],
}

#[derive(Debug)]
struct QuadUniforms {
    model_view: WebGlUniformLocation,
    projection: WebGlUniformLocation,
    color: WebGlUniformLocation,
}

impl QuadMesh {
    const FRAGMENT_GLSL: &'static str = include_str!("../../shaders/quad.frag");
    const VERTEX_GLSL: &'static str = include_str!("../../shaders/quad.vert");

    pub(crate) fn new(gl: &GL, fill_color: [f32; 4]) -> Result<Self, Error> {
        let shader = ShaderProgram::create(gl, Self::VERTEX_GLSL, Self::FRAGMENT_GLSL)?;

        let uniforms = QuadUniforms {
            model_view: shader.uniform_location(gl, "u_model_view")?,
            projection: shader.uniform_location(gl, "u_projection")?,
            color: shader.uniform_location(gl, "u_color")?,
        };

        // vertex array object captures the attribute layout of the quad
        let vao = gl.create_vertex_array().ok_or(Error::vertex_array_creation_failed())?;
        gl.bind_vertex_array(Some(&vao));

        let vertices = gl.create_buffer().ok_or(Error::buffer_creation_failed("quad-vertex"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vertices));
        buffer_upload_array(gl, GL::ARRAY_BUFFER, &QUAD_VERTICES, GL::STATIC_DRAW);

        gl.enable_vertex_attrib_array(attrib::POS);
        gl.vertex_attrib_pointer_with_i32(
            attrib::POS,
            QuadVertex::COMPONENTS,
            GL::FLOAT,
            false,
            QuadVertex::STRIDE,
            0,
        );

        // unbind VAO to prevent accidental modification
        gl.bind_vertex_array(None);
        gl.bind_buffer(GL::ARRAY_BUFFER, None);

        Ok(Self {
            shader,
            vao,
            vertices,
            uniforms,
            fill_color,
        })
    }

    /// Uploads the projection matrix. Called once after creation.
    pub(crate) fn upload_projection(&self, gl: &GL, projection: &Mat4) {
        self.shader.use_program(gl);
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.uniforms.projection),
            false,
            projection.as_slice(),
        );
    }

    /// Uploads the model-view matrix to the shader's uniform slot.
    pub(crate) fn upload_model_view(&self, gl: &GL, model_view: &Mat4) {
        self.shader.use_program(gl);
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.uniforms.model_view),
            false,
            model_view.as_slice(),
        );
    }
}

impl Drawable for QuadMesh {
    fn prepare(&self, context: &mut RenderContext) {
        let gl = context.gl;

        self.shader.use_program(gl);
        gl.bind_vertex_array(Some(&self.vao));

        let [r, g, b, a] = self.fill_color;
        gl.uniform4f(Some(&self.uniforms.color), r, g, b, a);
    }

    fn draw(&self, context: &mut RenderContext) {
        let DrawCall { topology, first, count } = context.frame.draw;
        context.gl.draw_arrays(gl_topology(topology), first, count);
    }

    fn cleanup(&self, context: &mut RenderContext) {
        context.gl.bind_vertex_array(None);
    }
}

fn gl_topology(topology: Topology) -> u32 {
    match topology {
        Topology::TriangleStrip => GL::TRIANGLE_STRIP,
    }
}

mod attrib {
    pub const POS: u32 = 0;
}
