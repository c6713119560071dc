use crate::anim::Vec3;
use crate::math::{
    axis_angle_matrix, calculate_light_intensity, calculate_normal, edge_function,
    multiply_matrix_vector, shade,
};
use crate::state::CubeState;

/// The fixed axis the cube spins around.
pub const SPIN_AXIS: [f64; 3] = [0.0, 1.0, 1.0];

/// Light source position in world space
const LIGHT_POS: [f64; 3] = [2.0, 2.0, -5.0];

/// Unit cube corner positions
const CUBE_VERTICES: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0], // 0
    [1.0, -1.0, -1.0],  // 1
    [1.0, 1.0, -1.0],   // 2
    [-1.0, 1.0, -1.0],  // 3
    [-1.0, -1.0, 1.0],  // 4
    [1.0, -1.0, 1.0],   // 5
    [1.0, 1.0, 1.0],    // 6
    [-1.0, 1.0, 1.0],   // 7
];

/// Cube faces (each face is defined by 4 vertex indices)
const CUBE_FACES: [(usize, usize, usize, usize); 6] = [
    (0, 1, 2, 3),
    (5, 4, 7, 6),
    (4, 0, 3, 7),
    (1, 5, 6, 2),
    (4, 5, 1, 0),
    (3, 2, 6, 7),
];

/// Vertex with world position, projected screen position, and normal
pub struct Vertex {
    pub position: [f64; 3],
    pub screen_position: [f64; 2],
    pub normal: [f64; 3],
}

/// RGB pixel buffer with a parallel z-buffer
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 3]>,
    depth: Vec<f64>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Framebuffer {
            width,
            height,
            pixels: vec![[0, 0, 0]; width * height],
            depth: vec![f64::INFINITY; width * height],
        }
    }

    /// Reset to black with cleared depth
    pub fn clear(&mut self) {
        self.pixels.fill([0, 0, 0]);
        self.depth.fill(f64::INFINITY);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.pixels[y * self.width + x]
    }
}

/// Rotates the cube to the current angle, accumulates vertex normals, and
/// projects to screen coordinates (orthographic: scale plus center offset).
pub fn project_cube(state: &CubeState, width: usize, height: usize) -> Vec<Vertex> {
    let center = [width as f64 / 2.0, height as f64 / 2.0];
    let scale = (height.min(width) as f64 / 4.0) * state.size;

    let rotation = axis_angle_matrix(&SPIN_AXIS, state.rotation_deg);

    let transformed: Vec<[f64; 3]> = CUBE_VERTICES
        .iter()
        .map(|v| multiply_matrix_vector(&rotation, v))
        .collect();

    // Compute vertex normals by accumulating adjacent face normals
    let mut vertex_normals = vec![[0.0; 3]; transformed.len()];
    for &(a, b, c, d) in CUBE_FACES.iter() {
        let normal = calculate_normal(&transformed[a], &transformed[b], &transformed[c]);
        for &index in &[a, b, c, d] {
            vertex_normals[index][0] += normal[0];
            vertex_normals[index][1] += normal[1];
            vertex_normals[index][2] += normal[2];
        }
    }
    for normal in vertex_normals.iter_mut() {
        let length =
            (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
        normal[0] /= length;
        normal[1] /= length;
        normal[2] /= length;
    }

    transformed
        .iter()
        .zip(vertex_normals.iter())
        .map(|(&position, &normal)| {
            let screen_x = position[0] * scale + center[0];
            let screen_y = position[1] * scale + center[1];
            Vertex {
                position,
                screen_position: [screen_x, screen_y],
                normal,
            }
        })
        .collect()
}

/// Renders the cube for the current state into the framebuffer.
pub fn draw_cube(fb: &mut Framebuffer, state: &CubeState) {
    fb.clear();
    let vertices = project_cube(state, fb.width, fb.height);

    for &(a, b, c, d) in CUBE_FACES.iter() {
        // Each quad face is split into two triangles
        draw_triangle(fb, &vertices[a], &vertices[b], &vertices[c], state.color);
        draw_triangle(fb, &vertices[a], &vertices[c], &vertices[d], state.color);
    }
}

/// Rasterizes one triangle with a depth test and per-pixel diffuse shading
pub fn draw_triangle(fb: &mut Framebuffer, v0: &Vertex, v1: &Vertex, v2: &Vertex, color: Vec3) {
    if fb.width == 0 || fb.height == 0 {
        return;
    }

    // Bounding box of the triangle, clipped to the buffer
    let min_x = v0.screen_position[0]
        .min(v1.screen_position[0])
        .min(v2.screen_position[0])
        .floor()
        .max(0.0) as usize;
    let max_x = v0.screen_position[0]
        .max(v1.screen_position[0])
        .max(v2.screen_position[0])
        .ceil()
        .min(fb.width as f64 - 1.0) as usize;
    let min_y = v0.screen_position[1]
        .min(v1.screen_position[1])
        .min(v2.screen_position[1])
        .floor()
        .max(0.0) as usize;
    let max_y = v0.screen_position[1]
        .max(v1.screen_position[1])
        .max(v2.screen_position[1])
        .ceil()
        .min(fb.height as f64 - 1.0) as usize;

    let area = edge_function(&v0.screen_position, &v1.screen_position, &v2.screen_position);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = [x as f64 + 0.5, y as f64 + 0.5];

            let w0 = edge_function(&v1.screen_position, &v2.screen_position, &p);
            let w1 = edge_function(&v2.screen_position, &v0.screen_position, &p);
            let w2 = edge_function(&v0.screen_position, &v1.screen_position, &p);

            // Inside test doubles as backface culling: back faces wind the
            // other way and never satisfy all three.
            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                let w0 = w0 / area;
                let w1 = w1 / area;
                let w2 = w2 / area;

                // Interpolate position
                let px3d = v0.position[0] * w0 + v1.position[0] * w1 + v2.position[0] * w2;
                let py3d = v0.position[1] * w0 + v1.position[1] * w1 + v2.position[1] * w2;
                let pz3d = v0.position[2] * w0 + v1.position[2] * w1 + v2.position[2] * w2;

                // Depth test
                let offset = y * fb.width + x;
                if pz3d < fb.depth[offset] {
                    fb.depth[offset] = pz3d;

                    // Interpolate normal
                    let nx = v0.normal[0] * w0 + v1.normal[0] * w1 + v2.normal[0] * w2;
                    let ny = v0.normal[1] * w0 + v1.normal[1] * w1 + v2.normal[1] * w2;
                    let nz = v0.normal[2] * w0 + v1.normal[2] * w1 + v2.normal[2] * w2;
                    let length = (nx * nx + ny * ny + nz * nz).sqrt();
                    let normal = [nx / length, ny / length, nz / length];

                    let intensity =
                        calculate_light_intensity(&normal, &[px3d, py3d, pz3d], &LIGHT_POS);

                    fb.pixels[offset] = shade(color, intensity);
                }
            }
        }
    }
}
