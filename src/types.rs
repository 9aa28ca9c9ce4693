use crate::camera::FirstPersonCamera;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub fov: f32, // Vertical field of view in degrees
}

impl CameraUniform {
    pub fn new(camera: &FirstPersonCamera, aspect_ratio: f32) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            projection: camera.projection_matrix(aspect_ratio).to_cols_array_2d(),
            position: camera.position().to_array(),
            fov: camera.zoom(),
        }
    }
}
