use thiserror::Error;

/// Errors surfaced by scene setup and asset loading.
///
/// None of these are fatal to a running scene: environment failures fall back
/// to flat lighting and GPU failures leave the controller usable headless.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to decode environment map: {0}")]
    EnvironmentDecode(#[from] image::ImageError),
    #[error("environment map has no pixels")]
    EmptyEnvironment,
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter")]
    Adapter,
    #[error("failed to request GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}
