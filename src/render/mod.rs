pub mod frame;
pub mod renderer;

pub use frame::FrameBuffer;
pub use renderer::Renderer;
