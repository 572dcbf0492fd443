pub mod gradient;
pub mod scene;
