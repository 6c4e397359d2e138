pub mod bounds;
pub mod crop;
pub mod mask;
pub mod padding;
pub mod pipeline;
