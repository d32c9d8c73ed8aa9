pub mod color;
pub mod gamma;
pub mod tonemap;
