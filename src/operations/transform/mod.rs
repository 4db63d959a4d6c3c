mod mirror;
mod scale;
mod translate;

pub use mirror::Mirror;
pub use scale::Scale;
pub use translate::Translate;
