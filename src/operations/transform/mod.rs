mod rotate;
mod scale;
mod translate;

pub use rotate::RotateObstacle;
pub use scale::ScaleObstacle;
pub use translate::TranslateObstacle;
