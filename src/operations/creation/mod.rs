mod make_box;
mod make_solid;

pub use make_box::MakeBox;
pub use make_solid::MakeSolid;
