pub mod compose;
pub mod decode;
