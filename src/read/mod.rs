mod ext;

pub use ext::{ReadBytesExt, decode_ascii};
