/// Data model for DiskTally: entry records, colours and size formatting.
pub mod file_record;
pub mod palette;
pub mod size;

pub use file_record::{extension_of, FileKind, FileRecord};
pub use palette::{classify, kind_style, size_color, Color, KindStyle};
