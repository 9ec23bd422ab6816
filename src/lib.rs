//! fselect：按 struct 字段生成列名列表、占位符与有序参数，用于拼接 INSERT / SELECT。

pub mod flavor;
pub mod macros;
pub mod select;
pub(crate) mod string_builder;
pub mod structs;
pub mod value;

pub use crate::flavor::Flavor;
pub use crate::select::{SelectError, Selection, all, all_except, only};
pub use crate::structs::{AsStruct, FieldMeta, FieldSource, SqlStruct};
pub use crate::value::SqlValue;
