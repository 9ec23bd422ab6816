//! 字段元数据与解析：为 struct 生成有序字段列表，并给出每个字段的列名。
//!
//! Rust 无运行时反射；这里通过 `sql_struct!` 宏为业务 struct 生成静态字段描述
//! （声明顺序 + 可选的 `col` 覆盖）与按字段名取值的逻辑。

use crate::value::SqlValue;
use std::rc::Rc;
use std::sync::Arc;

/// 单个字段的静态描述。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Rust 字段名（声明时的原样名字）
    pub name: &'static str,
    /// `col` 覆盖的列名
    pub col: Option<&'static str>,
}

impl FieldMeta {
    pub const fn new(name: &'static str, col: Option<&'static str>) -> Self {
        Self { name, col }
    }

    /// 列名：`col` 存在且非空时原样返回，否则返回字段名（不做大小写转换）。
    pub fn resolve_name(&self) -> &'static str {
        match self.col {
            Some(col) if !col.is_empty() => col,
            _ => self.name,
        }
    }
}

/// 由 `sql_struct!` 为业务 struct 实现：提供字段元数据与取值。
pub trait SqlStruct: Sized {
    /// 按声明顺序排列的字段。
    const FIELDS: &'static [FieldMeta];

    /// 读取字段当前值；`rust_field` 不是本 struct 的字段时返回 None。
    ///
    /// FIELDS 中的每个字段都必须返回 Some，否则 selection 返回
    /// `SelectError::MissingValue`。
    fn value_of(&self, rust_field: &str) -> Option<SqlValue>;

    /// 所有字段的值（按 FIELDS 顺序，与 FIELDS 逐项对应）；任一字段取不到值时返回 None。
    fn values(&self) -> Option<Vec<SqlValue>> {
        Self::FIELDS
            .iter()
            .map(|f| self.value_of(f.name))
            .collect()
    }

    /// 所有字段解析后的列名（按 FIELDS 顺序）。
    fn column_names() -> Vec<&'static str> {
        Self::FIELDS.iter().map(FieldMeta::resolve_name).collect()
    }
}

/// `SqlStruct` 的对象安全视图，供 selection 在类型擦除后读取字段。
pub trait FieldSource {
    fn struct_name(&self) -> &'static str;
    fn fields(&self) -> &'static [FieldMeta];
    fn field_value(&self, rust_field: &str) -> Option<SqlValue>;
}

impl<T: SqlStruct> FieldSource for T {
    fn struct_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn fields(&self) -> &'static [FieldMeta] {
        T::FIELDS
    }

    fn field_value(&self, rust_field: &str) -> Option<SqlValue> {
        self.value_of(rust_field)
    }
}

/// 可作为 selection 输入的值：struct 本身，或指向 struct 的一层指针。
///
/// 非 struct（整数、字符串等）与空指针（`None`）返回 None，
/// 对应 `SelectError::InvalidValue`。
pub trait AsStruct {
    fn as_struct(&self) -> Option<&dyn FieldSource>;
}

impl<T: SqlStruct> AsStruct for &T {
    fn as_struct(&self) -> Option<&dyn FieldSource> {
        Some(*self)
    }
}

impl<T: SqlStruct> AsStruct for &mut T {
    fn as_struct(&self) -> Option<&dyn FieldSource> {
        Some(&**self)
    }
}

impl<T: SqlStruct> AsStruct for Box<T> {
    fn as_struct(&self) -> Option<&dyn FieldSource> {
        Some(&**self)
    }
}

impl<T: SqlStruct> AsStruct for Rc<T> {
    fn as_struct(&self) -> Option<&dyn FieldSource> {
        Some(&**self)
    }
}

impl<T: SqlStruct> AsStruct for Arc<T> {
    fn as_struct(&self) -> Option<&dyn FieldSource> {
        Some(&**self)
    }
}

impl<T: SqlStruct> AsStruct for Option<&T> {
    fn as_struct(&self) -> Option<&dyn FieldSource> {
        self.map(|v| v as &dyn FieldSource)
    }
}

impl<T: SqlStruct> AsStruct for Option<Box<T>> {
    fn as_struct(&self) -> Option<&dyn FieldSource> {
        self.as_deref().map(|v| v as &dyn FieldSource)
    }
}

macro_rules! not_a_struct {
    ($($t:ty),+ $(,)?) => {
        $(impl AsStruct for $t {
            fn as_struct(&self) -> Option<&dyn FieldSource> {
                None
            }
        })+
    };
}

not_a_struct!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
    SqlValue,
);

/// 声明业务 struct 的字段（按声明顺序）与可选的 `col` 列名覆盖。
///
/// 用法示例：
///
/// ```ignore
/// struct Pet { first_name: String, nick: String, age: i64 }
///
/// fselect::sql_struct! {
///     impl Pet {
///         first_name: { col: "first" },
///         nick,
///         age,
///     }
/// }
/// ```
///
/// 字段类型需要 `Clone + Into<SqlValue>`。
#[macro_export]
macro_rules! sql_struct {
    (
        impl $ty:ty {
            $(
                $field:ident $( : { col: $col:literal $(,)? } )?
            ),* $(,)?
        }
    ) => {
        impl $crate::structs::SqlStruct for $ty {
            const FIELDS: &'static [$crate::structs::FieldMeta] = &[
                $(
                    $crate::structs::FieldMeta::new(
                        stringify!($field),
                        $crate::__sql_struct_col!($($col)?),
                    )
                ),*
            ];

            fn value_of(&self, rust_field: &str) -> Option<$crate::value::SqlValue> {
                match rust_field {
                    $(
                        stringify!($field) => Some($crate::value::SqlValue::from(
                            ::core::clone::Clone::clone(&self.$field),
                        )),
                    )*
                    _ => None,
                }
            }
        }

        impl $crate::structs::AsStruct for $ty {
            fn as_struct(&self) -> Option<&dyn $crate::structs::FieldSource> {
                Some(self)
            }
        }
    };
}

/// 宏内部 helper：`col:` 为可选参数。
#[doc(hidden)]
#[macro_export]
macro_rules! __sql_struct_col {
    () => {
        None
    };
    ($col:literal) => {
        Some($col)
    };
}
