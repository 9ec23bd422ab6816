//! 字段运行时值：`Selection::args()` 中每个元素的类型。

use std::borrow::Cow;

/// 字段值（按位置绑定到占位符）。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    Bytes(Vec<u8>),
    DateTime(time::OffsetDateTime),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// 字符串值的借用视图；非字符串返回 None。
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! from_signed {
    ($($t:ty),+ $(,)?) => {
        $(impl From<$t> for SqlValue {
            fn from(v: $t) -> Self {
                Self::I64(v as i64)
            }
        })+
    };
}

macro_rules! from_unsigned {
    ($($t:ty),+ $(,)?) => {
        $(impl From<$t> for SqlValue {
            fn from(v: $t) -> Self {
                Self::U64(v as u64)
            }
        })+
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<time::OffsetDateTime> for SqlValue {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

/// `None => Null`，`Some(v) => v.into()`。
impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl PartialEq<&str> for SqlValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for SqlValue {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::SqlValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_option_some_and_none() {
        assert_eq!(SqlValue::from(Some(123_i64)), SqlValue::I64(123));
        assert_eq!(SqlValue::from(None::<i64>), SqlValue::Null);
        assert!(SqlValue::from(None::<String>).is_null());
    }

    #[test]
    fn integers_widen() {
        assert_eq!(SqlValue::from(21_i32), SqlValue::I64(21));
        assert_eq!(SqlValue::from(5_u8), SqlValue::U64(5));
    }

    #[test]
    fn compares_with_strings() {
        let v: SqlValue = String::from("Sky").into();
        assert_eq!(v, "Sky");
        assert_eq!(v, String::from("Sky"));
        assert_ne!(SqlValue::I64(1), "1");
    }

    #[test]
    fn datetime_keeps_value() {
        let dt = time::macros::datetime!(2024-01-02 3:04:05 UTC);
        assert_eq!(SqlValue::from(dt), SqlValue::DateTime(dt));
    }
}
