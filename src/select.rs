//! Selection：按模式（全部 / 排除 / 仅包含）挑选 struct 字段，并生成列名、占位符与参数。
//!
//! 过滤用的字段名与“解析后的列名”做精确、区分大小写的匹配：
//! 字段带有 `col` 覆盖时，必须传 `col` 的值而不是 Rust 字段名。
//!
//! 所有入口只在调用期间借用输入值，不缓存、不修改。

use crate::flavor::Flavor;
use crate::string_builder::{StringBuilder, repeat_string, slice_contains};
use crate::structs::{AsStruct, FieldSource};
use crate::value::SqlValue;

/// 使用方式错误：输入不是 struct，过滤字段不存在，或手写的 `SqlStruct` 漏掉了字段值。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("value is not a struct or pointer to struct")]
    InvalidValue,
    #[error("some fields not found: {}", .0.join(", "))]
    SomeFieldsNotFound(Vec<String>),
    #[error("struct {struct_name} has no value for field {field}")]
    MissingValue {
        struct_name: &'static str,
        field: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    All,
    AllExcept,
    Only,
}

impl Mode {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::AllExcept => "all_except",
            Self::Only => "only",
        }
    }
}

/// 选中的字段：列名与值一一对应，顺序即 struct 的声明顺序。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    fields: Vec<String>,
    args: Vec<SqlValue>,
}

/// 选中 struct 的全部字段。
pub fn all<V: AsStruct + ?Sized>(v: &V) -> Result<Selection, SelectError> {
    select(v, Mode::All, &[] as &[&str])
}

/// 选中除 `names` 之外的全部字段。
///
/// `names` 是解析后的列名（有 `col` 时为 `col` 的值），任一名字不存在即返回
/// `SelectError::SomeFieldsNotFound`。
pub fn all_except<V, I, S>(v: &V, names: I) -> Result<Selection, SelectError>
where
    V: AsStruct + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<S> = names.into_iter().collect();
    select(v, Mode::AllExcept, &names)
}

/// 只选中 `names` 中的字段；输出顺序仍是声明顺序，而不是 `names` 的顺序。
///
/// 名字匹配规则同 [`all_except`]。
pub fn only<V, I, S>(v: &V, names: I) -> Result<Selection, SelectError>
where
    V: AsStruct + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<S> = names.into_iter().collect();
    select(v, Mode::Only, &names)
}

fn select<V, S>(v: &V, mode: Mode, names: &[S]) -> Result<Selection, SelectError>
where
    V: AsStruct + ?Sized,
    S: AsRef<str>,
{
    let Some(src) = v.as_struct() else {
        #[cfg(feature = "tracing")]
        tracing::warn!(target: "fselect", mode = mode.as_str(), "value is not a struct");
        return Err(SelectError::InvalidValue);
    };

    if mode != Mode::All {
        if let Err(e) = check_names(src, names) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "fselect",
                mode = mode.as_str(),
                struct_name = src.struct_name(),
                error = %e,
                "unknown filter fields"
            );
            return Err(e);
        }
    }

    let mut sel = Selection::default();
    for fm in src.fields() {
        let name = fm.resolve_name();
        let included = match mode {
            Mode::All => true,
            Mode::AllExcept => !slice_contains(name, names),
            Mode::Only => slice_contains(name, names),
        };
        if !included {
            continue;
        }
        let Some(value) = src.field_value(fm.name) else {
            let e = SelectError::MissingValue {
                struct_name: src.struct_name(),
                field: fm.name,
            };
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "fselect", mode = mode.as_str(), error = %e, "missing field value");
            return Err(e);
        };
        sel.fields.push(name.to_string());
        sel.args.push(value);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "fselect",
        mode = mode.as_str(),
        struct_name = src.struct_name(),
        fields = sel.fields.len(),
        "selection built"
    );

    Ok(sel)
}

fn check_names<S: AsRef<str>>(src: &dyn FieldSource, names: &[S]) -> Result<(), SelectError> {
    let resolved: Vec<&str> = src.fields().iter().map(|f| f.resolve_name()).collect();
    let mut missing = Vec::new();
    for n in names {
        let n: &str = n.as_ref();
        if !slice_contains(n, &resolved) {
            missing.push(n.to_string());
        }
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SelectError::SomeFieldsNotFound(missing))
    }
}

impl Selection {
    /// 列名（声明顺序）。
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// 列名以 `,` 拼接，例如 `last_name,age`。
    pub fn field_string(&self) -> String {
        self.fields.join(",")
    }

    /// 字段值，顺序与 `fields()` 一致，可直接按位置绑定。
    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    /// 每个字段一个 `?`，以 `,` 拼接；没有字段时为空串。
    pub fn bind_vars(&self) -> String {
        repeat_string("?", ",", self.fields.len())
    }

    /// 用 `field_string()` 与 `bind_vars()` 依次填充模板中的前两个 `%s`（或 `%v`）。
    ///
    /// ```ignore
    /// sel.preparef("INSERT INTO pets (%s) VALUES (%s)")
    /// // INSERT INTO pets (first_name,last_name,age) VALUES (?,?,?)
    /// ```
    ///
    /// `%%` 输出 `%`；多余的 `%s` / `%v` 与其它 `%` 写法原样保留。
    pub fn preparef(&self, template: &str) -> String {
        format_two(template, &self.field_string(), &self.bind_vars())
    }

    /// 按方言生成占位符（PostgreSQL：`$1,$2`；SQLServer：`@p1,@p2`；Oracle：`:1,:2`）。
    pub fn bind_vars_for(&self, flavor: Flavor) -> String {
        if !flavor.is_positional() {
            return self.bind_vars();
        }
        let mut sb = StringBuilder::default();
        sb.write_joined(
            (1..=self.fields.len()).map(|i| flavor.placeholder(i)),
            ",",
        );
        sb.into_string()
    }

    /// 按方言为每个列名加引号后以 `,` 拼接。
    pub fn quoted_field_string(&self, flavor: Flavor) -> String {
        let mut sb = StringBuilder::default();
        sb.write_joined(self.fields.iter().map(|f| flavor.quote(f)), ",");
        sb.into_string()
    }

    /// `preparef` 的方言版本：列名加引号，占位符按方言生成。
    pub fn preparef_for(&self, template: &str, flavor: Flavor) -> String {
        format_two(
            template,
            &self.quoted_field_string(flavor),
            &self.bind_vars_for(flavor),
        )
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// (列名, 值) 对。
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.fields.iter().map(String::as_str).zip(self.args.iter())
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<SqlValue>) {
        (self.fields, self.args)
    }
}

impl IntoIterator for Selection {
    type Item = (String, SqlValue);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<String>, std::vec::IntoIter<SqlValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter().zip(self.args)
    }
}

fn format_two(template: &str, first: &str, second: &str) -> String {
    let mut sb = StringBuilder::with_capacity(template.len() + first.len() + second.len());
    let mut slots = [first, second].into_iter();
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            sb.write_char(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                sb.write_char('%');
            }
            Some(&(verb @ ('s' | 'v'))) => {
                chars.next();
                match slots.next() {
                    Some(v) => sb.write_str(v),
                    None => {
                        sb.write_char('%');
                        sb.write_char(verb);
                    }
                }
            }
            _ => sb.write_char('%'),
        }
    }
    sb.into_string()
}
