//! 宏集合：为 selection 入口提供不定长参数的调用方式。
//! `only!(pet, "age", "last_name")` 等价于 `only(&pet, ["age", "last_name"])`。

/// 选中全部字段。
#[macro_export]
macro_rules! all {
    ($value:expr $(,)?) => {
        $crate::select::all(&$value)
    };
}

/// 选中除给定列名之外的全部字段。
#[macro_export]
macro_rules! all_except {
    ($value:expr $(, $name:expr)* $(,)?) => {
        $crate::select::all_except(&$value, $crate::__collect_names!($($name),*))
    };
}

/// 只选中给定列名的字段（仍按声明顺序输出）。
#[macro_export]
macro_rules! only {
    ($value:expr $(, $name:expr)* $(,)?) => {
        $crate::select::only(&$value, $crate::__collect_names!($($name),*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __collect_names {
    () => {
        Vec::<String>::new()
    };
    ($($name:expr),+) => {{
        let mut names = Vec::<String>::new();
        $(
            names.push(::core::convert::AsRef::<str>::as_ref(&$name).to_string());
        )+
        names
    }};
}
