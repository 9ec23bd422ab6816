//! 字符串拼接小工具：逗号拼接、重复拼接与成员判断。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            buf: String::with_capacity(n),
        }
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub(crate) fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// 依次写入 `items`，元素之间写入 `sep`（空元素同样保留）。
    pub(crate) fn write_joined<I, S>(&mut self, items: I, sep: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, s) in items.into_iter().enumerate() {
            if i > 0 {
                self.buf.push_str(sep);
            }
            self.buf.push_str(s.as_ref());
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

/// `s` 是否出现在 `slice` 中（精确匹配，区分大小写）。
pub(crate) fn slice_contains<S: AsRef<str>>(s: &str, slice: &[S]) -> bool {
    slice.iter().any(|item| item.as_ref() == s)
}

/// 把 `token` 重复 `n` 次并以 `sep` 连接；`n == 0` 返回空串。
pub(crate) fn repeat_string(token: &str, sep: &str, n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    let mut sb = StringBuilder::with_capacity(n * (token.len() + sep.len()));
    sb.write_joined(std::iter::repeat_n(token, n), sep);
    sb.into_string()
}
