//! SQL Flavor（方言）：控制占位符与标识符 Quote 风格。

use std::fmt;

/// 方言枚举；`bind_vars()` 固定使用 `?`，`bind_vars_for` 才会按方言生成占位符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    PostgreSQL,
    SQLite,
    SQLServer,
    CQL,
    ClickHouse,
    Presto,
    Oracle,
    Informix,
    Doris,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "MySQL",
            Self::PostgreSQL => "PostgreSQL",
            Self::SQLite => "SQLite",
            Self::SQLServer => "SQLServer",
            Self::CQL => "CQL",
            Self::ClickHouse => "ClickHouse",
            Self::Presto => "Presto",
            Self::Oracle => "Oracle",
            Self::Informix => "Informix",
            Self::Doris => "Doris",
        };
        f.write_str(s)
    }
}

impl Flavor {
    /// 为标识符加引号；标识符内的引号字符会被重复一次转义。
    pub fn quote(self, name: &str) -> String {
        let q = self.quote_char();
        let mut buf = String::with_capacity(name.len() + 2);
        buf.push(q);
        for c in name.chars() {
            if c == q {
                buf.push(q);
            }
            buf.push(c);
        }
        buf.push(q);
        buf
    }

    fn quote_char(self) -> char {
        match self {
            Self::MySQL | Self::ClickHouse | Self::Doris => '`',
            Self::PostgreSQL
            | Self::SQLServer
            | Self::SQLite
            | Self::Presto
            | Self::Oracle
            | Self::Informix => '"',
            Self::CQL => '\'',
        }
    }

    /// 第 `index` 个（从 1 开始）参数的占位符。
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Self::MySQL
            | Self::SQLite
            | Self::CQL
            | Self::ClickHouse
            | Self::Presto
            | Self::Informix
            | Self::Doris => "?".to_string(),
            Self::PostgreSQL => format!("${index}"),
            Self::SQLServer => format!("@p{index}"),
            Self::Oracle => format!(":{index}"),
        }
    }

    /// 占位符是否带序号（`$1` / `@p1` / `:1`）。
    pub fn is_positional(self) -> bool {
        matches!(self, Self::PostgreSQL | Self::SQLServer | Self::Oracle)
    }
}
