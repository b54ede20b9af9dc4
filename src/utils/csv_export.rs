// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::borrow::Cow;

/// 按 RFC 4180 转义单个字段
///
/// 含逗号、双引号或换行的字段用双引号包裹，内部双引号写两次
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// 内存中的CSV文档，行以 CRLF 结尾
#[derive(Debug, Default)]
pub struct CsvWriter {
    buffer: String,
    rows: usize,
}

impl CsvWriter {
    pub fn with_header(header: &[&str]) -> Self {
        let mut writer = Self::default();
        writer.write_record(header.iter().copied());
        writer
    }

    pub fn write_record<'a, I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                self.buffer.push(',');
            }
            self.buffer.push_str(&escape_field(field));
        }
        self.buffer.push_str("\r\n");
        self.rows += 1;
    }

    /// 已写入的行数（包含表头）
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_are_not_quoted() {
        assert_eq!(escape_field("Bandung"), "Bandung");
        assert!(matches!(escape_field("Bandung"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_special_characters_are_quoted() {
        assert_eq!(escape_field("Sato, Manuk"), "\"Sato, Manuk\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_writer_uses_crlf_rows() {
        let mut writer = CsvWriter::with_header(&["a", "b"]);
        writer.write_record(["1", "x,y"]);

        assert_eq!(writer.rows(), 2);
        assert_eq!(writer.finish(), "a,b\r\n1,\"x,y\"\r\n");
    }
}
