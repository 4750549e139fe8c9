//! Экранирование по контекстам вставки.
//!
//! Каждый контекст документа имеет ровно одну функцию:
//! - текст внутри элемента: [`html_text`]
//! - значение атрибута в двойных кавычках: [`html_attr`]
//! - строковый литерал JS в одинарных кавычках: [`script_string`]
//! - аргумент обработчика `onclick="f('...')"`: [`handler_arg`] = `script_string(html_attr(..))`
//! - JSON внутри `<script>`: [`script_json`]
//!
//! `html_attr` не трогает `'` и `\`, а `script_string` не трогает `& < > "`,
//! поэтому два прохода в `handler_arg` не мешают друг другу: браузер сначала
//! раскодирует сущности атрибута, и JS получает корректно экранированный литерал.

use std::borrow::Cow;

/// Текст между тегами: `&`, `<`, `>`
pub fn html_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Значение атрибута в двойных кавычках: `&`, `<`, `>`, `"`
pub fn html_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Содержимое JS-литерала в одинарных кавычках.
/// Сначала обратная косая черта, затем кавычка; переводы строк тоже экранируются.
pub fn script_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}

/// Аргумент inline-обработчика: HTML-экранирование, затем JS-экранирование
pub fn handler_arg(s: &str) -> String {
    script_string(&html_attr(s))
}

/// JSON для `<script type="application/json">`: `<`, `>`, `&` заменяются
/// на `\u003c`, `\u003e`, `\u0026`, чтобы `</script>` не закрыл блок раньше времени
pub fn script_json(value: &serde_json::Value) -> String {
    value
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NASTY: &str = r#"Bota <b>"X"</b> & O'Neil \ 50%"#;

    #[test]
    fn test_html_text_round_trip() {
        let escaped = html_text(NASTY);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert_eq!(html_escape::decode_html_entities(&escaped), NASTY);
    }

    #[test]
    fn test_html_attr_round_trip() {
        let escaped = html_attr(NASTY);
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('<'));
        assert_eq!(html_escape::decode_html_entities(&escaped), NASTY);
    }

    #[test]
    fn test_script_string_backslash_before_quote() {
        assert_eq!(script_string(r"a\'b"), r"a\\\'b");
        assert_eq!(script_string("l1\nl2"), "l1\\nl2");
    }

    /// Имитирует разбор `'...'` в JS: возвращает значение литерала или `None`,
    /// если литерал закончился раньше конца строки
    fn unquote_js(literal: &str) -> Option<String> {
        let mut out = String::new();
        let mut chars = literal.chars();
        while let Some(ch) = chars.next() {
            match ch {
                '\\' => match chars.next()? {
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    other => out.push(other),
                },
                '\'' => return None,
                other => out.push(other),
            }
        }
        Some(out)
    }

    #[test]
    fn test_handler_arg_survives_both_parsers() {
        let arg = handler_arg(NASTY);

        // Inside a double-quoted attribute: no raw quote may end the attribute
        assert!(!arg.contains('"'));
        assert!(!arg.contains('<'));

        // Browser decodes attribute entities, then JS parses the literal
        let decoded = html_escape::decode_html_entities(&arg);
        assert_eq!(unquote_js(&decoded).as_deref(), Some(NASTY));
    }

    #[test]
    fn test_script_json_cannot_close_script() {
        let value = serde_json::json!({ "storeName": "</script><script>alert(1)</script> & co" });
        let json = script_json(&value);
        assert!(!json.contains("</script>"));
        assert!(!json.contains('&'));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }
}
