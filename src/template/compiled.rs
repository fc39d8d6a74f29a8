use log::debug;
use regex::{Captures, Regex};
use std::{collections::HashMap, fmt::Display};

/// Плоский набор значений для подстановки в шаблон.
/// Ключ при отображении даёт имя плейсхолдера.
pub type Values<K> = HashMap<K, String>;

const TOKEN_PATTERN: &str = r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}";

/// Скомпилированный шаблон.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,

    /// Имена плейсхолдеров в порядке их появления в шаблоне.
    placeholders: Vec<String>,
}

impl Template {
    /// Создаёт новый инстанс скомпилированного шаблона.
    pub fn new(raw: String) -> anyhow::Result<Self> {
        let placeholders = scanner::placeholders(&raw)?;

        debug!("Found placeholders {:?}", placeholders);

        Ok(Self { raw, placeholders })
    }

    /// Возвращает список плейсхолдеров, найденных в шаблоне.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Возвращает плейсхолдеры, которых нет в переданном словаре.
    pub fn unknown_placeholders<K: Display>(
        &self,
        vocabulary: impl IntoIterator<Item = K>,
    ) -> Vec<String> {
        let known: Vec<String> = vocabulary.into_iter().map(|k| k.to_string()).collect();

        let mut unknown: Vec<String> = Vec::new();
        for ph in self.placeholders.iter() {
            if !known.contains(ph) && !unknown.contains(ph) {
                unknown.push(ph.clone());
            }
        }
        unknown
    }

    /// Подставляет значения в шаблон.
    pub fn render<K: Display>(&self, values: &Values<K>) -> String {
        render(&self.raw, values)
    }
}

/// Заменяет все вхождения `{{key}}` в шаблоне на соответствующие значения.
///
/// Шаблон просматривается за один проход, поэтому плейсхолдеры внутри
/// подставленных значений не раскрываются. Плейсхолдеры без значения остаются
/// в результате как есть, лишние значения игнорируются. Значения не
/// экранируются.
///
/// Ключом плейсхолдера может быть только идентификатор. Значения с другими
/// ключами никогда не подставляются.
pub fn render<K: Display>(template: &str, values: &Values<K>) -> String {
    let r = match Regex::new(TOKEN_PATTERN) {
        Ok(r) => r,
        Err(_) => return template.to_owned(),
    };

    let lookup: HashMap<String, &str> = values
        .iter()
        .map(|(key, value)| (key.to_string(), value.as_str()))
        .collect();

    r.replace_all(template, |caps: &Captures| match lookup.get(&caps[1]) {
        Some(value) => (*value).to_owned(),
        None => caps[0].to_owned(),
    })
    .into_owned()
}

peg::parser! {
    grammar scanner() for str {
        pub rule placeholders() -> Vec<String>
            = t:(token())* { t.into_iter().flatten().collect() }

        rule token() -> Option<String>
            = p:placeholder() { Some(p) }
            / [_] { None }

        rule placeholder() -> String
            = "{{" n:$(ident()) "}}" { n.to_owned() }

        rule ident()
            = ['a'..='z' | 'A'..='Z' | '_'] ['a'..='z' | 'A'..='Z' | '0'..='9' | '_']*
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&'static str, &str)]) -> Values<&'static str> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn render_replaces_all_occurrences() {
        let actual = render(
            "<b>{{name}}</b> and again {{name}}, price {{price}}",
            &values(&[("name", "Mascaras"), ("price", "453")]),
        );

        assert_eq!(actual, "<b>Mascaras</b> and again Mascaras, price 453");
    }

    #[test]
    fn render_leaves_unknown_placeholder() {
        let actual = render("{{known}} {{unknown}}", &values(&[("known", "1")]));

        assert_eq!(actual, "1 {{unknown}}");
    }

    #[test]
    fn render_ignores_unused_keys() {
        let actual = render("static", &values(&[("unused", "1")]));

        assert_eq!(actual, "static");
    }

    #[test]
    fn render_inserts_values_literally() {
        let actual = render("{{a}}", &values(&[("a", "$1 ${b} \\d+ <i>")]));

        assert_eq!(actual, "$1 ${b} \\d+ <i>");
    }

    #[test]
    fn render_does_not_match_spaced_token() {
        let actual = render("{{ a }}", &values(&[("a", "1")]));

        assert_eq!(actual, "{{ a }}");
    }

    #[test]
    fn render_does_not_expand_tokens_inside_values() {
        let v = values(&[("order_uid", "UID"), ("items_html", "<i>{{order_uid}}</i>")]);

        for _ in 0..50 {
            assert_eq!(
                render("{{order_uid}}|{{items_html}}", &v),
                "UID|<i>{{order_uid}}</i>"
            );
        }
    }

    #[test]
    fn render_is_idempotent_once_resolved() {
        let v = values(&[("a", "first"), ("b", "second")]);
        let template = "<p>{{a}}</p><p>{{b}}</p>";

        let once = render(template, &v);

        assert_eq!(render(&once, &v), once);
    }

    #[test]
    fn render_empty_values() {
        let actual = render("{{a}}", &Values::<&str>::new());

        assert_eq!(actual, "{{a}}");
    }

    #[test]
    fn placeholders() {
        assert_eq!(
            scanner::placeholders(
                r#"
            <div class="order" data-id="{{order_uid}}">
                {{ spaced }} {single} {{}} {{1bad}}
                <span>{{items_count}}</span>{{items_html}}{{order_uid}}
            </div>
            "#
            ),
            Ok(vec![
                "order_uid".to_owned(),
                "items_count".to_owned(),
                "items_html".to_owned(),
                "order_uid".to_owned(),
            ])
        );
    }

    #[test]
    fn placeholders_in_empty_template() {
        assert_eq!(scanner::placeholders(""), Ok(vec![]));
    }

    #[test]
    fn template_unknown_placeholders() {
        let tmpl = Template::new("{{a}}{{b}}{{c}}{{b}}".to_owned()).unwrap();

        assert_eq!(tmpl.unknown_placeholders(["a", "c"]), vec!["b".to_owned()]);
        assert!(tmpl.unknown_placeholders(["a", "b", "c"]).is_empty());
    }

    #[test]
    fn template_render() {
        let tmpl = Template::new("<td>{{item_name}}</td>".to_owned()).unwrap();

        assert_eq!(tmpl.placeholders(), ["item_name".to_owned()]);
        assert_eq!(
            tmpl.render(&values(&[("item_name", "Mascaras")])),
            "<td>Mascaras</td>"
        );
    }
}
