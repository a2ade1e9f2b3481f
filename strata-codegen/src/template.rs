//! The template environment and its helper functions.
//!
//! Templates use Jinja syntax (via `minijinja`). Besides the engine's
//! built-ins, a [`HelperSet`] decides which strata helpers are available.
//! Every helper except `makeSlice` is both a filter and a function, so
//! `{{ name | pascal }}` and `{{ pascal(name) }}` are the same.

use std::{collections::BTreeSet, fmt, path::Path};

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value, value::Rest};
use serde::Serialize;
use strata_core::{
    replace_n, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case, to_title_case,
};

use crate::{Error, Result};

/// A helper that can be made available to templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Helper {
    /// Upper-case the first letter of every word.
    Title,
    Pascal,
    Camel,
    Snake,
    Kebab,
    ToLower,
    ToUpper,
    /// `replace(s, old, new, n)`: replace the first `n` matches, all when
    /// `n` is negative or omitted.
    Replace,
    /// `join(seq, sep)`
    Join,
    /// `dec(n)` is `n - 1`, saturating at `i64::MIN`.
    Dec,
    /// `makeSlice(a, b, ...)` builds a list from its arguments.
    MakeSlice,
}

impl Helper {
    pub const ALL: [Helper; 11] = [
        Helper::Title,
        Helper::Pascal,
        Helper::Camel,
        Helper::Snake,
        Helper::Kebab,
        Helper::ToLower,
        Helper::ToUpper,
        Helper::Replace,
        Helper::Join,
        Helper::Dec,
        Helper::MakeSlice,
    ];

    /// Name templates call the helper by.
    pub fn name(self) -> &'static str {
        match self {
            Helper::Title => "title",
            Helper::Pascal => "pascal",
            Helper::Camel => "camel",
            Helper::Snake => "snake",
            Helper::Kebab => "kebab",
            Helper::ToLower => "toLower",
            Helper::ToUpper => "toUpper",
            Helper::Replace => "replace",
            Helper::Join => "join",
            Helper::Dec => "dec",
            Helper::MakeSlice => "makeSlice",
        }
    }

    fn register(self, env: &mut Environment<'static>) {
        let name = self.name();
        macro_rules! filter_and_function {
            ($f:expr) => {{
                env.add_filter(name, $f);
                env.add_function(name, $f);
            }};
        }

        match self {
            Helper::Title => filter_and_function!(title),
            Helper::Pascal => filter_and_function!(pascal),
            Helper::Camel => filter_and_function!(camel),
            Helper::Snake => filter_and_function!(snake),
            Helper::Kebab => filter_and_function!(kebab),
            Helper::ToLower => filter_and_function!(to_lower),
            Helper::ToUpper => filter_and_function!(to_upper),
            Helper::Replace => filter_and_function!(replace),
            Helper::Join => filter_and_function!(join),
            Helper::Dec => filter_and_function!(dec),
            Helper::MakeSlice => env.add_function(name, make_slice),
        }
    }
}

impl fmt::Display for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn title(s: &str) -> String {
    to_title_case(s)
}

fn pascal(s: &str) -> String {
    to_pascal_case(s)
}

fn camel(s: &str) -> String {
    to_camel_case(s)
}

fn snake(s: &str) -> String {
    to_snake_case(s)
}

fn kebab(s: &str) -> String {
    to_kebab_case(s)
}

fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

fn replace(s: &str, old: &str, new: &str, n: Option<i64>) -> String {
    replace_n(s, old, new, n.unwrap_or(-1))
}

fn join(seq: Vec<Value>, sep: Option<&str>) -> String {
    seq.iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(sep.unwrap_or(""))
}

fn dec(n: i64) -> i64 {
    n.saturating_sub(1)
}

fn make_slice(args: Rest<Value>) -> Value {
    Value::from(args.0)
}

/// The helpers installed into a [`TemplateEnv`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelperSet {
    helpers: BTreeSet<Helper>,
}

impl HelperSet {
    /// No strata helpers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every helper.
    pub fn standard() -> Self {
        Helper::ALL.into_iter().collect()
    }

    pub fn with(mut self, helper: Helper) -> Self {
        self.helpers.insert(helper);
        self
    }

    pub fn without(mut self, helper: Helper) -> Self {
        self.helpers.remove(&helper);
        self
    }

    pub fn contains(&self, helper: Helper) -> bool {
        self.helpers.contains(&helper)
    }

    pub fn iter(&self) -> impl Iterator<Item = Helper> + '_ {
        self.helpers.iter().copied()
    }
}

impl FromIterator<Helper> for HelperSet {
    fn from_iter<I: IntoIterator<Item = Helper>>(iter: I) -> Self {
        Self {
            helpers: iter.into_iter().collect(),
        }
    }
}

/// Named templates plus the helpers they can call.
///
/// Output is never escaped, trailing newlines are kept, and referencing an
/// undefined value is an error rather than an empty string.
pub struct TemplateEnv {
    env: Environment<'static>,
}

impl TemplateEnv {
    pub fn new(helpers: &HelperSet) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        for helper in helpers.iter() {
            helper.register(&mut env);
        }
        Self { env }
    }

    /// Compile `source` under `name`, replacing any template with that name.
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        self.env
            .add_template_owned(name.clone(), source.into())
            .map_err(|e| Error::TemplateLoad {
                template: name,
                source: e.into(),
            })
    }

    /// Read and compile a template file, registered under `name`.
    ///
    /// Does nothing when `name` is already registered.
    pub fn load_file(&mut self, name: &str, path: &Path) -> Result<()> {
        if self.has_template(name) {
            return Ok(());
        }
        let source = std::fs::read_to_string(path).map_err(|e| Error::TemplateLoad {
            template: name.to_string(),
            source: e.into(),
        })?;
        log::debug!("loaded template '{}' from {}", name, path.display());
        self.add_template(name, source)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Render the template registered as `name`.
    ///
    /// `entity` describes what is being rendered, for error messages.
    pub fn render(&self, name: &str, entity: &str, data: impl Serialize) -> Result<String> {
        let template_error = |source| Error::Template {
            template: name.to_string(),
            entity: entity.to_string(),
            source,
        };
        self.env
            .get_template(name)
            .map_err(template_error)?
            .render(data)
            .map_err(template_error)
    }

    /// Render an output path template given inline.
    pub fn render_path(
        &self,
        template: &str,
        entity: &str,
        data: impl Serialize,
    ) -> Result<String> {
        self.env
            .render_str(template, data)
            .map_err(|source| Error::PathRender {
                template: template.to_string(),
                entity: entity.to_string(),
                source,
            })
    }
}

impl fmt::Debug for TemplateEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.env.templates().map(|(name, _)| name).collect();
        f.debug_struct("TemplateEnv")
            .field("templates", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use minijinja::context;

    use super::*;

    fn render(source: &str, data: impl Serialize) -> Result<String> {
        let mut env = TemplateEnv::new(&HelperSet::standard());
        env.add_template("t", source)?;
        env.render("t", "test", data)
    }

    #[test]
    fn test_case_helpers() {
        let out = render(
            "{{ n | pascal }} {{ camel(n) }} {{ n | snake }} {{ kebab(n) }} {{ n | toUpper }} {{ toLower('ABC') }}",
            context! { n => "user_accounts" },
        )
        .unwrap();
        assert_eq!(
            out,
            "UserAccounts userAccounts user_accounts user-accounts USER_ACCOUNTS abc"
        );
    }

    #[test]
    fn test_title_keeps_rest_of_word() {
        let out = render("{{ title('sql.nullString hello') }}", ()).unwrap();
        assert_eq!(out, "Sql.NullString Hello");
    }

    #[test]
    fn test_replace_counts() {
        let out = render(
            "{{ replace('a.b.c', '.', '', 1) }}|{{ 'a.b.c' | replace('.', '-', -1) }}|{{ replace('a.b.c', '.', '') }}",
            (),
        )
        .unwrap();
        assert_eq!(out, "ab.c|a-b-c|abc");
    }

    #[test]
    fn test_join_dec_and_make_slice() {
        let out = render(
            "{{ join(makeSlice('int', 'text', 3), ', ') }} {{ dec(3) }} {{ ['x', 'y'] | join('+') }}",
            (),
        )
        .unwrap();
        assert_eq!(out, "int, text, 3 2 x+y");
    }

    #[test]
    fn test_dec_detects_last_element() {
        let out = render(
            "{% set last = dec(cols | length) %}{% for c in cols %}{{ c }}{% if loop.index0 != last %},{% endif %}{% endfor %}",
            context! { cols => vec!["a", "b", "c"] },
        )
        .unwrap();
        assert_eq!(out, "a,b,c");
    }

    #[test]
    fn test_dec_saturates() {
        let out = render("{{ dec(n) }} {{ n | dec }}", context! { n => i64::MIN }).unwrap();
        assert_eq!(out, format!("{0} {0}", i64::MIN));
    }

    #[test]
    fn test_make_slice_is_not_a_filter() {
        let err = render("{{ 'a' | makeSlice }}", ()).unwrap_err();
        assert!(matches!(
            err,
            Error::Template { .. } | Error::TemplateLoad { .. }
        ));
    }

    #[test]
    fn test_helpers_outside_set_are_missing() {
        let mut env = TemplateEnv::new(&HelperSet::empty().with(Helper::Snake));
        env.add_template("t", "{{ pascal('a_b') }}").unwrap();

        assert!(env.render("t", "test", ()).is_err());
        assert!(HelperSet::standard().without(Helper::Dec).contains(Helper::Join));
        assert!(!HelperSet::standard().without(Helper::Dec).contains(Helper::Dec));
    }

    #[test]
    fn test_strict_undefined() {
        let err = render("{{ table.nope }}", context! { table => context! { name => "x" } })
            .unwrap_err();
        match err {
            Error::Template {
                template, entity, ..
            } => {
                assert_eq!(template, "t");
                assert_eq!(entity, "test");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_no_escaping_and_trailing_newline() {
        let out = render("<{{ s }}>\n", context! { s => "a&b" }).unwrap();
        assert_eq!(out, "<a&b>\n");
    }

    #[test]
    fn test_syntax_error_is_load_error() {
        let mut env = TemplateEnv::new(&HelperSet::standard());
        let err = env.add_template("broken", "{% for %}").unwrap_err();
        assert!(matches!(err, Error::TemplateLoad { template, .. } if template == "broken"));
    }

    #[test]
    fn test_render_path() {
        let env = TemplateEnv::new(&HelperSet::standard());
        let path = env
            .render_path(
                "{{ schema }}/{{ table | snake }}.rs",
                "table 'main.UserAccounts'",
                context! { schema => "main", table => "UserAccounts" },
            )
            .unwrap();
        assert_eq!(path, "main/user_accounts.rs");

        let err = env
            .render_path("{{ missing }}.rs", "schema 'main'", context! { schema => "main" })
            .unwrap_err();
        assert!(matches!(err, Error::PathRender { .. }));
    }
}
