//! Flag expansion for `vzctl` option sets.
//!
//! `vzctl` takes `--name [value]` flags; this module maps typed option
//! values onto that surface. Values are interpolated verbatim — no shell
//! quoting or escaping is applied, so a value containing shell
//! metacharacters will be interpreted by the remote shell. Callers own
//! that hazard.

/// Value attached to a single `vzctl` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptValue {
    /// Presence flag: `true` expands to `--name`, `false` to nothing.
    Switch(bool),
    /// Single-valued flag: expands to `--name value`.
    Scalar(String),
    /// Repeated flag: expands to `--name elem` once per element, in order.
    List(Vec<String>),
}

/// Insertion-ordered set of `vzctl` options.
///
/// Order is preserved because it is part of the expansion contract:
/// flags land on the command line in the order they were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VzOptions {
    opts: Vec<(String, OptValue)>,
}

impl VzOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a presence flag. A `false` switch is recorded but expands
    /// to nothing.
    pub fn push_switch(&mut self, name: impl Into<String>, on: bool) {
        self.opts.push((name.into(), OptValue::Switch(on)));
    }

    /// Pushes a single-valued flag.
    pub fn push_scalar(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.opts.push((name.into(), OptValue::Scalar(value.into())));
    }

    /// Pushes a single-valued flag if the value is present; `None` is
    /// omitted entirely.
    pub fn push_scalar_opt(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.push_scalar(name, value);
        }
    }

    /// Pushes a repeated flag. An empty list expands to nothing.
    pub fn push_list<I, S>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.push((
            name.into(),
            OptValue::List(values.into_iter().map(Into::into).collect()),
        ));
    }

    /// Appends all options from another set, preserving order.
    pub fn extend(&mut self, other: Self) {
        self.opts.extend(other.opts);
    }

    /// Whether no options have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }

    /// Expands the option set into command-line tokens.
    #[must_use]
    pub fn expand(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        for (name, value) in &self.opts {
            match value {
                OptValue::Switch(true) => tokens.push(format!("--{name}")),
                OptValue::Switch(false) => {}
                OptValue::Scalar(v) => {
                    tokens.push(format!("--{name}"));
                    tokens.push(v.clone());
                }
                OptValue::List(values) => {
                    for v in values {
                        tokens.push(format!("--{name}"));
                        tokens.push(v.clone());
                    }
                }
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_on_expands_to_bare_flag() {
        let mut opts = VzOptions::new();
        opts.push_switch("force", true);
        assert_eq!(opts.expand(), vec!["--force"]);
    }

    #[test]
    fn switch_off_expands_to_nothing() {
        let mut opts = VzOptions::new();
        opts.push_switch("wait", false);
        assert!(opts.expand().is_empty());
    }

    #[test]
    fn absent_scalar_expands_to_nothing() {
        let mut opts = VzOptions::new();
        opts.push_scalar_opt("hostname", None::<String>);
        assert!(opts.expand().is_empty());
        assert!(opts.is_empty());
    }

    #[test]
    fn scalar_expands_to_flag_and_value() {
        let mut opts = VzOptions::new();
        opts.push_scalar("hostname", "web01");
        assert_eq!(opts.expand(), vec!["--hostname", "web01"]);
    }

    #[test]
    fn list_expands_to_repeated_flag_in_order() {
        let mut opts = VzOptions::new();
        opts.push_list("x", ["a", "b"]);
        assert_eq!(opts.expand(), vec!["--x", "a", "--x", "b"]);
    }

    #[test]
    fn expansion_preserves_push_order() {
        let mut opts = VzOptions::new();
        opts.push_scalar("ostemplate", "debian-7.0-x86_64");
        opts.push_switch("force", true);
        opts.push_scalar("hostname", "web01");
        assert_eq!(
            opts.expand(),
            vec!["--ostemplate", "debian-7.0-x86_64", "--force", "--hostname", "web01"]
        );
    }

    #[test]
    fn extend_appends_after_existing_options() {
        let mut opts = VzOptions::new();
        opts.push_switch("force", true);
        let mut extra = VzOptions::new();
        extra.push_scalar("diskspace", "10G");
        opts.extend(extra);
        assert_eq!(opts.expand(), vec!["--force", "--diskspace", "10G"]);
    }

    #[test]
    fn values_are_not_quoted_or_escaped() {
        let mut opts = VzOptions::new();
        opts.push_scalar("hostname", "a;rm -rf /");
        assert_eq!(opts.expand(), vec!["--hostname", "a;rm -rf /"]);
    }
}
