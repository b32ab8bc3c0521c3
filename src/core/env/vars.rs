use super::EnvError;
use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub name: Box<str>,
    pub value: Box<str>,
}

/// Shell-local variables, kept in first-assignment order.
#[derive(Clone, Debug, Default)]
pub struct ShellVars {
    vars: Vec<Variable>,
}

impl ShellVars {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Inserts a new variable at the end, or updates an existing one in place.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name.is_empty() {
            return Err(EnvError::EmptyName);
        }

        match self.vars.iter_mut().find(|v| &*v.name == name) {
            Some(var) => var.value = value.into(),
            None => self.vars.push(Variable {
                name: name.into(),
                value: value.into(),
            }),
        }

        log::debug!("local {}={}", name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|v| &*v.name == name)
            .map(|v| v.value.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Resolves `$NAME`: process environment first, then shell variables,
    /// then the empty string. Anything not starting with `$` is returned as is.
    pub fn expand_value<'a>(&self, value: &'a str) -> Cow<'a, str> {
        let Some(name) = value.strip_prefix('$') else {
            return Cow::Borrowed(value);
        };

        if let Some(env_value) = lookup_env(name) {
            return Cow::Owned(env_value);
        }

        Cow::Owned(self.get(name).unwrap_or_default().to_owned())
    }
}

fn lookup_env(name: &str) -> Option<String> {
    if name.is_empty() || name.contains(['=', '\0']) {
        return None;
    }
    std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
}
