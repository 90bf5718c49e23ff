use levenshtein::levenshtein;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating a formula, containing the values of its variables.
///
/// The constants `PI` and `E` are resolved when a formula is parsed, so a new context is empty.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Returns all variables in the context with a name similar to the given name, sorted by
    /// name.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(|n| n.as_str())
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn add_and_get() {
        let mut ctxt = Ctxt::new();
        assert_eq!(ctxt.get_var("x"), None);

        ctxt.add_var("x", 2.0);
        ctxt.add_var("x", 3.0);
        assert_eq!(ctxt.get_var("x"), Some(3.0));
        assert_eq!(ctxt.get_vars().len(), 1);
    }

    #[test]
    fn similar_names() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x1", 0.0);
        ctxt.add_var("x2", 0.0);
        ctxt.add_var("theta", 0.0);
        assert_eq!(ctxt.get_similar_vars("x"), vec!["x1", "x2"]);
        assert_eq!(ctxt.get_similar_vars("beta"), Vec::<&str>::new());
    }
}
