// Used in both Token and Ast

use std::rc::Rc;

/// A variable name: one letter, optionally followed by one digit.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Ident(Rc<str>);

impl Ident {
    pub fn new(s: &str) -> Option<Ident> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), None, None) if a.is_ascii_uppercase() => Some(Ident(s.into())),
            (Some(a), Some(d), None) if a.is_ascii_uppercase() && d.is_ascii_digit() => {
                Some(Ident(s.into()))
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the plain single-letter names usable after `FN`.
    pub fn is_letter(&self) -> bool {
        self.0.len() == 1
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(Ident::new("A").is_some());
        assert!(Ident::new("Z9").is_some());
        assert!(Ident::new("B1").map_or(false, |i| !i.is_letter()));
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(Ident::new(""), None);
        assert_eq!(Ident::new("AB"), None);
        assert_eq!(Ident::new("A12"), None);
        assert_eq!(Ident::new("1A"), None);
        assert_eq!(Ident::new("a"), None);
    }
}
