//! Membership rules
//!
//! Elements are compared by equality. An empty set makes [`In`] reject
//! everything and [`NotIn`] accept everything.

use crate::foundation::RuleError;

crate::rule! {
    /// Accepts only values contained in `elements`.
    pub In<T: PartialEq> { elements: Vec<T> } for T;
    rule(self, input) { self.elements.contains(input) }
    failure() { RuleError::new("in", "must be a valid value") }
    fn is_in(elements: Vec<T>);
}

crate::rule! {
    /// Rejects values contained in `elements`.
    pub NotIn<T: PartialEq> { elements: Vec<T> } for T;
    rule(self, input) { !self.elements.contains(input) }
    failure() { RuleError::new("not_in", "must not be in list") }
    fn not_in(elements: Vec<T>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;

    #[test]
    fn test_in() {
        let rule = is_in(vec!["GET", "POST"]);
        assert!(rule.validate(&"GET").is_ok());

        let error = rule.validate(&"PATCH").unwrap_err();
        assert_eq!(error.code(), Some("in"));
        assert_eq!(error.to_string(), "must be a valid value");
    }

    #[test]
    fn test_not_in() {
        let rule = not_in(vec![0, 1]);
        assert!(rule.validate(&2).is_ok());
        assert_eq!(rule.validate(&1).unwrap_err().code(), Some("not_in"));
    }

    #[test]
    fn test_empty_set() {
        assert!(is_in(Vec::<u8>::new()).validate(&0).is_err());
        assert!(not_in(Vec::<u8>::new()).validate(&0).is_ok());
    }
}
