//! Recursive emptiness used to collapse vacuous decode results to `None`.
//!
//! A value is empty when every scalar is absent or default, every nested
//! value is absent or itself empty, and every collection is empty. Decoders
//! only ever push non-empty values into collections, so a collection's
//! emptiness is just its length.

/// Values that can report whether they carry any usable data.
pub trait IsEmpty {
    fn is_empty(&self) -> bool;
}

impl IsEmpty for String {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl IsEmpty for bool {
    fn is_empty(&self) -> bool {
        false
    }
}

impl IsEmpty for i64 {
    fn is_empty(&self) -> bool {
        false
    }
}

impl IsEmpty for f64 {
    fn is_empty(&self) -> bool {
        false
    }
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty(&self) -> bool {
        self.as_ref().is_none_or(IsEmpty::is_empty)
    }
}

impl<T: IsEmpty> IsEmpty for Box<T> {
    fn is_empty(&self) -> bool {
        T::is_empty(self)
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert!(IsEmpty::is_empty(&None::<String>));
        assert!(IsEmpty::is_empty(&Some(String::new())));
        assert!(!IsEmpty::is_empty(&Some("x".to_string())));
        assert!(!IsEmpty::is_empty(&Some(false)));
        assert!(!IsEmpty::is_empty(&Some(0_i64)));
        assert!(!IsEmpty::is_empty(&Some(0.0_f64)));
    }

    #[test]
    fn test_collections_and_boxes() {
        assert!(IsEmpty::is_empty(&Vec::<String>::new()));
        assert!(!IsEmpty::is_empty(&vec![String::new()]));
        assert!(IsEmpty::is_empty(&Some(Box::new(String::new()))));
        assert!(!IsEmpty::is_empty(&Box::new("x".to_string())));
    }
}
