/// A value read from disk, or the default that replaced it.
///
/// Loaders in this crate never fail the run on a bad input file. They hand
/// back the default instead, and this type keeps the reason around so
/// callers can tell "empty because absent" from "empty because it is empty".
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    Read(T),
    Defaulted { value: T, reason: String },
}

impl<T> Loaded<T> {
    pub fn value(&self) -> &T {
        match self {
            Loaded::Read(value) | Loaded::Defaulted { value, .. } => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Loaded::Read(value) | Loaded::Defaulted { value, .. } => value,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Loaded::Defaulted { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Loaded::Read(_) => None,
            Loaded::Defaulted { reason, .. } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_and_defaulted() {
        let read = Loaded::Read(vec![1, 2]);
        assert!(!read.is_defaulted());
        assert_eq!(read.reason(), None);
        assert_eq!(read.into_inner(), vec![1, 2]);

        let defaulted: Loaded<Vec<i32>> = Loaded::Defaulted { value: Vec::new(), reason: "missing".into() };
        assert!(defaulted.is_defaulted());
        assert_eq!(defaulted.reason(), Some("missing"));
        assert!(defaulted.value().is_empty());
    }
}
