//! Conditional class list construction.

/// A value that may contribute a class name to a class list.
pub trait IntoClass {
    /// Converts the value into an optional class name.
    fn into_class(self) -> Option<String>;
}

impl IntoClass for &str {
    fn into_class(self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_owned())
    }
}

impl IntoClass for String {
    fn into_class(self) -> Option<String> {
        (!self.is_empty()).then_some(self)
    }
}

impl IntoClass for Option<String> {
    fn into_class(self) -> Option<String> {
        self.and_then(IntoClass::into_class)
    }
}

impl IntoClass for Option<&str> {
    fn into_class(self) -> Option<String> {
        self.and_then(IntoClass::into_class)
    }
}

/// Joins the provided values into a space-separated class list, skipping
/// empty and absent entries.
macro_rules! classes {
    ( $($part:expr),* $(,)? ) => {{
        let mut all_classes = Vec::new();

        $(
            if let Some(class) = $crate::classes::IntoClass::into_class($part) {
                all_classes.push(class);
            }
        )*

        all_classes.join(" ")
    }};
}

pub(crate) use classes;

/// Class list tests.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_classes() {
        assert_eq!(classes!("alert"), "alert");
        assert_eq!(classes!("alert", "alert-success"), "alert alert-success");
        assert_eq!(classes!("alert", "alert-info".to_owned()), "alert alert-info");
    }

    #[test]
    fn test_conditional_classes() {
        assert_eq!(classes!("toast", true.then_some("fade-out")), "toast fade-out");
        assert_eq!(classes!("toast", false.then_some("fade-out")), "toast");
        assert_eq!(classes!("sidebar", None::<String>), "sidebar");
        assert_eq!(
            classes!("sidebar", Some("sidebar-open".to_owned())),
            "sidebar sidebar-open"
        );
    }

    #[test]
    fn test_empty_classes_are_skipped() {
        assert_eq!(classes!(""), "");
        assert_eq!(classes!("button", "", Some(String::new())), "button");
    }
}
