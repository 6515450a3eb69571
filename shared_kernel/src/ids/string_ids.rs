/// Declares an opaque string identifier. Ids are compared as plain strings,
/// `"034"` and `"34"` are different keys.
#[macro_export]
macro_rules! string_key {
    ($TypeName: ident) => {
        #[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $TypeName(String);

        impl $TypeName {
            pub fn inner(&self) -> String {
                self.0.clone()
            }
        }

        impl PartialEq<str> for $TypeName {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}
