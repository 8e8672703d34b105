/// Declares a serde-transparent `String` newtype with the usual derives and a `new`
/// constructor.
#[macro_export]
macro_rules! string_newtype {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            Default,
            serde::Serialize,
            serde::Deserialize,
            derive_more::Display,
            derive_more::Deref,
            derive_more::From,
            derive_more::Into,
            derive_more::AsRef,
        )]
        #[serde(transparent)]
        $vis struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
        }
    };
}
