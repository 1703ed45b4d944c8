//! Open enumerations.
//!
//! The platform adds enumeration values without notice, so every coded enum
//! keeps an `Unknown` variant carrying the raw value and converts both ways
//! without loss.

/// Define an integer-coded enum with an `Unknown(raw)` fallback.
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $repr:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Value unknown to this version of the library.
            Unknown($repr),
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    unknown => Self::Unknown(unknown),
                }
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $value,)+
                    $name::Unknown(unknown) => unknown,
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <$repr as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&<$repr>::from(*self), serializer)
            }
        }
    };
}

/// Define a string-coded enum with an `Unknown(raw)` fallback.
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Value unknown to this version of the library.
            Unknown(String),
        }

        impl $name {
            /// The wire token.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(unknown) => unknown,
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    unknown => Self::Unknown(unknown.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

pub(crate) use {int_enum, str_enum};

#[cfg(test)]
mod tests {
    use serde_test::Token;

    int_enum! {
        /// Test enum.
        pub enum Level: u8 {
            Low = 0,
            High = 1,
        }
    }

    str_enum! {
        /// Test enum.
        pub enum Mood {
            Calm = "calm",
        }
    }

    #[test]
    fn unknown_integers_round_trip() {
        assert_eq!(Level::from(1), Level::High);
        assert_eq!(Level::from(9), Level::Unknown(9));
        assert_eq!(u8::from(Level::Unknown(9)), 9);

        serde_test::assert_tokens(&Level::Low, &[Token::U8(0)]);
        serde_test::assert_tokens(&Level::Unknown(200), &[Token::U8(200)]);
    }

    #[test]
    fn unknown_strings_round_trip() {
        assert_eq!(Mood::from("calm"), Mood::Calm);
        assert_eq!(Mood::from("grumpy"), Mood::Unknown("grumpy".to_owned()));

        serde_test::assert_tokens(&Mood::Calm, &[Token::Str("calm")]);
        serde_test::assert_tokens(&Mood::from("grumpy"), &[Token::Str("grumpy")]);
    }
}
