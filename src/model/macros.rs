//! String labels for the crate's enums.
//!
//! Terrains, resources, directions and the like travel as lowercase labels in
//! JSON documents and config files. The enums derive serde with
//! `#[serde(into = "String", try_from = "String")]` and get the conversions
//! from one of the macros below.

/// Label conversions for an enum whose variants are fixed.
///
/// Emits `ALL` (declaration order), `as_str`, `Display`, `FromStr`, and the
/// `String` conversions serde goes through. `$label` names the enum in parse
/// errors: `unknown terrain 'lava'`.
macro_rules! labelled_enum {
    ($name:ident, $label:expr, { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok($name::$variant),)+
                    other => Err(format!("unknown {} '{other}'", $label)),
                }
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.as_str().to_owned()
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}

/// Like [`labelled_enum!`], for enums that also accept user-defined labels
/// through a `Custom(String)` variant (naming styles from a config file).
///
/// `BUILTIN` holds the named variants. Any non-empty label parses.
macro_rules! labelled_enum_open {
    ($name:ident, $label:expr, { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $name {
            pub const BUILTIN: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $str,)+
                    $name::Custom(s) => s,
                }
            }

            pub fn is_custom(&self) -> bool {
                matches!(self, $name::Custom(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                match v {
                    $name::Custom(s) => s,
                    builtin => builtin.as_str().to_owned(),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                if s.is_empty() {
                    return Err(format!("{} label is empty", $label));
                }
                Ok(match s.as_str() {
                    $($str => $name::$variant,)+
                    _ => $name::Custom(s),
                })
            }
        }
    };
}
