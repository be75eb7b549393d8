// Lowercases and treats `-`, `_` and spaces alike, so "objective-c" finds "Objective-C"
pub(crate) fn normalize(token: &str) -> String {
    token
        .trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Declares a fieldless enum whose variants serialize to fixed query tokens.
///
/// Generates `ALL`, `as_str`, `Display`, `serde::Serialize` (as the token) and a
/// case-insensitive `FromStr`. The literal after `as` names the enum in errors.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $kind:literal {
            $( $(#[$variant_meta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let wanted = $crate::token::normalize(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| $crate::token::normalize(candidate.as_str()) == wanted)
                    .ok_or_else(|| $crate::errors::Error::UnknownValue {
                        kind: $kind,
                        value: s.to_owned(),
                    })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

pub(crate) use token_enum;
