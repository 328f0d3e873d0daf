// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

/// Enums whose member names can be listed at runtime.
///
/// Configuration validation builds its accepted-value set from `VARIANTS`.
pub trait NamedVariants: Sized + 'static {
    /// Member names, in declaration order
    const VARIANTS: &'static [&'static str];

    /// Member with exactly this name (case-sensitive)
    fn from_name(name: &str) -> Option<Self>;
}

/// Declares an enum together with its `NamedVariants` impl.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl NamedVariants for $name {
            const VARIANTS: &'static [&'static str] = &[$( stringify!($variant) ),+];

            fn from_name(name: &str) -> Option<Self> {
                $(
                    if name == stringify!($variant) {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl $name {
            pub fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }
        }
    };
}

named_enum! {
    /// Direction of the case change applied to selected string fields
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Case {
        Uppercase,
        Lowercase,
    }
}

impl Case {
    /// Apply the case mapping to a string.
    ///
    /// Uses Unicode default (locale-independent) case mapping, so results do not
    /// depend on the host environment. Some characters map to several
    /// (e.g. `ß` uppercases to `SS`).
    pub fn apply(&self, text: &str) -> String {
        match self {
            Case::Uppercase => text.to_uppercase(),
            Case::Lowercase => text.to_lowercase(),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Case::from_name(s).ok_or_else(|| {
            format!("Unknown case '{}', expected one of: {}", s, Case::VARIANTS.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_in_declaration_order() {
        assert_eq!(Case::VARIANTS, &["Uppercase", "Lowercase"]);
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Case::from_name("Uppercase"), Some(Case::Uppercase));
        assert_eq!(Case::from_name("Lowercase"), Some(Case::Lowercase));
        assert_eq!(Case::from_name("uppercase"), None);
        assert_eq!(Case::from_name("LOWERCASE"), None);
        assert_eq!(Case::from_name(""), None);
    }

    #[test]
    fn test_every_variant_name_parses_back() {
        for name in Case::VARIANTS {
            let case: Case = name.parse().unwrap();
            assert_eq!(case.name(), *name);
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(Case::Uppercase.apply("this is lower text"), "THIS IS LOWER TEXT");
        assert_eq!(Case::Lowercase.apply("MiXeD 123"), "mixed 123");
        assert_eq!(Case::Uppercase.apply("straße"), "STRASSE");
        assert_eq!(Case::Uppercase.apply("istanbul"), "ISTANBUL");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let samples = ["John", "straße", "ǆemal", "Ünïcödé", ""];
        for case in [Case::Uppercase, Case::Lowercase] {
            for sample in samples {
                let once = case.apply(sample);
                assert_eq!(case.apply(&once), once);
            }
        }
    }
}
