//! Closed Literal Enumerations
//!
//! This module provides the `literal_enum` macro, which declares an enumeration whose
//! wire representation is a closed set of string literals.
//!
//! # Generated Items
//!
//! - The enum itself, deriving serde (one `rename` per literal) and `JsonSchema`
//! - `LITERALS`, the ordered table of accepted wire values
//! - `as_str`, mapping a variant back to its literal
//! - `FromStr`, an exhaustive match that fails with [`SchemaError::UnrecognizedValue`]
//! - `Display` and `Default` (the first listed variant)
//!
//! The `LITERALS` table is what the schema model registers for the enumeration, so the
//! structural validator and the typed model accept exactly the same values.
//!
//! [`SchemaError::UnrecognizedValue`]: crate::model::SchemaError::UnrecognizedValue

#[macro_export]
/// `literal_enum` declares a closed enumeration of string literals.
///
/// ```ignore
/// literal_enum! {
///     /// Kind of an equation.
///     EquationType {
///         Assignment => "assignment",
///         Ode => "ode",
///     }
/// }
/// ```
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(#[$first_meta:meta])*
            $first:ident => $first_lit:tt
            $(, $(#[$variant_meta:meta])* $variant:ident => $lit:tt)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::schemars::JsonSchema,
        )]
        pub enum $name {
            $(#[$first_meta])*
            #[serde(rename = $first_lit)]
            $first,
            $(
                $(#[$variant_meta])*
                #[serde(rename = $lit)]
                $variant,
            )*
        }

        impl $name {
            /// Accepted wire values, in declaration order.
            pub const LITERALS: &'static [&'static str] = &[$first_lit $(, $lit)*];

            /// Returns the wire literal of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    Self::$first => $first_lit,
                    $(Self::$variant => $lit,)*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::model::SchemaError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $first_lit => Ok(Self::$first),
                    $($lit => Ok(Self::$variant),)*
                    other => Err($crate::model::SchemaError::UnrecognizedValue {
                        enumeration: stringify!($name).to_string(),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}
