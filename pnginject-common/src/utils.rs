/// Declares an enum for four byte tags like PNG chunk types
///
/// Every listed variant is bound to a byte string literal. Tags that are not
/// listed end up in the generated `Unknown` variant, so conversion from bytes
/// never fails.
///
/// ```
/// # use pnginject_common::utils::tag_enum;
/// tag_enum!(
///     #[derive(Debug, PartialEq)]
///     pub enum Tag {
///         Head = b"HEAD",
///         Tail = b"TAIL",
///     }
/// );
/// let bytes: [u8; 4] = Tag::Tail.into();
/// assert_eq!(&bytes, b"TAIL");
/// assert_eq!(Tag::from(*b"HEAD"), Tag::Head);
/// assert_eq!(Tag::from(*b"what"), Tag::Unknown(*b"what"));
/// ```
#[macro_export]
macro_rules! tag_enum {
    ($(#[$meta:meta])* $visibility:vis enum $enum_name:ident {
        $($(#[$variant_meta:meta])* $variant_name:ident = $variant_value:literal,)*
    }) => {
        $(#[$meta])*
        $visibility enum $enum_name {
            $($(#[$variant_meta])* $variant_name,)*
            Unknown([u8; 4]),
        }

        impl std::convert::From<[u8; 4]> for $enum_name {
            fn from(v: [u8; 4]) -> Self {
                match &v {
                    $($variant_value => Self::$variant_name,)*
                    _ => Self::Unknown(v),
                }
            }
        }

        impl std::convert::From<$enum_name> for [u8; 4] {
            fn from(v: $enum_name) -> [u8; 4] {
                match v {
                    $($enum_name::$variant_name => *$variant_value,)*
                    $enum_name::Unknown(other) => other,
                }
            }
        }
    }
}

pub use tag_enum;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Value does not fit into the platform's usize")]
pub struct ConversionOverflowError;

pub trait U32Ext {
    fn usize(self) -> Result<usize, ConversionOverflowError>;
}

impl U32Ext for u32 {
    fn usize(self) -> Result<usize, ConversionOverflowError> {
        self.try_into().map_err(|_| ConversionOverflowError)
    }
}

pub trait UsizeExt {
    fn u32(self) -> Result<u32, ConversionOverflowError>;
}

impl UsizeExt for usize {
    fn u32(self) -> Result<u32, ConversionOverflowError> {
        self.try_into().map_err(|_| ConversionOverflowError)
    }
}
