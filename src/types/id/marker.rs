use crate::internal::Sealed;

macro_rules! markers {
    { $( $ident:ident, )* } => {$(
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $ident;
        impl Sealed for $ident {}
        impl Marker for $ident {}
    )*};
}

markers! {
    AnyMarker,
    UserMarker,
}

/// This trait represents a marker restricting all objects
/// from using it as a generic in [`super::Id`] object.
pub trait Marker: Sealed {}
