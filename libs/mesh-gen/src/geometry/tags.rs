//! Entity tags. Each kind is numbered independently from 1.

use std::fmt;

macro_rules! entity_tag {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// The 1-based tag value.
            #[inline]
            pub fn get(self) -> u32 {
                self.0
            }

            #[inline]
            pub(crate) fn from_index(index: usize) -> Self {
                Self(index as u32 + 1)
            }

            #[inline]
            pub(crate) fn index(self) -> usize {
                self.0 as usize - 1
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_tag!(
    /// Tag of a geometric point.
    PointTag
);
entity_tag!(
    /// Tag of a straight line between two points.
    LineTag
);
entity_tag!(
    /// Tag of a closed curve loop.
    LoopTag
);
entity_tag!(
    /// Tag of a plane surface.
    SurfaceTag
);
