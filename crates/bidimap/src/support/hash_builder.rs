/// Default hasher for [`BidiMap`](crate::BidiMap).
///
/// Both the forward and the inverse index use a clone of the same hasher.
#[cfg(feature = "default-hasher")]
pub type DefaultHashBuilder = foldhash::fast::RandomState;

#[cfg(not(feature = "default-hasher"))]
mod uninhabited {
    use core::hash::{BuildHasher, Hasher};

    /// Placeholder for the default hasher when the `default-hasher` feature
    /// is disabled.
    ///
    /// This type has no values, so maps must be constructed with an explicit
    /// hasher via [`BidiMap::with_hasher`](crate::BidiMap::with_hasher).
    #[derive(Clone, Copy, Debug)]
    pub enum DefaultHashBuilder {}

    impl BuildHasher for DefaultHashBuilder {
        type Hasher = Self;

        fn build_hasher(&self) -> Self::Hasher {
            match *self {}
        }
    }

    impl Hasher for DefaultHashBuilder {
        fn write(&mut self, _bytes: &[u8]) {
            match *self {}
        }

        fn finish(&self) -> u64 {
            match *self {}
        }
    }
}

#[cfg(not(feature = "default-hasher"))]
pub use uninhabited::DefaultHashBuilder;
