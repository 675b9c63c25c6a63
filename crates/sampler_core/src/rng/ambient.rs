//! Per-thread ambient random source.
//!
//! Each thread lazily creates one entropy-seeded [`RandomSource`] the first
//! time it asks for one. Every [`ThreadSource`] handle obtained on that
//! thread shares the same state, so draws through any handle advance the
//! common sequence.

use std::cell::RefCell;
use std::rc::Rc;

use rand::distributions::uniform::SampleUniform;
use rand::RngCore;

use super::range::uniform_range;
use super::source::RandomSource;

thread_local! {
    static AMBIENT_SOURCE: Rc<RefCell<RandomSource>> = {
        let source = RandomSource::from_entropy();
        tracing::debug!(seed = source.seed(), "initialised ambient random source");
        Rc::new(RefCell::new(source))
    };
}

/// Handle to the calling thread's ambient [`RandomSource`].
///
/// Cheap to clone. The handle is `!Send`, which pins it to the thread that
/// created it.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::random_source;
///
/// let a = random_source(Some(99));
/// let b = random_source(None);
/// // Both handles observe the same ambient state.
/// assert_eq!(a.seed(), b.seed());
/// ```
#[derive(Clone, Debug)]
pub struct ThreadSource {
    inner: Rc<RefCell<RandomSource>>,
}

impl ThreadSource {
    /// Returns the seed of the ambient source.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.inner.borrow().seed()
    }

    /// Reseeds the ambient source for every handle on this thread.
    pub fn reseed(&self, seed: u64) {
        self.inner.borrow_mut().reseed(seed);
    }
}

impl RngCore for ThreadSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.borrow_mut().next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.borrow_mut().next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.borrow_mut().fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.borrow_mut().try_fill_bytes(dest)
    }
}

/// Returns the calling thread's ambient source, creating it on first use.
///
/// With `Some(seed)` the ambient state is replaced in place, so every
/// existing handle on this thread restarts from that seed as well.
///
/// # Examples
///
/// ```rust
/// use rand::Rng;
/// use sampler_core::rng::random_source;
///
/// let mut first = random_source(Some(1));
/// let a: u32 = first.gen();
///
/// let mut second = random_source(Some(1));
/// let b: u32 = second.gen();
/// assert_eq!(a, b);
/// ```
pub fn random_source(seed: Option<u64>) -> ThreadSource {
    let inner = AMBIENT_SOURCE.with(Rc::clone);
    if let Some(seed) = seed {
        inner.borrow_mut().reseed(seed);
    }
    ThreadSource { inner }
}

/// Draws one value from `[min, max]` using the ambient source.
///
/// Reversed bounds are swapped.
#[inline]
pub fn thread_uniform_range<T>(min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd,
{
    uniform_range(min, max, &mut random_source(None))
}
