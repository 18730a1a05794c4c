// options.rs - Build-time option flags.

use bitflags::bitflags;

bitflags! {
    /// Raw option flags for [`AutomatonBuilder::option`](crate::api::AutomatonBuilder::option).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Options: u32 {
        /// Treat patterns and texts as C strings: everything from the first
        /// zero byte on is ignored.
        const NUL_TERMINATED = 1;
        /// Always step the automaton byte by byte, even where the start
        /// state could skip ahead with `memchr`.
        const NO_PREFILTER = 1 << 1;
    }
}

impl Options {
    /// Cut `bytes` at its first zero byte when [`Options::NUL_TERMINATED`] is set.
    #[inline]
    pub(crate) fn effective<'b>(self, bytes: &'b [u8]) -> &'b [u8] {
        if !self.contains(Options::NUL_TERMINATED) {
            return bytes;
        }
        match memchr::memchr(0, bytes) {
            Some(end) => &bytes[..end],
            None => bytes,
        }
    }
}
