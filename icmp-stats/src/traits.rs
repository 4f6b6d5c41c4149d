pub use bytes::Buf;

/// Extension of [`Buf`] for buffers whose current chunk can be written to.
pub trait PktBufMut: Buf {
    /// A mutable chunk slice.
    fn chunk_mut(&mut self) -> &mut [u8];
}

impl<T: PktBufMut + ?Sized> PktBufMut for &mut T {
    #[inline]
    fn chunk_mut(&mut self) -> &mut [u8] {
        (**self).chunk_mut()
    }
}
