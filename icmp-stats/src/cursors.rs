use bytes::Buf;

use crate::PktBufMut;

/// A read-only cursor over a contiguous byte slice.
#[derive(Debug)]
pub struct Cursor<'a> {
    chunk: &'a [u8],
    start_addr: *const u8,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor {
            chunk: buf,
            start_addr: buf.as_ptr(),
        }
    }

    /// The whole underlying slice, including consumed bytes.
    #[inline]
    pub fn buf(&self) -> &'a [u8] {
        unsafe { core::slice::from_raw_parts(self.start_addr, self.cursor() + self.chunk.len()) }
    }

    /// The remaining bytes, with the lifetime of the underlying slice.
    #[inline]
    pub fn chunk_shared_lifetime(&self) -> &'a [u8] {
        self.chunk
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn cursor(&self) -> usize {
        unsafe { self.chunk.as_ptr().offset_from(self.start_addr) as usize }
    }
}

// custom implementation for &[u8]
impl<'a> Buf for Cursor<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.chunk.len()
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        self.chunk
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.chunk.len());
        self.chunk = &self.chunk[cnt..];
    }
}

/// A mutable cursor over a contiguous byte slice.
#[derive(Debug)]
pub struct CursorMut<'a> {
    chunk: &'a mut [u8],
    start_addr: *const u8,
}

impl<'a> CursorMut<'a> {
    /// Create a mutable cursor positioned at the start of `buf`.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        let start_addr = buf.as_mut_ptr();
        CursorMut {
            chunk: buf,
            start_addr,
        }
    }

    /// The whole underlying slice, including consumed bytes.
    #[inline]
    pub fn buf(&self) -> &[u8] {
        unsafe { core::slice::from_raw_parts(self.start_addr, self.cursor() + self.chunk.len()) }
    }

    /// Consume the cursor, returning the remaining bytes.
    #[inline]
    pub fn chunk_mut_shared_lifetime(self) -> &'a mut [u8] {
        self.chunk
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn cursor(&self) -> usize {
        unsafe { self.chunk.as_ptr().offset_from(self.start_addr) as usize }
    }
}

impl<'a> Buf for CursorMut<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.chunk.len()
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        self.chunk
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.chunk.len());
        self.chunk = unsafe {
            core::slice::from_raw_parts_mut(self.chunk.as_mut_ptr().add(cnt), self.chunk.len() - cnt)
        };
    }
}

impl<'a> PktBufMut for CursorMut<'a> {
    #[inline]
    fn chunk_mut(&mut self) -> &mut [u8] {
        self.chunk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor() {
        let b = [10; 1000];
        for c_pos in 0..1001 {
            let mut cursor = Cursor::new(&b[..]);
            cursor.advance(c_pos);

            assert_eq!(c_pos, cursor.cursor());
            assert_eq!(cursor.buf(), &b[..]);
            assert_eq!(cursor.remaining(), 1000 - c_pos);
            assert_eq!(cursor.chunk(), &b[c_pos..]);
        }
    }

    #[test]
    fn test_cursor_mut() {
        let mut b = [10; 1000];
        let mut c: [u8; 1000] = [10; 1000];
        for c_pos in 0..1001 {
            let mut cursor = CursorMut::new(&mut b[..]);
            cursor.advance(c_pos);

            assert_eq!(c_pos, cursor.cursor());
            assert_eq!(cursor.buf(), &c[..]);
            assert_eq!(cursor.remaining(), 1000 - c_pos);
            assert_eq!(cursor.chunk_mut(), &mut c[c_pos..]);
        }
    }
}
