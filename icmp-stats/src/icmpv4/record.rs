#![allow(missing_docs)]

use byteorder::{ByteOrder, NetworkEndian};

use crate::{Buf, Counter, Cursor, CursorMut, PktBufMut};

use super::stats::Icmpv4Stats;
use super::{Direction, StatKind};

/// A constant that defines the fixed byte length of the ICMPv4 statistics
/// record image: 26 counters of 8 bytes each.
pub const ICMPV4_STATS_RECORD_LEN: usize = 208;
/// A fixed ICMPv4 statistics record image with all counters at zero.
pub const ICMPV4_STATS_RECORD_TEMPLATE: [u8; 208] = [0; 208];

record_field_range_accessors! {
    (in_msgs, in_msgs_mut, 0..8),
    (in_errors, in_errors_mut, 8..16),
    (in_dest_unreachs, in_dest_unreachs_mut, 16..24),
    (in_time_excds, in_time_excds_mut, 24..32),
    (in_parm_probs, in_parm_probs_mut, 32..40),
    (in_src_quenchs, in_src_quenchs_mut, 40..48),
    (in_redirects, in_redirects_mut, 48..56),
    (in_echos, in_echos_mut, 56..64),
    (in_echo_reps, in_echo_reps_mut, 64..72),
    (in_timestamps, in_timestamps_mut, 72..80),
    (in_timestamp_reps, in_timestamp_reps_mut, 80..88),
    (in_addr_masks, in_addr_masks_mut, 88..96),
    (in_addr_mask_reps, in_addr_mask_reps_mut, 96..104),
    (out_msgs, out_msgs_mut, 104..112),
    (out_errors, out_errors_mut, 112..120),
    (out_dest_unreachs, out_dest_unreachs_mut, 120..128),
    (out_time_excds, out_time_excds_mut, 128..136),
    (out_parm_probs, out_parm_probs_mut, 136..144),
    (out_src_quenchs, out_src_quenchs_mut, 144..152),
    (out_redirects, out_redirects_mut, 152..160),
    (out_echos, out_echos_mut, 160..168),
    (out_echo_reps, out_echo_reps_mut, 168..176),
    (out_timestamps, out_timestamps_mut, 176..184),
    (out_timestamp_reps, out_timestamp_reps_mut, 184..192),
    (out_addr_masks, out_addr_masks_mut, 192..200),
    (out_addr_mask_reps, out_addr_mask_reps_mut, 200..208),
}

/// A typed view over a fixed memory image of [`Icmpv4Stats`].
///
/// Counters are stored as 8-byte big-endian values at the field ordinals of
/// the owned record.
#[derive(Debug, Clone, Copy)]
pub struct Icmpv4StatsRecord<T> {
    buf: T,
}

impl<T: Buf> Icmpv4StatsRecord<T> {
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }

    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        let chunk_len = buf.chunk().len();
        if chunk_len < ICMPV4_STATS_RECORD_LEN {
            return Err(buf);
        }
        Ok(Self { buf })
    }

    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }

    #[inline]
    pub fn release(self) -> T {
        self.buf
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.chunk()[0..ICMPV4_STATS_RECORD_LEN]
    }

    /// Step over this record, exposing whatever follows it in the buffer.
    #[inline]
    pub fn payload(self) -> T {
        let mut buf = self.buf;
        buf.advance(ICMPV4_STATS_RECORD_LEN);
        buf
    }

    /// The counter of category `kind` in direction `dir`.
    #[inline]
    pub fn counter(&self, dir: Direction, kind: StatKind) -> Counter {
        let block = match dir {
            Direction::In => 0,
            Direction::Out => 13,
        };
        let offset = (block + kind.ordinal()) * 8;
        Counter::new(NetworkEndian::read_u64(
            &self.buf.chunk()[offset..offset + 8],
        ))
    }

    /// Copy the whole image into an owned [`Icmpv4Stats`].
    pub fn to_stats(&self) -> Icmpv4Stats {
        let mut stats = Icmpv4Stats::default();
        for dir in Direction::ALL {
            for kind in StatKind::ALL {
                *stats.counter_mut(dir, kind) = self.counter(dir, kind);
            }
        }
        stats
    }

    #[inline]
    pub fn in_msgs(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_msgs(self.buf.chunk())))
    }

    #[inline]
    pub fn in_errors(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_errors(self.buf.chunk())))
    }

    #[inline]
    pub fn in_dest_unreachs(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_dest_unreachs(self.buf.chunk())))
    }

    #[inline]
    pub fn in_time_excds(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_time_excds(self.buf.chunk())))
    }

    #[inline]
    pub fn in_parm_probs(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_parm_probs(self.buf.chunk())))
    }

    #[inline]
    pub fn in_src_quenchs(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_src_quenchs(self.buf.chunk())))
    }

    #[inline]
    pub fn in_redirects(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_redirects(self.buf.chunk())))
    }

    #[inline]
    pub fn in_echos(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_echos(self.buf.chunk())))
    }

    #[inline]
    pub fn in_echo_reps(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_echo_reps(self.buf.chunk())))
    }

    #[inline]
    pub fn in_timestamps(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_timestamps(self.buf.chunk())))
    }

    #[inline]
    pub fn in_timestamp_reps(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_timestamp_reps(self.buf.chunk())))
    }

    #[inline]
    pub fn in_addr_masks(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_addr_masks(self.buf.chunk())))
    }

    #[inline]
    pub fn in_addr_mask_reps(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(in_addr_mask_reps(self.buf.chunk())))
    }

    #[inline]
    pub fn out_msgs(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_msgs(self.buf.chunk())))
    }

    #[inline]
    pub fn out_errors(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_errors(self.buf.chunk())))
    }

    #[inline]
    pub fn out_dest_unreachs(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_dest_unreachs(self.buf.chunk())))
    }

    #[inline]
    pub fn out_time_excds(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_time_excds(self.buf.chunk())))
    }

    #[inline]
    pub fn out_parm_probs(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_parm_probs(self.buf.chunk())))
    }

    #[inline]
    pub fn out_src_quenchs(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_src_quenchs(self.buf.chunk())))
    }

    #[inline]
    pub fn out_redirects(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_redirects(self.buf.chunk())))
    }

    #[inline]
    pub fn out_echos(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_echos(self.buf.chunk())))
    }

    #[inline]
    pub fn out_echo_reps(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_echo_reps(self.buf.chunk())))
    }

    #[inline]
    pub fn out_timestamps(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_timestamps(self.buf.chunk())))
    }

    #[inline]
    pub fn out_timestamp_reps(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_timestamp_reps(
            self.buf.chunk(),
        )))
    }

    #[inline]
    pub fn out_addr_masks(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_addr_masks(self.buf.chunk())))
    }

    #[inline]
    pub fn out_addr_mask_reps(&self) -> Counter {
        Counter::new(NetworkEndian::read_u64(out_addr_mask_reps(
            self.buf.chunk(),
        )))
    }
}

impl<T: PktBufMut> Icmpv4StatsRecord<T> {
    /// Overwrite the counter of category `kind` in direction `dir`.
    #[inline]
    pub fn set_counter(&mut self, dir: Direction, kind: StatKind, value: Counter) {
        let block = match dir {
            Direction::In => 0,
            Direction::Out => 13,
        };
        let offset = (block + kind.ordinal()) * 8;
        NetworkEndian::write_u64(&mut self.buf.chunk_mut()[offset..offset + 8], value.raw());
    }

    /// Overwrite the whole image from an owned [`Icmpv4Stats`].
    pub fn set_stats(&mut self, stats: &Icmpv4Stats) {
        for dir in Direction::ALL {
            for kind in StatKind::ALL {
                self.set_counter(dir, kind, stats.counter(dir, kind));
            }
        }
    }

    #[inline]
    pub fn set_in_msgs(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_msgs_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_in_errors(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_errors_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_in_dest_unreachs(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_dest_unreachs_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_in_time_excds(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_time_excds_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_in_parm_probs(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_parm_probs_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_in_src_quenchs(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_src_quenchs_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_in_redirects(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_redirects_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_in_echos(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_echos_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_in_echo_reps(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_echo_reps_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_in_timestamps(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_timestamps_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_in_timestamp_reps(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_timestamp_reps_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_in_addr_masks(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_addr_masks_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_in_addr_mask_reps(&mut self, value: Counter) {
        NetworkEndian::write_u64(in_addr_mask_reps_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_msgs(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_msgs_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_errors(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_errors_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_dest_unreachs(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_dest_unreachs_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_time_excds(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_time_excds_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_parm_probs(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_parm_probs_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_src_quenchs(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_src_quenchs_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_redirects(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_redirects_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_echos(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_echos_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_echo_reps(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_echo_reps_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_timestamps(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_timestamps_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_timestamp_reps(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_timestamp_reps_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_addr_masks(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_addr_masks_mut(self.buf.chunk_mut()), value.raw())
    }

    #[inline]
    pub fn set_out_addr_mask_reps(&mut self, value: Counter) {
        NetworkEndian::write_u64(out_addr_mask_reps_mut(self.buf.chunk_mut()), value.raw())
    }
}

impl<'a> Icmpv4StatsRecord<Cursor<'a>> {
    #[inline]
    pub fn parse_from_cursor(buf: Cursor<'a>) -> Result<Self, Cursor<'a>> {
        let remaining_len = buf.chunk().len();
        if remaining_len < ICMPV4_STATS_RECORD_LEN {
            return Err(buf);
        }
        Ok(Self { buf })
    }

    #[inline]
    pub fn payload_as_cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf.chunk()[ICMPV4_STATS_RECORD_LEN..])
    }

    #[inline]
    pub fn from_record_array(record_array: &'a [u8; ICMPV4_STATS_RECORD_LEN]) -> Self {
        Self {
            buf: Cursor::new(record_array.as_slice()),
        }
    }

    #[inline]
    pub fn default_record() -> [u8; ICMPV4_STATS_RECORD_LEN] {
        ICMPV4_STATS_RECORD_TEMPLATE
    }
}

impl<'a> Icmpv4StatsRecord<CursorMut<'a>> {
    #[inline]
    pub fn parse_from_cursor_mut(buf: CursorMut<'a>) -> Result<Self, CursorMut<'a>> {
        let remaining_len = buf.chunk().len();
        if remaining_len < ICMPV4_STATS_RECORD_LEN {
            return Err(buf);
        }
        Ok(Self { buf })
    }

    #[inline]
    pub fn from_record_array_mut(record_array: &'a mut [u8; ICMPV4_STATS_RECORD_LEN]) -> Self {
        Self {
            buf: CursorMut::new(record_array.as_mut_slice()),
        }
    }
}
